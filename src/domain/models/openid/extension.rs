//! OpenID 확장 메시지
//!
//! 인증 요청/응답에 붙는 확장을 하나의 열거형으로 표현합니다.
//! 엔진은 이 값을 받아 자신의 와이어 포맷으로 인코딩합니다.

use super::attribute_exchange::{FetchRequest, FetchResponse};

/// 인증 메시지에 첨부되는 OpenID 확장
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenIdExtension {
    /// AX fetch 요청 (RP → OP)
    FetchRequest(FetchRequest),
    /// AX fetch 응답 (OP → RP)
    FetchResponse(FetchResponse),
}

impl OpenIdExtension {
    pub fn as_fetch_request(&self) -> Option<&FetchRequest> {
        match self {
            OpenIdExtension::FetchRequest(request) => Some(request),
            _ => None,
        }
    }

    pub fn as_fetch_response(&self) -> Option<&FetchResponse> {
        match self {
            OpenIdExtension::FetchResponse(response) => Some(response),
            _ => None,
        }
    }
}

impl From<FetchRequest> for OpenIdExtension {
    fn from(request: FetchRequest) -> Self {
        OpenIdExtension::FetchRequest(request)
    }
}

impl From<FetchResponse> for OpenIdExtension {
    fn from(response: FetchResponse) -> Self {
        OpenIdExtension::FetchResponse(response)
    }
}
