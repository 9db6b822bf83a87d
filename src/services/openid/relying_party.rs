//! # Relying Party 엔진 경계
//!
//! OpenID 프로토콜을 실제로 수행하는 외부 라이브러리와의 접점입니다.
//! 디스커버리, 연관(association), nonce/서명 검증, 확장 와이어 인코딩은 모두
//! 엔진 구현체의 책임이며, 이 크레이트는 아래 trait을 통해서만 엔진을 사용합니다.
//!
//! ## 호출 순서
//!
//! ```text
//! OpenIdAuthFlow                      RelyingPartyEngine
//!      │ create_request(id, realm, return_to)  │
//!      ├──────────────────────────────────────►│  디스커버리 + 연관
//!      │◄──────── Box<dyn AuthenticationRequest>
//!      │ client.prepare_outgoing_request(..)   │
//!      │ request.redirect_url()                │
//!      ...                                     ...
//!      │ get_response(callback params)         │
//!      ├──────────────────────────────────────►│  서명/nonce 검증
//!      │◄──────── Option<Box<dyn AuthenticationResponse>>
//! ```

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::models::openid::{AuthenticationStatus, FetchResponse, OpenIdExtension};
use crate::errors::AppResult;

/// OP로 보내기 직전의 인증 요청
///
/// 엔진이 생성하며, 프로바이더 클라이언트는 확장을 첨부할 수만 있습니다.
pub trait AuthenticationRequest: Send {
    /// 요청에 확장을 첨부합니다.
    fn add_extension(&mut self, extension: OpenIdExtension);

    /// 지금까지 첨부된 확장 목록
    fn extensions(&self) -> &[OpenIdExtension];

    /// 사용자 브라우저를 보낼 OP 엔드포인트 URL
    ///
    /// 첨부된 확장을 포함한 indirect message를 인코딩합니다.
    fn redirect_url(&self) -> AppResult<String>;
}

/// 엔진이 수신하고 검증한 인증 응답
pub trait AuthenticationResponse: Send + Sync {
    fn status(&self) -> AuthenticationStatus;

    /// 검증된 claimed identifier. 긍정 응답이 아니면 없을 수 있습니다.
    fn claimed_identifier(&self) -> Option<&str>;

    /// 사용자에게 보여줄 수 있는 형태의 식별자
    fn friendly_identifier_for_display(&self) -> Option<&str> {
        None
    }

    /// 응답에 포함된 확장 목록 (검증된 서명 범위 내)
    fn extensions(&self) -> &[OpenIdExtension];

    /// 실패/취소 시 엔진이 남긴 사유
    fn failure_reason(&self) -> Option<&str> {
        None
    }

    /// AX fetch 응답 확장을 찾습니다.
    ///
    /// 프로바이더가 확장을 보내지 않았거나 사용자가 공유를 거부했으면 `None`입니다.
    fn fetch_response(&self) -> Option<&FetchResponse> {
        self.extensions().iter().find_map(OpenIdExtension::as_fetch_response)
    }
}

/// 외부 OpenID Relying Party 엔진
#[async_trait]
pub trait RelyingPartyEngine: Send + Sync {
    /// 사용자 공급 식별자(또는 OP 식별자)로 인증 요청을 만듭니다.
    ///
    /// # 인자
    ///
    /// * `identifier` - 디스커버리 대상 식별자
    /// * `realm` - RP realm (`https://app.example.com/`)
    /// * `return_to` - OP가 응답을 돌려보낼 URL
    async fn create_request(
        &self,
        identifier: &str,
        realm: &str,
        return_to: &str,
    ) -> AppResult<Box<dyn AuthenticationRequest>>;

    /// 콜백 요청 파라미터에서 OpenID 응답을 읽고 검증합니다.
    ///
    /// 파라미터에 OpenID 응답이 없으면 `Ok(None)`을 반환합니다.
    async fn get_response(
        &self,
        params: &HashMap<String, String>,
    ) -> AppResult<Option<Box<dyn AuthenticationResponse>>>;
}
