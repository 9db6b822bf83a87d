//! 외부 로그인 결과 모델

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// 프로바이더 응답에서 추출한 부가 사용자 데이터
///
/// 키는 `"email"`, `"country"`, `"firstName"`, `"lastName"` 같은 짧은 이름이며,
/// 값이 비어 있는 항목은 포함되지 않습니다.
pub type ExtraData = HashMap<String, String>;

/// 엔진이 판정한 OpenID 응답 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthenticationStatus {
    /// 서명 검증까지 끝난 긍정 응답
    Authenticated,
    /// 사용자가 프로바이더에서 로그인을 취소함
    Canceled,
    /// 검증 실패
    Failed,
    /// 즉시 모드 요청에 사용자 상호작용이 필요함
    SetupRequired,
    /// 식별자 없이 확장만 담긴 응답
    ExtensionsOnly,
}

/// 외부 로그인 결과
///
/// 성공 시 프로바이더, 프로바이더 측 사용자 식별자, 표시용 사용자 이름과
/// 부가 데이터를 담습니다. 실패 시 `error`에 사유가 들어갈 수 있습니다.
///
/// ```json
/// {
///   "is_successful": true,
///   "provider": "google",
///   "provider_user_id": "https://www.google.com/accounts/o8/id?id=AItOawk",
///   "user_name": "user@gmail.com",
///   "extra_data": { "email": "user@gmail.com", "firstName": "Jane" },
///   "error": null
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationResult {
    pub is_successful: bool,
    pub provider: Option<String>,
    pub provider_user_id: Option<String>,
    pub user_name: Option<String>,
    #[serde(default)]
    pub extra_data: ExtraData,
    pub error: Option<String>,
}

impl AuthenticationResult {
    /// 성공 결과를 생성합니다.
    pub fn succeeded(
        provider: impl Into<String>,
        provider_user_id: impl Into<String>,
        user_name: impl Into<String>,
        extra_data: ExtraData,
    ) -> Self {
        Self {
            is_successful: true,
            provider: Some(provider.into()),
            provider_user_id: Some(provider_user_id.into()),
            user_name: Some(user_name.into()),
            extra_data,
            error: None,
        }
    }

    /// 사유 없는 실패 결과
    pub fn failed() -> Self {
        Self {
            is_successful: false,
            provider: None,
            provider_user_id: None,
            user_name: None,
            extra_data: ExtraData::new(),
            error: None,
        }
    }

    /// 사유가 있는 실패 결과
    pub fn from_error(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::failed()
        }
    }

    /// 결과에 프로바이더 이름을 기록합니다.
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }
}
