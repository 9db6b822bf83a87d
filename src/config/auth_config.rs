//! # OpenID 인증 설정
//!
//! Relying Party 측 OpenID 설정과 지원 프로바이더 목록을 관리합니다.
//! 모든 값은 환경 변수에서 읽으며, 설정되지 않은 경우 개발용 기본값을 사용합니다.
//!
//! ## 환경 변수
//!
//! | 변수 | 기본값 | 설명 |
//! |------|--------|------|
//! | `OPENID_REALM` | (없음) | 고정 realm. 없으면 return URL의 origin 사용 |
//! | `OPENID_DEFAULT_RETURN_URL` | `http://localhost:8080/auth/openid/callback` | 기본 return URL |
//!
//! 프로바이더 식별자 엔드포인트는 설정 대상이 아닙니다.
//! 각 프로바이더 클라이언트가 상수로 고정합니다.

use std::env;

/// OpenID Relying Party 설정
pub struct OpenIdConfig;

impl OpenIdConfig {
    /// 고정 realm 값을 반환합니다.
    ///
    /// realm은 사용자가 프로바이더 동의 화면에서 보게 되는 사이트 식별자입니다.
    /// `OPENID_REALM`이 비어 있거나 없으면 `None`을 반환하고,
    /// 이 경우 인증 플로우가 return URL에서 realm을 계산합니다.
    pub fn realm() -> Option<String> {
        env::var("OPENID_REALM")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    /// 로그인 요청에 return URL이 없을 때 사용할 기본값
    pub fn default_return_url() -> String {
        env::var("OPENID_DEFAULT_RETURN_URL")
            .unwrap_or_else(|_| "http://localhost:8080/auth/openid/callback".to_string())
    }
}

/// 지원하는 OpenID 프로바이더를 나타내는 열거형
///
/// 새로운 프로바이더 추가 시 이 열거형에 변형을 추가하고,
/// 해당 프로바이더의 `OpenIdClient` 구현을 레지스트리에 등록하면 됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    /// Google OpenID (`https://www.google.com/accounts/o8/id`)
    Google,
}

impl AuthProvider {
    /// AuthProvider를 소문자 문자열로 변환합니다.
    ///
    /// 레지스트리 키와 프로바이더 클라이언트 이름으로 쓰입니다.
    pub const fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Google => "google",
        }
    }
}
