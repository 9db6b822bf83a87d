//! OpenID 요청 관련 DTO
//!
//! 로그인 시작 요청의 쿼리 파라미터를 매핑합니다.
use serde::Deserialize;
use validator::Validate;

/// OpenID 로그인 시작 쿼리 파라미터 구조체
#[derive(Debug, Default, Deserialize, Validate)]
pub struct OpenIdLoginQuery {
    /// 인증 완료 후 돌아올 절대 URL (없으면 설정 기본값 사용)
    #[validate(url(message = "return_url은 절대 URL이어야 합니다"))]
    pub return_url: Option<String>,
}
