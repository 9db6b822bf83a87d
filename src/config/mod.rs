//! # Configuration Module
//!
//! OpenID 클라이언트의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`auth_config`] - realm, return URL, 지원 프로바이더
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{load_env, OpenIdConfig};
//!
//! load_env();
//! let return_url = OpenIdConfig::default_return_url();
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! export OPENID_REALM="https://app.example.com/"
//! export OPENID_DEFAULT_RETURN_URL="https://app.example.com/auth/openid/callback"
//! ```

pub mod auth_config;

pub use auth_config::*;

/// `.env` 파일을 읽어 프로세스 환경 변수에 반영합니다.
///
/// 파일이 없으면 조용히 넘어갑니다. 호스트 애플리케이션이 시작 시 한 번 호출합니다.
pub fn load_env() {
    match dotenv::dotenv() {
        Ok(path) => log::debug!(".env 로드 완료: {}", path.display()),
        Err(_) => log::debug!(".env 파일 없음, 프로세스 환경 변수만 사용"),
    }
}
