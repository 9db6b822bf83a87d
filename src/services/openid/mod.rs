//! OpenID Relying Party 서비스 모듈
//!
//! 외부 Relying Party 엔진 위에서 프로바이더별 클라이언트를 구동합니다.
//!
//! # Features
//!
//! - [`RelyingPartyEngine`] - 외부 OpenID 라이브러리 경계 (디스커버리, 검증)
//! - [`OpenIdClient`] - 프로바이더별 capability trait
//! - [`GoogleOpenIdClient`] - Google OP 식별자 + AX 속성 요청/추출
//! - [`OpenIdAuthFlow`] - 요청 생성과 응답 검증 순서 제어
//! - [`OpenIdClientRegistry`] - 이름 기반 클라이언트 조회
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::openid::{OpenIdAuthFlow, OpenIdClientRegistry};
//!
//! let google = OpenIdClientRegistry::global().require("google")?;
//! let redirect = flow.request_authentication(google.as_ref(), &return_url).await?;
//! ```

pub mod client_registry;
pub mod google_openid_client;
pub mod openid_client;
pub mod relying_party;

#[cfg(test)]
pub(crate) mod test_support;

pub use client_registry::*;
pub use google_openid_client::*;
pub use openid_client::*;
pub use relying_party::*;
