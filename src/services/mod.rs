//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! OpenID 프로바이더 클라이언트, 인증 플로우, 클라이언트 레지스트리를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::openid::{GoogleOpenIdClient, OpenIdAuthFlow};
//!
//! let flow = OpenIdAuthFlow::from_config(engine);
//! let redirect = flow.request_authentication(&GoogleOpenIdClient::new(), return_url).await?;
//! ```

pub mod openid;
