//! # OpenID 도메인 모델
//!
//! OpenID 2.0 Relying Party 흐름에서 주고받는 값 객체들을 정의합니다.
//!
//! ## 구성
//!
//! - [`attribute_exchange`] - AX fetch 요청/응답과 잘 알려진 속성 URI
//! - [`extension`] - 인증 메시지에 첨부되는 확장
//! - [`authentication_result`] - 외부 로그인 결과와 부가 데이터
//!
//! ## 데이터 흐름
//!
//! ```text
//! OpenIdClient::prepare_outgoing_request
//!     └─► FetchRequest ─► OpenIdExtension ─► AuthenticationRequest (엔진)
//!
//! AuthenticationResponse (엔진)
//!     └─► FetchResponse ─► OpenIdClient::extract_attributes ─► ExtraData
//!                                                             └─► AuthenticationResult
//! ```

pub mod attribute_exchange;
pub mod authentication_result;
pub mod extension;

pub use attribute_exchange::*;
pub use authentication_result::*;
pub use extension::*;
