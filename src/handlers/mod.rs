//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! ActixWeb 프레임워크를 기반으로 구현되었으며, 비즈니스 로직은 서비스 계층에 위임합니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리
//! ├─────────────────────────────────────────────┤
//!   OpenIdAuthFlow / OpenIdClientRegistry
//! ├─────────────────────────────────────────────┤
//!   RelyingPartyEngine (외부 라이브러리)
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//! 에러는 `ResponseError` 구현을 통해 JSON 응답으로 변환됩니다.

pub mod openid;

pub use openid::*;
