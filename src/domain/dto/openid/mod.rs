//! OpenID 엔드포인트용 DTO

pub mod request;

pub use request::*;
