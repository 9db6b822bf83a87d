//! 에러 모듈
//!
//! 크레이트 전역에서 사용하는 [`AppError`]를 재노출합니다.

#[allow(clippy::module_inception)]
pub mod errors;

pub use errors::*;
