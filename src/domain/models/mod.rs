//! # Domain Models Module
//!
//! 도메인의 값 객체(Value Objects)를 정의하는 모듈입니다.
//! 영속성이 없는 불변 객체들로, 인증 시도 하나의 생명주기 동안만 존재합니다.

pub mod openid;

pub use openid::*;
