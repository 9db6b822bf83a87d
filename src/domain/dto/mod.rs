//! # Data Transfer Objects
//!
//! HTTP 계층과 서비스 계층 사이에서 주고받는 요청 데이터 구조체입니다.
//! `validator`로 입력을 검증한 뒤 서비스에 전달합니다.

pub mod openid;

pub use openid::*;
