//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 조건부 맵 삽입, 문자열 검증 유틸리티
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::add_if_not_empty;
//!
//! let mut extra = HashMap::new();
//! add_if_not_empty(&mut extra, "email", Some("user@gmail.com"));
//! ```

pub mod string_utils;
