//! # Domain Module
//!
//! OpenID 로그인 도메인의 값 객체와 전송 객체를 담습니다.
//!
//! ```text
//! Domain Layer
//! ├── models/   ← AX 요청/응답, 확장, 인증 결과
//! └── dto/      ← HTTP 쿼리 파라미터
//! ```

pub mod dto;
pub mod models;
