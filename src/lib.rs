//! 인센드 OpenID 클라이언트 백엔드
//!
//! OpenID 2.0 Relying Party 흐름 위에서 동작하는 프로바이더 클라이언트 모음입니다.
//! 프로토콜 자체(디스커버리, 연관, 서명 검증)는 외부 [`RelyingPartyEngine`]에 맡기고,
//! 이 크레이트는 프로바이더별 설정과 Attribute Exchange 속성 처리를 담당합니다.
//!
//! # Features
//!
//! - **Google OpenID**: 고정 식별자 엔드포인트와 AX 속성(email, country, 이름) 요청
//! - **인증 플로우**: 프로바이더 클라이언트를 엔진과 연결하는 `OpenIdAuthFlow`
//! - **레지스트리**: 프로바이더 이름 기반 클라이언트 조회
//! - **Actix-web 라우트**: 로그인 리다이렉트 및 콜백 검증 엔드포인트
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /auth/openid/{provider}/login, /auth/openid/callback
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ OpenIdAuthFlow  │ ← 요청 생성 / 응답 검증 순서 제어
//! └─────────────────┘
//!          │
//!          ├──────────────────────┐
//!          ▼                      ▼
//! ┌─────────────────┐   ┌────────────────────┐
//! │  OpenIdClient   │   │ RelyingPartyEngine │ ← 외부 OpenID 라이브러리
//! │ (GoogleOpenId…) │   └────────────────────┘
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use openid_client_backend::services::openid::{GoogleOpenIdClient, OpenIdAuthFlow};
//!
//! let flow = OpenIdAuthFlow::from_config(engine);
//! let google = GoogleOpenIdClient::new();
//!
//! let redirect = flow.request_authentication(&google, "https://app.example.com/done").await?;
//! ```
//!
//! [`RelyingPartyEngine`]: services::openid::RelyingPartyEngine

pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod services;
pub mod utils;
