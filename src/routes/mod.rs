//! API 라우트 설정 모듈
//!
//! OpenID 로그인 엔드포인트들을 하나의 스코프로 묶어 제공합니다.
//! 호스트 애플리케이션은 `OpenIdState`를 `app_data`로 등록한 뒤 이 설정을 적용합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let state = web::Data::new(OpenIdState::new(flow, registry));
//! let app = App::new()
//!     .app_data(state)
//!     .configure(configure_openid_routes);
//! ```

use actix_web::web;

use crate::handlers;

/// OpenID 인증 라우트를 설정합니다
///
/// - `GET /auth/openid/providers`
/// - `GET /auth/openid/callback`
/// - `GET /auth/openid/{provider}/login`
pub fn configure_openid_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth/openid")
            .service(handlers::openid::list_providers)
            .service(handlers::openid::openid_callback)
            .service(handlers::openid::openid_login),
    );
}
