//! OpenID 로그인 핸들러
//!
//! 프로바이더 로그인 리다이렉트와 OP 콜백 검증을 처리합니다.
//! 실제 프로토콜 처리는 `OpenIdAuthFlow`를 통해 외부 엔진에 위임합니다.
use std::collections::HashMap;
use std::sync::Arc;

use actix_web::http::header;
use actix_web::{get, web, HttpResponse};
use validator::Validate;

use crate::config::OpenIdConfig;
use crate::domain::dto::openid::OpenIdLoginQuery;
use crate::errors::{AppError, AppResult};
use crate::services::openid::{
    attach_provider, provider_from_params, OpenIdAuthFlow, OpenIdClientRegistry,
    PROVIDER_QUERY_KEY,
};

/// OpenID 핸들러 공유 상태
///
/// 호스트 애플리케이션이 자신의 `RelyingPartyEngine`으로 플로우를 만들어
/// `web::Data`로 등록합니다.
pub struct OpenIdState {
    pub flow: OpenIdAuthFlow,
    pub registry: Arc<OpenIdClientRegistry>,
    /// 로그인 요청에 `return_url`이 없을 때 사용할 URL
    pub default_return_url: String,
}

impl OpenIdState {
    /// 기본 return URL은 `OPENID_DEFAULT_RETURN_URL` 설정을 따릅니다.
    pub fn new(flow: OpenIdAuthFlow, registry: Arc<OpenIdClientRegistry>) -> Self {
        Self {
            flow,
            registry,
            default_return_url: OpenIdConfig::default_return_url(),
        }
    }

    pub fn with_default_return_url(mut self, return_url: impl Into<String>) -> Self {
        self.default_return_url = return_url.into();
        self
    }
}

/// 등록된 프로바이더 목록 핸들러
///
/// # Endpoint
/// `GET /auth/openid/providers`
#[get("/providers")]
pub async fn list_providers(state: web::Data<OpenIdState>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "providers": state.registry.provider_names()
    }))
}

/// OpenID 로그인 시작 핸들러
///
/// 프로바이더에 대한 인증 요청을 만들고 OP로 302 리다이렉트합니다.
/// return URL에는 콜백에서 프로바이더를 식별하기 위한 `__provider__`가 붙습니다.
///
/// # Endpoint
/// `GET /auth/openid/{provider}/login?return_url={url}`
#[get("/{provider}/login")]
pub async fn openid_login(
    state: web::Data<OpenIdState>,
    provider: web::Path<String>,
    query: web::Query<OpenIdLoginQuery>,
) -> AppResult<HttpResponse> {
    query.validate().map_err(|e| AppError::ValidationError(e.to_string()))?;

    let client = state.registry.require(&provider)?;

    let return_url = query.return_url.as_deref().unwrap_or(state.default_return_url.as_str());
    let return_url = attach_provider(return_url, client.provider_name())?;

    let redirect = state
        .flow
        .request_authentication(client.as_ref(), &return_url)
        .await?;

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, redirect))
        .finish())
}

/// OpenID 콜백 처리 핸들러
///
/// OP가 돌려보낸 indirect message를 엔진으로 검증하고 로그인 결과를 반환합니다.
/// 인증되지 않은 응답(취소, 실패)은 401과 함께 실패 결과 본문을 돌려줍니다.
///
/// # Endpoint
/// `GET /auth/openid/callback?__provider__={provider}&openid.mode=...`
#[get("/callback")]
pub async fn openid_callback(
    state: web::Data<OpenIdState>,
    query: web::Query<HashMap<String, String>>,
) -> AppResult<HttpResponse> {
    let params = query.into_inner();

    let provider = provider_from_params(&params).ok_or_else(|| {
        AppError::ValidationError(format!("Missing {} parameter", PROVIDER_QUERY_KEY))
    })?;
    let client = state.registry.require(provider)?;

    let result = state
        .flow
        .verify_authentication(client.as_ref(), &params)
        .await?;

    if result.is_successful {
        Ok(HttpResponse::Ok().json(result))
    } else {
        Ok(HttpResponse::Unauthorized().json(result))
    }
}
