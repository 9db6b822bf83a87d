//! # OpenID 클라이언트 레지스트리
//!
//! 호스트 애플리케이션이 사용할 프로바이더 클라이언트들을 이름으로 관리합니다.
//! 콜백 요청은 return URL에 붙여 둔 `__provider__` 파라미터로 어떤 클라이언트가
//! 응답을 검증할지 결정합니다.
//!
//! ```text
//! return_url: https://app.example.com/auth/openid/callback
//!     │ attach_provider(.., "google")
//!     ▼
//! https://app.example.com/auth/openid/callback?__provider__=google
//!     │ (OP 왕복)
//!     ▼
//! provider_from_params(callback query) == Some("google")
//! ```

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;
use url::Url;

use crate::config::AuthProvider;
use crate::errors::{AppError, AppResult};
use crate::services::openid::google_openid_client::GoogleOpenIdClient;
use crate::services::openid::openid_client::OpenIdClient;
use crate::utils::string_utils::is_valid_string;

/// return URL에 프로바이더 이름을 싣는 쿼리 파라미터 키
pub const PROVIDER_QUERY_KEY: &str = "__provider__";

static GLOBAL_REGISTRY: Lazy<OpenIdClientRegistry> = Lazy::new(OpenIdClientRegistry::with_defaults);

/// 프로바이더 이름 → 클라이언트 맵
///
/// 이름은 대소문자를 구분하지 않으며 소문자로 정규화되어 저장됩니다.
#[derive(Default)]
pub struct OpenIdClientRegistry {
    clients: RwLock<HashMap<String, Arc<dyn OpenIdClient>>>,
}

impl OpenIdClientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 기본 제공 프로바이더([`AuthProvider`] 전체)가 등록된 레지스트리
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        for provider in [AuthProvider::Google] {
            let client: Arc<dyn OpenIdClient> = match provider {
                AuthProvider::Google => Arc::new(GoogleOpenIdClient::new()),
            };
            if let Err(e) = registry.register(client) {
                log::warn!("기본 OpenID 클라이언트 등록 실패: {} ({})", provider.as_str(), e);
            }
        }
        registry
    }

    /// 프로세스 전역 기본 레지스트리
    pub fn global() -> &'static OpenIdClientRegistry {
        &*GLOBAL_REGISTRY
    }

    /// 클라이언트를 등록합니다.
    ///
    /// # 반환값
    ///
    /// * `Err(AppError::ValidationError)` - 프로바이더 이름이 비어 있는 경우
    /// * `Err(AppError::ConflictError)` - 같은 이름이 이미 등록된 경우
    pub fn register(&self, client: Arc<dyn OpenIdClient>) -> AppResult<()> {
        if !is_valid_string(client.provider_name()) {
            return Err(AppError::ValidationError(
                "OpenID provider name must not be empty".to_string(),
            ));
        }

        let name = client.provider_name().trim().to_lowercase();
        let mut clients = self.clients.write().map_err(|_| {
            AppError::InternalError("OpenID client registry lock poisoned".to_string())
        })?;
        if clients.contains_key(&name) {
            return Err(AppError::ConflictError(format!(
                "OpenID provider already registered: {}",
                name
            )));
        }

        log::debug!("OpenID 클라이언트 등록: {} ({})", name, client.provider_identifier());
        clients.insert(name, client);
        Ok(())
    }

    /// 이름으로 클라이언트를 찾습니다.
    pub fn get(&self, provider: &str) -> Option<Arc<dyn OpenIdClient>> {
        let clients = self.clients.read().ok()?;
        clients.get(&provider.trim().to_lowercase()).cloned()
    }

    /// 이름으로 클라이언트를 찾고, 없으면 `NotFound` 에러를 반환합니다.
    pub fn require(&self, provider: &str) -> AppResult<Arc<dyn OpenIdClient>> {
        self.get(provider)
            .ok_or_else(|| AppError::NotFound(format!("Unknown OpenID provider: {}", provider)))
    }

    /// 등록된 프로바이더 이름 (정렬됨)
    pub fn provider_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .clients
            .read()
            .map(|clients| clients.keys().cloned().collect())
            .unwrap_or_default();
        names.sort();
        names
    }
}

/// return URL에 `__provider__=<name>`을 덧붙입니다.
///
/// 기존 쿼리와 fragment는 유지되며, 값은 form 인코딩됩니다.
///
/// # 반환값
///
/// * `Err(AppError::ValidationError)` - `return_url`이 절대 URL이 아닌 경우
pub fn attach_provider(return_url: &str, provider: &str) -> AppResult<String> {
    let mut url = Url::parse(return_url).map_err(|e| {
        AppError::ValidationError(format!("Invalid return_url ({}): {}", e, return_url))
    })?;
    url.query_pairs_mut().append_pair(PROVIDER_QUERY_KEY, provider);
    Ok(url.into())
}

/// 콜백 파라미터에서 `__provider__` 값을 읽습니다.
pub fn provider_from_params(params: &HashMap<String, String>) -> Option<&str> {
    params
        .get(PROVIDER_QUERY_KEY)
        .map(String::as_str)
        .filter(|v| is_valid_string(v))
}
