//! # OpenID 프로바이더 클라이언트와 인증 플로우
//!
//! [`OpenIdClient`]는 프로바이더별로 달라지는 부분(이름, 식별자 엔드포인트,
//! 요청 확장, 응답 속성 추출)만 표현하는 작은 capability trait입니다.
//! [`OpenIdAuthFlow`]가 엔진과 클라이언트를 정해진 시점에 호출합니다.
//!
//! ```text
//! request_authentication
//!   1. return URL 검증, realm 결정 (고정 realm 또는 return URL의 origin)
//!   2. engine.create_request(client.provider_identifier(), realm, return_url)
//!   3. client.prepare_outgoing_request(request)
//!   4. request.redirect_url()
//!
//! verify_authentication
//!   1. engine.get_response(params)
//!   2. Authenticated → client.extract_attributes(response)
//!   3. AuthenticationResult 구성
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::OpenIdConfig;
use crate::domain::models::openid::{AuthenticationResult, AuthenticationStatus, ExtraData};
use crate::errors::{AppError, AppResult};
use crate::services::openid::relying_party::{
    AuthenticationRequest, AuthenticationResponse, RelyingPartyEngine,
};

/// 프로바이더별 OpenID 클라이언트
///
/// 구현체는 상태를 갖지 않아야 하며, 동시에 여러 인증 플로우에서 공유됩니다.
pub trait OpenIdClient: Send + Sync {
    /// 레지스트리와 결과에 쓰이는 프로바이더 이름 (`"google"`)
    fn provider_name(&self) -> &str;

    /// 디스커버리에 사용할 OP 식별자 엔드포인트
    fn provider_identifier(&self) -> &str;

    /// 인증 요청이 OP로 보내지기 직전에 호출됩니다.
    fn prepare_outgoing_request(&self, _request: &mut dyn AuthenticationRequest) {}

    /// 검증된 응답에서 부가 사용자 데이터를 추출합니다.
    ///
    /// `None`은 "부가 데이터 없음"을 뜻하며 에러가 아닙니다.
    fn extract_attributes(&self, _response: &dyn AuthenticationResponse) -> Option<ExtraData> {
        None
    }
}

/// 엔진과 프로바이더 클라이언트를 연결하는 인증 플로우
#[derive(Clone)]
pub struct OpenIdAuthFlow {
    engine: Arc<dyn RelyingPartyEngine>,
    realm: Option<String>,
}

impl OpenIdAuthFlow {
    /// 고정 realm 없이 플로우를 만듭니다. realm은 매 요청의 return URL에서 계산됩니다.
    pub fn new(engine: Arc<dyn RelyingPartyEngine>) -> Self {
        Self { engine, realm: None }
    }

    /// `OPENID_REALM` 설정을 반영한 플로우
    pub fn from_config(engine: Arc<dyn RelyingPartyEngine>) -> Self {
        let flow = Self::new(engine);
        match OpenIdConfig::realm() {
            Some(realm) => flow.with_realm(realm),
            None => flow,
        }
    }

    /// 모든 요청에 사용할 고정 realm을 지정합니다.
    pub fn with_realm(mut self, realm: impl Into<String>) -> Self {
        self.realm = Some(realm.into());
        self
    }

    /// 인증 요청을 만들고 OP 리다이렉트 URL을 반환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(String)` - 사용자를 보낼 OP URL
    /// * `Err(AppError::ValidationError)` - `return_url`이 호스트를 가진 http(s) 절대 URL이
    ///   아니거나 사용자 정보(`user:pass@`)를 포함한 경우
    /// * `Err(AppError::ExternalServiceError)` 등 - 엔진이 보고한 실패
    pub async fn request_authentication(
        &self,
        client: &dyn OpenIdClient,
        return_url: &str,
    ) -> AppResult<String> {
        let origin_realm = realm_for(return_url)?;
        let realm = self.realm.clone().unwrap_or(origin_realm);

        let mut request = self
            .engine
            .create_request(client.provider_identifier(), &realm, return_url)
            .await?;

        client.prepare_outgoing_request(&mut *request);

        let redirect = request.redirect_url()?;
        log::info!(
            "OpenID 인증 요청 생성: provider={}, realm={}",
            client.provider_name(),
            realm
        );
        Ok(redirect)
    }

    /// 콜백 파라미터로 OP 응답을 검증하고 로그인 결과를 만듭니다.
    ///
    /// 엔진이 응답 자체를 찾지 못하면 에러, 응답은 있으나 인증되지 않았으면
    /// 실패 결과(`is_successful == false`)를 반환합니다.
    ///
    /// 성공 시 사용자 이름은 부가 데이터의 `"email"`, 표시용 식별자,
    /// claimed identifier 순으로 결정됩니다.
    pub async fn verify_authentication(
        &self,
        client: &dyn OpenIdClient,
        params: &HashMap<String, String>,
    ) -> AppResult<AuthenticationResult> {
        let response = self.engine.get_response(params).await?.ok_or_else(|| {
            AppError::AuthenticationError("Failed to get an OpenID response".to_string())
        })?;

        let status = response.status();
        if status != AuthenticationStatus::Authenticated {
            log::warn!(
                "OpenID 인증 실패: provider={}, status={:?}",
                client.provider_name(),
                status
            );
            let result = match response.failure_reason() {
                Some(reason) => AuthenticationResult::from_error(reason),
                None => AuthenticationResult::failed(),
            };
            return Ok(result.with_provider(client.provider_name()));
        }

        let Some(claimed_id) = response.claimed_identifier() else {
            log::warn!("claimed identifier 없는 긍정 응답: provider={}", client.provider_name());
            return Ok(AuthenticationResult::from_error("Missing claimed identifier")
                .with_provider(client.provider_name()));
        };

        let extra_data = client.extract_attributes(&*response).unwrap_or_default();
        let user_name = extra_data
            .get("email")
            .map(String::as_str)
            .or_else(|| response.friendly_identifier_for_display())
            .unwrap_or(claimed_id)
            .to_string();

        log::info!(
            "OpenID 인증 성공: provider={}, user={}",
            client.provider_name(),
            user_name
        );
        Ok(AuthenticationResult::succeeded(
            client.provider_name(),
            claimed_id,
            user_name,
            extra_data,
        ))
    }
}

/// return URL의 origin으로 realm을 계산합니다.
///
/// `HTTPS://App.Example.com:8443/done?x=1` → `https://app.example.com:8443/`
fn realm_for(return_url: &str) -> AppResult<String> {
    let invalid = |reason: &str| {
        AppError::ValidationError(format!("Invalid return_url ({}): {}", reason, return_url))
    };

    let url = url::Url::parse(return_url).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(invalid("expected an absolute http(s) URL"));
    }
    if !url.username().is_empty() || url.password().is_some() {
        return Err(invalid("credentials are not allowed"));
    }

    Ok(format!("{}/", url.origin().ascii_serialization()))
}
