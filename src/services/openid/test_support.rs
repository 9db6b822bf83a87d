//! 테스트용 Relying Party 엔진 목(mock)

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::models::openid::{AuthenticationStatus, OpenIdExtension};
use crate::errors::{AppError, AppResult};
use crate::services::openid::relying_party::{
    AuthenticationRequest, AuthenticationResponse, RelyingPartyEngine,
};

/// 리다이렉트 시점에 기록된 요청 스냅샷
#[derive(Debug, Clone)]
pub struct CreatedRequest {
    pub identifier: String,
    pub realm: String,
    pub return_to: String,
    pub extension_count: usize,
    pub extensions: Vec<OpenIdExtension>,
}

#[derive(Default)]
pub struct MockRequest {
    pub identifier: String,
    pub realm: String,
    pub return_to: String,
    pub extensions: Vec<OpenIdExtension>,
    log: Arc<Mutex<Vec<CreatedRequest>>>,
}

impl MockRequest {
    pub fn new(identifier: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
            ..Self::default()
        }
    }
}

impl AuthenticationRequest for MockRequest {
    fn add_extension(&mut self, extension: OpenIdExtension) {
        self.extensions.push(extension);
    }

    fn extensions(&self) -> &[OpenIdExtension] {
        &self.extensions
    }

    fn redirect_url(&self) -> AppResult<String> {
        self.log.lock().unwrap().push(CreatedRequest {
            identifier: self.identifier.clone(),
            realm: self.realm.clone(),
            return_to: self.return_to.clone(),
            extension_count: self.extensions.len(),
            extensions: self.extensions.clone(),
        });
        let mut url = url::Url::parse(&self.identifier)
            .map_err(|e| AppError::InternalError(e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("openid.mode", "checkid_setup")
            .append_pair("openid.realm", &self.realm)
            .append_pair("openid.return_to", &self.return_to);
        Ok(url.into())
    }
}

#[derive(Clone)]
pub struct MockResponse {
    pub status: AuthenticationStatus,
    pub claimed_identifier: Option<String>,
    pub friendly_identifier: Option<String>,
    pub extensions: Vec<OpenIdExtension>,
    pub failure_reason: Option<String>,
}

impl MockResponse {
    pub fn authenticated(claimed_identifier: &str) -> Self {
        Self {
            claimed_identifier: Some(claimed_identifier.to_string()),
            ..Self::with_status(AuthenticationStatus::Authenticated)
        }
    }

    pub fn with_status(status: AuthenticationStatus) -> Self {
        Self {
            status,
            claimed_identifier: None,
            friendly_identifier: None,
            extensions: Vec::new(),
            failure_reason: None,
        }
    }

    pub fn with_extension(mut self, extension: OpenIdExtension) -> Self {
        self.extensions.push(extension);
        self
    }

    pub fn with_friendly_identifier(mut self, friendly: &str) -> Self {
        self.friendly_identifier = Some(friendly.to_string());
        self
    }

    pub fn with_failure_reason(mut self, reason: &str) -> Self {
        self.failure_reason = Some(reason.to_string());
        self
    }
}

impl AuthenticationResponse for MockResponse {
    fn status(&self) -> AuthenticationStatus {
        self.status
    }

    fn claimed_identifier(&self) -> Option<&str> {
        self.claimed_identifier.as_deref()
    }

    fn friendly_identifier_for_display(&self) -> Option<&str> {
        self.friendly_identifier.as_deref()
    }

    fn extensions(&self) -> &[OpenIdExtension] {
        &self.extensions
    }

    fn failure_reason(&self) -> Option<&str> {
        self.failure_reason.as_deref()
    }
}

/// 요청을 기록하고 미리 정한 응답을 돌려주는 엔진
#[derive(Default)]
pub struct MockEngine {
    response: Option<MockResponse>,
    fail_discovery: bool,
    log: Arc<Mutex<Vec<CreatedRequest>>>,
    received_params: Mutex<Vec<HashMap<String, String>>>,
}

impl MockEngine {
    pub fn responding(response: MockResponse) -> Self {
        Self {
            response: Some(response),
            ..Self::default()
        }
    }

    pub fn failing_discovery() -> Self {
        Self {
            fail_discovery: true,
            ..Self::default()
        }
    }

    pub fn last_created(&self) -> Option<CreatedRequest> {
        self.log.lock().unwrap().last().cloned()
    }

    pub fn last_params(&self) -> Option<HashMap<String, String>> {
        self.received_params.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl RelyingPartyEngine for MockEngine {
    async fn create_request(
        &self,
        identifier: &str,
        realm: &str,
        return_to: &str,
    ) -> AppResult<Box<dyn AuthenticationRequest>> {
        if self.fail_discovery {
            return Err(AppError::ExternalServiceError(format!(
                "No OpenID endpoint found for {}",
                identifier
            )));
        }

        Ok(Box::new(MockRequest {
            identifier: identifier.to_string(),
            realm: realm.to_string(),
            return_to: return_to.to_string(),
            extensions: Vec::new(),
            log: self.log.clone(),
        }))
    }

    async fn get_response(
        &self,
        params: &HashMap<String, String>,
    ) -> AppResult<Option<Box<dyn AuthenticationResponse>>> {
        self.received_params.lock().unwrap().push(params.clone());
        Ok(self
            .response
            .clone()
            .map(|response| Box::new(response) as Box<dyn AuthenticationResponse>))
    }
}
