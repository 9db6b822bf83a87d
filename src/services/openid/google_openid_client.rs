//! # Google OpenID 클라이언트
//!
//! Google의 OpenID 2.0 OP 식별자 엔드포인트로 로그인하고,
//! Attribute Exchange로 이메일/국가/이름 속성을 요청합니다.
//!
//! ## 요청 속성
//!
//! | 속성 | 타입 URI | 필수 | 결과 키 |
//! |------|----------|------|---------|
//! | 이메일 | `http://axschema.org/contact/email` | ✅ | `email` |
//! | 국가 | `http://axschema.org/contact/country/home` | | `country` |
//! | 이름 | `http://axschema.org/namePerson/first` | | `firstName` |
//! | 성 | `http://axschema.org/namePerson/last` | | `lastName` |
//!
//! 사용자가 속성 공유를 거부하면 Google은 AX 응답을 생략할 수 있으며,
//! 이 경우 부가 데이터 없이 로그인만 성공합니다.

use crate::config::AuthProvider;
use crate::domain::models::openid::{
    AttributeRequest, ExtraData, FetchRequest, OpenIdExtension, WellKnownAttributes,
};
use crate::services::openid::openid_client::OpenIdClient;
use crate::services::openid::relying_party::{AuthenticationRequest, AuthenticationResponse};
use crate::utils::string_utils::add_if_not_empty;

/// Google 프로바이더 이름
pub const GOOGLE_PROVIDER_NAME: &str = AuthProvider::Google.as_str();

/// Google OpenID OP 식별자 엔드포인트
pub const GOOGLE_OPENID_IDENTIFIER: &str = "https://www.google.com/accounts/o8/id";

/// 요청 순서대로 나열한 (결과 키, 타입 URI, 필수 여부)
const REQUESTED_ATTRIBUTES: [(&str, &str, bool); 4] = [
    ("email", WellKnownAttributes::CONTACT_EMAIL, true),
    ("country", WellKnownAttributes::CONTACT_HOME_ADDRESS_COUNTRY, false),
    ("firstName", WellKnownAttributes::NAME_FIRST, false),
    ("lastName", WellKnownAttributes::NAME_LAST, false),
];

/// Google OpenID 클라이언트
///
/// 외부 설정 없이 생성되며, 상태를 갖지 않으므로 여러 인증 플로우에서 공유할 수 있습니다.
///
/// # 사용 예제
///
/// ```rust,ignore
/// let flow = OpenIdAuthFlow::from_config(engine);
/// let google = GoogleOpenIdClient::new();
///
/// let redirect = flow.request_authentication(&google, return_url).await?;
/// // ... 콜백
/// let result = flow.verify_authentication(&google, &params).await?;
/// if let Some(email) = result.extra_data.get("email") {
///     log::info!("Google 로그인: {}", email);
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GoogleOpenIdClient;

impl GoogleOpenIdClient {
    pub fn new() -> Self {
        Self
    }

    /// 이번 인증 시도에 사용할 AX fetch 요청을 만듭니다.
    pub fn fetch_request() -> FetchRequest {
        let mut fetch = FetchRequest::new();
        for (_, type_uri, is_required) in REQUESTED_ATTRIBUTES {
            fetch.add(AttributeRequest::new(type_uri, is_required));
        }
        fetch
    }
}

impl OpenIdClient for GoogleOpenIdClient {
    fn provider_name(&self) -> &str {
        GOOGLE_PROVIDER_NAME
    }

    fn provider_identifier(&self) -> &str {
        GOOGLE_OPENID_IDENTIFIER
    }

    fn prepare_outgoing_request(&self, request: &mut dyn AuthenticationRequest) {
        request.add_extension(OpenIdExtension::FetchRequest(Self::fetch_request()));
    }

    fn extract_attributes(&self, response: &dyn AuthenticationResponse) -> Option<ExtraData> {
        let Some(fetch) = response.fetch_response() else {
            log::debug!("Google 응답에 AX fetch 확장 없음");
            return None;
        };

        let mut extra_data = ExtraData::new();
        for (key, type_uri, _) in REQUESTED_ATTRIBUTES {
            add_if_not_empty(&mut extra_data, key, fetch.attribute_value(type_uri));
        }
        Some(extra_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::openid::{AuthenticationStatus, FetchResponse};
    use crate::services::openid::test_support::{MockRequest, MockResponse};

    fn google_response(fetch: Option<FetchResponse>) -> MockResponse {
        let response =
            MockResponse::authenticated("https://www.google.com/accounts/o8/id?id=AItOawk");
        match fetch {
            Some(fetch) => response.with_extension(fetch.into()),
            None => response,
        }
    }

    #[test]
    fn test_provider_identity_constants() {
        let client = GoogleOpenIdClient::new();

        assert_eq!(client.provider_name(), "google");
        assert_eq!(client.provider_identifier(), "https://www.google.com/accounts/o8/id");
    }

    #[test]
    fn test_prepare_attaches_single_fetch_request() {
        let mut request = MockRequest::new(GOOGLE_OPENID_IDENTIFIER);

        GoogleOpenIdClient::new().prepare_outgoing_request(&mut request);

        assert_eq!(request.extensions.len(), 1);
        let fetch = request.extensions[0].as_fetch_request().unwrap();
        let declared: Vec<(&str, bool)> = fetch
            .attributes()
            .iter()
            .map(|a| (a.type_uri.as_str(), a.is_required))
            .collect();
        assert_eq!(
            declared,
            vec![
                ("http://axschema.org/contact/email", true),
                ("http://axschema.org/contact/country/home", false),
                ("http://axschema.org/namePerson/first", false),
                ("http://axschema.org/namePerson/last", false),
            ]
        );
    }

    #[test]
    fn test_prepare_ignores_existing_request_state() {
        let mut request = MockRequest::new(GOOGLE_OPENID_IDENTIFIER);
        request.add_extension(FetchResponse::new().into());

        GoogleOpenIdClient::new().prepare_outgoing_request(&mut request);

        let fetch_requests: Vec<_> = request
            .extensions
            .iter()
            .filter_map(OpenIdExtension::as_fetch_request)
            .collect();
        assert_eq!(fetch_requests.len(), 1);
        assert_eq!(fetch_requests[0].len(), 4);
    }

    #[test]
    fn test_extract_without_fetch_response_is_none() {
        let response = google_response(None);

        assert_eq!(GoogleOpenIdClient::new().extract_attributes(&response), None);
    }

    #[test]
    fn test_extract_email_only() {
        let fetch = FetchResponse::new()
            .with_attribute(WellKnownAttributes::CONTACT_EMAIL, "a@b.com")
            .with_attribute(WellKnownAttributes::CONTACT_HOME_ADDRESS_COUNTRY, "")
            .with_attribute(WellKnownAttributes::NAME_FIRST, "");
        let response = google_response(Some(fetch));

        let extra = GoogleOpenIdClient::new().extract_attributes(&response).unwrap();

        let mut expected = ExtraData::new();
        expected.insert("email".to_string(), "a@b.com".to_string());
        assert_eq!(extra, expected);
    }

    #[test]
    fn test_extract_all_attributes() {
        let fetch = FetchResponse::new()
            .with_attribute(WellKnownAttributes::CONTACT_EMAIL, "a@b.com")
            .with_attribute(WellKnownAttributes::CONTACT_HOME_ADDRESS_COUNTRY, "US")
            .with_attribute(WellKnownAttributes::NAME_FIRST, "A")
            .with_attribute(WellKnownAttributes::NAME_LAST, "B");
        let response = google_response(Some(fetch));

        let extra = GoogleOpenIdClient::new().extract_attributes(&response).unwrap();

        assert_eq!(extra.len(), 4);
        assert_eq!(extra["email"], "a@b.com");
        assert_eq!(extra["country"], "US");
        assert_eq!(extra["firstName"], "A");
        assert_eq!(extra["lastName"], "B");
    }

    #[test]
    fn test_extract_never_yields_empty_values() {
        let fetch = FetchResponse::new()
            .with_attribute(WellKnownAttributes::CONTACT_EMAIL, "")
            .with_attribute(WellKnownAttributes::NAME_LAST, "B");
        let response = google_response(Some(fetch));

        let extra = GoogleOpenIdClient::new().extract_attributes(&response).unwrap();

        assert!(extra.values().all(|v| !v.is_empty()));
        assert_eq!(extra.len(), 1);
        assert!(!extra.contains_key("email"));
    }

    #[test]
    fn test_extract_with_empty_fetch_response_is_empty_map() {
        let response = google_response(Some(FetchResponse::new()));

        let extra = GoogleOpenIdClient::new().extract_attributes(&response);

        assert_eq!(extra, Some(ExtraData::new()));
    }

    #[test]
    fn test_extract_does_not_depend_on_status() {
        let fetch = FetchResponse::new().with_attribute(WellKnownAttributes::NAME_FIRST, "A");
        let response = MockResponse::with_status(AuthenticationStatus::ExtensionsOnly)
            .with_extension(fetch.into());

        let extra = GoogleOpenIdClient::new().extract_attributes(&response).unwrap();

        assert_eq!(extra.get("firstName").map(String::as_str), Some("A"));
    }
}
