//! OpenID Attribute Exchange 1.0 모델
//!
//! 프로바이더에게 사용자 속성을 요청하는 `FetchRequest`와
//! 프로바이더가 돌려준 값을 담는 `FetchResponse`를 정의합니다.
//! 와이어 포맷 인코딩은 Relying Party 엔진의 몫이며, 여기서는 값 객체만 다룹니다.

/// 널리 쓰이는 axschema.org 속성 타입 URI
pub struct WellKnownAttributes;

impl WellKnownAttributes {
    /// 이메일 주소
    pub const CONTACT_EMAIL: &'static str = "http://axschema.org/contact/email";
    /// 거주지 국가
    pub const CONTACT_HOME_ADDRESS_COUNTRY: &'static str =
        "http://axschema.org/contact/country/home";
    /// 이름(given name)
    pub const NAME_FIRST: &'static str = "http://axschema.org/namePerson/first";
    /// 성(family name)
    pub const NAME_LAST: &'static str = "http://axschema.org/namePerson/last";
}

/// 단일 속성 요청 선언
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeRequest {
    /// 속성 타입 URI
    pub type_uri: String,
    /// 필수 여부. `false`면 `if_available`로 요청됩니다.
    pub is_required: bool,
}

impl AttributeRequest {
    pub fn new(type_uri: impl Into<String>, is_required: bool) -> Self {
        Self {
            type_uri: type_uri.into(),
            is_required,
        }
    }
}

/// Attribute Exchange fetch 요청
///
/// 선언 순서가 유지되며, 같은 타입 URI는 한 번만 선언할 수 있습니다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchRequest {
    attributes: Vec<AttributeRequest>,
}

impl FetchRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// 속성 선언을 추가합니다.
    ///
    /// 이미 선언된 타입 URI면 기존 선언을 유지하고 `false`를 반환합니다.
    pub fn add(&mut self, attribute: AttributeRequest) -> bool {
        if self.contains(&attribute.type_uri) {
            log::debug!("AX 속성 중복 선언 무시: {}", attribute.type_uri);
            return false;
        }
        self.attributes.push(attribute);
        true
    }

    pub fn contains(&self, type_uri: &str) -> bool {
        self.attributes.iter().any(|a| a.type_uri == type_uri)
    }

    pub fn attributes(&self) -> &[AttributeRequest] {
        &self.attributes
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

/// Attribute Exchange fetch 응답
///
/// 프로바이더가 돌려준 타입 URI별 값 목록입니다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchResponse {
    values: Vec<(String, Vec<String>)>,
}

impl FetchResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// 속성 값을 기록합니다. 같은 타입 URI가 다시 오면 값을 덧붙입니다.
    pub fn add_attribute<I, S>(&mut self, type_uri: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let type_uri = type_uri.into();
        let values = values.into_iter().map(Into::<String>::into);

        match self.values.iter_mut().find(|(uri, _)| *uri == type_uri) {
            Some((_, existing)) => existing.extend(values),
            None => self.values.push((type_uri, values.collect())),
        }
    }

    /// 빌더 형태의 [`add_attribute`](Self::add_attribute)
    pub fn with_attribute(mut self, type_uri: impl Into<String>, value: impl Into<String>) -> Self {
        let value: String = value.into();
        self.add_attribute(type_uri, [value]);
        self
    }

    /// 해당 속성의 첫 번째 값을 반환합니다.
    ///
    /// 속성이 없거나 값 목록이 비어 있으면 `None`입니다.
    pub fn attribute_value(&self, type_uri: &str) -> Option<&str> {
        self.attribute_values(type_uri)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn attribute_values(&self, type_uri: &str) -> Option<&[String]> {
        self.values
            .iter()
            .find(|(uri, _)| uri == type_uri)
            .map(|(_, values)| values.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_request_new() {
        let request = AttributeRequest::new(WellKnownAttributes::CONTACT_EMAIL, true);

        assert_eq!(request.type_uri, "http://axschema.org/contact/email");
        assert!(request.is_required);
    }

    #[test]
    fn test_fetch_request_keeps_order_and_rejects_duplicates() {
        let mut fetch = FetchRequest::new();
        assert!(fetch.add(AttributeRequest::new(WellKnownAttributes::NAME_FIRST, false)));
        assert!(fetch.add(AttributeRequest::new(WellKnownAttributes::NAME_LAST, false)));
        assert!(!fetch.add(AttributeRequest::new(WellKnownAttributes::NAME_FIRST, true)));

        assert_eq!(fetch.len(), 2);
        assert_eq!(fetch.attributes()[0].type_uri, WellKnownAttributes::NAME_FIRST);
        assert!(!fetch.attributes()[0].is_required);
    }

    #[test]
    fn test_fetch_response_first_value() {
        let mut response = FetchResponse::new();
        response.add_attribute(WellKnownAttributes::CONTACT_EMAIL, ["a@b.com", "c@d.com"]);
        response.add_attribute(WellKnownAttributes::NAME_LAST, Vec::<String>::new());

        assert_eq!(response.attribute_value(WellKnownAttributes::CONTACT_EMAIL), Some("a@b.com"));
        assert_eq!(response.attribute_value(WellKnownAttributes::NAME_LAST), None);
        assert_eq!(response.attribute_value(WellKnownAttributes::NAME_FIRST), None);
    }

    #[test]
    fn test_fetch_response_appends_repeated_attribute() {
        let response = FetchResponse::new()
            .with_attribute(WellKnownAttributes::CONTACT_EMAIL, "a@b.com")
            .with_attribute(WellKnownAttributes::CONTACT_EMAIL, "c@d.com");

        assert_eq!(
            response.attribute_values(WellKnownAttributes::CONTACT_EMAIL).map(<[String]>::len),
            Some(2)
        );
    }
}
