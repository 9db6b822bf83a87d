//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

use std::collections::HashMap;

/// 값이 비어있지 않을 때만 맵에 항목을 추가합니다.
///
/// 프로바이더 응답에서 추출한 속성 값을 부가 데이터 맵에 담을 때 사용합니다.
/// 빈 문자열이나 `None`은 빈 항목으로 남기지 않고 아예 건너뜁니다.
///
/// # 인자
/// * `map` - 항목을 추가할 맵
/// * `key` - 항목 키
/// * `value` - 추가할 값 (없거나 빈 문자열이면 무시)
///
/// # 반환값
/// * `true` - 항목이 추가된 경우
/// * `false` - 값이 비어 있어 건너뛴 경우
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::add_if_not_empty;
///
/// let mut data = HashMap::new();
/// add_if_not_empty(&mut data, "email", Some("a@b.com"));
/// add_if_not_empty(&mut data, "country", Some(""));
///
/// assert_eq!(data.len(), 1);
/// ```
pub fn add_if_not_empty(
    map: &mut HashMap<String, String>,
    key: &str,
    value: Option<&str>,
) -> bool {
    match value {
        Some(v) if !v.is_empty() => {
            map.insert(key.to_string(), v.to_string());
            true
        }
        _ => false,
    }
}

/// 문자열이 유효한지 확인 (빈 문자열이 아니고 공백만으로 구성되지 않음)
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::is_valid_string;
///
/// assert_eq!(is_valid_string("Hello"), true);
/// assert_eq!(is_valid_string("   "), false);
/// ```
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}
