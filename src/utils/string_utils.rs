//! # 문자열 유틸리티
//!
//! 요청 값의 앞뒤 공백 정리와 필수 값 검증을 담당합니다.

use serde::Deserialize;
use crate::core::errors::AppError;

/// 필수 문자열 필드 검증 및 정리
///
/// 빈 문자열이나 공백만 있는 경우 `ValidationError`를 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// ```rust,ignore
/// assert_eq!(validate_required_string("  cleaning  ", "service").unwrap(), "cleaning");
/// assert!(validate_required_string("   ", "service").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(
            format!("{}은(는) 필수입니다", field_name)
        ));
    }
    Ok(trimmed.to_string())
}

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// `?status=` 처럼 빈 값으로 전달된 쿼리 파라미터를 필터 없음으로 취급합니다.
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct AppointmentListQuery {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     status: Option<String>,
/// }
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string() {
        assert_eq!(validate_required_string("Hello", "name").unwrap(), "Hello");
        assert_eq!(validate_required_string("  World  ", "name").unwrap(), "World");

        assert!(validate_required_string("", "name").is_err());
        assert!(validate_required_string("   ", "name").is_err());
        assert!(validate_required_string("\t\n", "name").is_err());
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("  World  ".to_string())), Some("World".to_string()));
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct StatusFilter {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            status: Option<String>,
        }

        let result: StatusFilter = serde_json::from_str(r#"{"status": "  pending  "}"#).unwrap();
        assert_eq!(result.status, Some("pending".to_string()));

        let result: StatusFilter = serde_json::from_str(r#"{"status": ""}"#).unwrap();
        assert_eq!(result.status, None);

        let result: StatusFilter = serde_json::from_str(r#"{"status": null}"#).unwrap();
        assert_eq!(result.status, None);

        let result: StatusFilter = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(result.status, None);
    }
}
