//! 예약 관련 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::utils::date_utils::validate_calendar_date;
use crate::utils::string_utils::deserialize_optional_string;

/// 예약 생성 요청
///
/// ```json
/// {
///   "provider_id": "65f1c0c2a1b2c3d4e5f60718",
///   "service": "cleaning",
///   "date": "2024-03-10",
///   "time": "14:00",
///   "notes": "2 quartos",
///   "location": "Rua A, 123",
///   "latitude": -23.55,
///   "longitude": -46.63
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAppointmentRequest {
    #[validate(length(min = 1, message = "서비스 제공자 ID가 필요합니다"))]
    pub provider_id: String,

    #[validate(length(min = 1, max = 100, message = "서비스 종류는 1-100자 사이여야 합니다"))]
    pub service: String,

    #[validate(custom(function = "validate_calendar_date"))]
    pub date: String,

    #[validate(length(min = 1, max = 20, message = "예약 시각이 필요합니다"))]
    pub time: String,

    #[serde(default)]
    #[validate(length(max = 2000, message = "메모는 2000자를 넘을 수 없습니다"))]
    pub notes: String,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub latitude: f64,

    #[serde(default)]
    pub longitude: f64,
}

/// 예약 상태 변경 요청
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStatusRequest {
    #[validate(length(min = 1, max = 50, message = "상태 값이 필요합니다"))]
    pub status: String,
}

/// 예약 목록 조회 쿼리 (`?status=pending`)
#[derive(Debug, Default, Deserialize)]
pub struct AppointmentListQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub status: Option<String>,
}

/// 예약 가능한 서비스 제공자 조회 쿼리
///
/// 두 파라미터 모두 필수입니다.
#[derive(Debug, Deserialize, Validate)]
pub struct AvailableProvidersQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(required(message = "date 파라미터가 필요합니다"))]
    pub date: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(required(message = "service 파라미터가 필요합니다"))]
    pub service: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request(date: &str) -> CreateAppointmentRequest {
        CreateAppointmentRequest {
            provider_id: "65f1c0c2a1b2c3d4e5f60718".to_string(),
            service: "cleaning".to_string(),
            date: date.to_string(),
            time: "14:00".to_string(),
            notes: String::new(),
            location: String::new(),
            latitude: 0.0,
            longitude: 0.0,
        }
    }

    #[test]
    fn test_create_request_validates_date_format() {
        assert!(create_request("2024-03-10").validate().is_ok());

        let errors = create_request("10/03/2024").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("date"));
    }

    #[test]
    fn test_create_request_optional_fields_default() {
        let json = r#"{"provider_id":"p","service":"cleaning","date":"2024-03-10","time":"09:00"}"#;
        let request: CreateAppointmentRequest = serde_json::from_str(json).unwrap();

        assert!(request.validate().is_ok());
        assert_eq!(request.notes, "");
        assert_eq!(request.latitude, 0.0);
    }

    #[test]
    fn test_empty_status_rejected() {
        let request = UpdateStatusRequest { status: String::new() };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_available_providers_query_requires_both_params() {
        let query = AvailableProvidersQuery {
            date: Some("2024-03-10".to_string()),
            service: None,
        };
        let errors = query.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("service"));

        let query = AvailableProvidersQuery {
            date: Some("2024-03-10".to_string()),
            service: Some("cleaning".to_string()),
        };
        assert!(query.validate().is_ok());
    }
}
