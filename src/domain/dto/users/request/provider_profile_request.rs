//! 서비스 제공자 프로필 저장 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 서비스 제공자가 자신의 프로필을 생성하거나 교체할 때 사용합니다.
///
/// 검증 여부(`is_verified`)는 요청으로 받지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProviderProfileRequest {
    #[serde(default)]
    #[validate(length(max = 2000, message = "소개는 2000자를 넘을 수 없습니다"))]
    pub description: String,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "시간당 요금은 0 이상이어야 합니다"))]
    pub hourly_rate: f64,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "서비스 반경은 0 이상이어야 합니다"))]
    pub service_radius_km: f64,

    #[serde(default)]
    #[validate(range(min = -90.0, max = 90.0, message = "위도는 -90에서 90 사이여야 합니다"))]
    pub latitude: f64,

    #[serde(default)]
    #[validate(range(min = -180.0, max = 180.0, message = "경도는 -180에서 180 사이여야 합니다"))]
    pub longitude: f64,

    #[serde(default)]
    pub address: String,

    #[serde(default)]
    pub services: Vec<String>,

    #[serde(default)]
    pub working_hours: String,
}
