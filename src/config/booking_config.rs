//! 예약 도메인 정책 설정
//!
//! ```bash
//! # permissive (기본값): 어떤 상태 문자열이든 그대로 저장
//! # enforced: pending → confirmed → in_progress → completed, cancelled 전이만 허용
//! export BOOKING_STATUS_POLICY="permissive"
//! ```

use super::EnvSource;
use crate::domain::entities::appointments::StatusPolicy;

/// 예약 도메인 설정
#[derive(Debug, Clone)]
pub struct BookingConfig {
    /// 상태 전이 검증 정책
    pub status_policy: StatusPolicy,
}

impl BookingConfig {
    pub(crate) fn from_source(source: &EnvSource<'_>) -> Self {
        let status_policy = match source.get("BOOKING_STATUS_POLICY") {
            Some(value) => StatusPolicy::from_str(&value).unwrap_or_else(|e| {
                log::error!("{}. 기본값 permissive 사용", e);
                StatusPolicy::Permissive
            }),
            None => StatusPolicy::Permissive,
        };

        Self { status_policy }
    }
}
