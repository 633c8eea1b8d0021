//! Appointment Entity Implementation
//!
//! 고객과 서비스 제공자 사이의 예약을 표현합니다.
//! 예약은 참여자의 ID만 보관하며 사용자 문서를 포함하지 않습니다.
//! 생성 이후에는 상태 전이로만 변경되고, 삭제 연산은 없습니다.

use std::fmt;
use chrono::NaiveDate;
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 예약 상태
///
/// ```text
/// pending → confirmed → in_progress → completed
///    └──────────┴────────────┴──────→ cancelled
/// ```
///
/// `completed`, `cancelled`는 종료 상태입니다.
/// 허용 정책(permissive)에서는 임의의 문자열이 저장될 수 있으므로
/// 알 수 없는 값은 [`AppointmentStatus::Other`]로 원문 그대로 보존됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
    Other(String),
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::InProgress => "in_progress",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::Other(raw) => raw,
        }
    }

    /// 다섯 가지 정의된 상태 중 하나인지 여부
    pub fn is_known(&self) -> bool {
        !matches!(self, AppointmentStatus::Other(_))
    }

    /// `completed`와 `cancelled`는 더 이상 전이할 수 없습니다.
    pub fn is_terminal(&self) -> bool {
        matches!(self, AppointmentStatus::Completed | AppointmentStatus::Cancelled)
    }

    /// 정의된 생명주기에서 `self → next` 전이가 합법인지 확인합니다.
    ///
    /// 알 수 없는 상태에서는 취소만 허용합니다.
    pub fn can_transition_to(&self, next: &AppointmentStatus) -> bool {
        use AppointmentStatus::*;

        if self.is_terminal() {
            return false;
        }

        match (self, next) {
            (Pending, Confirmed) => true,
            (Confirmed, InProgress) => true,
            (InProgress, Completed) => true,
            (Pending | Confirmed | InProgress | Other(_), Cancelled) => true,
            _ => false,
        }
    }
}

impl From<String> for AppointmentStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pending" => AppointmentStatus::Pending,
            "confirmed" => AppointmentStatus::Confirmed,
            "in_progress" => AppointmentStatus::InProgress,
            "completed" => AppointmentStatus::Completed,
            "cancelled" => AppointmentStatus::Cancelled,
            _ => AppointmentStatus::Other(raw),
        }
    }
}

impl From<&str> for AppointmentStatus {
    fn from(raw: &str) -> Self {
        AppointmentStatus::from(raw.to_string())
    }
}

impl From<AppointmentStatus> for String {
    fn from(status: AppointmentStatus) -> Self {
        match status {
            AppointmentStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 상태 변경 요청을 어떻게 검증할지 결정하는 정책
///
/// `BOOKING_STATUS_POLICY` 환경 변수로 선택합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusPolicy {
    /// 빈 문자열이 아닌 상태 문자열을 공백까지 그대로 저장합니다.
    #[default]
    Permissive,
    /// 정의된 다섯 상태와 합법적인 전이만 허용합니다.
    Enforced,
}

impl StatusPolicy {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "permissive" => Ok(StatusPolicy::Permissive),
            "enforced" | "strict" => Ok(StatusPolicy::Enforced),
            other => Err(format!("알 수 없는 상태 정책: {}", other)),
        }
    }

    /// `current → next` 전이를 이 정책이 허용하는지 확인합니다.
    pub fn permits(&self, current: &AppointmentStatus, next: &AppointmentStatus) -> bool {
        if next.as_str().is_empty() {
            return false;
        }

        match self {
            StatusPolicy::Permissive => true,
            StatusPolicy::Enforced => next.is_known() && current.can_transition_to(next),
        }
    }
}

/// 예약 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 예약한 고객의 사용자 ID
    pub client_id: String,
    /// 예약된 서비스 제공자의 사용자 ID
    pub provider_id: String,
    /// 서비스 카테고리
    pub service: String,
    /// 예약일 (`YYYY-MM-DD`로 저장되어 문자열 정렬이 날짜 정렬과 일치)
    pub date: NaiveDate,
    /// 시각 (예: "14:00")
    pub time: String,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub duration_minutes: i32,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Appointment {
    /// `pending` 상태의 새 예약. 가격과 소요 시간은 0으로 시작합니다.
    #[allow(clippy::too_many_arguments)]
    pub fn new_pending(
        client_id: String,
        provider_id: String,
        service: String,
        date: NaiveDate,
        time: String,
        notes: String,
        location: String,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            client_id,
            provider_id,
            service,
            date,
            time,
            status: AppointmentStatus::Pending,
            notes,
            price: 0.0,
            duration_minutes: 0,
            location,
            latitude,
            longitude,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.map(|id| id.to_hex())
    }

    /// 사용자가 이 예약의 고객 또는 서비스 제공자인지 확인합니다.
    pub fn involves(&self, user_id: &str) -> bool {
        self.client_id == user_id || self.provider_id == user_id
    }

    /// 해당 날짜에 서비스 제공자를 점유하는 예약인지 확인합니다.
    ///
    /// 취소되지 않은 모든 예약은 점유로 취급합니다.
    pub fn occupies(&self, provider_id: &str, date: NaiveDate) -> bool {
        self.provider_id == provider_id
            && self.date == date
            && self.status != AppointmentStatus::Cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn sample() -> Appointment {
        Appointment::new_pending(
            "client-1".to_string(),
            "provider-1".to_string(),
            "cleaning".to_string(),
            day("2024-03-10"),
            "14:00".to_string(),
            String::new(),
            String::new(),
            0.0,
            0.0,
        )
    }

    #[test]
    fn test_status_string_round_trip_preserves_unknown_values() {
        assert_eq!(AppointmentStatus::from("in_progress"), AppointmentStatus::InProgress);
        assert_eq!(
            AppointmentStatus::from("on_hold"),
            AppointmentStatus::Other("on_hold".to_string())
        );
        assert_eq!(String::from(AppointmentStatus::from("on_hold")), "on_hold");

        let json = serde_json::to_string(&AppointmentStatus::Cancelled).unwrap();
        assert_eq!(json, "\"cancelled\"");
        let parsed: AppointmentStatus = serde_json::from_str("\"whatever\"").unwrap();
        assert_eq!(parsed.as_str(), "whatever");
    }

    #[test]
    fn test_lifecycle_transitions() {
        use AppointmentStatus::*;

        assert!(Pending.can_transition_to(&Confirmed));
        assert!(Confirmed.can_transition_to(&InProgress));
        assert!(InProgress.can_transition_to(&Completed));
        assert!(Pending.can_transition_to(&Cancelled));
        assert!(InProgress.can_transition_to(&Cancelled));

        assert!(!Pending.can_transition_to(&Completed));
        assert!(!Confirmed.can_transition_to(&Pending));
        assert!(!Completed.can_transition_to(&Cancelled));
        assert!(!Cancelled.can_transition_to(&Pending));
        assert!(!Pending.can_transition_to(&Pending));
        assert!(Completed.is_terminal() && Cancelled.is_terminal());
    }

    #[test]
    fn test_status_policy_parsing() {
        assert_eq!(StatusPolicy::from_str("PERMISSIVE"), Ok(StatusPolicy::Permissive));
        assert_eq!(StatusPolicy::from_str("enforced"), Ok(StatusPolicy::Enforced));
        assert!(StatusPolicy::from_str("sometimes").is_err());
        assert_eq!(StatusPolicy::default(), StatusPolicy::Permissive);
    }

    #[test]
    fn test_permissive_policy_accepts_any_non_empty_status() {
        let policy = StatusPolicy::Permissive;

        assert!(policy.permits(&AppointmentStatus::Completed, &AppointmentStatus::Pending));
        assert!(policy.permits(&AppointmentStatus::Pending, &AppointmentStatus::from("on_hold")));
        assert!(policy.permits(&AppointmentStatus::Pending, &AppointmentStatus::from("  ")));
        assert!(!policy.permits(&AppointmentStatus::Pending, &AppointmentStatus::from("")));
    }

    #[test]
    fn test_enforced_policy_rejects_unknown_and_illegal() {
        let policy = StatusPolicy::Enforced;

        assert!(policy.permits(&AppointmentStatus::Pending, &AppointmentStatus::Confirmed));
        assert!(!policy.permits(&AppointmentStatus::Pending, &AppointmentStatus::from("on_hold")));
        assert!(!policy.permits(&AppointmentStatus::Completed, &AppointmentStatus::Cancelled));
    }

    #[test]
    fn test_new_appointment_defaults() {
        let appointment = sample();

        assert_eq!(appointment.status, AppointmentStatus::Pending);
        assert_eq!(appointment.price, 0.0);
        assert_eq!(appointment.duration_minutes, 0);
        assert!(appointment.involves("client-1"));
        assert!(appointment.involves("provider-1"));
        assert!(!appointment.involves("someone-else"));
    }

    #[test]
    fn test_occupancy_ignores_cancelled() {
        let mut appointment = sample();
        assert!(appointment.occupies("provider-1", day("2024-03-10")));
        assert!(!appointment.occupies("provider-1", day("2024-03-11")));

        appointment.status = AppointmentStatus::Cancelled;
        assert!(!appointment.occupies("provider-1", day("2024-03-10")));

        appointment.status = AppointmentStatus::from("on_hold");
        assert!(appointment.occupies("provider-1", day("2024-03-10")));
    }

    #[test]
    fn test_date_serializes_as_calendar_day() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["date"], "2024-03-10");
        assert_eq!(json["status"], "pending");
    }
}
