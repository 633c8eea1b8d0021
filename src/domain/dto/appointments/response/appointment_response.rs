use serde::{Deserialize, Serialize};
use crate::domain::dto::users::response::user_response::to_rfc3339;
use crate::domain::entities::appointments::Appointment;
use crate::utils::date_utils::format_calendar_date;

/// 예약 응답
///
/// 참여자는 ID로만 표현됩니다. 이름 등 표시 정보가 필요하면 호출자가 조회합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentResponse {
    pub id: String,
    pub client_id: String,
    pub provider_id: String,
    pub service: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub time: String,
    pub status: String,
    pub notes: String,
    pub price: f64,
    pub duration_minutes: i32,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Appointment> for AppointmentResponse {
    fn from(appointment: Appointment) -> Self {
        Self {
            id: appointment.id_string().unwrap_or_default(),
            client_id: appointment.client_id,
            provider_id: appointment.provider_id,
            service: appointment.service,
            date: format_calendar_date(appointment.date),
            time: appointment.time,
            status: appointment.status.into(),
            notes: appointment.notes,
            price: appointment.price,
            duration_minutes: appointment.duration_minutes,
            location: appointment.location,
            latitude: appointment.latitude,
            longitude: appointment.longitude,
            created_at: to_rfc3339(appointment.created_at),
            updated_at: to_rfc3339(appointment.updated_at),
        }
    }
}
