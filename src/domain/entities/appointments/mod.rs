//! Appointments Entity Module
//!
//! 예약 엔티티와 상태 생명주기, 상태 전이 정책을 정의합니다.

pub mod appointment;

pub use appointment::{Appointment, AppointmentStatus, StatusPolicy};
