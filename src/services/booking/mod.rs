//! 예약 도메인
//!
//! - [`BookingService`] - 예약 생성, 목록, 상태 변경, 가용성 조회
//! - [`BookingError`] - 예약 도메인 에러 분류

pub mod booking_error;
pub mod booking_service;

pub use booking_error::BookingError;
pub use booking_service::{BookingService, NewBooking, Participant};
