//! # Domain Entities
//!
//! MongoDB에 영속되는 핵심 도메인 객체입니다.
//!
//! - [`users`] - 사용자, 역할, 서비스 제공자 프로필 (사용자 문서에 포함)
//! - [`appointments`] - 예약, 예약 상태, 상태 전이 정책

pub mod users;
pub mod appointments;
