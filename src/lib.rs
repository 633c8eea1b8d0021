//! 홈 서비스 예약 백엔드
//!
//! 고객이 서비스 제공자(청소, 수리 등)를 찾아 예약하고,
//! 서비스 제공자가 예약을 처리하는 REST API 서비스입니다.
//!
//! # Features
//!
//! - **계정**: 고객/서비스 제공자 가입, 로그인, JWT 인증
//! - **서비스 제공자 프로필**: 프로필 작성, 관리자 검증
//! - **예약**: 생성, 목록 조회, 상태 변경 (허용/강제 정책)
//! - **매칭**: 날짜별 예약 가능한 서비스 제공자 조회
//! - **저장소**: MongoDB + Redis 캐시, 또는 메모리 저장소
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트, 인증 미들웨어
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← DTO 검증, 요청/응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← Account / Profile / Booking / Credential
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Store traits   │ ← UserDirectory / AppointmentStore
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────────────────┐
//! │ MongoDB + Redis  |  Memory  │
//! └─────────────────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use booking_service_backend::services::booking::{BookingService, Participant};
//! use booking_service_backend::core::registry::ServiceLocator;
//!
//! let booking = ServiceLocator::get::<BookingService>();
//! let mine = booking.list_appointments(&user_id, Participant::Client, None).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
