//! # Domain Layer Module
//!
//! 예약 마켓플레이스의 도메인 타입을 정의합니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities - 사용자, 서비스 제공자 프로필, 예약 (MongoDB 문서)
//! ├── dto      - HTTP 요청/응답 계약
//! └── models   - 인증 신원, JWT 클레임
//!      │
//!      ▼
//! Application Layer (services)
//!      │
//!      ▼
//! Infrastructure Layer (repositories, db, caching)
//! ```
//!
//! 엔티티는 HTTP를 알지 못하고, DTO는 저장 형식을 알지 못합니다.
//! 둘 사이의 변환은 `From` 구현으로만 이루어집니다.

pub mod entities;
pub mod dto;
pub mod models;
