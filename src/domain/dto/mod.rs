//! # Data Transfer Objects
//!
//! HTTP 요청/응답 계약입니다. 요청 DTO는 `validator`로 검증하고,
//! 응답 DTO는 엔티티에서 변환되며 비밀번호 해시를 포함하지 않습니다.

pub mod users;
pub mod appointments;
