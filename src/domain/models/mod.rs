//! # Domain Models
//!
//! 영속되지 않는 도메인 모델입니다.
//!
//! - [`auth`] - 요청 단위 인증 정보와 역할 요구사항
//! - [`token`] - JWT 클레임, 발급 토큰, 검증된 신원

pub mod auth;
pub mod token;
