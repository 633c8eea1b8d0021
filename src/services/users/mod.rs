//! 사용자 서비스
//!
//! - [`AccountService`] - 회원가입, 로그인, 현재 사용자, 계정 활성화
//! - [`ProfileService`] - 서비스 제공자 프로필과 검증 플래그

pub mod account_service;
pub mod profile_service;

pub use account_service::AccountService;
pub use profile_service::ProfileService;
