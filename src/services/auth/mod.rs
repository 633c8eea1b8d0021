//! 인증 서비스 (비밀번호 해싱, JWT 발급/검증)

pub mod credential_service;

pub use credential_service::CredentialService;
