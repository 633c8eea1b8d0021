//! 미들웨어 모듈
//!
//! 요청 처리 파이프라인의 횡단 관심사를 담당합니다.
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - Bearer 토큰 추출 및 검증 (`CredentialService`)
//! - 역할 기반 접근 제한 (`client`, `provider`, `admin`)
//! - 검증된 사용자를 request extension에 저장
//!
//! ```rust,ignore
//! App::new()
//!     .service(
//!         web::scope("/api/v1/admin")
//!             .wrap(AuthMiddleware::required_with_role(UserType::Admin))
//!             .service(set_provider_verification)
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
