//! # 통합 에러 처리 시스템
//!
//! 애플리케이션 전역에서 사용하는 에러 타입과 HTTP 응답 변환을 정의합니다.
//! `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
//! 핸들러에서 `?` 연산자만으로 일관된 JSON 에러 응답을 만들 수 있습니다.
//!
//! ## 에러 분류 (ErrorKind)
//!
//! | ErrorKind | AppError 변형 | HTTP |
//! |-----------|---------------|------|
//! | `NotFound` | `NotFound` | 404 |
//! | `Forbidden` | `AuthorizationError` | 403 |
//! | `InvalidInput` | `ValidationError` | 400 |
//! | `Conflict` | `ConflictError` | 409 |
//! | `Unauthenticated` | `AuthenticationError` | 401 |
//! | `StoreFailure` | `DatabaseError`, `RedisError` | 500 |
//! | `Internal` | `InternalError` | 500 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn find_user(id: &str) -> AppResult<User> {
//!     user_repo.find_by_id(id).await?
//!         .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

/// 호출자에게 노출되는 안정적인 에러 분류
///
/// 에러 메시지는 바뀔 수 있지만 분류는 바뀌지 않습니다.
/// 경계 계층(HTTP)은 이 값만 보고 상태 코드를 결정합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Forbidden,
    InvalidInput,
    Conflict,
    Unauthenticated,
    StoreFailure,
    Internal,
}

impl ErrorKind {
    /// 분류에 대응하는 HTTP 상태 코드
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Forbidden => StatusCode::FORBIDDEN,
            ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::Unauthenticated => StatusCode::UNAUTHORIZED,
            ErrorKind::StoreFailure | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// 애플리케이션 전역 에러 타입
///
/// 인프라(DB, Redis), 비즈니스(검증, 충돌, 미존재), 보안(인증, 인가),
/// 시스템(내부 오류) 계층의 에러를 모두 포괄합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500)
    ///
    /// MongoDB 연산 실패를 나타냅니다. 도메인 서비스는 이 에러를 복구하지 않고
    /// 그대로 호출자에게 전달합니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 관련 에러 (500)
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 에러 (400)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409)
    ///
    /// 중복 이메일로 회원가입을 시도하는 경우 등
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401)
    ///
    /// 잘못된 로그인 정보, 만료되었거나 서명이 맞지 않는 토큰
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러 (403)
    ///
    /// 예약의 당사자나 관리자가 아닌 사용자가 상태를 변경하려는 경우 등
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 내부 서버 에러 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 에러의 안정적인 분류를 반환합니다.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::DatabaseError(_) | AppError::RedisError(_) => ErrorKind::StoreFailure,
            AppError::ValidationError(_) => ErrorKind::InvalidInput,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::ConflictError(_) => ErrorKind::Conflict,
            AppError::AuthenticationError(_) => ErrorKind::Unauthenticated,
            AppError::AuthorizationError(_) => ErrorKind::Forbidden,
            AppError::InternalError(_) => ErrorKind::Internal,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.kind().status_code()
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러 응답은 `{ "error": "..." }` 형식을 따릅니다.
    /// 5xx 에러는 서버 로그에 원인을 남깁니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("요청 처리 실패: {}", self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::ValidationError(errors.to_string())
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(error: mongodb::error::Error) -> Self {
        AppError::DatabaseError(error.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let hash = bcrypt::hash(password, cost).context("비밀번호 해싱 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
