//! 예약 도메인 에러

use thiserror::Error;
use crate::core::errors::{AppError, ErrorKind};

/// 예약 도메인 서비스가 반환하는 에러
///
/// 저장소 에러는 [`BookingError::Store`]로 감싸 그대로 전달하고,
/// HTTP 경계에서 원래의 `AppError`로 되돌립니다.
#[derive(Error, Debug)]
pub enum BookingError {
    #[error("서비스 제공자를 찾을 수 없습니다: {0}")]
    ProviderNotFound(String),

    #[error("서비스 제공자가 아닌 사용자입니다: {0}")]
    NotAProvider(String),

    #[error("예약을 찾을 수 없습니다: {0}")]
    AppointmentNotFound(String),

    #[error("사용자를 찾을 수 없습니다: {0}")]
    UserNotFound(String),

    #[error("예약에 대한 권한이 없습니다")]
    Forbidden,

    #[error("허용되지 않는 상태 변경입니다: {from} → {to}")]
    InvalidTransition { from: String, to: String },

    #[error(transparent)]
    Store(#[from] AppError),
}

impl BookingError {
    /// 안정적인 에러 분류
    pub fn kind(&self) -> ErrorKind {
        match self {
            BookingError::ProviderNotFound(_)
            | BookingError::AppointmentNotFound(_)
            | BookingError::UserNotFound(_) => ErrorKind::NotFound,
            BookingError::NotAProvider(_) | BookingError::InvalidTransition { .. } => ErrorKind::InvalidInput,
            BookingError::Forbidden => ErrorKind::Forbidden,
            BookingError::Store(inner) => inner.kind(),
        }
    }
}

impl From<BookingError> for AppError {
    fn from(error: BookingError) -> Self {
        let message = error.to_string();

        match error {
            BookingError::Store(inner) => inner,
            BookingError::ProviderNotFound(_)
            | BookingError::AppointmentNotFound(_)
            | BookingError::UserNotFound(_) => AppError::NotFound(message),
            BookingError::NotAProvider(_) | BookingError::InvalidTransition { .. } => {
                AppError::ValidationError(message)
            }
            BookingError::Forbidden => AppError::AuthorizationError(message),
        }
    }
}
