//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들입니다.
//!
//! ```text
//! Client ──HTTP──▶ Handlers (이 모듈)     ← Web Layer
//!                    │ DTO 검증, 인증 사용자 추출
//!                    ▼
//!                  Services              ← AccountService / ProfileService / BookingService
//!                    ▼
//!                  Repositories          ← UserDirectory / AppointmentStore
//! ```
//!
//! 핸들러는 요청 DTO를 `validator`로 검증한 뒤 서비스를 호출하고,
//! 결과를 응답 DTO로 변환합니다. 에러는 모두 [`AppError`]로 반환되어
//! `ResponseError` 구현이 상태 코드와 `{"error": ...}` 본문을 만듭니다.
//!
//! | 모듈 | 경로 |
//! |------|------|
//! | [`auth`] | `/api/v1/auth/*` |
//! | [`appointments`] | `/api/v1/appointments/*` |
//! | [`providers`] | `/api/v1/providers/*` |
//! | [`admin`] | `/api/v1/admin/*` |

pub mod auth;
pub mod appointments;
pub mod providers;
pub mod admin;

use std::sync::Arc;
use crate::core::{errors::AppError, registry::ServiceLocator};

/// 등록된 서비스를 가져옵니다.
///
/// 시작 시 등록되지 않은 서비스는 500으로 응답합니다.
pub(crate) fn service<T: Send + Sync + 'static>() -> Result<Arc<T>, AppError> {
    ServiceLocator::try_get::<T>().ok_or_else(|| {
        AppError::InternalError(format!(
            "서비스가 등록되지 않았습니다: {}",
            std::any::type_name::<T>()
        ))
    })
}
