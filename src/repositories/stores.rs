//! 저장소 포트
//!
//! 도메인 서비스는 구체 저장소가 아니라 이 trait들에만 의존합니다.
//! 운영 환경에서는 MongoDB 리포지토리가, 테스트와 로컬 실행에서는
//! [`InMemoryStore`](super::memory::InMemoryStore)가 구현을 제공합니다.
//!
//! ID는 ObjectId의 16진수 문자열입니다. 형식이 맞지 않는 ID는
//! 에러가 아니라 "존재하지 않음"(`None`)으로 취급합니다.

use async_trait::async_trait;
use chrono::NaiveDate;
use crate::core::errors::AppError;
use crate::domain::entities::appointments::{Appointment, AppointmentStatus};
use crate::domain::entities::users::{ProviderProfile, User};

/// 사용자 디렉터리
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// 새 사용자를 저장하고 ID가 할당된 사용자를 반환합니다.
    ///
    /// 이메일이 이미 등록되어 있으면 `ConflictError`를 반환합니다.
    async fn create(&self, user: User) -> Result<User, AppError>;

    /// 활성화 여부를 변경합니다. 사용자가 없으면 `None`.
    async fn set_active(&self, id: &str, is_active: bool) -> Result<Option<User>, AppError>;

    /// 서비스 제공자 프로필을 통째로 교체합니다. 사용자가 없으면 `None`.
    async fn save_provider_profile(&self, id: &str, profile: ProviderProfile) -> Result<Option<User>, AppError>;
}

/// 예약 저장소
#[async_trait]
pub trait AppointmentStore: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<Appointment>, AppError>;

    /// 고객의 예약 목록. 날짜 내림차순, `status`가 있으면 정확히 일치하는 것만.
    async fn list_by_client(&self, client_id: &str, status: Option<&str>) -> Result<Vec<Appointment>, AppError>;

    /// 서비스 제공자의 예약 목록. 날짜 내림차순, `status`가 있으면 정확히 일치하는 것만.
    async fn list_by_provider(&self, provider_id: &str, status: Option<&str>) -> Result<Vec<Appointment>, AppError>;

    /// 새 예약을 저장하고 ID가 할당된 예약을 반환합니다.
    async fn insert(&self, appointment: Appointment) -> Result<Appointment, AppError>;

    /// 상태와 `updated_at`만 변경합니다. 예약이 없으면 `None`.
    async fn update_status(&self, id: &str, status: &AppointmentStatus) -> Result<Option<Appointment>, AppError>;

    /// 해당 날짜에 예약 가능한 서비스 제공자
    ///
    /// 활성 상태이고 검증된 프로필을 가진 서비스 제공자 중
    /// 그 날짜에 취소되지 않은 예약이 하나도 없는 사용자입니다.
    async fn find_available_providers(&self, date: NaiveDate) -> Result<Vec<User>, AppError>;
}
