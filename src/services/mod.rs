//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 저장소 trait 객체를 생성자로 주입받는 평범한 구조체입니다.
//! 애플리케이션 시작 시 [`register_services`]가 한 번 생성하여
//! [`ServiceLocator`]에 등록하고, 핸들러는 타입으로 꺼내 씁니다.
//!
//! ```rust,ignore
//! register_services(&config, users, appointments);
//!
//! let booking = ServiceLocator::get::<BookingService>();
//! ```

pub mod auth;
pub mod users;
pub mod booking;

use std::sync::Arc;
use crate::{
    config::AppConfig,
    core::registry::ServiceLocator,
    repositories::stores::{AppointmentStore, UserDirectory},
};
use auth::CredentialService;
use booking::BookingService;
use users::{AccountService, ProfileService};

/// 설정과 저장소로 모든 도메인 서비스를 만들어 등록합니다.
///
/// 같은 타입을 다시 등록하면 이전 인스턴스를 대체합니다.
pub fn register_services(
    config: &AppConfig,
    users: Arc<dyn UserDirectory>,
    appointments: Arc<dyn AppointmentStore>,
) {
    let credentials = Arc::new(CredentialService::new(&config.jwt, &config.password));

    ServiceLocator::set(Arc::new(AccountService::new(users.clone(), credentials.clone())));
    ServiceLocator::set(Arc::new(ProfileService::new(users.clone())));
    ServiceLocator::set(Arc::new(BookingService::new(
        users,
        appointments,
        config.booking.status_policy,
    )));
    ServiceLocator::set(credentials);

    log::info!("도메인 서비스 등록 완료 (상태 정책: {:?})", config.booking.status_policy);
}
