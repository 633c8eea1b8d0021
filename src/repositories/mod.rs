//! # Repository Layer
//!
//! 데이터 액세스 계층입니다.
//!
//! - [`stores`] - 도메인 서비스가 의존하는 저장소 trait (`UserDirectory`, `AppointmentStore`)
//! - [`users`] - MongoDB + Redis 캐시 사용자 리포지토리 (`#[repository]` 싱글톤)
//! - [`appointments`] - MongoDB 예약 리포지토리 (`#[repository]` 싱글톤)
//! - [`memory`] - 두 trait을 모두 구현하는 메모리 저장소
//!
//! ```rust,ignore
//! let users: Arc<dyn UserDirectory> = UserRepository::instance();
//! let appointments: Arc<dyn AppointmentStore> = AppointmentRepository::instance();
//! ```

pub mod stores;
pub mod users;
pub mod appointments;
pub mod memory;

pub use stores::{AppointmentStore, UserDirectory};
pub use users::UserRepository;
pub use appointments::AppointmentRepository;
pub use memory::InMemoryStore;
