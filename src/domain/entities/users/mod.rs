//! Users Entity Module
//!
//! 사용자 엔티티와 역할, 서비스 제공자 프로필을 정의합니다.
//!
//! ```rust,ignore
//! use crate::domain::entities::users::{User, UserType};
//!
//! let user = User::new(email, password_hash, name, phone, UserType::Client);
//! ```

pub mod user;

pub use user::{ProviderProfile, User, UserType};
