//! # Core Module
//!
//! 애플리케이션 전역에서 쓰는 기반 기능입니다.
//!
//! - [`registry`] - 타입 기반 싱글톤 컨테이너 `ServiceLocator`와
//!   `#[repository]` 매크로 등록 정보
//! - [`errors`] - 전역 에러 타입 `AppError`와 안정적인 분류 `ErrorKind`
//!
//! ```rust,ignore
//! use crate::core::{errors::AppError, registry::ServiceLocator};
//!
//! let config = ServiceLocator::get::<AppConfig>();
//! ```

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
