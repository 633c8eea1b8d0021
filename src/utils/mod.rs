//! 공통 유틸리티 함수 모듈
//!
//! - [`string_utils`] - 문자열 검증과 정리
//! - [`date_utils`] - 예약일(`YYYY-MM-DD`) 파싱
//!
//! ```rust,ignore
//! use crate::utils::string_utils::validate_required_string;
//! use crate::utils::date_utils::parse_calendar_date;
//!
//! let service = validate_required_string("  cleaning ", "service")?;
//! let date = parse_calendar_date("2024-03-10")?;
//! ```

pub mod string_utils;
pub mod date_utils;
