//! # 날짜 유틸리티
//!
//! 예약은 달력 날짜 단위로만 다룹니다. 시간대 변환은 하지 않습니다.

use chrono::NaiveDate;
use crate::core::errors::AppError;

/// 예약일 표기 형식
pub const CALENDAR_DATE_FORMAT: &str = "%Y-%m-%d";

/// `YYYY-MM-DD` 문자열을 날짜로 파싱합니다.
///
/// 형식이 맞지 않거나 존재하지 않는 날짜(예: 2월 30일)면 `ValidationError`를 반환합니다.
pub fn parse_calendar_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), CALENDAR_DATE_FORMAT).map_err(|_| {
        AppError::ValidationError(format!(
            "날짜 형식이 올바르지 않습니다 (YYYY-MM-DD): {}",
            value
        ))
    })
}

/// 날짜를 `YYYY-MM-DD` 문자열로 변환합니다.
pub fn format_calendar_date(date: NaiveDate) -> String {
    date.format(CALENDAR_DATE_FORMAT).to_string()
}

/// `validator`의 custom 검증 함수로 사용하는 날짜 형식 검사
pub fn validate_calendar_date(value: &str) -> Result<(), validator::ValidationError> {
    parse_calendar_date(value).map(|_| ()).map_err(|_| {
        validator::ValidationError::new("invalid_date")
            .with_message("날짜는 YYYY-MM-DD 형식이어야 합니다".into())
    })
}
