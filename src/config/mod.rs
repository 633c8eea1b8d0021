//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 모든 설정은 애플리케이션 시작 시 [`AppConfig::from_env`]로 한 번만 읽어
//! 타입이 있는 구조체로 만들고, 이후에는 생성자 주입으로만 전달합니다.
//! 도메인 로직 안에서 환경 변수를 직접 읽지 않습니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 저장소, 캐시, Rate Limiting 설정
//! - [`auth_config`] - JWT, 비밀번호 해싱 설정
//! - [`booking_config`] - 예약 상태 전이 정책
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::config::AppConfig;
//!
//! let config = Arc::new(AppConfig::from_env());
//! let credentials = CredentialService::new(&config.jwt, &config.password);
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! export ENVIRONMENT="production"      # development, test, staging, production
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export STORAGE_BACKEND="mongodb"     # mongodb, memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="booking"
//! export REDIS_URL="redis://localhost:6379"
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_EXPIRATION_HOURS="24"
//! export BOOKING_STATUS_POLICY="permissive"
//! ```

pub mod data_config;
pub mod auth_config;
pub mod booking_config;

pub use data_config::*;
pub use auth_config::*;
pub use booking_config::*;

use std::collections::HashMap;
use std::env;
use std::str::FromStr;

/// 설정값 조회 소스
///
/// 프로세스 환경 변수 또는 테스트용 맵에서 값을 읽습니다.
/// 빈 문자열은 설정되지 않은 것으로 취급합니다.
pub(crate) struct EnvSource<'a> {
    lookup: Box<dyn Fn(&str) -> Option<String> + 'a>,
}

impl EnvSource<'static> {
    fn process() -> Self {
        EnvSource {
            lookup: Box::new(|key: &str| env::var(key).ok()),
        }
    }
}

impl<'a> EnvSource<'a> {
    pub(crate) fn from_map(vars: &'a HashMap<String, String>) -> Self {
        Self {
            lookup: Box::new(move |key: &str| vars.get(key).cloned()),
        }
    }

    pub(crate) fn get(&self, key: &str) -> Option<String> {
        (self.lookup)(key).filter(|value| !value.trim().is_empty())
    }

    pub(crate) fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    /// 값을 파싱하고, 실패하면 에러 로그를 남긴 뒤 기본값을 사용합니다.
    pub(crate) fn parse_or<T>(&self, key: &str, default: T) -> T
    where
        T: FromStr + std::fmt::Display,
        T::Err: std::fmt::Display,
    {
        match self.get(key) {
            Some(raw) => raw.parse::<T>().unwrap_or_else(|e| {
                log::error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
                default
            }),
            None => default,
        }
    }
}

/// 애플리케이션 전체 설정
///
/// `main`에서 한 번 생성되어 `Arc<AppConfig>`로 각 컴포넌트에 주입됩니다.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cache: CacheConfig,
    pub rate_limit: RateLimitConfig,
    pub jwt: JwtConfig,
    pub password: PasswordConfig,
    pub booking: BookingConfig,
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> Self {
        Self::from_source(&EnvSource::process())
    }

    /// 주어진 키/값 맵에서 설정을 읽습니다. (테스트, 임베딩 용도)
    pub fn from_vars(vars: &HashMap<String, String>) -> Self {
        Self::from_source(&EnvSource::from_map(vars))
    }

    fn from_source(source: &EnvSource<'_>) -> Self {
        let environment = Environment::from_source(source);
        let password = PasswordConfig::from_source(source, &environment);

        Self {
            server: ServerConfig::from_source(source),
            database: DatabaseConfig::from_source(source),
            cache: CacheConfig::from_source(source),
            rate_limit: RateLimitConfig::from_source(source),
            jwt: JwtConfig::from_source(source),
            booking: BookingConfig::from_source(source),
            password,
            environment,
        }
    }
}
