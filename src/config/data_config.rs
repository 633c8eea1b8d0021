//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, 저장소(MongoDB/메모리), Redis 캐시,
//! Rate Limiting 관련 설정을 정의합니다.
//! 모든 값은 [`AppConfig::from_env`](super::AppConfig::from_env) 에서 한 번만 읽습니다.

use super::EnvSource;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 값에서 실행 환경을 결정합니다.
    ///
    /// 값이 없으면 `Production`을 기본값으로 사용합니다.
    pub(crate) fn from_source(source: &EnvSource<'_>) -> Self {
        source
            .get("ENVIRONMENT")
            .map(|value| Self::from_str(&value))
            .unwrap_or(Environment::Production)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 대소문자를 구분하지 않으며, 알 수 없는 값은 `Production`으로 취급합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 서버 바인딩 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// 바인딩 호스트 (기본값: "0.0.0.0")
    pub host: String,
    /// 바인딩 포트 (기본값: 8080)
    pub port: u16,
    /// actix 워커 스레드 수 (기본값: 4)
    pub workers: usize,
}

impl ServerConfig {
    pub(crate) fn from_source(source: &EnvSource<'_>) -> Self {
        Self {
            host: source.get_or("HOST", "0.0.0.0"),
            port: source.parse_or("PORT", 8080),
            workers: source.parse_or("SERVER_WORKERS", 4),
        }
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 사용자/예약 데이터를 보관할 저장소 종류
#[derive(Debug, Clone, PartialEq)]
pub enum StorageBackend {
    /// MongoDB + Redis (운영 기본값)
    MongoDb,
    /// 프로세스 내 메모리 저장소 (로컬 실행, 테스트용)
    Memory,
}

impl StorageBackend {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => StorageBackend::Memory,
            _ => StorageBackend::MongoDb,
        }
    }
}

/// 데이터베이스 연결 설정
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// 저장소 종류 (`STORAGE_BACKEND`)
    pub backend: StorageBackend,
    /// MongoDB 연결 URI (`MONGODB_URI`)
    pub mongodb_uri: String,
    /// 사용할 데이터베이스 이름 (`DATABASE_NAME`)
    pub database_name: String,
}

impl DatabaseConfig {
    pub(crate) fn from_source(source: &EnvSource<'_>) -> Self {
        Self {
            backend: source
                .get("STORAGE_BACKEND")
                .map(|value| StorageBackend::from_str(&value))
                .unwrap_or(StorageBackend::MongoDb),
            mongodb_uri: source.get_or("MONGODB_URI", "mongodb://localhost:27017"),
            database_name: source.get_or("DATABASE_NAME", "booking_dev"),
        }
    }
}

/// Redis 캐시 설정
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Redis 연결 URL (`REDIS_URL`)
    pub redis_url: String,
    /// 사용자 조회 캐시 TTL, 초 단위 (`CACHE_TTL_SECONDS`, 기본값 600)
    pub ttl_seconds: usize,
}

impl CacheConfig {
    pub(crate) fn from_source(source: &EnvSource<'_>) -> Self {
        Self {
            redis_url: source.get_or("REDIS_URL", "redis://localhost:6379"),
            ttl_seconds: source.parse_or("CACHE_TTL_SECONDS", 600),
        }
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// 초당 허용 요청 수 (`RATE_LIMIT_PER_SECOND`, 기본값 100)
    pub per_second: u64,
    /// 버스트 허용량 (`RATE_LIMIT_BURST_SIZE`, 기본값 200)
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub(crate) fn from_source(source: &EnvSource<'_>) -> Self {
        Self {
            per_second: source.parse_or("RATE_LIMIT_PER_SECOND", 100),
            burst_size: source.parse_or("RATE_LIMIT_BURST_SIZE", 200),
        }
    }
}
