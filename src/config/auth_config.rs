//! # Authentication Configuration Module
//!
//! JWT 토큰 서명과 비밀번호 해싱 관련 설정을 관리합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! export BCRYPT_COST="12"          # 4-31 범위, 미지정 시 환경별 기본값
//! ```

use super::{EnvSource, Environment};

/// JWT 서명 설정
#[derive(Clone)]
pub struct JwtConfig {
    /// HMAC 서명 키
    pub secret: String,
    /// 액세스 토큰 유효 시간 (시간 단위, 기본값 24)
    pub expiration_hours: i64,
}

impl JwtConfig {
    pub(crate) fn from_source(source: &EnvSource<'_>) -> Self {
        let secret = source.get("JWT_SECRET").unwrap_or_else(|| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "your-secret-key".to_string()
        });

        Self {
            secret,
            expiration_hours: source.parse_or("JWT_EXPIRATION_HOURS", 24),
        }
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"***")
            .field("expiration_hours", &self.expiration_hours)
            .finish()
    }
}

/// 패스워드 해싱 설정
#[derive(Debug, Clone)]
pub struct PasswordConfig {
    /// bcrypt cost
    pub bcrypt_cost: u32,
}

impl PasswordConfig {
    pub(crate) fn from_source(source: &EnvSource<'_>, environment: &Environment) -> Self {
        let bcrypt_cost = source
            .get("BCRYPT_COST")
            .and_then(|value| value.parse::<u32>().ok())
            .filter(|cost| (4..=31).contains(cost))
            .unwrap_or_else(|| Self::bcrypt_cost_for_env(environment));

        Self { bcrypt_cost }
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10 (중간 보안)
    /// - Production: 12 (고보안)
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}
