//! 자격 증명 서비스 구현
//!
//! 비밀번호 해싱(bcrypt)과 HS256 JWT 액세스 토큰의 발급/검증을 담당합니다.
//! 저장소에 의존하지 않는 말단 컴포넌트입니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use crate::{
    config::{JwtConfig, PasswordConfig},
    core::errors::{AppError, AppResult, ErrorContext},
    domain::entities::users::UserType,
    domain::models::token::{Identity, IssuedToken, TokenClaims},
};

const BEARER_PREFIX: &str = "Bearer ";

/// 비밀번호 해싱과 JWT 토큰을 담당하는 서비스
///
/// ```rust,ignore
/// let credentials = CredentialService::new(&config.jwt, &config.password);
///
/// let hash = credentials.hash_password("secret1")?;
/// assert!(credentials.verify_password(&hash, "secret1"));
///
/// let token = credentials.issue_token(&user_id, UserType::Client)?;
/// let identity = credentials.validate_token(&token.access_token)?;
/// ```
pub struct CredentialService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration_hours: i64,
    bcrypt_cost: u32,
}

impl CredentialService {
    pub fn new(jwt: &JwtConfig, password: &PasswordConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(jwt.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(jwt.secret.as_bytes()),
            expiration_hours: jwt.expiration_hours,
            bcrypt_cost: password.bcrypt_cost,
        }
    }

    /// 설정된 cost로 비밀번호를 해싱합니다.
    pub fn hash_password(&self, password: &str) -> AppResult<String> {
        bcrypt::hash(password, self.bcrypt_cost).context("비밀번호 해싱 실패")
    }

    /// 비밀번호가 해시와 일치하는지 확인합니다.
    ///
    /// 해시 형식이 잘못된 경우도 불일치로 취급합니다.
    pub fn verify_password(&self, hash: &str, password: &str) -> bool {
        bcrypt::verify(password, hash).unwrap_or_else(|e| {
            log::warn!("비밀번호 검증 실패 (해시 형식 오류): {}", e);
            false
        })
    }

    /// 사용자에게 액세스 토큰을 발급합니다.
    pub fn issue_token(&self, user_id: &str, user_type: UserType) -> AppResult<IssuedToken> {
        let now = Utc::now();
        let expiration = now + Duration::hours(self.expiration_hours);

        let claims = TokenClaims {
            sub: user_id.to_string(),
            user_type,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let access_token = encode(&Header::default(), &claims, &self.encoding_key)
            .context("JWT 토큰 생성 실패")?;

        Ok(IssuedToken {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.expiration_hours * 3600,
        })
    }

    /// 토큰의 서명과 만료 시간을 검증하고 호출자 신원을 반환합니다.
    pub fn validate_token(&self, token: &str) -> AppResult<Identity> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|token_data| Identity::from(token_data.claims))
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                },
                _ => AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string()),
            })
    }

    /// `Authorization` 헤더 값에서 Bearer 토큰을 추출합니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        auth_header
            .strip_prefix(BEARER_PREFIX)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string()))
    }
}
