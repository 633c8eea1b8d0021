//! JWT 액세스 토큰 클레임과 발급/검증 결과 구조체

use serde::{Deserialize, Serialize};
use crate::domain::entities::users::UserType;

/// JWT 토큰의 클레임(Payload) 구조체
///
/// - `sub`: 토큰의 주체 (사용자 ID)
/// - `user_type`: 발급 시점의 사용자 역할
/// - `iat`: 발급 시간 (Unix timestamp)
/// - `exp`: 만료 시간 (Unix timestamp)
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub user_type: UserType,
    pub iat: i64,
    pub exp: i64,
}

/// 로그인/회원가입 시 클라이언트에 전달되는 토큰
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedToken {
    pub access_token: String,
    /// 항상 `"Bearer"`
    pub token_type: String,
    /// 만료까지 남은 시간 (초)
    pub expires_in: i64,
}

/// 검증된 토큰에서 얻은 호출자 신원
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: String,
    pub user_type: UserType,
    /// 만료 시각 (Unix timestamp)
    pub expires_at: i64,
}

impl From<TokenClaims> for Identity {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.sub,
            user_type: claims.user_type,
            expires_at: claims.exp,
        }
    }
}
