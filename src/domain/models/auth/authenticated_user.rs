//! 인증된 사용자 정보
//!
//! `AuthMiddleware`가 토큰 검증에 성공하면 요청 extensions에 삽입하고,
//! 핸들러는 추출자로 받아 사용합니다.
//!
//! ```rust,ignore
//! #[get("/me")]
//! pub async fn me(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
//!     // user.user_id, user.user_type
//! }
//! ```

use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::core::errors::AppError;
use crate::domain::entities::users::UserType;
use crate::domain::models::token::token::Identity;

/// 요청을 보낸 인증된 사용자
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub user_id: String,
    /// 토큰 발급 시점의 역할
    pub user_type: UserType,
}

impl From<Identity> for AuthenticatedUser {
    fn from(identity: Identity) -> Self {
        Self {
            user_id: identity.user_id,
            user_type: identity.user_type,
        }
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "인증되지 않은 요청입니다".to_string(),
            )
            .into())),
        }
    }
}
