//! Authentication HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/auth/register` | 회원가입 후 토큰 발급 | 201 Created |
//! | `POST` | `/auth/login` | 이메일/비밀번호 로그인 | 200 OK |
//! | `GET` | `/auth/me` | 현재 사용자 정보 (인증 필요) | 200 OK |

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::{
    core::errors::AppError,
    domain::{
        dto::users::request::{LoginRequest, RegisterRequest},
        models::auth::AuthenticatedUser,
    },
    handlers::service,
    services::users::AccountService,
};

#[post("/register")]
pub async fn register(
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let accounts = service::<AccountService>()?;
    let response = accounts.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

#[post("/login")]
pub async fn login(
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let accounts = service::<AccountService>()?;
    let response = accounts.login(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 토큰의 사용자 정보를 반환합니다.
#[get("")]
pub async fn me(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    let accounts = service::<AccountService>()?;
    let response = accounts.current_user(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(response))
}
