//! Provider Profile HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `PUT` | `/providers/me/profile` | 내 프로필 생성/교체 (서비스 제공자) |
//! | `GET` | `/providers/{id}/profile` | 프로필 조회 (공개) |

use actix_web::{get, put, web, HttpResponse};
use validator::Validate;
use crate::{
    core::errors::AppError,
    domain::{dto::users::request::ProviderProfileRequest, models::auth::AuthenticatedUser},
    handlers::service,
    services::users::ProfileService,
};

#[put("/profile")]
pub async fn save_my_profile(
    user: AuthenticatedUser,
    payload: web::Json<ProviderProfileRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let profile = service::<ProfileService>()?
        .save_profile(&user.user_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(profile))
}

#[get("/{user_id}/profile")]
pub async fn get_profile(
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let profile = service::<ProfileService>()?.get_profile(&user_id).await?;

    Ok(HttpResponse::Ok().json(profile))
}
