//! Admin HTTP Handlers
//!
//! 모든 경로는 `admin` 역할이 필요합니다.

use actix_web::{patch, web, HttpResponse};
use crate::{
    core::errors::AppError,
    domain::{
        dto::users::request::{SetActiveRequest, SetVerificationRequest},
        models::auth::AuthenticatedUser,
    },
    handlers::service,
    services::users::{AccountService, ProfileService},
};

#[patch("/providers/{user_id}/verification")]
pub async fn set_provider_verification(
    user_id: web::Path<String>,
    payload: web::Json<SetVerificationRequest>,
) -> Result<HttpResponse, AppError> {
    let profile = service::<ProfileService>()?
        .set_verification(&user_id, payload.is_verified)
        .await?;

    Ok(HttpResponse::Ok().json(profile))
}

#[patch("/users/{user_id}/active")]
pub async fn set_user_active(
    admin: AuthenticatedUser,
    user_id: web::Path<String>,
    payload: web::Json<SetActiveRequest>,
) -> Result<HttpResponse, AppError> {
    let user = service::<AccountService>()?
        .set_active(&admin.user_id, &user_id, payload.is_active)
        .await?;

    Ok(HttpResponse::Ok().json(user))
}
