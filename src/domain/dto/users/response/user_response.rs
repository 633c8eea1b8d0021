//! 사용자/인증 응답 DTO
//!
//! 엔티티에서 변환되며 `password_hash`는 절대 포함하지 않습니다.
//! 시각은 RFC 3339 문자열로 내보냅니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::{ProviderProfile, User, UserType};
use crate::domain::models::token::IssuedToken;

pub(crate) fn to_rfc3339(value: DateTime) -> String {
    value.try_to_rfc3339_string().unwrap_or_default()
}

/// 사용자 정보 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub phone: String,
    pub user_type: UserType,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_profile: Option<ProviderProfileResponse>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            email,
            name,
            phone,
            user_type,
            is_active,
            provider_profile,
            created_at,
            updated_at,
            ..
        } = user;

        let id = id.map(|id| id.to_hex()).unwrap_or_default();

        Self {
            provider_profile: provider_profile
                .map(|profile| ProviderProfileResponse::from_profile(id.clone(), &name, profile)),
            id,
            email,
            name,
            phone,
            user_type,
            is_active,
            created_at: to_rfc3339(created_at),
            updated_at: to_rfc3339(updated_at),
        }
    }
}

/// 서비스 제공자 프로필 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderProfileResponse {
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub hourly_rate: f64,
    pub service_radius_km: f64,
    pub is_verified: bool,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub services: Vec<String>,
    pub working_hours: String,
    pub updated_at: String,
}

impl ProviderProfileResponse {
    pub fn from_profile(user_id: String, name: &str, profile: ProviderProfile) -> Self {
        Self {
            user_id,
            name: name.to_string(),
            description: profile.description,
            hourly_rate: profile.hourly_rate,
            service_radius_km: profile.service_radius_km,
            is_verified: profile.is_verified,
            latitude: profile.latitude,
            longitude: profile.longitude,
            address: profile.address,
            services: profile.services,
            working_hours: profile.working_hours,
            updated_at: to_rfc3339(profile.updated_at),
        }
    }
}

/// 회원가입/로그인 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

impl AuthResponse {
    pub fn new(token: IssuedToken, user: User) -> Self {
        Self {
            access_token: token.access_token,
            token_type: token.token_type,
            expires_in: token.expires_in,
            user: UserResponse::from(user),
        }
    }
}
