//! 서비스 제공자 프로필 서비스

use std::sync::Arc;
use mongodb::bson::DateTime;
use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::users::{request::ProviderProfileRequest, response::ProviderProfileResponse},
        entities::users::{ProviderProfile, User},
    },
    repositories::stores::UserDirectory,
};

fn profile_response(user: User) -> AppResult<ProviderProfileResponse> {
    let user_id = user.id_string().unwrap_or_default();
    let profile = user
        .provider_profile
        .ok_or_else(|| AppError::NotFound("서비스 제공자 프로필이 없습니다".to_string()))?;

    Ok(ProviderProfileResponse::from_profile(user_id, &user.name, profile))
}

/// 서비스 제공자 프로필의 생성, 조회, 검증 플래그 관리
pub struct ProfileService {
    users: Arc<dyn UserDirectory>,
}

impl ProfileService {
    pub fn new(users: Arc<dyn UserDirectory>) -> Self {
        Self { users }
    }

    async fn find_provider(&self, user_id: &str) -> AppResult<User> {
        let user = self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        if !user.is_provider() {
            return Err(AppError::AuthorizationError("서비스 제공자만 프로필을 가질 수 있습니다".to_string()));
        }

        Ok(user)
    }

    /// 서비스 제공자가 자신의 프로필을 생성하거나 교체합니다.
    ///
    /// 검증 플래그는 요청에서 받지 않으며 기존 값이 유지됩니다.
    /// 처음 만드는 프로필은 검증되지 않은 상태입니다.
    pub async fn save_profile(&self, provider_id: &str, request: ProviderProfileRequest) -> AppResult<ProviderProfileResponse> {
        let user = self.find_provider(provider_id).await?;
        let is_verified = user.provider_profile.as_ref().is_some_and(|profile| profile.is_verified);

        let profile = ProviderProfile {
            description: request.description.trim().to_string(),
            hourly_rate: request.hourly_rate,
            service_radius_km: request.service_radius_km,
            is_verified,
            latitude: request.latitude,
            longitude: request.longitude,
            address: request.address.trim().to_string(),
            services: request
                .services
                .into_iter()
                .map(|service| service.trim().to_string())
                .filter(|service| !service.is_empty())
                .collect(),
            working_hours: request.working_hours,
            updated_at: DateTime::now(),
        };

        let updated = self.users
            .save_provider_profile(provider_id, profile)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        log::info!("서비스 제공자 프로필 저장: {}", provider_id);

        profile_response(updated)
    }

    pub async fn get_profile(&self, user_id: &str) -> AppResult<ProviderProfileResponse> {
        let user = self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        profile_response(user)
    }

    /// 관리자가 서비스 제공자의 검증 플래그를 변경합니다.
    ///
    /// 대상은 프로필을 가진 서비스 제공자여야 합니다.
    pub async fn set_verification(&self, user_id: &str, is_verified: bool) -> AppResult<ProviderProfileResponse> {
        let user = self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        if !user.is_provider() {
            return Err(AppError::ValidationError("서비스 제공자가 아닌 사용자입니다".to_string()));
        }

        let mut profile = user
            .provider_profile
            .ok_or_else(|| AppError::NotFound("서비스 제공자 프로필이 없습니다".to_string()))?;
        profile.is_verified = is_verified;
        profile.updated_at = DateTime::now();

        let updated = self.users
            .save_provider_profile(user_id, profile)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        log::warn!("서비스 제공자 검증 상태 변경: {} → {}", user_id, is_verified);

        profile_response(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::UserType;
    use crate::repositories::memory::InMemoryStore;

    async fn setup(user_type: UserType) -> (ProfileService, String) {
        let store = Arc::new(InMemoryStore::new());
        let user = User::new("p@example.com".to_string(), "hash".to_string(), "Joana".to_string(), String::new(), user_type);
        let id = store.create(user).await.unwrap().id_string().unwrap();
        (ProfileService::new(store), id)
    }

    fn request(description: &str) -> ProviderProfileRequest {
        serde_json::from_value(serde_json::json!({
            "description": description,
            "hourly_rate": 80.0,
            "services": ["cleaning", "  ", " ironing "],
        }))
        .unwrap()
    }

    #[actix_web::test]
    async fn test_first_profile_is_unverified() {
        let (profiles, id) = setup(UserType::Provider).await;

        let saved = profiles.save_profile(&id, request("Diarista")).await.unwrap();

        assert_eq!(saved.user_id, id);
        assert_eq!(saved.name, "Joana");
        assert!(!saved.is_verified);
        assert_eq!(saved.services, vec!["cleaning", "ironing"]);
    }

    #[actix_web::test]
    async fn test_resave_preserves_verification() {
        let (profiles, id) = setup(UserType::Provider).await;
        profiles.save_profile(&id, request("Diarista")).await.unwrap();
        profiles.set_verification(&id, true).await.unwrap();

        let saved = profiles.save_profile(&id, request("Diarista e passadeira")).await.unwrap();

        assert!(saved.is_verified);
        assert_eq!(saved.description, "Diarista e passadeira");
    }

    #[actix_web::test]
    async fn test_non_provider_cannot_save_profile() {
        let (profiles, id) = setup(UserType::Client).await;

        let result = profiles.save_profile(&id, request("x")).await;
        assert!(matches!(result, Err(AppError::AuthorizationError(_))));
    }

    #[actix_web::test]
    async fn test_get_profile_not_found_cases() {
        let (profiles, id) = setup(UserType::Provider).await;

        assert!(matches!(profiles.get_profile(&id).await, Err(AppError::NotFound(_))));
        assert!(matches!(profiles.get_profile("unknown").await, Err(AppError::NotFound(_))));

        profiles.save_profile(&id, request("Diarista")).await.unwrap();
        assert_eq!(profiles.get_profile(&id).await.unwrap().description, "Diarista");
    }

    #[actix_web::test]
    async fn test_set_verification_requires_provider_with_profile() {
        let (profiles, id) = setup(UserType::Provider).await;
        assert!(matches!(profiles.set_verification(&id, true).await, Err(AppError::NotFound(_))));

        let (client_profiles, client_id) = setup(UserType::Client).await;
        assert!(matches!(
            client_profiles.set_verification(&client_id, true).await,
            Err(AppError::ValidationError(_))
        ));

        profiles.save_profile(&id, request("Diarista")).await.unwrap();
        assert!(profiles.set_verification(&id, true).await.unwrap().is_verified);
        assert!(!profiles.set_verification(&id, false).await.unwrap().is_verified);
    }
}
