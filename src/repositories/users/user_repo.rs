//! # 사용자 리포지토리 구현
//!
//! MongoDB `users` 컬렉션을 주 저장소로 사용하고, Redis로 조회를 캐싱합니다.
//! 서비스 제공자 프로필은 사용자 문서의 `provider_profile` 필드에 포함됩니다.

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{bson::{self, doc, oid::ObjectId, DateTime}, options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument}, IndexModel};
use singleton_macro::repository;
use crate::{
    caching::redis::RedisClient,
    config::AppConfig,
    core::{errors::AppError, registry::{Repository, ServiceLocator}},
    db::Database,
    domain::entities::users::{ProviderProfile, User},
    repositories::stores::UserDirectory,
};

/// 캐시 TTL 기본값 (10분)
const DEFAULT_CACHE_TTL_SECONDS: usize = 600;

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

fn email_cache_key(email: &str) -> String {
    format!("user:email:{}", email)
}

pub(crate) fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};

    matches!(
        &*error.kind,
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}

/// 사용자 데이터 액세스 리포지토리
///
/// ## 캐싱 전략
///
/// - **키 패턴**: `user:{user_id}`, `user:email:{email}`
/// - **TTL**: `CACHE_TTL_SECONDS` (기본 600초)
/// - **무효화**: 사용자 문서가 바뀌는 모든 쓰기 후 두 키를 모두 삭제
///
/// 캐시 읽기/쓰기 실패는 무시하고 MongoDB 결과를 사용합니다.
///
/// ## 인덱스
///
/// - `email` (unique)
/// - `user_type`, `is_active`, `provider_profile.is_verified` (매칭 조회)
#[repository(name = "user", collection = "users")]
pub struct UserRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl UserRepository {
    fn cache_ttl(&self) -> usize {
        ServiceLocator::try_get::<AppConfig>()
            .map(|config| config.cache.ttl_seconds)
            .unwrap_or(DEFAULT_CACHE_TTL_SECONDS)
    }

    async fn cache_user(&self, user: &User) {
        let ttl = self.cache_ttl();

        if let Some(id) = user.id_string() {
            let _ = self.redis.set_with_expiry(&self.cache_key(&id), user, ttl).await;
        }
        let _ = self.redis.set_with_expiry(&email_cache_key(&user.email), user, ttl).await;
    }

    async fn evict_user(&self, id: &str, email: &str) {
        let _ = self.invalidate_cache(id).await;
        let _ = self.redis.del(&email_cache_key(email)).await;
    }

    /// `$set` 업데이트 후 최신 문서를 반환하고 캐시를 무효화합니다.
    async fn update_fields(&self, id: &str, fields: bson::Document) -> Result<Option<User>, AppError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self.collection::<User>()
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": fields })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref user) = updated {
            self.evict_user(id, &user.email).await;
        }

        Ok(updated)
    }

    /// 사용자 컬렉션 인덱스를 생성합니다. 애플리케이션 시작 시 한 번 호출합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let matching_index = IndexModel::builder()
            .keys(doc! { "user_type": 1, "is_active": 1, "provider_profile.is_verified": 1 })
            .options(IndexOptions::builder()
                .name("provider_matching".to_string())
                .build())
            .build();

        self.collection::<User>()
            .create_indexes([email_index, matching_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl UserDirectory for UserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        if let Ok(Some(cached)) = self.redis.get::<User>(&self.cache_key(id)).await {
            return Ok(Some(cached));
        }

        let user = self.collection::<User>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref user) = user {
            self.cache_user(user).await;
        }

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        if let Ok(Some(cached)) = self.redis.get::<User>(&email_cache_key(email)).await {
            return Ok(Some(cached));
        }

        let user = self.collection::<User>()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref user) = user {
            self.cache_user(user).await;
        }

        Ok(user)
    }

    async fn create(&self, mut user: User) -> Result<User, AppError> {
        if UserDirectory::find_by_email(self, &user.email).await?.is_some() {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        user.id = Some(ObjectId::new());

        // 동시 가입은 unique 인덱스가 최종적으로 막습니다.
        self.collection::<User>()
            .insert_one(&user)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ConflictError("이미 사용 중인 이메일입니다".to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        let _ = self.invalidate_collection_cache(None).await;

        Ok(user)
    }

    async fn set_active(&self, id: &str, is_active: bool) -> Result<Option<User>, AppError> {
        self.update_fields(id, doc! {
            "is_active": is_active,
            "updated_at": DateTime::now(),
        }).await
    }

    async fn save_provider_profile(&self, id: &str, profile: ProviderProfile) -> Result<Option<User>, AppError> {
        let profile_doc = bson::to_document(&profile)
            .map_err(|e| AppError::InternalError(format!("프로필 직렬화 실패: {}", e)))?;

        self.update_fields(id, doc! {
            "provider_profile": profile_doc,
            "updated_at": DateTime::now(),
        }).await
    }
}
