//! # 예약 리포지토리 구현
//!
//! MongoDB `appointments` 컬렉션에 대한 데이터 액세스를 담당합니다.
//! 예약 목록은 자주 바뀌므로 캐싱하지 않습니다.

use std::sync::Arc;
use async_trait::async_trait;
use chrono::NaiveDate;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, oid::ObjectId, Bson, DateTime, Document}, options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument}, IndexModel};
use singleton_macro::repository;
use crate::{
    caching::redis::RedisClient,
    core::{errors::AppError, registry::Repository},
    db::Database,
    domain::entities::{appointments::{Appointment, AppointmentStatus}, users::{User, UserType}},
    repositories::stores::AppointmentStore,
    utils::date_utils::format_calendar_date,
};

/// 사용자 컬렉션 이름 (가용성 조회의 anti-join 대상)
const USERS_COLLECTION: &str = "users";

fn participant_filter(field: &str, user_id: &str, status: Option<&str>) -> Document {
    let mut filter = Document::new();
    filter.insert(field, user_id);
    if let Some(status) = status {
        filter.insert("status", status);
    }
    filter
}

/// 예약 데이터 액세스 리포지토리
///
/// ## 저장 형식
///
/// - `client_id`, `provider_id`: 사용자 ObjectId의 16진수 문자열
/// - `date`: `YYYY-MM-DD` 문자열 (문자열 정렬 = 날짜 정렬)
/// - `status`: 상태 문자열 원문
///
/// ## 인덱스
///
/// - `(client_id, date desc)` - 고객 예약 목록
/// - `(provider_id, date desc)` - 서비스 제공자 작업 목록
/// - `(date, status)` - 날짜별 가용성 조회
#[repository(name = "appointment", collection = "appointments")]
pub struct AppointmentRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl AppointmentRepository {
    async fn list_by(&self, filter: Document) -> Result<Vec<Appointment>, AppError> {
        let cursor = self.collection::<Appointment>()
            .find(filter)
            .sort(doc! { "date": -1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 예약 컬렉션 인덱스를 생성합니다. 애플리케이션 시작 시 한 번 호출합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let client_index = IndexModel::builder()
            .keys(doc! { "client_id": 1, "date": -1 })
            .options(IndexOptions::builder()
                .name("client_date".to_string())
                .build())
            .build();

        let provider_index = IndexModel::builder()
            .keys(doc! { "provider_id": 1, "date": -1 })
            .options(IndexOptions::builder()
                .name("provider_date".to_string())
                .build())
            .build();

        let availability_index = IndexModel::builder()
            .keys(doc! { "date": 1, "status": 1 })
            .options(IndexOptions::builder()
                .name("date_status".to_string())
                .build())
            .build();

        self.collection::<Appointment>()
            .create_indexes([client_index, provider_index, availability_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl AppointmentStore for AppointmentRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Appointment>, AppError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        self.collection::<Appointment>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn list_by_client(&self, client_id: &str, status: Option<&str>) -> Result<Vec<Appointment>, AppError> {
        self.list_by(participant_filter("client_id", client_id, status)).await
    }

    async fn list_by_provider(&self, provider_id: &str, status: Option<&str>) -> Result<Vec<Appointment>, AppError> {
        self.list_by(participant_filter("provider_id", provider_id, status)).await
    }

    async fn insert(&self, mut appointment: Appointment) -> Result<Appointment, AppError> {
        appointment.id = Some(ObjectId::new());

        self.collection::<Appointment>()
            .insert_one(&appointment)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(appointment)
    }

    async fn update_status(&self, id: &str, status: &AppointmentStatus) -> Result<Option<Appointment>, AppError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection::<Appointment>()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": { "status": status.as_str(), "updated_at": DateTime::now() } },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_available_providers(&self, date: NaiveDate) -> Result<Vec<User>, AppError> {
        let busy_provider_ids: Vec<Bson> = self.collection::<Appointment>()
            .distinct(
                "provider_id",
                doc! {
                    "date": format_calendar_date(date),
                    "status": { "$ne": AppointmentStatus::Cancelled.as_str() },
                },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // provider_id는 16진수 문자열로 저장되므로 _id 비교를 위해 ObjectId로 되돌립니다.
        let busy_object_ids: Vec<ObjectId> = busy_provider_ids
            .iter()
            .filter_map(|id| id.as_str())
            .filter_map(|id| ObjectId::parse_str(id).ok())
            .collect();

        let cursor = self.db.get_database()
            .collection::<User>(USERS_COLLECTION)
            .find(doc! {
                "user_type": UserType::Provider.as_str(),
                "is_active": true,
                "provider_profile.is_verified": true,
                "_id": { "$nin": busy_object_ids },
            })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
