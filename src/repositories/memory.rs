//! # 메모리 저장소
//!
//! [`UserDirectory`]와 [`AppointmentStore`]를 프로세스 메모리에 구현합니다.
//! `STORAGE_BACKEND=memory`로 로컬 실행할 때와 테스트에서 사용합니다.
//! 프로세스가 종료되면 데이터는 사라집니다.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use async_trait::async_trait;
use chrono::NaiveDate;
use mongodb::bson::{oid::ObjectId, DateTime};
use crate::core::errors::AppError;
use crate::domain::entities::appointments::{Appointment, AppointmentStatus};
use crate::domain::entities::users::{ProviderProfile, User};
use crate::repositories::stores::{AppointmentStore, UserDirectory};

/// `RwLock<HashMap>` 기반 저장소
///
/// 두 trait을 모두 구현하므로 하나의 `Arc<InMemoryStore>`를
/// 사용자 디렉터리와 예약 저장소로 함께 주입할 수 있습니다.
#[derive(Default)]
pub struct InMemoryStore {
    users: RwLock<HashMap<String, User>>,
    appointments: RwLock<HashMap<String, Appointment>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn update_user<F>(&self, id: &str, apply: F) -> Option<User>
    where
        F: FnOnce(&mut User),
    {
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);
        users.get_mut(id).map(|user| {
            apply(user);
            user.updated_at = DateTime::now();
            user.clone()
        })
    }

    fn list_matching<F>(&self, status: Option<&str>, participant: F) -> Vec<Appointment>
    where
        F: Fn(&Appointment) -> bool,
    {
        let appointments = self.appointments.read().unwrap_or_else(PoisonError::into_inner);

        let mut matching: Vec<Appointment> = appointments
            .values()
            .filter(|appointment| participant(appointment))
            .filter(|appointment| status.is_none_or(|status| appointment.status.as_str() == status))
            .cloned()
            .collect();

        matching.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        matching
    }
}

#[async_trait]
impl UserDirectory for InMemoryStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);
        Ok(users.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);
        Ok(users.values().find(|user| user.email == email).cloned())
    }

    async fn create(&self, mut user: User) -> Result<User, AppError> {
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);

        if users.values().any(|existing| existing.email == user.email) {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        let id = ObjectId::new();
        user.id = Some(id);
        users.insert(id.to_hex(), user.clone());

        Ok(user)
    }

    async fn set_active(&self, id: &str, is_active: bool) -> Result<Option<User>, AppError> {
        Ok(self.update_user(id, |user| user.is_active = is_active))
    }

    async fn save_provider_profile(&self, id: &str, profile: ProviderProfile) -> Result<Option<User>, AppError> {
        Ok(self.update_user(id, |user| user.provider_profile = Some(profile)))
    }
}

#[async_trait]
impl AppointmentStore for InMemoryStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<Appointment>, AppError> {
        let appointments = self.appointments.read().unwrap_or_else(PoisonError::into_inner);
        Ok(appointments.get(id).cloned())
    }

    async fn list_by_client(&self, client_id: &str, status: Option<&str>) -> Result<Vec<Appointment>, AppError> {
        Ok(self.list_matching(status, |appointment| appointment.client_id == client_id))
    }

    async fn list_by_provider(&self, provider_id: &str, status: Option<&str>) -> Result<Vec<Appointment>, AppError> {
        Ok(self.list_matching(status, |appointment| appointment.provider_id == provider_id))
    }

    async fn insert(&self, mut appointment: Appointment) -> Result<Appointment, AppError> {
        let id = ObjectId::new();
        appointment.id = Some(id);

        self.appointments
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.to_hex(), appointment.clone());

        Ok(appointment)
    }

    async fn update_status(&self, id: &str, status: &AppointmentStatus) -> Result<Option<Appointment>, AppError> {
        let mut appointments = self.appointments.write().unwrap_or_else(PoisonError::into_inner);

        Ok(appointments.get_mut(id).map(|appointment| {
            appointment.status = status.clone();
            appointment.updated_at = DateTime::now();
            appointment.clone()
        }))
    }

    async fn find_available_providers(&self, date: NaiveDate) -> Result<Vec<User>, AppError> {
        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);
        let appointments = self.appointments.read().unwrap_or_else(PoisonError::into_inner);

        Ok(users
            .iter()
            .filter(|(_, user)| user.is_matchable_provider())
            .filter(|(id, _)| !appointments.values().any(|appointment| appointment.occupies(id, date)))
            .map(|(_, user)| user.clone())
            .collect())
    }
}
