//! # 예약 도메인 서비스
//!
//! 예약 생성, 목록 조회, 상태 변경, 예약 가능한 서비스 제공자 조회를 담당합니다.
//!
//! 서비스 자체는 상태를 갖지 않습니다. 모든 가변 상태는 주입된
//! [`UserDirectory`]와 [`AppointmentStore`]에 있으므로 여러 워커가
//! 하나의 `Arc<BookingService>`를 동시에 사용할 수 있습니다.
//!
//! ```text
//! HTTP handler ──▶ BookingService ──▶ UserDirectory    (MongoDB + Redis | memory)
//!                                 └─▶ AppointmentStore (MongoDB | memory)
//! ```

use std::sync::Arc;
use chrono::NaiveDate;
use crate::{
    domain::entities::{
        appointments::{Appointment, AppointmentStatus, StatusPolicy},
        users::User,
    },
    repositories::stores::{AppointmentStore, UserDirectory},
    services::booking::BookingError,
};

/// 새 예약 요청 (고객 ID는 인증된 호출자에게서 옵니다)
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub provider_id: String,
    pub service: String,
    pub date: NaiveDate,
    pub time: String,
    pub notes: String,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// 예약 목록을 어느 쪽 참여자 기준으로 조회할지
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Participant {
    /// 내가 예약한 목록
    Client,
    /// 나에게 들어온 작업 목록
    Provider,
}

/// 예약 도메인 서비스
///
/// ```rust,ignore
/// let booking = BookingService::new(users, appointments, StatusPolicy::Permissive);
///
/// let appointment = booking.create_booking(&client_id, new_booking).await?;
/// booking.transition_status(&provider_id, &appointment_id, "confirmed").await?;
/// ```
pub struct BookingService {
    users: Arc<dyn UserDirectory>,
    appointments: Arc<dyn AppointmentStore>,
    policy: StatusPolicy,
}

impl BookingService {
    pub fn new(
        users: Arc<dyn UserDirectory>,
        appointments: Arc<dyn AppointmentStore>,
        policy: StatusPolicy,
    ) -> Self {
        Self { users, appointments, policy }
    }

    /// 새 예약을 `pending` 상태로 생성합니다.
    ///
    /// 서비스 제공자가 존재하고 역할이 `provider`인지만 확인합니다.
    /// 같은 날짜의 기존 예약과 겹치는지는 확인하지 않습니다.
    pub async fn create_booking(&self, client_id: &str, booking: NewBooking) -> Result<Appointment, BookingError> {
        let provider = self.users
            .find_by_id(&booking.provider_id)
            .await?
            .ok_or_else(|| BookingError::ProviderNotFound(booking.provider_id.clone()))?;

        if !provider.is_provider() {
            return Err(BookingError::NotAProvider(booking.provider_id));
        }

        let appointment = Appointment::new_pending(
            client_id.to_string(),
            booking.provider_id,
            booking.service,
            booking.date,
            booking.time,
            booking.notes,
            booking.location,
            booking.latitude,
            booking.longitude,
        );

        let created = self.appointments.insert(appointment).await?;

        log::info!(
            "예약 생성: {} (고객: {}, 제공자: {}, 날짜: {})",
            created.id_string().unwrap_or_default(),
            created.client_id,
            created.provider_id,
            created.date
        );

        Ok(created)
    }

    /// 참여자 기준 예약 목록 (날짜 내림차순)
    pub async fn list_appointments(
        &self,
        user_id: &str,
        participant: Participant,
        status: Option<&str>,
    ) -> Result<Vec<Appointment>, BookingError> {
        let appointments = match participant {
            Participant::Client => self.appointments.list_by_client(user_id, status).await?,
            Participant::Provider => self.appointments.list_by_provider(user_id, status).await?,
        };

        Ok(appointments)
    }

    /// 예약 상태를 변경합니다.
    ///
    /// # 검사 순서
    ///
    /// 1. 예약 존재 여부 (`AppointmentNotFound`)
    /// 2. 호출자 존재 여부 (`UserNotFound`)
    /// 3. 호출자가 고객, 서비스 제공자 또는 관리자인지 (`Forbidden`)
    /// 4. 상태 정책 (`InvalidTransition`)
    pub async fn transition_status(
        &self,
        acting_user_id: &str,
        appointment_id: &str,
        new_status: &str,
    ) -> Result<Appointment, BookingError> {
        let appointment = self.appointments
            .find_by_id(appointment_id)
            .await?
            .ok_or_else(|| BookingError::AppointmentNotFound(appointment_id.to_string()))?;

        let acting_user = self.users
            .find_by_id(acting_user_id)
            .await?
            .ok_or_else(|| BookingError::UserNotFound(acting_user_id.to_string()))?;

        if !appointment.involves(acting_user_id) && !acting_user.is_admin() {
            log::warn!(
                "예약 상태 변경 거부: 사용자 {}는 예약 {}의 참여자가 아닙니다",
                acting_user_id,
                appointment_id
            );
            return Err(BookingError::Forbidden);
        }

        let next = AppointmentStatus::from(new_status);
        if !self.policy.permits(&appointment.status, &next) {
            return Err(BookingError::InvalidTransition {
                from: appointment.status.to_string(),
                to: new_status.to_string(),
            });
        }

        let updated = self.appointments
            .update_status(appointment_id, &next)
            .await?
            .ok_or_else(|| BookingError::AppointmentNotFound(appointment_id.to_string()))?;

        log::info!(
            "예약 상태 변경: {} {} → {} (요청자: {})",
            appointment_id,
            appointment.status,
            updated.status,
            acting_user_id
        );

        Ok(updated)
    }

    /// 해당 날짜에 예약 가능한 서비스 제공자
    ///
    /// `service`는 받기만 하고 필터링에 쓰지 않습니다.
    pub async fn find_available_providers(&self, date: NaiveDate, service: &str) -> Result<Vec<User>, BookingError> {
        let providers = self.appointments.find_available_providers(date).await?;

        log::debug!(
            "예약 가능 제공자 조회: {} (서비스: {}) → {}명",
            date,
            service,
            providers.len()
        );

        Ok(providers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::core::errors::{AppError, ErrorKind};
    use crate::domain::entities::users::{ProviderProfile, UserType};
    use crate::repositories::memory::InMemoryStore;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    struct Fixture {
        store: Arc<InMemoryStore>,
        service: BookingService,
    }

    impl Fixture {
        fn new(policy: StatusPolicy) -> Self {
            let store = Arc::new(InMemoryStore::new());
            let service = BookingService::new(store.clone(), store.clone(), policy);
            Self { store, service }
        }

        async fn user(&self, email: &str, user_type: UserType) -> String {
            let user = User::new(email.to_string(), "hash".to_string(), "Name".to_string(), String::new(), user_type);
            let created = UserDirectory::create(self.store.as_ref(), user).await.unwrap();
            created.id_string().unwrap()
        }

        async fn verified_provider(&self, email: &str) -> String {
            let id = self.user(email, UserType::Provider).await;
            let profile = ProviderProfile {
                is_verified: true,
                services: vec!["cleaning".to_string()],
                ..ProviderProfile::unverified()
            };
            self.store.save_provider_profile(&id, profile).await.unwrap();
            id
        }

        async fn book(&self, client_id: &str, provider_id: &str, date: &str) -> Appointment {
            self.service
                .create_booking(client_id, booking(provider_id, date))
                .await
                .unwrap()
        }
    }

    fn booking(provider_id: &str, date: &str) -> NewBooking {
        NewBooking {
            provider_id: provider_id.to_string(),
            service: "haircut".to_string(),
            date: day(date),
            time: "10:00".to_string(),
            notes: String::new(),
            location: "Rua A, 100".to_string(),
            latitude: -23.55,
            longitude: -46.63,
        }
    }

    fn ids(users: &[User]) -> Vec<String> {
        users.iter().filter_map(User::id_string).collect()
    }

    #[actix_web::test]
    async fn test_create_booking_is_pending_with_zero_price() {
        let fx = Fixture::new(StatusPolicy::Permissive);
        let client = fx.user("c@example.com", UserType::Client).await;
        let provider = fx.verified_provider("p@example.com").await;

        let appointment = fx.book(&client, &provider, "2025-03-01").await;

        assert!(appointment.id.is_some());
        assert_eq!(appointment.status, AppointmentStatus::Pending);
        assert_eq!(appointment.client_id, client);
        assert_eq!(appointment.provider_id, provider);
        assert_eq!(appointment.service, "haircut");
        assert_eq!(appointment.price, 0.0);
        assert_eq!(appointment.duration_minutes, 0);
    }

    #[actix_web::test]
    async fn test_create_booking_requires_existing_provider() {
        let fx = Fixture::new(StatusPolicy::Permissive);
        let client = fx.user("c@example.com", UserType::Client).await;

        let result = fx.service
            .create_booking(&client, booking("65f1c0c2a1b2c3d4e5f60718", "2025-03-01"))
            .await;

        assert!(matches!(result, Err(BookingError::ProviderNotFound(_))));
    }

    #[actix_web::test]
    async fn test_create_booking_rejects_client_and_admin_targets() {
        let fx = Fixture::new(StatusPolicy::Permissive);
        let client = fx.user("c@example.com", UserType::Client).await;
        let other_client = fx.user("c2@example.com", UserType::Client).await;
        let admin = fx.user("a@example.com", UserType::Admin).await;

        for target in [other_client, admin] {
            let result = fx.service.create_booking(&client, booking(&target, "2025-03-01")).await;
            assert!(matches!(result, Err(BookingError::NotAProvider(_))));
        }
    }

    #[actix_web::test]
    async fn test_double_booking_is_allowed_at_creation() {
        let fx = Fixture::new(StatusPolicy::Permissive);
        let client = fx.user("c@example.com", UserType::Client).await;
        let provider = fx.verified_provider("p@example.com").await;

        fx.book(&client, &provider, "2025-03-01").await;
        fx.book(&client, &provider, "2025-03-01").await;

        let jobs = fx.service.list_appointments(&provider, Participant::Provider, None).await.unwrap();
        assert_eq!(jobs.len(), 2);
    }

    #[actix_web::test]
    async fn test_list_appointments_filters_and_orders() {
        let fx = Fixture::new(StatusPolicy::Permissive);
        let client = fx.user("c@example.com", UserType::Client).await;
        let provider = fx.verified_provider("p@example.com").await;

        fx.book(&client, &provider, "2025-03-01").await;
        let confirmed = fx.book(&client, &provider, "2025-03-10").await;
        fx.book(&client, &provider, "2025-03-05").await;
        fx.service
            .transition_status(&provider, &confirmed.id_string().unwrap(), "confirmed")
            .await
            .unwrap();

        let all = fx.service.list_appointments(&client, Participant::Client, None).await.unwrap();
        let dates: Vec<String> = all.iter().map(|a| a.date.to_string()).collect();
        assert_eq!(dates, vec!["2025-03-10", "2025-03-05", "2025-03-01"]);

        let only_confirmed = fx.service
            .list_appointments(&client, Participant::Client, Some("confirmed"))
            .await
            .unwrap();
        assert_eq!(only_confirmed.len(), 1);
        assert!(only_confirmed.iter().all(|a| a.status.as_str() == "confirmed"));

        let jobs = fx.service
            .list_appointments(&provider, Participant::Provider, Some("pending"))
            .await
            .unwrap();
        assert_eq!(jobs.len(), 2);

        let none = fx.service
            .list_appointments(&client, Participant::Provider, None)
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[actix_web::test]
    async fn test_booking_lifecycle_scenario() {
        let fx = Fixture::new(StatusPolicy::Permissive);
        let client = fx.user("c@example.com", UserType::Client).await;
        let provider = fx.verified_provider("p@example.com").await;
        let stranger = fx.user("u@example.com", UserType::Client).await;

        let appointment = fx.book(&client, &provider, "2025-03-01").await;
        let id = appointment.id_string().unwrap();
        assert_eq!(appointment.status, AppointmentStatus::Pending);

        let confirmed = fx.service.transition_status(&provider, &id, "confirmed").await.unwrap();
        assert_eq!(confirmed.status, AppointmentStatus::Confirmed);

        let cancelled = fx.service.transition_status(&client, &id, "cancelled").await.unwrap();
        assert_eq!(cancelled.status, AppointmentStatus::Cancelled);

        let stored = AppointmentStore::find_by_id(fx.store.as_ref(), &id).await.unwrap().unwrap();
        assert_eq!(stored.status, AppointmentStatus::Cancelled);
        assert_eq!(stored.service, "haircut");
        assert_eq!(stored.time, "10:00");

        let denied = fx.service.transition_status(&stranger, &id, "completed").await;
        assert!(matches!(denied, Err(BookingError::Forbidden)));
    }

    #[actix_web::test]
    async fn test_admin_may_transition_any_appointment() {
        let fx = Fixture::new(StatusPolicy::Permissive);
        let client = fx.user("c@example.com", UserType::Client).await;
        let provider = fx.verified_provider("p@example.com").await;
        let admin = fx.user("admin@example.com", UserType::Admin).await;

        let id = fx.book(&client, &provider, "2025-03-01").await.id_string().unwrap();

        let updated = fx.service.transition_status(&admin, &id, "in_progress").await.unwrap();
        assert_eq!(updated.status, AppointmentStatus::InProgress);
    }

    #[actix_web::test]
    async fn test_transition_unknown_appointment_and_user() {
        let fx = Fixture::new(StatusPolicy::Permissive);
        let client = fx.user("c@example.com", UserType::Client).await;
        let provider = fx.verified_provider("p@example.com").await;
        let id = fx.book(&client, &provider, "2025-03-01").await.id_string().unwrap();

        let missing = fx.service.transition_status(&client, "65f1c0c2a1b2c3d4e5f60718", "confirmed").await;
        assert!(matches!(missing, Err(BookingError::AppointmentNotFound(_))));

        let ghost = fx.service.transition_status("65f1c0c2a1b2c3d4e5f60719", &id, "confirmed").await;
        assert!(matches!(ghost, Err(BookingError::UserNotFound(_))));
    }

    #[actix_web::test]
    async fn test_permissive_policy_stores_any_status_string() {
        let fx = Fixture::new(StatusPolicy::Permissive);
        let client = fx.user("c@example.com", UserType::Client).await;
        let provider = fx.verified_provider("p@example.com").await;
        let id = fx.book(&client, &provider, "2025-03-01").await.id_string().unwrap();

        let completed = fx.service.transition_status(&provider, &id, "completed").await.unwrap();
        assert_eq!(completed.status, AppointmentStatus::Completed);

        // 종료 상태에서도 되돌릴 수 있습니다.
        let reopened = fx.service.transition_status(&provider, &id, "pending").await.unwrap();
        assert_eq!(reopened.status, AppointmentStatus::Pending);

        let custom = fx.service.transition_status(&client, &id, "rescheduled").await.unwrap();
        assert_eq!(custom.status.as_str(), "rescheduled");

        // 공백은 정리하지 않고 보낸 그대로 저장합니다.
        let padded = fx.service.transition_status(&provider, &id, " confirmed ").await.unwrap();
        assert_eq!(padded.status.as_str(), " confirmed ");
        assert_ne!(padded.status, AppointmentStatus::Confirmed);

        let stored = fx.service.list_appointments(&client, Participant::Client, Some(" confirmed ")).await.unwrap();
        assert_eq!(stored.len(), 1);

        let blank = fx.service.transition_status(&client, &id, "   ").await.unwrap();
        assert_eq!(blank.status.as_str(), "   ");

        let empty = fx.service.transition_status(&client, &id, "").await;
        assert!(matches!(empty, Err(BookingError::InvalidTransition { .. })));
    }

    #[actix_web::test]
    async fn test_enforced_policy_rejects_illegal_transitions() {
        let fx = Fixture::new(StatusPolicy::Enforced);
        let client = fx.user("c@example.com", UserType::Client).await;
        let provider = fx.verified_provider("p@example.com").await;
        let id = fx.book(&client, &provider, "2025-03-01").await.id_string().unwrap();

        let skip = fx.service.transition_status(&provider, &id, "completed").await;
        assert!(matches!(skip, Err(BookingError::InvalidTransition { .. })));

        let unknown = fx.service.transition_status(&provider, &id, "rescheduled").await;
        assert!(matches!(unknown, Err(BookingError::InvalidTransition { .. })));

        fx.service.transition_status(&provider, &id, "confirmed").await.unwrap();
        fx.service.transition_status(&provider, &id, "in_progress").await.unwrap();
        fx.service.transition_status(&provider, &id, "completed").await.unwrap();

        let after_terminal = fx.service.transition_status(&client, &id, "cancelled").await;
        match after_terminal {
            Err(error) => assert_eq!(error.kind(), ErrorKind::InvalidInput),
            Ok(appointment) => panic!("terminal state changed to {}", appointment.status),
        }
    }

    #[actix_web::test]
    async fn test_forbidden_is_checked_before_policy() {
        let fx = Fixture::new(StatusPolicy::Enforced);
        let client = fx.user("c@example.com", UserType::Client).await;
        let provider = fx.verified_provider("p@example.com").await;
        let stranger = fx.user("u@example.com", UserType::Provider).await;
        let id = fx.book(&client, &provider, "2025-03-01").await.id_string().unwrap();

        let result = fx.service.transition_status(&stranger, &id, "not-a-status").await;
        assert!(matches!(result, Err(BookingError::Forbidden)));
    }

    #[actix_web::test]
    async fn test_available_providers_exclude_busy_dates() {
        let fx = Fixture::new(StatusPolicy::Permissive);
        let client = fx.user("c@example.com", UserType::Client).await;
        let busy = fx.verified_provider("busy@example.com").await;
        let free = fx.verified_provider("free@example.com").await;

        let id = fx.book(&client, &busy, "2025-03-01").await.id_string().unwrap();
        fx.service.transition_status(&busy, &id, "confirmed").await.unwrap();

        let on_first = ids(&fx.service.find_available_providers(day("2025-03-01"), "haircut").await.unwrap());
        assert!(!on_first.contains(&busy));
        assert!(on_first.contains(&free));

        let on_second = ids(&fx.service.find_available_providers(day("2025-03-02"), "haircut").await.unwrap());
        assert!(on_second.contains(&busy));
        assert!(on_second.contains(&free));
    }

    #[actix_web::test]
    async fn test_cancelled_appointments_do_not_block_availability() {
        let fx = Fixture::new(StatusPolicy::Permissive);
        let client = fx.user("c@example.com", UserType::Client).await;
        let provider = fx.verified_provider("p@example.com").await;

        let id = fx.book(&client, &provider, "2025-03-01").await.id_string().unwrap();
        fx.service.transition_status(&client, &id, "cancelled").await.unwrap();

        let available = ids(&fx.service.find_available_providers(day("2025-03-01"), "haircut").await.unwrap());
        assert!(available.contains(&provider));
    }

    #[actix_web::test]
    async fn test_service_argument_does_not_filter_providers() {
        let fx = Fixture::new(StatusPolicy::Permissive);
        let client = fx.user("c@example.com", UserType::Client).await;
        let cleaner = fx.verified_provider("p@example.com").await;
        let busy = fx.verified_provider("busy@example.com").await;
        fx.book(&client, &busy, "2025-03-01").await;

        for service in ["cleaning", "plumbing", ""] {
            let available = ids(&fx.service.find_available_providers(day("2025-03-01"), service).await.unwrap());
            assert!(available.contains(&cleaner));
            assert!(!available.contains(&busy));
        }
    }

    #[actix_web::test]
    async fn test_unverified_and_inactive_providers_are_not_available() {
        let fx = Fixture::new(StatusPolicy::Permissive);
        let unverified = fx.user("new@example.com", UserType::Provider).await;
        fx.store.save_provider_profile(&unverified, ProviderProfile::unverified()).await.unwrap();
        fx.user("bare@example.com", UserType::Provider).await;
        let inactive = fx.verified_provider("off@example.com").await;
        fx.store.set_active(&inactive, false).await.unwrap();

        let available = ids(&fx.service.find_available_providers(day("2025-03-01"), "cleaning").await.unwrap());
        assert!(available.is_empty(), "unexpected providers: {:?}", available);
    }

    /// 모든 호출이 저장소 장애를 반환하는 저장소
    struct FailingStore;

    fn outage() -> AppError {
        AppError::DatabaseError("connection refused".to_string())
    }

    #[async_trait]
    impl UserDirectory for FailingStore {
        async fn find_by_id(&self, _id: &str) -> Result<Option<User>, AppError> {
            Err(outage())
        }
        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, AppError> {
            Err(outage())
        }
        async fn create(&self, _user: User) -> Result<User, AppError> {
            Err(outage())
        }
        async fn set_active(&self, _id: &str, _is_active: bool) -> Result<Option<User>, AppError> {
            Err(outage())
        }
        async fn save_provider_profile(&self, _id: &str, _profile: ProviderProfile) -> Result<Option<User>, AppError> {
            Err(outage())
        }
    }

    #[async_trait]
    impl AppointmentStore for FailingStore {
        async fn find_by_id(&self, _id: &str) -> Result<Option<Appointment>, AppError> {
            Err(outage())
        }
        async fn list_by_client(&self, _id: &str, _status: Option<&str>) -> Result<Vec<Appointment>, AppError> {
            Err(outage())
        }
        async fn list_by_provider(&self, _id: &str, _status: Option<&str>) -> Result<Vec<Appointment>, AppError> {
            Err(outage())
        }
        async fn insert(&self, _appointment: Appointment) -> Result<Appointment, AppError> {
            Err(outage())
        }
        async fn update_status(&self, _id: &str, _status: &AppointmentStatus) -> Result<Option<Appointment>, AppError> {
            Err(outage())
        }
        async fn find_available_providers(&self, _date: NaiveDate) -> Result<Vec<User>, AppError> {
            Err(outage())
        }
    }

    #[actix_web::test]
    async fn test_store_failures_propagate_unchanged() {
        let store = Arc::new(FailingStore);
        let service = BookingService::new(store.clone(), store, StatusPolicy::Permissive);

        let results = [
            service.create_booking("c", booking("p", "2025-03-01")).await.map(|_| ()),
            service.list_appointments("c", Participant::Client, None).await.map(|_| ()),
            service.transition_status("c", "a", "confirmed").await.map(|_| ()),
            service.find_available_providers(day("2025-03-01"), "cleaning").await.map(|_| ()),
        ];

        for result in results {
            let error = result.unwrap_err();
            assert_eq!(error.kind(), ErrorKind::StoreFailure);
            match AppError::from(error) {
                AppError::DatabaseError(msg) => assert_eq!(msg, "connection refused"),
                other => panic!("unexpected {:?}", other),
            }
        }
    }
}
