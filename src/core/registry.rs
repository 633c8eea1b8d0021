//! # Service Registry - 싱글톤 의존성 주입 시스템
//!
//! 타입을 키로 하는 전역 싱글톤 컨테이너입니다.
//!
//! 두 가지 방식으로 인스턴스가 채워집니다.
//!
//! 1. **매크로 등록**: `#[repository]` 매크로가 `inventory`로
//!    등록 정보를 제출하고, 첫 `get` 호출 시(또는 `initialize_all` 시) 생성됩니다.
//!    `Arc<T>` 필드는 다시 `ServiceLocator::get::<T>()`로 주입됩니다.
//! 2. **직접 등록**: 설정(`AppConfig`), 인프라(`Database`, `RedisClient`),
//!    생성자 주입으로 만든 도메인 서비스(`BookingService` 등)는
//!    `main`에서 [`ServiceLocator::set`]으로 등록합니다.
//!
//! ```rust,ignore
//! ServiceLocator::set(Arc::new(AppConfig::from_env()));
//! ServiceLocator::set(database);
//! ServiceLocator::set(redis_client);
//! ServiceLocator::initialize_all().await?;
//!
//! let booking = ServiceLocator::get::<BookingService>();
//! ```
//!
//! 순환 의존성은 초기화 중인 타입을 추적하여 즉시 패닉으로 드러냅니다.

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, PoisonError, RwLock};
use async_trait::async_trait;
use once_cell::sync::Lazy;

/// 데이터 액세스 리포지토리를 위한 공통 인터페이스 (`#[repository]`가 구현)
#[async_trait]
pub trait Repository: Send + Sync {
    /// 레지스트리에서 리포지토리를 식별하는 이름
    fn name(&self) -> &str;

    /// 연결된 MongoDB 컬렉션 이름
    fn collection_name(&self) -> &str;

    /// 인덱스 생성 등 초기화 훅
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// `#[repository]` 매크로가 제출하는 등록 정보
pub struct RepositoryRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

inventory::collect!(RepositoryRegistration);

/// 정규화된 이름 → 생성자 (예: `appointment_repository` → `appointment`)
static REPOSITORY_CONSTRUCTORS: Lazy<HashMap<String, &'static RepositoryRegistration>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<RepositoryRegistration>()
        .map(|registration| (normalize_registration_name(registration.name), registration))
        .collect();

    log::debug!("Repository 레지스트리 캐시 구성: {}개", cache.len());
    cache
});

fn normalize_registration_name(name: &str) -> String {
    name.strip_suffix("_repository")
        .unwrap_or(name)
        .to_string()
}

/// `crate::repositories::UserRepository` → `UserRepository`
fn short_type_name(type_name: &str) -> &str {
    type_name.rsplit("::").next().unwrap_or(type_name)
}

/// 요청된 타입 이름에 대응하는 생성자를 찾습니다.
///
/// `AppointmentRepository` → 리포지토리 레지스트리의 `appointment`.
fn find_constructor(type_name: &str) -> Option<(&'static str, fn() -> Box<dyn Any + Send + Sync>)> {
    let entity = short_type_name(type_name).strip_suffix("Repository")?;

    REPOSITORY_CONSTRUCTORS
        .get(&entity.to_lowercase())
        .map(|registration| (registration.name, registration.constructor))
}

/// 싱글톤 의존성 주입 컨테이너
pub struct ServiceLocator {
    /// 생성되었거나 직접 등록된 인스턴스
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
    /// 현재 생성 중인 타입 (순환 참조 감지)
    initializing: RwLock<HashSet<TypeId>>,
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(|| ServiceLocator {
    instances: RwLock::new(HashMap::new()),
    initializing: RwLock::new(HashSet::new()),
});

impl ServiceLocator {
    /// 이미 존재하는 인스턴스만 조회합니다. 생성을 시도하지 않습니다.
    pub fn try_get<T: 'static + Send + Sync>() -> Option<Arc<T>> {
        let instances = LOCATOR
            .instances
            .read()
            .unwrap_or_else(PoisonError::into_inner);

        instances
            .get(&TypeId::of::<T>())
            .and_then(|instance| instance.clone().downcast::<T>().ok())
    }

    /// 지정된 타입의 싱글톤 인스턴스를 가져옵니다.
    ///
    /// 캐시에 없으면 매크로 등록 정보로 생성한 뒤 캐시에 저장합니다.
    ///
    /// # Panics
    ///
    /// - 순환 의존성이 감지된 경우
    /// - 직접 등록되지도, 매크로로 등록되지도 않은 타입인 경우
    /// - 등록된 생성자가 다른 타입을 만든 경우
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        if let Some(instance) = Self::try_get::<T>() {
            return instance;
        }

        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        {
            let mut initializing = LOCATOR
                .initializing
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            if !initializing.insert(type_id) {
                panic!("Circular dependency detected: {} is already being initialized", type_name);
            }
        }

        // 생성자는 내부에서 다시 get()을 호출하므로 락을 잡지 않은 상태로 실행합니다.
        let created = find_constructor(type_name).map(|(name, constructor)| {
            let boxed = constructor();
            boxed
                .downcast::<Arc<T>>()
                .map(|arc| (*arc).clone())
                .unwrap_or_else(|_| panic!("Type mismatch for registration: {}", name))
        });

        LOCATOR
            .initializing
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&type_id);

        let Some(instance) = created else {
            panic!(
                "Service not found: {}. Register it with #[repository] or ServiceLocator::set()",
                type_name
            );
        };

        let mut instances = LOCATOR
            .instances
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let stored = instances
            .entry(type_id)
            .or_insert_with(|| instance as Arc<dyn Any + Send + Sync>)
            .clone();

        stored
            .downcast::<T>()
            .unwrap_or_else(|_| panic!("Type mismatch in ServiceLocator: {}", type_name))
    }

    /// 외부에서 생성된 인스턴스를 직접 등록합니다.
    ///
    /// 같은 타입이 이미 있으면 교체합니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_name = std::any::type_name::<T>();
        log::info!("📦 Registering: {}", short_type_name(type_name));

        LOCATOR
            .instances
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
    }

    /// 매크로로 등록된 모든 리포지토리를 미리 생성합니다.
    ///
    /// 호출 전에 `Database`, `RedisClient` 등 인프라가 `set` 되어 있어야 합니다.
    pub async fn initialize_all() -> Result<(), Box<dyn std::error::Error>> {
        log::info!("🔄 서비스 레지스트리 초기화 시작");

        let mut repo_count = 0;
        for registration in inventory::iter::<RepositoryRegistration>() {
            let _instance = (registration.constructor)();
            log::info!("  ✓ Repository 생성: {}", registration.name);
            repo_count += 1;
        }

        log::info!("✅ 레지스트리 초기화 완료: Repository {}개", repo_count);

        Ok(())
    }
}
