//! 홈 서비스 예약 백엔드 메인 애플리케이션
//!
//! 설정을 읽고 저장소(MongoDB + Redis 또는 메모리)를 연결한 뒤
//! 도메인 서비스를 등록하고 Actix-web HTTP 서버를 구동합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use booking_service_backend::caching::redis::RedisClient;
use booking_service_backend::config::{AppConfig, StorageBackend};
use booking_service_backend::core::registry::ServiceLocator;
use booking_service_backend::db::Database;
use booking_service_backend::repositories::{
    AppointmentRepository, AppointmentStore, InMemoryStore, UserDirectory, UserRepository,
};
use booking_service_backend::routes::configure_all_routes;
use booking_service_backend::services::register_services;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 예약 서비스 시작중...");

    let config = Arc::new(AppConfig::from_env());
    info!("실행 환경: {:?}, 저장소: {:?}", config.environment, config.database.backend);
    ServiceLocator::set(config.clone());

    let (users, appointments) = match config.database.backend {
        StorageBackend::Memory => {
            info!("💾 메모리 저장소 사용 (재시작 시 데이터가 사라집니다)");
            let store = Arc::new(InMemoryStore::new());
            let users: Arc<dyn UserDirectory> = store.clone();
            let appointments: Arc<dyn AppointmentStore> = store;
            (users, appointments)
        },
        StorageBackend::MongoDb => initialize_data_stores(&config)
            .await
            .map_err(|e| {
                error!("저장소 초기화 실패: {}", e);
                std::io::Error::other(e.to_string())
            })?,
    };

    register_services(&config, users, appointments);

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(&config).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 접근 로그, 경로 정규화 미들웨어를 포함합니다.
async fn start_http_server(config: &AppConfig) -> std::io::Result<()> {
    let bind_address = config.server.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(config.rate_limit.per_second)
        .burst_size(config.rate_limit.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        config.rate_limit.per_second,
        config.rate_limit.burst_size
    );

    HttpServer::new(move || {
        let cors = configure_cors();

        App::new()
            .wrap(Governor::new(&governor_conf))

            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(config.server.workers)
        .run()
        .await
}

fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// MongoDB와 Redis를 연결하고 리포지토리를 초기화합니다.
async fn initialize_data_stores(
    config: &AppConfig,
) -> Result<(Arc<dyn UserDirectory>, Arc<dyn AppointmentStore>), Box<dyn std::error::Error>> {
    info!("📡 데이터베이스 연결 중...");
    let database = Arc::new(Database::new(&config.database).await?);
    info!("✅ MongoDB 연결 성공");

    let redis_client = Arc::new(RedisClient::new(&config.cache).await?);
    info!("✅ Redis 연결 성공");

    ServiceLocator::set(database);
    ServiceLocator::set(redis_client);
    ServiceLocator::initialize_all().await?;

    let user_repo = UserRepository::instance();
    let appointment_repo = AppointmentRepository::instance();

    user_repo.create_indexes().await?;
    appointment_repo.create_indexes().await?;
    info!("✅ 인덱스 생성 완료");

    let users: Arc<dyn UserDirectory> = user_repo;
    let appointments: Arc<dyn AppointmentStore> = appointment_repo;
    Ok((users, appointments))
}

fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")

        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])

        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])

        .supports_credentials()

        .max_age(3600)
}
