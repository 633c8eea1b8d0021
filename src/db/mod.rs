//! Database Connection Management Module
//!
//! MongoDB 연결을 생성하고 리포지토리 계층에 `mongodb::Database` 핸들을 제공합니다.
//! 연결 정보는 [`DatabaseConfig`]로 주입받습니다.
//!
//! ```rust,ignore
//! use crate::db::Database;
//! use crate::core::registry::ServiceLocator;
//!
//! let database = Database::new(&config.database).await?;
//! ServiceLocator::set(Arc::new(database));
//! ServiceLocator::initialize_all().await?;
//! ```

use mongodb::{Client, options::ClientOptions};
use log::info;
use crate::config::DatabaseConfig;

/// MongoDB 데이터베이스 연결 래퍼
///
/// `users`, `appointments` 컬렉션을 사용하는 리포지토리가 공유합니다.
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 새 MongoDB 데이터베이스 연결을 생성합니다.
    ///
    /// 클라이언트를 만든 뒤 `ping` 명령으로 연결 상태를 검증합니다.
    pub async fn new(config: &DatabaseConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let mut client_options = ClientOptions::parse(&config.mongodb_uri).await?;

        // 모니터링 및 로깅에서 식별할 애플리케이션 이름
        client_options.app_name = Some("booking_service".to_string());

        let client = Client::with_options(client_options)?;

        client
            .database(&config.database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", config.database_name);

        Ok(Self {
            client,
            database_name: config.database_name.clone(),
        })
    }

    /// 리포지토리가 컬렉션에 접근할 때 사용하는 데이터베이스 핸들
    ///
    /// ```rust,ignore
    /// let appointments = database.get_database().collection::<Appointment>("appointments");
    /// ```
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }
}
