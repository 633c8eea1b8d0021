//! API 라우트 설정 모듈
//!
//! 엔드포인트를 기능별 스코프로 묶고 스코프마다 인증 수준을 지정합니다.
//!
//! | 스코프 | 인증 |
//! |--------|------|
//! | `/health` | 없음 |
//! | `/api/v1/auth` | `register`, `login`은 없음, `me`는 토큰 필요 |
//! | `/api/v1/appointments` | `available-providers`는 없음, `provider`는 `provider` 역할, 나머지는 토큰 필요 |
//! | `/api/v1/providers` | `me/profile`은 `provider` 역할, 조회는 없음 |
//! | `/api/v1/admin` | `admin` 역할 |
//!
//! 공개 리소스는 같은 접두사의 인증 스코프보다 먼저 등록해야 합니다.
//! 스코프는 접두사가 맞으면 내부에 일치하는 라우트가 없어도 다음 스코프로 넘기지 않습니다.
//!
//! ```rust,ignore
//! let app = App::new().configure(configure_all_routes);
//! ```

use crate::domain::entities::users::UserType;
use crate::handlers;
use crate::middlewares::AuthMiddleware;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_auth_routes(cfg);
    configure_appointment_routes(cfg);
    configure_provider_routes(cfg);
    configure_admin_routes(cfg);
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(handlers::auth::register)
            .service(handlers::auth::login)
            .service(
                web::scope("/me")
                    .wrap(AuthMiddleware::required())
                    .service(handlers::auth::me)
            )
    );
}

fn configure_appointment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/appointments")
            .service(handlers::appointments::available_providers)
            .service(
                web::scope("/provider")
                    .wrap(AuthMiddleware::required_with_role(UserType::Provider))
                    .service(handlers::appointments::list_my_jobs)
            )
            .service(
                web::scope("")
                    .wrap(AuthMiddleware::required())
                    .service(handlers::appointments::create_appointment)
                    .service(handlers::appointments::list_my_bookings)
                    .service(handlers::appointments::update_status)
            )
    );
}

fn configure_provider_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/providers")
            .service(
                web::scope("/me")
                    .wrap(AuthMiddleware::required_with_role(UserType::Provider))
                    .service(handlers::providers::save_my_profile)
            )
            .service(handlers::providers::get_profile)
    );
}

fn configure_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/admin")
            .wrap(AuthMiddleware::required_with_role(UserType::Admin))
            .service(handlers::admin::set_provider_verification)
            .service(handlers::admin::set_user_active)
    );
}

/// 서비스 상태 확인
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "booking_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
