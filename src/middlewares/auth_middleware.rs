//! 인증 미들웨어
//!
//! 스코프 단위로 Bearer 토큰 인증과 역할 검사를 적용합니다.
//!
//! ```rust,ignore
//! web::scope("/appointments")
//!     .wrap(AuthMiddleware::required())
//!
//! web::scope("/admin")
//!     .wrap(AuthMiddleware::required_with_role(UserType::Admin))
//! ```

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::domain::entities::users::UserType;
use crate::domain::models::auth::RequiredRole;
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// 유효한 액세스 토큰을 요구하는 미들웨어
///
/// 검증에 성공하면 [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser)를
/// 요청 extensions에 넣습니다. 토큰이 없거나 유효하지 않으면 401,
/// 역할이 맞지 않으면 403으로 응답합니다.
pub struct AuthMiddleware {
    required_role: Option<RequiredRole>,
}

impl AuthMiddleware {
    pub fn required() -> Self {
        Self { required_role: None }
    }

    pub fn required_with_role(role: UserType) -> Self {
        Self {
            required_role: Some(RequiredRole::Single(role)),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            required_role: self.required_role.clone(),
        }))
    }
}
