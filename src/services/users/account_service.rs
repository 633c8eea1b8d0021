//! # 계정 서비스
//!
//! 회원가입, 로그인, 현재 사용자 조회, 관리자의 계정 활성화 관리를 담당합니다.
//! 비밀번호 해싱과 토큰 발급은 [`CredentialService`]에 위임합니다.

use std::sync::Arc;
use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::users::{
            request::{LoginRequest, RegisterRequest},
            response::{AuthResponse, UserResponse},
        },
        entities::users::{User, UserType},
    },
    repositories::stores::UserDirectory,
    services::auth::CredentialService,
    utils::string_utils::validate_required_string,
};

const INVALID_CREDENTIALS: &str = "이메일 또는 비밀번호가 올바르지 않습니다";

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// 계정 생명주기 서비스
///
/// ```rust,ignore
/// let accounts = AccountService::new(users, credentials);
///
/// let registered = accounts.register(request).await?;
/// let logged_in = accounts.login(login_request).await?;
/// let me = accounts.current_user(&registered.user.id).await?;
/// ```
pub struct AccountService {
    users: Arc<dyn UserDirectory>,
    credentials: Arc<CredentialService>,
}

impl AccountService {
    pub fn new(users: Arc<dyn UserDirectory>, credentials: Arc<CredentialService>) -> Self {
        Self { users, credentials }
    }

    /// 새 계정을 만들고 바로 액세스 토큰을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 관리자 역할로 가입하거나 이름이 비어 있는 경우
    /// * `ConflictError` - 이미 등록된 이메일
    pub async fn register(&self, request: RegisterRequest) -> AppResult<AuthResponse> {
        if request.user_type == UserType::Admin {
            return Err(AppError::ValidationError("관리자 계정은 직접 가입할 수 없습니다".to_string()));
        }

        let name = validate_required_string(&request.name, "이름")?;
        let email = normalize_email(&request.email);

        let start_time = std::time::Instant::now();
        let password_hash = self.credentials.hash_password(&request.password)?;
        log::debug!("Password hashing took: {:?}", start_time.elapsed());

        let user = User::new(email, password_hash, name, request.phone.trim().to_string(), request.user_type);
        let created = self.users.create(user).await?;

        let user_id = created
            .id_string()
            .ok_or_else(|| AppError::InternalError("저장된 사용자에 ID가 없습니다".to_string()))?;
        let token = self.credentials.issue_token(&user_id, created.user_type)?;

        log::info!("회원가입: {} ({}, {})", created.email, user_id, created.user_type);

        Ok(AuthResponse::new(token, created))
    }

    /// 이메일과 비밀번호로 로그인합니다.
    ///
    /// 존재하지 않는 이메일과 틀린 비밀번호는 같은 메시지로 거부합니다.
    /// 비활성화된 계정은 `AuthorizationError`입니다.
    pub async fn login(&self, request: LoginRequest) -> AppResult<AuthResponse> {
        let email = normalize_email(&request.email);

        let Some(user) = self.users.find_by_email(&email).await? else {
            log::warn!("로그인 실패 (미등록 이메일): {}", email);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        };

        if !self.credentials.verify_password(&user.password_hash, &request.password) {
            log::warn!("로그인 실패 (비밀번호 불일치): {}", email);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        }

        if !user.is_active {
            log::warn!("로그인 거부 (비활성 계정): {}", email);
            return Err(AppError::AuthorizationError("비활성화된 계정입니다".to_string()));
        }

        let user_id = user
            .id_string()
            .ok_or_else(|| AppError::InternalError("저장된 사용자에 ID가 없습니다".to_string()))?;
        let token = self.credentials.issue_token(&user_id, user.user_type)?;

        log::info!("로그인 성공: {} ({})", user.email, user_id);

        Ok(AuthResponse::new(token, user))
    }

    pub async fn current_user(&self, user_id: &str) -> AppResult<UserResponse> {
        self.users
            .find_by_id(user_id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }

    /// 관리자가 계정을 활성화하거나 비활성화합니다.
    ///
    /// 관리자 자신의 계정은 비활성화할 수 없습니다.
    pub async fn set_active(&self, admin_id: &str, user_id: &str, is_active: bool) -> AppResult<UserResponse> {
        if admin_id == user_id && !is_active {
            return Err(AppError::ValidationError("자신의 계정은 비활성화할 수 없습니다".to_string()));
        }

        let updated = self.users
            .set_active(user_id, is_active)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        log::warn!("계정 활성 상태 변경: {} → {} (관리자: {})", user_id, is_active, admin_id);

        Ok(UserResponse::from(updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{JwtConfig, PasswordConfig};
    use crate::repositories::memory::InMemoryStore;

    fn service() -> (Arc<InMemoryStore>, Arc<CredentialService>, AccountService) {
        let store = Arc::new(InMemoryStore::new());
        let jwt = JwtConfig {
            secret: "account-test-secret".to_string(),
            expiration_hours: 24,
        };
        let credentials = Arc::new(CredentialService::new(&jwt, &PasswordConfig { bcrypt_cost: 4 }));
        let accounts = AccountService::new(store.clone(), credentials.clone());
        (store, credentials, accounts)
    }

    fn register_request(email: &str, user_type: UserType) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            password: "secret1".to_string(),
            name: "Maria".to_string(),
            phone: "+55 11 99999-0000".to_string(),
            user_type,
        }
    }

    fn login_request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[actix_web::test]
    async fn test_register_issues_token_for_new_user() {
        let (_, credentials, accounts) = service();

        let response = accounts
            .register(register_request("Maria@Example.com", UserType::Provider))
            .await
            .unwrap();

        assert_eq!(response.user.email, "maria@example.com");
        assert_eq!(response.user.user_type, UserType::Provider);
        assert_eq!(response.token_type, "Bearer");

        let identity = credentials.validate_token(&response.access_token).unwrap();
        assert_eq!(identity.user_id, response.user.id);
        assert_eq!(identity.user_type, UserType::Provider);
    }

    #[actix_web::test]
    async fn test_register_rejects_duplicates_and_admin() {
        let (_, _, accounts) = service();
        accounts.register(register_request("a@example.com", UserType::Client)).await.unwrap();

        let duplicate = accounts.register(register_request("a@example.com", UserType::Provider)).await;
        assert!(matches!(duplicate, Err(AppError::ConflictError(_))));

        let admin = accounts.register(register_request("root@example.com", UserType::Admin)).await;
        assert!(matches!(admin, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn test_register_stores_hash_not_password() {
        let (store, credentials, accounts) = service();
        accounts.register(register_request("a@example.com", UserType::Client)).await.unwrap();

        let stored = store.find_by_email("a@example.com").await.unwrap().unwrap();
        assert_ne!(stored.password_hash, "secret1");
        assert!(credentials.verify_password(&stored.password_hash, "secret1"));
    }

    #[actix_web::test]
    async fn test_login_success_and_failures() {
        let (store, _, accounts) = service();
        let registered = accounts.register(register_request("a@example.com", UserType::Client)).await.unwrap();

        let ok = accounts.login(login_request(" A@example.com ", "secret1")).await.unwrap();
        assert_eq!(ok.user.id, registered.user.id);

        let wrong = accounts.login(login_request("a@example.com", "secret2")).await;
        assert!(matches!(wrong, Err(AppError::AuthenticationError(_))));

        let unknown = accounts.login(login_request("nobody@example.com", "secret1")).await;
        assert!(matches!(unknown, Err(AppError::AuthenticationError(_))));

        store.set_active(&registered.user.id, false).await.unwrap();
        let inactive = accounts.login(login_request("a@example.com", "secret1")).await;
        assert!(matches!(inactive, Err(AppError::AuthorizationError(_))));
    }

    #[actix_web::test]
    async fn test_current_user_and_set_active() {
        let (_, _, accounts) = service();
        let user = accounts.register(register_request("a@example.com", UserType::Client)).await.unwrap().user;

        let me = accounts.current_user(&user.id).await.unwrap();
        assert_eq!(me.email, "a@example.com");

        let missing = accounts.current_user("65f1c0c2a1b2c3d4e5f60718").await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));

        let deactivated = accounts.set_active("admin-id", &user.id, false).await.unwrap();
        assert!(!deactivated.is_active);

        let self_lockout = accounts.set_active("admin-id", "admin-id", false).await;
        assert!(matches!(self_lockout, Err(AppError::ValidationError(_))));

        let ghost = accounts.set_active("admin-id", "65f1c0c2a1b2c3d4e5f60718", true).await;
        assert!(matches!(ghost, Err(AppError::NotFound(_))));
    }
}
