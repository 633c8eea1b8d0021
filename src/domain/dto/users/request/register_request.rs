//! 회원가입 요청 DTO

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::domain::entities::users::UserType;

/// 회원가입 요청
///
/// 관리자 계정은 자체 가입할 수 없습니다.
///
/// ```json
/// {
///   "email": "maria@example.com",
///   "password": "secret1",
///   "name": "Maria",
///   "phone": "+55 11 99999-0000",
///   "user_type": "provider"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 6, message = "비밀번호는 최소 6자 이상이어야 합니다"))]
    pub password: String,

    #[validate(length(min = 1, max = 100, message = "이름은 1-100자 사이여야 합니다"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 30, message = "전화번호가 너무 깁니다"))]
    pub phone: String,

    #[validate(custom(function = "validate_self_service_role"))]
    pub user_type: UserType,
}

fn validate_self_service_role(user_type: &UserType) -> Result<(), ValidationError> {
    if *user_type == UserType::Admin {
        return Err(ValidationError::new("admin_registration")
            .with_message("관리자 계정은 직접 가입할 수 없습니다".into()));
    }
    Ok(())
}
