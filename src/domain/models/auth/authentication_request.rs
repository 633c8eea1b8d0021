use crate::domain::entities::users::UserType;

/// 라우트 스코프가 요구하는 역할 정보
#[derive(Debug, Clone)]
pub enum RequiredRole {
    /// 특정 단일 역할이 필요
    Single(UserType),
}

impl RequiredRole {
    /// 사용자 역할이 요구사항을 만족하는지 확인
    pub fn is_satisfied(&self, user_type: &UserType) -> bool {
        match self {
            RequiredRole::Single(required) => required == user_type,
        }
    }
}
