use serde::Deserialize;

/// 관리자의 서비스 제공자 검증 플래그 변경 요청
#[derive(Debug, Deserialize)]
pub struct SetVerificationRequest {
    pub is_verified: bool,
}

/// 관리자의 계정 활성화/비활성화 요청
#[derive(Debug, Deserialize)]
pub struct SetActiveRequest {
    pub is_active: bool,
}
