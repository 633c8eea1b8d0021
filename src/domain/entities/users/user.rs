//! User Entity Implementation
//!
//! 마켓플레이스의 모든 사용자(고객, 서비스 제공자, 관리자)를 표현하는 엔티티입니다.
//! 서비스 제공자의 프로필은 별도 컬렉션이 아니라 사용자 문서에 포함됩니다.

use std::fmt;
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 역할
///
/// 생성 이후에는 변경되지 않습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    /// 서비스를 예약하는 고객
    Client,
    /// 서비스를 제공하는 전문가
    Provider,
    /// 운영 관리자
    Admin,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Client => "client",
            UserType::Provider => "provider",
            UserType::Admin => "admin",
        }
    }

    /// 문자열에서 역할을 파싱합니다. 대소문자를 구분하지 않습니다.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "client" => Some(UserType::Client),
            "provider" => Some(UserType::Provider),
            "admin" => Some(UserType::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 서비스 제공자 프로필
///
/// 매칭 대상이 되려면 `is_verified`가 `true`여야 합니다.
/// 검증 플래그는 관리자만 변경할 수 있습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderProfile {
    /// 자기소개
    #[serde(default)]
    pub description: String,
    /// 시간당 요금
    #[serde(default)]
    pub hourly_rate: f64,
    /// 서비스 가능 반경 (km)
    #[serde(default)]
    pub service_radius_km: f64,
    /// 관리자 검증 여부
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub address: String,
    /// 제공하는 서비스 카테고리
    #[serde(default)]
    pub services: Vec<String>,
    /// 근무 시간 설명 (형식은 클라이언트가 정함)
    #[serde(default)]
    pub working_hours: String,
    pub updated_at: DateTime,
}

impl ProviderProfile {
    /// 검증되지 않은 빈 프로필
    pub fn unverified() -> Self {
        Self {
            description: String::new(),
            hourly_rate: 0.0,
            service_radius_km: 0.0,
            is_verified: false,
            latitude: 0.0,
            longitude: 0.0,
            address: String::new(),
            services: Vec::new(),
            working_hours: String::new(),
            updated_at: DateTime::now(),
        }
    }
}

/// 사용자 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 로그인 이메일 (unique)
    pub email: String,
    /// bcrypt 해시. API 응답으로 내보내지 않습니다.
    pub password_hash: String,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    pub user_type: UserType,
    /// 비활성 계정은 로그인할 수 없고 매칭에서 제외됩니다.
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_profile: Option<ProviderProfile>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    /// 새 활성 사용자를 생성합니다. ID는 저장 시 할당됩니다.
    pub fn new(email: String, password_hash: String, name: String, phone: String, user_type: UserType) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            password_hash,
            name,
            phone,
            user_type,
            is_active: true,
            provider_profile: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID의 16진수 문자열 표현
    pub fn id_string(&self) -> Option<String> {
        self.id.map(|id| id.to_hex())
    }

    pub fn is_provider(&self) -> bool {
        self.user_type == UserType::Provider
    }

    pub fn is_admin(&self) -> bool {
        self.user_type == UserType::Admin
    }

    /// 예약 매칭 대상인지 확인합니다.
    ///
    /// 활성 상태의 서비스 제공자이면서 검증된 프로필을 가져야 합니다.
    pub fn is_matchable_provider(&self) -> bool {
        self.is_provider()
            && self.is_active
            && self
                .provider_profile
                .as_ref()
                .is_some_and(|profile| profile.is_verified)
    }
}
