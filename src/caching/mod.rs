//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 조회 캐시와 JSON 기반 객체 직렬화를 제공합니다.
//! 현재는 사용자 조회(`user:{id}`, `user:email:{email}`)에만 사용됩니다.
//!
//! ```rust,ignore
//! use crate::caching::redis::RedisClient;
//!
//! let cache = RedisClient::new(&config.cache).await?;
//! cache.set_with_expiry("user:email:alice@example.com", &user, 600).await?;
//!
//! let cached: Option<User> = cache.get("user:email:alice@example.com").await?;
//! ```

pub mod redis;
