pub mod register_request;
pub mod login_request;
pub mod provider_profile_request;
pub mod admin_request;

pub use register_request::RegisterRequest;
pub use login_request::LoginRequest;
pub use provider_profile_request::ProviderProfileRequest;
pub use admin_request::{SetActiveRequest, SetVerificationRequest};
