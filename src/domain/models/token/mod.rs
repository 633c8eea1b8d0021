pub mod token;

pub use token::{Identity, IssuedToken, TokenClaims};
