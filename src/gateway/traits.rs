//! Trait abstraction for the authentication backend to enable mocking in tests

use super::types::{AuthError, Credentials, Profile, Session};
use async_trait::async_trait;

/// Backend operations used by the submission controller
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Sign in with email and password
    async fn authenticate(&self, credentials: Credentials) -> Result<Session, AuthError>;

    /// Create an account and sign in
    async fn register(&self, profile: Profile) -> Result<Session, AuthError>;

    /// Sign in through a third-party provider
    async fn authenticate_social(&self, provider: String) -> Result<Session, AuthError>;
}
