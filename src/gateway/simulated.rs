//! In-process stand-in for a real authentication backend
//!
//! Mirrors the demo backend: every call waits a fixed latency, the address
//! `test@error.com` is always rejected, and social sign-in fails at random
//! with a configurable probability.

use super::traits::AuthGateway;
use super::types::{AuthError, Credentials, Profile, Session};
use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;

/// Email address that always fails credential flows
pub const FORCED_FAILURE_EMAIL: &str = "test@error.com";

/// Timing and failure knobs for [`SimulatedGateway`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatedSettings {
    pub auth_latency: Duration,
    pub social_latency: Duration,
    /// Probability in `0.0..=1.0` that a social attempt fails
    pub social_failure_rate: f64,
}

impl Default for SimulatedSettings {
    fn default() -> Self {
        Self {
            auth_latency: Duration::from_millis(1500),
            social_latency: Duration::from_millis(1000),
            social_failure_rate: 0.1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    settings: SimulatedSettings,
}

impl SimulatedGateway {
    pub fn new(mut settings: SimulatedSettings) -> Self {
        if !settings.social_failure_rate.is_finite() {
            settings.social_failure_rate = 0.0;
        }
        settings.social_failure_rate = settings.social_failure_rate.clamp(0.0, 1.0);
        Self { settings }
    }

    pub fn settings(&self) -> &SimulatedSettings {
        &self.settings
    }

    fn check_email(email: &str) -> Result<(), AuthError> {
        if email == FORCED_FAILURE_EMAIL {
            return Err(AuthError::new("Invalid credentials"));
        }
        Ok(())
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new(SimulatedSettings::default())
    }
}

#[async_trait]
impl AuthGateway for SimulatedGateway {
    async fn authenticate(&self, credentials: Credentials) -> Result<Session, AuthError> {
        tokio::time::sleep(self.settings.auth_latency).await;
        Self::check_email(&credentials.email)?;
        tracing::debug!(email = %credentials.email, "simulated sign-in accepted");
        Ok(Session::issue(credentials.email, None))
    }

    async fn register(&self, profile: Profile) -> Result<Session, AuthError> {
        tokio::time::sleep(self.settings.auth_latency).await;
        Self::check_email(&profile.email)?;
        tracing::debug!(email = %profile.email, name = %profile.name, "simulated registration accepted");
        Ok(Session::issue(profile.email, None))
    }

    async fn authenticate_social(&self, provider: String) -> Result<Session, AuthError> {
        tokio::time::sleep(self.settings.social_latency).await;
        let failed = rand::rng().random_bool(self.settings.social_failure_rate);
        if failed {
            return Err(AuthError::new(format!(
                "Failed to authenticate with {provider}"
            )));
        }
        Ok(Session::issue(provider.clone(), Some(provider)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant(social_failure_rate: f64) -> SimulatedGateway {
        SimulatedGateway::new(SimulatedSettings {
            auth_latency: Duration::ZERO,
            social_latency: Duration::ZERO,
            social_failure_rate,
        })
    }

    fn credentials(email: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: "anything".to_string(),
        }
    }

    #[tokio::test]
    async fn test_authenticate_accepts_regular_email() {
        let session = instant(0.0)
            .authenticate(credentials("user@example.com"))
            .await
            .unwrap();
        assert_eq!(session.subject, "user@example.com");
        assert!(session.provider.is_none());
    }

    #[tokio::test]
    async fn test_authenticate_rejects_forced_failure_email() {
        let err = instant(0.0)
            .authenticate(credentials(FORCED_FAILURE_EMAIL))
            .await
            .unwrap_err();
        assert_eq!(err.message, "Invalid credentials");
    }

    #[tokio::test]
    async fn test_register_rejects_forced_failure_email() {
        let err = instant(0.0)
            .register(Profile {
                name: "Test".to_string(),
                email: FORCED_FAILURE_EMAIL.to_string(),
                password: "secret".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.message, "Invalid credentials");
    }

    #[tokio::test]
    async fn test_social_never_fails_at_zero_rate() {
        let gateway = instant(0.0);
        for _ in 0..20 {
            let session = gateway
                .authenticate_social("github".to_string())
                .await
                .unwrap();
            assert_eq!(session.provider.as_deref(), Some("github"));
        }
    }

    #[tokio::test]
    async fn test_social_always_fails_at_full_rate() {
        let err = instant(1.0)
            .authenticate_social("google".to_string())
            .await
            .unwrap_err();
        assert_eq!(err.message, "Failed to authenticate with google");
    }

    #[test]
    fn test_failure_rate_is_clamped() {
        assert_eq!(instant(3.0).settings().social_failure_rate, 1.0);
        assert_eq!(instant(-1.0).settings().social_failure_rate, 0.0);
        assert_eq!(instant(f64::NAN).settings().social_failure_rate, 0.0);
    }

    #[test]
    fn test_default_settings_match_demo_backend() {
        let settings = SimulatedSettings::default();
        assert_eq!(settings.auth_latency, Duration::from_millis(1500));
        assert_eq!(settings.social_latency, Duration::from_millis(1000));
        assert_eq!(settings.social_failure_rate, 0.1);
    }
}
