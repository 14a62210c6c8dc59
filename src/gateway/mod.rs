//! Authentication backend abstraction and the simulated backend

mod simulated;
mod traits;
mod types;

pub use simulated::{SimulatedGateway, SimulatedSettings, FORCED_FAILURE_EMAIL};
pub use traits::AuthGateway;
pub use types::{AuthError, Credentials, Profile, Session};

#[cfg(test)]
pub use traits::MockAuthGateway;
