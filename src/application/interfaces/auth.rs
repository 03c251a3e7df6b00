use crate::config::Credentials;
use crate::error::AppError;
use crate::session::Session;

use async_trait::async_trait;

#[async_trait]
/// Service for exchanging credentials for a session against the Nightrader
/// authentication endpoints
pub trait AuthService: Send + Sync {
    /// Exchanges credentials for a session token
    async fn login(&self, credentials: &Credentials) -> Result<Session, AppError>;

    /// Creates a new user account
    async fn register(
        &self,
        user_name: &str,
        name: &str,
        password: &str,
    ) -> Result<(), AppError>;
}
