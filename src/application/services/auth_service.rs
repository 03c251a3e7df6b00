use crate::application::interfaces::AuthService;
use crate::{
    config::Credentials,
    error::AppError,
    model::requests::{LoginRequest, RegisterRequest},
    model::responses::LoginData,
    session::Session,
    transport::HttpTransport,
};
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;
use tracing::info;

/// Implementation of the authentication service
pub struct AuthServiceImpl<T: HttpTransport> {
    transport: Arc<T>,
}

impl<T: HttpTransport> AuthServiceImpl<T> {
    /// Creates a new instance of the authentication service
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl<T: HttpTransport + 'static> AuthService for AuthServiceImpl<T> {
    async fn login(&self, credentials: &Credentials) -> Result<Session, AppError> {
        info!("Logging in as {}", credentials.user_name);

        let body = LoginRequest::from(credentials);
        let data = self
            .transport
            .request(
                Method::POST,
                "/authentication/login",
                None,
                Some(serde_json::to_value(&body)?),
            )
            .await?;

        let login: LoginData = serde_json::from_value(data)?;
        info!("Login successful");
        Ok(Session::new(login.token))
    }

    async fn register(
        &self,
        user_name: &str,
        name: &str,
        password: &str,
    ) -> Result<(), AppError> {
        info!("Registering new user {}", user_name);

        let body = RegisterRequest {
            user_name: user_name.to_string(),
            name: name.to_string(),
            password: password.to_string(),
        };

        self.transport
            .request(
                Method::POST,
                "/authentication/register",
                None,
                Some(serde_json::to_value(&body)?),
            )
            .await?;

        info!("Registration successful");
        Ok(())
    }
}
