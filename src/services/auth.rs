use std::collections::HashMap;
use std::env;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::sleep;
use tracing::info;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Role, Session, User};

#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub tutor_email: String,
    pub tutor_password: String,
    pub tutor_name: String,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        Self {
            tutor_email: env::var("TUTOR_EMAIL")
                .unwrap_or_else(|_| "tutor@example.com".to_string()),
            tutor_password: env::var("TUTOR_PASSWORD").unwrap_or_else(|_| "password".to_string()),
            tutor_name: env::var("TUTOR_NAME").unwrap_or_else(|_| "Tony".to_string()),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            tutor_email: "tutor@example.com".to_string(),
            tutor_password: "password".to_string(),
            tutor_name: "Tony".to_string(),
        }
    }
}

/// Demo credential check for the single configured tutor. Not real
/// authentication: one account, plain-text comparison, sessions kept in
/// memory and dropped on restart.
pub struct AuthService {
    config: AuthConfig,
    login_delay: Duration,
    sessions: RwLock<HashMap<String, User>>,
}

impl AuthService {
    pub fn new(config: AuthConfig) -> Self {
        Self {
            config,
            login_delay: Duration::from_millis(1000),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub fn with_login_delay(mut self, delay: Duration) -> Self {
        self.login_delay = delay;
        self
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AppError> {
        sleep(self.login_delay).await;

        if email != self.config.tutor_email || password != self.config.tutor_password {
            return Err(AppError::InvalidCredentials);
        }

        let user = User {
            id: "1".to_string(),
            email: self.config.tutor_email.clone(),
            name: self.config.tutor_name.clone(),
            role: Role::Tutor,
            avatar: Some("https://api.dicebear.com/7.x/avataaars/svg?seed=tutor".to_string()),
        };

        let token = Uuid::new_v4().to_string();
        self.sessions
            .write()
            .await
            .insert(token.clone(), user.clone());
        info!("tutor {} logged in", user.email);

        Ok(Session { token, user })
    }

    /// Dropping an unknown token is not an error; logout is unconditional.
    pub async fn logout(&self, token: &str) {
        self.sessions.write().await.remove(token);
    }

    pub async fn session(&self, token: &str) -> Option<User> {
        self.sessions.read().await.get(token).cloned()
    }
}
