//! Bearer token retrieval, injected into every console.

use async_trait::async_trait;
use tokio::sync::RwLock;

#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// The current session token, or `None` while nobody is signed in.
    async fn token(&self) -> Option<String>;
}

/// A token that can be swapped at runtime (sign-in, sign-out).
#[derive(Debug, Default)]
pub struct StaticToken {
    token: RwLock<Option<String>>,
}

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub async fn set(&self, token: Option<String>) {
        *self.token.write().await = token;
    }
}

#[async_trait]
impl TokenProvider for StaticToken {
    async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }
}
