use crate::api::{ApiError, SellerApi};
use crate::auth::TokenProvider;
use crate::error::ConsoleError;
use crate::model::ApiReply;
use crate::notify::Notifier;
use std::sync::Arc;

/// Collaborators shared by every console and form.
#[derive(Clone)]
pub struct ConsoleContext {
    pub api: Arc<dyn SellerApi>,
    pub tokens: Arc<dyn TokenProvider>,
    pub notifier: Arc<dyn Notifier>,
}

impl ConsoleContext {
    pub fn new(
        api: Arc<dyn SellerApi>,
        tokens: Arc<dyn TokenProvider>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            api,
            tokens,
            notifier,
        }
    }

    pub(crate) async fn token(&self) -> Result<String, ConsoleError> {
        self.tokens.token().await.ok_or(ConsoleError::SignedOut)
    }

    /// Shows the error to the user and hands it back.
    pub(crate) fn fail(&self, e: ConsoleError) -> ConsoleError {
        self.notifier.error(&e.to_string());
        e
    }
}

/// Splits a reply into its message and payload, or a [`ConsoleError`].
pub(crate) fn settle<T>(
    result: Result<ApiReply<T>, ApiError>,
    rejected_fallback: &str,
) -> Result<(Option<String>, T), ConsoleError> {
    match result {
        Ok(reply) => reply.accept().map_err(|message| {
            ConsoleError::Rejected(message.unwrap_or_else(|| rejected_fallback.to_string()))
        }),
        Err(e) => Err(ConsoleError::Transport(e.to_string())),
    }
}
