//! Authentication gate backed by a configured user

use async_trait::async_trait;
use std::sync::Mutex;
use tracing::info;

use crate::traits::{AuthOutcome, Authenticator, UserIdentity};

/// Identity stamped on records when nobody is signed in
const ANONYMOUS: &str = "anonymous";

/// Signs in the user given by configuration. Without one, every
/// authentication request is cancelled.
pub struct ConfiguredAuthenticator {
    user: Mutex<Option<UserIdentity>>,
}

impl ConfiguredAuthenticator {
    pub fn new(user: Option<UserIdentity>) -> Self {
        Self { user: Mutex::new(user) }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).is_some()
    }
}

#[async_trait]
impl Authenticator for ConfiguredAuthenticator {
    async fn ensure_authenticated(&self) -> AuthOutcome {
        if self.is_signed_in() {
            AuthOutcome::Authenticated
        } else {
            info!("No user configured; login cancelled");
            AuthOutcome::Cancelled
        }
    }

    fn identity(&self) -> UserIdentity {
        self.user
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
            .unwrap_or_else(|| UserIdentity {
                name: ANONYMOUS.to_string(),
                id: String::new(),
            })
    }

    fn logout(&self) {
        if let Some(user) = self.user.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).take() {
            info!("👋 Logged out {}", user.name);
        }
    }
}
