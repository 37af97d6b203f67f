// ── Admin gate ──
//
// A password check in front of content editing. This keeps casual users
// out of the editor; it is not an access-control boundary. The session
// flag lives in its own slot so a content reset leaves it alone.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info, warn};

use crate::error::CoreError;
use crate::storage::{Slot, SlotStorage};

/// Password used when none is configured.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

const SESSION_FLAG: &str = "true";

pub struct AdminGate {
    storage: Arc<dyn SlotStorage>,
    password: SecretString,
}

impl AdminGate {
    pub fn new(storage: Arc<dyn SlotStorage>, password: SecretString) -> Self {
        Self { storage, password }
    }

    /// Gate using [`DEFAULT_ADMIN_PASSWORD`].
    pub fn with_default_password(storage: Arc<dyn SlotStorage>) -> Self {
        Self::new(
            storage,
            SecretString::from(DEFAULT_ADMIN_PASSWORD.to_owned()),
        )
    }

    /// Check `candidate` against the configured password without touching
    /// the session.
    pub fn verify(&self, candidate: &str) -> bool {
        candidate == self.password.expose_secret()
    }

    /// Open a session. The flag write is best-effort.
    pub fn login(&self, candidate: &str) -> Result<(), CoreError> {
        if !self.verify(candidate) {
            debug!("admin login rejected");
            return Err(CoreError::InvalidPassword);
        }
        if let Err(e) = self.storage.set(Slot::AdminAuth.key(), SESSION_FLAG) {
            warn!(error = %e, "failed to persist admin session");
        }
        info!("admin session opened");
        Ok(())
    }

    pub fn logout(&self) {
        if let Err(e) = self.storage.remove(Slot::AdminAuth.key()) {
            warn!(error = %e, "failed to clear admin session");
        }
        info!("admin session closed");
    }

    pub fn is_authenticated(&self) -> bool {
        match self.storage.get(Slot::AdminAuth.key()) {
            Ok(value) => value.as_deref() == Some(SESSION_FLAG),
            Err(e) => {
                warn!(error = %e, "failed to read admin session");
                false
            }
        }
    }
}
