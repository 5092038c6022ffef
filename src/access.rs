//! Shared-code gate in front of the studio.
//!
//! A plain string comparison with a remembered flag. It keeps casual
//! visitors out of a shared install and nothing more.

use crate::{
    error::{Result, StudioError},
    storage::AccessFlagStore,
};
use std::sync::Arc;

pub struct AccessGate {
    expected_code: String,
    store: Arc<dyn AccessFlagStore>,
}

impl AccessGate {
    pub fn new(expected_code: impl Into<String>, store: Arc<dyn AccessFlagStore>) -> Self {
        Self {
            expected_code: expected_code.into(),
            store,
        }
    }

    pub fn is_authenticated(&self) -> Result<bool> {
        self.store.is_granted()
    }

    /// A wrong code leaves the stored flag untouched.
    pub fn login(&self, code: &str) -> Result<()> {
        if code != self.expected_code {
            log::warn!("⚠️  Rejected access code");
            return Err(StudioError::InputError("access code is incorrect".into()));
        }
        self.store.set_granted(true)?;
        log::info!("🔓 Access granted");
        Ok(())
    }

    pub fn logout(&self) -> Result<()> {
        self.store.set_granted(false)?;
        log::info!("🔒 Logged out");
        Ok(())
    }

    pub fn require(&self) -> Result<()> {
        if self.is_authenticated()? {
            Ok(())
        } else {
            Err(StudioError::InputError(
                "not logged in; run `fashionai login <code>` first".into(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn login_flow() {
        let gate = AccessGate::new("150113", Arc::new(MemoryStore::new()));
        assert!(!gate.is_authenticated().unwrap());
        assert!(gate.require().is_err());

        assert!(gate.login("000000").is_err());
        assert!(!gate.is_authenticated().unwrap());

        gate.login("150113").unwrap();
        assert!(gate.is_authenticated().unwrap());
        assert!(gate.require().is_ok());

        gate.logout().unwrap();
        assert!(!gate.is_authenticated().unwrap());
    }

    #[test]
    fn wrong_code_keeps_existing_session() {
        let gate = AccessGate::new("abc", Arc::new(MemoryStore::new()));
        gate.login("abc").unwrap();
        assert!(gate.login("nope").is_err());
        assert!(gate.is_authenticated().unwrap());
    }
}
