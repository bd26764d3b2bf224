//! Admin capability gate
//!
//! Admin privilege is an explicit capability, not ambient state.
//! [`AdminGate::authorize`] is the only way to obtain an [`AdminToken`],
//! and every mutation entry point takes one by reference, so authorization
//! travels with the call.

/// Proof of admin privilege. Cannot be constructed outside this module;
/// possession authorizes mutations.
#[derive(Debug, Clone)]
pub struct AdminToken(());

/// Static-credential gate issuing admin tokens
pub struct AdminGate {
    username: String,
    password: String,
}

impl AdminGate {
    /// Create a gate for one fixed credential pair
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Check the supplied credentials, returning a token on an exact match
    pub fn authorize(&self, username: &str, password: &str) -> Option<AdminToken> {
        if username == self.username && password == self.password {
            Some(AdminToken(()))
        } else {
            None
        }
    }
}
