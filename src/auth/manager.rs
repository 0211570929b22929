use std::sync::{Arc, RwLock};

use serde_json::Value;

use super::{
    password::{self, PasswordError},
    user::UserRecord,
};
use crate::session::{InMemorySession, SessionStore, USER_KEY};

/// The cost used to hash passwords. Process-wide, not configurable per call.
pub const PASSWORD_COST: u32 = 14;

/// Read-side contract of an authenticated context: whoever holds one can ask
/// who is logged in, end the session, and read user attributes.
pub trait Authentication {
    fn is_logged_in(&self) -> bool;

    /// Destroys the whole session, not just the user entry.
    fn log_out(&self);

    /// True only when logged in and the record carries `admin` as the exact
    /// boolean `true`. A string `"true"` or a number `1` does not count.
    fn is_admin(&self) -> bool;

    /// Attribute of the current user, `None` when logged out or the key is
    /// absent from the record.
    fn attr(&self, key: &str) -> Option<Value>;

    /// Template-facing variant of [`attr`](Authentication::attr): a stored
    /// string comes back verbatim, other values render as compact JSON, a
    /// missing key renders as the literal `{{key}}` marker. Never fails.
    fn attr_or_placeholder(&self, key: &str) -> String {
        match self.attr(key) {
            Some(Value::String(text)) => text,
            Some(value) => value.to_string(),
            None => format!("{{{{{key}}}}}"),
        }
    }
}

/// Session-backed user authentication.
///
/// All state lives in the injected session store; the manager itself is
/// stateless between calls. Construct one per request context and share the
/// store with the rest of the request pipeline.
pub struct AuthManager<S = InMemorySession>
where
    S: SessionStore,
{
    session: Arc<RwLock<S>>,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl AuthManager<InMemorySession> {
    /// Manager over a fresh in-memory session, for embedders that do not
    /// bring their own store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(RwLock::new(InMemorySession::new())))
    }
}

impl<S> AuthManager<S>
where
    S: SessionStore,
{
    pub fn new(session: Arc<RwLock<S>>) -> Self {
        Self { session }
    }

    /// Handle to the shared session store.
    pub fn session(&self) -> Arc<RwLock<S>> {
        self.session.clone()
    }

    /// Logs a user in. Fails when the record is empty or the password does
    /// not verify against `hash`; a malformed hash counts as a failed
    /// verification. The session is written only on success.
    pub fn log_in(
        &self,
        password: &str,
        hash: &str,
        user: UserRecord,
    ) -> bool {
        if user.is_empty() || !password::verify_password(password, hash).unwrap_or(false) {
            return false;
        }

        self.session.write().unwrap().set(USER_KEY, user);
        tracing::debug!("user logged in");

        true
    }

    /// Logs a user in off a remember-me token that the caller has already
    /// validated. No password check; fails only on an empty record.
    pub fn log_in_remember_me(&self, user: UserRecord) -> bool {
        if user.is_empty() {
            return false;
        }

        self.session.write().unwrap().set(USER_KEY, user);
        tracing::debug!("user logged in via remember-me");

        true
    }

    /// Whether the stored password hash was produced with an outdated cost
    /// factor. Always false when nobody is logged in.
    pub fn needs_rehash(&self, hash: &str) -> bool {
        if !self.is_logged_in() {
            return false;
        }

        password::needs_rehash(hash, PASSWORD_COST)
    }

    /// Re-hashes a password at the current cost factor. No session
    /// interaction.
    pub fn rehash(&self, password: &str) -> Result<String, PasswordError> {
        password::hash_password(password, PASSWORD_COST)
    }

    fn user_record(&self) -> Option<UserRecord> {
        self.session.read().unwrap().get(USER_KEY)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов для AuthManager
////////////////////////////////////////////////////////////////////////////////

impl<S> Authentication for AuthManager<S>
where
    S: SessionStore,
{
    fn is_logged_in(&self) -> bool {
        self.session.read().unwrap().exists(USER_KEY)
    }

    fn log_out(&self) {
        self.session.write().unwrap().destroy();
        tracing::debug!("session destroyed");
    }

    fn is_admin(&self) -> bool {
        if !self.is_logged_in() {
            return false;
        }

        match self.user_record() {
            Some(user) => matches!(user.get("admin"), Some(Value::Bool(true))),
            None => false,
        }
    }

    fn attr(&self, key: &str) -> Option<Value> {
        self.user_record().and_then(|user| user.get(key).cloned())
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
