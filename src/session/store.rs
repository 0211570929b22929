use crate::auth::UserRecord;

/// The one session key this crate writes. Presence of this key is the sole
/// logged-in signal.
pub const USER_KEY: &str = "user";

/// Capability expected from the session collaborator. The store is scoped to
/// one conceptual session identity; `destroy` wipes the whole session, not a
/// single key.
///
/// The surface is infallible on purpose: store-level faults (backend down,
/// serialization trouble) are the implementor's to surface, absence is
/// expressed through `Option` and `bool`.
pub trait SessionStore: Send + Sync {
    fn exists(&self, key: &str) -> bool;
    fn get(&self, key: &str) -> Option<UserRecord>;
    fn set(&mut self, key: &str, user: UserRecord);
    fn destroy(&mut self);
}
