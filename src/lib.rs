/// User authentication: login, logout, privilege checks, attribute access.
pub mod auth;
/// Session collaborator capability and the in-memory reference store.
pub mod session;

// -----------------------------------------------------------------------------
//  Frequently used public types
// -----------------------------------------------------------------------------

/// The authentication contract and its session-backed implementation.
pub use auth::{AuthManager, Authentication, PASSWORD_COST};
/// Password hashing and verification functions.
pub use auth::{hash_cost, hash_password, needs_rehash, verify_password, PasswordError};
/// The per-user attribute record stored in the session.
pub use auth::UserRecord;
/// Session store capability, the in-memory implementation, and the session key.
pub use session::{InMemorySession, SessionStore, USER_KEY};
