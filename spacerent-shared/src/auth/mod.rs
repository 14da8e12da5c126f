/// Authentication utilities
///
/// # Modules
///
/// - [`password`]: Argon2id password hashing and verification
///
/// The API itself performs no authentication; the hash is stored write-only
/// on the user record for a future login flow.

pub mod password;
