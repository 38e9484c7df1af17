//! Credential derivation.
//!
//! Raw passwords never reach the account store. Callers derive the stored
//! credential here and pass the result to registration and login checks.

/// Derive the stored credential for a user.
///
/// The password is hashed, then hashed again with the user id prepended, so
/// two users with the same password store different credentials. Output is
/// lower-case hex.
pub fn encrypt_password(user_id: &str, password: &str) -> String {
    let inner = format!("{:x}", md5::compute(password.as_bytes()));
    format!("{:x}", md5::compute(format!("{}{}", user_id, inner)))
}
