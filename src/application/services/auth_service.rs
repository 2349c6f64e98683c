//! Authentication service for HTTP Basic credentials.

use subtle::ConstantTimeEq;

use crate::error::AppError;
use serde_json::json;

/// Service guarding write endpoints with a single user/password pair.
///
/// Both parts are compared in constant time so response timing does not leak
/// how much of a guess matched.
pub struct AuthService {
    user: String,
    password: String,
}

impl AuthService {
    /// Creates a new authentication service.
    pub fn new(user: String, password: String) -> Self {
        Self { user, password }
    }

    /// Checks a submitted user/password pair.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if either part does not match or the
    /// password is missing.
    pub fn authenticate(&self, user: &str, password: Option<&str>) -> Result<(), AppError> {
        let user_ok: bool = user.as_bytes().ct_eq(self.user.as_bytes()).into();
        let password_ok: bool = password
            .unwrap_or_default()
            .as_bytes()
            .ct_eq(self.password.as_bytes())
            .into();

        if user_ok && password_ok {
            Ok(())
        } else {
            Err(AppError::unauthorized(
                "unauthorized",
                json!({ "reason": "Invalid credentials" }),
            ))
        }
    }
}
