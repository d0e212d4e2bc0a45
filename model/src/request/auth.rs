//! Registration and login request bodies.

use std::fmt::{self, Debug, Formatter};

use garde::Validate;

use serde::{Deserialize, Serialize};

/// Request body for creating an account.
#[derive(Clone, Deserialize, Serialize, Validate)]
pub struct RegisterRequest {
    /// The unique username.
    #[garde(length(min = 1))]
    pub username: String,
    /// The unique email address.
    #[garde(length(min = 1))]
    pub email: String,
    /// The plaintext password.
    #[garde(length(min = 1))]
    pub password: String,
}

impl Debug for RegisterRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Request body for logging in.
#[derive(Clone, Deserialize, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl Debug for LoginRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}
