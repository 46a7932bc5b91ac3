//! JWT claims carried by tokens from the external auth collaborator.

use serde::{Deserialize, Serialize};

/// Claims verified from incoming access tokens and stored in request
/// extensions by the `JwtExtract` middleware.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// External user identifier (users.sub)
    pub sub: String,
    pub email: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}
