use std::fmt;

use jsonwebtoken::Algorithm;

/// JWT verification settings shared across the app.
#[derive(Clone)]
pub struct SecurityConfig {
    pub jwt_secret: Vec<u8>,
    pub algorithm: Algorithm,
}

impl SecurityConfig {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            jwt_secret: secret.to_vec(),
            algorithm: Algorithm::HS256,
        }
    }
}

impl Default for SecurityConfig {
    /// Fixed secret for tests and local development only; production reads
    /// BACKEND_JWT_SECRET in main.
    fn default() -> Self {
        Self::new(b"insecure-dev-secret")
    }
}

impl fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("jwt_secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}
