use super::{AuthCodec, AuthError};

impl AuthCodec {
    /// Salted bcrypt hash at the configured cost
    pub async fn hash_password(&self, password: &str) -> Result<String, AuthError> {
        let password = password.to_owned();
        let cost = self.bcrypt_cost;

        // bcrypt is CPU bound, keep it off the async executor
        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| AuthError::Task(e.to_string()))?
            .map_err(AuthError::from)
    }

    /// Compare a plaintext password with a stored hash.
    ///
    /// A malformed stored hash is an error, not a mismatch.
    pub async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let password = password.to_owned();
        let hash = hash.to_owned();

        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| AuthError::Task(e.to_string()))?
            .map_err(AuthError::from)
    }
}
