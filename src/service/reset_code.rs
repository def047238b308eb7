//! In-memory password reset codes.
//!
//! Codes are six digits, keyed by lowercased email, and expire after
//! fifteen minutes. Issuing a new code replaces any outstanding one for
//! the same address, so the store stays bounded by the user count.

use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use rand::Rng;
use tokio::sync::RwLock;

const CODE_TTL: Duration = Duration::from_secs(15 * 60);

struct IssuedCode {
    code: String,
    expires_at: Instant,
}

#[derive(Clone, Default)]
pub struct ResetCodeService {
    codes: Arc<RwLock<HashMap<String, IssuedCode>>>,
}

impl ResetCodeService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a fresh code for an email, replacing any previous one.
    pub async fn issue(&self, email: &str) -> String {
        self.insert(email, CODE_TTL).await
    }

    #[cfg(test)]
    pub async fn issue_with_ttl(&self, email: &str, ttl: Duration) -> String {
        self.insert(email, ttl).await
    }

    async fn insert(&self, email: &str, ttl: Duration) -> String {
        let code = format!("{:06}", rand::rng().random_range(0..1_000_000));

        self.codes.write().await.insert(
            email.to_lowercase(),
            IssuedCode {
                code: code.clone(),
                expires_at: Instant::now() + ttl,
            },
        );

        code
    }

    /// Checks a code without consuming it.
    pub async fn verify(&self, email: &str, code: &str) -> bool {
        let codes = self.codes.read().await;

        match codes.get(&email.to_lowercase()) {
            Some(issued) => issued.expires_at > Instant::now() && issued.code == code,
            None => false,
        }
    }

    /// Checks a code and removes it on success. Each code is single-use.
    pub async fn consume(&self, email: &str, code: &str) -> bool {
        let mut codes = self.codes.write().await;
        let key = email.to_lowercase();

        let valid = match codes.get(&key) {
            Some(issued) => issued.expires_at > Instant::now() && issued.code == code,
            None => false,
        };

        if valid {
            codes.remove(&key);
        }

        valid
    }
}
