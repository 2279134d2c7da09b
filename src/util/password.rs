//! Password hashing.
//!
//! Hashes are stored as `pbkdf2_sha256$<iterations>$<salt>$<base64 digest>`,
//! PBKDF2-HMAC-SHA256 with a 32-byte digest, so existing account databases
//! using this layout keep verifying.

use base64::{engine::general_purpose::STANDARD, Engine};
use pbkdf2::pbkdf2_hmac;
use rand::{distr::Alphanumeric, Rng};
use sha2::Sha256;

pub static ALGORITHM: &str = "pbkdf2_sha256";

const SALT_LEN: usize = 22;
const DIGEST_LEN: usize = 32;

#[derive(Clone, Copy, Debug)]
pub struct PasswordHasher {
    iterations: u32,
}

impl PasswordHasher {
    pub const DEFAULT_ITERATIONS: u32 = 600_000;

    pub fn new(iterations: u32) -> Self {
        Self { iterations }
    }

    /// Hashes `raw` with a freshly generated salt.
    pub fn hash(&self, raw: &str) -> String {
        let salt: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(SALT_LEN)
            .map(char::from)
            .collect();

        self.hash_with_salt(raw, &salt)
    }

    pub fn hash_with_salt(&self, raw: &str, salt: &str) -> String {
        let digest = derive(raw, salt, self.iterations);

        format!(
            "{}${}${}${}",
            ALGORITHM,
            self.iterations,
            salt,
            STANDARD.encode(digest)
        )
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ITERATIONS)
    }
}

/// Checks `raw` against an encoded hash.
///
/// Returns `false` for hashes in any other format, including unusable
/// placeholders.
pub fn verify(raw: &str, encoded: &str) -> bool {
    let mut parts = encoded.splitn(4, '$');
    let (Some(algorithm), Some(iterations), Some(salt), Some(digest)) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };

    if algorithm != ALGORITHM {
        return false;
    }

    let Ok(iterations) = iterations.parse::<u32>() else {
        return false;
    };
    let Ok(expected) = STANDARD.decode(digest) else {
        return false;
    };

    constant_time_eq(&derive(raw, salt, iterations), &expected)
}

fn derive(raw: &str, salt: &str, iterations: u32) -> [u8; DIGEST_LEN] {
    let mut digest = [0u8; DIGEST_LEN];
    pbkdf2_hmac::<Sha256>(raw.as_bytes(), salt.as_bytes(), iterations, &mut digest);
    digest
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
