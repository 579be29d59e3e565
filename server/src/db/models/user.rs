//! User model

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng};
use argon2::Argon2;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

pub type UserId = RecordId;

/// A registered customer (or the admin team). The password never leaves the
/// server: only the argon2 hash is stored and the field is never serialized
/// into responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<UserId>,
    pub username: String,
    #[serde(skip_serializing)]
    pub hash_pass: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub loyalty_points: i64,
    #[serde(default)]
    pub created_at: i64,
}

impl User {
    /// Hash a plaintext password with a fresh random salt.
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        let salt = SaltString::generate(&mut OsRng);
        Ok(Argon2::default()
            .hash_password(password.as_bytes(), &salt)?
            .to_string())
    }

    /// Verify a plaintext password against the stored hash.
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        let parsed = PasswordHash::new(&self.hash_pass)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

/// Public profile returned by the auth endpoints (no hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub is_admin: bool,
    pub loyalty_points: i64,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
            username: user.username.clone(),
            is_admin: user.is_admin,
            loyalty_points: user.loyalty_points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_verify_and_reject() {
        let hash = User::hash_password("hunter2").unwrap();
        let user = User {
            id: None,
            username: "mary".into(),
            hash_pass: hash,
            is_admin: false,
            loyalty_points: 0,
            created_at: 0,
        };
        assert!(user.verify_password("hunter2").unwrap());
        assert!(!user.verify_password("wrong").unwrap());
    }

    #[test]
    fn hash_is_never_serialized() {
        let user = User {
            id: None,
            username: "mary".into(),
            hash_pass: "secret".into(),
            is_admin: false,
            loyalty_points: 10,
            created_at: 0,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret"));
    }
}
