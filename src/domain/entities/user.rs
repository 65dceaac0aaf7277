//! User entity for registered accounts.

/// A registered user.
///
/// `password_hash` holds the encoded Argon2 PHC string; the plaintext password
/// never leaves the request that carried it.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password_hash: Vec<u8>,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

/// Input data for registering a new user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub password_hash: Vec<u8>,
}

impl NewUser {
    /// Builds the stored user once the store has assigned an id.
    pub fn into_user(self, id: i64) -> User {
        User {
            id,
            email: self.email,
            password_hash: self.password_hash,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_hash() {
        let user = NewUser {
            email: "a@b.com".to_string(),
            password_hash: b"$argon2id$secret".to_vec(),
        }
        .into_user(1);

        let printed = format!("{:?}", user);
        assert!(printed.contains("a@b.com"));
        assert!(!printed.contains("argon2id"));
    }
}
