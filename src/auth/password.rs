use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use once_cell::sync::Lazy;

/// Verified against when no stored hash exists, so an unknown intern costs
/// the same argon2 work as a wrong password.
static DUMMY_HASH: Lazy<String> =
    Lazy::new(|| hash_password("no such intern").unwrap_or_default());

pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let argon2 = Argon2::default();
    let salt = SaltString::generate(&mut OsRng);

    Ok(argon2.hash_password(password.as_bytes(), &salt)?.to_string())
}

/// A stored hash that does not parse fails verification like a wrong password.
pub fn verify_password(password: &str, hashed: &str) -> Result<(), argon2::password_hash::Error> {
    let argon2 = Argon2::default();
    let parsed = PasswordHash::new(hashed)?;

    argon2.verify_password(password.as_bytes(), &parsed)
}

/// True when `password` verifies against at least one of `hashes`.
/// An empty list still runs one verification against a throwaway hash.
pub fn verify_any<'a>(password: &str, hashes: impl IntoIterator<Item = &'a str>) -> bool {
    let mut hashes = hashes.into_iter().peekable();

    if hashes.peek().is_none() {
        let _ = verify_password(password, &DUMMY_HASH);
        return false;
    }

    hashes.any(|hashed| verify_password(password, hashed).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_only_the_original_password() {
        let hashed = hash_password("s3cret").unwrap();

        assert!(hashed.starts_with("$argon2"));
        assert!(verify_password("s3cret", &hashed).is_ok());
        assert!(verify_password("S3cret", &hashed).is_err());
    }

    #[test]
    fn same_password_gets_a_fresh_salt() {
        assert_ne!(hash_password("pw").unwrap(), hash_password("pw").unwrap());
    }

    #[test]
    fn any_matching_hash_is_enough() {
        let first = hash_password("old").unwrap();
        let second = hash_password("new").unwrap();

        assert!(verify_any("new", [first.as_str(), second.as_str()]));
        assert!(verify_any("old", [first.as_str(), second.as_str()]));
        assert!(!verify_any("neither", [first.as_str(), second.as_str()]));
    }

    #[test]
    fn no_hashes_never_verifies() {
        assert!(!verify_any("no such intern", std::iter::empty()));
        assert!(DUMMY_HASH.starts_with("$argon2"));
    }

    #[test]
    fn plaintext_stored_value_never_verifies() {
        assert!(verify_password("pw", "pw").is_err());
    }
}
