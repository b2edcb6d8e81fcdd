use std::env;

const MIN_SECRET_LENGTH: usize = 32;
const MAX_ACCESS_EXPIRY: i64 = 7 * 24 * 3600;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JwtConfigError {
    #[error("JWT_SECRET must be set")]
    MissingSecret,

    #[error("JWT_SECRET must be at least 32 characters long for HS256")]
    SecretTooShort,

    #[error("Invalid {0} value")]
    InvalidExpiry(&'static str),
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    /// Seconds
    pub access_token_expiry: i64,
}

impl JwtConfig {
    fn parse_expiry(key: &'static str, default: i64) -> Result<i64, JwtConfigError> {
        match env::var(key) {
            Ok(raw) => raw
                .parse::<i64>()
                .map_err(|_| JwtConfigError::InvalidExpiry(key)),
            Err(_) => Ok(default),
        }
    }

    /// Reads `JWT_SECRET`, `JWT_ISSUER` and `JWT_ACCESS_EXPIRY`.
    pub fn from_env() -> Result<Self, JwtConfigError> {
        let secret_key = env::var("JWT_SECRET").map_err(|_| JwtConfigError::MissingSecret)?;
        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "recipe-api".to_string());
        let access_token_expiry = Self::parse_expiry("JWT_ACCESS_EXPIRY", 86400)?;

        Self::new(secret_key, issuer, access_token_expiry)
    }

    pub fn new(
        secret_key: String,
        issuer: String,
        access_token_expiry: i64,
    ) -> Result<Self, JwtConfigError> {
        if secret_key.len() < MIN_SECRET_LENGTH {
            return Err(JwtConfigError::SecretTooShort);
        }

        if access_token_expiry <= 0 || access_token_expiry > MAX_ACCESS_EXPIRY {
            return Err(JwtConfigError::InvalidExpiry("JWT_ACCESS_EXPIRY"));
        }

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    #[test]
    fn short_secret_is_rejected() {
        let result = JwtConfig::new("short".into(), "iss".into(), 3600);
        assert_eq!(result.unwrap_err(), JwtConfigError::SecretTooShort);
    }

    #[test]
    fn expiry_must_be_positive_and_bounded() {
        assert!(JwtConfig::new(SECRET.into(), "iss".into(), 0).is_err());
        assert!(JwtConfig::new(SECRET.into(), "iss".into(), MAX_ACCESS_EXPIRY + 1).is_err());
        assert!(JwtConfig::new(SECRET.into(), "iss".into(), 3600).is_ok());
    }
}
