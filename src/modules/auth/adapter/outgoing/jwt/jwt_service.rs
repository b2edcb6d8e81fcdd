use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use std::fmt;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider, ACCESS_TOKEN_TYPE,
};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn generate_token(
        &self,
        user_id: Uuid,
        token_type: &str,
        expiry_seconds: i64,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(expiry_seconds);

        let claims = TokenClaims {
            sub: user_id,
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            iss: self.config.issuer.clone(),
            token_type: token_type.to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_access_token(&self, user_id: Uuid) -> Result<String, TokenError> {
        self.generate_token(user_id, ACCESS_TOKEN_TYPE, self.config.access_token_expiry)
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;
        validation.set_issuer(&[self.config.issuer.as_str()]);

        let decoded =
            decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: Token expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::ImmatureSignature => {
                        tracing::warn!("Token verification failed: Token not yet valid");
                        TokenError::TokenNotYetValid
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: Invalid token signature detected");
                        TokenError::InvalidSignature
                    }
                    ErrorKind::InvalidIssuer => {
                        tracing::warn!("Token verification failed: Foreign issuer");
                        TokenError::InvalidSignature
                    }
                    ErrorKind::InvalidToken | ErrorKind::InvalidAlgorithm => {
                        tracing::error!("Security alert: Malformed or invalid algorithm token");
                        TokenError::MalformedToken
                    }
                    _ => {
                        tracing::warn!("Token verification failed: Malformed token");
                        TokenError::MalformedToken
                    }
                }
            })?;

        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-that-is-long-enough-for-hs256";

    fn config(issuer: &str, expiry: i64) -> JwtConfig {
        JwtConfig {
            secret_key: SECRET.to_string(),
            issuer: issuer.to_string(),
            access_token_expiry: expiry,
        }
    }

    fn service() -> JwtTokenService {
        JwtTokenService::new(config("recipe-api", 3600))
    }

    #[test]
    fn generate_and_verify_access_token() {
        let service = service();
        let user_id = Uuid::new_v4();

        let token = service.generate_access_token(user_id).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.token_type, ACCESS_TOKEN_TYPE);
        assert_eq!(claims.iss, "recipe-api");
    }

    #[test]
    fn expiry_is_in_the_future() {
        let service = service();

        let token = service.generate_access_token(Uuid::new_v4()).unwrap();
        let claims = service.verify_token(&token).unwrap();

        let now = Utc::now().timestamp();
        assert!(claims.exp > now);
        assert!(claims.iat <= now);
        assert!(claims.nbf <= now);
    }

    #[test]
    fn garbage_token_is_malformed() {
        let result = service().verify_token("invalid.jwt.token");

        assert!(matches!(result, Err(TokenError::MalformedToken)));
    }

    #[test]
    fn expired_token_is_rejected() {
        // Beyond the 30s leeway
        let service = JwtTokenService::new(config("recipe-api", -35));

        let token = service.generate_access_token(Uuid::new_v4()).unwrap();

        assert!(matches!(
            service.verify_token(&token),
            Err(TokenError::TokenExpired)
        ));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = service().generate_access_token(Uuid::new_v4()).unwrap();

        let other = JwtTokenService::new(JwtConfig {
            secret_key: format!("{SECRET}_DIFFERENT"),
            ..config("recipe-api", 3600)
        });

        assert!(matches!(
            other.verify_token(&token),
            Err(TokenError::InvalidSignature)
        ));
    }

    #[test]
    fn token_from_other_issuer_is_rejected() {
        let foreign = JwtTokenService::new(config("someone-else", 3600));
        let token = foreign.generate_access_token(Uuid::new_v4()).unwrap();

        assert!(service().verify_token(&token).is_err());
    }

    #[test]
    fn tampered_token_is_rejected() {
        let service = service();
        let mut token = service.generate_access_token(Uuid::new_v4()).unwrap();
        token.push('x');

        assert!(service.verify_token(&token).is_err());
    }

    #[test]
    fn token_error_display() {
        assert_eq!(TokenError::TokenExpired.to_string(), "Token has expired");
        assert_eq!(TokenError::MalformedToken.to_string(), "Malformed token");
        assert_eq!(
            TokenError::InvalidTokenType("access".to_string()).to_string(),
            "Invalid token type, expected: access"
        );
    }
}
