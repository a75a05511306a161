use super::config::JwtConfig;
use super::principal::Principal;
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session token lifetime in seconds (15 minutes)
pub const SESSION_TOKEN_TTL: i64 = 900;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String, // Subject (user ID)
    pub exp: i64,    // Expiration time
    pub iat: i64,    // Issued at
    pub jti: String, // Session ID
}

impl JwtClaims {
    /// Resolve the claims into a [`Principal`]. Fails when `sub` is not a UUID.
    pub fn principal(&self) -> eyre::Result<Principal> {
        let user_id = Uuid::parse_str(&self.sub)
            .map_err(|e| eyre::eyre!("Invalid subject '{}': {}", self.sub, e))?;

        Ok(Principal {
            user_id,
            session_id: self.jti.clone(),
        })
    }
}

/// Stateless HS256 session tokens
#[derive(Clone)]
pub struct JwtAuth {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl JwtAuth {
    pub fn new(config: &JwtConfig) -> Self {
        tracing::info!("JWT session auth initialized");
        Self {
            encoding: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// Create a session token for `user_id` (15 min)
    pub fn create_session_token(&self, user_id: Uuid) -> eyre::Result<String> {
        self.create_token(user_id, SESSION_TOKEN_TTL)
    }

    /// Create JWT token with specified TTL
    pub fn create_token(&self, user_id: Uuid, ttl_seconds: i64) -> eyre::Result<String> {
        let now = Utc::now();

        let claims = JwtClaims {
            sub: user_id.to_string(),
            exp: (now + Duration::seconds(ttl_seconds)).timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?;
        Ok(token)
    }

    /// Verify JWT token signature and expiry and decode claims
    pub fn verify_token(&self, token: &str) -> eyre::Result<JwtClaims> {
        let token_data = decode::<JwtClaims>(token, &self.decoding, &self.validation)?;
        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth(secret: &str) -> JwtAuth {
        JwtAuth::new(&JwtConfig::new(secret).unwrap())
    }

    #[test]
    fn test_session_token_resolves_to_principal() {
        let auth = auth("this-is-a-valid-secret-with-32-chars!");
        let user_id = Uuid::new_v4();

        let token = auth.create_session_token(user_id).unwrap();
        let claims = auth.verify_token(&token).unwrap();
        let principal = claims.principal().unwrap();

        assert_eq!(principal.user_id, user_id);
        assert_eq!(principal.session_id, claims.jti);
        assert_eq!(claims.exp - claims.iat, SESSION_TOKEN_TTL);
    }

    #[test]
    fn test_each_session_gets_its_own_id() {
        let auth = auth("this-is-a-valid-secret-with-32-chars!");
        let user_id = Uuid::new_v4();

        let first = auth.verify_token(&auth.create_session_token(user_id).unwrap()).unwrap();
        let second = auth.verify_token(&auth.create_session_token(user_id).unwrap()).unwrap();

        assert_ne!(first.jti, second.jti);
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let issuer = auth("this-is-a-valid-secret-with-32-chars!");
        let verifier = auth("another-secret-that-is-also-32-chars-long");

        let token = issuer.create_session_token(Uuid::new_v4()).unwrap();
        assert!(verifier.verify_token(&token).is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let auth = auth("this-is-a-valid-secret-with-32-chars!");
        let token = auth.create_token(Uuid::new_v4(), -3600).unwrap();
        assert!(auth.verify_token(&token).is_err());
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let auth = auth("this-is-a-valid-secret-with-32-chars!");
        assert!(auth.verify_token("not.a.jwt").is_err());
    }

    #[test]
    fn test_non_uuid_subject_has_no_principal() {
        let claims = JwtClaims {
            sub: "admin".to_string(),
            exp: 0,
            iat: 0,
            jti: "session".to_string(),
        };
        assert!(claims.principal().is_err());
    }
}
