use super::config::JwtConfig;
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// JWT claims carried by every access token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,        // User ID
    pub email: String,      // User email
    pub name: String,       // Username, the acting identity
    pub roles: Vec<String>, // User roles
    pub exp: i64,           // Expiration time
    pub iat: i64,           // Issued at
    pub jti: String,        // Token ID
}

impl JwtClaims {
    /// Username the request acts as.
    pub fn username(&self) -> &str {
        &self.name
    }

    pub fn user_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.sub).ok()
    }
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

/// Stateless HS256 token issuer/verifier.
///
/// Built once at startup and shared by the auth service (issuing) and
/// the middleware (verifying). Cloning is cheap.
#[derive(Clone)]
pub struct JwtAuth {
    keys: Arc<Keys>,
    ttl_secs: i64,
}

impl JwtAuth {
    pub fn new(config: &JwtConfig) -> Self {
        let secret = config.secret.as_bytes();
        tracing::info!(ttl_secs = config.ttl_secs, "JWT auth initialized");

        Self {
            keys: Arc::new(Keys {
                encoding: EncodingKey::from_secret(secret),
                decoding: DecodingKey::from_secret(secret),
            }),
            ttl_secs: config.ttl_secs,
        }
    }

    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }

    /// Sign an access token for the given identity.
    pub fn create_access_token(
        &self,
        user_id: &str,
        email: &str,
        name: &str,
        roles: &[String],
    ) -> eyre::Result<String> {
        let now = Utc::now();
        let claims = JwtClaims {
            sub: user_id.to_string(),
            email: email.to_string(),
            name: name.to_string(),
            roles: roles.to_vec(),
            exp: (now + Duration::seconds(self.ttl_secs)).timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.keys.encoding)?;
        Ok(token)
    }

    /// Check signature and expiry, returning the decoded claims.
    pub fn verify_token(&self, token: &str) -> eyre::Result<JwtClaims> {
        let token_data = decode::<JwtClaims>(
            token,
            &self.keys.decoding,
            &Validation::new(Algorithm::HS256),
        )?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth() -> JwtAuth {
        JwtAuth::new(&JwtConfig::new("test-secret-that-is-at-least-32-characters").unwrap())
    }

    #[test]
    fn test_token_carries_identity() {
        let auth = auth();
        let user_id = Uuid::now_v7().to_string();
        let token = auth
            .create_access_token(&user_id, "alice@x.com", "alice", &["USER".to_string()])
            .unwrap();

        let claims = auth.verify_token(&token).unwrap();
        assert_eq!(claims.username(), "alice");
        assert_eq!(claims.email, "alice@x.com");
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.roles, vec!["USER".to_string()]);
        assert_eq!(claims.exp - claims.iat, auth.ttl_secs());
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let other = JwtAuth::new(
            &JwtConfig::new("another-secret-that-is-at-least-32-chars").unwrap(),
        );
        let token = other
            .create_access_token("id", "bob@x.com", "bob", &[])
            .unwrap();

        assert!(auth().verify_token(&token).is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let config = JwtConfig::new("test-secret-that-is-at-least-32-characters")
            .unwrap()
            .with_ttl(-3600);
        let auth = JwtAuth::new(&config);
        let token = auth.create_access_token("id", "e@x.com", "eve", &[]).unwrap();

        assert!(auth.verify_token(&token).is_err());
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        assert!(auth().verify_token("not.a.jwt").is_err());
    }
}
