pub mod password;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config;

/// JWT claims for a session token. Stateless: signature and expiry are the
/// only validity checks, there is no server-side session store or revocation.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(account_id: Uuid) -> Self {
        let now = Utc::now();
        let expiry_hours = config::config().security.jwt_expiry_hours;
        let exp = (now + Duration::hours(expiry_hours as i64)).timestamp();

        Self {
            sub: account_id,
            iat: now.timestamp(),
            exp,
        }
    }
}

#[derive(Debug, Error)]
pub enum JwtError {
    #[error("JWT generation error: {0}")]
    TokenGeneration(String),

    #[error("JWT validation error: {0}")]
    TokenValidation(String),

    #[error("JWT secret not configured")]
    InvalidSecret,
}

pub fn generate_jwt(claims: &Claims) -> Result<String, JwtError> {
    let secret = &config::config().security.jwt_secret;

    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    let header = Header::default();

    encode(&header, claims, &encoding_key).map_err(|e| JwtError::TokenGeneration(e.to_string()))
}

/// Validate a JWT and extract its claims. The embedded account id is trusted
/// for the remainder of the request; the account store is not re-checked.
pub fn validate_jwt(token: &str) -> Result<Claims, JwtError> {
    let secret = &config::config().security.jwt_secret;

    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &decoding_key, &validation)
        .map_err(|e| JwtError::TokenValidation(e.to_string()))?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claims_expire_after_configured_hours() {
        let id = Uuid::new_v4();
        let claims = Claims::new(id);
        let expiry_hours = config::config().security.jwt_expiry_hours as i64;

        assert_eq!(claims.sub, id);
        assert_eq!(claims.exp - claims.iat, expiry_hours * 3600);
    }

    #[test]
    fn generated_token_round_trips() {
        let id = Uuid::new_v4();
        let token = generate_jwt(&Claims::new(id)).unwrap();
        let claims = validate_jwt(&token).unwrap();
        assert_eq!(claims.sub, id);
    }

    #[test]
    fn tampered_token_is_rejected() {
        let token = generate_jwt(&Claims::new(Uuid::new_v4())).unwrap();
        let mut tampered = token.clone();
        tampered.pop();
        assert!(validate_jwt(&tampered).is_err());
        assert!(validate_jwt("not-a-jwt").is_err());
    }

    #[test]
    fn distinct_logins_produce_independent_tokens() {
        let id = Uuid::new_v4();
        let a = generate_jwt(&Claims::new(id)).unwrap();
        let b = generate_jwt(&Claims::new(id)).unwrap();
        // Both remain valid regardless of issue order
        assert_eq!(validate_jwt(&a).unwrap().sub, id);
        assert_eq!(validate_jwt(&b).unwrap().sub, id);
    }
}
