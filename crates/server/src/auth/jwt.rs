use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use shared_types::AppError;

/// Token type carried by portal session tokens.
const TOKEN_TYPE_SESSION: &str = "session";

/// Claims stored in the session token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Username as the roster holds it.
    pub sub: String,
    /// Staff role as the roster holds it (e.g. "Customer Care").
    pub role: String,
    pub exp: i64,
    pub iat: i64,
    /// Unique token identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
    #[serde(default)]
    pub typ: String,
}

#[derive(Debug)]
pub enum TokenError {
    /// `JWT_SECRET` is unset or empty.
    MissingSecret,
    Jwt(jsonwebtoken::errors::Error),
}

impl std::fmt::Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenError::MissingSecret => write!(f, "JWT_SECRET is not set"),
            TokenError::Jwt(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for TokenError {}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        TokenError::Jwt(e)
    }
}

impl From<TokenError> for AppError {
    fn from(e: TokenError) -> Self {
        match e {
            TokenError::MissingSecret => AppError::internal("Session signing is not configured"),
            TokenError::Jwt(_) => AppError::unauthorized("Invalid or expired session"),
        }
    }
}

fn jwt_secret() -> Result<String, TokenError> {
    match std::env::var("JWT_SECRET") {
        Ok(secret) if !secret.is_empty() => Ok(secret),
        _ => Err(TokenError::MissingSecret),
    }
}

pub fn session_expiry_minutes() -> i64 {
    std::env::var("JWT_SESSION_EXPIRY_MINUTES")
        .ok()
        .and_then(|v| v.parse().ok())
        .filter(|m: &i64| *m > 0)
        .unwrap_or(480)
}

pub fn create_session_token(username: &str, role: &str) -> Result<String, TokenError> {
    let now = Utc::now();
    let claims = Claims {
        sub: username.to_string(),
        role: role.to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::minutes(session_expiry_minutes())).timestamp(),
        jti: Some(uuid::Uuid::new_v4().to_string()),
        typ: TOKEN_TYPE_SESSION.to_string(),
    };
    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret()?.as_bytes()),
    )?)
}

/// Validate a session token. Tokens of any other type are rejected.
pub fn validate_session_token(token: &str) -> Result<Claims, TokenError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret()?.as_bytes()),
        &Validation::default(),
    )?;
    if token_data.claims.typ != TOKEN_TYPE_SESSION {
        return Err(jsonwebtoken::errors::Error::from(
            jsonwebtoken::errors::ErrorKind::InvalidToken,
        )
        .into());
    }
    Ok(token_data.claims)
}
