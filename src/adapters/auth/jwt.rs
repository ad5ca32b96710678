//! HS256 JWT adapter for sessions and password resets.
//!
//! Implements both `SessionValidator` and `TokenIssuer` with a shared secret.
//! Every token carries a `purpose` claim so a reset link can never be
//! replayed as a session and vice versa.
//!
//! Validation checks:
//! - **Issuer (iss)**: Must match the configured issuer
//! - **Audience (aud)**: Must match the configured audience
//! - **Expiry (exp)**: Must be in the future
//! - **Purpose**: Must match the operation
//!
//! Reset tokens also carry the user's password stamp (`pwd`), which the
//! reset handler compares with the stored one.

use async_trait::async_trait;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, AuthenticatedUser, Timestamp, UserId};
use crate::ports::{IssuedToken, PasswordResetClaim, SessionValidator, TokenIssuer};

/// Configuration for the JWT adapter.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: Secret<String>,
    pub issuer: String,
    pub audience: String,
    pub session_ttl_secs: u64,
    pub reset_ttl_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum TokenPurpose {
    Session,
    PasswordReset,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    email: String,
    iss: String,
    aud: String,
    exp: i64,
    iat: i64,
    purpose: TokenPurpose,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pwd: Option<String>,
}

/// Signs and validates HS256 tokens.
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let secret = config.secret.expose_secret().as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            config,
        }
    }

    fn issue(
        &self,
        user: &AuthenticatedUser,
        purpose: TokenPurpose,
        ttl_secs: u64,
        pwd: Option<&str>,
    ) -> Result<IssuedToken, AuthError> {
        let now = Timestamp::now().unix_secs();
        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
            exp: now + ttl_secs as i64,
            iat: now,
            purpose,
            pwd: pwd.map(str::to_string),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::IssueFailed(e.to_string()))?;

        Ok(IssuedToken {
            token,
            expires_in_secs: ttl_secs,
        })
    }

    fn verify(&self, token: &str, purpose: TokenPurpose) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_audience(&[&self.config.audience]);
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);

        let data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            use jsonwebtoken::errors::ErrorKind;
            match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token expired");
                    AuthError::TokenExpired
                }
                ErrorKind::InvalidIssuer | ErrorKind::InvalidAudience => {
                    tracing::warn!("Token issued for another service: {}", e);
                    AuthError::InvalidToken
                }
                _ => {
                    tracing::debug!("Token validation failed: {}", e);
                    AuthError::InvalidToken
                }
            }
        })?;

        let claims = data.claims;
        if claims.purpose != purpose {
            tracing::warn!(expected = ?purpose, actual = ?claims.purpose, "Token used for wrong purpose");
            return Err(AuthError::WrongPurpose);
        }
        Ok(claims)
    }

    fn user(claims: Claims) -> Result<AuthenticatedUser, AuthError> {
        let id: UserId = claims.sub.parse().map_err(|_| AuthError::InvalidToken)?;
        Ok(AuthenticatedUser::new(id, claims.email))
    }
}

#[async_trait]
impl SessionValidator for JwtTokenService {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        self.verify(token, TokenPurpose::Session).and_then(Self::user)
    }
}

impl TokenIssuer for JwtTokenService {
    fn issue_session(&self, user: &AuthenticatedUser) -> Result<IssuedToken, AuthError> {
        self.issue(user, TokenPurpose::Session, self.config.session_ttl_secs, None)
    }

    fn issue_password_reset(&self, user: &AuthenticatedUser, password_stamp: &str) -> Result<IssuedToken, AuthError> {
        self.issue(
            user,
            TokenPurpose::PasswordReset,
            self.config.reset_ttl_secs,
            Some(password_stamp),
        )
    }

    fn verify_password_reset(&self, token: &str) -> Result<PasswordResetClaim, AuthError> {
        let mut claims = self.verify(token, TokenPurpose::PasswordReset)?;
        let password_stamp = claims.pwd.take().ok_or(AuthError::InvalidToken)?;
        Ok(PasswordResetClaim {
            user: Self::user(claims)?,
            password_stamp,
        })
    }
}
