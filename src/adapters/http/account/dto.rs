//! HTTP DTOs for account endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::AccountView;
use crate::domain::company::MemberRole;
use crate::ports::IssuedToken;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub password: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

impl SessionResponse {
    pub fn new(token: IssuedToken, next: Option<&str>) -> Self {
        Self {
            token: token.token,
            token_type: "Bearer".to_string(),
            expires_in: token.expires_in_secs,
            next: next.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembershipResponse {
    pub company_id: String,
    pub role: MemberRole,
    pub is_platform_admin: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: String,
    pub email: String,
    pub company: Option<MembershipResponse>,
    pub next: String,
}

impl From<AccountView> for AccountResponse {
    fn from(view: AccountView) -> Self {
        Self {
            id: view.user.id.to_string(),
            email: view.user.email,
            company: view.membership.map(|m| MembershipResponse {
                company_id: m.company_id.to_string(),
                role: m.role,
                is_platform_admin: m.is_platform_admin,
            }),
            next: view.next.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_response_omits_missing_next() {
        let token = IssuedToken {
            token: "abc".to_string(),
            expires_in_secs: 3600,
        };
        let json = serde_json::to_value(SessionResponse::new(token, None)).unwrap();
        assert_eq!(json["token_type"], "Bearer");
        assert_eq!(json["expires_in"], 3600);
        assert!(json.get("next").is_none());
    }
}
