use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CompanyId, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
    Owner,
    Member,
}

impl MemberRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberRole::Owner => "owner",
            MemberRole::Member => "member",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "owner" => MemberRole::Owner,
            _ => MemberRole::Member,
        }
    }
}

/// Link between a user and the company they work for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyMember {
    pub user_id: UserId,
    pub company_id: CompanyId,
    pub role: MemberRole,
    /// Grants access to the platform admin area.
    pub is_platform_admin: bool,
}

impl CompanyMember {
    pub fn owner(user_id: UserId, company_id: CompanyId) -> Self {
        Self {
            user_id,
            company_id,
            role: MemberRole::Owner,
            is_platform_admin: false,
        }
    }
}
