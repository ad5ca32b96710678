//! Lead aggregate.

use serde::{Deserialize, Serialize};

use crate::domain::chatbot::LeadDetails;
use crate::domain::foundation::{
    CompanyId, ConversationId, LeadId, QrCodeId, StateMachine, Timestamp,
};

/// Follow-up stage of a lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Quoted,
    Won,
    Lost,
}

impl LeadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Quoted => "quoted",
            LeadStatus::Won => "won",
            LeadStatus::Lost => "lost",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "new" => Some(LeadStatus::New),
            "contacted" => Some(LeadStatus::Contacted),
            "quoted" => Some(LeadStatus::Quoted),
            "won" => Some(LeadStatus::Won),
            "lost" => Some(LeadStatus::Lost),
            _ => None,
        }
    }
}

impl StateMachine for LeadStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use LeadStatus::*;
        match self {
            New => vec![Contacted, Quoted, Won, Lost],
            Contacted => vec![Quoted, Won, Lost],
            Quoted => vec![Contacted, Won, Lost],
            // A lost lead can be picked back up.
            Lost => vec![Contacted],
            Won => vec![],
        }
    }
}

/// A prospect captured by a chatbot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lead {
    pub id: LeadId,
    pub company_id: CompanyId,
    pub qr_code_id: Option<QrCodeId>,
    pub conversation_id: Option<ConversationId>,
    pub first_name: Option<String>,
    pub phone: String,
    pub email: Option<String>,
    pub service: Option<String>,
    pub address: Option<String>,
    pub timeline: Option<String>,
    pub status: LeadStatus,
    pub billed: bool,
    pub billed_amount_cents: i64,
    pub created_at: Timestamp,
}

impl Lead {
    /// Builds a lead from extracted details. Returns `None` without a phone.
    pub fn capture(
        company_id: CompanyId,
        qr_code_id: Option<QrCodeId>,
        conversation_id: ConversationId,
        details: LeadDetails,
        price_cents: i64,
        now: Timestamp,
    ) -> Option<Self> {
        let phone = details.phone?;
        Some(Self {
            id: LeadId::new(),
            company_id,
            qr_code_id,
            conversation_id: Some(conversation_id),
            first_name: details.first_name,
            phone,
            email: details.email,
            service: details.service,
            address: details.address,
            timeline: details.timeline,
            status: LeadStatus::New,
            billed: false,
            billed_amount_cents: price_cents,
            created_at: now,
        })
    }

    /// Name to show in lists and emails.
    pub fn display_name(&self) -> &str {
        self.first_name.as_deref().unwrap_or("New lead")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(phone: Option<&str>) -> LeadDetails {
        LeadDetails {
            first_name: Some("Sarah".into()),
            phone: phone.map(str::to_string),
            service: Some("Carpet cleaning".into()),
            ..Default::default()
        }
    }

    #[test]
    fn capture_starts_new_and_unbilled() {
        let lead = Lead::capture(
            CompanyId::new(),
            None,
            ConversationId::new(),
            details(Some("5551234567")),
            200,
            Timestamp::now(),
        )
        .unwrap();
        assert_eq!(lead.status, LeadStatus::New);
        assert!(!lead.billed);
        assert_eq!(lead.billed_amount_cents, 200);
        assert_eq!(lead.display_name(), "Sarah");
    }

    #[test]
    fn capture_requires_phone() {
        assert!(Lead::capture(CompanyId::new(), None, ConversationId::new(), details(None), 200, Timestamp::now()).is_none());
    }

    #[test]
    fn status_pipeline() {
        assert!(LeadStatus::New.transition_to(LeadStatus::Contacted).is_ok());
        assert!(LeadStatus::Quoted.transition_to(LeadStatus::Won).is_ok());
        assert!(LeadStatus::Lost.transition_to(LeadStatus::Contacted).is_ok());
        assert!(LeadStatus::Won.is_terminal());
        assert!(LeadStatus::Contacted.transition_to(LeadStatus::New).is_err());
    }

    #[test]
    fn status_parse() {
        assert_eq!(LeadStatus::parse("quoted"), Some(LeadStatus::Quoted));
        assert_eq!(LeadStatus::parse("booked"), None);
    }
}
