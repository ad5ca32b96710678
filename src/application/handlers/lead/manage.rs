//! Lead inbox handlers.

use std::sync::Arc;

use crate::domain::dashboard::LeadSummary;
use crate::domain::foundation::{
    AuthenticatedUser, DomainError, ErrorCode, LeadId, StateMachine, ValidationError,
};
use crate::domain::lead::{Lead, LeadStatus};
use crate::ports::{CompanyRepository, LeadRepository};

use crate::application::handlers::access::require_membership;

#[derive(Debug, Clone)]
pub struct UpdateLeadStatusCommand {
    pub user: AuthenticatedUser,
    pub lead_id: LeadId,
    pub status: String,
}

pub struct LeadHandler {
    companies: Arc<dyn CompanyRepository>,
    leads: Arc<dyn LeadRepository>,
}

impl LeadHandler {
    pub fn new(companies: Arc<dyn CompanyRepository>, leads: Arc<dyn LeadRepository>) -> Self {
        Self { companies, leads }
    }

    /// Every lead for the caller's company, newest first.
    pub async fn list(&self, user: &AuthenticatedUser) -> Result<Vec<LeadSummary>, DomainError> {
        let member = require_membership(self.companies.as_ref(), user).await?;
        self.leads.list_by_company(&member.company_id, None).await
    }

    /// Moves a lead through the sales pipeline. Same-status updates are no-ops.
    pub async fn update_status(&self, cmd: UpdateLeadStatusCommand) -> Result<Lead, DomainError> {
        let member = require_membership(self.companies.as_ref(), &cmd.user).await?;
        let target = LeadStatus::parse(&cmd.status).ok_or_else(|| {
            ValidationError::invalid_format("status", "must be new, contacted, quoted, won or lost")
        })?;

        let mut lead = self
            .leads
            .find_by_id(&cmd.lead_id)
            .await?
            .filter(|l| l.company_id == member.company_id)
            .ok_or_else(|| DomainError::new(ErrorCode::LeadNotFound, "Lead not found"))?;
        if lead.status == target {
            return Ok(lead);
        }

        lead.status = lead
            .status
            .transition_to(target)
            .map_err(|e| DomainError::new(ErrorCode::InvalidStateTransition, e.to_string()))?;
        self.leads.update_status(&lead.id, lead.status).await?;

        tracing::info!(lead_id = %lead.id, status = lead.status.as_str(), "Lead status updated");
        Ok(lead)
    }
}
