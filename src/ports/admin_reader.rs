//! Admin reader port (read side).
//!
//! Cross-tenant queries for the platform admin area.

use async_trait::async_trait;

use crate::domain::dashboard::{AdminLeadRow, AdminOverview, CompanySummary};
use crate::domain::foundation::{DomainError, Timestamp};

#[async_trait]
pub trait AdminReader: Send + Sync {
    /// Platform totals, counting scans at or after `scans_since`.
    async fn overview(&self, scans_since: Timestamp) -> Result<AdminOverview, DomainError>;

    /// All companies newest first.
    async fn companies(&self) -> Result<Vec<CompanySummary>, DomainError>;

    /// Most recent leads across tenants.
    async fn recent_leads(&self, limit: usize) -> Result<Vec<AdminLeadRow>, DomainError>;
}
