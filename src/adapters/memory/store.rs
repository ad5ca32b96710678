//! In-Memory Store Adapter
//!
//! One set of tables behind `tokio::sync::RwLock`, so joins (lead summaries,
//! admin rows) see the same data the repositories wrote.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::account::User;
use crate::domain::chatbot::Conversation;
use crate::domain::company::{
    Company, CompanyMember, CompanySettings, CompanyStatus, Faq, Service,
};
use crate::domain::dashboard::{
    AdminLeadRow, AdminOverview, CompanySummary, LeadSummary, ADMIN_RECENT_COMPANIES,
};
use crate::domain::foundation::{
    ChatSessionId, CompanyId, DomainError, ErrorCode, LeadId, QrCodeId, Timestamp, UserId,
};
use crate::domain::lead::{Lead, LeadStatus};
use crate::domain::qr_code::{QrCode, QrCodeStatus, Scan};
use crate::ports::{
    AdminReader, CompanyRepository, ConversationRepository, LeadRepository, QrCodeRepository,
    UserRepository,
};

#[derive(Debug, Default)]
struct Tables {
    users: HashMap<UserId, User>,
    companies: HashMap<CompanyId, Company>,
    members: HashMap<UserId, CompanyMember>,
    settings: HashMap<CompanyId, CompanySettings>,
    services: HashMap<CompanyId, Vec<Service>>,
    faqs: HashMap<CompanyId, Vec<Faq>>,
    qr_codes: HashMap<QrCodeId, QrCode>,
    scans: Vec<Scan>,
    conversations: HashMap<ChatSessionId, Conversation>,
    leads: Vec<Lead>,
}

/// Shared in-memory tables for every repository port.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grants the platform admin flag to a user's membership.
    pub async fn grant_platform_admin(&self, user_id: &UserId) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        let member = tables
            .members
            .get_mut(user_id)
            .ok_or_else(|| DomainError::new(ErrorCode::NotFound, "Membership not found"))?;
        member.is_platform_admin = true;
        Ok(())
    }

    /// Number of scan log rows.
    pub async fn scan_count(&self) -> usize {
        self.tables.read().await.scans.len()
    }

    /// Every stored lead, oldest first.
    pub async fn all_leads(&self) -> Vec<Lead> {
        self.tables.read().await.leads.clone()
    }
}

fn summarize(company: &Company) -> CompanySummary {
    CompanySummary {
        id: company.id,
        name: company.name.clone(),
        slug: company.slug.clone(),
        city: company.city.clone(),
        state: company.state.clone(),
        industry_name: company.industry_name().map(str::to_string),
        status: company.status,
        created_at: company.created_at,
    }
}

fn companies_newest_first(tables: &Tables) -> Vec<CompanySummary> {
    let mut companies: Vec<&Company> = tables.companies.values().collect();
    companies.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    companies.into_iter().map(summarize).collect()
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, user: &User) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        if tables.users.values().any(|u| u.email == user.email) {
            return Err(DomainError::new(
                ErrorCode::EmailTaken,
                "An account with this email already exists",
            ));
        }
        tables.users.insert(user.id, user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        Ok(self.tables.read().await.users.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self
            .tables
            .read()
            .await
            .users
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn update_password(&self, id: &UserId, password_hash: &str) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        let user = tables
            .users
            .get_mut(id)
            .ok_or_else(|| DomainError::new(ErrorCode::UserNotFound, format!("User not found: {}", id)))?;
        user.password_hash = password_hash.to_string();
        Ok(())
    }
}

#[async_trait]
impl CompanyRepository for InMemoryStore {
    async fn create_with_owner(
        &self,
        company: &Company,
        owner: &CompanyMember,
        settings: &CompanySettings,
    ) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        if tables.members.contains_key(&owner.user_id) {
            return Err(DomainError::new(
                ErrorCode::CompanyExists,
                "User already belongs to a company",
            ));
        }
        tables.companies.insert(company.id, company.clone());
        tables.members.insert(owner.user_id, owner.clone());
        tables.settings.insert(settings.company_id, settings.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &CompanyId) -> Result<Option<Company>, DomainError> {
        Ok(self.tables.read().await.companies.get(id).cloned())
    }

    async fn find_membership(&self, user_id: &UserId) -> Result<Option<CompanyMember>, DomainError> {
        Ok(self.tables.read().await.members.get(user_id).cloned())
    }

    async fn update_profile(&self, company: &Company) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        match tables.companies.get_mut(&company.id) {
            Some(existing) => {
                *existing = company.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::CompanyNotFound,
                format!("Company not found: {}", company.id),
            )),
        }
    }

    async fn update_status(&self, id: &CompanyId, status: CompanyStatus) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        let company = tables
            .companies
            .get_mut(id)
            .ok_or_else(|| DomainError::new(ErrorCode::CompanyNotFound, format!("Company not found: {}", id)))?;
        company.status = status;
        Ok(())
    }

    async fn settings(&self, id: &CompanyId) -> Result<Option<CompanySettings>, DomainError> {
        Ok(self.tables.read().await.settings.get(id).cloned())
    }

    async fn save_settings(&self, settings: &CompanySettings) -> Result<(), DomainError> {
        self.tables
            .write()
            .await
            .settings
            .insert(settings.company_id, settings.clone());
        Ok(())
    }

    async fn services(&self, id: &CompanyId) -> Result<Vec<Service>, DomainError> {
        let mut services = self
            .tables
            .read()
            .await
            .services
            .get(id)
            .cloned()
            .unwrap_or_default();
        services.sort_by_key(|s| s.sort_order);
        Ok(services)
    }

    async fn active_services(&self, id: &CompanyId) -> Result<Vec<Service>, DomainError> {
        let services = CompanyRepository::services(self, id).await?;
        Ok(services.into_iter().filter(|s| s.is_active).collect())
    }

    async fn replace_services(&self, id: &CompanyId, services: &[Service]) -> Result<(), DomainError> {
        self.tables.write().await.services.insert(*id, services.to_vec());
        Ok(())
    }

    async fn faqs(&self, id: &CompanyId) -> Result<Vec<Faq>, DomainError> {
        let mut faqs = self
            .tables
            .read()
            .await
            .faqs
            .get(id)
            .cloned()
            .unwrap_or_default();
        faqs.sort_by_key(|f| f.sort_order);
        Ok(faqs)
    }

    async fn replace_faqs(&self, id: &CompanyId, faqs: &[Faq]) -> Result<(), DomainError> {
        self.tables.write().await.faqs.insert(*id, faqs.to_vec());
        Ok(())
    }
}

#[async_trait]
impl QrCodeRepository for InMemoryStore {
    async fn insert(&self, qr_code: &QrCode) -> Result<bool, DomainError> {
        let mut tables = self.tables.write().await;
        if tables.qr_codes.values().any(|q| q.code == qr_code.code) {
            return Ok(false);
        }
        tables.qr_codes.insert(qr_code.id, qr_code.clone());
        Ok(true)
    }

    async fn find_by_id(&self, id: &QrCodeId) -> Result<Option<QrCode>, DomainError> {
        Ok(self.tables.read().await.qr_codes.get(id).cloned())
    }

    async fn find_active_by_code(&self, code: &str) -> Result<Option<QrCode>, DomainError> {
        Ok(self
            .tables
            .read()
            .await
            .qr_codes
            .values()
            .find(|q| q.code == code && q.status == QrCodeStatus::Active)
            .cloned())
    }

    async fn list_by_company(&self, company_id: &CompanyId) -> Result<Vec<QrCode>, DomainError> {
        let mut codes: Vec<QrCode> = self
            .tables
            .read()
            .await
            .qr_codes
            .values()
            .filter(|q| q.company_id == *company_id)
            .cloned()
            .collect();
        codes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(codes)
    }

    async fn update_status(&self, id: &QrCodeId, status: QrCodeStatus) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        let qr = tables
            .qr_codes
            .get_mut(id)
            .ok_or_else(|| DomainError::new(ErrorCode::QrCodeNotFound, format!("QR code not found: {}", id)))?;
        qr.status = status;
        Ok(())
    }

    async fn record_scan(&self, scan: &Scan) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        if let Some(qr) = tables.qr_codes.get_mut(&scan.qr_code_id) {
            qr.total_scans += 1;
            qr.last_scan_at = Some(scan.scanned_at);
        }
        tables.scans.push(scan.clone());
        Ok(())
    }
}

#[async_trait]
impl ConversationRepository for InMemoryStore {
    async fn find_by_session(&self, session_id: &ChatSessionId) -> Result<Option<Conversation>, DomainError> {
        Ok(self.tables.read().await.conversations.get(session_id).cloned())
    }

    async fn upsert(&self, conversation: &Conversation) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        if let Some(stored) = tables.conversations.get_mut(&conversation.session_id) {
            if stored.company_id != conversation.company_id {
                return Ok(());
            }
            if stored.is_completed() {
                stored.messages = conversation.messages.clone();
                stored.last_message_at = conversation.last_message_at;
                return Ok(());
            }
        }
        tables
            .conversations
            .insert(conversation.session_id, conversation.clone());
        Ok(())
    }

    async fn complete_with_lead(
        &self,
        conversation: &Conversation,
        lead: Option<&Lead>,
    ) -> Result<bool, DomainError> {
        let mut tables = self.tables.write().await;
        if let Some(stored) = tables.conversations.get_mut(&conversation.session_id) {
            if stored.company_id != conversation.company_id {
                return Ok(false);
            }
            if stored.is_completed() {
                stored.messages = conversation.messages.clone();
                stored.last_message_at = conversation.last_message_at;
                return Ok(false);
            }
        }

        tables
            .conversations
            .insert(conversation.session_id, conversation.clone());
        if let Some(lead) = lead {
            if let Some(qr_code_id) = &lead.qr_code_id {
                if let Some(qr) = tables.qr_codes.get_mut(qr_code_id) {
                    qr.total_leads += 1;
                }
            }
            tables.leads.push(lead.clone());
        }
        Ok(true)
    }
}

#[async_trait]
impl LeadRepository for InMemoryStore {
    async fn insert(&self, lead: &Lead) -> Result<(), DomainError> {
        self.tables.write().await.leads.push(lead.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &LeadId) -> Result<Option<Lead>, DomainError> {
        Ok(self
            .tables
            .read()
            .await
            .leads
            .iter()
            .find(|l| l.id == *id)
            .cloned())
    }

    async fn list_by_company(
        &self,
        company_id: &CompanyId,
        limit: Option<usize>,
    ) -> Result<Vec<LeadSummary>, DomainError> {
        let tables = self.tables.read().await;
        let mut leads: Vec<&Lead> = tables
            .leads
            .iter()
            .filter(|l| l.company_id == *company_id)
            .collect();
        leads.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(leads
            .into_iter()
            .take(limit.unwrap_or(usize::MAX))
            .map(|lead| {
                let qr = lead.qr_code_id.and_then(|id| tables.qr_codes.get(&id));
                LeadSummary {
                    id: lead.id,
                    first_name: lead.first_name.clone(),
                    phone: lead.phone.clone(),
                    email: lead.email.clone(),
                    service: lead.service.clone(),
                    address: lead.address.clone(),
                    timeline: lead.timeline.clone(),
                    status: lead.status,
                    qr_code_name: qr.map(|q| q.name.clone()),
                    qr_code_channel: qr.map(|q| q.channel),
                    created_at: lead.created_at,
                }
            })
            .collect())
    }

    async fn update_status(&self, id: &LeadId, status: LeadStatus) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        let lead = tables
            .leads
            .iter_mut()
            .find(|l| l.id == *id)
            .ok_or_else(|| DomainError::new(ErrorCode::LeadNotFound, format!("Lead not found: {}", id)))?;
        lead.status = status;
        Ok(())
    }
}

#[async_trait]
impl AdminReader for InMemoryStore {
    async fn overview(&self, scans_since: Timestamp) -> Result<AdminOverview, DomainError> {
        let tables = self.tables.read().await;
        let mut recent_companies = companies_newest_first(&tables);
        recent_companies.truncate(ADMIN_RECENT_COMPANIES);

        Ok(AdminOverview {
            total_companies: tables.companies.len() as i64,
            active_companies: tables.companies.values().filter(|c| c.is_active()).count() as i64,
            total_revenue_cents: tables
                .leads
                .iter()
                .filter(|l| l.billed)
                .map(|l| l.billed_amount_cents)
                .sum(),
            pending_leads: tables.leads.iter().filter(|l| !l.billed).count() as i64,
            scans_last_30_days: tables
                .scans
                .iter()
                .filter(|s| !s.scanned_at.is_before(&scans_since))
                .count() as i64,
            recent_companies,
        })
    }

    async fn companies(&self) -> Result<Vec<CompanySummary>, DomainError> {
        Ok(companies_newest_first(&*self.tables.read().await))
    }

    async fn recent_leads(&self, limit: usize) -> Result<Vec<AdminLeadRow>, DomainError> {
        let tables = self.tables.read().await;
        let mut leads: Vec<&Lead> = tables.leads.iter().collect();
        leads.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(leads
            .into_iter()
            .take(limit)
            .map(|lead| AdminLeadRow {
                id: lead.id,
                company_id: lead.company_id,
                company_name: tables
                    .companies
                    .get(&lead.company_id)
                    .map(|c| c.name.clone())
                    .unwrap_or_default(),
                qr_code_name: lead
                    .qr_code_id
                    .and_then(|id| tables.qr_codes.get(&id))
                    .map(|q| q.name.clone()),
                first_name: lead.first_name.clone(),
                phone: lead.phone.clone(),
                service: lead.service.clone(),
                status: lead.status,
                billed: lead.billed,
                billed_amount_cents: lead.billed_amount_cents,
                created_at: lead.created_at,
            })
            .collect())
    }
}
