//! OpenChatbotHandler - Data for the public chat page a QR code opens.
//!
//! Also records the scan. Recording is spawned so a slow or failing write
//! never delays the page.

use std::sync::Arc;

use crate::domain::company::{Company, Faq, Service};
use crate::domain::foundation::{DomainError, ErrorCode, QrCodeId, Timestamp};
use crate::domain::qr_code::{QrCode, Scan};
use crate::ports::{CompanyRepository, QrCodeRepository};

pub const DEFAULT_META_TITLE: &str = "Chat";
pub const DEFAULT_META_DESCRIPTION: &str = "Get a quote in 60 seconds";

#[derive(Debug, Clone)]
pub struct OpenChatbotQuery {
    pub code: String,
}

/// Everything the chat page renders.
#[derive(Debug, Clone)]
pub struct ChatbotPage {
    pub company: Company,
    pub qr_code_id: QrCodeId,
    pub greeting: String,
    pub services: Vec<Service>,
    pub faqs: Vec<Faq>,
}

/// Link-preview metadata for a chat page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatbotMeta {
    pub title: String,
    pub description: String,
}

pub struct OpenChatbotHandler {
    qr_codes: Arc<dyn QrCodeRepository>,
    companies: Arc<dyn CompanyRepository>,
}

impl OpenChatbotHandler {
    pub fn new(qr_codes: Arc<dyn QrCodeRepository>, companies: Arc<dyn CompanyRepository>) -> Self {
        Self { qr_codes, companies }
    }

    /// Loads the page and records a scan in the background.
    pub async fn handle(&self, query: OpenChatbotQuery) -> Result<ChatbotPage, DomainError> {
        let (qr, company) = self.resolve(&query.code).await?;

        let (services, faqs) = tokio::join!(
            self.companies.active_services(&company.id),
            self.companies.faqs(&company.id)
        );

        spawn_scan_recorder(self.qr_codes.clone(), &qr);

        Ok(ChatbotPage {
            greeting: company.greeting(),
            qr_code_id: qr.id,
            services: services?,
            faqs: faqs?,
            company,
        })
    }

    /// Title and description for link previews. Unknown codes get defaults.
    pub async fn meta(&self, query: OpenChatbotQuery) -> Result<ChatbotMeta, DomainError> {
        let company = match self.resolve(&query.code).await {
            Ok((_, company)) => Some(company),
            Err(e) if e.is_internal() => return Err(e),
            Err(_) => None,
        };

        Ok(ChatbotMeta {
            title: company
                .as_ref()
                .map(|c| c.name.clone())
                .unwrap_or_else(|| DEFAULT_META_TITLE.to_string()),
            description: company
                .and_then(|c| c.branding.tagline)
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_META_DESCRIPTION.to_string()),
        })
    }

    async fn resolve(&self, code: &str) -> Result<(QrCode, Company), DomainError> {
        let qr = self
            .qr_codes
            .find_active_by_code(code)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::QrCodeNotFound, "QR code not found"))?;

        let company = self
            .companies
            .find_by_id(&qr.company_id)
            .await?
            .filter(Company::is_active)
            .ok_or_else(|| DomainError::new(ErrorCode::CompanyNotFound, "Company not found"))?;

        Ok((qr, company))
    }
}

/// Fire-and-forget scan write. Errors are logged only.
pub fn spawn_scan_recorder(qr_codes: Arc<dyn QrCodeRepository>, qr: &QrCode) -> tokio::task::JoinHandle<()> {
    let scan = Scan {
        qr_code_id: qr.id,
        company_id: qr.company_id,
        scanned_at: Timestamp::now(),
    };
    tokio::spawn(async move {
        if let Err(e) = qr_codes.record_scan(&scan).await {
            tracing::warn!(qr_code_id = %scan.qr_code_id, error = %e, "Failed to record scan");
        }
    })
}
