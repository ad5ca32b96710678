//! PostgreSQL implementation of CompanyRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use crate::domain::company::{
    Branding, ChatbotSettings, Company, CompanyMember, CompanySettings, CompanyStatus, Faq,
    MemberRole, Service,
};
use crate::domain::foundation::{CompanyId, DomainError, ErrorCode, ServiceId, UserId};
use crate::ports::CompanyRepository;

use super::{column, db_error, is_unique_violation, parse_enum, timestamp_column};

const COMPANY_COLUMNS: &str = r#"
    c.id, c.name, c.slug, c.phone, c.city, c.state, c.email, c.status,
    c.tagline, c.logo_url, c.primary_color, c.secondary_color, c.website,
    c.chatbot_tone, c.chatbot_greeting, c.chatbot_prompt, c.show_pricing, c.require_email,
    c.created_at, i.slug AS industry_slug
"#;

#[derive(Clone)]
pub struct PostgresCompanyRepository {
    pool: PgPool,
}

impl PostgresCompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompanyRepository for PostgresCompanyRepository {
    async fn create_with_owner(
        &self,
        company: &Company,
        owner: &CompanyMember,
        settings: &CompanySettings,
    ) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin transaction"))?;

        sqlx::query(
            r#"
            INSERT INTO companies (
                id, name, slug, phone, city, state, email, industry_id, status, created_at
            ) VALUES (
                $1, $2, $3, $4, $5, $6, $7,
                (SELECT id FROM industries WHERE slug = $8), $9, $10
            )
            "#,
        )
        .bind(company.id.as_uuid())
        .bind(&company.name)
        .bind(&company.slug)
        .bind(&company.phone)
        .bind(&company.city)
        .bind(&company.state)
        .bind(&company.email)
        .bind(&company.industry_slug)
        .bind(company.status.as_str())
        .bind(company.created_at.as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(db_error("Failed to insert company"))?;

        sqlx::query(
            r#"
            INSERT INTO company_users (user_id, company_id, role, is_platform_admin)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(owner.user_id.as_uuid())
        .bind(owner.company_id.as_uuid())
        .bind(owner.role.as_str())
        .bind(owner.is_platform_admin)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                DomainError::new(ErrorCode::CompanyExists, "User already belongs to a company")
            } else {
                DomainError::database(format!("Failed to insert company member: {}", e))
            }
        })?;

        sqlx::query("INSERT INTO company_settings (company_id, lead_email) VALUES ($1, $2)")
            .bind(settings.company_id.as_uuid())
            .bind(&settings.lead_email)
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to insert company settings"))?;

        tx.commit().await.map_err(db_error("Failed to commit transaction"))?;
        Ok(())
    }

    async fn find_by_id(&self, id: &CompanyId) -> Result<Option<Company>, DomainError> {
        let query = format!(
            "SELECT {} FROM companies c LEFT JOIN industries i ON i.id = c.industry_id WHERE c.id = $1",
            COMPANY_COLUMNS
        );
        sqlx::query(&query)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to fetch company"))?
            .map(|row| row_to_company(&row))
            .transpose()
    }

    async fn find_membership(&self, user_id: &UserId) -> Result<Option<CompanyMember>, DomainError> {
        let row = sqlx::query(
            "SELECT user_id, company_id, role, is_platform_admin FROM company_users WHERE user_id = $1",
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to fetch membership"))?;

        let Some(row) = row else {
            return Ok(None);
        };
        let role: String = column(&row, "role")?;
        Ok(Some(CompanyMember {
            user_id: UserId::from_uuid(column(&row, "user_id")?),
            company_id: CompanyId::from_uuid(column(&row, "company_id")?),
            role: MemberRole::parse(&role),
            is_platform_admin: column(&row, "is_platform_admin")?,
        }))
    }

    async fn update_profile(&self, company: &Company) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE companies SET
                name = $2, phone = $3, city = $4, state = $5,
                tagline = $6, logo_url = $7, primary_color = $8, secondary_color = $9, website = $10,
                chatbot_tone = $11, chatbot_greeting = $12, chatbot_prompt = $13,
                show_pricing = $14, require_email = $15,
                updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(company.id.as_uuid())
        .bind(&company.name)
        .bind(&company.phone)
        .bind(&company.city)
        .bind(&company.state)
        .bind(&company.branding.tagline)
        .bind(&company.branding.logo_url)
        .bind(&company.branding.primary_color)
        .bind(&company.branding.secondary_color)
        .bind(&company.branding.website)
        .bind(&company.chatbot.tone)
        .bind(&company.chatbot.greeting)
        .bind(&company.chatbot.custom_prompt)
        .bind(company.chatbot.show_pricing)
        .bind(company.chatbot.require_email)
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to update company"))?;

        if result.rows_affected() == 0 {
            return Err(company_not_found(&company.id));
        }
        Ok(())
    }

    async fn update_status(&self, id: &CompanyId, status: CompanyStatus) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE companies SET status = $2, updated_at = now() WHERE id = $1")
            .bind(id.as_uuid())
            .bind(status.as_str())
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to update company status"))?;

        if result.rows_affected() == 0 {
            return Err(company_not_found(id));
        }
        Ok(())
    }

    async fn settings(&self, id: &CompanyId) -> Result<Option<CompanySettings>, DomainError> {
        let row = sqlx::query("SELECT company_id, lead_email FROM company_settings WHERE company_id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to fetch company settings"))?;

        row.map(|row| {
            Ok(CompanySettings {
                company_id: CompanyId::from_uuid(column(&row, "company_id")?),
                lead_email: column(&row, "lead_email")?,
            })
        })
        .transpose()
    }

    async fn save_settings(&self, settings: &CompanySettings) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO company_settings (company_id, lead_email) VALUES ($1, $2)
            ON CONFLICT (company_id) DO UPDATE SET lead_email = EXCLUDED.lead_email
            "#,
        )
        .bind(settings.company_id.as_uuid())
        .bind(&settings.lead_email)
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to save company settings"))?;

        Ok(())
    }

    async fn services(&self, id: &CompanyId) -> Result<Vec<Service>, DomainError> {
        self.fetch_services(id, false).await
    }

    async fn active_services(&self, id: &CompanyId) -> Result<Vec<Service>, DomainError> {
        self.fetch_services(id, true).await
    }

    async fn replace_services(&self, id: &CompanyId, services: &[Service]) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin transaction"))?;

        sqlx::query("DELETE FROM services WHERE company_id = $1")
            .bind(id.as_uuid())
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to clear services"))?;

        for service in services {
            sqlx::query(
                r#"
                INSERT INTO services (id, company_id, name, description, price_min, price_max, is_active, sort_order)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                "#,
            )
            .bind(service.id.as_uuid())
            .bind(id.as_uuid())
            .bind(&service.name)
            .bind(&service.description)
            .bind(service.price_min)
            .bind(service.price_max)
            .bind(service.is_active)
            .bind(service.sort_order)
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to insert service"))?;
        }

        tx.commit().await.map_err(db_error("Failed to commit transaction"))?;
        Ok(())
    }

    async fn faqs(&self, id: &CompanyId) -> Result<Vec<Faq>, DomainError> {
        let rows = sqlx::query(
            "SELECT question, answer, sort_order FROM company_faqs WHERE company_id = $1 ORDER BY sort_order",
        )
        .bind(id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to fetch FAQs"))?;

        rows.iter()
            .map(|row| {
                Ok(Faq {
                    question: column(row, "question")?,
                    answer: column(row, "answer")?,
                    sort_order: column(row, "sort_order")?,
                })
            })
            .collect()
    }

    async fn replace_faqs(&self, id: &CompanyId, faqs: &[Faq]) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin transaction"))?;

        sqlx::query("DELETE FROM company_faqs WHERE company_id = $1")
            .bind(id.as_uuid())
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to clear FAQs"))?;

        for faq in faqs {
            sqlx::query(
                "INSERT INTO company_faqs (company_id, question, answer, sort_order) VALUES ($1, $2, $3, $4)",
            )
            .bind(id.as_uuid())
            .bind(&faq.question)
            .bind(&faq.answer)
            .bind(faq.sort_order)
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to insert FAQ"))?;
        }

        tx.commit().await.map_err(db_error("Failed to commit transaction"))?;
        Ok(())
    }
}

impl PostgresCompanyRepository {
    async fn fetch_services(&self, id: &CompanyId, active_only: bool) -> Result<Vec<Service>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, company_id, name, description, price_min, price_max, is_active, sort_order
            FROM services
            WHERE company_id = $1 AND ($2 = FALSE OR is_active)
            ORDER BY sort_order
            "#,
        )
        .bind(id.as_uuid())
        .bind(active_only)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to fetch services"))?;

        rows.iter()
            .map(|row| {
                Ok(Service {
                    id: ServiceId::from_uuid(column(row, "id")?),
                    company_id: CompanyId::from_uuid(column(row, "company_id")?),
                    name: column(row, "name")?,
                    description: column(row, "description")?,
                    price_min: column(row, "price_min")?,
                    price_max: column(row, "price_max")?,
                    is_active: column(row, "is_active")?,
                    sort_order: column(row, "sort_order")?,
                })
            })
            .collect()
    }
}

fn company_not_found(id: &CompanyId) -> DomainError {
    DomainError::new(ErrorCode::CompanyNotFound, format!("Company not found: {}", id))
}

fn row_to_company(row: &PgRow) -> Result<Company, DomainError> {
    let status: String = column(row, "status")?;
    Ok(Company {
        id: CompanyId::from_uuid(column(row, "id")?),
        name: column(row, "name")?,
        slug: column(row, "slug")?,
        phone: column(row, "phone")?,
        city: column(row, "city")?,
        state: column(row, "state")?,
        email: column(row, "email")?,
        industry_slug: column(row, "industry_slug")?,
        status: parse_enum(&status, "company status", CompanyStatus::parse)?,
        branding: Branding {
            tagline: column(row, "tagline")?,
            logo_url: column(row, "logo_url")?,
            primary_color: column(row, "primary_color")?,
            secondary_color: column(row, "secondary_color")?,
            website: column(row, "website")?,
        },
        chatbot: ChatbotSettings {
            tone: column(row, "chatbot_tone")?,
            greeting: column(row, "chatbot_greeting")?,
            custom_prompt: column(row, "chatbot_prompt")?,
            show_pricing: column(row, "show_pricing")?,
            require_email: column(row, "require_email")?,
        },
        created_at: timestamp_column(row, "created_at")?,
    })
}
