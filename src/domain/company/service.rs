//! Services and FAQs a company feeds to its chatbot.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CompanyId, ServiceId, ValidationError};

use super::company::{non_blank, required};

/// A service a company offers. Prices are whole dollars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub company_id: CompanyId,
    pub name: String,
    pub description: Option<String>,
    pub price_min: Option<i64>,
    pub price_max: Option<i64>,
    pub is_active: bool,
    pub sort_order: i32,
}

/// Unvalidated service entry from the configuration screen.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceDraft {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price_min: Option<i64>,
    #[serde(default)]
    pub price_max: Option<i64>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl ServiceDraft {
    /// Validates the draft and places it at `sort_order` in the list.
    pub fn into_service(self, company_id: CompanyId, sort_order: i32) -> Result<Service, ValidationError> {
        let name = required("name", &self.name)?;
        for (field, price) in [("price_min", self.price_min), ("price_max", self.price_max)] {
            if let Some(price) = price {
                if price < 0 {
                    return Err(ValidationError::out_of_range(field, 0, i64::MAX, price));
                }
            }
        }
        if let (Some(min), Some(max)) = (self.price_min, self.price_max) {
            if min > max {
                return Err(ValidationError::out_of_range("price_min", 0, max, min));
            }
        }

        Ok(Service {
            id: ServiceId::new(),
            company_id,
            name,
            description: non_blank(self.description.as_deref()).map(str::to_string),
            price_min: self.price_min,
            price_max: self.price_max,
            is_active: self.is_active,
            sort_order,
        })
    }
}

/// Validates a full replacement list; list order becomes sort order.
pub fn build_services(company_id: CompanyId, drafts: Vec<ServiceDraft>) -> Result<Vec<Service>, ValidationError> {
    drafts
        .into_iter()
        .enumerate()
        .map(|(i, d)| d.into_service(company_id, i as i32))
        .collect()
}

/// A question/answer pair the chatbot may quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
    pub sort_order: i32,
}

impl Faq {
    pub fn new(question: &str, answer: &str, sort_order: i32) -> Result<Self, ValidationError> {
        Ok(Self {
            question: required("question", question)?,
            answer: required("answer", answer)?,
            sort_order,
        })
    }
}
