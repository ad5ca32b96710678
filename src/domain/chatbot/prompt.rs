//! System prompt construction for the lead-capture chatbot.

use crate::domain::company::{Company, Faq, Service};

use super::lead_capture::LEAD_CAPTURED_MARKER;

/// Builds the system prompt sent ahead of every chat transcript.
///
/// `industry_name` falls back to "service" when the company has none.
pub fn build_system_prompt(
    company: &Company,
    industry_name: Option<&str>,
    services: &[Service],
    faqs: &[Faq],
) -> String {
    let services_list = services_section(services);
    let faqs_block = faqs_section(faqs)
        .map(|list| format!("FAQS:\n{list}"))
        .unwrap_or_default();

    let pricing_step = if company.chatbot.show_pricing {
        "Give a price estimate based on SERVICES above"
    } else {
        "Let them know someone will provide a personalized quote"
    };
    let email_rule = if company.chatbot.require_email {
        "required"
    } else {
        "optional - ask but don't push"
    };
    let custom = company.chatbot.custom_prompt.as_deref().unwrap_or("");

    let prompt = format!(
        r#"
You are the AI assistant for {name}, a {industry} company.

TONE: {tone} - Keep it conversational and warm, like talking to a helpful neighbor.

SERVICES:
{services_list}

{faqs_block}

YOUR JOB:
1. Greet warmly and ask what service they need
2. Ask about their specific situation/job details
3. {pricing_step}
4. Ask when they need this done (urgent, this week, this month, just getting quotes)
5. Collect their contact info in this order:
   - First name
   - Phone number (required)
   - Email ({email_rule})
   - Service address (city/zip at minimum)
6. Confirm the info and let them know someone will call soon

CRITICAL RULES:
- Keep responses SHORT (2-3 sentences max)
- Ask ONE question at a time
- Be helpful, not pushy or salesy
- Don't make up information not in SERVICES or FAQS
- When you have name + phone + service needed, you've captured the lead
- After capturing lead, thank them and mention they'll get a call soon

LEAD CAPTURE:
When you have collected: first name, phone number, and service needed - include this EXACT text at the END of your message:
{marker}

{custom}
"#,
        name = company.name,
        industry = industry_name.filter(|n| !n.is_empty()).unwrap_or("service"),
        tone = company.chatbot.tone_or_default(),
        marker = LEAD_CAPTURED_MARKER,
    );

    prompt.trim().to_string()
}

fn services_section(services: &[Service]) -> String {
    if services.is_empty() {
        return "- Various services available".to_string();
    }
    services
        .iter()
        .map(|s| format!("- {}: ${}-{}", s.name, price(s.price_min), price(s.price_max)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn faqs_section(faqs: &[Faq]) -> Option<String> {
    if faqs.is_empty() {
        return None;
    }
    Some(
        faqs.iter()
            .map(|f| format!("Q: {}\nA: {}", f.question, f.answer))
            .collect::<Vec<_>>()
            .join("\n\n"),
    )
}

// Zero renders like a missing price.
fn price(value: Option<i64>) -> String {
    match value {
        Some(v) if v != 0 => v.to_string(),
        _ => "?".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::company::NewCompany;
    use crate::domain::foundation::{CompanyId, ServiceId, Timestamp};

    fn company() -> Company {
        let details = NewCompany::parse("Pro Carpet Care", "5551234567", "Denver", "CO", "carpet-cleaning").unwrap();
        Company::register(details, "owner@example.com", Timestamp::now())
    }

    fn service(name: &str, min: Option<i64>, max: Option<i64>) -> Service {
        Service {
            id: ServiceId::new(),
            company_id: CompanyId::new(),
            name: name.to_string(),
            description: None,
            price_min: min,
            price_max: max,
            is_active: true,
            sort_order: 0,
        }
    }

    #[test]
    fn opens_with_company_and_industry() {
        let prompt = build_system_prompt(&company(), Some("Carpet Cleaning"), &[], &[]);
        assert!(prompt.starts_with("You are the AI assistant for Pro Carpet Care, a Carpet Cleaning company."));
        assert!(prompt.contains("TONE: friendly - "));
    }

    #[test]
    fn missing_industry_reads_service() {
        let prompt = build_system_prompt(&company(), None, &[], &[]);
        assert!(prompt.contains(", a service company."));
    }

    #[test]
    fn lists_services_with_unknown_prices() {
        let services = vec![
            service("Deep clean", Some(150), Some(300)),
            service("Stain removal", None, Some(0)),
        ];
        let prompt = build_system_prompt(&company(), None, &services, &[]);
        assert!(prompt.contains("SERVICES:\n- Deep clean: $150-300\n- Stain removal: $?-?"));
    }

    #[test]
    fn empty_services_placeholder() {
        let prompt = build_system_prompt(&company(), None, &[], &[]);
        assert!(prompt.contains("SERVICES:\n- Various services available"));
    }

    #[test]
    fn faqs_section_only_when_present() {
        let prompt = build_system_prompt(&company(), None, &[], &[]);
        assert!(!prompt.contains("FAQS:"));

        let faqs = vec![
            Faq { question: "Pets?".into(), answer: "Pet safe.".into(), sort_order: 0 },
            Faq { question: "Dry time?".into(), answer: "4 hours.".into(), sort_order: 1 },
        ];
        let prompt = build_system_prompt(&company(), None, &[], &faqs);
        assert!(prompt.contains("FAQS:\nQ: Pets?\nA: Pet safe.\n\nQ: Dry time?\nA: 4 hours."));
    }

    #[test]
    fn pricing_and_email_switches() {
        let mut c = company();
        let prompt = build_system_prompt(&c, None, &[], &[]);
        assert!(prompt.contains("3. Let them know someone will provide a personalized quote"));
        assert!(prompt.contains("Email (optional - ask but don't push)"));

        c.chatbot.show_pricing = true;
        c.chatbot.require_email = true;
        let prompt = build_system_prompt(&c, None, &[], &[]);
        assert!(prompt.contains("3. Give a price estimate based on SERVICES above"));
        assert!(prompt.contains("Email (required)"));
    }

    #[test]
    fn custom_prompt_is_appended_last() {
        let mut c = company();
        c.chatbot.tone = Some("professional".into());
        c.chatbot.custom_prompt = Some("Always mention our 100% satisfaction guarantee.".into());
        let prompt = build_system_prompt(&c, None, &[], &[]);
        assert!(prompt.contains("TONE: professional - "));
        assert!(prompt.ends_with("[LEAD_CAPTURED]\n\nAlways mention our 100% satisfaction guarantee."));
    }

    #[test]
    fn result_is_trimmed() {
        let prompt = build_system_prompt(&company(), None, &[], &[]);
        assert_eq!(prompt, prompt.trim());
        assert!(prompt.ends_with(LEAD_CAPTURED_MARKER));
    }
}
