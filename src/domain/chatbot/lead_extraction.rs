//! Pulls contact details out of a finished chat transcript.

use once_cell::sync::Lazy;
use regex::Regex;

use super::message::{ChatMessage, ChatRole};

// Digit boundaries are checked after matching so that adjacent numbers
// separated by a single character are all found.
static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\+?1[\s.-]?)?\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}").unwrap());

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

const NAME_PREFIXES: &[&str] = &["my name is ", "name is ", "i'm ", "i am ", "im ", "it's ", "its ", "this is "];

/// Contact details found in a transcript. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadDetails {
    pub first_name: Option<String>,
    /// Digits only.
    pub phone: Option<String>,
    pub email: Option<String>,
    pub service: Option<String>,
    pub address: Option<String>,
    pub timeline: Option<String>,
}

impl LeadDetails {
    /// A lead is only worth recording with a way to call back.
    pub fn is_contactable(&self) -> bool {
        self.phone.is_some()
    }
}

/// Scans the transcript for lead details. Never fails.
pub fn extract_lead_details(messages: &[ChatMessage]) -> LeadDetails {
    let mut details = LeadDetails {
        service: messages
            .iter()
            .find(|m| m.is_user())
            .map(|m| m.content.trim().to_string())
            .filter(|s| !s.is_empty()),
        ..Default::default()
    };

    for message in messages.iter().filter(|m| m.is_user()) {
        if let Some(phone) = find_phone(&message.content) {
            details.phone = Some(phone);
        }
        if let Some(email) = EMAIL.find(&message.content) {
            details.email = Some(email.as_str().to_string());
        }
    }

    for pair in messages.windows(2) {
        let (question, answer) = (&pair[0], &pair[1]);
        if question.role != ChatRole::Assistant || answer.role != ChatRole::User {
            continue;
        }
        let asked = question.content.to_lowercase();
        let reply = answer.content.trim();
        if reply.is_empty() {
            continue;
        }

        if asked.contains("name") {
            if let Some(name) = first_name(reply) {
                details.first_name = Some(name);
            }
        }
        if asked.contains("address") || asked.contains("zip") || asked.contains("city") {
            details.address = Some(reply.to_string());
        }
        if asked.contains("when") {
            details.timeline = Some(reply.to_string());
        }
    }

    details
}

fn find_phone(text: &str) -> Option<String> {
    PHONE
        .find_iter(text)
        .filter(|m| {
            let before = text[..m.start()].chars().next_back();
            let after = text[m.end()..].chars().next();
            !before.is_some_and(|c| c.is_ascii_digit()) && !after.is_some_and(|c| c.is_ascii_digit())
        })
        .map(|m| m.as_str().chars().filter(char::is_ascii_digit).collect::<String>())
        .filter(|digits| digits.len() == 10 || digits.len() == 11)
        .last()
}

fn first_name(reply: &str) -> Option<String> {
    let lowered = reply.to_lowercase();
    let rest = NAME_PREFIXES
        .iter()
        .find_map(|p| if lowered.starts_with(p) { reply.get(p.len()..) } else { None })
        .unwrap_or(reply);

    let word: String = rest
        .split_whitespace()
        .next()?
        .chars()
        .filter(|c| c.is_alphabetic() || *c == '-' || *c == '\'')
        .collect();
    let mut chars = word.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript() -> Vec<ChatMessage> {
        vec![
            ChatMessage::assistant("Hey! What service do you need?"),
            ChatMessage::user("Carpet cleaning for 3 bedrooms"),
            ChatMessage::assistant("Got it. When do you need this done?"),
            ChatMessage::user("This week if possible"),
            ChatMessage::assistant("Great! What's your first name?"),
            ChatMessage::user("my name is sarah"),
            ChatMessage::assistant("Thanks Sarah! Best phone number to reach you?"),
            ChatMessage::user("(555) 123-4567"),
            ChatMessage::assistant("And your email?"),
            ChatMessage::user("sarah@example.com"),
            ChatMessage::assistant("What's the service address or zip code?"),
            ChatMessage::user("80203"),
        ]
    }

    #[test]
    fn extracts_all_fields() {
        let details = extract_lead_details(&transcript());
        assert_eq!(details.first_name.as_deref(), Some("Sarah"));
        assert_eq!(details.phone.as_deref(), Some("5551234567"));
        assert_eq!(details.email.as_deref(), Some("sarah@example.com"));
        assert_eq!(details.service.as_deref(), Some("Carpet cleaning for 3 bedrooms"));
        assert_eq!(details.timeline.as_deref(), Some("This week if possible"));
        assert_eq!(details.address.as_deref(), Some("80203"));
        assert!(details.is_contactable());
    }

    #[test]
    fn phone_formats() {
        assert_eq!(find_phone("call 555.123.4567 anytime").as_deref(), Some("5551234567"));
        assert_eq!(find_phone("+1 555-123-4567").as_deref(), Some("15551234567"));
        assert_eq!(find_phone("5551234567").as_deref(), Some("5551234567"));
        assert_eq!(find_phone("3 rooms, 1200 sq ft"), None);
        assert_eq!(find_phone("order 1234567890123"), None);
    }

    #[test]
    fn numbers_one_separator_apart_are_both_seen() {
        assert_eq!(find_phone("555-111-2222 555-333-4444").as_deref(), Some("5553334444"));
        assert_eq!(find_phone("5551112222,5553334444").as_deref(), Some("5553334444"));
    }

    #[test]
    fn name_prefixes_are_stripped() {
        assert_eq!(first_name("I'm mike").as_deref(), Some("Mike"));
        assert_eq!(first_name("JOHN smith").as_deref(), Some("John"));
        assert_eq!(first_name("it's Ana-Maria!").as_deref(), Some("Ana-maria"));
        assert_eq!(first_name("!!!"), None);
    }

    #[test]
    fn missing_phone_is_not_contactable() {
        let messages = vec![
            ChatMessage::user("Need my roof looked at"),
            ChatMessage::assistant("What's your name?"),
            ChatMessage::user("Dave"),
        ];
        let details = extract_lead_details(&messages);
        assert_eq!(details.first_name.as_deref(), Some("Dave"));
        assert_eq!(details.service.as_deref(), Some("Need my roof looked at"));
        assert!(!details.is_contactable());
    }

    #[test]
    fn latest_phone_wins() {
        let messages = vec![
            ChatMessage::user("555-000-1111"),
            ChatMessage::assistant("Is that the best number?"),
            ChatMessage::user("Actually use 555-222-3333"),
        ];
        assert_eq!(extract_lead_details(&messages).phone.as_deref(), Some("5552223333"));
    }
}
