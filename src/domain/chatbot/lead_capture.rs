//! Detection of the lead-captured marker in model replies.

/// Text the model appends once it has a name, phone number and service.
pub const LEAD_CAPTURED_MARKER: &str = "[LEAD_CAPTURED]";

/// A model reply with the marker stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadCaptureOutcome {
    pub message: String,
    pub lead_captured: bool,
}

/// Removes the first marker occurrence and trims the remainder.
///
/// Replies without the marker are returned untouched.
pub fn detect_lead_capture(reply: &str) -> LeadCaptureOutcome {
    if reply.contains(LEAD_CAPTURED_MARKER) {
        LeadCaptureOutcome {
            message: reply.replacen(LEAD_CAPTURED_MARKER, "", 1).trim().to_string(),
            lead_captured: true,
        }
    } else {
        LeadCaptureOutcome {
            message: reply.to_string(),
            lead_captured: false,
        }
    }
}
