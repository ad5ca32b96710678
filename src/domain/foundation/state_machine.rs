//! State machine trait for status enums.
//!
//! Conversations, leads, QR codes and companies all carry a status column.
//! Each status enum declares its allowed moves here so handlers never write
//! an arbitrary string back to the database.

use super::ValidationError;

/// Trait for status enums that represent state machines.
///
/// ```ignore
/// let next = LeadStatus::New.transition_to(LeadStatus::Contacted)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "status",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
