use super::participant::ParticipantId;
use serde::{Deserialize, Serialize};

/// A transfer of `amount` minor units from `from` to `to`.
///
/// Payments produced by the settlement engine always have `amount > 0` and
/// `from != to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub from: ParticipantId,
    pub to: ParticipantId,
    pub amount: u64,
}

impl Payment {
    pub fn new(from: ParticipantId, to: ParticipantId, amount: u64) -> Self {
        Self { from, to, amount }
    }
}
