use super::settlement::SettlementEngine;
use crate::domain::participant::{ParticipantId, Roster};
use serde::Serialize;

/// One participant as shown in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParticipantLine {
    pub id: ParticipantId,
    pub name: String,
    pub paid: i64,
    pub share: i128,
    pub balance: i128,
}

/// One payment with both ends resolved to display names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentLine {
    pub from: String,
    pub to: String,
    pub amount: u64,
}

/// A settlement resolved back to names, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettlementReport {
    /// Total spent by the group, in minor units.
    pub total: i128,
    /// `total / participants`, truncated. Zero for an empty roster.
    pub average: i128,
    pub participants: Vec<ParticipantLine>,
    pub payments: Vec<PaymentLine>,
}

impl SettlementReport {
    /// Settles the roster and resolves every id to its display name.
    pub fn build(roster: &Roster) -> Self {
        let engine = SettlementEngine::new();
        let participants = roster.participants();

        let total = roster.total_paid();
        let average = match participants.len() {
            0 => 0,
            count => total / count as i128,
        };

        let lines = participants
            .iter()
            .zip(engine.fair_shares(participants))
            .map(|(participant, share)| ParticipantLine {
                id: participant.id,
                name: participant.name.clone(),
                paid: participant.paid,
                share,
                balance: i128::from(participant.paid) - share,
            })
            .collect();

        let payments = engine
            .settle(participants)
            .into_iter()
            .map(|payment| PaymentLine {
                from: roster.name_of(payment.from).to_string(),
                to: roster.name_of(payment.to).to_string(),
                amount: payment.amount,
            })
            .collect();

        Self {
            total,
            average,
            participants: lines,
            payments,
        }
    }

    /// True when nobody has to pay anybody.
    pub fn is_balanced(&self) -> bool {
        self.payments.is_empty()
    }
}
