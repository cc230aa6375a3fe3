use crate::domain::participant::{Participant, ParticipantId};
use crate::domain::payment::Payment;
use serde::Serialize;

/// What a participant paid minus their fair share, in minor units.
///
/// Positive balances are owed money (creditors), negative balances owe money
/// (debtors). Kept as `i128` so that no combination of `i64` inputs overflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Balance {
    pub id: ParticipantId,
    pub amount: i128,
}

impl Balance {
    pub fn is_creditor(&self) -> bool {
        self.amount > 0
    }

    pub fn is_debtor(&self) -> bool {
        self.amount < 0
    }
}

/// Computes the payments that settle a group's shared expenses.
///
/// The engine is stateless: every call works on its own copies of the input
/// and the result depends only on the participants and their order.
#[derive(Debug, Default, Clone, Copy)]
pub struct SettlementEngine;

impl SettlementEngine {
    pub fn new() -> Self {
        Self
    }

    /// Splits the total paid into one fair share per participant, in input
    /// order.
    ///
    /// The total is divided with truncating division. The first `|remainder|`
    /// participants absorb one extra minor unit each, signed like the
    /// remainder, so the shares always add up to the total.
    pub fn fair_shares(&self, participants: &[Participant]) -> Vec<i128> {
        if participants.is_empty() {
            return Vec::new();
        }

        let count = participants.len() as i128;
        let total: i128 = participants.iter().map(|p| i128::from(p.paid)).sum();
        let base_quota = total / count;
        let remainder = total % count;
        // |remainder| < count, so it fits in usize.
        let adjusted = remainder.unsigned_abs() as usize;
        let step = remainder.signum();

        (0..participants.len())
            .map(|idx| {
                if idx < adjusted {
                    base_quota + step
                } else {
                    base_quota
                }
            })
            .collect()
    }

    /// Signed balance of every participant, in input order.
    pub fn balances(&self, participants: &[Participant]) -> Vec<Balance> {
        participants
            .iter()
            .zip(self.fair_shares(participants))
            .map(|(participant, share)| Balance {
                id: participant.id,
                amount: i128::from(participant.paid) - share,
            })
            .collect()
    }

    /// Returns the payments that bring every balance to zero.
    ///
    /// Creditors are matched largest first against debtors most-indebted
    /// first; each step discharges at least one of the two, so the result has
    /// at most `non-zero balances - 1` payments. Participants whose balance is
    /// already zero never appear in a payment.
    pub fn settle(&self, participants: &[Participant]) -> Vec<Payment> {
        let balances = self.balances(participants);

        let mut creditors: Vec<Balance> =
            balances.iter().copied().filter(Balance::is_creditor).collect();
        let mut debtors: Vec<Balance> =
            balances.iter().copied().filter(Balance::is_debtor).collect();

        // Stable sorts: equal balances keep input order.
        creditors.sort_by(|a, b| b.amount.cmp(&a.amount));
        debtors.sort_by_key(|balance| balance.amount);

        let mut payments =
            Vec::with_capacity((creditors.len() + debtors.len()).saturating_sub(1));
        let (mut ci, mut di) = (0, 0);

        while ci < creditors.len() && di < debtors.len() {
            let credit = &mut creditors[ci];
            let debt = &mut debtors[di];

            let transfer = credit.amount.min(-debt.amount);
            if transfer > 0 {
                // A single balance is at most i64::MAX - i64::MIN, which fits in u64.
                if let Ok(amount) = u64::try_from(transfer) {
                    payments.push(Payment::new(debt.id, credit.id, amount));
                }
                credit.amount -= transfer;
                debt.amount += transfer;
            }

            if credit.amount == 0 {
                ci += 1;
            }
            if debt.amount == 0 {
                di += 1;
            }
        }

        payments
    }
}

/// Shorthand for [`SettlementEngine::settle`].
pub fn settle(participants: &[Participant]) -> Vec<Payment> {
    SettlementEngine.settle(participants)
}
