use serde::{Deserialize, Serialize};
use std::fmt;

/// Name reported for an id that is not part of the roster.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Identifies a participant within a single settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(pub u32);

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A group member and what they paid, in minor units.
///
/// `paid` may be zero or negative; the settlement engine accepts any value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub paid: i64,
}

impl Participant {
    /// Creates a participant with the default display name (`Person {id + 1}`).
    pub fn new(id: u32, paid: i64) -> Self {
        let id = ParticipantId(id);
        Self {
            id,
            name: default_name(id),
            paid,
        }
    }

    /// Replaces the display name. Blank names keep the current one.
    pub fn with_name(mut self, name: impl AsRef<str>) -> Self {
        let name = name.as_ref().trim();
        if !name.is_empty() {
            self.name = name.to_string();
        }
        self
    }
}

fn default_name(id: ParticipantId) -> String {
    format!("Person {}", u64::from(id.0) + 1)
}

/// The ordered group being settled.
///
/// Input order is significant: it decides who absorbs the rounding remainder
/// when the total does not split evenly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates `size` participants who paid nothing. A size of zero is
    /// raised to one.
    pub fn with_size(size: u32) -> Self {
        let participants = (0..size.max(1)).map(|id| Participant::new(id, 0)).collect();
        Self { participants }
    }

    /// Builds a roster from `(name, paid)` pairs, numbering ids from zero in
    /// iteration order.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Option<S>, i64)>,
        S: AsRef<str>,
    {
        let mut roster = Self::new();
        for (id, (name, paid)) in (0u32..).zip(entries) {
            let participant = match name {
                Some(name) => Participant::new(id, paid).with_name(name),
                None => Participant::new(id, paid),
            };
            roster.participants.push(participant);
        }
        roster
    }

    /// Appends a participant. Returns `false` and leaves the roster unchanged
    /// if the id is already taken.
    pub fn push(&mut self, participant: Participant) -> bool {
        if self.get(participant.id).is_some() {
            return false;
        }
        self.participants.push(participant);
        true
    }

    pub fn get(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    /// Renames a participant; unknown ids are ignored.
    pub fn rename(&mut self, id: ParticipantId, name: &str) {
        if let Some(participant) = self.participants.iter_mut().find(|p| p.id == id) {
            let name = name.trim();
            if !name.is_empty() {
                participant.name = name.to_string();
            }
        }
    }

    /// Sets the amount a participant paid; unknown ids are ignored.
    pub fn set_paid(&mut self, id: ParticipantId, paid: i64) {
        if let Some(participant) = self.participants.iter_mut().find(|p| p.id == id) {
            participant.paid = paid;
        }
    }

    /// Resolves a display name, falling back to [`UNKNOWN_NAME`].
    pub fn name_of(&self, id: ParticipantId) -> &str {
        self.get(id).map_or(UNKNOWN_NAME, |p| p.name.as_str())
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Sum of everything paid. Never overflows for any number of `i64` inputs
    /// a roster can hold in memory.
    pub fn total_paid(&self) -> i128 {
        self.participants.iter().map(|p| i128::from(p.paid)).sum()
    }
}
