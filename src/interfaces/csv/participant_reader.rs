use crate::domain::money;
use crate::domain::participant::Participant;
use crate::error::{Result, SettleError};
use serde::Deserialize;
use std::io::Read;
use tracing::warn;

#[derive(Debug, Deserialize)]
struct ParticipantRecord {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    paid: Option<String>,
}

impl ParticipantRecord {
    fn into_participant(self, position: usize) -> Result<Participant> {
        let id = u32::try_from(position).map_err(|_| {
            SettleError::InvalidInput(format!("too many participants (record {})", position + 1))
        })?;

        let paid = match self.paid.as_deref().map(str::trim) {
            None | Some("") => 0,
            Some(text) => money::try_parse_amount(text).unwrap_or_else(|| {
                warn!(record = position + 1, amount = text, "Unparsable amount, using 0");
                0
            }),
        };

        let participant = Participant::new(id, paid);
        Ok(match self.name {
            Some(name) => participant.with_name(name),
            None => participant,
        })
    }
}

/// Reads participants from a CSV source with a `name,paid` header.
///
/// Amounts are user-entered decimal text and are parsed leniently: blank or
/// unparsable amounts become zero. Each participant's id is the position of
/// its record, so a record that fails to read leaves a gap instead of
/// shifting the ids of the records after it.
pub struct ParticipantReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ParticipantReader<R> {
    /// Creates a new `ParticipantReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads participants in input order.
    pub fn participants(self) -> impl Iterator<Item = Result<Participant>> {
        self.reader
            .into_deserialize::<ParticipantRecord>()
            .enumerate()
            .map(|(position, result)| {
                result
                    .map_err(SettleError::from)
                    .and_then(|record| record.into_participant(position))
            })
    }
}
