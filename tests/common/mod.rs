use rand::Rng;
use rand::rngs::StdRng;
use splitsettle::domain::participant::Participant;
use std::fs::File;
use std::io::Error;
use std::path::Path;

/// Writes a `name,paid` CSV where only the first participant paid anything.
#[allow(dead_code)]
pub fn generate_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["name", "paid"])?;

    for i in 1..=rows {
        let paid = if i == 1 { "100.00" } else { "0" };
        wtr.write_record([format!("member-{i}").as_str(), paid])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Random group with amounts in `-range..=range`, ids numbered from zero.
#[allow(dead_code)]
pub fn random_group(rng: &mut StdRng, size: usize, range: i64) -> Vec<Participant> {
    (0u32..)
        .take(size)
        .map(|id| Participant::new(id, rng.gen_range(-range..=range)))
        .collect()
}
