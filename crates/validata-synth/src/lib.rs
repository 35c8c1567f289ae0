//! Synthetic demo datasets.
//!
//! Generates CSVs with seeded, countable defects (blanks, duplicate rows,
//! non-numeric strings in numeric columns, extreme magnitudes, malformed
//! e-mail addresses) so the validation pipeline has something to find.
//! The same spec always reproduces byte-identical output.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};

/// Demo dataset header, fixed so downstream checks have a numeric pair, an
/// e-mail column, and categorical text to work with.
pub const DEMO_HEADER: [&str; 6] = [
    "record_id",
    "age",
    "score",
    "customer_email",
    "region",
    "notes",
];

const REGIONS: &[&str] = &["north", "south", "east", "west"];
const NOTES: &[&str] = &[
    "ok",
    "follow up",
    "verified",
    "pending review",
    "call back",
];
const DOMAINS: &[&str] = &["example.com", "mail.test", "data.org"];

/// Shape of a generated demo dataset.
#[derive(Debug, Clone, Copy)]
pub struct DemoSpec {
    /// Base row count before duplicated rows are appended.
    pub rows: usize,
    /// RNG seed; equal seeds reproduce equal bytes.
    pub seed: u64,
}

impl Default for DemoSpec {
    fn default() -> Self {
        Self { rows: 50, seed: 42 }
    }
}

impl DemoSpec {
    /// How many cells each defect kind corrupts (and how many rows get
    /// duplicated): one per ten base rows, at least one when any exist.
    pub fn defects_per_kind(&self) -> usize {
        self.rows.div_ceil(10)
    }
}

/// Generate CSV bytes for a demo dataset.
pub fn generate_demo_csv(spec: &DemoSpec) -> csv::Result<Vec<u8>> {
    let mut rng = StdRng::seed_from_u64(spec.seed);
    let mut rows: Vec<Vec<String>> = (0..spec.rows)
        .map(|index| clean_row(index, &mut rng))
        .collect();

    let defects = spec.defects_per_kind();
    if defects > 0 {
        // Distinct positions per defect kind; kinds may overlap rows but
        // never touch the same cell.
        for index in sample(&mut rng, spec.rows, defects) {
            rows[index][5] = String::new();
        }
        for index in sample(&mut rng, spec.rows, defects) {
            rows[index][1] = "unknown".to_string();
        }
        for index in sample(&mut rng, spec.rows, defects) {
            rows[index][3] = "not-an-email".to_string();
        }
        let extreme = rng.gen_range(0..spec.rows);
        rows[extreme][2] = "250000".to_string();
        // Exact copies of existing rows, appended after the originals.
        for index in sample(&mut rng, spec.rows, defects) {
            let copy = rows[index].clone();
            rows.push(copy);
        }
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(DEMO_HEADER)?;
    for row in &rows {
        writer.write_record(row)?;
    }
    writer
        .into_inner()
        .map_err(|error| csv::Error::from(error.into_error()))
}

fn clean_row(index: usize, rng: &mut StdRng) -> Vec<String> {
    let age: u32 = rng.gen_range(18..=90);
    let score: f64 = rng.gen_range(0.0..100.0);
    let domain = DOMAINS.choose(rng).unwrap_or(&DOMAINS[0]);
    vec![
        (index + 1).to_string(),
        age.to_string(),
        format!("{score:.1}"),
        format!("user{}@{domain}", index + 1),
        (*REGIONS.choose(rng).unwrap_or(&REGIONS[0])).to_string(),
        (*NOTES.choose(rng).unwrap_or(&NOTES[0])).to_string(),
    ]
}
