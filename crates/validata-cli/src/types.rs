use validata_model::{DatasetMeta, StoredValidation};

/// A stored validation record joined with its dataset metadata, as
/// produced by validate/revalidate and the history queries.
#[derive(Debug)]
pub struct ValidationOutcome {
    pub meta: DatasetMeta,
    pub stored: StoredValidation,
}
