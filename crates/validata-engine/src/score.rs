use crate::EngineError;

/// Reduce total defect count to a bounded 0–100 quality score.
///
/// Cells can be flagged by more than one check, so `total_issues` may
/// exceed `total_cells`; the score clamps at zero in that case. An empty
/// table has no defined score and is an error, never a silent 0 or 100.
pub fn quality_score(total_issues: u64, total_cells: u64) -> Result<u8, EngineError> {
    if total_cells == 0 {
        return Err(EngineError::EmptyTable);
    }
    let ratio = total_issues as f64 / total_cells as f64;
    let score = (100.0 - ratio * 100.0).round().clamp(0.0, 100.0);
    Ok(score as u8)
}
