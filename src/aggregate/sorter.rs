use crate::models::ReportSet;

/// Order records by ascending samples. The sort is stable, so records with
/// equal samples keep their load order.
pub fn sort_by_samples(mut set: ReportSet) -> ReportSet {
    set.records_mut().sort_by_key(|r| r.samples);
    set
}
