use crate::models::ReportSet;

/// Concatenate report sets in order. Records with the same samples and label
/// are distinct runs and are all kept. `None` only when no set is given.
pub fn merge<I>(sets: I) -> Option<ReportSet>
where
    I: IntoIterator<Item = ReportSet>,
{
    let mut sets = sets.into_iter();
    let mut merged = sets.next()?;
    for set in sets {
        merged.records_mut().extend(set.into_records());
    }
    Some(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReportRecord;

    fn record(samples: u64, label: &str, source: &str) -> ReportRecord {
        ReportRecord {
            samples,
            label: label.to_string(),
            throughput: 1.0,
            average: 1.0,
            median: 1.0,
            p90: 1.0,
            p95: 1.0,
            p99: 1.0,
            received_kbps: 1.0,
            sent_kbps: 1.0,
            source_file: source.to_string(),
        }
    }

    #[test]
    fn test_merge_sizes_add_up() {
        let a = ReportSet::new(vec![record(1, "TOTAL", "a"), record(1, "GET", "a")]).unwrap();
        let b = ReportSet::new(vec![record(2, "TOTAL", "b")]).unwrap();
        let merged = merge([a, b]).unwrap();
        assert_eq!(merged.len(), 3);
        let sources: Vec<&str> = merged.iter().map(|r| r.source_file.as_str()).collect();
        assert_eq!(sources, vec!["a", "a", "b"]);
    }

    #[test]
    fn test_merge_keeps_duplicates() {
        let a = ReportSet::new(vec![record(10, "TOTAL", "a")]).unwrap();
        let b = ReportSet::new(vec![record(10, "TOTAL", "b")]).unwrap();
        let merged = merge([a, b]).unwrap();
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_merge_nothing_is_none() {
        assert!(merge(Vec::<ReportSet>::new()).is_none());
    }
}
