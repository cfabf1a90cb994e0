use serde::Serialize;
use super::record::ReportRecord;

/// Ordered, non-empty collection of records from one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ReportSet {
    records: Vec<ReportRecord>,
}

impl ReportSet {
    /// Returns `None` for an empty record list: there is no empty report set.
    pub fn new(records: Vec<ReportRecord>) -> Option<Self> {
        if records.is_empty() {
            None
        } else {
            Some(Self { records })
        }
    }

    pub fn records(&self) -> &[ReportRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReportRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<ReportRecord> {
        self.records
    }

    pub(crate) fn records_mut(&mut self) -> &mut Vec<ReportRecord> {
        &mut self.records
    }
}

impl<'a> IntoIterator for &'a ReportSet {
    type Item = &'a ReportRecord;
    type IntoIter = std::slice::Iter<'a, ReportRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Read-only subset of a report set sharing one label, in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateView<'a> {
    pub label: String,
    pub records: Vec<&'a ReportRecord>,
}

impl<'a> AggregateView<'a> {
    pub fn iter(&self) -> impl Iterator<Item = &'a ReportRecord> + '_ {
        self.records.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
