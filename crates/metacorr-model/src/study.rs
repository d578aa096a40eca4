//! Study records and the study set snapshot handed to the estimator.

/// A single study contributing a correlation to the meta-analysis.
///
/// `n` is the study sample size and doubles as the weight; `r` is the
/// correlation coefficient. The display name is optional and never affects
/// the statistics.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StudyRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub n: u64,
    pub r: f64,
}

impl StudyRecord {
    pub fn new(n: u64, r: f64) -> Self {
        Self { name: None, n, r }
    }

    pub fn named(name: impl Into<String>, n: u64, r: f64) -> Self {
        Self {
            name: Some(name.into()),
            n,
            r,
        }
    }

    /// Whether the record satisfies the semantic constraints of the model:
    /// a finite correlation in [-1, 1] and a sample size of at least two.
    pub fn is_valid(&self) -> bool {
        self.n >= 2 && self.r.is_finite() && (-1.0..=1.0).contains(&self.r)
    }
}

/// An ordered snapshot of study records.
///
/// Insertion order is irrelevant to the statistics; the set is a purely
/// weighted aggregate. Callers pass the snapshot by reference and the core
/// never mutates it.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct StudySet {
    records: Vec<StudyRecord>,
}

impl StudySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<StudyRecord>) -> Self {
        Self { records }
    }

    pub fn push(&mut self, record: StudyRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[StudyRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StudyRecord> {
        self.records.iter()
    }

    /// Returns a copy with every record violating the semantic constraints
    /// dropped. Cleaning always precedes computation; a set that is empty
    /// after cleaning is rejected by the core operations.
    #[must_use]
    pub fn cleaned(&self) -> Self {
        Self {
            records: self
                .records
                .iter()
                .filter(|record| record.is_valid())
                .cloned()
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a StudySet {
    type Item = &'a StudyRecord;
    type IntoIter = std::slice::Iter<'a, StudyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<StudyRecord> for StudySet {
    fn from_iter<I: IntoIterator<Item = StudyRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
