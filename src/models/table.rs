//! Disease-keyed lookup tables
//!
//! The symptom, description and precaution inputs all share one shape: a
//! disease name followed by a variable number of values. `DiseaseTable` keeps
//! the diseases in first-appearance order, which the matcher relies on for
//! tie-breaking.

use std::fmt;

use rustc_hash::FxHashMap;

/// Which of the three input tables a `DiseaseTable` holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    /// Disease to symptom names
    Symptoms,
    /// Disease to description sentences
    Descriptions,
    /// Disease to precaution steps
    Precautions,
}

impl TableKind {
    /// Get the display name for this table
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Symptoms => "symptoms",
            Self::Descriptions => "descriptions",
            Self::Precautions => "precautions",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One disease with its values, as stored in a `DiseaseTable`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiseaseEntry {
    /// Trimmed disease name
    pub disease: String,
    /// Values in file order
    pub values: Vec<String>,
}

/// Insertion-ordered mapping from disease name to a list of values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiseaseTable {
    entries: Vec<DiseaseEntry>,
    index: FxHashMap<String, usize>,
}

/// Disease to symptom names
pub type SymptomTable = DiseaseTable;
/// Disease to description lines
pub type DescriptionTable = DiseaseTable;
/// Disease to precaution lines
pub type PrecautionTable = DiseaseTable;

impl DiseaseTable {
    /// Create a new empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append values to a disease, creating the entry on first sight
    pub fn extend_entry<I>(&mut self, disease: &str, values: I)
    where
        I: IntoIterator<Item = String>,
    {
        match self.index.get(disease) {
            Some(&position) => self.entries[position].values.extend(values),
            None => {
                self.index.insert(disease.to_string(), self.entries.len());
                self.entries.push(DiseaseEntry {
                    disease: disease.to_string(),
                    values: values.into_iter().collect(),
                });
            }
        }
    }

    /// Values recorded for a disease
    #[must_use]
    pub fn get(&self, disease: &str) -> Option<&[String]> {
        self.index
            .get(disease)
            .map(|&position| self.entries[position].values.as_slice())
    }

    /// Whether the disease has an entry
    #[must_use]
    pub fn contains(&self, disease: &str) -> bool {
        self.index.contains_key(disease)
    }

    /// Number of distinct diseases
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no diseases
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-appearance order
    pub fn iter(&self) -> impl Iterator<Item = &DiseaseEntry> {
        self.entries.iter()
    }

    /// Disease names in first-appearance order
    pub fn diseases(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.disease.as_str())
    }
}

impl<'a> IntoIterator for &'a DiseaseTable {
    type Item = &'a DiseaseEntry;
    type IntoIter = std::slice::Iter<'a, DiseaseEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<S: Into<String>, V: Into<String>> FromIterator<(S, Vec<V>)> for DiseaseTable {
    fn from_iter<T: IntoIterator<Item = (S, Vec<V>)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (disease, values) in iter {
            let disease = disease.into();
            table.extend_entry(&disease, values.into_iter().map(Into::into));
        }
        table
    }
}
