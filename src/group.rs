//! Grouping of mutation records by gene, patient, and protein change.
//!
//! Two records describe the same physical mutation event when they share a
//! gene symbol, a patient, and a protein-change string; repeated calls from
//! multiple samples of one patient collapse into a single group. The group
//! key grammar is `"{hugo_gene_symbol}_{patient_id}_{protein_change}"`.
//!
//! # Examples
//!
//! ```
//! use ferro_cohort::group::group_by_gene_patient_protein_change;
//! use ferro_cohort::mutation::{Gene, Mutation};
//!
//! let mutations = vec![
//!     Mutation {
//!         sample_id: "P1_sample1".to_string(),
//!         gene: Some(Gene::new("TP53")),
//!         protein_change: Some("D66B".to_string()),
//!         ..Default::default()
//!     },
//!     Mutation {
//!         sample_id: "P1_sample2".to_string(),
//!         gene: Some(Gene::new("TP53")),
//!         protein_change: Some("D66B".to_string()),
//!         ..Default::default()
//!     },
//! ];
//!
//! let groups = group_by_gene_patient_protein_change(&mutations);
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups.get("TP53_P1_D66B").unwrap().len(), 2);
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use crate::error::CohortError;
use crate::mutation::Mutation;

/// Default sample-suffix pattern: a trailing `_sample`, `_sample1`,
/// `_sample12`, ... segment of the sample id.
static DEFAULT_SAMPLE_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"_sample\d*$").expect("default suffix pattern is valid"));

/// Policy for resolving a record's patient id.
///
/// An explicit `patient_id` field always wins. Otherwise the patient id is
/// the sample id with a trailing sample suffix stripped; the suffix
/// convention is configuration, not a hard-coded assumption. A sample id
/// that does not match the pattern is used as-is.
#[derive(Debug, Clone)]
pub struct PatientIdPolicy {
    suffix: Regex,
}

impl Default for PatientIdPolicy {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SAMPLE_SUFFIX.clone(),
        }
    }
}

impl PatientIdPolicy {
    /// Create a policy with a custom suffix pattern.
    ///
    /// The pattern should anchor at the end of the sample id (e.g.,
    /// `r"-S\d+$"`); the matched portion is stripped.
    pub fn with_suffix_pattern(pattern: &str) -> Result<Self, CohortError> {
        Ok(Self {
            suffix: Regex::new(pattern)?,
        })
    }

    /// Resolve the patient id for a record.
    pub fn patient_id<'a>(&self, mutation: &'a Mutation) -> &'a str {
        if let Some(patient_id) = mutation.patient_id.as_deref() {
            return patient_id;
        }
        match self.suffix.find(&mutation.sample_id) {
            Some(found) => &mutation.sample_id[..found.start()],
            None => &mutation.sample_id,
        }
    }
}

/// Build the group key for one record.
///
/// Missing `gene` or `protein_change` contribute an empty component. A `_`
/// occurring inside a gene symbol, patient id, or protein change is an
/// unguarded ambiguity inherited from the source key grammar; components
/// are not escaped.
pub fn group_key(mutation: &Mutation, policy: &PatientIdPolicy) -> String {
    format!(
        "{}_{}_{}",
        mutation.hugo_symbol().unwrap_or(""),
        policy.patient_id(mutation),
        mutation.protein_change_or_empty()
    )
}

/// Insertion-ordered grouping of mutations by group key.
///
/// Both the first-seen order of keys and the order of records within a key
/// are preserved.
#[derive(Debug, Clone, Default)]
pub struct MutationGroups {
    keys: Vec<String>,
    groups: HashMap<String, Vec<Mutation>>,
}

impl MutationGroups {
    /// Number of distinct groups.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if there are no groups.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The records sharing the given key, in first-seen order.
    pub fn get(&self, key: &str) -> Option<&[Mutation]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    /// Group keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Iterate `(key, records)` pairs in first-seen key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Mutation])> {
        self.keys.iter().map(move |key| {
            (
                key.as_str(),
                self.groups
                    .get(key)
                    .map(Vec::as_slice)
                    .unwrap_or_default(),
            )
        })
    }

    fn insert(&mut self, key: String, mutation: Mutation) {
        match self.groups.get_mut(&key) {
            Some(group) => group.push(mutation),
            None => {
                self.keys.push(key.clone());
                self.groups.insert(key, vec![mutation]);
            }
        }
    }
}

/// Group mutations by gene, patient, and protein change using the default
/// patient-id policy.
///
/// Empty input yields an empty mapping; there are no error conditions.
pub fn group_by_gene_patient_protein_change(mutations: &[Mutation]) -> MutationGroups {
    group_with_policy(mutations, &PatientIdPolicy::default())
}

/// Group mutations using an explicit patient-id policy.
pub fn group_with_policy(mutations: &[Mutation], policy: &PatientIdPolicy) -> MutationGroups {
    let mut groups = MutationGroups::default();
    for mutation in mutations {
        groups.insert(group_key(mutation, policy), mutation.clone());
    }
    groups
}
