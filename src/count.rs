//! Uniqueness, duplicate, and protein-change frequency counting.
//!
//! Unique/duplicate counts collapse same-patient re-calls of an identical
//! alteration using the group keys of [`crate::group`]; the protein-change
//! frequency table counts every record, with no deduplication.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::group::{group_key, MutationGroups, PatientIdPolicy};
use crate::mutation::Mutation;

/// Occurrence count for one distinct protein-change value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProteinChangeCount {
    /// The protein-change notation (e.g., "D66B").
    pub protein_change: String,

    /// Number of records carrying it.
    pub count: usize,
}

/// Count physically-distinct mutation events.
///
/// This is the number of distinct group keys, i.e. the group count of
/// [`crate::group::group_by_gene_patient_protein_change`] for the same
/// input: same-patient duplicate calls collapse to one event.
pub fn count_unique_mutations(mutations: &[Mutation]) -> usize {
    let policy = PatientIdPolicy::default();
    let mut keys: HashSet<String> = HashSet::with_capacity(mutations.len());
    for mutation in mutations {
        keys.insert(group_key(mutation, &policy));
    }
    keys.len()
}

/// Count redundant re-calls beyond one record per group.
///
/// Each group of size `n > 1` contributes `n - 1`; an empty mapping yields
/// zero. This measures the identical alteration called independently in
/// multiple samples of the same patient.
pub fn count_duplicate_mutations(groups: &MutationGroups) -> usize {
    groups
        .iter()
        .map(|(_, records)| records.len().saturating_sub(1))
        .sum()
}

/// Count occurrences of each non-empty protein-change value.
///
/// Every record counts; nothing is deduplicated. The result is sorted by
/// descending count, ties keeping the first-encountered order of the
/// protein-change value. Empty input yields an empty vec.
pub fn count_mutations_by_protein_change(mutations: &[Mutation]) -> Vec<ProteinChangeCount> {
    let mut counts: Vec<ProteinChangeCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for mutation in mutations {
        let protein_change = mutation.protein_change_or_empty();
        if protein_change.is_empty() {
            continue;
        }
        match index.get(protein_change) {
            Some(&at) => counts[at].count += 1,
            None => {
                index.insert(protein_change, counts.len());
                counts.push(ProteinChangeCount {
                    protein_change: protein_change.to_string(),
                    count: 1,
                });
            }
        }
    }

    // Stable sort keeps first-encountered order among equal counts.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}
