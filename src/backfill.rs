//! Missing gene-info backfill.
//!
//! Mutation-like records arriving from annotation services often name a
//! gene only by HUGO symbol. This module fills in the authoritative gene
//! record for them, without ever overwriting known data: a record whose
//! `gene.entrez_gene_id` is already present (sentinel values included) is
//! passed through untouched.
//!
//! The backfill is pure: it returns a fresh collection plus a change-log
//! instead of mutating caller-owned records.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use ferro_cohort::backfill::backfill_missing_gene_info;
//! use ferro_cohort::mutation::{Gene, Mutation};
//!
//! let mut genes = HashMap::new();
//! genes.insert("AR".to_string(), Gene::with_entrez_id("AR", 367));
//!
//! let mutations = vec![Mutation {
//!     sample_id: "S1".to_string(),
//!     gene: Some(Gene::new("AR")),
//!     ..Default::default()
//! }];
//!
//! let result = backfill_missing_gene_info(&mutations, &genes);
//! assert_eq!(result.changes.len(), 1);
//! assert_eq!(result.mutations[0].entrez_gene_id, Some(367));
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::mutation::{Gene, Mutation};

/// One record altered by a backfill pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackfillChange {
    /// Index of the altered record in the input slice.
    pub index: usize,

    /// The HUGO symbol the authoritative entry was looked up by.
    pub hugo_gene_symbol: String,

    /// The Entrez id applied to the record.
    pub entrez_gene_id: Option<i64>,
}

/// Outcome of a backfill pass: the new collection and its change-log.
#[derive(Debug, Clone, Default)]
pub struct BackfillResult {
    /// The backfilled records, same order and length as the input.
    pub mutations: Vec<Mutation>,

    /// One entry per record altered, in input order.
    pub changes: Vec<BackfillChange>,
}

impl BackfillResult {
    /// Number of records altered by the pass.
    pub fn changed_count(&self) -> usize {
        self.changes.len()
    }
}

/// Fill in authoritative gene info for records that lack it.
///
/// For each record whose `gene.entrez_gene_id` is absent, the whole `gene`
/// is replaced by the authoritative entry looked up by the existing symbol,
/// and the record's own `entrez_gene_id` is set from it. A present
/// `gene.entrez_gene_id`, even a placeholder such as `-1`, marks the
/// record untouchable. A symbol absent from the table, or a record without
/// a `gene`, is a no-op.
pub fn backfill_missing_gene_info(
    mutations: &[Mutation],
    genes: &HashMap<String, Gene>,
) -> BackfillResult {
    let mut result = BackfillResult {
        mutations: Vec::with_capacity(mutations.len()),
        changes: Vec::new(),
    };

    for (index, mutation) in mutations.iter().enumerate() {
        let mut mutation = mutation.clone();

        let known = match mutation.gene.as_ref() {
            Some(gene) => gene.entrez_gene_id.is_some(),
            None => true, // nothing to look up by
        };
        if !known {
            let symbol = mutation
                .gene
                .as_ref()
                .map(|gene| gene.hugo_gene_symbol.clone())
                .unwrap_or_default();
            if let Some(authoritative) = genes.get(&symbol) {
                mutation.gene = Some(authoritative.clone());
                mutation.entrez_gene_id = authoritative.entrez_gene_id;
                result.changes.push(BackfillChange {
                    index,
                    hugo_gene_symbol: symbol,
                    entrez_gene_id: authoritative.entrez_gene_id,
                });
            }
        }

        result.mutations.push(mutation);
    }

    result
}
