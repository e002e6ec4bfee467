//! Genomic-location extraction and deduplication.
//!
//! The same physical variant observed redundantly across samples or
//! profiles collapses to one genomic coordinate, the shape consumed by
//! downstream lollipop/positional visualizations.
//!
//! # Examples
//!
//! ```
//! use ferro_cohort::genomic::GenomicLocation;
//!
//! let location = GenomicLocation::new("17", 7577120, 7577120, "C", "T");
//! assert_eq!(location.to_string(), "17:7577120:7577120:C:T");
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::mutation::Mutation;

/// A genomic coordinate key: chromosome, span, and allele pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenomicLocation {
    /// Chromosome name, normalized without a leading `chr` prefix.
    pub chromosome: String,

    /// Start position.
    pub start: i64,

    /// End position.
    pub end: i64,

    /// Reference allele ("-" for pure insertions).
    pub reference_allele: String,

    /// Variant allele ("-" for pure deletions).
    pub variant_allele: String,
}

impl GenomicLocation {
    /// Create a genomic location. The chromosome is normalized.
    pub fn new(
        chromosome: impl Into<String>,
        start: i64,
        end: i64,
        reference_allele: impl Into<String>,
        variant_allele: impl Into<String>,
    ) -> Self {
        Self {
            chromosome: normalize_chromosome(&chromosome.into()),
            start,
            end,
            reference_allele: reference_allele.into(),
            variant_allele: variant_allele.into(),
        }
    }

    /// Extract the genomic location of a mutation record.
    ///
    /// Requires the record's gene chromosome, both positions, and both
    /// alleles; returns `None` when any of them is absent.
    pub fn from_mutation(mutation: &Mutation) -> Option<Self> {
        let chromosome = mutation.gene.as_ref()?.chromosome.as_deref()?;
        Some(Self::new(
            chromosome,
            mutation.start_position?,
            mutation.end_position?,
            mutation.reference_allele.as_deref()?,
            mutation.variant_allele.as_deref()?,
        ))
    }
}

impl fmt::Display for GenomicLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}:{}",
            self.chromosome, self.start, self.end, self.reference_allele, self.variant_allele
        )
    }
}

/// Strip a leading `chr` prefix (case-insensitive) and surrounding
/// whitespace from a chromosome name.
pub fn normalize_chromosome(raw: &str) -> String {
    let trimmed = raw.trim();
    let stripped = trimmed
        .get(..3)
        .filter(|prefix| prefix.eq_ignore_ascii_case("chr"))
        .map(|_| &trimmed[3..])
        .unwrap_or(trimmed);
    stripped.to_string()
}

/// Collapse records sharing a genomic location to one representative.
///
/// Returns the first-seen record per distinct location, preserving input
/// order. Records from which no location can be extracted carry no key and
/// are omitted.
pub fn unique_genomic_locations(mutations: &[Mutation]) -> Vec<Mutation> {
    let mut seen: HashSet<GenomicLocation> = HashSet::new();
    let mut representatives = Vec::new();
    for mutation in mutations {
        let Some(location) = GenomicLocation::from_mutation(mutation) else {
            continue;
        };
        if seen.insert(location) {
            representatives.push(mutation.clone());
        }
    }
    representatives
}

/// The deduplicated location keys themselves, first-seen order.
pub fn unique_locations(mutations: &[Mutation]) -> Vec<GenomicLocation> {
    let mut seen: HashSet<GenomicLocation> = HashSet::new();
    let mut locations = Vec::new();
    for mutation in mutations {
        let Some(location) = GenomicLocation::from_mutation(mutation) else {
            continue;
        };
        if seen.insert(location.clone()) {
            locations.push(location);
        }
    }
    locations
}
