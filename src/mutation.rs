//! Core mutation-record data model.
//!
//! These types mirror the portal API wire shape (camelCase JSON) for one
//! observed alteration in one sample, plus the lookup records used to
//! resolve genes, molecular profiles, and cohort membership.
//!
//! Optional source fields are explicit `Option`s with documented absent
//! semantics: an absent `gene` never matches a gene filter, an absent
//! `protein_change` counts as the empty string, and an absent
//! `mutation_status` classifies as somatic.
//!
//! # Examples
//!
//! ```
//! use ferro_cohort::mutation::{Gene, Mutation};
//!
//! let mutation = Mutation {
//!     sample_id: "P1_sample1".to_string(),
//!     gene: Some(Gene::new("TP53")),
//!     protein_change: Some("R273H".to_string()),
//!     ..Default::default()
//! };
//!
//! assert!(mutation.is_somatic());
//! assert_eq!(mutation.hugo_symbol(), Some("TP53"));
//! ```

use serde::{Deserialize, Serialize};

/// Status string marking an inherited (germline) call.
///
/// Anything else, including an absent status, classifies as somatic.
/// Comparison is case-insensitive; observed data carries mixed casing.
pub const GERMLINE_STATUS: &str = "Germline";

/// Canonical gene info, keyed by HUGO symbol.
///
/// Authoritative copies are externally supplied (see [`crate::tables`]);
/// mutation records may carry a partial `Gene` that only names the symbol.
/// `entrez_gene_id: None` means "unknown, eligible for backfill"; any
/// present value, including sentinel negatives, is known data that the
/// backfill must not overwrite.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Gene {
    /// HUGO gene symbol (e.g., "TP53").
    pub hugo_gene_symbol: String,

    /// Entrez gene id, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entrez_gene_id: Option<i64>,

    /// Gene type (e.g., "protein-coding").
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub gene_type: Option<String>,

    /// Cytoband (e.g., "17p13.1").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cytoband: Option<String>,

    /// Gene length in bases.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<i64>,

    /// Chromosome name (e.g., "17").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chromosome: Option<String>,
}

impl Gene {
    /// Create a gene record naming only the HUGO symbol.
    pub fn new(hugo_gene_symbol: impl Into<String>) -> Self {
        Self {
            hugo_gene_symbol: hugo_gene_symbol.into(),
            ..Default::default()
        }
    }

    /// Create a gene record with a known Entrez id.
    pub fn with_entrez_id(hugo_gene_symbol: impl Into<String>, entrez_gene_id: i64) -> Self {
        Self {
            hugo_gene_symbol: hugo_gene_symbol.into(),
            entrez_gene_id: Some(entrez_gene_id),
            ..Default::default()
        }
    }
}

/// One observed alteration in one sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Mutation {
    /// Sample the alteration was called in.
    pub sample_id: String,

    /// Patient the sample belongs to. When absent, the patient id is
    /// derived from `sample_id` (see [`crate::group::PatientIdPolicy`]).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<String>,

    /// Gene the alteration falls in. Absence never matches a gene filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gene: Option<Gene>,

    /// Record-level Entrez id copy, backfilled alongside `gene`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entrez_gene_id: Option<i64>,

    /// Amino-acid-level effect (e.g., "D66B"). Absence counts as empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein_change: Option<String>,

    /// First affected protein position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein_pos_start: Option<i32>,

    /// Zygosity status; [`GERMLINE_STATUS`] marks a germline call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mutation_status: Option<String>,

    /// Originating assay/profile, resolved to a study via
    /// [`MolecularProfile`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub molecular_profile_id: Option<String>,

    /// Genomic start position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_position: Option<i64>,

    /// Genomic end position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_position: Option<i64>,

    /// Reference allele ("-" for pure insertions).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_allele: Option<String>,

    /// Variant allele ("-" for pure deletions).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_allele: Option<String>,
}

impl Mutation {
    /// Returns true if this record is flagged as a germline call.
    pub fn is_germline(&self) -> bool {
        self.mutation_status
            .as_deref()
            .is_some_and(|status| status.eq_ignore_ascii_case(GERMLINE_STATUS))
    }

    /// Returns true if this record classifies as somatic.
    ///
    /// Absence of a status, or any status other than the germline marker,
    /// is somatic.
    pub fn is_somatic(&self) -> bool {
        !self.is_germline()
    }

    /// The HUGO symbol of the record's gene, if any.
    pub fn hugo_symbol(&self) -> Option<&str> {
        self.gene.as_ref().map(|g| g.hugo_gene_symbol.as_str())
    }

    /// The protein change, with absence read as the empty string.
    pub fn protein_change_or_empty(&self) -> &str {
        self.protein_change.as_deref().unwrap_or("")
    }
}

/// An assay/profile record resolving mutations to their study.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MolecularProfile {
    /// Profile identifier referenced by `Mutation::molecular_profile_id`.
    pub molecular_profile_id: String,

    /// Study the profile belongs to.
    pub study_id: String,
}

impl MolecularProfile {
    /// Create a profile record.
    pub fn new(molecular_profile_id: impl Into<String>, study_id: impl Into<String>) -> Self {
        Self {
            molecular_profile_id: molecular_profile_id.into(),
            study_id: study_id.into(),
        }
    }
}

/// A `(study, sample)` pair identifying one cohort member's assay sample.
///
/// Lists of these form the denominator universe of the rate computations
/// in [`crate::rate`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SampleIdentity {
    /// Study the sample belongs to.
    pub study_id: String,

    /// Sample identifier within the study.
    pub sample_id: String,
}

impl SampleIdentity {
    /// Create a sample identity.
    pub fn new(study_id: impl Into<String>, sample_id: impl Into<String>) -> Self {
        Self {
            study_id: study_id.into(),
            sample_id: sample_id.into(),
        }
    }
}
