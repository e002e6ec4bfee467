// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! ferro-cohort: mutation aggregation and cohort rate statistics
//!
//! Part of the ferro bioinformatics toolkit.
//!
//! Pure data transforms over per-sample mutation records and a patient
//! cohort definition: grouping/deduplication keys, unique and duplicate
//! counts, protein-change frequency tables, somatic/germline alteration
//! rates, genomic-location deduplication, and gene-metadata backfill.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use ferro_cohort::{somatic_mutation_rate, Gene, MolecularProfile, Mutation, SampleIdentity};
//!
//! let mutations = vec![Mutation {
//!     sample_id: "PATIENT1".to_string(),
//!     gene: Some(Gene::new("TP53")),
//!     molecular_profile_id: Some("GP1".to_string()),
//!     ..Default::default()
//! }];
//!
//! let mut profiles = HashMap::new();
//! profiles.insert("GP1".to_string(), MolecularProfile::new("GP1", "STUDY1"));
//!
//! let cohort = vec![
//!     SampleIdentity::new("STUDY1", "PATIENT1"),
//!     SampleIdentity::new("STUDY1", "PATIENT2"),
//! ];
//!
//! // One of two cohort samples carries a somatic TP53 mutation.
//! let rate = somatic_mutation_rate("TP53", &mutations, &profiles, &cohort);
//! assert_eq!(rate, 50.0);
//! ```

pub mod backfill;
pub mod count;
pub mod error;
pub mod genomic;
pub mod group;
pub mod mutation;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod rate;
pub mod tables;

// Re-export commonly used types and operations
pub use backfill::{backfill_missing_gene_info, BackfillChange, BackfillResult};
pub use count::{
    count_duplicate_mutations, count_mutations_by_protein_change, count_unique_mutations,
    ProteinChangeCount,
};
pub use error::CohortError;
pub use genomic::{unique_genomic_locations, unique_locations, GenomicLocation};
pub use group::{
    group_by_gene_patient_protein_change, group_key, group_with_policy, MutationGroups,
    PatientIdPolicy,
};
pub use mutation::{Gene, MolecularProfile, Mutation, SampleIdentity, GERMLINE_STATUS};
pub use rate::{germline_mutation_rate, mutation_rate, somatic_mutation_rate, VariantClass};

/// Result type alias for ferro-cohort operations
pub type Result<T> = std::result::Result<T, CohortError>;
