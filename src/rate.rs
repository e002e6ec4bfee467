//! Cohort alteration-rate computation.
//!
//! Given a target gene, a candidate mutation set, a profile-to-study
//! resolution map, and a cohort of [`SampleIdentity`] denominators, these
//! functions compute the percentage of cohort samples carrying a matching
//! alteration. Somatic and germline rates are symmetric entry points over a
//! shared core; a hard status filter prevents cross-contamination between
//! the two classes.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use ferro_cohort::mutation::{Gene, MolecularProfile, Mutation, SampleIdentity};
//! use ferro_cohort::rate::somatic_mutation_rate;
//!
//! let mutations = vec![Mutation {
//!     sample_id: "PATIENT1".to_string(),
//!     gene: Some(Gene::new("TP53")),
//!     molecular_profile_id: Some("GP1".to_string()),
//!     ..Default::default()
//! }];
//! let mut profiles = HashMap::new();
//! profiles.insert("GP1".to_string(), MolecularProfile::new("GP1", "STUDY1"));
//! let cohort = vec![
//!     SampleIdentity::new("STUDY1", "PATIENT1"),
//!     SampleIdentity::new("STUDY1", "PATIENT2"),
//! ];
//!
//! let rate = somatic_mutation_rate("TP53", &mutations, &profiles, &cohort);
//! assert_eq!(rate, 50.0);
//! ```

use std::collections::{HashMap, HashSet};

use crate::mutation::{MolecularProfile, Mutation, SampleIdentity};

/// Zygosity class selecting which records a rate computation keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantClass {
    /// Acquired alterations: everything not flagged germline.
    Somatic,
    /// Inherited alterations flagged with the germline status marker.
    Germline,
}

impl VariantClass {
    /// Returns true if the record belongs to this class.
    pub fn matches(&self, mutation: &Mutation) -> bool {
        match self {
            VariantClass::Somatic => mutation.is_somatic(),
            VariantClass::Germline => mutation.is_germline(),
        }
    }
}

/// Percentage of cohort samples carrying a somatic mutation in the gene.
pub fn somatic_mutation_rate(
    hugo_gene_symbol: &str,
    mutations: &[Mutation],
    molecular_profiles: &HashMap<String, MolecularProfile>,
    samples: &[SampleIdentity],
) -> f64 {
    mutation_rate(
        VariantClass::Somatic,
        hugo_gene_symbol,
        mutations,
        molecular_profiles,
        samples,
    )
}

/// Percentage of cohort samples carrying a germline mutation in the gene.
pub fn germline_mutation_rate(
    hugo_gene_symbol: &str,
    mutations: &[Mutation],
    molecular_profiles: &HashMap<String, MolecularProfile>,
    samples: &[SampleIdentity],
) -> f64 {
    mutation_rate(
        VariantClass::Germline,
        hugo_gene_symbol,
        mutations,
        molecular_profiles,
        samples,
    )
}

/// Shared rate core, parameterized by variant class.
///
/// 1. Keep mutations in the target gene whose status matches the class.
/// 2. Resolve each survivor's study via its molecular profile; records
///    with an unresolvable profile are discarded.
/// 3. A cohort member counts if some survivor shares its sample id and
///    resolved study id; members deduplicate by sample id.
/// 4. Rate is `100 * matching / samples.len()`; an empty cohort yields 0.
pub fn mutation_rate(
    class: VariantClass,
    hugo_gene_symbol: &str,
    mutations: &[Mutation],
    molecular_profiles: &HashMap<String, MolecularProfile>,
    samples: &[SampleIdentity],
) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }

    // (sample id, resolved study id) pairs of the surviving records.
    let mut carriers: HashSet<(&str, &str)> = HashSet::new();
    for mutation in mutations {
        if mutation.hugo_symbol() != Some(hugo_gene_symbol) || !class.matches(mutation) {
            continue;
        }
        let Some(profile_id) = mutation.molecular_profile_id.as_deref() else {
            continue;
        };
        let Some(profile) = molecular_profiles.get(profile_id) else {
            continue;
        };
        carriers.insert((mutation.sample_id.as_str(), profile.study_id.as_str()));
    }

    let mut matching: HashSet<&str> = HashSet::new();
    for sample in samples {
        if carriers.contains(&(sample.sample_id.as_str(), sample.study_id.as_str())) {
            matching.insert(sample.sample_id.as_str());
        }
    }

    100.0 * matching.len() as f64 / samples.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mutation::Gene;

    fn make_profiles() -> HashMap<String, MolecularProfile> {
        let mut profiles = HashMap::new();
        profiles.insert("GP1".to_string(), MolecularProfile::new("GP1", "STUDY1"));
        profiles
    }

    fn make_somatic(sample_id: &str, gene: &str) -> Mutation {
        Mutation {
            sample_id: sample_id.to_string(),
            gene: Some(Gene::new(gene)),
            molecular_profile_id: Some("GP1".to_string()),
            ..Default::default()
        }
    }

    fn make_germline(sample_id: &str, gene: &str) -> Mutation {
        Mutation {
            mutation_status: Some("Germline".to_string()),
            ..make_somatic(sample_id, gene)
        }
    }

    #[test]
    fn test_empty_cohort_yields_zero() {
        let mutations = vec![make_somatic("PATIENT1", "TP53")];
        let rate = somatic_mutation_rate("TP53", &mutations, &make_profiles(), &[]);
        assert_eq!(rate, 0.0);
    }

    #[test]
    fn test_variant_class_matches() {
        assert!(VariantClass::Somatic.matches(&make_somatic("S1", "TP53")));
        assert!(!VariantClass::Germline.matches(&make_somatic("S1", "TP53")));
        assert!(VariantClass::Germline.matches(&make_germline("S1", "TP53")));
        assert!(!VariantClass::Somatic.matches(&make_germline("S1", "TP53")));
    }

    #[test]
    fn test_unresolvable_profile_discards_record() {
        let mut mutation = make_somatic("PATIENT1", "TP53");
        mutation.molecular_profile_id = Some("MISSING".to_string());
        let cohort = vec![SampleIdentity::new("STUDY1", "PATIENT1")];
        let rate = somatic_mutation_rate("TP53", &[mutation], &make_profiles(), &cohort);
        assert_eq!(rate, 0.0);
    }

    #[test]
    fn test_absent_profile_id_discards_record() {
        let mut mutation = make_somatic("PATIENT1", "TP53");
        mutation.molecular_profile_id = None;
        let cohort = vec![SampleIdentity::new("STUDY1", "PATIENT1")];
        let rate = somatic_mutation_rate("TP53", &[mutation], &make_profiles(), &cohort);
        assert_eq!(rate, 0.0);
    }

    #[test]
    fn test_study_mismatch_does_not_count() {
        let mutations = vec![make_somatic("PATIENT1", "TP53")];
        let cohort = vec![SampleIdentity::new("STUDY2", "PATIENT1")];
        let rate = somatic_mutation_rate("TP53", &mutations, &make_profiles(), &cohort);
        assert_eq!(rate, 0.0);
    }

    #[test]
    fn test_sample_never_double_counted() {
        // Two records for the same sample, and the same sample listed twice
        // in the cohort: numerator stays 1, denominator stays 2.
        let mutations = vec![
            make_somatic("PATIENT1", "TP53"),
            make_somatic("PATIENT1", "TP53"),
        ];
        let cohort = vec![
            SampleIdentity::new("STUDY1", "PATIENT1"),
            SampleIdentity::new("STUDY1", "PATIENT1"),
        ];
        let rate = somatic_mutation_rate("TP53", &mutations, &make_profiles(), &cohort);
        assert_eq!(rate, 50.0);
    }

    #[test]
    fn test_record_without_gene_never_matches() {
        let mutation = Mutation {
            sample_id: "PATIENT1".to_string(),
            molecular_profile_id: Some("GP1".to_string()),
            ..Default::default()
        };
        let cohort = vec![SampleIdentity::new("STUDY1", "PATIENT1")];
        let rate = somatic_mutation_rate("TP53", &[mutation], &make_profiles(), &cohort);
        assert_eq!(rate, 0.0);
    }

    #[test]
    fn test_germline_rate_keeps_only_germline() {
        let mutations = vec![
            make_somatic("PATIENT1", "BRCA1"),
            make_germline("PATIENT2", "BRCA1"),
        ];
        let cohort = vec![
            SampleIdentity::new("STUDY1", "PATIENT1"),
            SampleIdentity::new("STUDY1", "PATIENT2"),
        ];
        let rate = germline_mutation_rate("BRCA1", &mutations, &make_profiles(), &cohort);
        assert_eq!(rate, 50.0);
    }
}
