//! Parallel processing support for ferro-cohort
//!
//! Rate computation is referentially transparent, so fanning it out across
//! many genes needs no coordination. This module provides rayon-backed
//! variants of the per-gene rate functions. Enable with the `parallel`
//! feature.
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "parallel")]
//! # fn main() {
//! use std::collections::HashMap;
//! use ferro_cohort::mutation::{MolecularProfile, Mutation, SampleIdentity};
//! use ferro_cohort::parallel::somatic_mutation_rates_parallel;
//!
//! let genes = vec!["TP53", "BRCA1", "PIK3CA"];
//! let mutations: Vec<Mutation> = vec![];
//! let profiles: HashMap<String, MolecularProfile> = HashMap::new();
//! let cohort: Vec<SampleIdentity> = vec![];
//!
//! let rates = somatic_mutation_rates_parallel(&genes, &mutations, &profiles, &cohort);
//! assert_eq!(rates.len(), 3);
//! # }
//! # #[cfg(not(feature = "parallel"))]
//! # fn main() {}
//! ```

use rayon::prelude::*;
use std::collections::HashMap;

use crate::mutation::{MolecularProfile, Mutation, SampleIdentity};
use crate::rate::{mutation_rate, VariantClass};

/// Compute somatic rates for many genes in parallel.
///
/// Returns `(gene, rate)` pairs in the input gene order.
pub fn somatic_mutation_rates_parallel<S: AsRef<str> + Sync>(
    genes: &[S],
    mutations: &[Mutation],
    molecular_profiles: &HashMap<String, MolecularProfile>,
    samples: &[SampleIdentity],
) -> Vec<(String, f64)> {
    rates_parallel(
        VariantClass::Somatic,
        genes,
        mutations,
        molecular_profiles,
        samples,
    )
}

/// Compute germline rates for many genes in parallel.
///
/// Returns `(gene, rate)` pairs in the input gene order.
pub fn germline_mutation_rates_parallel<S: AsRef<str> + Sync>(
    genes: &[S],
    mutations: &[Mutation],
    molecular_profiles: &HashMap<String, MolecularProfile>,
    samples: &[SampleIdentity],
) -> Vec<(String, f64)> {
    rates_parallel(
        VariantClass::Germline,
        genes,
        mutations,
        molecular_profiles,
        samples,
    )
}

fn rates_parallel<S: AsRef<str> + Sync>(
    class: VariantClass,
    genes: &[S],
    mutations: &[Mutation],
    molecular_profiles: &HashMap<String, MolecularProfile>,
    samples: &[SampleIdentity],
) -> Vec<(String, f64)> {
    genes
        .par_iter()
        .map(|gene| {
            let gene = gene.as_ref();
            (
                gene.to_string(),
                mutation_rate(class, gene, mutations, molecular_profiles, samples),
            )
        })
        .collect()
}
