//! Keyed lookup-table construction and JSON loading.
//!
//! The engine takes its authoritative lookups (gene-symbol-to-gene and
//! profile-id-to-profile) as explicit immutable maps, never ambient
//! state. This module builds those maps from flat lists and loads the
//! lists from the JSON shapes the portal API serves.

use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

use crate::error::CohortError;
use crate::mutation::{Gene, MolecularProfile, Mutation};

/// Key genes by HUGO symbol. On duplicate symbols the last entry wins.
pub fn gene_table_by_symbol(genes: Vec<Gene>) -> HashMap<String, Gene> {
    genes
        .into_iter()
        .map(|gene| (gene.hugo_gene_symbol.clone(), gene))
        .collect()
}

/// Key molecular profiles by profile id. On duplicates the last entry wins.
pub fn profile_table_by_id(
    profiles: Vec<MolecularProfile>,
) -> HashMap<String, MolecularProfile> {
    profiles
        .into_iter()
        .map(|profile| (profile.molecular_profile_id.clone(), profile))
        .collect()
}

/// Load a gene list from a JSON array file.
pub fn load_genes(path: impl AsRef<Path>) -> Result<Vec<Gene>, CohortError> {
    let genes: Vec<Gene> = load_json(path.as_ref())?;
    debug!(count = genes.len(), "loaded gene records");
    Ok(genes)
}

/// Load a mutation list from a JSON array file.
pub fn load_mutations(path: impl AsRef<Path>) -> Result<Vec<Mutation>, CohortError> {
    let mutations: Vec<Mutation> = load_json(path.as_ref())?;
    debug!(count = mutations.len(), "loaded mutation records");
    Ok(mutations)
}

/// Load a molecular-profile list from a JSON array file.
pub fn load_profiles(path: impl AsRef<Path>) -> Result<Vec<MolecularProfile>, CohortError> {
    let profiles: Vec<MolecularProfile> = load_json(path.as_ref())?;
    debug!(count = profiles.len(), "loaded molecular profiles");
    Ok(profiles)
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, CohortError> {
    debug!(path = %path.display(), "reading JSON table");
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}
