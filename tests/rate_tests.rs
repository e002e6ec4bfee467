//! Cohort rate tests using rstest parameterized scenarios
//!
//! Scenario fixtures mirror a two-study-free portal setup: one molecular
//! profile (GP1) resolving to STUDY1, a somatic set with TP53/PIK3CA
//! carriers, and a germline set with TP53/BRCA1/BRCA2 carriers.

use rstest::rstest;
use std::collections::HashMap;

use ferro_cohort::mutation::{Gene, MolecularProfile, Mutation, SampleIdentity};
use ferro_cohort::rate::{germline_mutation_rate, somatic_mutation_rate};

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

fn somatic_mutations() -> Vec<Mutation> {
    vec![
        make_somatic("PATIENT1", "TP53"),
        make_somatic("PATIENT1", "TP53"),
        make_somatic("PATIENT2", "PIK3CA"),
    ]
}

fn germline_mutations() -> Vec<Mutation> {
    vec![
        make_germline("PATIENT1", "TP53"),
        make_germline("PATIENT1", "BRCA1"),
        make_germline("PATIENT2", "BRCA2"),
    ]
}

fn cohort(sample_ids: &[&str]) -> Vec<SampleIdentity> {
    sample_ids
        .iter()
        .map(|sample_id| SampleIdentity::new("STUDY1", *sample_id))
        .collect()
}

#[rstest]
// Only one of two cohort samples carries a TP53 somatic mutation.
#[case("TP53", &["PATIENT1", "PATIENT2"], 50.0)]
// A gene absent from all mutations.
#[case("NASDASFASG", &["PATIENT1", "PATIENT2"], 0.0)]
// One-sample cohort with a matching mutation.
#[case("PIK3CA", &["PATIENT2"], 100.0)]
// Cohort sample absent from every mutation record.
#[case("PIK3CA", &["XXXX"], 0.0)]
fn test_somatic_rate(#[case] gene: &str, #[case] sample_ids: &[&str], #[case] expected: f64) {
    let rate = somatic_mutation_rate(
        gene,
        &somatic_mutations(),
        &make_profiles(),
        &cohort(sample_ids),
    );
    assert_eq!(rate, expected);
}

#[test]
fn test_somatic_rate_ignores_germline_mutations() {
    let mut mutations = somatic_mutations();
    mutations.extend(germline_mutations());

    let rate = somatic_mutation_rate(
        "BRCA1",
        &mutations,
        &make_profiles(),
        &cohort(&["PATIENT2"]),
    );
    assert_eq!(rate, 0.0);
}

#[rstest]
// Only half of the cohort carries a germline BRCA1 mutation.
#[case("BRCA1", &["PATIENT1", "PATIENT2"], 50.0)]
// Cohort sample absent from every mutation record.
#[case("BRCA2", &["XXXX"], 0.0)]
// A gene absent from all mutations.
#[case("NASDASFASG", &["PATIENT1", "PATIENT2"], 0.0)]
fn test_germline_rate(#[case] gene: &str, #[case] sample_ids: &[&str], #[case] expected: f64) {
    let rate = germline_mutation_rate(
        gene,
        &germline_mutations(),
        &make_profiles(),
        &cohort(sample_ids),
    );
    assert_eq!(rate, expected);
}

#[test]
fn test_germline_rate_ignores_somatic_mutations() {
    let mut mutations = germline_mutations();
    mutations.extend(somatic_mutations());

    let rate = germline_mutation_rate(
        "PIK3CA",
        &mutations,
        &make_profiles(),
        &cohort(&["PATIENT1", "PATIENT2"]),
    );
    assert_eq!(rate, 0.0);
}

#[test]
fn test_rate_with_empty_cohort_is_zero_not_nan() {
    let rate = somatic_mutation_rate("TP53", &somatic_mutations(), &make_profiles(), &[]);
    assert_eq!(rate, 0.0);
}
