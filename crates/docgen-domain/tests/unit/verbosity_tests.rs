//! Unit tests for Verbosity and DecodingPreset

use docgen_domain::{DecodingPreset, Verbosity};

#[test]
fn test_default_verbosity_is_concise() {
    assert_eq!(Verbosity::default(), Verbosity::Concise);
}

#[test]
fn test_verbosity_parsing() {
    assert_eq!("concise".parse::<Verbosity>().unwrap(), Verbosity::Concise);
    assert_eq!(" Detailed ".parse::<Verbosity>().unwrap(), Verbosity::Detailed);
    assert!("verbose".parse::<Verbosity>().is_err());
}

#[test]
fn test_verbosity_deserializes_lowercase() {
    let v: Verbosity = serde_json::from_str("\"detailed\"").unwrap();
    assert_eq!(v, Verbosity::Detailed);
    assert!(serde_json::from_str::<Verbosity>("\"DETAILED\"").is_err());
}

#[test]
fn test_presets_differ() {
    let concise = Verbosity::Concise.preset();
    let detailed = Verbosity::Detailed.preset();

    assert_ne!(concise, detailed);
    assert!(concise.max_length < detailed.max_length);
    assert!(concise.min_length < detailed.min_length);
}

#[test]
fn test_preset_bounds_are_consistent() {
    for preset in [DecodingPreset::CONCISE, DecodingPreset::DETAILED] {
        assert!(preset.min_length < preset.max_length);
        assert!(preset.num_beams >= 1);
    }
}
