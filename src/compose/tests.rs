//! Tests for preset composition.

use super::*;
use crate::presets::ELEMENTAL_THEMES;

fn fire_request() -> ComposeRequest {
    ComposeRequest::for_theme("fire", "Ignis", "Lord of Flames", "fire and forge")
}

#[test]
fn test_secondary_domain_takes_last_segment() {
    assert_eq!(secondary_domain("fire and forge"), "forge");
    assert_eq!(secondary_domain("sky and sea and storms"), "storms");
}

#[test]
fn test_secondary_domain_without_separator() {
    assert_eq!(secondary_domain("chaos"), "chaos");
    assert_eq!(secondary_domain("sand,and dust"), "sand,and dust");
}

#[test]
fn test_opposite_time() {
    assert_eq!(opposite_time(Some("day")), "night");
    assert_eq!(opposite_time(Some("any")), "day");
    assert_eq!(opposite_time(Some("night")), "day");
    assert_eq!(opposite_time(None), "day");
}

#[test]
fn test_compose_fire_identity_and_derivations() {
    let vars = compose(&fire_request()).unwrap();

    assert_eq!(vars.get("deity_id"), Some("fire_deity"));
    assert_eq!(vars.get("deity_name"), Some("Ignis"));
    assert_eq!(vars.get("deity_theme"), Some("fire"));
    assert_eq!(vars.get("primary_domain"), Some("fire"));
    assert_eq!(vars.get("secondary_domain"), Some("forge"));
    assert_eq!(vars.get("opposite_time"), Some("night"));
    assert_eq!(vars.get("deity_color"), Some("red"));
}

#[test]
fn test_compose_water_opposite_time_falls_back_to_day() {
    let request = ComposeRequest::for_theme("water", "Aquaria", "Mistress of Tides", "seas and storms");
    let vars = compose(&request).unwrap();

    assert_eq!(vars.get("preferred_time"), Some("any"));
    assert_eq!(vars.get("opposite_time"), Some("day"));
}

#[test]
fn test_caller_fields_beat_preset_identity() {
    let request = ComposeRequest::for_theme("fire", "Vulkar", "Smith of Cinders", "smithing");
    let vars = compose(&request).unwrap();

    assert_eq!(vars.get("deity_name"), Some("Vulkar"));
    assert_eq!(vars.get("deity_title"), Some("Smith of Cinders"));
    assert_eq!(vars.get("secondary_domain"), Some("smithing"));
}

#[test]
fn test_overrides_beat_every_layer() {
    for theme in ELEMENTAL_THEMES {
        let request = ComposeRequest::for_theme(theme, "N", "T", "a and b").with_overrides([
            ("deity_color".to_string(), "gold".to_string()),
            ("deity_realm".to_string(), "the override realm".to_string()),
            ("opposite_time".to_string(), "dusk".to_string()),
            ("deity_id".to_string(), "custom_deity".to_string()),
        ]);
        let vars = compose(&request).unwrap();

        assert_eq!(vars.get("deity_color"), Some("gold"), "theme {}", theme);
        assert_eq!(vars.get("deity_realm"), Some("the override realm"));
        assert_eq!(vars.get("opposite_time"), Some("dusk"));
        assert_eq!(vars.get("deity_id"), Some("custom_deity"));
    }
}

#[test]
fn test_overridden_preferred_time_drives_derivation() {
    let request = ComposeRequest::for_theme("water", "N", "T", "d")
        .with_overrides([("preferred_time".to_string(), "day".to_string())]);
    let vars = compose(&request).unwrap();

    // Overrides are applied after derivation, so the derived slot keeps the
    // theme's value.
    assert_eq!(vars.get("preferred_time"), Some("day"));
    assert_eq!(vars.get("opposite_time"), Some("day"));
}

#[test]
fn test_unknown_theme_composes_identity_only() {
    let request = ComposeRequest::for_theme("chaos", "Eris", "Sower of Discord", "chaos");
    let vars = compose(&request).unwrap();

    assert_eq!(vars.get("deity_id"), Some("chaos_deity"));
    assert_eq!(vars.get("secondary_domain"), Some("chaos"));
    assert_eq!(vars.get("opposite_time"), Some("day"));
    assert!(!vars.contains("deity_color"));
    assert_eq!(vars.len(), 8);
}

#[test]
fn test_require_identity_names_first_missing_field() {
    assert!(fire_request().require_identity().is_ok());

    let request = ComposeRequest {
        theme: "fire".to_string(),
        ..Default::default()
    };
    let err = request.require_identity().unwrap_err();
    assert!(matches!(err, DeitygenError::MissingField(ref f) if f == "name"));

    let request = ComposeRequest {
        domains: Some(" ".to_string()),
        ..ComposeRequest::for_theme("fire", "Pyra", "Queen of Embers", "")
    };
    let err = request.require_identity().unwrap_err();
    assert!(matches!(err, DeitygenError::MissingField(ref f) if f == "domains"));
}

#[test]
fn test_custom_request_falls_back_to_basic_preset() {
    let request = ComposeRequest::from_json(r#"{"theme": "earth"}"#).unwrap();
    let vars = compose(&request).unwrap();

    assert_eq!(vars.get("deity_name"), Some("Gaia"));
    assert_eq!(vars.get("deity_title"), Some("Mother of Stone"));
    assert_eq!(vars.get("secondary_domain"), Some("mountains"));
}

#[test]
fn test_missing_identity_without_preset_fails() {
    let request = ComposeRequest {
        theme: "chaos".to_string(),
        name: Some("Eris".to_string()),
        title: Some("   ".to_string()),
        ..Default::default()
    };
    let err = compose(&request).unwrap_err();
    assert!(matches!(err, DeitygenError::MissingField(ref f) if f == "title"));
}

#[test]
fn test_unsafe_theme_is_rejected() {
    for theme in ["../etc", "Fire", "", "fire deity"] {
        let request = ComposeRequest::for_theme(theme, "N", "T", "D");
        let err = compose(&request).unwrap_err();
        assert!(matches!(err, DeitygenError::InvalidName(_)), "theme {:?}", theme);
    }
}

#[test]
fn test_uppercase_theme_suggests_lowercase() {
    let err = compose(&ComposeRequest::for_theme("Storm", "Raijin", "T", "storms")).unwrap_err();
    assert!(err.to_string().contains("did you mean 'storm'?"));

    let err = compose(&ComposeRequest::for_theme("../etc", "N", "T", "D")).unwrap_err();
    assert!(!err.to_string().contains("did you mean"));
}

#[test]
fn test_compose_is_deterministic() {
    let a = compose(&fire_request()).unwrap();
    let b = compose(&fire_request()).unwrap();
    assert_eq!(a, b);
}
