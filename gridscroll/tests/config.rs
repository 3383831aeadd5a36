use gridscroll::{Color, ConfigError, ScrollbarPalette, ScrollerConfig};

// ============================================================================
// Defaults and builders
// ============================================================================

#[test]
fn test_defaults_are_valid() {
    let config = ScrollerConfig::default();
    assert_eq!(config.track_thickness, 15.0);
    assert_eq!(config.thumb_thickness, 10.0);
    assert_eq!(config.min_thumb_length, 30.0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_builder_methods() {
    let palette = ScrollbarPalette {
        thumb: Color::rgb(1, 2, 3),
        ..Default::default()
    };
    let config = ScrollerConfig::new()
        .track_thickness(20.0)
        .thumb_thickness(12.0)
        .min_thumb_length(40.0)
        .border(false)
        .palette(palette);

    assert_eq!(config.track_thickness, 20.0);
    assert_eq!(config.thumb_thickness, 12.0);
    assert_eq!(config.min_thumb_length, 40.0);
    assert!(!config.border);
    assert_eq!(config.palette.thumb, Color::rgb(1, 2, 3));
}

// ============================================================================
// JSON loading
// ============================================================================

#[test]
fn test_from_json_fills_missing_keys() {
    let config = ScrollerConfig::from_json(
        r##"{
            "track_thickness": 18,
            "palette": { "thumb_focus": "#336699", "header_background": "rgb(10, 20, 30)" }
        }"##,
    )
    .unwrap();

    assert_eq!(config.track_thickness, 18.0);
    assert_eq!(config.thumb_thickness, 10.0);
    assert_eq!(config.palette.thumb_focus, Color::rgb(0x33, 0x66, 0x99));
    assert_eq!(config.palette.header_background, Color::rgb(10, 20, 30));
    assert_eq!(config.palette.fill, ScrollbarPalette::default().fill);
}

#[test]
fn test_json_round_trip() {
    let config = ScrollerConfig::default().border_width(2.0);
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"#ffffff\""));
    assert_eq!(ScrollerConfig::from_json(&json).unwrap(), config);
}

#[test]
fn test_malformed_json_is_parse_error() {
    let err = ScrollerConfig::from_json("{ track_thickness: ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_bad_color_is_rejected() {
    let err = ScrollerConfig::from_json(r#"{ "palette": { "thumb": "chartreuse" } }"#).unwrap_err();
    // serde reports the conversion failure through serde_json
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().contains("chartreuse"));
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_non_positive_thickness_rejected() {
    let err = ScrollerConfig::default()
        .track_thickness(0.0)
        .validate()
        .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidThickness {
            name: "track_thickness",
            ..
        }
    ));

    let err = ScrollerConfig::default()
        .min_thumb_length(f32::NAN)
        .validate()
        .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidThickness {
            name: "min_thumb_length",
            ..
        }
    ));
}

#[test]
fn test_thumb_wider_than_track_rejected() {
    let err = ScrollerConfig::from_json(r#"{ "track_thickness": 8, "thumb_thickness": 10 }"#)
        .unwrap_err();
    assert!(matches!(err, ConfigError::ThumbWiderThanTrack { .. }));
    assert_eq!(
        err.to_string(),
        "thumb thickness 10 exceeds track thickness 8"
    );
}

#[test]
fn test_border_width_only_checked_when_border_on() {
    assert!(ScrollerConfig::default().border_width(0.0).validate().is_err());
    assert!(ScrollerConfig::default()
        .border(false)
        .border_width(0.0)
        .validate()
        .is_ok());
}
