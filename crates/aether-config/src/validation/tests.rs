//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = AetherConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_zero_star_count() {
    let mut config = AetherConfig::default();
    config.stars.count = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("stars.count"));
}

#[test]
fn catches_inverted_shell() {
    let mut config = AetherConfig::default();
    config.stars.shape = CloudShapeConfig::Shell {
        inner_radius: 3.0,
        outer_radius: 1.0,
    };
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("stars.shape.outer_radius"));
}

#[test]
fn catches_non_positive_volume_radius() {
    let mut config = AetherConfig::default();
    config.stars.shape = CloudShapeConfig::Volume { radius: 0.0 };
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("stars.shape.radius"));
}

#[test]
fn catches_bad_palette_entry() {
    let mut config = AetherConfig::default();
    config.stars.palette.push(PaletteEntry::new(1.5, "purple"));
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("stars.palette[3].threshold"));
    assert!(err.contains("stars.palette[3].color"));
}

#[test]
fn catches_easing_above_one() {
    let mut config = AetherConfig::default();
    config.stars.motion.easing = 1.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("stars.motion.easing"));
}

#[test]
fn catches_nan_spin() {
    let mut config = AetherConfig::default();
    config.stars.motion.spin = [f64::NAN, 0.0, 0.0];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("stars.motion.spin"));
}

#[test]
fn catches_far_before_near() {
    let mut config = AetherConfig::default();
    config.camera.near = 10.0;
    config.camera.far = 5.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("camera.far"));
}

#[test]
fn disabled_dust_is_not_validated() {
    let mut config = AetherConfig::default();
    config.dust.enabled = false;
    config.dust.count = 0;
    assert!(validate(&config).is_ok());

    config.dust.enabled = true;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("dust.count"));
}

#[test]
fn catches_shooting_star_speed_range() {
    let mut config = AetherConfig::default();
    config.shooting_star.enabled = true;
    config.shooting_star.speed_min = 3.0;
    config.shooting_star.speed_max = 1.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("shooting_star.speed_max"));
}

#[test]
fn relay_delivery_requires_url() {
    let mut config = AetherConfig::default();
    config.waitlist.delivery = DeliveryMode::Relay;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("waitlist.relay.url"));

    config.waitlist.relay.url = "https://formsubmit.co/ajax/inbox@example.com".into();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_invalid_background_color() {
    let mut config = AetherConfig::default();
    config.window.background = "black".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.background"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = AetherConfig::default();
    config.stars.count = 0;
    config.window.width = 10;
    config.waitlist.relay.timeout_secs = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("stars.count"));
    assert!(err.contains("window.width"));
    assert!(err.contains("waitlist.relay.timeout_secs"));
    assert!(err.contains("; "));
}
