//! Window, camera, and point layer validation.

use crate::schema::{AetherConfig, CloudShapeConfig};

use super::helpers::{
    validate_color, validate_finite3, validate_positive, validate_range, validate_range_f64,
};

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &AetherConfig) {
    let w = &config.window;
    validate_range(errors, "window.width", w.width, 320, 7680);
    validate_range(errors, "window.height", w.height, 240, 4320);
    validate_color(errors, "window.background", &w.background);
}

pub(crate) fn validate_camera(errors: &mut Vec<String>, config: &AetherConfig) {
    let c = &config.camera;
    validate_range_f64(errors, "camera.fov_degrees", c.fov_degrees, 10.0, 170.0);
    validate_positive(errors, "camera.near", c.near);
    validate_positive(errors, "camera.far", c.far);
    if c.far <= c.near {
        errors.push(format!(
            "camera.far = {} must be greater than camera.near = {}",
            c.far, c.near
        ));
    }
    validate_positive(errors, "camera.distance", c.distance);
    validate_range_f64(errors, "camera.fog_density", c.fog_density, 0.0, 1.0);
}

pub(crate) fn validate_stars(errors: &mut Vec<String>, config: &AetherConfig) {
    let s = &config.stars;
    validate_range(errors, "stars.count", s.count, 1, 200_000);
    validate_shape(errors, "stars.shape", &s.shape);
    validate_color(errors, "stars.color", &s.color);
    for (i, entry) in s.palette.iter().enumerate() {
        validate_range_f64(
            errors,
            &format!("stars.palette[{i}].threshold"),
            entry.threshold,
            0.0,
            1.0,
        );
        validate_color(errors, &format!("stars.palette[{i}].color"), &entry.color);
    }
    validate_positive(errors, "stars.point_size", s.point_size);
    validate_range_f64(errors, "stars.opacity", s.opacity, 0.0, 1.0);
    validate_finite3(errors, "stars.tilt", s.tilt);

    let m = &s.motion;
    validate_finite3(errors, "stars.motion.spin", m.spin);
    validate_range_f64(
        errors,
        "stars.motion.pointer_coupling",
        m.pointer_coupling,
        -10.0,
        10.0,
    );
    validate_range_f64(errors, "stars.motion.easing", m.easing, 0.0, 1.0);
    validate_range_f64(
        errors,
        "stars.motion.breathing_amplitude",
        m.breathing_amplitude,
        0.0,
        0.5,
    );
    validate_range_f64(
        errors,
        "stars.motion.breathing_frequency",
        m.breathing_frequency,
        0.0,
        100.0,
    );
}

pub(crate) fn validate_dust(errors: &mut Vec<String>, config: &AetherConfig) {
    let d = &config.dust;
    if !d.enabled {
        return;
    }
    validate_range(errors, "dust.count", d.count, 1, 10_000);
    validate_positive(errors, "dust.half_extent", d.half_extent);
    validate_color(errors, "dust.color", &d.color);
    validate_positive(errors, "dust.point_size", d.point_size);
    validate_range_f64(errors, "dust.opacity", d.opacity, 0.0, 1.0);
    validate_finite3(errors, "dust.spin", d.spin);
}

pub(crate) fn validate_shooting_star(errors: &mut Vec<String>, config: &AetherConfig) {
    let s = &config.shooting_star;
    if !s.enabled {
        return;
    }
    if !s.period.is_finite() || s.period <= 1.0 {
        errors.push(format!(
            "shooting_star.period = {} must be greater than 1",
            s.period
        ));
    }
    validate_finite3(errors, "shooting_star.start", s.start);
    validate_finite3(errors, "shooting_star.end", s.end);
    validate_positive(errors, "shooting_star.speed_min", s.speed_min);
    if !(s.speed_max >= s.speed_min) {
        errors.push(format!(
            "shooting_star.speed_max = {} must be at least speed_min = {}",
            s.speed_max, s.speed_min
        ));
    }
    validate_range_f64(errors, "shooting_star.max_offset", s.max_offset, 0.0, 1.0e6);
    validate_positive(errors, "shooting_star.size", s.size);
    validate_color(errors, "shooting_star.color", &s.color);
}

pub(crate) fn validate_pointer(errors: &mut Vec<String>, config: &AetherConfig) {
    validate_range_f64(errors, "pointer.scale", config.pointer.scale, 0.0, 1.0);
}

fn validate_shape(errors: &mut Vec<String>, name: &str, shape: &CloudShapeConfig) {
    match *shape {
        CloudShapeConfig::Shell {
            inner_radius,
            outer_radius,
        } => {
            if !inner_radius.is_finite() || inner_radius < 0.0 {
                errors.push(format!(
                    "{name}.inner_radius = {inner_radius} must be non-negative"
                ));
            }
            if !(outer_radius >= inner_radius) || !outer_radius.is_finite() {
                errors.push(format!(
                    "{name}.outer_radius = {outer_radius} must be at least inner_radius = {inner_radius}"
                ));
            }
        }
        CloudShapeConfig::Volume { radius } => {
            validate_positive(errors, &format!("{name}.radius"), radius);
        }
        CloudShapeConfig::Cube { half_extent } => {
            validate_positive(errors, &format!("{name}.half_extent"), half_extent);
        }
    }
}
