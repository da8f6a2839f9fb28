//! Perspective camera sitting on +Z and looking at the origin.

use aether_config::schema::CameraConfig;

use crate::matrix::{self, Mat4};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    /// Distance from the origin along +Z.
    pub distance: f32,
}

impl Camera {
    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            fov_y: (config.fov_degrees as f32).to_radians(),
            near: config.near as f32,
            far: config.far as f32,
            distance: config.distance as f32,
        }
    }

    pub fn view(&self) -> Mat4 {
        matrix::translate(0.0, 0.0, -self.distance)
    }

    pub fn projection(&self, aspect: f32) -> Mat4 {
        let aspect = if aspect > 0.0 { aspect } else { 1.0 };
        matrix::perspective(self.fov_y, aspect, self.near, self.far)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        matrix::mul(&self.projection(aspect), &self.view())
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::transform_point;

    #[test]
    fn default_camera_matches_config() {
        let camera = Camera::default();
        assert!((camera.fov_y - 75f32.to_radians()).abs() < 1e-6);
        assert!((camera.distance - 50.0).abs() < 1e-6);
    }

    #[test]
    fn origin_projects_to_screen_center() {
        let camera = Camera::default();
        let clip = transform_point(&camera.view_projection(1.6), [0.0, 0.0, 0.0]);
        assert!(clip[0].abs() < 1e-5);
        assert!(clip[1].abs() < 1e-5);
        assert!((clip[3] - camera.distance).abs() < 1e-4);
        let depth = clip[2] / clip[3];
        assert!((0.0..=1.0).contains(&depth));
    }

    #[test]
    fn point_behind_camera_has_negative_w() {
        let camera = Camera::default();
        let clip = transform_point(&camera.view_projection(1.0), [0.0, 0.0, 60.0]);
        assert!(clip[3] < 0.0);
    }

    #[test]
    fn zero_aspect_falls_back_to_square() {
        let camera = Camera::default();
        assert_eq!(camera.projection(0.0), camera.projection(1.0));
    }
}
