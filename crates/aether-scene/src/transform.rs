use crate::matrix::{self, Mat4};

/// Rotation and scale of one animated layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformState {
    /// Euler angles `[x, y, z]` in radians.
    pub rotation: [f32; 3],
    pub scale: [f32; 3],
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            rotation: [0.0; 3],
            scale: [1.0; 3],
        }
    }
}

impl TransformState {
    /// Model matrix `tilt · Rx · Ry · Rz · S`, where `tilt` is a fixed
    /// parent rotation that does not animate.
    pub fn model_matrix(&self, tilt: [f32; 3]) -> Mat4 {
        let local = matrix::mul(&matrix::rotate_xyz(self.rotation), &matrix::scale3(self.scale));
        if tilt == [0.0; 3] {
            local
        } else {
            matrix::mul(&matrix::rotate_xyz(tilt), &local)
        }
    }
}
