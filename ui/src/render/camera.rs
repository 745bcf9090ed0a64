use glam::{Mat4, Vec3};

/// Orbit camera circling `target` at `distance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub target: Vec3,
    pub up: Vec3,
    pub distance: f32,
    pub yaw: f32,   // in radians
    pub pitch: f32, // in radians
    pub fov_y: f32, // in radians
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO, // Looking at the origin
            up: Vec3::Y,        // World "up" is positive Y
            distance: 5.0,      // 5 units away from target
            yaw: 0.0,           // Facing along -Z from +Z by default
            pitch: 0.0,
            fov_y: 45f32.to_radians(),
        }
    }
}

impl Camera {
    pub fn eye(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        self.target + self.distance * Vec3::new(cp * sy, sp, cp * cy)
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        let proj = Mat4::perspective_rh_gl(self.fov_y, aspect, 0.1, 100.0);
        let view = Mat4::look_at_rh(self.eye(), self.target, self.up);
        proj * view
    }
}
