use glam::{Mat4, Quat, Vec2, Vec3, Vec4Swizzles};

use super::camera::Camera;
use super::cube::{CUBE_CORNERS, CUBE_EDGES};

/// A set of wireframe cubes spinning in place.
#[derive(Debug, Clone, PartialEq)]
pub struct CubeScene {
    pub instances: Vec<Mat4>,
    /// radians per second around the instance's own Y axis
    pub spin: f32,
}

pub type Segment = (Vec2, Vec2);

impl CubeScene {
    pub fn single() -> Self {
        Self {
            instances: vec![Mat4::IDENTITY],
            spin: 0.8,
        }
    }

    /// `n` x `n` grid of half-size cubes on the XY plane.
    pub fn grid(n: u32) -> Self {
        let offset = (n as f32 - 1.0) * 0.5;
        let instances = (0..n)
            .flat_map(|row| (0..n).map(move |col| (row, col)))
            .map(|(row, col)| {
                let pos = Vec3::new(col as f32 - offset, row as f32 - offset, 0.0) * 1.5;
                Mat4::from_scale_rotation_translation(Vec3::splat(0.5), Quat::IDENTITY, pos)
            })
            .collect();

        Self { instances, spin: 1.2 }
    }

    /// Screen-space edges for a `width` x `height` canvas at `t_secs`.
    /// Edges with an endpoint behind the camera are dropped.
    pub fn project(&self, camera: &Camera, t_secs: f32, width: f32, height: f32) -> Vec<Segment> {
        let view_proj = camera.view_proj(width / height);
        let spin = Mat4::from_rotation_y(self.spin * t_secs) * Mat4::from_rotation_x(self.spin * 0.5 * t_secs);

        let mut out = Vec::with_capacity(self.instances.len() * CUBE_EDGES.len());
        for model in &self.instances {
            let mvp = view_proj * *model * spin;
            let corners = CUBE_CORNERS.map(|c| to_screen(mvp, c, width, height));

            out.extend(CUBE_EDGES.iter().filter_map(|&(a, b)| Some((corners[a]?, corners[b]?))));
        }
        out
    }
}

/// Clip space -> canvas pixels, top-left origin.
pub fn to_screen(mvp: Mat4, p: Vec3, width: f32, height: f32) -> Option<Vec2> {
    let clip = mvp * p.extend(1.0);
    if clip.w <= f32::EPSILON {
        return None;
    }
    let ndc = clip.xy() / clip.w;
    Some(Vec2::new((ndc.x + 1.0) * 0.5 * width, (1.0 - ndc.y) * 0.5 * height))
}
