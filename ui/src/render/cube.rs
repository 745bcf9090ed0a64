use glam::Vec3;

// corners of the [-1, 1] cube, bit 0 = x, bit 1 = y, bit 2 = z
pub const CUBE_CORNERS: [Vec3; 8] = [
    Vec3::new(-1., -1., -1.),
    Vec3::new( 1., -1., -1.),
    Vec3::new(-1.,  1., -1.),
    Vec3::new( 1.,  1., -1.),
    Vec3::new(-1., -1.,  1.),
    Vec3::new( 1., -1.,  1.),
    Vec3::new(-1.,  1.,  1.),
    Vec3::new( 1.,  1.,  1.),
];

// 4 edges along each axis = 12
pub const CUBE_EDGES: [(usize, usize); 12] = [
    (0, 1), (2, 3), (4, 5), (6, 7), // x
    (0, 2), (1, 3), (4, 6), (5, 7), // y
    (0, 4), (1, 5), (2, 6), (3, 7), // z
];
