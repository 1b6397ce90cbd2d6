/// Geometry primitives shared by the demos
use nalgebra::{Point3, Vector3};

/// A triangle face defined by three vertex positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Point3<f32>; 3],
}

impl Triangle {
    pub fn new(v0: Point3<f32>, v1: Point3<f32>, v2: Point3<f32>) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    /// The triangle drawn by the GL ES sample, in normalized device coordinates
    pub fn sample() -> Self {
        Self::new(
            Point3::new(0.0, 0.5, 0.0),
            Point3::new(0.5, -0.5, 0.0),
            Point3::new(-0.5, -0.5, 0.0),
        )
    }

    /// Edge vectors from the first vertex to the other two
    pub fn edges(&self) -> (Vector3<f32>, Vector3<f32>) {
        let [v0, v1, v2] = self.vertices;
        (v1 - v0, v2 - v0)
    }

    /// Face normal as the cross product of the two edges. Not normalized,
    /// so a degenerate triangle yields the zero vector.
    pub fn normal(&self) -> Vector3<f32> {
        let (edge1, edge2) = self.edges();
        edge1.cross(&edge2)
    }

    /// Positions packed as `x, y, z` per vertex, ready for a vertex buffer
    pub fn positions(&self) -> [f32; 9] {
        let [v0, v1, v2] = self.vertices;
        [v0.x, v0.y, v0.z, v1.x, v1.y, v1.z, v2.x, v2.y, v2.z]
    }
}
