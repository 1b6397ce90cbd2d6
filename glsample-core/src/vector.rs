/// Cross product demo over three points
use nalgebra::{Point3, Vector3};
use std::io::{self, Write};

use crate::geometry::Triangle;

/// Edge vectors `b - a` and `c - a`
pub fn edge_vectors(
    a: &Point3<f32>,
    b: &Point3<f32>,
    c: &Point3<f32>,
) -> (Vector3<f32>, Vector3<f32>) {
    Triangle::new(*a, *b, *c).edges()
}

/// Unnormalized normal of the plane through `a`, `b` and `c`
pub fn face_normal(a: &Point3<f32>, b: &Point3<f32>, c: &Point3<f32>) -> Vector3<f32> {
    Triangle::new(*a, *b, *c).normal()
}

/// Formats a vector as `x y z`
pub fn format_vector(v: &Vector3<f32>) -> String {
    format!("{} {} {}", v.x, v.y, v.z)
}

/// Writes the normal of the unit right triangle on the XY plane
pub fn run_demo<W: Write>(writer: &mut W) -> io::Result<()> {
    let a = Point3::origin();
    let b = Point3::new(1.0, 0.0, 0.0);
    let c = Point3::new(0.0, 1.0, 0.0);

    let n = face_normal(&a, &b, &c);
    tracing::debug!(?n, "computed face normal");

    writeln!(writer, "n = {}", format_vector(&n))?;
    writeln!(writer, "done!")?;
    Ok(())
}
