/// glsample core library - shared geometry and vector math
///
/// Holds the triangle geometry used by the GL ES sample, the cross product
/// demo, and the tracing setup both binaries install at startup.

pub mod geometry;
pub mod trace;
pub mod vector;

// Re-export commonly used types
pub use geometry::Triangle;
pub use vector::{edge_vectors, face_normal, format_vector};
