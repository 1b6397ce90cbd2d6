/// OpenGL ES 2.0 triangle sample
///
/// Draws a red triangle on black until the window is closed.

use glsample_gles::{AppError, ShaderPolicy, WindowConfig};

fn main() -> Result<(), AppError> {
    glsample_core::trace::install_tracing();

    let config = WindowConfig::new(file!());
    glsample_gles::run(&config, ShaderPolicy::default())
}
