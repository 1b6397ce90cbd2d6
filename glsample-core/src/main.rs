/// Cross product demo
///
/// Prints the normal of the triangle spanned by the origin and the X and Y unit points.

use std::io::{self, stdout};

fn main() -> io::Result<()> {
    glsample_core::trace::install_tracing();

    let mut stdout = stdout().lock();
    glsample_core::vector::run_demo(&mut stdout)
}
