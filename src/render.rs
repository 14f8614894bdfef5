use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::RenderError;

/// Run a Graphviz-compatible `program` to turn `dot_path` into a PNG at `png_path`.
///
/// Invoked as `<program> -Tpng <dot_path> -o <png_path>`; layout direction and
/// node style are already encoded in the DOT text, so nothing else is passed.
pub fn render_png(program: &str, dot_path: &Path, png_path: &Path) -> Result<(), RenderError> {
    debug!(program, dot = %dot_path.display(), png = %png_path.display(), "invoking renderer");

    let output = Command::new(program)
        .arg("-Tpng")
        .arg(dot_path)
        .arg("-o")
        .arg(png_path)
        .output()
        .map_err(|err| match err.kind() {
            ErrorKind::NotFound => RenderError::NotFound {
                program: program.to_owned(),
            },
            _ => RenderError::Io(err),
        })?;

    if !output.status.success() {
        return Err(RenderError::Failed {
            program: program.to_owned(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
        });
    }

    Ok(())
}
