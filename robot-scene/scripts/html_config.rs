use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Output names produced by Trunk for the `robot-scene` binary.
const BINDGEN_OUTPUTS: [&str; 2] = ["robot-scene.js", "robot-scene_bg.wasm"];

fn main() -> io::Result<()> {
    // Directory Trunk stages the build into before copying it to dist.
    let staging_dir = env::var("TRUNK_STAGING_DIR")
        .map_err(|e| io::Error::new(io::ErrorKind::NotFound, format!("TRUNK_STAGING_DIR: {e}")))?;

    let staged_html_path = PathBuf::from(staging_dir).join("index.html");
    let mut html = fs::read_to_string(&staged_html_path)?;

    // Absolute paths break when the page is served from a sub-directory.
    for output in BINDGEN_OUTPUTS {
        html = html.replace(&format!("/{output}"), &format!("./{output}"));
    }

    fs::write(&staged_html_path, html)
}
