use std::{
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use tracing::info;

use crate::{
    config::Config,
    util::{cmd_with_input, create_dir_if_not_exist},
};

type Res<T> = Result<T, String>;

/// Name of the produced shared library.
pub const ARTIFACT_NAME: &str = "libjava-tree-sitter.dylib";

/// Placeholder program compiled in place of the real grammar bindings.
const STUB_SOURCE: &[u8] = b"void foo(){}";

/// Build driver entry point. Prepares the output directory and compiles the
/// stub library into it.
pub fn build(config: &Config) -> Res<()> {
    if !clang_available() {
        return Err("Failed to run clang. Make sure it's installed and in PATH.".into());
    }

    create_dir_if_not_exist(&config.outdir)?;

    let out_file = artifact_path(&config.outdir);
    info!(
        "Compiling stub native library for {} -> {}",
        config.arch,
        out_file.display()
    );
    compile_stub(&out_file)?;
    info!("Done");

    Ok(())
}

/// Path of the shared library inside the output directory.
pub fn artifact_path(outdir: &str) -> PathBuf {
    Path::new(outdir).join(ARTIFACT_NAME)
}

fn compile_stub(out_file: &Path) -> Res<()> {
    // The compile target is fixed to arm64; -a only changes the reported label.
    let args = vec![
        "-arch".to_string(),
        "arm64".to_string(),
        "-shared".to_string(),
        "-o".to_string(),
        out_file.display().to_string(),
        "-x".to_string(),
        "c".to_string(),
        "-".to_string(),
    ];

    cmd_with_input("clang", &args, STUB_SOURCE)
}

fn clang_available() -> bool {
    Command::new("clang")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}
