use std::{
    fs,
    io::Write,
    process::{Command, Stdio},
};

use tracing::info;

/// Run shell command, feeding input over stdin. The command's stdout and
/// stderr are inherited so its diagnostics reach the terminal.
pub fn cmd_with_input(command: &str, args: &[String], input: &[u8]) -> Result<(), String> {
    info!("Cmd: {} {}", command, args.join(" "));

    let mut child = Command::new(command)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|_| format!("failed to run command: {}", command))?;

    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| format!("failed to open stdin for: {}", command))?;
    stdin
        .write_all(input)
        .map_err(|_| format!("failed to write to stdin of: {}", command))?;
    drop(stdin);

    let status = child
        .wait()
        .map_err(|_| format!("failed to run command: {}", command))?;

    if !status.success() {
        return Err(format!(
            "command '{}' exited with a non-success code",
            command
        ));
    }

    Ok(())
}

/// Create directory and any missing parents. No-op if it already exists.
pub fn create_dir_if_not_exist(dir: &str) -> Result<(), String> {
    if !fs::exists(dir).unwrap_or(false) {
        info!("Creating directory: {}", dir);
    }

    fs::create_dir_all(dir).map_err(|err| format!("failed to create directory {}: {}", dir, err))
}
