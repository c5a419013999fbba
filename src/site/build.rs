//! Running the static-site generator

use anyhow::{Context, Result, anyhow, bail};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Run the build command, streaming its output to ours
///
/// # Errors
/// Returns an error naming the command if it is empty, cannot be spawned, or
/// exits with a non-zero status
pub fn build_site(command: &[String]) -> Result<()> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| anyhow!("build failed: no build command given"))?;
    let command_line = command.join(" ");

    let status = Command::new(program)
        .args(args)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .with_context(|| format!("{} build failed: could not execute '{}'", program, command_line))?;

    if !status.success() {
        match status.code() {
            Some(code) => bail!(
                "{} build failed: '{}' exited with code {} ({})",
                program,
                command_line,
                code,
                describe_exit_code(code)
            ),
            None => bail!(
                "{} build failed: '{}' was terminated by a signal",
                program,
                command_line
            ),
        }
    }

    Ok(())
}

/// Check that the build output directory exists and return it
///
/// Later git commands run inside this directory; the process working
/// directory itself is left alone.
pub fn enter_site_dir(site_dir: &Path) -> Result<PathBuf> {
    let metadata = std::fs::metadata(site_dir).with_context(|| {
        format!(
            "failed to change directory to '{}'",
            site_dir.display()
        )
    })?;

    if !metadata.is_dir() {
        bail!(
            "failed to change directory to '{}': not a directory",
            site_dir.display()
        );
    }

    Ok(site_dir.to_path_buf())
}

/// Conventional meaning of a shell exit code
fn describe_exit_code(code: i32) -> &'static str {
    match code {
        1 => "general error",
        2 => "misuse of shell builtins",
        126 => "command invoked cannot execute",
        127 => "command not found",
        130 => "interrupted",
        _ if code > 128 => "terminated by signal",
        _ => "error",
    }
}
