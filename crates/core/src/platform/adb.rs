use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::debug;

use super::{Device, Grabber};

/// Run `program args..` to completion, failing on spawn error or non-zero exit.
fn call<I, S>(program: &Path, args: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let status = Command::new(program)
        .args(args)
        .status()
        .with_context(|| format!("spawn {}", program.display()))?;
    if !status.success() {
        bail!("{} exited with {}", program.display(), status);
    }
    Ok(())
}

/// Device reached through `adb shell`.
pub struct AdbDevice {
    adb: PathBuf,
}

impl AdbDevice {
    pub fn new(adb: &Path) -> Self {
        Self { adb: adb.to_path_buf() }
    }

    fn shell(&self, args: &[&str]) -> Result<()> {
        debug!(target: "adb", "adb shell {}", args.join(" "));
        call(&self.adb, std::iter::once("shell").chain(args.iter().copied()))
    }
}

impl Device for AdbDevice {
    fn tap(&mut self, x: u32, y: u32) -> Result<()> {
        self.shell(&["input", "tap", &x.to_string(), &y.to_string()])
    }

    fn key_event(&mut self, code: u32) -> Result<()> {
        self.shell(&["input", "keyevent", &code.to_string()])
    }

    fn start_app(&mut self, package: &str, activity: &str) -> Result<()> {
        self.shell(&["am", "start", "-n", &format!("{}/{}", package, activity)])
    }

    fn force_stop(&mut self, package: &str) -> Result<()> {
        self.shell(&["am", "force-stop", package])
    }
}

/// Capture through an external program invoked as `program <output-path>`.
pub struct ProgramGrabber {
    program: PathBuf,
}

impl ProgramGrabber {
    pub fn new(program: &Path) -> Self {
        Self { program: program.to_path_buf() }
    }
}

impl Grabber for ProgramGrabber {
    fn grab(&mut self, path: &Path) -> Result<()> {
        let started = Instant::now();
        call(&self.program, [path])?;
        if !path.is_file() {
            bail!("{} produced no file at {}", self.program.display(), path.display());
        }
        debug!(elapsed = started.elapsed().as_secs_f64(), "capture program finished");
        Ok(())
    }
}
