use std::path::Path;

use anyhow::{Result, bail};
use tracing::info;

use super::{Device, Grabber};

/// Grabber that never produces a frame.
pub struct StubGrabber;

impl Grabber for StubGrabber {
    fn grab(&mut self, path: &Path) -> Result<()> {
        info!(target: "stub", "grab(\"{}\")", path.display());
        bail!("stub grabber has no screen")
    }
}

/// Device that only logs what it was asked to do.
pub struct StubDevice;

impl Device for StubDevice {
    fn tap(&mut self, x: u32, y: u32) -> Result<()> {
        info!(target: "stub", "tap({}, {})", x, y);
        Ok(())
    }

    fn key_event(&mut self, code: u32) -> Result<()> {
        info!(target: "stub", "key_event({})", code);
        Ok(())
    }

    fn start_app(&mut self, package: &str, activity: &str) -> Result<()> {
        info!(target: "stub", "start_app(\"{}/{}\")", package, activity);
        Ok(())
    }

    fn force_stop(&mut self, package: &str) -> Result<()> {
        info!(target: "stub", "force_stop(\"{}\")", package);
        Ok(())
    }
}
