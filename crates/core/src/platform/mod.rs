pub mod adb;
pub mod stub;

use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::settings::Settings;

/// Primitive operations on the controlled device.
pub trait Device: Send {
    fn tap(&mut self, x: u32, y: u32) -> Result<()>;
    fn key_event(&mut self, code: u32) -> Result<()>;
    fn start_app(&mut self, package: &str, activity: &str) -> Result<()>;
    fn force_stop(&mut self, package: &str) -> Result<()>;
}

/// Writes one capture of the device screen to `path`.
pub trait Grabber: Send {
    fn grab(&mut self, path: &Path) -> Result<()>;
}

/// The pair of external collaborators the control loop drives.
pub struct Platform {
    pub grabber: Box<dyn Grabber>,
    pub device: Box<dyn Device>,
}

/// Create the collaborators: external programs, or logging stubs.
pub fn create_platform(force_stub: bool, settings: &Settings) -> Platform {
    if force_stub {
        info!("using stub platform");
        return Platform {
            grabber: Box::new(stub::StubGrabber),
            device: Box::new(stub::StubDevice),
        };
    }
    info!("using {} and {}", settings.adb.display(), settings.grab.display());
    Platform {
        grabber: Box::new(adb::ProgramGrabber::new(&settings.grab)),
        device: Box::new(adb::AdbDevice::new(&settings.adb)),
    }
}
