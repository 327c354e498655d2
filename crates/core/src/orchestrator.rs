use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tempfile::TempDir;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::history::{Screenshots, Stages};
use crate::pixels;
use crate::platform::{Device, Grabber, Platform};
use crate::registry::Registry;
use crate::settings::Settings;
use crate::sleep;
use crate::stage::StageKind;

/// What a single tick ended with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The capture collaborator failed; nothing was classified.
    CaptureFailed,
    /// A file was produced but could not be decoded.
    Undecodable,
    Recognized(StageKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub outcome: Outcome,
    /// Delay before the next tick starts.
    pub wait: Duration,
}

/// Remove a capture that never made it into the history. A missing file is fine.
fn discard(path: &Path) {
    if let Err(e) = std::fs::remove_file(path) {
        if e.kind() != ErrorKind::NotFound {
            debug!("cannot remove screenshot {}: {}", path.display(), e);
        }
    }
}

/// Capture, classify, act, wait. Owns both histories and the screenshot directory.
pub struct Orchestrator {
    registry: Registry,
    grabber: Box<dyn Grabber>,
    device: Box<dyn Device>,
    screenshots: Screenshots,
    stages: Stages,
    tick_interval: Duration,
    storage: TempDir,
}

impl Orchestrator {
    pub fn new(registry: Registry, platform: Platform, settings: &Settings) -> Result<Self> {
        if !registry.has_fallback() {
            warn!("rule set has no fallback stage, an unmatched screen will stop the loop");
        }
        let storage = tempfile::Builder::new()
            .prefix("stagehand-")
            .tempdir()
            .context("create screenshot directory")?;
        info!("Using directory {} as storage", storage.path().display());
        Ok(Self {
            registry,
            grabber: platform.grabber,
            device: platform.device,
            screenshots: Screenshots::new(settings.screenshots_to_keep),
            stages: Stages::new(settings.stages_to_keep),
            tick_interval: settings.tick_interval(),
            storage,
        })
    }

    pub fn screenshots(&self) -> &Screenshots {
        &self.screenshots
    }

    pub fn stages(&self) -> &Stages {
        &self.stages
    }

    pub fn storage(&self) -> &Path {
        self.storage.path()
    }

    /// Ask the capture collaborator for a new frame in the storage directory.
    fn grab_screenshot(&mut self) -> Option<PathBuf> {
        let started = Instant::now();
        debug!("Grabbing screenshot");
        let path = self.storage.path().join(format!("{}.png", Uuid::new_v4()));
        if let Err(e) = self.grabber.grab(&path) {
            warn!("Cannot grab screenshot {}: {:#}", path.display(), e);
            // a failed grab may still leave a partial file behind
            discard(&path);
            return None;
        }
        debug!("Screenshot {} ready in {:.3} seconds", path.display(), started.elapsed().as_secs_f64());
        Some(path)
    }

    /// Run one tick. Errors are fatal: the rule set failed to classify a frame.
    pub fn tick(&mut self) -> Result<Tick> {
        let started = Instant::now();

        let Some(path) = self.grab_screenshot() else {
            return Ok(Tick { outcome: Outcome::CaptureFailed, wait: self.tick_interval });
        };

        let image = match pixels::load_rgb(&path) {
            Ok(image) => image,
            Err(e) => {
                warn!("{:#}", e);
                discard(&path);
                return Ok(Tick {
                    outcome: Outcome::Undecodable,
                    wait: sleep::remaining(self.tick_interval, started.elapsed()),
                });
            }
        };
        self.screenshots.add(path, image);

        let stage = self.registry.classify(&self.screenshots, &self.stages)?;
        info!(stage = ?stage.kind, "Stage now is {}", stage);
        self.stages.add(stage.kind);
        let command = stage.command(&self.stages);
        command.execute(self.device.as_mut());

        Ok(Tick { outcome: Outcome::Recognized(stage.kind), wait: self.tick_interval })
    }

    /// Tick forever. Returns only on a fatal error.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let tick = self.tick()?;
            sleep::sleep_for(tick.wait);
        }
    }
}
