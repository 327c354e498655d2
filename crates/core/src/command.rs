//! Side-effecting actions sent to the device.

use std::fmt;
use std::time::Duration;

use tracing::{debug, warn};

use crate::platform::Device;
use crate::sleep;
use crate::types::KEYCODE_POWER;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NoOp,
    /// Runs every sub-command in order, even after one of them failed.
    Batch(Vec<Command>),
    Click { x: u32, y: u32 },
    TogglePower,
    Wait(Duration),
    StartGame { package: String, activity: String },
    StopGame { package: String },
}

impl Command {
    pub fn batch(commands: impl IntoIterator<Item = Command>) -> Self {
        Command::Batch(commands.into_iter().collect())
    }

    pub fn click(x: u32, y: u32) -> Self {
        Command::Click { x, y }
    }

    pub fn wait_minutes(minutes: u64) -> Self {
        Command::Wait(Duration::from_secs(minutes * 60))
    }

    pub fn start_game(package: &str, activity: &str) -> Self {
        Command::StartGame { package: package.to_string(), activity: activity.to_string() }
    }

    pub fn stop_game(package: &str) -> Self {
        Command::StopGame { package: package.to_string() }
    }

    /// Execute against `device`. Transport failures are logged, never returned.
    pub fn execute(&self, device: &mut dyn Device) {
        let result = match self {
            Command::NoOp => {
                debug!("Doing nothing");
                Ok(())
            }
            Command::Batch(commands) => {
                for command in commands {
                    command.execute(device);
                }
                Ok(())
            }
            Command::Click { x, y } => {
                debug!("Clicking to ({}, {})", x, y);
                device.tap(*x, *y)
            }
            Command::TogglePower => {
                debug!("Toggling device power");
                device.key_event(KEYCODE_POWER)
            }
            Command::Wait(duration) => {
                debug!("Waiting for {:?}", duration);
                sleep::sleep_for(*duration);
                Ok(())
            }
            Command::StartGame { package, activity } => {
                debug!("Starting game");
                device.start_app(package, activity)
            }
            Command::StopGame { package } => {
                debug!("Stopping game");
                device.force_stop(package)
            }
        };
        if let Err(e) = result {
            warn!("device command {} failed: {:#}", self, e);
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::NoOp => write!(f, "NoOp"),
            Command::Batch(commands) => {
                write!(f, "Batch(")?;
                for (i, c) in commands.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", c)?;
                }
                write!(f, ")")
            }
            Command::Click { x, y } => write!(f, "Click({}, {})", x, y),
            Command::TogglePower => write!(f, "TogglePower"),
            Command::Wait(d) => write!(f, "Wait({}s)", d.as_secs()),
            Command::StartGame { package, activity } => write!(f, "StartGame({}/{})", package, activity),
            Command::StopGame { package } => write!(f, "StopGame({})", package),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use anyhow::{Result, bail};
    use std::sync::{Arc, Mutex};

    /// Records every device call; optionally fails taps.
    #[derive(Clone, Default)]
    pub(crate) struct RecordingDevice {
        pub calls: Arc<Mutex<Vec<String>>>,
        pub fail_taps: bool,
    }

    impl RecordingDevice {
        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }
    }

    impl Device for RecordingDevice {
        fn tap(&mut self, x: u32, y: u32) -> Result<()> {
            self.record(format!("tap {} {}", x, y));
            if self.fail_taps {
                bail!("device offline");
            }
            Ok(())
        }

        fn key_event(&mut self, code: u32) -> Result<()> {
            self.record(format!("keyevent {}", code));
            Ok(())
        }

        fn start_app(&mut self, package: &str, activity: &str) -> Result<()> {
            self.record(format!("start {}/{}", package, activity));
            Ok(())
        }

        fn force_stop(&mut self, package: &str) -> Result<()> {
            self.record(format!("force-stop {}", package));
            Ok(())
        }
    }

    #[test]
    fn primitives_map_to_device_calls() {
        let mut device = RecordingDevice::default();
        Command::click(10, 20).execute(&mut device);
        Command::TogglePower.execute(&mut device);
        Command::start_game("com.example", ".Main").execute(&mut device);
        Command::stop_game("com.example").execute(&mut device);
        Command::NoOp.execute(&mut device);
        assert_eq!(
            device.calls(),
            vec!["tap 10 20", "keyevent 26", "start com.example/.Main", "force-stop com.example"]
        );
    }

    #[test]
    fn batch_preserves_order_and_continues_after_failure() {
        let mut device = RecordingDevice { fail_taps: true, ..Default::default() };
        Command::batch([
            Command::click(1, 1),
            Command::stop_game("com.example"),
            Command::Wait(Duration::ZERO),
            Command::click(2, 2),
            Command::TogglePower,
        ])
        .execute(&mut device);
        assert_eq!(device.calls(), vec!["tap 1 1", "force-stop com.example", "tap 2 2", "keyevent 26"]);
    }

    #[test]
    fn display_is_readable() {
        let cmd = Command::batch([Command::TogglePower, Command::wait_minutes(30)]);
        assert_eq!(cmd.to_string(), "Batch(TogglePower, Wait(1800s))");
    }
}
