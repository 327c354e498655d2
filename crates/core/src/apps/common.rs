//! Stages every supported game shares: device screen off, launcher, stuck ads.

use anyhow::Result;

use crate::command::Command;
use crate::condition::Condition;
use crate::references::References;
use crate::stage::{Stage, StageKind};

pub const REFERENCE_KEYS: &[&str] = &[
    "common/power_off",
    "common/desktop",
    "common/ad",
    "common/ad_unity",
    "common/ad_unity_2",
];

/// Package and launch activity of the controlled game.
#[derive(Debug, Clone)]
pub struct Game {
    pub package: &'static str,
    pub activity: &'static str,
}

impl Game {
    pub fn start(&self) -> Command {
        Command::start_game(self.package, self.activity)
    }

    pub fn stop(&self) -> Command {
        Command::stop_game(self.package)
    }
}

/// Catch-all, registered last so classification always yields a stage.
pub fn unknown() -> Stage {
    Stage::new(StageKind::Unknown, Condition::True, Command::NoOp)
}

pub fn power_off(refs: &References) -> Result<Stage> {
    Ok(Stage::new(
        StageKind::PowerOff,
        Condition::similar(refs.get("common/power_off")?, 0, 0, 2560, 1600),
        Command::TogglePower,
    ))
}

pub fn desktop(refs: &References, game: &Game) -> Result<Stage> {
    Ok(Stage::new(
        StageKind::Desktop,
        Condition::similar(refs.get("common/desktop")?, 2470, 18, 82, 1570),
        game.start(),
    ))
}

/// Interstitial with a static close area; only a frozen frame counts.
pub fn unknown_ad(refs: &References, game: &Game) -> Result<Stage> {
    Ok(Stage::new(
        StageKind::UnknownAd,
        Condition::and([
            Condition::similar(refs.get("common/ad")?, 998, 1520, 568, 73),
            Condition::SameScreenshot,
        ]),
        game.start(),
    ))
}

pub fn unity_ad(refs: &References, game: &Game) -> Result<Stage> {
    Ok(Stage::new(
        StageKind::UnityAd,
        Condition::and([
            Condition::or([
                Condition::similar(refs.get("common/ad_unity")?, 2366, 636, 84, 302),
                Condition::similar(refs.get("common/ad_unity_2")?, 2388, 649, 74, 291),
            ]),
            Condition::SameScreenshot,
        ]),
        game.start(),
    ))
}
