//! My Little Planet.

use anyhow::Result;

use super::common::{self, Game};
use crate::command::Command;
use crate::condition::Condition;
use crate::references::References;
use crate::stage::{Stage, StageKind};

pub const NAME: &str = "mlp";

pub const GAME: Game = Game {
    package: "com.nevosoft.mylittleplanet",
    activity: ".Main",
};

pub const REFERENCE_KEYS: &[&str] = &[
    "mlp/next_episode",
    "mlp/interactive_ad",
    "mlp/another_ad",
    "mlp/another_ad_rotated",
];

pub fn stages(refs: &References) -> Result<Vec<Stage>> {
    let interactive_ad = refs.get("mlp/interactive_ad")?;
    Ok(vec![
        Stage::new(
            StageKind::NextEpisode,
            Condition::similar(refs.get("mlp/next_episode")?, 850, 478, 318, 624),
            Command::click(640, 1530),
        ),
        Stage::new(
            StageKind::InteractiveAd,
            Condition::and([
                Condition::similar(interactive_ad.clone(), 45, 45, 6, 6),
                Condition::similar(interactive_ad, 2399, 1533, 7, 10),
            ]),
            Command::click(1552, 48),
        ),
        Stage::new(
            StageKind::AnotherAd,
            Condition::and([
                Condition::or([
                    Condition::similar(refs.get("mlp/another_ad")?, 146, 636, 80, 294),
                    Condition::similar(refs.get("mlp/another_ad_rotated")?, 2332, 674, 84, 284),
                ]),
                Condition::SameScreenshot,
            ]),
            Command::click(1500, 90),
        ),
        common::unity_ad(refs, &GAME)?,
        common::unknown(),
    ])
}
