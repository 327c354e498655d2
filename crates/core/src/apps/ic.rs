//! Indiana Cat.

use anyhow::Result;

use super::common::{self, Game};
use crate::command::Command;
use crate::condition::Condition;
use crate::references::References;
use crate::stage::{Reaction, Stage, StageKind};

pub const NAME: &str = "ic";

pub const GAME: Game = Game {
    package: "com.playflock.indianacat",
    activity: "unity.pfplugins.com.activitybridge.UnityActivityOverrider",
};

pub const REFERENCE_KEYS: &[&str] = &[
    "ic/daily_bonus",
    "ic/daily_reward",
    "ic/start_bonus",
    "ic/start",
    "ic/bonus",
    "ic/bonus_reward",
    "ic/big_luck",
    "ic/bank",
    "ic/bank_no_button",
    "ic/offline",
    "ic/video_not_available",
];

/// Power off, wait for the bank to refill, come back.
fn sleep_device(minutes: u64) -> Command {
    Command::batch([Command::TogglePower, Command::wait_minutes(minutes)])
}

fn quit_and_sleep(minutes: u64) -> Command {
    Command::batch([GAME.stop(), Command::TogglePower, Command::wait_minutes(minutes)])
}

fn bank_with_button(refs: &References) -> Result<Condition> {
    Ok(Condition::similar(refs.get("ic/bank")?, 1806, 130, 286, 1336))
}

fn start_bonus_visible(refs: &References) -> Result<Condition> {
    Ok(Condition::similar(refs.get("ic/start_bonus")?, 503, 1363, 31, 112))
}

fn friend_badge(refs: &References) -> Result<Condition> {
    Ok(Condition::similar(refs.get("ic/daily_bonus")?, 2432, 1193, 82, 82))
}

fn daily_bonus_banner(refs: &References) -> Result<Condition> {
    Ok(Condition::similar(refs.get("ic/daily_bonus")?, 800, 1060, 1030, 108))
}

pub fn stages(refs: &References) -> Result<Vec<Stage>> {
    Ok(vec![
        common::power_off(refs)?,
        common::desktop(refs, &GAME)?,
        Stage::new(
            StageKind::DailyBonus,
            Condition::and([daily_bonus_banner(refs)?, friend_badge(refs)?]),
            Command::click(365, 2474),
        ),
        Stage::new(
            StageKind::DailyBonusNotForFriend,
            Condition::and([daily_bonus_banner(refs)?, Condition::not(friend_badge(refs)?)]),
            Command::click(1142, 2433),
        ),
        Stage::new(
            StageKind::DailyReward,
            Condition::similar(refs.get("ic/daily_reward")?, 814, 478, 104, 654),
            Command::click(774, 1624),
        ),
        Stage::new(StageKind::StartBonus, start_bonus_visible(refs)?, Command::click(131, 405)),
        Stage::new(
            StageKind::Start,
            Condition::and([
                Condition::similar(refs.get("ic/start")?, 62, 929, 84, 84),
                Condition::not(start_bonus_visible(refs)?),
            ]),
            Command::click(630, 120),
        ),
        Stage::new(
            StageKind::Bonus,
            Condition::similar(refs.get("ic/bonus")?, 48, 280, 188, 1294),
            Command::click(800, 2362),
        ),
        Stage::new(
            StageKind::BonusReward,
            Condition::similar(refs.get("ic/bonus_reward")?, 898, 306, 114, 1000),
            Command::click(784, 1538),
        ),
        Stage::new(
            StageKind::BigLuck,
            Condition::similar(refs.get("ic/big_luck")?, 1012, 222, 662, 808),
            Command::click(1414, 400),
        ),
        Stage::new(StageKind::Bank, bank_with_button(refs)?, Command::click(800, 1900)),
        // must stay after Bank: the timer is only shown once the button is gone
        Stage::with_reaction(
            StageKind::BankTimer,
            Condition::and([
                Condition::similar(refs.get("ic/bank")?, 386, 64, 144, 1472),
                Condition::not(bank_with_button(refs)?),
            ]),
            Reaction::AfterPrevious {
                cases: vec![
                    (vec![StageKind::UnknownAd, StageKind::UnityAd], sleep_device(30)),
                    (vec![StageKind::Start], sleep_device(10)),
                ],
                otherwise: Command::click(1478, 446),
            },
        ),
        Stage::new(
            StageKind::BankNoButton,
            Condition::similar(refs.get("ic/bank_no_button")?, 592, 62, 154, 1470),
            quit_and_sleep(10),
        ),
        Stage::new(
            StageKind::Offline,
            Condition::similar(refs.get("ic/offline")?, 1031, 327, 355, 948),
            Command::click(800, 1430),
        ),
        Stage::new(
            StageKind::VideoNotAvailable,
            Condition::similar(refs.get("ic/video_not_available")?, 1031, 327, 355, 948),
            quit_and_sleep(10),
        ),
        common::unknown_ad(refs, &GAME)?,
        common::unity_ad(refs, &GAME)?,
        common::unknown(),
    ])
}
