use std::fmt;

use crate::command::Command;
use crate::condition::Condition;
use crate::history::Stages;

/// Every recognisable screen across the supported applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageKind {
    // shared by every rule set
    Unknown,
    PowerOff,
    Desktop,
    UnknownAd,
    UnityAd,
    // Indiana Cat
    DailyBonus,
    DailyBonusNotForFriend,
    DailyReward,
    StartBonus,
    Start,
    Bonus,
    BonusReward,
    BigLuck,
    Bank,
    BankTimer,
    BankNoButton,
    Offline,
    VideoNotAvailable,
    // My Little Planet
    NextEpisode,
    InteractiveAd,
    AnotherAd,
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}Stage()", self)
    }
}

/// How a recognised stage picks its command, given the stage history
/// (which already holds the stage itself at index 0).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reaction {
    Always(Command),
    /// First case whose kinds contain the previously recognised stage wins.
    AfterPrevious {
        cases: Vec<(Vec<StageKind>, Command)>,
        otherwise: Command,
    },
}

impl Reaction {
    pub fn command(&self, stages: &Stages) -> Command {
        match self {
            Reaction::Always(command) => command.clone(),
            Reaction::AfterPrevious { cases, otherwise } => {
                let previous = stages.previous();
                cases
                    .iter()
                    .find(|(kinds, _)| previous.is_some_and(|p| kinds.contains(&p)))
                    .map(|(_, command)| command.clone())
                    .unwrap_or_else(|| otherwise.clone())
            }
        }
    }
}

/// A labelled (condition, reaction) rule.
#[derive(Debug, Clone)]
pub struct Stage {
    pub kind: StageKind,
    pub condition: Condition,
    pub reaction: Reaction,
}

impl Stage {
    pub fn new(kind: StageKind, condition: Condition, command: Command) -> Self {
        Self { kind, condition, reaction: Reaction::Always(command) }
    }

    pub fn with_reaction(kind: StageKind, condition: Condition, reaction: Reaction) -> Self {
        Self { kind, condition, reaction }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.condition, Condition::True)
    }

    pub fn command(&self, stages: &Stages) -> Command {
        self.reaction.command(stages)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}
