use anyhow::{Result, bail};

use crate::history::{Screenshots, Stages};
use crate::stage::Stage;

/// Ordered stage rules. Order is priority: the first met condition wins,
/// so specific screens go first and the always-true fallback goes last.
#[derive(Debug, Clone)]
pub struct Registry {
    stages: Vec<Stage>,
}

impl Registry {
    pub fn new(stages: Vec<Stage>) -> Self {
        Self { stages }
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Whether classification is guaranteed to produce a stage.
    pub fn has_fallback(&self) -> bool {
        self.stages.iter().any(Stage::is_fallback)
    }

    /// First stage whose condition is met. No match means the rule set is
    /// incomplete, which is a configuration error.
    pub fn classify(&self, screenshots: &Screenshots, stages: &Stages) -> Result<&Stage> {
        match self.stages.iter().find(|s| s.condition.is_met(screenshots, stages)) {
            Some(stage) => Ok(stage),
            None => bail!("stage not defined: none of {} stage(s) matched", self.stages.len()),
        }
    }
}
