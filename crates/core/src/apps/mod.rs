//! Per-application rule sets: which screens exist and what to do on each.

pub mod common;
pub mod ic;
pub mod mlp;

use anyhow::{Result, bail};

use crate::references::References;
use crate::registry::Registry;

/// Names accepted by [`build`].
pub const NAMES: &[&str] = &[ic::NAME, mlp::NAME];

/// Build the registry for the rule set called `name`.
pub fn build(name: &str, refs: &References) -> Result<Registry> {
    let stages = match name {
        ic::NAME => ic::stages(refs)?,
        mlp::NAME => mlp::stages(refs)?,
        _ => bail!("unknown rule set \"{}\" (expected one of: {})", name, NAMES.join(", ")),
    };
    Ok(Registry::new(stages))
}
