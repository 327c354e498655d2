//! Predicates deciding whether a stage applies to the current capture history.

use std::fmt;
use std::sync::Arc;

use image::RgbImage;

use crate::history::{Screenshots, Stages};
use crate::pixels;
use crate::types::Rect;

/// Pure predicate over the screenshot and stage histories.
///
/// Comparison variants answer `false` when the history they need is missing,
/// so conditions are safe to evaluate from the very first tick.
#[derive(Clone)]
pub enum Condition {
    /// Always met; used by the fallback stage.
    True,
    Not(Box<Condition>),
    /// Met when every sub-condition is met, checked in order.
    And(Vec<Condition>),
    /// Met when any sub-condition is met, checked in order.
    Or(Vec<Condition>),
    /// The latest frame equals `reference` inside `rect`.
    Similar { reference: Arc<RgbImage>, rect: Rect },
    /// The two latest frames are pixel-identical (a frozen display).
    SameScreenshot,
}

impl Condition {
    pub fn not(condition: Condition) -> Self {
        Condition::Not(Box::new(condition))
    }

    pub fn and(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Condition::And(conditions.into_iter().collect())
    }

    pub fn or(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Condition::Or(conditions.into_iter().collect())
    }

    pub fn similar(reference: Arc<RgbImage>, left: u32, top: u32, width: u32, height: u32) -> Self {
        Condition::Similar { reference, rect: Rect::new(left, top, width, height) }
    }

    pub fn is_met(&self, screenshots: &Screenshots, stages: &Stages) -> bool {
        match self {
            Condition::True => true,
            Condition::Not(c) => !c.is_met(screenshots, stages),
            Condition::And(cs) => cs.iter().all(|c| c.is_met(screenshots, stages)),
            Condition::Or(cs) => cs.iter().any(|c| c.is_met(screenshots, stages)),
            Condition::Similar { reference, rect } => match screenshots.last() {
                Some(last) => pixels::region_matches(last, reference, *rect),
                None => false,
            },
            Condition::SameScreenshot => match (screenshots.last(), screenshots.previous()) {
                (Some(last), Some(previous)) => pixels::frames_identical(last, previous),
                _ => false,
            },
        }
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::True => write!(f, "True"),
            Condition::Not(c) => f.debug_tuple("Not").field(c).finish(),
            Condition::And(cs) => f.debug_tuple("And").field(cs).finish(),
            Condition::Or(cs) => f.debug_tuple("Or").field(cs).finish(),
            Condition::Similar { reference, rect } => write!(
                f,
                "Similar({}x{} @ {},{} {}x{})",
                reference.width(),
                reference.height(),
                rect.left,
                rect.top,
                rect.width,
                rect.height
            ),
            Condition::SameScreenshot => write!(f, "SameScreenshot"),
        }
    }
}
