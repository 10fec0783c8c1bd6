//! Insertion line indicator.
//!
//! A single line drawn next to the reference element while dragging. The
//! controller is owned by the host editor and lent to each drag session.
//! Hiding is debounced so the line does not flicker when the pointer
//! briefly crosses a gap with no valid target; any `show` cancels a
//! pending hide.
//!
//! Time is passed in explicitly, so the controller has no timers of its
//! own. The host calls [`IndicatorController::tick`] from its frame loop.

use super::query::Bounds;
use super::{HorizontalSide, InsertionTarget, VerticalSide};
use crate::constants::{INDICATOR_HIDE_DELAY_MS, INDICATOR_THICKNESS};
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::trace;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineAxis {
    /// Drawn between siblings of a row container
    Vertical,
    /// Drawn between siblings of a column container
    Horizontal,
}

/// Geometry of the insertion line in host pixels
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct IndicatorLine {
    pub axis: LineAxis,
    pub x: f32,
    pub y: f32,
    pub length: f32,
    pub thickness: f32,
}

impl IndicatorLine {
    /// Line along the edge of `reference` the target's side points at
    pub fn for_target(target: &InsertionTarget, reference: &Bounds) -> Self {
        let half = INDICATOR_THICKNESS / 2.0;
        if target.is_container_horizontal {
            let edge = match target.side.horizontal {
                HorizontalSide::Left => reference.x,
                HorizontalSide::Right => reference.right(),
            };
            Self {
                axis: LineAxis::Vertical,
                x: edge - half,
                y: reference.y,
                length: reference.height,
                thickness: INDICATOR_THICKNESS,
            }
        } else {
            let edge = match target.side.vertical {
                VerticalSide::Top => reference.y,
                VerticalSide::Bottom => reference.bottom(),
            };
            Self {
                axis: LineAxis::Horizontal,
                x: reference.x,
                y: edge - half,
                length: reference.width,
                thickness: INDICATOR_THICKNESS,
            }
        }
    }
}

pub struct IndicatorController {
    /// Created on first show and reused afterwards
    line: Option<IndicatorLine>,
    visible: bool,
    hide_deadline: Option<Instant>,
    hide_delay: Duration,
}

impl Default for IndicatorController {
    fn default() -> Self {
        Self::new()
    }
}

impl IndicatorController {
    pub fn new() -> Self {
        Self::with_hide_delay(Duration::from_millis(INDICATOR_HIDE_DELAY_MS))
    }

    pub fn with_hide_delay(hide_delay: Duration) -> Self {
        Self {
            line: None,
            visible: false,
            hide_deadline: None,
            hide_delay,
        }
    }

    /// Position the line for `target` and show it, cancelling any pending hide
    pub fn show(&mut self, target: &InsertionTarget, reference: &Bounds) {
        self.hide_deadline = None;
        self.line = Some(IndicatorLine::for_target(target, reference));
        self.visible = true;
    }

    /// Schedule a hide after the debounce delay.
    ///
    /// A hide already pending keeps its original deadline, so a stream of
    /// misses hides the line once the delay has passed since the first miss.
    pub fn hide(&mut self, now: Instant) {
        if self.visible && self.hide_deadline.is_none() {
            self.hide_deadline = Some(now + self.hide_delay);
        }
    }

    /// Hide immediately, e.g. when the drag ends
    pub fn hide_now(&mut self) {
        self.hide_deadline = None;
        self.visible = false;
    }

    /// Apply an expired pending hide. Returns true if the line was hidden.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.hide_deadline {
            Some(deadline) if now >= deadline => {
                trace!("insertion indicator hidden");
                self.hide_now();
                true
            }
            _ => false,
        }
    }

    /// The line to draw, if visible
    pub fn line(&self) -> Option<&IndicatorLine> {
        self.line.as_ref().filter(|_| self.visible)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn has_pending_hide(&self) -> bool {
        self.hide_deadline.is_some()
    }
}
