//! Input policy handed to the interaction layer.

use std::time::Duration;

use serde::Serialize;

/// Delay before re-reading the viewport after an orientation change, giving
/// the platform time to report the rotated size.
pub const ORIENTATION_SETTLE_DELAY: Duration = Duration::from_millis(100);

/// How touch gestures on the canvas are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TouchPolicy {
    /// Suppress the platform's default action (scroll, zoom) on touch start.
    pub prevent_default_on_start: bool,
    /// Suppress the platform's default action on touch move.
    pub prevent_default_on_move: bool,
    /// Touch listeners must be registered as non-passive so the above can take effect.
    pub passive_listeners: bool,
}

impl Default for TouchPolicy {
    fn default() -> Self {
        Self {
            prevent_default_on_start: true,
            prevent_default_on_move: true,
            passive_listeners: false,
        }
    }
}
