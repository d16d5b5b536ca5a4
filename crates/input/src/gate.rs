//! Interval gating for commands sent to the playing field.
//!
//! Gravity fires one `SoftDrop` whenever the drop interval has elapsed. Player
//! commands are accepted at most once per move interval, so a held key (or a
//! terminal's auto-repeat) moves the piece at a steady pace.

use crate::types::{GameAction, DROP_INTERVAL_MS, MOVE_INTERVAL_MS};

#[derive(Debug, Clone)]
pub struct CommandGate {
    drop_interval_ms: u32,
    move_interval_ms: u32,
    since_drop_ms: u32,
    since_move_ms: u32,
}

impl CommandGate {
    pub fn new() -> Self {
        Self::with_intervals(DROP_INTERVAL_MS, MOVE_INTERVAL_MS)
    }

    pub fn with_intervals(drop_interval_ms: u32, move_interval_ms: u32) -> Self {
        Self {
            drop_interval_ms,
            move_interval_ms,
            since_drop_ms: 0,
            // The first player command is accepted right away.
            since_move_ms: move_interval_ms,
        }
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn move_interval_ms(&self) -> u32 {
        self.move_interval_ms
    }

    /// Advance both clocks. Returns the gravity tick when it is due.
    pub fn update(&mut self, elapsed_ms: u32) -> Option<GameAction> {
        self.since_drop_ms = self.since_drop_ms.saturating_add(elapsed_ms);
        self.since_move_ms = self.since_move_ms.saturating_add(elapsed_ms);

        if self.since_drop_ms >= self.drop_interval_ms {
            self.since_drop_ms = 0;
            return Some(GameAction::SoftDrop);
        }
        None
    }

    /// Decide whether a player command may go through now.
    ///
    /// A player soft drop also restarts the gravity clock so the piece does not
    /// fall two rows at once.
    pub fn accept(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::ToggleDebug => true,
            GameAction::MoveLeft
            | GameAction::MoveRight
            | GameAction::Rotate
            | GameAction::SoftDrop => {
                if self.since_move_ms < self.move_interval_ms {
                    return false;
                }
                self.since_move_ms = 0;
                if action == GameAction::SoftDrop {
                    self.since_drop_ms = 0;
                }
                true
            }
        }
    }

    pub fn reset(&mut self) {
        self.since_drop_ms = 0;
        self.since_move_ms = self.move_interval_ms;
    }
}

impl Default for CommandGate {
    fn default() -> Self {
        Self::new()
    }
}
