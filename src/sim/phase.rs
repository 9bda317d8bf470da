//! Two-slot phase state machine
//!
//! A phase change requested during a frame only lands at the start of the
//! next one, so the frame that triggered it is composed and drawn under the
//! phase it started in.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Gameplay phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// No phase yet (initial value; also the "nothing pending" marker)
    #[default]
    Empty,
    /// Idle float, waiting for the first press
    Setup,
    /// Active play
    Active,
    /// Run ended
    GameOver,
}

impl GamePhase {
    #[inline]
    pub fn is_empty(self) -> bool {
        self == GamePhase::Empty
    }

    /// Transitions the game allows
    pub fn can_transition_to(self, next: GamePhase) -> bool {
        matches!(
            (self, next),
            (GamePhase::Empty, GamePhase::Setup)
                | (GamePhase::Setup, GamePhase::Active)
                | (GamePhase::Active, GamePhase::GameOver)
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GamePhase::Empty => "none",
            GamePhase::Setup => "setup",
            GamePhase::Active => "active",
            GamePhase::GameOver => "gameover",
        }
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pure commit rule. Nothing happens when both slots are empty, or when a
/// phase is current and nothing is pending; otherwise pending becomes current.
pub fn transition(current: GamePhase, pending: GamePhase) -> (GamePhase, GamePhase) {
    let both_empty = current.is_empty() && pending.is_empty();
    let current_only = !current.is_empty() && pending.is_empty();

    if both_empty || current_only {
        (current, pending)
    } else {
        (pending, GamePhase::Empty)
    }
}

/// Current and pending phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PhaseSlots {
    current: GamePhase,
    pending: GamePhase,
}

impl PhaseSlots {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn current(&self) -> GamePhase {
        self.current
    }

    #[inline]
    pub fn pending(&self) -> GamePhase {
        self.pending
    }

    /// Queue `next` for the next commit. Requests the game does not allow
    /// from the current phase are dropped.
    pub fn request(&mut self, next: GamePhase) -> bool {
        if !self.current.can_transition_to(next) {
            log::warn!("ignoring phase request {} -> {}", self.current, next);
            return false;
        }
        self.pending = next;
        true
    }

    /// Apply the commit rule. Returns `(from, to)` when the phase changed.
    pub fn commit(&mut self) -> Option<(GamePhase, GamePhase)> {
        let from = self.current;
        let (current, pending) = transition(self.current, self.pending);
        self.current = current;
        self.pending = pending;
        (from != current).then_some((from, current))
    }
}
