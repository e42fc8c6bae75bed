use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Start,
    /// Mask plus `shown` revealed pieces on screen.
    Playing { shown: usize },
    Revealed,
}

impl SessionState {
    pub const fn is_start(self) -> bool {
        matches!(self, Self::Start)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Revealed)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::Start
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Revealed => true,
        }
    }
}

/// One round of the game, stepping through a precomputed frame sequence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GameSessionRepr")]
pub struct GameSession {
    frames: FrameSequence,
    state: SessionState,
}

#[derive(Deserialize)]
struct GameSessionRepr {
    frames: FrameSequence,
    state: SessionState,
}

impl TryFrom<GameSessionRepr> for GameSession {
    type Error = GameError;

    fn try_from(repr: GameSessionRepr) -> Result<Self> {
        let GameSessionRepr { frames, state } = repr;
        if let SessionState::Playing { shown } = state
            && shown > frames.reveal_count().get()
        {
            return Err(GameError::InvalidSessionState);
        }
        Ok(Self { frames, state })
    }
}

impl GameSession {
    pub fn new(frames: FrameSequence) -> Self {
        Self {
            frames,
            state: Default::default(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn frames(&self) -> &FrameSequence {
        &self.frames
    }

    pub fn reveal_count(&self) -> RevealCount {
        self.frames.reveal_count()
    }

    /// Frame to put on screen, nothing before the game starts.
    pub fn current_frame(&self) -> Option<&Raster> {
        match self.state {
            SessionState::Start => None,
            SessionState::Playing { shown } => self.frames.revealed(shown),
            SessionState::Revealed => Some(self.frames.original()),
        }
    }

    pub fn pieces_left(&self) -> usize {
        let total = self.reveal_count().get();
        match self.state {
            SessionState::Start => total,
            SessionState::Playing { shown } => total - shown,
            SessionState::Revealed => 0,
        }
    }

    pub fn can_reveal(&self) -> bool {
        matches!(self.state, SessionState::Playing { .. }) && self.pieces_left() > 0
    }

    pub fn start(&mut self) -> Result<()> {
        if !self.state.is_start() {
            return Err(GameError::InvalidTransition);
        }
        self.state = SessionState::Playing { shown: 0 };
        log::debug!("Game started, {} pieces to reveal", self.pieces_left());
        Ok(())
    }

    pub fn reveal_piece(&mut self) -> Result<RevealOutcome> {
        let SessionState::Playing { shown } = self.state else {
            return Err(GameError::InvalidTransition);
        };

        if shown >= self.reveal_count().get() {
            return Ok(RevealOutcome::NoChange);
        }

        self.state = SessionState::Playing { shown: shown + 1 };
        log::debug!("Revealed piece {} of {}", shown + 1, self.reveal_count());
        Ok(RevealOutcome::Revealed)
    }

    pub fn show_answer(&mut self) -> Result<()> {
        match self.state {
            SessionState::Start => Err(GameError::InvalidTransition),
            SessionState::Playing { shown } => {
                log::debug!("Answer shown after {shown} pieces");
                self.state = SessionState::Revealed;
                Ok(())
            }
            SessionState::Revealed => Ok(()),
        }
    }
}
