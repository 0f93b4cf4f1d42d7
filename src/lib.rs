pub mod board;
pub mod feedback;
pub mod game_logic;
pub mod mock;
pub mod render;
pub mod rules;
pub mod session;

/// A discrete event from the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Mouse click at a pixel of the board window.
    Click { x: u32, y: u32 },
    /// The player closed the game.
    Quit,
}

/// Trait for receiving player input.
///
/// Abstracts over a windowing event queue and mock/scripted inputs,
/// providing a uniform interface for [`session::run_session`].
pub trait ClickSource {
    /// Error type for input read failures.
    type Error: std::fmt::Debug + std::fmt::Display;

    /// Next event, or `None` once the source is exhausted.
    fn next_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}

/// Trait for drawing the game to the player.
///
/// Abstracts over a pixel window and terminal rendering, providing a
/// uniform interface for the output side of the session loop. Mirrors
/// [`ClickSource`] on the input side.
pub trait BoardDisplay {
    /// Error type for display update failures.
    type Error: std::fmt::Debug + std::fmt::Display;

    /// Draw the board, side to move and selection highlights.
    ///
    /// Called only between clicks, never while one is being processed.
    fn show(
        &mut self,
        game: &game_logic::GameState,
        feedback: &feedback::BoardFeedback,
    ) -> Result<(), Self::Error>;
}

/// Settings for a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameConfig {
    pub geometry: render::BoardGeometry,
    pub rules: rules::Rules,
}
