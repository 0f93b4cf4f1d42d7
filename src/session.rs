use thiserror::Error;

use crate::feedback::compute_feedback;
use crate::game_logic::GameState;
use crate::render::BoardGeometry;
use crate::{BoardDisplay, ClickSource, InputEvent};

/// Failure of one of the collaborators driving a session.
#[derive(Debug, Error)]
pub enum SessionError<I, D> {
    #[error("input source failed: {0}")]
    Input(I),
    #[error("display failed: {0}")]
    Display(D),
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    InputExhausted,
}

/// Feeds every event from `input` into `game`, redrawing after each one.
///
/// The initial board is drawn before the first event is read. Clicks outside
/// the board are dropped. Returns when the player quits or `input` runs dry.
pub fn run_session<S, D>(
    game: &mut GameState,
    geometry: &BoardGeometry,
    input: &mut S,
    display: &mut D,
) -> Result<SessionEnd, SessionError<S::Error, D::Error>>
where
    S: ClickSource,
    D: BoardDisplay,
{
    log::info!(
        "session started: {} px board, {:?}",
        geometry.width(),
        game.rules()
    );
    redraw(game, display).map_err(SessionError::<S::Error, D::Error>::Display)?;

    loop {
        let event = input
            .next_event()
            .map_err(SessionError::<S::Error, D::Error>::Input)?;
        match event {
            None => {
                log::info!("session ended: input exhausted");
                return Ok(SessionEnd::InputExhausted);
            }
            Some(InputEvent::Quit) => {
                log::info!("session ended: quit");
                return Ok(SessionEnd::Quit);
            }
            Some(InputEvent::Click { x, y }) => match geometry.cell_at(x, y) {
                Ok(pos) => {
                    game.click(pos);
                    redraw(game, display).map_err(SessionError::<S::Error, D::Error>::Display)?;
                }
                Err(e) => log::warn!("dropping click: {e}"),
            },
        }
    }
}

fn redraw<D: BoardDisplay>(game: &GameState, display: &mut D) -> Result<(), D::Error> {
    display.show(game, &compute_feedback(game))
}
