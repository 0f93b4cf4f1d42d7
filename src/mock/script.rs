use std::collections::VecDeque;
use std::convert::Infallible;
use std::num::ParseIntError;

use thiserror::Error;

use crate::board::Position;
use crate::render::BoardGeometry;
use crate::{ClickSource, InputEvent};

/// Error when parsing a click script.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid click token: '{0}'")]
pub struct ParseError(String);

/// A scriptable click source.
///
/// Turns cell names into pixel clicks on the centre of the cell, the way a
/// player would hit them with the mouse. New script can be appended at any
/// time for interactive use.
#[derive(Debug, Clone)]
pub struct ScriptedClicks {
    geometry: BoardGeometry,
    pending: VecDeque<InputEvent>,
}

impl Default for ScriptedClicks {
    fn default() -> Self {
        Self::new(BoardGeometry::default())
    }
}

impl ScriptedClicks {
    pub fn new(geometry: BoardGeometry) -> Self {
        Self {
            geometry,
            pending: VecDeque::new(),
        }
    }

    /// Parse and queue additional script for execution.
    ///
    /// Format:
    /// - Cells are 2 characters (e.g., "e2", "a1"); "e2e4" is two clicks
    /// - `x,y` is a click on a raw pixel
    /// - `q` quits
    /// - Whitespace separates tokens
    ///
    /// Nothing is queued if any token is invalid.
    pub fn push_script(&mut self, script: &str) -> Result<(), ParseError> {
        let events = parse_script(script, &self.geometry)?;
        self.pending.extend(events);
        Ok(())
    }

    /// Queue a single click on the centre of `pos`.
    pub fn push_click(&mut self, pos: Position) {
        self.pending.push_back(click_on(&self.geometry, pos));
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Pop every pending event, calling the provided callback for each.
    pub fn drain<F>(&mut self, mut on_event: F)
    where
        F: FnMut(InputEvent),
    {
        while let Some(event) = self.pending.pop_front() {
            on_event(event);
        }
    }
}

impl ClickSource for ScriptedClicks {
    type Error = Infallible;

    fn next_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        Ok(self.pending.pop_front())
    }
}

fn click_on(geometry: &BoardGeometry, pos: Position) -> InputEvent {
    let (x, y) = geometry.cell_center(pos);
    InputEvent::Click { x, y }
}

fn parse_script(script: &str, geometry: &BoardGeometry) -> Result<Vec<InputEvent>, ParseError> {
    let mut events = Vec::new();
    for token in script.split_whitespace() {
        if token == "q" {
            events.push(InputEvent::Quit);
        } else if let Some((x, y)) = token.split_once(',') {
            events.push(parse_pixel(token, x, y)?);
        } else {
            parse_cells(token, geometry, &mut events)?;
        }
    }
    Ok(events)
}

fn parse_pixel(token: &str, x: &str, y: &str) -> Result<InputEvent, ParseError> {
    let invalid = |_: ParseIntError| ParseError(token.to_string());
    Ok(InputEvent::Click {
        x: x.parse::<u32>().map_err(invalid)?,
        y: y.parse::<u32>().map_err(invalid)?,
    })
}

/// Squares are exactly 2 characters, so a run like "e2e4" is split in pairs.
fn parse_cells(
    token: &str,
    geometry: &BoardGeometry,
    events: &mut Vec<InputEvent>,
) -> Result<(), ParseError> {
    let chars: Vec<char> = token.chars().collect();
    for pair in chars.chunks(2) {
        let name: String = pair.iter().collect();
        let pos: Position = name.parse().map_err(|_| ParseError(name.clone()))?;
        events.push(click_on(geometry, pos));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(name: &str) -> InputEvent {
        click_on(
            &BoardGeometry::default(),
            name.parse().expect("valid square name"),
        )
    }

    fn collect(clicks: &mut ScriptedClicks) -> Vec<InputEvent> {
        let mut events = Vec::new();
        clicks.drain(|event| events.push(event));
        events
    }

    #[test]
    fn test_cells_become_centre_clicks() {
        let mut clicks = ScriptedClicks::default();
        clicks.push_script("e2 e4").unwrap();

        assert_eq!(
            collect(&mut clicks),
            vec![
                InputEvent::Click { x: 279, y: 403 },
                InputEvent::Click { x: 279, y: 279 },
            ]
        );
    }

    #[test]
    fn test_joined_cells_split_in_pairs() {
        let mut clicks = ScriptedClicks::default();
        clicks.push_script("e2e4  g1f3").unwrap();

        assert_eq!(
            collect(&mut clicks),
            vec![cell("e2"), cell("e4"), cell("g1"), cell("f3")]
        );
    }

    #[test]
    fn test_pixels_and_quit() {
        let mut clicks = ScriptedClicks::default();
        clicks.push_script("497,12 q").unwrap();

        assert_eq!(clicks.next_event(), Ok(Some(InputEvent::Click { x: 497, y: 12 })));
        assert_eq!(clicks.next_event(), Ok(Some(InputEvent::Quit)));
        assert_eq!(clicks.next_event(), Ok(None));
    }

    #[test]
    fn test_parse_error_invalid_square() {
        let mut clicks = ScriptedClicks::default();
        let result = clicks.push_script("e2  zz");
        assert_eq!(result, Err(ParseError("zz".to_string())));
    }

    #[test]
    fn test_parse_error_invalid_pixel() {
        let mut clicks = ScriptedClicks::default();
        let result = clicks.push_script("12,-4");
        assert_eq!(result, Err(ParseError("12,-4".to_string())));
    }

    #[test]
    fn test_parse_error_does_not_modify_state() {
        let mut clicks = ScriptedClicks::default();

        clicks.push_script("e2").unwrap();

        // Invalid script should fail without queueing its valid prefix
        let result = clicks.push_script("e4 xx");
        assert!(result.is_err());

        assert_eq!(collect(&mut clicks), vec![cell("e2")]);
        assert!(clicks.is_empty());
    }
}
