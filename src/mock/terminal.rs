use std::io::{self, Write};

use super::TerminalDisplay;
use crate::board::Position;
use crate::feedback::compute_feedback;
use crate::game_logic::{ClickOutcome, GameState};
use crate::rules::Rules;
use crate::{BoardDisplay, GameConfig};

/// Clears the screen and moves cursor to top-left.
#[inline]
fn clear_screen() {
    print!("\x1B[2J\x1B[H");
}

/// Runs an interactive terminal game.
///
/// Cells are clicked by name (`c e2`) or by window pixel (`px 250 400`),
/// the latter going through the same geometry a mouse front end would use.
pub fn run_interactive_terminal(config: GameConfig) {
    let mut display = TerminalDisplay::new();
    let mut game = GameState::with_rules(config.rules);

    draw_interface(&mut display, &game, None);

    loop {
        print!("> ");
        if let Err(e) = io::stdout().flush() {
            log::error!("failed to flush stdout: {e}");
            break;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                log::error!("failed to read input: {e}");
                break;
            }
        }

        let parts: Vec<&str> = input.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "c" => {
                if parts.len() < 2 {
                    println!("Usage: c <cell> [<cell>...]");
                    continue;
                }
                let mut last = None;
                for name in &parts[1..] {
                    match name.parse::<Position>() {
                        Ok(pos) => last = Some(game.click(pos)),
                        Err(e) => {
                            println!("Invalid cell '{name}': {e}");
                            break;
                        }
                    }
                }
                draw_interface(&mut display, &game, last);
            }
            "px" => {
                let coords = (
                    parts.get(1).and_then(|x| x.parse::<u32>().ok()),
                    parts.get(2).and_then(|y| y.parse::<u32>().ok()),
                );
                let (Some(x), Some(y)) = coords else {
                    println!("Usage: px <x> <y>");
                    continue;
                };
                match config.geometry.cell_at(x, y) {
                    Ok(pos) => {
                        let outcome = game.click(pos);
                        draw_interface(&mut display, &game, Some(outcome));
                    }
                    Err(e) => println!("Ignored: {e}"),
                }
            }
            "rules" => {
                let rules = match parts.get(1) {
                    Some(&"strict") => Rules::strict(),
                    Some(&"classic") => Rules::classic(),
                    _ => {
                        println!("Usage: rules strict|classic");
                        continue;
                    }
                };
                game.set_rules(rules);
                draw_interface(&mut display, &game, None);
                println!("\nRules: {rules:?}");
            }
            "r" => {
                game = GameState::with_rules(game.rules());
                draw_interface(&mut display, &game, None);
                println!("\n🔄 Reset to initial position");
            }
            "p" => draw_interface(&mut display, &game, None),
            "q" => break,
            _ => println!("Unknown command"),
        }
    }
}

/// Draws the complete interface: help text, board, and last click result.
fn draw_interface(display: &mut TerminalDisplay, game: &GameState, last: Option<ClickOutcome>) {
    clear_screen();
    println!("♟️  Click Chess");
    println!();
    println!("Commands: c <cell>... | px <x> <y> | rules strict|classic | r (reset) | p (refresh) | q (quit)");
    println!();

    if let Err(e) = display.show(game, &compute_feedback(game)) {
        log::error!("{e}");
    }

    if let Some(outcome) = last {
        println!("{}", describe(outcome));
    }
}

fn describe(outcome: ClickOutcome) -> String {
    match outcome {
        ClickOutcome::Ignored => "Nothing to select there".to_string(),
        ClickOutcome::Selected(pos) => format!("Selected {pos}"),
        ClickOutcome::Moved {
            from,
            to,
            captured: None,
        } => format!("✅ {from} -> {to}"),
        ClickOutcome::Moved {
            from,
            to,
            captured: Some(piece),
        } => format!("✅ {from} -> {to}, took {} {:?}", piece.color, piece.kind),
        ClickOutcome::Rejected { from, to } => format!("❌ {from} -> {to} is not allowed"),
    }
}
