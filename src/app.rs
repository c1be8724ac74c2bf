use std::process::exit;
use std::sync::mpsc::{self, Sender};
use std::thread::sleep;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::style::Color;

use crate::game::{Game, RunState, Ruleset, Snapshot};
use crate::runtime::{self, Command};
use crate::snake::Direction::{self, *};
use crate::term::{Palette, Screen};

const POLL_INTERVAL_MS: u64 = 5;

/// Drives rounds of one variant until the player quits with CTRL+C.
/// This is the UI side: it forwards key presses to the tick thread and
/// renders the snapshots coming back.
pub fn run(rules: Ruleset, palette: Palette) {
    let mut screen = Screen::new();
    screen.setup();
    show_intro(&mut screen);

    loop {
        play_round(&rules, &palette, &mut screen);

        // Quit if the user CTRL+C's after the game
        if is_ctrl_c(&screen.read_key_blocking()) {
            break;
        }
    }

    screen.restore();
}

fn play_round(rules: &Ruleset, palette: &Palette, screen: &mut Screen) {
    screen.clear();
    screen.draw_border(rules.title);

    let game = Game::new(rules.clone());
    screen.draw_frame(&game.snapshot(), palette);

    let (cmd_tx, cmd_rx) = mpsc::channel();
    let (frame_tx, frame_rx) = mpsc::channel();
    runtime::spawn(game, cmd_rx, frame_tx);

    let mut paused = false;

    loop {
        sleep(Duration::from_millis(POLL_INTERVAL_MS));

        for ev in screen.read_key_events_queue() {
            if is_ctrl_c(&ev) {
                screen.restore();
                exit(0);
            }

            match ev.code {
                KeyCode::Char('w') | KeyCode::Up => send_turn(&cmd_tx, Up),
                KeyCode::Char('a') | KeyCode::Left => send_turn(&cmd_tx, Left),
                KeyCode::Char('s') | KeyCode::Down => send_turn(&cmd_tx, Down),
                KeyCode::Char('d') | KeyCode::Right => send_turn(&cmd_tx, Right),
                KeyCode::Esc => {
                    paused = !paused;
                    let _ = cmd_tx.send(Command::TogglePause);
                    if paused {
                        screen.show_banner(
                            &["Paused", "", "Press Esc to resume,", "or CTRL+C to quit."],
                            Color::White,
                        );
                    }
                }
                _ => {}
            }
        }

        // Only the newest snapshot is worth drawing
        if let Some(snap) = frame_rx.try_iter().last() {
            match snap.state {
                RunState::Running => {
                    if !paused {
                        screen.draw_frame(&snap, palette);
                    }
                }
                RunState::Lost => {
                    show_end_screen(screen, &snap, false);
                    return;
                }
                RunState::Won => {
                    show_end_screen(screen, &snap, true);
                    return;
                }
            }
        }
    }
}

fn show_intro(screen: &mut Screen) {
    screen.clear();
    screen.show_banner(
        &[
            "Arrow keys or WASD to move",
            "Esc to pause",
            "CTRL+C to quit",
            "",
            "Press any key to begin",
        ],
        Color::White,
    );

    if is_ctrl_c(&screen.read_key_blocking()) {
        screen.restore();
        exit(0);
    }
}

fn show_end_screen(screen: &mut Screen, snap: &Snapshot, win: bool) {
    let headline = if win { "YOU WIN!" } else { "GAME OVER" };
    let color = if win { Color::Green } else { Color::Red };
    let score = format!("Score: {}", snap.food_eaten);

    screen.show_banner(
        &[
            headline,
            &score,
            "",
            "Press any key to play again,",
            "or CTRL+C to quit.",
        ],
        color,
    );
}

fn send_turn(tx: &Sender<Command>, dir: Direction) {
    let _ = tx.send(Command::Turn(dir));
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
