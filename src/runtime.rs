use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use rand::Rng;

use crate::game::{Game, RunState, Snapshot};
use crate::snake::Direction;

/// Messages from the input context to the tick thread.
pub enum Command {
    Turn(Direction),
    TogglePause,
}

/// Runs the fixed-cadence tick loop on a dedicated thread. Every loop
/// iteration sleeps the variant's delay, drains the commands that arrived
/// since the last tick (the latest valid turn wins), performs one tick and
/// publishes a snapshot. The thread stops itself once the game leaves the
/// running state, or when the snapshot receiver hangs up.
pub fn spawn<R: Rng + Send + 'static>(
    mut game: Game<R>,
    commands: Receiver<Command>,
    frames: Sender<Snapshot>,
) -> JoinHandle<()> {
    let delay = game.tick_delay();

    thread::spawn(move || {
        let mut paused = false;

        loop {
            thread::sleep(delay);

            for cmd in commands.try_iter() {
                match cmd {
                    Command::Turn(dir) => game.apply_direction(dir),
                    Command::TogglePause => paused = !paused,
                }
            }

            if paused {
                continue;
            }

            game.tick();

            if frames.send(game.snapshot()).is_err() {
                break; // the display side is gone
            }

            if game.state() != RunState::Running {
                break;
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{FoodPolicy, Ruleset};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::sync::mpsc;
    use std::time::Duration;

    fn wall_bound_rules() -> Ruleset {
        Ruleset {
            title: "test",
            policy: FoodPolicy::Grow,
            tick_delay: Duration::from_millis(1),
            start: (0, 0),
            start_len: 1,
            start_heading: Direction::Right,
        }
    }

    #[test]
    fn tick_thread_stops_at_the_wall() {
        let game = Game::new_with_rng(wall_bound_rules(), SmallRng::seed_from_u64(7));
        let (_cmd_tx, cmd_rx) = mpsc::channel();
        let (frame_tx, frame_rx) = mpsc::channel();
        let handle = spawn(game, cmd_rx, frame_tx);

        let mut last = None;
        while let Ok(snap) = frame_rx.recv_timeout(Duration::from_secs(5)) {
            last = Some(snap);
        }

        let last = last.expect("no snapshots received");
        assert_eq!(last.state, RunState::Lost);
        assert!(handle.join().is_ok());
    }

    #[test]
    fn tick_thread_exits_when_the_display_hangs_up() {
        let game = Game::new_with_rng(wall_bound_rules(), SmallRng::seed_from_u64(7));
        let (_cmd_tx, cmd_rx) = mpsc::channel();
        let (frame_tx, frame_rx) = mpsc::channel();
        let handle = spawn(game, cmd_rx, frame_tx);

        drop(frame_rx);
        assert!(handle.join().is_ok());
    }
}
