use std::io::{stdout, Stdout, Write};
use std::process::exit;
use std::time::Duration;

use crossterm::event::{poll, read, Event, KeyEvent};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, terminal};

use crate::game::Snapshot;
use crate::grid::{COLS, ROWS, UNIT_SIZE};
use crate::snake::Direction;
use crate::Cell;

const BODY_CHAR: char = '█';
const FOOD_CHAR: char = 'O';

/// Per-variant colors for the cells on the board.
pub struct Palette {
    pub head: Color,
    pub body: Color,
    pub food: Color,
}

/// Terminal display for the board: one character per grid cell, inside a
/// one-character border. Pure projection of snapshots, holds no game state.
pub struct Screen {
    stdout: Stdout,
}

impl Screen {
    pub fn new() -> Self {
        Screen { stdout: stdout() }
    }

    pub fn setup(&mut self) {
        let (w, h) = terminal::size().expect("Error reading size.");
        if (w as i32) < COLS + 2 || (h as i32) < ROWS + 2 {
            eprintln!(
                "Terminal too small: at least {}x{} characters are needed.",
                COLS + 2,
                ROWS + 2
            );
            exit(1);
        }

        execute!(self.stdout, EnterAlternateScreen).expect("Error entering alt screen");
        terminal::enable_raw_mode().expect("Error enabling raw mode.");
        execute!(self.stdout, cursor::Hide).expect("Error hiding cursor.");
    }

    pub fn restore(&mut self) {
        execute!(self.stdout, cursor::Show).expect("Error showing cursor.");
        terminal::disable_raw_mode().expect("Error disabling raw mode.");
        execute!(self.stdout, LeaveAlternateScreen).expect("Error leaving alt screen");
    }

    pub fn clear(&mut self) {
        execute!(self.stdout, terminal::Clear(ClearType::All)).expect("Error clearing.");
    }

    pub fn read_key_blocking(&self) -> KeyEvent {
        loop {
            if let Event::Key(ev) = read().unwrap() {
                return ev;
            }
        }
    }

    pub fn read_key_events_queue(&self) -> Vec<KeyEvent> {
        let mut events = vec![];

        while poll(Duration::from_millis(1)).unwrap() {
            if let Event::Key(ev) = read().unwrap() {
                events.push(ev);
            }
        }

        events
    }

    pub fn draw_border(&mut self, title: &str) {
        let right = (COLS + 1) as u16;
        let bottom = (ROWS + 1) as u16;

        for x in 0..=right {
            let ch = if x == 0 || x == right { '+' } else { '-' };
            self.put((x, 0), ch);
            self.put((x, bottom), ch);
        }

        for y in 1..bottom {
            self.put((0, y), '|');
            self.put((right, y), '|');
        }

        // Center the variant name on the top edge
        let col = (right as usize + 1).saturating_sub(title.len()) / 2;
        queue!(self.stdout, cursor::MoveTo(col as u16, 0), Print(title)).unwrap();

        self.flush();
    }

    /// Redraws the whole playfield from a snapshot. The head is drawn as a
    /// directional glyph, the food as a circle.
    pub fn draw_frame(&mut self, snap: &Snapshot, palette: &Palette) {
        self.blank_board();

        self.draw_cell(snap.food, FOOD_CHAR, palette.food);

        for (i, &cell) in snap.body.iter().enumerate() {
            if i == 0 {
                self.draw_cell(cell, head_char(snap.heading), palette.head);
            } else {
                self.draw_cell(cell, BODY_CHAR, palette.body);
            }
        }

        self.flush();
    }

    /// Blanks the playfield and prints centered banner lines over it.
    pub fn show_banner(&mut self, lines: &[&str], color: Color) {
        self.blank_board();
        queue!(self.stdout, SetForegroundColor(color)).unwrap();

        let top = (ROWS as usize + 2 - lines.len()) / 2;
        for (i, line) in lines.iter().enumerate() {
            let col = (COLS as usize + 2).saturating_sub(line.len()) / 2;
            let pos = (col as u16, (top + i) as u16);
            queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), Print(line)).unwrap();
        }

        queue!(self.stdout, ResetColor).unwrap();
        self.flush();
    }

    pub fn flush(&mut self) {
        self.stdout.flush().expect("Error flushing.");
    }

    ///////////////////////////////////////////////////////////////////////////

    fn draw_cell(&mut self, cell: Cell, ch: char, color: Color) {
        let pos = term_pos(cell);
        queue!(
            self.stdout,
            cursor::MoveTo(pos.0, pos.1),
            SetForegroundColor(color),
            Print(ch),
            ResetColor
        )
        .unwrap();
    }

    fn blank_board(&mut self) {
        for y in 1..=ROWS as u16 {
            queue!(self.stdout, cursor::MoveTo(1, y)).unwrap();
            for _ in 0..COLS {
                queue!(self.stdout, Print(' ')).unwrap();
            }
        }
    }

    fn put(&mut self, pos: (u16, u16), ch: char) {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), Print(ch)).unwrap();
    }
}

/// Maps window units to the terminal cell inside the border.
fn term_pos(cell: Cell) -> (u16, u16) {
    ((cell.0 / UNIT_SIZE + 1) as u16, (cell.1 / UNIT_SIZE + 1) as u16)
}

fn head_char(heading: Direction) -> char {
    match heading {
        Direction::Up => '^',
        Direction::Down => 'v',
        Direction::Left => '<',
        Direction::Right => '>',
    }
}
