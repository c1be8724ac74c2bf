pub mod app;
pub mod game;
pub mod grid;
pub mod runtime;
pub mod snake;
pub mod term;

/// One grid-aligned position in window units; both coordinates are
/// multiples of the cell size while the position is legal.
pub type Cell = (i32, i32);
