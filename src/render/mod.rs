//! Text rendering of the board.
//!
//! The view only reads a `GameState`; the labels it prints for the lock,
//! roll and next-round controls match the commands the terminal front-end
//! accepts.

mod board;

pub use board::{lock_label, BoardView};
