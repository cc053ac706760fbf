//! The rules of Tablut, played on a 9x9 board with the king starting on the central throne.
pub use board::*;
pub use capture::*;
pub use grid::*;
pub use io::*;
pub use mv::*;
pub use piece::*;
pub use square::*;

mod board;
mod capture;
mod grid;
mod history;
mod io;
mod movegen;
mod mv;
mod piece;
mod square;
