pub mod calendar;
pub mod cell;
pub mod grid;

pub use calendar::{build_cells, render, weekday_header};
pub use cell::Cell;
pub use grid::Grid;
