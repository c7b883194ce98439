pub mod board;
pub mod colors;
pub mod logging;
pub mod print;
