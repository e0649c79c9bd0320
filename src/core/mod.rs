pub mod calculator;
pub mod logic;
pub mod matrix;
pub mod parser;

pub use logic::Core;
