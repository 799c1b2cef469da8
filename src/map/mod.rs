//! Level layouts and the grid geometry derived from them.

pub mod level;
pub mod parser;
pub mod rect;
