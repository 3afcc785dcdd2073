pub mod population;
pub mod selection;

pub use population::*;
pub use selection::*;
