pub mod chunk;
pub mod executor;

pub use chunk::*;
pub use executor::*;
