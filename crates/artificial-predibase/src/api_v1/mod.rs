mod common;
mod generate;
mod resources;

pub use generate::*;
pub use resources::*;
