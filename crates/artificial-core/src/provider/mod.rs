mod text_complete;

pub use text_complete::*;
