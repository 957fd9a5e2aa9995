pub mod parse;
pub mod viewport;
