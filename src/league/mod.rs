pub mod fixtures;
pub mod source;
pub mod standings;
