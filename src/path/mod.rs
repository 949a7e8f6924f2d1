pub mod resolver;
pub mod segment;
