//! Services built on top of the report reader

pub mod dump;
pub mod tree;
