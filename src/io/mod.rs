//! Report directory I/O: file layout, record framing, writer and reader

pub mod codec;
pub mod reader;
pub mod structure;
pub mod writer;
