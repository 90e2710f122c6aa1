pub mod buffer;

pub use buffer::LineBuffer;
