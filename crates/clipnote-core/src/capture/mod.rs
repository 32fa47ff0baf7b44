mod reader;
mod types;
mod writer;

pub use reader::CaptureReader;
pub use types::*;
pub use writer::CaptureWriter;
