mod reader;
mod writer;

pub use reader::RosterReader;
pub use writer::ResultWriter;
