//! Archive parsing and project extraction.

mod entry;
mod extractor;
mod reader;


pub use entry::ArchiveEntry;
pub use extractor::{detect_prefix, extract_archive, ArchiveExtractor};
pub use reader::{ArchiveReader, ZipReader};
