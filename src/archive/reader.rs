use super::ArchiveEntry;
use crate::config::LoaderConfig;
use crate::loader::LoaderError;
use std::io::{Cursor, Read};

/// Lists and decompresses archive entries.
///
/// Listing is all-or-nothing: a malformed archive yields
/// [`LoaderError::ArchiveParse`] and no entries. Content is only decompressed
/// for the entries passed to [`ArchiveReader::read`].
pub trait ArchiveReader: Send + Sync {
    /// Entries in archive enumeration order, without their content
    fn parse(&self, bytes: &[u8]) -> Result<Vec<ArchiveEntry>, LoaderError>;

    /// Content of the entries at `indices` (positions in [`parse`] output),
    /// in the order given. Stops with [`LoaderError::FileTooLarge`] as soon as
    /// an entry or the running total exceeds the limits in `config`.
    ///
    /// [`parse`]: ArchiveReader::parse
    fn read(
        &self,
        bytes: &[u8],
        indices: &[usize],
        config: &LoaderConfig,
    ) -> Result<Vec<Vec<u8>>, LoaderError>;
}

impl<R: ArchiveReader + ?Sized> ArchiveReader for &R {
    fn parse(&self, bytes: &[u8]) -> Result<Vec<ArchiveEntry>, LoaderError> {
        (**self).parse(bytes)
    }

    fn read(
        &self,
        bytes: &[u8],
        indices: &[usize],
        config: &LoaderConfig,
    ) -> Result<Vec<Vec<u8>>, LoaderError> {
        (**self).read(bytes, indices, config)
    }
}

/// Reads zip archives in memory
#[derive(Debug, Default, Clone, Copy)]
pub struct ZipReader;

fn open(bytes: &[u8]) -> Result<zip::ZipArchive<Cursor<&[u8]>>, LoaderError> {
    zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| LoaderError::ArchiveParse(e.to_string()))
}

impl ArchiveReader for ZipReader {
    fn parse(&self, bytes: &[u8]) -> Result<Vec<ArchiveEntry>, LoaderError> {
        let mut archive = open(bytes)?;

        let mut entries = Vec::with_capacity(archive.len());
        for i in 0..archive.len() {
            let file = archive
                .by_index_raw(i)
                .map_err(|e| LoaderError::ArchiveParse(e.to_string()))?;

            let path = file.name().to_string();
            if file.is_dir() {
                entries.push(ArchiveEntry::dir(path));
            } else {
                entries.push(ArchiveEntry::file(path, file.size()));
            }
        }

        Ok(entries)
    }

    fn read(
        &self,
        bytes: &[u8],
        indices: &[usize],
        config: &LoaderConfig,
    ) -> Result<Vec<Vec<u8>>, LoaderError> {
        let mut archive = open(bytes)?;

        let mut contents = Vec::with_capacity(indices.len());
        let mut total: u64 = 0;
        for &i in indices {
            let file = archive
                .by_index(i)
                .map_err(|e| LoaderError::ArchiveParse(e.to_string()))?;

            let path = file.name().to_string();
            let declared = file.size();

            // The declared size can lie; never inflate past the limit.
            let mut content = Vec::new();
            file.take(config.max_file_size.saturating_add(1))
                .read_to_end(&mut content)
                .map_err(|e| LoaderError::ArchiveParse(format!("{}: {}", path, e)))?;

            let size = content.len() as u64;
            if size > config.max_file_size {
                return Err(LoaderError::FileTooLarge {
                    size: declared.max(size),
                    max: config.max_file_size,
                });
            }

            total += size;
            if total > config.max_total_size {
                return Err(LoaderError::FileTooLarge {
                    size: total,
                    max: config.max_total_size,
                });
            }

            contents.push(content);
        }

        Ok(contents)
    }
}
