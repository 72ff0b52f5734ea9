//! In-memory zip writing.

use std::io::{Cursor, Write};

use platforge_templates::GeneratedFile;
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{ArchiveError, ArchiveResult};

/// Pack generated files into a deflate-compressed zip buffer.
///
/// One entry per file, named by its output path, written in input order.
/// An empty input yields a valid empty archive.
pub fn pack(files: &[GeneratedFile]) -> ArchiveResult<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for file in files {
        writer
            .start_file(file.path.as_str(), options)
            .map_err(|source| ArchiveError::Entry {
                path: file.path.clone(),
                source,
            })?;
        writer
            .write_all(file.content.as_bytes())
            .map_err(|source| ArchiveError::Entry {
                path: file.path.clone(),
                source: source.into(),
            })?;
    }

    let cursor = writer.finish()?;
    let bytes = cursor.into_inner();
    debug!("Packed {} files into {} bytes", files.len(), bytes.len());
    Ok(bytes)
}
