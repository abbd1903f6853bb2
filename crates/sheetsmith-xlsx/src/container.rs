//! Container abstraction over the physical package format
//!
//! The writer produces named parts (XML documents); packaging them into a
//! compressed archive is the container's job. Keeping this seam narrow
//! lets tests capture the logical parts without parsing ZIP data.

use std::io::{self, Seek, Write};

/// Destination for the logical parts of a spreadsheet container
pub trait Container {
    /// Add a part at the given archive path
    fn put_part(&mut self, path: &str, bytes: &[u8]) -> io::Result<()>;

    /// Finalize the container, flushing everything to the sink
    fn finish(&mut self) -> io::Result<()>;
}

/// ZIP-backed container, the real packaging used for XLSX output
///
/// Entries carry a fixed modification timestamp so that writing the same
/// model twice produces byte-identical archives.
pub struct ZipContainer<W: Write + Seek> {
    // None once finished; finishing consumes the inner writer
    zip: Option<zip::ZipWriter<W>>,
}

impl<W: Write + Seek> ZipContainer<W> {
    /// Create a container writing to the given sink
    pub fn new(writer: W) -> Self {
        Self {
            zip: Some(zip::ZipWriter::new(writer)),
        }
    }

    fn options() -> zip::write::SimpleFileOptions {
        zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default())
    }

    fn zip_mut(&mut self) -> io::Result<&mut zip::ZipWriter<W>> {
        self.zip
            .as_mut()
            .ok_or_else(|| io::Error::other("container already finished"))
    }
}

impl<W: Write + Seek> Container for ZipContainer<W> {
    fn put_part(&mut self, path: &str, bytes: &[u8]) -> io::Result<()> {
        let zip = self.zip_mut()?;
        zip.start_file(path, Self::options())
            .map_err(io::Error::other)?;
        zip.write_all(bytes)
    }

    fn finish(&mut self) -> io::Result<()> {
        let zip = self
            .zip
            .take()
            .ok_or_else(|| io::Error::other("container already finished"))?;
        let mut sink = zip.finish().map_err(io::Error::other)?;
        sink.flush()
    }
}

/// In-memory container capturing parts for inspection in tests
#[derive(Debug, Default)]
pub struct MemContainer {
    parts: Vec<(String, Vec<u8>)>,
    finished: bool,
}

impl MemContainer {
    /// Create an empty container
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a part's bytes by archive path
    pub fn part(&self, path: &str) -> Option<&[u8]> {
        self.parts
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, b)| b.as_slice())
    }

    /// Get a part as UTF-8 text
    pub fn part_str(&self, path: &str) -> Option<&str> {
        self.part(path).and_then(|b| std::str::from_utf8(b).ok())
    }

    /// Archive paths in insertion order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().map(|(p, _)| p.as_str())
    }

    /// Whether `finish` was called
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl Container for MemContainer {
    fn put_part(&mut self, path: &str, bytes: &[u8]) -> io::Result<()> {
        self.parts.push((path.to_string(), bytes.to_vec()));
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.finished = true;
        Ok(())
    }
}
