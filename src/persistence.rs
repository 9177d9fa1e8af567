// src/persistence.rs - Loading and atomically saving plain-text files

use crate::buffer::Buffer;
use crate::error::EditError;
use log::{debug, info};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Line terminator a file is written with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }

    /// CRLF only if every line break in `text` is a CRLF pair
    pub fn detect(text: &str) -> Self {
        let breaks = text.matches('\n').count();
        if breaks > 0 && text.matches("\r\n").count() == breaks {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }
}

/// Buffer read from disk together with the terminator to write it back with
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedFile {
    pub buffer: Buffer,
    pub line_ending: LineEnding,
}

/// Read `path` into a buffer.
///
/// A missing file is a new file: the result is a single empty line. When
/// every line break is CRLF the `'\r'` of each pair is dropped and the file
/// is reported as [`LineEnding::CrLf`]; otherwise carriage returns stay part
/// of their line. The final line's terminator does not produce an extra
/// empty line. Invalid UTF-8 is replaced rather than rejected.
pub fn load<P: AsRef<Path>>(path: P) -> Result<LoadedFile, EditError> {
    let path = path.as_ref();
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!("{} does not exist, starting with an empty buffer", path.display());
            return Ok(LoadedFile {
                buffer: Buffer::new(),
                line_ending: LineEnding::default(),
            });
        }
        Err(err) => return Err(EditError::io(path, err)),
    };

    let text = String::from_utf8_lossy(&bytes);
    let line_ending = LineEnding::detect(&text);
    let text = match line_ending {
        LineEnding::CrLf => text.replace("\r\n", "\n"),
        LineEnding::Lf => text.into_owned(),
    };
    let buffer = Buffer::from_text(text.strip_suffix('\n').unwrap_or(&text));
    debug!(
        "loaded {} lines ({:?}) from {}",
        buffer.line_count(),
        line_ending,
        path.display()
    );
    Ok(LoadedFile {
        buffer,
        line_ending,
    })
}

/// Write every line of `buffer`, each followed by `line_ending`, to `path`.
///
/// The content goes to a temporary file next to `path` which then replaces
/// it, so a failed save leaves the previous file intact. Permissions of an
/// existing file carry over.
pub fn save<P: AsRef<Path>>(
    buffer: &Buffer,
    line_ending: LineEnding,
    path: P,
) -> Result<(), EditError> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| EditError::io(path, e))?;
    write_lines(buffer, line_ending, tmp.as_file_mut()).map_err(|e| EditError::io(path, e))?;

    if let Ok(meta) = fs::metadata(path) {
        tmp.as_file()
            .set_permissions(meta.permissions())
            .map_err(|e| EditError::io(path, e))?;
    }

    tmp.persist(path).map_err(|e| EditError::io(path, e.error))?;
    info!("wrote {} lines to {}", buffer.line_count(), path.display());
    Ok(())
}

fn write_lines(buffer: &Buffer, line_ending: LineEnding, file: &mut fs::File) -> io::Result<()> {
    let mut writer = BufWriter::new(&mut *file);
    for line in buffer.lines() {
        writer.write_all(line.as_bytes())?;
        writer.write_all(line_ending.as_str().as_bytes())?;
    }
    writer.flush()?;
    drop(writer);
    file.sync_all()
}
