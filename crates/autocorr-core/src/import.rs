//! Signal file loading.
//!
//! Exactly `num_elements` samples are read; anything after them is ignored.
//! A file holding fewer samples is rejected with [`Error::ShortRead`] instead
//! of running over a partially filled buffer.

use crate::{Error, Result, Signal};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

/// On-disk sample encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignalFormat {
    /// Native-endian `f32`, 4 bytes per sample.
    #[default]
    Binary,
    /// Whitespace-separated decimal numbers.
    Text,
}

impl SignalFormat {
    /// Conventional file extension (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            SignalFormat::Binary => "bin",
            SignalFormat::Text => "txt",
        }
    }

    /// `.txt` files are text, everything else binary.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("txt") => SignalFormat::Text,
            _ => SignalFormat::Binary,
        }
    }
}

/// Load a signal file and attach the wrap-around tail.
pub fn load_signal(
    path: impl AsRef<Path>,
    format: SignalFormat,
    num_elements: usize,
    max_shift: usize,
) -> Result<Signal> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        Error::Io(std::io::Error::new(
            e.kind(),
            format!("cannot open signal file '{}': {}", path.display(), e),
        ))
    })?;
    let reader = BufReader::new(file);

    let samples = match format {
        SignalFormat::Binary => read_binary(reader, num_elements)?,
        SignalFormat::Text => read_text(reader, num_elements)?,
    };

    tracing::debug!(
        "Loaded {} samples ({:?}) from {}",
        samples.len(),
        format,
        path.display()
    );

    Signal::from_samples(samples, max_shift)
}

/// Read `num_elements` native-endian `f32` values.
pub fn read_binary<R: Read>(mut reader: R, num_elements: usize) -> Result<Vec<f32>> {
    let mut samples = vec![0.0f32; num_elements];
    let bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut samples[..]);

    let mut filled = 0;
    while filled < bytes.len() {
        match reader.read(&mut bytes[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }

    if filled < bytes.len() {
        return Err(Error::ShortRead {
            expected: num_elements,
            found: filled / std::mem::size_of::<f32>(),
        });
    }
    Ok(samples)
}

/// Read `num_elements` whitespace-separated decimal values.
pub fn read_text<R: Read>(mut reader: R, num_elements: usize) -> Result<Vec<f32>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let mut samples = Vec::with_capacity(num_elements);
    for (index, token) in text.split_whitespace().take(num_elements).enumerate() {
        let value = token.parse::<f32>().map_err(|_| Error::Parse {
            index,
            token: token.to_string(),
        })?;
        samples.push(value);
    }

    if samples.len() < num_elements {
        return Err(Error::ShortRead {
            expected: num_elements,
            found: samples.len(),
        });
    }
    Ok(samples)
}
