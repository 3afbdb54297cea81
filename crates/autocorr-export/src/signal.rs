//! Signal file writing, the inverse of `autocorr_core::load_signal`.

use crate::Result;
use autocorr_core::SignalFormat;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write `samples` in `format`.
pub fn write_signal<W: Write>(mut writer: W, samples: &[f32], format: SignalFormat) -> Result<()> {
    match format {
        SignalFormat::Binary => writer.write_all(bytemuck::cast_slice(samples))?,
        SignalFormat::Text => {
            for sample in samples {
                writeln!(writer, "{}", sample)?;
            }
        }
    }
    Ok(())
}

/// Write `samples` to `path`, replacing any existing file.
pub fn export_signal(path: impl AsRef<Path>, samples: &[f32], format: SignalFormat) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_signal(&mut writer, samples, format)?;
    writer.flush()?;

    tracing::info!(
        "Wrote {} samples ({:?}) to {}",
        samples.len(),
        format,
        path.display()
    );
    Ok(())
}
