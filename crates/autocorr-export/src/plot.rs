//! Plot table of autocorrelation sums.
//!
//! One row per lag in `1..max_plot`, formatted `<lag>, <sum>` with the sum
//! to two decimals. The zero-lag sum is the signal energy and dwarfs every
//! other value, so it is left out.

use crate::{ExportError, PlotLayout, PlotOptions, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write plot rows for `sums` to `writer`. Returns the number of rows written.
pub fn write_plot<W: Write>(mut writer: W, sums: &[f32], options: &PlotOptions) -> Result<usize> {
    let rows = options.row_count(sums.len());

    for (lag, sum) in sums.iter().enumerate().skip(1).take(rows) {
        match options.layout {
            PlotLayout::Compact => writeln!(writer, "{}, {:.2}", lag, sum)?,
            PlotLayout::Aligned => writeln!(writer, "{:6} , {:10.2}", lag, sum)?,
        }
    }

    Ok(rows)
}

/// Write the plot table to `path`, replacing any existing file.
pub fn export_plot(path: impl AsRef<Path>, sums: &[f32], options: &PlotOptions) -> Result<usize> {
    if options.max_plot < 2 {
        return Err(ExportError::InvalidOptions(format!(
            "max plot {} leaves no lags to plot",
            options.max_plot
        )));
    }

    let path = path.as_ref();
    if options.max_plot > sums.len() {
        tracing::debug!(
            "Plot limit {} exceeds {} computed lags, truncating",
            options.max_plot,
            sums.len()
        );
    }

    let mut writer = BufWriter::new(File::create(path)?);
    let rows = write_plot(&mut writer, sums, options)?;
    writer.flush()?;

    tracing::debug!("Wrote {} plot rows to {}", rows, path.display());
    Ok(rows)
}
