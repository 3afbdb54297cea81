//! Plot export options.

/// Default number of plotted lags (rows cover `1..max_plot`).
pub const DEFAULT_MAX_PLOT: usize = 400;

/// Row layout of the plot table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlotLayout {
    /// `1, 50.00`
    #[default]
    Compact,
    /// `     1 ,      50.00` (fixed-width columns)
    Aligned,
}

/// Plot export options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotOptions {
    /// Exclusive upper bound of plotted lags. Lag 0 is never written.
    pub max_plot: usize,
    /// Row layout.
    pub layout: PlotLayout,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            max_plot: DEFAULT_MAX_PLOT,
            layout: PlotLayout::Compact,
        }
    }
}

impl PlotOptions {
    pub fn with_max_plot(max_plot: usize) -> Self {
        Self {
            max_plot,
            ..Default::default()
        }
    }

    /// Number of rows written for `lags` available sums.
    pub fn row_count(&self, lags: usize) -> usize {
        self.max_plot.min(lags).saturating_sub(1)
    }
}
