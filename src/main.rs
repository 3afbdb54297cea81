//! Command-line front end: correlate a signal file, or generate one.

use autocorr::core::HiddenSine;
use autocorr::export::export_signal;
use autocorr::prelude::*;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

#[derive(Parser)]
#[command(name = "autocorr")]
#[command(about = "Parallel autocorrelation to uncover hidden periodic signals", long_about = None)]
struct Cli {
    /// Enable debug logging, including one line per worker
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Correlate a signal file and write the plot table
    Run {
        /// Input signal file
        #[arg(short, long, default_value = autocorr::DEFAULT_INPUT)]
        input: PathBuf,

        /// Input encoding (default: text for .txt files, binary otherwise)
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// Number of samples to read
        #[arg(short = 'n', long, default_value_t = autocorr::core::DEFAULT_NUM_ELEMENTS)]
        elements: usize,

        /// Number of lags to compute
        #[arg(short = 's', long, default_value_t = autocorr::core::DEFAULT_MAX_SHIFT)]
        max_shift: usize,

        /// Plot table output file
        #[arg(short, long, default_value = autocorr::DEFAULT_PLOT)]
        plot: PathBuf,

        /// Plot lags 1..max-plot
        #[arg(long, default_value_t = autocorr::export::DEFAULT_MAX_PLOT)]
        max_plot: usize,

        /// Skip the plot table
        #[arg(long)]
        no_plot: bool,

        /// Fixed-width plot columns
        #[arg(long)]
        aligned: bool,

        /// Worker count (default: available parallelism)
        #[arg(short, long)]
        workers: Option<usize>,

        /// How partial sums are merged
        #[arg(long, value_enum, default_value = "ordered")]
        reduce: ReduceArg,

        /// Check the result against a single-threaded reference
        #[arg(long)]
        verify: bool,
    },

    /// Write a synthetic signal: a sine wave buried in uniform noise
    Generate {
        /// Output signal file
        #[arg(short, long, default_value = autocorr::DEFAULT_INPUT)]
        output: PathBuf,

        /// Output encoding (default: text for .txt files, binary otherwise)
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// Number of samples
        #[arg(short = 'n', long, default_value_t = autocorr::core::DEFAULT_NUM_ELEMENTS)]
        elements: usize,

        /// Sine period in samples
        #[arg(long, default_value_t = 128.0)]
        period: f32,

        /// Sine amplitude
        #[arg(long, default_value_t = 1.0)]
        amplitude: f32,

        /// Noise half-range
        #[arg(long, default_value_t = 2.0)]
        noise: f32,

        /// RNG seed
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Binary,
    Text,
}

impl From<FormatArg> for SignalFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Binary => SignalFormat::Binary,
            FormatArg::Text => SignalFormat::Text,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ReduceArg {
    Ordered,
    Locked,
}

impl From<ReduceArg> for ReduceStrategy {
    fn from(arg: ReduceArg) -> Self {
        match arg {
            ReduceArg::Ordered => ReduceStrategy::Ordered,
            ReduceArg::Locked => ReduceStrategy::Locked,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    match execute(cli.command, cli.debug) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(command: Commands, debug: bool) -> Result<()> {
    match command {
        Commands::Run {
            input,
            format,
            elements,
            max_shift,
            plot,
            max_plot,
            no_plot,
            aligned,
            workers,
            reduce,
            verify,
        } => {
            let mut builder = AutocorrRun::builder()
                .input(input)
                .num_elements(elements)
                .max_shift(max_shift)
                .max_plot(max_plot)
                .reduce(reduce.into())
                .trace_workers(debug)
                .verify(verify);

            if let Some(format) = format {
                builder = builder.format(format.into());
            }
            if let Some(workers) = workers {
                builder = builder.workers(workers);
            }
            if aligned {
                builder = builder.plot_layout(PlotLayout::Aligned);
            }
            builder = if no_plot {
                builder.no_plot()
            } else {
                builder.plot(plot)
            };

            builder.build()?.execute()?;
            Ok(())
        }

        Commands::Generate {
            output,
            format,
            elements,
            period,
            amplitude,
            noise,
            seed,
        } => {
            if period.is_nan() || period <= 0.0 {
                return Err(autocorr::core::Error::Config(format!(
                    "period must be positive, got {}",
                    period
                ))
                .into());
            }

            let format = format
                .map(SignalFormat::from)
                .unwrap_or_else(|| SignalFormat::from_path(&output));
            let synth = HiddenSine {
                period,
                amplitude,
                noise,
                seed,
            };
            export_signal(&output, &synth.generate(elements), format)?;
            Ok(())
        }
    }
}
