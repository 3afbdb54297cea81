//! End-to-end run tests: signal file in, sums and plot table out.
//!
//! Run with:
//! ```bash
//! cargo test -p autocorr --test run_integration
//! ```

use approx::assert_relative_eq;
use autocorr::core::{reference_autocorrelation, Signal};
use autocorr::export::export_signal;
use autocorr::prelude::*;
use autocorr::{HiddenSine, RunPhase};
use std::path::Path;

fn write_ramp(path: &Path, n: usize, format: SignalFormat) {
    let samples: Vec<f32> = (0..n).map(|i| i as f32).collect();
    export_signal(path, &samples, format).expect("Failed to write ramp signal");
}

/// The 16-sample ramp split across two workers.
#[test]
fn test_boundary_scenario_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("ramp.bin");
    let plot = dir.path().join("plot.csv");
    write_ramp(&input, 16, SignalFormat::Binary);

    let outcome = AutocorrRun::builder()
        .input(&input)
        .num_elements(16)
        .max_shift(4)
        .workers(2)
        .plot(&plot)
        .max_plot(4)
        .verify(true)
        .build()
        .unwrap()
        .execute()
        .unwrap();

    assert_eq!(outcome.phase, RunPhase::Done);
    assert_eq!(outcome.report.workers, 2);
    assert_eq!(outcome.report.num_elements, 16);
    assert_eq!(outcome.sums.get(0), Some(1240.0));
    assert!(outcome.verification.unwrap().passed());

    // Σ i * (i + s) mod 16 over the ramp, lags 1..4
    let expected: Vec<f32> = (1..4)
        .map(|s| (0..16).map(|i| (i * ((i + s) % 16)) as f32).sum())
        .collect();
    let table = std::fs::read_to_string(&plot).unwrap();
    let rows: Vec<&str> = table.lines().collect();
    assert_eq!(outcome.plot_rows, Some(3));
    assert_eq!(rows.len(), 3);
    for (s, (row, value)) in rows.iter().zip(&expected).enumerate() {
        assert_eq!(*row, format!("{}, {:.2}", s + 1, value));
    }
}

#[test]
fn test_text_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("ramp.txt");
    write_ramp(&input, 16, SignalFormat::Text);

    let outcome = AutocorrRun::builder()
        .input(&input)
        .num_elements(16)
        .max_shift(4)
        .workers(4)
        .no_plot()
        .build()
        .unwrap()
        .execute()
        .unwrap();

    assert_eq!(outcome.sums.get(0), Some(1240.0));
    assert_eq!(outcome.plot_rows, None);
    assert!(outcome.plot_error.is_none());
}

#[test]
fn test_missing_input_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let result = AutocorrRun::builder()
        .input(dir.path().join("missing.bin"))
        .num_elements(16)
        .max_shift(4)
        .workers(2)
        .no_plot()
        .build()
        .unwrap()
        .execute();

    assert!(matches!(result, Err(Error::Core(autocorr::core::Error::Io(_)))));
}

#[test]
fn test_short_input_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    for format in [SignalFormat::Binary, SignalFormat::Text] {
        let input = dir.path().join(format!("short.{}", format.extension()));
        write_ramp(&input, 10, format);

        let result = AutocorrRun::builder()
            .input(&input)
            .format(format)
            .num_elements(16)
            .max_shift(4)
            .workers(2)
            .no_plot()
            .build()
            .unwrap()
            .execute();

        match result {
            Err(Error::Core(autocorr::core::Error::ShortRead { expected, found })) => {
                assert_eq!(expected, 16);
                assert_eq!(found, 10);
            }
            other => panic!("expected short read, got {:?}", other.map(|o| o.report)),
        }
    }
}

#[test]
fn test_unwritable_plot_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("ramp.bin");
    write_ramp(&input, 16, SignalFormat::Binary);

    let outcome = AutocorrRun::builder()
        .input(&input)
        .num_elements(16)
        .max_shift(4)
        .workers(2)
        .plot(dir.path().join("no-such-dir").join("plot.csv"))
        .build()
        .unwrap()
        .execute()
        .unwrap();

    assert_eq!(outcome.plot_rows, None);
    assert_eq!(outcome.phase, RunPhase::Done);
    assert!(matches!(
        outcome.plot_error,
        Some(autocorr::export::ExportError::Io(_))
    ));
    assert_eq!(outcome.sums.get(0), Some(1240.0));
}

#[test]
fn test_uneven_split_drops_tail_windows() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("ramp.bin");
    write_ramp(&input, 17, SignalFormat::Binary);

    let outcome = AutocorrRun::builder()
        .input(&input)
        .num_elements(17)
        .max_shift(4)
        .workers(3)
        .no_plot()
        .build()
        .unwrap()
        .execute()
        .unwrap();

    // 3 workers * 5 samples: samples 15 and 16 never start a window
    let expected: f32 = (0..15).map(|i| (i * i) as f32).sum();
    assert_eq!(outcome.sums.get(0), Some(expected));
}

/// A sine with period 64 buried in noise is found at lag 64.
#[test]
fn test_hidden_period_detected() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("hidden.bin");
    let n = 1 << 16;
    let samples = HiddenSine {
        period: 64.0,
        amplitude: 1.0,
        noise: 0.1,
        seed: 42,
    }
    .generate(n);
    export_signal(&input, &samples, SignalFormat::Binary).unwrap();

    for reduce in [ReduceStrategy::Ordered, ReduceStrategy::Locked] {
        let outcome = AutocorrRun::builder()
            .input(&input)
            .num_elements(n)
            .max_shift(256)
            .workers(4)
            .reduce(reduce)
            .no_plot()
            .verify(true)
            .build()
            .unwrap()
            .execute()
            .unwrap();

        assert_eq!(outcome.dominant_lag, Some(64));
        assert!(outcome.verification.unwrap().passed());
    }
}

#[test]
fn test_matches_unpartitioned_reference_and_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("noise.bin");
    let n = 12_000;
    let samples = HiddenSine::default().generate(n);
    export_signal(&input, &samples, SignalFormat::Binary).unwrap();

    let run = || {
        AutocorrRun::builder()
            .input(&input)
            .num_elements(n)
            .max_shift(128)
            .workers(6)
            .no_plot()
            .build()
            .unwrap()
            .execute()
            .unwrap()
    };

    let first = run();
    let second = run();
    assert_eq!(first.sums, second.sums);

    let signal = Signal::from_samples(samples, 128).unwrap();
    let reference = reference_autocorrelation(&signal, n, 128);
    for (&g, &r) in first.sums.as_slice().iter().zip(&reference) {
        assert_relative_eq!(g as f64, r, epsilon = reference[0] * 1e-3);
    }
}
