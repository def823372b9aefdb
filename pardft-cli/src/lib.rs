use std::io::{self, Read, Write};

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use pardft::bench::RunReport;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Parse a dataset: a sample count followed by that many reals, separated by
/// any whitespace.
pub fn read_dataset<R: Read>(mut reader: R) -> Result<Vec<f64>> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .context("failed to read dataset")?;
    let mut tokens = text.split_whitespace();
    let count_token = tokens.next().context("dataset is empty")?;
    let count: usize = count_token
        .parse()
        .with_context(|| format!("invalid sample count {:?}", count_token))?;
    if count == 0 {
        bail!("sample count must be greater than zero");
    }
    let mut samples = Vec::with_capacity(count);
    for (i, token) in tokens.by_ref().take(count).enumerate() {
        let value: f64 = token
            .parse()
            .with_context(|| format!("invalid sample #{}: {:?}", i + 1, token))?;
        samples.push(value);
    }
    if samples.len() < count {
        bail!("expected {} samples, found {}", count, samples.len());
    }
    let surplus = tokens.count();
    if surplus > 0 {
        log::warn!("ignoring {} values after the first {}", surplus, count);
    }
    Ok(samples)
}

/// Write `samples` in the format accepted by [`read_dataset`].
pub fn write_dataset<W: Write>(mut writer: W, samples: &[f64]) -> io::Result<()> {
    writeln!(writer, "{}", samples.len())?;
    for v in samples {
        writeln!(writer, "{}", v)?;
    }
    writer.flush()
}

pub fn render_header(samples: usize, threads: usize) -> String {
    format!("{} samples, {} hardware threads", samples, threads)
}

pub fn render_text(report: &RunReport<f64>) -> String {
    format!(
        "{}: time {:.6} s, mean abs error {:e}",
        report.schedule,
        report.seconds(),
        report.mean_abs_error
    )
}

pub fn render_json(reports: &[RunReport<f64>]) -> Result<String> {
    serde_json::to_string_pretty(reports).context("failed to encode reports")
}
