//! Plaintext series loaders.
//!
//! The simulation side writes one sample per line after a short header. MSD
//! files additionally carry a spurious first reading whose value offsets
//! every later sample, so the first usable reading is treated as a baseline
//! and subtracted.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use mda_core::errors::{ErrorInfo, MdaError};

/// Options controlling how a plaintext series is parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOptions {
    /// Leading lines dropped before any sample is read.
    pub skip_lines: usize,
    /// When set, the first usable reading becomes a baseline subtracted
    /// from every subsequent sample; the baseline itself is consumed.
    pub subtract_baseline: bool,
    /// Per-constituent scale factor (atom count) applied to every sample.
    pub scale: f64,
    /// Whitespace-separated column to extract; `None` reads the whole line.
    pub column: Option<usize>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            skip_lines: 0,
            subtract_baseline: false,
            scale: 1.0,
            column: None,
        }
    }
}

impl LoadOptions {
    /// The observed MSD file layout: one header line, one spurious tiny
    /// reading, then baseline-normalised samples.
    pub fn displacement() -> Self {
        Self {
            skip_lines: 2,
            subtract_baseline: true,
            ..Self::default()
        }
    }

    /// The observed potential-energy layout: one header line, raw samples.
    pub fn energy() -> Self {
        Self {
            skip_lines: 1,
            ..Self::default()
        }
    }

    /// Applies a per-constituent scale factor.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Extracts a whitespace-separated column instead of the whole line.
    pub fn with_column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }
}

fn malformed(code: &str, message: impl Into<String>, line: usize) -> MdaError {
    MdaError::MalformedInput(
        ErrorInfo::new(code, message.into()).with_context("line", line.to_string()),
    )
}

/// Reads a sample series from a buffered reader.
///
/// Blank lines are skipped. Fails with [`MdaError::MalformedInput`] when a
/// line cannot be parsed or when fewer than two usable samples remain.
pub fn read_series<R: BufRead>(reader: R, options: &LoadOptions) -> Result<Vec<f64>, MdaError> {
    let mut samples = Vec::new();
    let mut baseline = None;
    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|err| {
            MdaError::Io(
                ErrorInfo::new("read-line", err.to_string())
                    .with_context("line", line_no.to_string()),
            )
        })?;
        if idx < options.skip_lines {
            continue;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let field = match options.column {
            Some(column) => trimmed.split_whitespace().nth(column).ok_or_else(|| {
                malformed(
                    "missing-column",
                    format!("line has no column {column}"),
                    line_no,
                )
            })?,
            None => trimmed,
        };
        let value: f64 = field.parse().map_err(|_| {
            malformed(
                "unparseable-sample",
                format!("cannot parse {field:?} as a number"),
                line_no,
            )
        })?;
        if options.subtract_baseline {
            match baseline {
                None => baseline = Some(value),
                Some(base) => samples.push((value - base) * options.scale),
            }
        } else {
            samples.push(value * options.scale);
        }
    }
    if samples.len() < 2 {
        return Err(MdaError::MalformedInput(
            ErrorInfo::new(
                "too-few-samples",
                "a series needs at least two usable samples",
            )
            .with_context("samples", samples.len().to_string()),
        ));
    }
    Ok(samples)
}

/// Reads a sample series from a file, attaching the path to any failure.
pub fn load_series(path: &Path, options: &LoadOptions) -> Result<Vec<f64>, MdaError> {
    let file = File::open(path).map_err(|err| {
        MdaError::Io(
            ErrorInfo::new("open-series", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })?;
    read_series(BufReader::new(file), options).map_err(|err| attach_path(err, path))
}

fn attach_path(err: MdaError, path: &Path) -> MdaError {
    let with_path = |info: ErrorInfo| info.with_context("path", path.display().to_string());
    match err {
        MdaError::MalformedInput(info) => MdaError::MalformedInput(with_path(info)),
        MdaError::ShapeMismatch(info) => MdaError::ShapeMismatch(with_path(info)),
        MdaError::DegenerateInput(info) => MdaError::DegenerateInput(with_path(info)),
        MdaError::InsufficientSamples(info) => MdaError::InsufficientSamples(with_path(info)),
        MdaError::Config(info) => MdaError::Config(with_path(info)),
        MdaError::Io(info) => MdaError::Io(with_path(info)),
    }
}

/// Accumulates a cumulative squared-displacement series from per-atom rows.
///
/// The input carries `steps` blocks of `atoms` lines, each line holding the
/// `dx dy dz` displacement of one atom at that step. Every step contributes
/// the sum of its squared displacements, accumulated over all earlier steps.
pub fn accumulate_squared_displacements<R: BufRead>(
    reader: R,
    atoms: usize,
    steps: usize,
    skip_lines: usize,
) -> Result<Vec<f64>, MdaError> {
    if steps < 2 {
        return Err(MdaError::MalformedInput(
            ErrorInfo::new(
                "too-few-samples",
                "a displacement series needs at least two steps",
            )
            .with_context("steps", steps.to_string()),
        ));
    }
    let mut lines = reader.lines().enumerate();
    for _ in 0..skip_lines {
        if lines.next().is_none() {
            return Err(MdaError::MalformedInput(ErrorInfo::new(
                "truncated-header",
                "the file ended inside the header",
            )));
        }
    }

    let mut series = Vec::with_capacity(steps);
    let mut running = 0.0;
    for step in 0..steps {
        let mut step_sum = 0.0;
        for _ in 0..atoms {
            let (idx, line) = lines.next().ok_or_else(|| {
                MdaError::MalformedInput(
                    ErrorInfo::new(
                        "truncated-displacements",
                        "the file ended before every step was read",
                    )
                    .with_context("step", step.to_string()),
                )
            })?;
            let line_no = idx + 1;
            let line = line.map_err(|err| {
                MdaError::Io(
                    ErrorInfo::new("read-line", err.to_string())
                        .with_context("line", line_no.to_string()),
                )
            })?;
            let mut fields = line.split_whitespace().map(str::parse::<f64>);
            let (dx, dy, dz) = match (fields.next(), fields.next(), fields.next()) {
                (Some(Ok(dx)), Some(Ok(dy)), Some(Ok(dz))) => (dx, dy, dz),
                _ => {
                    return Err(malformed(
                        "bad-displacement-row",
                        "expected three numeric displacement components",
                        line_no,
                    ))
                }
            };
            step_sum += dx * dx + dy * dy + dz * dz;
        }
        running += step_sum;
        series.push(running);
    }
    Ok(series)
}
