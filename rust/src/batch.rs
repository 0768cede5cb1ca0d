//! Multi-case runner for judge-style input.
//!
//! The first non-blank line holds the number of cases `T`. Each rotation case
//! is a `n k` line followed by a line of `n` integers, or, in the offset-only
//! layout, a `k` line followed by the integers with no declared length. Each
//! peak case is a `N K` line followed by a sequence of `N` characters. Blank
//! lines are ignored. Every case produces exactly one output line.

use log::{debug, info, warn};
use serde::Serialize;
use thiserror::Error;

use crate::config::RotationConfig;
use crate::render::render_line;
use crate::rotation::{peak_rotation_shifts, rotate_signed, RotationError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BatchError {
    #[error("invalid case count: {0}")]
    Header(String),
    #[error("case {case}: expected {expected}")]
    MissingLine { case: usize, expected: &'static str },
    #[error("case {case}: malformed integer {token:?}")]
    BadInteger { case: usize, token: String },
    #[error("case {case}: expected {expected} fields, found {found}")]
    FieldCount { case: usize, expected: usize, found: usize },
    #[error("case {case}: declared length {declared} but found {found} elements")]
    LengthMismatch { case: usize, declared: usize, found: usize },
    #[error("case {case}: {source}")]
    Rotation { case: usize, source: RotationError },
    #[error("json encoding failed: {0}")]
    Json(String),
}

/// How a rotation case is laid out in the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RotationLayout {
    /// `n k`, then `n` integers.
    #[default]
    WithLength,
    /// `k`, then the integers; the line itself sets the length.
    OffsetOnly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationCase {
    pub values: Vec<i64>,
    pub offset: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeakCase {
    pub sequence: Vec<char>,
    pub occurrence: u64,
}

/// Rendered answer for one case, numbered from 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseOutcome {
    pub case: usize,
    pub output: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub cases: Vec<CaseOutcome>,
}

impl BatchReport {
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.cases.iter().map(|outcome| outcome.output.as_str())
    }

    pub fn to_json(&self) -> Result<String, BatchError> {
        serde_json::to_string_pretty(self).map_err(|e| BatchError::Json(format!("{e}")))
    }
}

struct CaseLines<'a> {
    lines: Box<dyn Iterator<Item = &'a str> + 'a>,
}

impl<'a> CaseLines<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            lines: Box::new(input.lines().map(str::trim).filter(|line| !line.is_empty())),
        }
    }

    fn case_count(&mut self) -> Result<usize, BatchError> {
        let line = self
            .lines
            .next()
            .ok_or_else(|| BatchError::Header("input is empty".to_string()))?;
        line.parse()
            .map_err(|_| BatchError::Header(format!("{line:?} is not a case count")))
    }

    fn next_line(&mut self, case: usize, expected: &'static str) -> Result<&'a str, BatchError> {
        self.lines
            .next()
            .ok_or(BatchError::MissingLine { case, expected })
    }

    fn leftover(&mut self) -> usize {
        self.lines.by_ref().count()
    }
}

fn parse_int<T: std::str::FromStr>(case: usize, token: &str) -> Result<T, BatchError> {
    token.parse().map_err(|_| BatchError::BadInteger {
        case,
        token: token.to_string(),
    })
}

// Splits a "<len> <param>" header line.
fn case_header<'a>(case: usize, line: &'a str) -> Result<(usize, &'a str), BatchError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 2 {
        return Err(BatchError::FieldCount {
            case,
            expected: 2,
            found: fields.len(),
        });
    }
    Ok((parse_int(case, fields[0])?, fields[1]))
}

fn parse_cases<T>(
    input: &str,
    mut parse_case: impl FnMut(usize, &mut CaseLines<'_>) -> Result<T, BatchError>,
) -> Result<Vec<T>, BatchError> {
    let mut lines = CaseLines::new(input);
    let count = lines.case_count()?;
    // The count comes from the input, so it only bounds the loop.
    let mut cases = Vec::new();
    for case in 1..=count {
        cases.push(parse_case(case, &mut lines)?);
    }

    let leftover = lines.leftover();
    if leftover > 0 {
        warn!("ignoring {leftover} line(s) after the last of {count} case(s)");
    }
    Ok(cases)
}

fn parse_int_line(case: usize, line: &str) -> Result<Vec<i64>, BatchError> {
    line.split_whitespace()
        .map(|token| parse_int(case, token))
        .collect()
}

pub fn parse_rotation_cases(input: &str) -> Result<Vec<RotationCase>, BatchError> {
    parse_rotation_cases_with(input, RotationLayout::WithLength)
}

pub fn parse_rotation_cases_with(
    input: &str,
    layout: RotationLayout,
) -> Result<Vec<RotationCase>, BatchError> {
    match layout {
        RotationLayout::WithLength => parse_sized_rotation_cases(input),
        RotationLayout::OffsetOnly => parse_cases(input, |case, lines| {
            let header: Vec<&str> = lines.next_line(case, "`k` line")?.split_whitespace().collect();
            if header.len() != 1 {
                return Err(BatchError::FieldCount {
                    case,
                    expected: 1,
                    found: header.len(),
                });
            }
            let offset = parse_int(case, header[0])?;
            let values = parse_int_line(case, lines.next_line(case, "array line")?)?;
            Ok(RotationCase { values, offset })
        }),
    }
}

fn parse_sized_rotation_cases(input: &str) -> Result<Vec<RotationCase>, BatchError> {
    parse_cases(input, |case, lines| {
        let (declared, offset) = case_header(case, lines.next_line(case, "`n k` line")?)?;
        let offset = parse_int(case, offset)?;
        // A zero-length array has no line of its own: blank lines never reach us.
        if declared == 0 {
            return Ok(RotationCase { values: Vec::new(), offset });
        }
        let values = parse_int_line(case, lines.next_line(case, "array line")?)?;
        if values.len() != declared {
            return Err(BatchError::LengthMismatch {
                case,
                declared,
                found: values.len(),
            });
        }
        Ok(RotationCase { values, offset })
    })
}

pub fn parse_peak_cases(input: &str) -> Result<Vec<PeakCase>, BatchError> {
    parse_cases(input, |case, lines| {
        let (declared, occurrence) = case_header(case, lines.next_line(case, "`N K` line")?)?;
        let occurrence = parse_int(case, occurrence)?;
        if declared == 0 {
            return Ok(PeakCase { sequence: Vec::new(), occurrence });
        }
        let sequence: Vec<char> = lines.next_line(case, "sequence line")?.chars().collect();
        if sequence.len() != declared {
            return Err(BatchError::LengthMismatch {
                case,
                declared,
                found: sequence.len(),
            });
        }
        Ok(PeakCase { sequence, occurrence })
    })
}

/// Rotates every case and renders it with the configured separator.
pub fn run_rotation_batch(input: &str, config: &RotationConfig) -> Result<BatchReport, BatchError> {
    run_rotation_batch_with(input, RotationLayout::WithLength, config)
}

pub fn run_rotation_batch_with(
    input: &str,
    layout: RotationLayout,
    config: &RotationConfig,
) -> Result<BatchReport, BatchError> {
    let cases = parse_rotation_cases_with(input, layout)?;
    info!("running {} rotation case(s)", cases.len());

    let mut report = BatchReport::default();
    for (index, rotation) in cases.iter().enumerate() {
        let case = index + 1;
        let rotated = rotate_signed(&rotation.values, rotation.offset, config.negative_offset)
            .map_err(|source| BatchError::Rotation { case, source })?;
        debug!("case {case}: rotated {} value(s) by {}", rotated.len(), rotation.offset);
        report.cases.push(CaseOutcome {
            case,
            output: render_line(&rotated, &config.separator),
        });
    }
    Ok(report)
}

/// Answers every peak-rotation case.
pub fn run_peak_batch(input: &str) -> Result<BatchReport, BatchError> {
    let cases = parse_peak_cases(input)?;
    info!("running {} peak rotation case(s)", cases.len());

    let mut report = BatchReport::default();
    for (index, peak) in cases.iter().enumerate() {
        let case = index + 1;
        let shifts = peak_rotation_shifts(&peak.sequence, peak.occurrence)
            .map_err(|source| BatchError::Rotation { case, source })?;
        report.cases.push(CaseOutcome {
            case,
            output: shifts.to_string(),
        });
    }
    Ok(report)
}
