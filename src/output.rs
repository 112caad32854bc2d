//! output — rendering of driver results for the terminal.
//!
//! Purpose
//! -------
//! Turn `avs`/`ave`/`jck` results into text, either as parse-friendly lines
//! (`basic`) or as an aligned table with a bold header.
//!
//! Key behaviors
//! -------------
//! - Basic lines:
//!   - avs: `"{col} {mean:+.11e} {sem:.1e}"`
//!   - ave: `"{col} {bins:04} {size:04} {mean:+.11e} {sem:.1e} {dsem:.1e}"`,
//!     with `" {actime:.1e}"` appended to the first line of each column when
//!     autocorrelation times were computed.
//!   - jck: the ave line without the column label.
//! - Exponents are written with a sign and at least two digits
//!   (`1.5e-03`), so columns line up.
//! - Verbose mode prints the report (for jck followed by the fields) and a
//!   blank line before the numbers.
//!
//! Conventions
//! -----------
//! - Column labels are the 1-based fields from [`PrintConfig::fields`], or
//!   `1..=C` when no fields were selected.
//! - Every function writes to a caller-supplied `io::Write`; the binary
//!   passes a locked stdout.
use crate::binning::{
    report::Report,
    stats::{BinnedStats, Stats},
};
use colored::Colorize;
use std::io::{self, Write};

/// PrintConfig — how results are rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrintConfig {
    /// 1-based labels of the analyzed columns; `None` means all, in order.
    pub fields: Option<Vec<usize>>,
    /// Print the report line before the results.
    pub verbose: bool,
    /// Parse-friendly output instead of a table.
    pub basic: bool,
}

impl PrintConfig {
    fn labels(&self, columns: usize) -> Vec<usize> {
        match &self.fields {
            Some(fields) => fields.clone(),
            None => (1..=columns).collect(),
        }
    }
}

/// Print `avs` results.
pub fn print_avs<W: Write>(
    out: &mut W, stats: &Stats, report: &Report, config: &PrintConfig,
) -> io::Result<()> {
    if config.verbose {
        writeln!(out, "{report}")?;
        writeln!(out)?;
    }
    let labels = config.labels(stats.len());

    if config.basic {
        for (col, summary) in labels.iter().zip(stats) {
            writeln!(out, "{col} {} {}", sci_signed(summary.mean, 11), sci(summary.sem, 1))?;
        }
        return Ok(());
    }

    let mut table = Table::new(&["column", "mean", "SEM"]);
    for (col, summary) in labels.iter().zip(stats) {
        table.row(vec![col.to_string(), sci(summary.mean, 11), sci(summary.sem, 1)]);
    }
    table.write(out)
}

/// Print `ave` results; `actimes` is empty when not computed.
pub fn print_ave<W: Write>(
    out: &mut W, stats: &[BinnedStats], actimes: &[f64], report: &Report, config: &PrintConfig,
) -> io::Result<()> {
    if config.verbose {
        writeln!(out, "{report}")?;
        writeln!(out)?;
    }
    let labels = config.labels(stats.len());
    let actime_at = |column: usize, scale: usize| match (scale, actimes.get(column)) {
        (0, Some(&t)) => Some(t),
        _ => None,
    };

    if config.basic {
        for (column, (col, scaling)) in labels.iter().zip(stats).enumerate() {
            for (scale, entry) in scaling.iter().enumerate() {
                write!(
                    out,
                    "{col} {:04} {:04} {} {} {}",
                    entry.bin_count,
                    entry.bin_size,
                    sci_signed(entry.mean, 11),
                    sci(entry.sem, 1),
                    sci(entry.se_of_sem, 1)
                )?;
                if let Some(t) = actime_at(column, scale) {
                    write!(out, " {}", sci(t, 1))?;
                }
                writeln!(out)?;
            }
        }
        return Ok(());
    }

    let mut header = vec!["col", "bins", "binsize", "mean", "SEM", "SE(SEM)"];
    if !actimes.is_empty() {
        header.push("actime");
    }
    let mut table = Table::new(&header);
    for (column, (col, scaling)) in labels.iter().zip(stats).enumerate() {
        for (scale, entry) in scaling.iter().enumerate() {
            let mut cells = vec![
                col.to_string(),
                entry.bin_count.to_string(),
                entry.bin_size.to_string(),
                sci(entry.mean, 11),
                sci(entry.sem, 1),
                sci(entry.se_of_sem, 1),
            ];
            if !actimes.is_empty() {
                cells.push(actime_at(column, scale).map(|t| sci(t, 1)).unwrap_or_default());
            }
            table.row(cells);
        }
        table.section();
    }
    table.write(out)
}

/// Print `jck` results.
pub fn print_jck<W: Write>(
    out: &mut W, stats: &BinnedStats, report: &Report, config: &PrintConfig,
) -> io::Result<()> {
    if config.verbose {
        match &config.fields {
            Some(fields) => writeln!(out, "{report} :: fields {fields:?}")?,
            None => writeln!(out, "{report} :: fields all")?,
        }
        writeln!(out)?;
    }

    if config.basic {
        for entry in stats {
            writeln!(
                out,
                "{:04} {:04} {} {} {}",
                entry.bin_count,
                entry.bin_size,
                sci_signed(entry.mean, 11),
                sci(entry.sem, 1),
                sci(entry.se_of_sem, 1)
            )?;
        }
        return Ok(());
    }

    let mut table = Table::new(&["bins", "binsize", "mean", "SEM", "SE(SEM)"]);
    for entry in stats {
        table.row(vec![
            entry.bin_count.to_string(),
            entry.bin_size.to_string(),
            sci(entry.mean, 11),
            sci(entry.sem, 1),
            sci(entry.se_of_sem, 1),
        ]);
    }
    table.write(out)
}

/// Scientific notation with a two-digit signed exponent: `1.5e-03`.
fn sci(value: f64, precision: usize) -> String {
    normalize_exponent(format!("{value:.precision$e}"))
}

/// As [`sci`] with an explicit sign on the mantissa: `+1.5e-03`.
fn sci_signed(value: f64, precision: usize) -> String {
    normalize_exponent(format!("{value:+.precision$e}"))
}

fn normalize_exponent(formatted: String) -> String {
    let Some((mantissa, exponent)) = formatted.split_once('e') else {
        return formatted;
    };
    match exponent.parse::<i32>() {
        Ok(exp) => {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
        }
        Err(_) => formatted,
    }
}

// ---- Table rendering -------------------------------------------------------

enum Line {
    Cells(Vec<String>),
    Rule,
}

/// Left-aligned text table; widths follow the widest cell per column.
struct Table {
    header: Vec<String>,
    lines: Vec<Line>,
}

impl Table {
    fn new(header: &[&str]) -> Self {
        Table { header: header.iter().map(|h| h.to_string()).collect(), lines: Vec::new() }
    }

    fn row(&mut self, cells: Vec<String>) {
        self.lines.push(Line::Cells(cells));
    }

    fn section(&mut self) {
        self.lines.push(Line::Rule);
    }

    fn write<W: Write>(mut self, out: &mut W) -> io::Result<()> {
        if matches!(self.lines.last(), Some(Line::Rule)) {
            self.lines.pop();
        }

        let mut widths: Vec<usize> = self.header.iter().map(|h| h.chars().count()).collect();
        for line in &self.lines {
            if let Line::Cells(cells) = line {
                for (width, cell) in widths.iter_mut().zip(cells) {
                    *width = (*width).max(cell.chars().count());
                }
            }
        }
        let total = widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1);
        let rule = "─".repeat(total);

        let header: Vec<String> = self
            .header
            .iter()
            .zip(&widths)
            .map(|(h, &w)| format!("{h:<w$}").bold().to_string())
            .collect();
        writeln!(out, "{}", header.join(" │ ").trim_end())?;
        writeln!(out, "{rule}")?;

        for line in &self.lines {
            match line {
                Line::Cells(cells) => {
                    let padded: Vec<String> =
                        cells.iter().zip(&widths).map(|(c, &w)| format!("{c:<w$}")).collect();
                    writeln!(out, "{}", padded.join(" │ ").trim_end())?;
                }
                Line::Rule => writeln!(out, "{rule}")?,
            }
        }
        Ok(())
    }
}
