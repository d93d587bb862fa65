//! Batch report driver.

use std::io::Write;

use log::error;

use crate::{
    error::Result,
    format::{FontNames, ReportOptions, format_names},
    record::NameEntry,
};

/// A source of one font's name entries.
///
/// Implementations hold only a cheap handle (typically a path);
/// the underlying font is opened inside [`NameSource::name_entries`]
/// and released when the returned entries are dropped.
pub trait NameSource {
    /// Identifier used in report headers and error notices.
    fn identifier(&self) -> String;

    /// Load the font and extract its name entries.
    fn name_entries(&self) -> Result<Vec<NameEntry>>;
}

/// Aggregate result of a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchStatus {
    /// Every font in the batch was reported.
    Success,
    /// At least one font was reported and at least one failed.
    Partial,
    /// The batch was empty or every font failed.
    Failure,
}

/// Per-font success and failure counts for a batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchOutcome {
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchOutcome {
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed == 0 && self.succeeded > 0
    }

    pub fn status(&self) -> BatchStatus {
        match (self.succeeded, self.failed) {
            (0, _) => BatchStatus::Failure,
            (_, 0) => BatchStatus::Success,
            _ => BatchStatus::Partial,
        }
    }
}

/// Report every font in the batch, isolating per-font failures.
///
/// Fonts are consumed in the order produced, one at a time; each block
/// is rendered in full before anything is written, so a block is either
/// written completely or not at all. A font that cannot be loaded or
/// has no name table contributes an error notice instead of a block and
/// the batch continues. Sink failures abort the run.
pub fn run<S, I, W>(fonts: I, options: &ReportOptions, out: &mut W) -> Result<BatchOutcome>
where
    S: NameSource,
    I: IntoIterator<Item = S>,
    W: Write,
{
    let mut outcome = BatchOutcome::default();
    let mut first = true;

    for font in fonts {
        let source = font.identifier();
        let rendered = font.name_entries().and_then(|entries| {
            format_names(&FontNames { source: source.clone(), entries }, options)
        });

        if !first {
            out.write_all(b"\n")?;
        }
        first = false;

        match rendered {
            Ok(block) => {
                out.write_all(block.as_bytes())?;
                outcome.succeeded += 1;
            }
            Err(e) => {
                error!("skipping {source}: {e}");
                writeln!(out, "Error: {source}: {e}")?;
                outcome.failed += 1;
            }
        }
    }

    out.flush()?;
    Ok(outcome)
}
