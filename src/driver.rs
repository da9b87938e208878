use anyhow::{Context, Result};
use fastq::Parser;
use std::io::{Read, Write};

use crate::adapters::Adapters;
use crate::classify::{classify, TrimDecision};
use crate::io::NewlineTerminated;
use crate::record::ReadRecord;

/// Per-run counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub total: usize,
    pub forward_contained: usize,
    pub forward_truncated: usize,
    pub reverse_contained: usize,
    pub discarded: usize,
}

impl RunStats {
    fn record(&mut self, decision: &TrimDecision) {
        self.total += 1;
        match decision {
            TrimDecision::ForwardContained { .. } => self.forward_contained += 1,
            TrimDecision::ForwardTruncated { .. } => self.forward_truncated += 1,
            TrimDecision::ReverseContained { .. } => self.reverse_contained += 1,
            TrimDecision::Discard => self.discarded += 1,
        }
    }

    pub fn written(&self) -> usize {
        self.forward_contained + self.forward_truncated + self.reverse_contained
    }
}

/// Classify and trim a single read, writing it if accepted.
pub fn process_read<W: Write>(
    read: &ReadRecord,
    adapters: &Adapters,
    output: &mut W,
    stats: &mut RunStats,
) -> Result<()> {
    let decision = classify(&read.sequence, adapters);
    stats.record(&decision);
    if let Some(trimmed) = read.trim(decision) {
        trimmed
            .write_to(output)
            .context("Failed to write FASTQ record")?;
    }
    Ok(())
}

/// Stream reads one at a time from `input` to `output`.
///
/// Nothing beyond the current record is held in memory; discarded reads
/// produce no output. A missing newline at the end of the input is tolerated.
pub fn run<R: Read, W: Write>(input: R, output: &mut W, adapters: &Adapters) -> Result<RunStats> {
    let mut stats = RunStats::default();
    let mut failure: Option<anyhow::Error> = None;

    Parser::new(NewlineTerminated::new(input))
        .each(|rec| {
            let res = ReadRecord::from_fastq(&rec)
                .and_then(|read| process_read(&read, adapters, output, &mut stats));
            match res {
                Ok(()) => true,
                Err(e) => {
                    failure = Some(e);
                    false
                }
            }
        })
        .context("Failed to parse FASTQ input")?;

    if let Some(e) = failure {
        return Err(e);
    }
    output.flush().context("Failed to flush output")?;
    Ok(stats)
}
