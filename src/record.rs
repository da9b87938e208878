use anyhow::{bail, Result};
use std::io::Write;

use crate::classify::TrimDecision;
use crate::dna::{decode_phred, encode_phred, reverse_complement};

/// One single-end read with integer Phred scores aligned to the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadRecord {
    pub description: String,
    pub sequence: Vec<u8>,
    pub qualities: Vec<u8>,
}

/// Accepted, re-oriented insert ready for output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrimmedRead {
    pub description: String,
    pub sequence: Vec<u8>,
    pub qualities: Vec<u8>,
}

fn strip_cr(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\r").unwrap_or(line)
}

impl ReadRecord {
    pub fn new(description: impl Into<String>, sequence: Vec<u8>, qualities: Vec<u8>) -> Self {
        ReadRecord {
            description: description.into(),
            sequence,
            qualities,
        }
    }

    /// Build from a parsed FASTQ record, decoding the Phred+33 quality line.
    pub fn from_fastq<R: fastq::Record>(rec: &R) -> Result<Self> {
        let description = String::from_utf8_lossy(strip_cr(rec.head())).into_owned();
        let sequence = strip_cr(rec.seq()).to_vec();
        let qual = strip_cr(rec.qual());

        if qual.len() != sequence.len() {
            bail!(
                "Read '{}': sequence length {} != quality length {}",
                description,
                sequence.len(),
                qual.len()
            );
        }
        let qualities = match decode_phred(qual) {
            Ok(q) => q,
            Err(b) => bail!(
                "Read '{}': quality character {:?} is outside the Phred+33 range",
                description,
                b as char
            ),
        };
        Ok(ReadRecord::new(description, sequence, qualities))
    }

    /// Apply a decision. `Discard` yields nothing.
    pub fn trim(&self, decision: TrimDecision) -> Option<TrimmedRead> {
        let (sequence, qualities) = match decision {
            TrimDecision::ForwardContained { start, end } => (
                self.sequence[start..end].to_vec(),
                self.qualities[start..end].to_vec(),
            ),
            TrimDecision::ForwardTruncated { start } => (
                self.sequence[start..].to_vec(),
                self.qualities[start..].to_vec(),
            ),
            TrimDecision::ReverseContained { start, end } => (
                reverse_complement(&self.sequence[start..end]),
                // 质量值只反转顺序，不做互补
                self.qualities[start..end].iter().rev().copied().collect(),
            ),
            TrimDecision::Discard => return None,
        };
        Some(TrimmedRead {
            description: self.description.clone(),
            sequence,
            qualities,
        })
    }
}

impl TrimmedRead {
    // 直接写入到buffer的方法
    pub fn write_to_bytes(&self, buffer: &mut Vec<u8>) {
        buffer.push(b'@');
        buffer.extend_from_slice(self.description.as_bytes());
        buffer.push(b'\n');
        buffer.extend_from_slice(&self.sequence);
        buffer.push(b'\n');
        buffer.extend_from_slice(b"+\n");
        buffer.extend_from_slice(&encode_phred(&self.qualities));
        buffer.push(b'\n');
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let mut buffer = Vec::with_capacity(self.description.len() + 2 * self.sequence.len() + 8);
        self.write_to_bytes(&mut buffer);
        writer.write_all(&buffer)
    }
}
