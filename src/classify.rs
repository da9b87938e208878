// classify.rs - 判断插入方向并给出裁剪坐标

use crate::adapters::Adapters;
use crate::dna::{contains, count, find};

/// Per-read outcome. Coordinates are half-open indices into the read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimDecision {
    /// Both adapters found, DSB flank first.
    ForwardContained { start: usize, end: usize },
    /// DSB flank found, restriction-site flank not confidently located.
    ForwardTruncated { start: usize },
    /// Both adapters found as reverse complements; slice must be flipped.
    ReverseContained { start: usize, end: usize },
    Discard,
}

impl TrimDecision {
    pub fn is_discard(&self) -> bool {
        matches!(self, TrimDecision::Discard)
    }
}

/// Classify one read sequence against the adapter pair.
///
/// The forward path is tried first; if it rejects the read, the reverse path
/// gets its own chance. A read matching neither 5' window is discarded.
pub fn classify(seq: &[u8], adapters: &Adapters) -> TrimDecision {
    let w = adapters.window;
    let head = &seq[..seq.len().min(w)];
    let tail = &seq[seq.len().min(w)..];

    if contains(head, &adapters.dsb_flank) {
        if let Some(decision) = forward(seq, tail, adapters) {
            return decision;
        }
    }

    if contains(head, &adapters.re_flank_rc) {
        return reverse(seq, tail, adapters);
    }

    TrimDecision::Discard
}

/// `None` means rejected; the caller falls through to the reverse check.
fn forward(seq: &[u8], tail: &[u8], a: &Adapters) -> Option<TrimDecision> {
    // adapter concatemer
    if count(seq, &a.dsb_flank) >= 2 {
        return None;
    }
    // same primer at both ends / hetero-concatemer
    if contains(seq, &a.dsb_flank_rc) || contains(seq, &a.re_flank_rc) {
        return None;
    }

    let Some(hit) = find(seq, &a.dsb_flank) else {
        return None;
    };
    let start = hit + a.dsb_flank.len();

    if count(tail, &a.re_flank) != 1 {
        return Some(TrimDecision::ForwardTruncated { start });
    }
    match find(seq, &a.re_flank) {
        Some(end) => Some(TrimDecision::ForwardContained { start, end: end.max(start) }),
        None => Some(TrimDecision::ForwardTruncated { start }),
    }
}

fn reverse(seq: &[u8], tail: &[u8], a: &Adapters) -> TrimDecision {
    if count(seq, &a.re_flank_rc) >= 2 {
        return TrimDecision::Discard;
    }
    if contains(seq, &a.re_flank) || contains(seq, &a.dsb_flank) {
        return TrimDecision::Discard;
    }

    let Some(hit) = find(seq, &a.re_flank_rc) else {
        return TrimDecision::Discard;
    };
    let start = hit + a.re_flank_rc.len();

    // DSB end outside the read: breakpoint can't be recovered
    if count(tail, &a.dsb_flank_rc) != 1 {
        return TrimDecision::Discard;
    }
    match find(seq, &a.dsb_flank_rc) {
        Some(end) => TrimDecision::ReverseContained { start, end: end.max(start) },
        None => TrimDecision::Discard,
    }
}
