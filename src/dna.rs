// dna.rs - 碱基与质量值工具

/// Phred+33 (Sanger / Illumina 1.8+) 编码偏移
pub const PHRED_OFFSET: u8 = 33;
/// Highest score a Sanger quality line can carry (`~`).
pub const PHRED_MAX: u8 = 93;

/// 单个碱基互补（IUPAC）
///
/// - A ↔ T, G ↔ C
/// - R ↔ Y, K ↔ M, B ↔ V, D ↔ H
/// - S, W, N 自身互补
/// - 其他字符转为 N
pub fn complement_base(base: u8) -> u8 {
    match base.to_ascii_uppercase() {
        b'A' => b'T',
        b'T' => b'A',
        b'G' => b'C',
        b'C' => b'G',
        b'R' => b'Y',
        b'Y' => b'R',
        b'K' => b'M',
        b'M' => b'K',
        b'B' => b'V',
        b'V' => b'B',
        b'D' => b'H',
        b'H' => b'D',
        b'S' => b'S',
        b'W' => b'W',
        _    => b'N',
    }
}

/// DNA 序列反向互补函数
///
/// 自动转大写并反向序列；对大写 IUPAC 序列应用两次得到原序列。
pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    seq.iter().rev().map(|&b| complement_base(b)).collect()
}

/// Decode a Phred+33 quality line into integer scores.
///
/// Returns the offending byte if it falls outside `!`..=`~` (scores 0..=93).
pub fn decode_phred(qual: &[u8]) -> Result<Vec<u8>, u8> {
    qual.iter()
        .map(|&q| match q.checked_sub(PHRED_OFFSET) {
            Some(score) if score <= PHRED_MAX => Ok(score),
            _ => Err(q),
        })
        .collect()
}

/// Encode integer Phred scores back to printable characters (`score + 33`).
pub fn encode_phred(scores: &[u8]) -> Vec<u8> {
    scores.iter().map(|&s| s.saturating_add(PHRED_OFFSET)).collect()
}

/// Lowest index of `needle` in `haystack`.
pub fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Non-overlapping, left-to-right occurrence count.
pub fn count(haystack: &[u8], needle: &[u8]) -> usize {
    if needle.is_empty() {
        return haystack.len() + 1;
    }
    let mut n = 0;
    let mut pos = 0;
    while let Some(i) = find(&haystack[pos..], needle) {
        n += 1;
        pos += i + needle.len();
    }
    n
}

pub fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    find(haystack, needle).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_is_non_overlapping() {
        assert_eq!(count(b"AAAA", b"AA"), 2);
        assert_eq!(count(b"AAAAA", b"AA"), 2);
        assert_eq!(count(b"ACGT", b"GG"), 0);
        assert_eq!(count(b"", b"A"), 0);
    }

    #[test]
    fn find_returns_first_hit() {
        assert_eq!(find(b"xxGATCxxGATC", b"GATC"), Some(2));
        assert_eq!(find(b"GAT", b"GATC"), None);
    }

    #[test]
    fn phred_decode_rejects_low_bytes() {
        assert_eq!(decode_phred(b"!I5"), Ok(vec![0, 40, 20]));
        assert_eq!(decode_phred(b"I \x1f"), Err(b' '));
    }

    #[test]
    fn phred_decode_rejects_scores_above_93() {
        assert_eq!(decode_phred(b"!~"), Ok(vec![0, 93]));
        assert_eq!(decode_phred(b"I\x7f"), Err(0x7f));
    }

    #[test]
    fn phred_roundtrip_on_printable_line() {
        let line = b"!\"#IIJ~";
        assert_eq!(encode_phred(&decode_phred(line).unwrap()), line.to_vec());
    }
}
