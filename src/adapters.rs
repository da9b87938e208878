use crate::dna::reverse_complement;

pub const DEFAULT_DSB_FLANK: &str = "TGCAGGGG";
pub const DEFAULT_RE_FLANK: &str = "GATCGTTT";
/// 5' seed window; the distal adapter is searched after it.
pub const DEFAULT_WINDOW: usize = 30;

/// RAFT adapter pair with reverse complements computed once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adapters {
    pub dsb_flank: Vec<u8>,
    pub re_flank: Vec<u8>,
    pub dsb_flank_rc: Vec<u8>,
    pub re_flank_rc: Vec<u8>,
    pub window: usize,
}

impl Adapters {
    pub fn new(dsb_flank: &[u8], re_flank: &[u8]) -> Self {
        Self::with_window(dsb_flank, re_flank, DEFAULT_WINDOW)
    }

    pub fn with_window(dsb_flank: &[u8], re_flank: &[u8], window: usize) -> Self {
        Adapters {
            dsb_flank: dsb_flank.to_vec(),
            re_flank: re_flank.to_vec(),
            dsb_flank_rc: reverse_complement(dsb_flank),
            re_flank_rc: reverse_complement(re_flank),
            window,
        }
    }
}

impl Default for Adapters {
    fn default() -> Self {
        Adapters::new(DEFAULT_DSB_FLANK.as_bytes(), DEFAULT_RE_FLANK.as_bytes())
    }
}

/// clap value parser: 非空、仅 IUPAC 字符，统一转大写
pub fn parse_adapter(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("adapter sequence cannot be empty".to_string());
    }
    let upper = s.to_ascii_uppercase();
    if let Some(bad) = upper.chars().find(|c| !"ACGTRYSWKMBDHVN".contains(*c)) {
        return Err(format!("invalid character '{}' (must be DNA/IUPAC alphabet)", bad));
    }
    Ok(upper)
}

/// clap value parser for the seed window; must be at least 1
pub fn parse_window(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("window must be at least 1".to_string()),
        Ok(w) => Ok(w),
        Err(e) => Err(format!("invalid window '{}': {}", s, e)),
    }
}
