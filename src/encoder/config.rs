use std::sync::OnceLock;

fn parse_env_u32(name: &str, default: u32) -> u32 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(default)
}

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn parse_env_bool_u8(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .map(|v| v != 0)
        .unwrap_or(default)
}

static ECC_PERCENT: OnceLock<u32> = OnceLock::new();

pub(crate) fn ecc_percent() -> u32 {
    *ECC_PERCENT.get_or_init(|| parse_env_u32("AZTEC_ECC_PERCENT", 23).clamp(5, 90))
}

static MIN_ECC_CODEWORDS: OnceLock<usize> = OnceLock::new();

pub(crate) fn min_ecc_codewords() -> usize {
    *MIN_ECC_CODEWORDS
        .get_or_init(|| parse_env_usize("AZTEC_MIN_ECC_CODEWORDS", 3).clamp(0, 64))
}

static ALLOW_COMPACT: OnceLock<bool> = OnceLock::new();

pub(crate) fn allow_compact() -> bool {
    *ALLOW_COMPACT.get_or_init(|| parse_env_bool_u8("AZTEC_ALLOW_COMPACT", true))
}

/// Error correction policy and symbol family restrictions
///
/// `Default` reads `AZTEC_ECC_PERCENT`, `AZTEC_MIN_ECC_CODEWORDS` and
/// `AZTEC_ALLOW_COMPACT` once per process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Share of the symbol's codewords reserved for check words
    pub ecc_percent: u32,
    /// Check words added on top of the percentage
    pub min_ecc_codewords: usize,
    /// Whether compact symbols may be chosen
    pub allow_compact: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            ecc_percent: ecc_percent(),
            min_ecc_codewords: min_ecc_codewords(),
            allow_compact: allow_compact(),
        }
    }
}

impl EncoderConfig {
    /// Override the check word percentage (clamped to 5..=90)
    pub fn with_ecc_percent(mut self, percent: u32) -> Self {
        self.ecc_percent = percent.clamp(5, 90);
        self
    }

    /// Override the fixed check word surplus (clamped to 0..=64)
    pub fn with_min_ecc_codewords(mut self, count: usize) -> Self {
        self.min_ecc_codewords = count.clamp(0, 64);
        self
    }

    /// Allow or forbid compact symbols
    pub fn with_compact(mut self, allow: bool) -> Self {
        self.allow_compact = allow;
        self
    }

    /// Check words required for a symbol holding `total` codewords
    pub fn ecc_codewords(&self, total: usize) -> usize {
        let percent = (total * self.ecc_percent as usize).div_ceil(100);
        (percent + self.min_ecc_codewords).max(1)
    }
}
