//! Aztec code tables (ISO/IEC 24778): character sets, mode transitions,
//! symbol capacities and dimensions, Galois field polynomials.

/// Encoding mode of the high-level text compressor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Capital letters and space
    Upper,
    /// Small letters and space
    Lower,
    /// Control characters and ASCII symbols outside Punct
    Mixed,
    /// Punctuation, including the four two-character codes
    Punct,
    /// Digits, space, comma and period (4-bit codes)
    Digit,
    /// Length-prefixed raw bytes, only ever entered by a shift
    Binary,
}

impl Mode {
    /// The five table-driven modes, in tie-break order for characters that
    /// appear in more than one table
    pub const TEXT: [Mode; 5] = [Mode::Punct, Mode::Upper, Mode::Lower, Mode::Mixed, Mode::Digit];

    /// Width of one code in this mode
    pub fn bit_width(self) -> usize {
        match self {
            Mode::Digit => 4,
            Mode::Binary => 8,
            _ => 5,
        }
    }
}

/// Code for `byte` in the given mode's table, if it has one
pub fn char_code(mode: Mode, byte: u8) -> Option<u8> {
    match mode {
        Mode::Upper => match byte {
            b' ' => Some(1),
            b'A'..=b'Z' => Some(byte - b'A' + 2),
            _ => None,
        },
        Mode::Lower => match byte {
            b' ' => Some(1),
            b'a'..=b'z' => Some(byte - b'a' + 2),
            _ => None,
        },
        Mode::Mixed => match byte {
            b' ' => Some(1),
            0x01..=0x0d => Some(byte + 1),
            0x1b..=0x1f => Some(byte - 0x1b + 15),
            b'@' => Some(20),
            b'\\' => Some(21),
            b'^' => Some(22),
            b'_' => Some(23),
            b'`' => Some(24),
            b'|' => Some(25),
            b'~' => Some(26),
            0x7f => Some(27),
            _ => None,
        },
        Mode::Punct => match byte {
            b'\r' => Some(1),
            b'!'..=b'/' => Some(byte - b'!' + 6),
            b':' => Some(21),
            b';' => Some(22),
            b'<' => Some(23),
            b'=' => Some(24),
            b'>' => Some(25),
            b'?' => Some(26),
            b'[' => Some(27),
            b']' => Some(28),
            b'{' => Some(29),
            b'}' => Some(30),
            _ => None,
        },
        Mode::Digit => match byte {
            b' ' => Some(1),
            b'0'..=b'9' => Some(byte - b'0' + 2),
            b',' => Some(12),
            b'.' => Some(13),
            _ => None,
        },
        Mode::Binary => None,
    }
}

/// Two-character Punct codes: CR LF, ". ", ", " and ": "
pub fn punct_pair_code(first: u8, second: u8) -> Option<u8> {
    match (first, second) {
        (b'\r', b'\n') => Some(2),
        (b'.', b' ') => Some(3),
        (b',', b' ') => Some(4),
        (b':', b' ') => Some(5),
        _ => None,
    }
}

/// Whether `byte` has no representation in any text table
pub fn is_binary_only(byte: u8) -> bool {
    Mode::TEXT.iter().all(|&mode| char_code(mode, byte).is_none())
}

/// Single-step latch code emitted in `from` to enter `to`
pub fn latch_code(from: Mode, to: Mode) -> Option<u8> {
    use Mode::*;
    match (from, to) {
        (Upper, Lower) => Some(28),
        (Upper, Mixed) => Some(29),
        (Upper, Digit) => Some(30),
        (Lower, Mixed) => Some(29),
        (Lower, Digit) => Some(30),
        (Mixed, Lower) => Some(28),
        (Mixed, Upper) => Some(29),
        (Mixed, Punct) => Some(30),
        (Punct, Upper) => Some(31),
        (Digit, Upper) => Some(14),
        _ => None,
    }
}

/// Shift code emitted in `from` to encode one symbol of `to`
pub fn shift_code(from: Mode, to: Mode) -> Option<u8> {
    use Mode::*;
    match (from, to) {
        (Upper | Lower | Mixed | Digit, Punct) => Some(0),
        (Lower, Upper) => Some(28),
        (Digit, Upper) => Some(15),
        (Upper | Lower | Mixed, Binary) => Some(31),
        _ => None,
    }
}

/// Cheapest chain of single-step latches from `from` to `to`, listing each
/// mode entered along the way (the last entry is `to`)
pub fn latch_path(from: Mode, to: Mode) -> &'static [Mode] {
    use Mode::*;
    match (from, to) {
        (Upper, Lower) => &[Lower],
        (Upper, Mixed) => &[Mixed],
        (Upper, Punct) => &[Mixed, Punct],
        (Upper, Digit) => &[Digit],
        (Lower, Upper) => &[Digit, Upper],
        (Lower, Mixed) => &[Mixed],
        (Lower, Punct) => &[Mixed, Punct],
        (Lower, Digit) => &[Digit],
        (Mixed, Upper) => &[Upper],
        (Mixed, Lower) => &[Lower],
        (Mixed, Punct) => &[Punct],
        (Mixed, Digit) => &[Upper, Digit],
        (Punct, Upper) => &[Upper],
        (Punct, Lower) => &[Upper, Lower],
        (Punct, Mixed) => &[Upper, Mixed],
        (Punct, Digit) => &[Upper, Digit],
        (Digit, Upper) => &[Upper],
        (Digit, Lower) => &[Upper, Lower],
        (Digit, Mixed) => &[Upper, Mixed],
        (Digit, Punct) => &[Upper, Mixed, Punct],
        _ => &[],
    }
}

/// Binary runs longer than 31 bytes use an 11-bit extension of `len - 31`
pub const BINARY_SHORT_MAX: usize = 31;
/// Longest run a single binary shift can carry
pub const BINARY_RUN_MAX: usize = BINARY_SHORT_MAX + (1 << 11) - 1;

/// Data layer capacity in bits, index = layers - 1
pub const COMPACT_CAPACITY_BITS: [usize; 4] = [104, 240, 408, 608];

/// Data layer capacity in bits for full symbols, index = layers - 1
pub const FULL_CAPACITY_BITS: [usize; 32] = [
    128, 288, 480, 704, 960, 1248, 1568, 1920, 2304, 2720, 3168, 3648, 4160, 4704, 5280, 5888,
    6528, 7200, 7904, 8640, 9408, 10208, 11040, 11904, 12800, 13728, 14688, 15680, 16704, 17760,
    18848, 19968,
];

/// Symbol side length in modules, index = layers - 1
pub const COMPACT_SYMBOL_SIZE: [usize; 4] = [15, 19, 23, 27];

/// Side length of full symbols, index = layers - 1
pub const FULL_SYMBOL_SIZE: [usize; 32] = [
    19, 23, 27, 31, 37, 41, 45, 49, 53, 57, 61, 67, 71, 75, 79, 83, 87, 91, 95, 101, 105, 109, 113,
    117, 121, 125, 131, 135, 139, 143, 147, 151,
];

/// Primitive polynomial of GF(2^width) for each codeword width
pub fn field_polynomial(width: usize) -> Option<u32> {
    match width {
        4 => Some(0x13),
        6 => Some(0x43),
        8 => Some(0x12d),
        10 => Some(0x409),
        12 => Some(0x1069),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_codes() {
        assert_eq!(char_code(Mode::Upper, b'K'), Some(12));
        assert_eq!(char_code(Mode::Lower, b'b'), Some(3));
        assert_eq!(char_code(Mode::Mixed, b'\n'), Some(11));
        assert_eq!(char_code(Mode::Mixed, 0x07), Some(8));
        assert_eq!(char_code(Mode::Mixed, 0x1b), Some(15));
        assert_eq!(char_code(Mode::Mixed, 0x7f), Some(27));
        assert_eq!(char_code(Mode::Punct, b'!'), Some(6));
        assert_eq!(char_code(Mode::Punct, b','), Some(17));
        assert_eq!(char_code(Mode::Punct, b'/'), Some(20));
        assert_eq!(char_code(Mode::Punct, b'}'), Some(30));
        assert_eq!(char_code(Mode::Digit, b'9'), Some(11));
        assert_eq!(char_code(Mode::Digit, b'.'), Some(13));
        assert_eq!(char_code(Mode::Punct, b' '), None);
    }

    #[test]
    fn test_binary_only_bytes() {
        let binary: Vec<u8> = (0..=255u8).filter(|&b| is_binary_only(b)).collect();
        let expected: Vec<u8> = std::iter::once(0u8)
            .chain(0x0e..=0x1a)
            .chain(0x80..=0xff)
            .collect();
        assert_eq!(binary, expected);
    }

    #[test]
    fn test_latch_paths_use_defined_codes() {
        for &from in &Mode::TEXT {
            for &to in &Mode::TEXT {
                if from == to {
                    assert!(latch_path(from, to).is_empty());
                    continue;
                }
                let path = latch_path(from, to);
                assert_eq!(path.last(), Some(&to));
                let mut current = from;
                for &step in path {
                    assert!(latch_code(current, step).is_some(), "{:?}->{:?}", current, step);
                    current = step;
                }
            }
        }
    }

    #[test]
    fn test_binary_run_limit() {
        assert_eq!(BINARY_RUN_MAX, 2078);
    }
}
