//! High-level text compaction: bytes to mode-tagged codes
//!
//! The encoder walks the input once, keeping a current latched mode (initially
//! Upper). Each byte is emitted directly when the current table holds it.
//! Otherwise a target table is chosen and entered either by a shift, which
//! covers a single symbol, or by the cheapest latch chain. Bytes no text table
//! can express are carried in a Binary Shift run.

use super::bitbuffer::BitBuffer;
use super::tables::{
    BINARY_RUN_MAX, BINARY_SHORT_MAX, Mode, char_code, is_binary_only, latch_code, latch_path,
    punct_pair_code, shift_code,
};
use tracing::trace;

/// What an emitted code means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A character (or Punct pair) from the given table
    Char(Mode),
    /// Persistent change from one table to another
    Latch {
        /// Mode the code is emitted in
        from: Mode,
        /// Mode entered
        to: Mode,
    },
    /// One-symbol excursion into another table
    Shift {
        /// Mode the code is emitted in, and returned to afterwards
        from: Mode,
        /// Mode of the next symbol
        to: Mode,
    },
    /// Byte count of a binary run (5 bits, or 5 zero bits + 11 bits)
    BinaryLength,
    /// One raw byte of a binary run
    BinaryByte,
}

/// One code of the encoded stream before stuffing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// Meaning of the code
    pub kind: TokenKind,
    /// Code value
    pub value: u16,
    /// Width of the code in bits
    pub bits: u8,
}

impl Token {
    fn new(kind: TokenKind, value: u16, bits: usize) -> Self {
        Self {
            kind,
            value,
            bits: bits as u8,
        }
    }
}

/// Encode `input` into the Aztec high-level bit stream
pub fn encode(input: &[u8]) -> BitBuffer {
    ModeEncoder::new(input).encode()
}

/// Greedy text compactor over a byte slice
pub struct ModeEncoder<'a> {
    input: &'a [u8],
    pos: usize,
    mode: Mode,
    tokens: Vec<Token>,
}

impl<'a> ModeEncoder<'a> {
    /// Create an encoder positioned at the start of `input`, in Upper mode
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            mode: Mode::Upper,
            tokens: Vec::with_capacity(input.len() + 4),
        }
    }

    /// Run to the end of input and return the emitted tokens
    pub fn tokens(mut self) -> Vec<Token> {
        self.run();
        self.tokens
    }

    /// Run to the end of input and pack the tokens MSB-first
    pub fn encode(self) -> BitBuffer {
        let tokens = self.tokens();
        let total: usize = tokens.iter().map(|t| t.bits as usize).sum();
        let mut bits = BitBuffer::with_capacity(total);
        for token in &tokens {
            bits.append_msb(token.value as u32, token.bits as usize);
        }
        bits
    }

    fn run(&mut self) {
        while self.pos < self.input.len() {
            if let Some((code, len)) = self.symbol_at(self.mode, self.pos) {
                self.emit_char(self.mode, code, len);
                continue;
            }

            if is_binary_only(self.input[self.pos]) {
                self.binary_run();
                continue;
            }

            let target = self.choose_target();
            let shifted = self.enter(target);
            let Some((code, len)) = self.symbol_at(target, self.pos) else {
                unreachable!("target mode chosen without a code for the current byte");
            };
            self.emit_char(target, code, len);
            if shifted {
                trace!(mode = ?self.mode, "shift returns");
            }
        }
    }

    /// Code and byte length of the symbol starting at `pos` in `mode`.
    /// Punct prefers its two-character codes.
    fn symbol_at(&self, mode: Mode, pos: usize) -> Option<(u8, usize)> {
        let byte = *self.input.get(pos)?;
        if mode == Mode::Punct {
            if let Some(&next) = self.input.get(pos + 1) {
                if let Some(code) = punct_pair_code(byte, next) {
                    return Some((code, 2));
                }
            }
        }
        char_code(mode, byte).map(|code| (code, 1))
    }

    /// Pick the table for a byte the current mode cannot encode.
    ///
    /// A Punct pair always goes to Punct. Otherwise, among the tables holding
    /// the byte, the first that also holds the following byte wins, falling
    /// back to the first candidate in tie-break order.
    ///
    /// The order (Punct, Upper, Lower, Mixed, Digit) is a fixed priority, not
    /// a cost comparison: `"..."` from Upper latches to Punct through Mixed
    /// (25 bits) even though a Digit latch would need 17.
    fn choose_target(&self) -> Mode {
        let byte = self.input[self.pos];
        let next = self.input.get(self.pos + 1).copied();
        if let Some(n) = next {
            if punct_pair_code(byte, n).is_some() {
                return Mode::Punct;
            }
        }

        let candidates = Mode::TEXT
            .iter()
            .copied()
            .filter(|&m| char_code(m, byte).is_some());
        let mut first = None;
        for mode in candidates {
            if first.is_none() {
                first = Some(mode);
            }
            if next.is_some_and(|n| char_code(mode, n).is_some()) {
                return mode;
            }
        }
        first.unwrap_or(Mode::Upper)
    }

    /// Emit the codes needed to encode the next symbol in `target`.
    /// Returns true when a shift was used (the current mode is unchanged).
    fn enter(&mut self, target: Mode) -> bool {
        let from = self.mode;
        if let Some(code) = shift_code(from, target) {
            if self.shift_fits(target) {
                trace!(?from, to = ?target, "shift");
                self.tokens.push(Token::new(
                    TokenKind::Shift { from, to: target },
                    code as u16,
                    from.bit_width(),
                ));
                return true;
            }
        }
        self.latch(target);
        false
    }

    /// A shift covers exactly one symbol: use it only when the symbol after
    /// the excursion is back in the current mode, or the input ends there.
    fn shift_fits(&self, target: Mode) -> bool {
        let Some((_, len)) = self.symbol_at(target, self.pos) else {
            return false;
        };
        let after = self.pos + len;
        after >= self.input.len() || self.symbol_at(self.mode, after).is_some()
    }

    fn latch(&mut self, target: Mode) {
        trace!(from = ?self.mode, to = ?target, "latch");
        for &step in latch_path(self.mode, target) {
            let Some(code) = latch_code(self.mode, step) else {
                unreachable!("latch path step without a latch code");
            };
            self.tokens.push(Token::new(
                TokenKind::Latch {
                    from: self.mode,
                    to: step,
                },
                code as u16,
                self.mode.bit_width(),
            ));
            self.mode = step;
        }
    }

    fn emit_char(&mut self, mode: Mode, code: u8, len: usize) {
        self.tokens
            .push(Token::new(TokenKind::Char(mode), code as u16, mode.bit_width()));
        self.pos += len;
    }

    /// Length of the binary run starting at the current position. A single
    /// text byte between two binary-only bytes is absorbed into the run.
    fn binary_run_len(&self) -> usize {
        let input = &self.input[self.pos..];
        let mut len = 0;
        while len < input.len() && len < BINARY_RUN_MAX {
            if is_binary_only(input[len]) {
                len += 1;
            } else if len + 2 <= BINARY_RUN_MAX
                && input.get(len + 1).is_some_and(|&b| is_binary_only(b))
            {
                len += 2;
            } else {
                break;
            }
        }
        len.min(BINARY_RUN_MAX)
    }

    fn binary_run(&mut self) {
        // Binary Shift only exists in Upper, Lower and Mixed
        if shift_code(self.mode, Mode::Binary).is_none() {
            self.latch(Mode::Upper);
        }
        let len = self.binary_run_len();
        let from = self.mode;
        trace!(?from, len, "binary shift");

        self.tokens.push(Token::new(
            TokenKind::Shift {
                from,
                to: Mode::Binary,
            },
            31,
            from.bit_width(),
        ));
        if len <= BINARY_SHORT_MAX {
            self.tokens
                .push(Token::new(TokenKind::BinaryLength, len as u16, 5));
        } else {
            self.tokens.push(Token::new(TokenKind::BinaryLength, 0, 5));
            self.tokens.push(Token::new(
                TokenKind::BinaryLength,
                (len - BINARY_SHORT_MAX) as u16,
                11,
            ));
        }
        for &byte in &self.input[self.pos..self.pos + len] {
            self.tokens
                .push(Token::new(TokenKind::BinaryByte, byte as u16, 8));
        }
        self.pos += len;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(input: &[u8]) -> Vec<(u16, u8)> {
        ModeEncoder::new(input)
            .tokens()
            .into_iter()
            .map(|t| (t.value, t.bits))
            .collect()
    }

    #[test]
    fn test_upper_only() {
        assert_eq!(codes(b"KDE"), vec![(12, 5), (5, 5), (6, 5)]);
    }

    #[test]
    fn test_lower_latch() {
        assert_eq!(codes(b"kde"), vec![(28, 5), (12, 5), (5, 5), (6, 5)]);
        assert_eq!(codes(b"Kde"), vec![(12, 5), (28, 5), (5, 5), (6, 5)]);
    }

    #[test]
    fn test_punct_preferred_over_cheaper_digit() {
        assert_eq!(
            codes(b"..."),
            vec![(29, 5), (30, 5), (19, 5), (19, 5), (19, 5)]
        );
    }

    #[test]
    fn test_digit_latch() {
        assert_eq!(codes(b"42"), vec![(30, 5), (6, 4), (4, 4)]);
    }

    #[test]
    fn test_punct_shift_and_latch() {
        assert_eq!(codes(b"K!"), vec![(12, 5), (0, 5), (6, 5)]);
        assert_eq!(
            codes(b"a++"),
            vec![(28, 5), (2, 5), (29, 5), (30, 5), (16, 5), (16, 5)]
        );
    }

    #[test]
    fn test_digit_upper_shift() {
        assert_eq!(
            codes(b"72E3"),
            vec![(30, 5), (9, 4), (4, 4), (15, 4), (6, 5), (5, 4)]
        );
    }

    #[test]
    fn test_binary_shift() {
        assert_eq!(codes(b"\x80\x81"), vec![(31, 5), (2, 5), (128, 8), (129, 8)]);
    }

    #[test]
    fn test_token_kinds() {
        let tokens = ModeEncoder::new(b"a!").tokens();
        assert_eq!(
            tokens[0].kind,
            TokenKind::Latch {
                from: Mode::Upper,
                to: Mode::Lower
            }
        );
        assert_eq!(tokens[1].kind, TokenKind::Char(Mode::Lower));
        assert_eq!(
            tokens[2].kind,
            TokenKind::Shift {
                from: Mode::Lower,
                to: Mode::Punct
            }
        );
        assert_eq!(tokens[3].kind, TokenKind::Char(Mode::Punct));
    }

    #[test]
    fn test_long_binary_run_uses_extended_length() {
        let input = vec![0x80u8; 40];
        let tokens = ModeEncoder::new(&input).tokens();
        assert_eq!((tokens[1].value, tokens[1].bits), (0, 5));
        assert_eq!((tokens[2].value, tokens[2].bits), (9, 11));
        assert_eq!(tokens.len(), 3 + 40);
    }

    #[test]
    fn test_binary_run_is_split_at_limit() {
        let input = vec![0xffu8; BINARY_RUN_MAX + 5];
        let shifts = ModeEncoder::new(&input)
            .tokens()
            .into_iter()
            .filter(|t| matches!(t.kind, TokenKind::Shift { to: Mode::Binary, .. }))
            .count();
        assert_eq!(shifts, 2);
    }

    #[test]
    fn test_binary_run_absorbs_single_text_byte() {
        let tokens = ModeEncoder::new(b"\x80a\x81").tokens();
        assert_eq!((tokens[1].value, tokens[1].bits), (3, 5));
        assert_eq!(tokens.len(), 5);
    }

    #[test]
    fn test_empty_input() {
        assert!(encode(b"").is_empty());
    }
}
