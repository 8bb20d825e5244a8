use crate::encoder::tables::{
    COMPACT_CAPACITY_BITS, COMPACT_SYMBOL_SIZE, FULL_CAPACITY_BITS, FULL_SYMBOL_SIZE,
};
use crate::error::{Error, Result};

/// Aztec symbol family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolForm {
    /// 1-4 layers, 5-ring bull's eye, 28-bit mode message
    Compact,
    /// 1-32 layers, 7-ring bull's eye, reference grid, 40-bit mode message
    Full,
}

impl SymbolForm {
    /// Highest layer count for this form
    pub fn max_layers(&self) -> u8 {
        match self {
            SymbolForm::Compact => 4,
            SymbolForm::Full => 32,
        }
    }

    /// Radius of the mode message ring around the symbol centre
    pub fn core_radius(&self) -> usize {
        match self {
            SymbolForm::Compact => 5,
            SymbolForm::Full => 7,
        }
    }

    /// Length of the mode message including its check words
    pub fn mode_message_bits(&self) -> usize {
        match self {
            SymbolForm::Compact => 28,
            SymbolForm::Full => 40,
        }
    }

    /// Largest data codeword count the mode message can express
    pub fn max_data_codewords(&self) -> usize {
        match self {
            SymbolForm::Compact => 1 << 6,
            SymbolForm::Full => 1 << 11,
        }
    }
}

/// A concrete symbol size: form plus layer count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolSpec {
    form: SymbolForm,
    layers: u8,
}

impl SymbolSpec {
    /// Validate a form/layer pair
    pub fn new(form: SymbolForm, layers: u8) -> Result<Self> {
        if layers == 0 || layers > form.max_layers() {
            return Err(Error::InvalidSymbol { form, layers });
        }
        Ok(Self { form, layers })
    }

    /// Every symbol in selection order: compact 1..=4, then full 1..=32
    pub fn all() -> impl Iterator<Item = SymbolSpec> {
        let compact = (1..=SymbolForm::Compact.max_layers()).map(|layers| SymbolSpec {
            form: SymbolForm::Compact,
            layers,
        });
        let full = (1..=SymbolForm::Full.max_layers()).map(|layers| SymbolSpec {
            form: SymbolForm::Full,
            layers,
        });
        compact.chain(full)
    }

    /// Symbol form
    pub fn form(&self) -> SymbolForm {
        self.form
    }

    /// Layer count (1-based)
    pub fn layers(&self) -> u8 {
        self.layers
    }

    /// Whether this is a compact symbol
    pub fn is_compact(&self) -> bool {
        self.form == SymbolForm::Compact
    }

    /// Side length in modules, including reference grid lines
    pub fn size(&self) -> usize {
        let idx = self.layers as usize - 1;
        match self.form {
            SymbolForm::Compact => COMPACT_SYMBOL_SIZE[idx],
            SymbolForm::Full => FULL_SYMBOL_SIZE[idx],
        }
    }

    /// Side length ignoring the reference grid
    pub fn base_size(&self) -> usize {
        let base = match self.form {
            SymbolForm::Compact => 11,
            SymbolForm::Full => 14,
        };
        base + 4 * self.layers as usize
    }

    /// Total bits available in the data layers
    pub fn capacity_bits(&self) -> usize {
        let idx = self.layers as usize - 1;
        match self.form {
            SymbolForm::Compact => COMPACT_CAPACITY_BITS[idx],
            SymbolForm::Full => FULL_CAPACITY_BITS[idx],
        }
    }

    /// Codeword width in bits
    pub fn codeword_width(&self) -> usize {
        match self.layers {
            1..=2 => 6,
            3..=8 => 8,
            9..=22 => 10,
            _ => 12,
        }
    }

    /// Number of whole codewords (data plus check) in the data layers
    pub fn total_codewords(&self) -> usize {
        self.capacity_bits() / self.codeword_width()
    }

    /// Leading zero bits needed to fill the data layers exactly
    pub fn start_padding_bits(&self) -> usize {
        self.capacity_bits() % self.codeword_width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_size() {
        assert_eq!(SymbolSpec::new(SymbolForm::Compact, 1).unwrap().size(), 15);
        assert_eq!(SymbolSpec::new(SymbolForm::Compact, 4).unwrap().size(), 27);
        assert_eq!(SymbolSpec::new(SymbolForm::Full, 1).unwrap().size(), 19);
        assert_eq!(SymbolSpec::new(SymbolForm::Full, 5).unwrap().size(), 37);
        assert_eq!(SymbolSpec::new(SymbolForm::Full, 32).unwrap().size(), 151);
    }

    #[test]
    fn test_size_matches_reference_grid_formula() {
        for spec in SymbolSpec::all() {
            let base = spec.base_size();
            let expected = match spec.form() {
                SymbolForm::Compact => base,
                SymbolForm::Full => base + 1 + 2 * ((base / 2 - 1) / 15),
            };
            assert_eq!(spec.size(), expected, "{:?}", spec);
        }
    }

    #[test]
    fn test_capacity_matches_layer_formula() {
        for spec in SymbolSpec::all() {
            let layers = spec.layers() as usize;
            let per_layer = if spec.is_compact() { 88 } else { 112 };
            assert_eq!(spec.capacity_bits(), (per_layer + 16 * layers) * layers);
        }
    }

    #[test]
    fn test_invalid_layers() {
        assert!(SymbolSpec::new(SymbolForm::Compact, 0).is_err());
        assert!(SymbolSpec::new(SymbolForm::Compact, 5).is_err());
        assert!(SymbolSpec::new(SymbolForm::Full, 33).is_err());
    }

    #[test]
    fn test_selection_order() {
        let all: Vec<SymbolSpec> = SymbolSpec::all().collect();
        assert_eq!(all.len(), 36);
        assert!(all[..4].iter().all(|s| s.is_compact()));
        assert_eq!(all[4], SymbolSpec::new(SymbolForm::Full, 1).unwrap());
        assert_eq!(all[35].layers(), 32);
    }

    #[test]
    fn test_codeword_width() {
        let width = |form, layers| SymbolSpec::new(form, layers).unwrap().codeword_width();
        assert_eq!(width(SymbolForm::Compact, 2), 6);
        assert_eq!(width(SymbolForm::Compact, 3), 8);
        assert_eq!(width(SymbolForm::Full, 8), 8);
        assert_eq!(width(SymbolForm::Full, 9), 10);
        assert_eq!(width(SymbolForm::Full, 22), 10);
        assert_eq!(width(SymbolForm::Full, 23), 12);
    }
}
