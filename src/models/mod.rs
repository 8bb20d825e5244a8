pub mod aztec_code;
pub mod matrix;
pub mod symbol;

pub use aztec_code::AztecCode;
pub use matrix::BitMatrix;
pub use symbol::{SymbolForm, SymbolSpec};
