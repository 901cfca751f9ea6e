use std::collections::HashMap;

use super::CompressorError;

/// Seed mapping between the first `2^width` symbols and their codes, held in
/// mirrored form so encoder and decoder start from the same table.
///
/// Both directions are always built from the same width, so a single
/// `InitialTable` cannot be internally inconsistent. Feeding tables of
/// *different* widths to the two sides is still possible and undetectable
/// here; it shows up later as a corrupt stream or wrong text.
#[derive(Debug, Clone, PartialEq)]
pub struct InitialTable {
    width: u32,
    forward: HashMap<char, u32>,
    reverse: HashMap<u32, char>,
}

impl InitialTable {
    /// Builds the table for the first `2^width` symbols.
    ///
    /// Widths above 15 would push the alphabet into the surrogate range,
    /// so they are rejected along with 0.
    pub fn new(width: u32) -> Result<InitialTable, CompressorError> {
        if width == 0 || width > 15 {
            return Err(CompressorError::InvalidWidth(width));
        }

        let mut forward = HashMap::new();
        let mut reverse = HashMap::new();
        for code in 0..(1u32 << width) {
            // width <= 15 keeps every scalar below the surrogate block
            if let Some(symbol) = char::from_u32(code) {
                forward.insert(symbol, code);
                reverse.insert(code, symbol);
            }
        }

        Ok(InitialTable {
            width,
            forward,
            reverse,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// First code available for learned sequences: `2^width`.
    pub fn first_free_code(&self) -> u32 {
        1 << self.width
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    pub fn code_for(&self, symbol: char) -> Option<u32> {
        self.forward.get(&symbol).copied()
    }

    pub fn symbol_for(&self, code: u32) -> Option<char> {
        self.reverse.get(&code).copied()
    }

    pub(crate) fn forward(&self) -> &HashMap<char, u32> {
        &self.forward
    }

    pub(crate) fn reverse(&self) -> &HashMap<u32, char> {
        &self.reverse
    }
}
