pub mod lzw;
pub mod table;
pub mod trace;

pub use lzw::{Compressed, Decompressed, Lzw};
pub use table::InitialTable;
pub use trace::{DecodeStep, EncodeStep};

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CompressorError {
    #[error("symbol {0:?} is not part of the initial table")]
    InvalidInput(char),
    #[error("code {code} is neither in the dictionary nor the next free code {next_code}")]
    CorruptStream { code: u32, next_code: u32 },
    #[error("code width {0} is outside the supported range 1..=15")]
    InvalidWidth(u32),
}

pub trait Compressor: Send + Sync {
    fn compress(&self, text: &str) -> Result<Compressed, CompressorError>;
    fn decompress(&self, codes: &[u32]) -> Result<Decompressed, CompressorError>;
}
