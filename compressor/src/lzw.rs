use super::table::InitialTable;
use super::trace::{DecodeStep, EncodeStep};
use super::Compressor;
use super::CompressorError;

use std::collections::HashMap;

/// Result of one compress call: the emitted codes, the grown encode-side
/// dictionary, and the per-step trace.
#[derive(Debug, Clone, PartialEq)]
pub struct Compressed {
    pub codes: Vec<u32>,
    pub dictionary: HashMap<String, u32>,
    pub steps: Vec<EncodeStep>,
}

/// Result of one decompress call: the reconstructed text, the independently
/// grown decode-side dictionary, and the per-step trace.
#[derive(Debug, Clone, PartialEq)]
pub struct Decompressed {
    pub text: String,
    pub dictionary: HashMap<u32, String>,
    pub steps: Vec<DecodeStep>,
}

#[derive(Debug, Clone)]
pub struct Lzw {
    table: InitialTable,
}

impl Lzw {
    /// Codec over the byte-wide alphabet, the reference configuration.
    pub fn new() -> Lzw {
        Lzw {
            // width 8 is always accepted
            table: InitialTable::new(8).unwrap(),
        }
    }

    pub fn with_width(width: u32) -> Result<Lzw, CompressorError> {
        Ok(Lzw {
            table: InitialTable::new(width)?,
        })
    }

    pub fn with_table(table: InitialTable) -> Lzw {
        Lzw { table }
    }

    pub fn table(&self) -> &InitialTable {
        &self.table
    }

    pub fn compress(&self, text: &str) -> Result<Compressed, CompressorError> {
        Compressor::compress(self, text)
    }

    pub fn decompress(&self, codes: &[u32]) -> Result<Decompressed, CompressorError> {
        Compressor::decompress(self, codes)
    }
}

impl Default for Lzw {
    fn default() -> Self {
        Lzw::new()
    }
}

impl Compressor for Lzw {
    fn compress(&self, text: &str) -> Result<Compressed, CompressorError> {
        let mut dict: HashMap<String, u32> = self
            .table
            .forward()
            .iter()
            .map(|(&symbol, &code)| (symbol.to_string(), code))
            .collect();
        let mut next_code = self.table.first_free_code();

        let mut codes = Vec::new();
        let mut steps = Vec::new();
        let mut buffer = String::new();
        // code of `buffer`, meaningful whenever `buffer` is non-empty
        let mut buffer_code = 0u32;

        for symbol in text.chars() {
            let symbol_code = self
                .table
                .code_for(symbol)
                .ok_or(CompressorError::InvalidInput(symbol))?;

            let mut candidate = buffer.clone();
            candidate.push(symbol);

            if let Some(&code) = dict.get(&candidate) {
                steps.push(EncodeStep {
                    buffer,
                    symbol: Some(symbol),
                    candidate: candidate.clone(),
                    emitted: None,
                    defined: None,
                });
                buffer = candidate;
                buffer_code = code;
            } else {
                // `buffer` is non-empty here: a lone known symbol always hits
                dict.insert(candidate.clone(), next_code);
                codes.push(buffer_code);
                steps.push(EncodeStep {
                    buffer: buffer.clone(),
                    symbol: Some(symbol),
                    candidate: candidate.clone(),
                    emitted: Some(buffer_code),
                    defined: Some((next_code, candidate)),
                });
                next_code += 1;

                buffer.clear();
                buffer.push(symbol);
                buffer_code = symbol_code;
            }
        }

        if !buffer.is_empty() {
            codes.push(buffer_code);
            steps.push(EncodeStep {
                buffer: buffer.clone(),
                symbol: None,
                candidate: buffer,
                emitted: Some(buffer_code),
                defined: None,
            });
        }

        Ok(Compressed {
            codes,
            dictionary: dict,
            steps,
        })
    }

    fn decompress(&self, codes: &[u32]) -> Result<Decompressed, CompressorError> {
        let mut dict: HashMap<u32, Vec<char>> = self
            .table
            .reverse()
            .iter()
            .map(|(&code, &symbol)| (code, vec![symbol]))
            .collect();
        let mut next_code = self.table.first_free_code();

        let mut steps = Vec::new();

        let Some(&first) = codes.first() else {
            return Ok(Decompressed {
                text: String::new(),
                dictionary: into_final_table(dict),
                steps,
            });
        };

        // the first code always names a single initial symbol
        let first_symbol = self
            .table
            .symbol_for(first)
            .ok_or(CompressorError::CorruptStream {
                code: first,
                next_code,
            })?;
        let mut previous = vec![first_symbol];
        let mut output: String = previous.iter().collect();
        steps.push(DecodeStep {
            code: first,
            previous: String::new(),
            entry: output.clone(),
            defined: None,
        });

        for &code in &codes[1..] {
            let entry: Vec<char> = if let Some(known) = dict.get(&code) {
                known.clone()
            } else if code == next_code {
                // self-reference: the encoder emitted the code it had just
                // assigned to previous + previous[0]
                let mut inferred = previous.clone();
                inferred.push(previous[0]);
                inferred
            } else {
                return Err(CompressorError::CorruptStream { code, next_code });
            };

            output.extend(&entry);

            let mut grown = previous.clone();
            grown.push(entry[0]);
            steps.push(DecodeStep {
                code,
                previous: previous.iter().collect(),
                entry: entry.iter().collect(),
                defined: Some((next_code, grown.iter().collect())),
            });
            dict.insert(next_code, grown);
            next_code += 1;

            previous = entry;
        }

        Ok(Decompressed {
            text: output,
            dictionary: into_final_table(dict),
            steps,
        })
    }
}

fn into_final_table(dict: HashMap<u32, Vec<char>>) -> HashMap<u32, String> {
    dict.into_iter()
        .map(|(code, sequence)| (code, sequence.into_iter().collect()))
        .collect()
}
