/// One step of the encoder: the buffer `w` before the step, the consumed
/// symbol `c` (`None` for the final flush), the candidate `w + c`, the code
/// emitted on a miss, and the dictionary entry defined by the miss.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodeStep {
    pub buffer: String,
    pub symbol: Option<char>,
    pub candidate: String,
    pub emitted: Option<u32>,
    pub defined: Option<(u32, String)>,
}

/// One step of the decoder: the incoming code, the previous entry `w`, the
/// resolved entry, and the dictionary entry defined by the step (`None` for
/// the first code).
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeStep {
    pub code: u32,
    pub previous: String,
    pub entry: String,
    pub defined: Option<(u32, String)>,
}
