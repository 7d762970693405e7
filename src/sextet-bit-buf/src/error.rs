use thiserror::Error;

/// Errors that may occur when encoding or decoding bit streams.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A signed value below zero was offered to the encoder.
    #[error("value {0} is negative; only unsigned values can be encoded")]
    NegativeValue(i64),

    /// A value does not fit into the bit width it was pushed with.
    #[error("value {value} does not fit into {nbits} bits")]
    Overflow { value: u64, nbits: u32 },

    /// A bit width outside of the supported `1..=32` range was requested.
    #[error("invalid bit width {0}; must be between 1 and 32")]
    InvalidBitWidth(u32),

    /// The loaded text is not a multiple of 4 symbols long.
    #[error("invalid base64 input of length {0}; must be a multiple of 4")]
    InvalidLength(usize),

    /// An explicit bit count exceeds what the loaded symbols can hold.
    #[error("{bits} bits requested but input only holds {available}")]
    BitsOutOfRange { bits: usize, available: usize },

    /// A byte outside of the alphabet was found at the read cursor.
    #[error("invalid base64 symbol {symbol:#04x} at position {position}")]
    InvalidSymbol { symbol: u8, position: usize },

    /// A custom alphabet failed validation.
    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(&'static str),
}
