//! Symbol tables mapping 6-bit values to base64 characters.

use crate::Error;

/// The padding byte appended to round output to whole quadruples.
///
/// It is never a data-bearing symbol in any [`Alphabet`].
pub const PAD: u8 = b'=';

// Marker for bytes which do not belong to the alphabet.
const INVALID: u8 = 0xFF;

/// An ordered set of 64 symbols and the inverse lookup for it.
///
/// Index `n` of the alphabet is the character for the 6-bit value `n`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alphabet {
    symbols: [u8; 64],
    lookup: [u8; 256],
}

impl Alphabet {
    // Performs no validation so it can be used in const context
    // for the known-good builtin alphabets.
    const fn from_unchecked(alphabet: &str) -> Self {
        let bytes = alphabet.as_bytes();
        let mut symbols = [0; 64];
        let mut lookup = [INVALID; 256];

        let mut i = 0;
        while i < 64 {
            symbols[i] = bytes[i];
            lookup[bytes[i] as usize] = i as u8;
            i += 1;
        }

        Self { symbols, lookup }
    }

    /// Creates a custom alphabet from a string of 64 symbols.
    ///
    /// The symbols must be unique printable ASCII characters and
    /// must not contain the padding byte [`PAD`].
    pub fn new(alphabet: &str) -> Result<Self, Error> {
        let bytes = alphabet.as_bytes();
        if bytes.len() != 64 {
            return Err(Error::InvalidAlphabet("must consist of 64 symbols"));
        }

        let mut seen = [false; 256];
        for &b in bytes {
            if !(32..127).contains(&b) {
                return Err(Error::InvalidAlphabet("symbols must be printable ASCII"));
            }
            if b == PAD {
                return Err(Error::InvalidAlphabet("padding byte '=' is reserved"));
            }
            if seen[b as usize] {
                return Err(Error::InvalidAlphabet("symbols must be unique"));
            }

            seen[b as usize] = true;
        }

        Ok(Self::from_unchecked(alphabet))
    }

    /// Gets the symbol for the low 6 bits of `value`.
    #[inline]
    pub const fn symbol(&self, value: u8) -> u8 {
        self.symbols[(value & 0x3F) as usize]
    }

    /// Gets the 6-bit value a symbol stands for, if it is part of
    /// the alphabet.
    #[inline]
    pub const fn index(&self, symbol: u8) -> Option<u8> {
        match self.lookup[symbol as usize] {
            INVALID => None,
            v => Some(v),
        }
    }

    /// Gets the alphabet's symbols in value order.
    #[inline]
    pub fn as_str(&self) -> &str {
        // Construction only ever admits ASCII bytes.
        std::str::from_utf8(&self.symbols).unwrap_or_default()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        STANDARD
    }
}

/// The standard alphabet (uses `+` and `/`).
///
/// See [RFC 4648](https://tools.ietf.org/html/rfc4648#section-4).
pub const STANDARD: Alphabet =
    Alphabet::from_unchecked("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/");

/// The URL safe alphabet (uses `-` and `_`).
///
/// See [RFC 4648](https://tools.ietf.org/html/rfc4648#section-5).
pub const URL_SAFE: Alphabet =
    Alphabet::from_unchecked("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_");
