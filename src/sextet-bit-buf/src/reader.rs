use crate::{
    alphabet::{self, Alphabet},
    utils::{check_bits, cold, mask, DEFAULT_BITS, SYMBOL_BITS},
    Error,
};

const SYMBOL: usize = SYMBOL_BITS as usize;

/// A cursor which deserializes variable-width values from base64 text.
///
/// Bits are read MSB first. The read position is tracked at bit
/// granularity as the current symbol and the number of bits not
/// yet consumed from it, and may be moved freely with
/// [`Self::offset`].
///
/// Symbols are validated lazily; an invalid one is only reported
/// once the cursor reaches it.
#[derive(Clone, Debug)]
pub struct Decoder {
    // The loaded symbols with padding characters stripped.
    input: Vec<u8>,

    // Trailing bits of the last symbol which carry no data.
    padding: usize,

    // Valid bits from the cursor to the end of the stream. This
    // may go negative when the cursor is moved past the end.
    available: i64,

    // Index of the symbol under the cursor.
    pos: usize,

    // Unread bits left in the symbol at `pos`.
    residual: u32,

    alphabet: Alphabet,
}

impl Decoder {
    /// Creates a [`Decoder`] with no data loaded, using the standard
    /// alphabet.
    pub const fn new() -> Self {
        Self::with_alphabet(alphabet::STANDARD)
    }

    /// Creates a [`Decoder`] with no data loaded which reads symbols
    /// from a given [`Alphabet`].
    pub const fn with_alphabet(alphabet: Alphabet) -> Self {
        Self {
            input: Vec::new(),
            padding: 0,
            available: 0,
            pos: 0,
            residual: SYMBOL_BITS,
            alphabet,
        }
    }

    /// Loads base64 text into the decoder, replacing any previous
    /// stream, and moves the cursor to its start.
    ///
    /// Everything starting from the first `=` is stripped as padding.
    /// When `bits` is given, it denotes the exact number of valid
    /// bits in the stream. Otherwise the count is inferred from the
    /// assumption that the text encodes whole bytes.
    ///
    /// Fails if the length of `text` is not a multiple of 4 or when
    /// `bits` exceeds the capacity of the stripped symbols. The
    /// decoder is left untouched on failure.
    pub fn load(&mut self, text: &str, bits: Option<usize>) -> Result<(), Error> {
        let bytes = text.as_bytes();
        if bytes.len() % 4 != 0 {
            cold();
            return Err(Error::InvalidLength(bytes.len()));
        }

        let mut len = bytes
            .iter()
            .position(|&b| b == alphabet::PAD)
            .unwrap_or(bytes.len());

        let padding = match bits {
            Some(bits) => {
                let capacity = len * SYMBOL;
                if bits > capacity {
                    cold();
                    return Err(Error::BitsOutOfRange {
                        bits,
                        available: capacity,
                    });
                }

                capacity - bits
            }

            None => match (len * SYMBOL) % 8 {
                // A whole symbol of padding bits means the last symbol
                // holds no data at all.
                6 => {
                    log::debug!("Dropping trailing symbol which holds no whole byte");
                    len -= 1;
                    0
                }
                padding => padding,
            },
        };

        self.input.clear();
        self.input.extend_from_slice(&bytes[..len]);
        self.padding = padding;

        log::debug!(
            "Loaded {len} symbols with {} valid bits ({padding} padding)",
            self.total_bits()
        );

        self.rewind();
        Ok(())
    }

    /// Gets the number of valid bits in the loaded stream.
    #[inline]
    pub fn total_bits(&self) -> usize {
        (self.input.len() * SYMBOL).saturating_sub(self.padding)
    }

    /// Gets the number of valid bits left after the cursor.
    #[inline]
    pub fn remaining_bits(&self) -> usize {
        self.available.max(0) as usize
    }

    /// Gets the bit index of the cursor, counted from the start of
    /// the stream.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos * SYMBOL + (SYMBOL_BITS - self.residual) as usize
    }

    /// Moves the cursor to the absolute bit index `bit`.
    ///
    /// Moving past the end of the stream is allowed and leaves no
    /// bits for reading.
    pub fn offset(&mut self, bit: usize) {
        self.pos = bit / SYMBOL;
        self.residual = SYMBOL_BITS - (bit % SYMBOL) as u32;

        self.available = match self.input.len().checked_sub(self.pos + 1) {
            Some(after) => (self.residual as usize + after * SYMBOL) as i64 - self.padding as i64,
            None => 0,
        };
    }

    /// Moves the cursor back to the start of the stream.
    #[inline]
    pub fn rewind(&mut self) {
        self.offset(0);
    }

    #[inline]
    fn symbol_at(&self, pos: usize) -> Result<u64, Error> {
        let symbol = self.input[pos];
        match self.alphabet.index(symbol) {
            Some(value) => Ok(value as u64),
            None => {
                cold();
                Err(Error::InvalidSymbol {
                    symbol,
                    position: pos,
                })
            }
        }
    }

    /// Reads the next `nbits` bits as an unsigned value.
    ///
    /// When fewer than `nbits` bits are left, only the remaining bits
    /// are returned. Once the stream is exhausted, `None` is returned.
    ///
    /// Fails when `nbits` is not in `1..=32` or when an invalid
    /// symbol is encountered; the cursor does not move in that case.
    pub fn pop(&mut self, nbits: u32) -> Result<Option<u32>, Error> {
        check_bits(nbits)?;
        if self.available <= 0 {
            return Ok(None);
        }

        let nbits = self.available.min(nbits as i64) as u32;
        let last = self.input.len() - 1;

        let (mut pos, mut residual) = (self.pos, self.residual);
        let mut value = 0;
        let mut k = nbits;
        while k > 0 {
            let bits = self.symbol_at(pos)? & mask(residual);

            if k >= residual {
                k -= residual;
                value |= bits << k;

                if pos < last {
                    pos += 1;
                    residual = SYMBOL_BITS;
                } else {
                    residual = 0;
                    break;
                }
            } else {
                value |= bits >> (residual - k);
                residual -= k;
                break;
            }
        }

        self.pos = pos;
        self.residual = residual;
        self.available -= nbits as i64;

        Ok(Some(value as u32))
    }

    /// Reads the next byte, or what is left of the stream if it is
    /// shorter than that.
    #[inline]
    pub fn pop_u8(&mut self) -> Result<Option<u8>, Error> {
        self.pop(DEFAULT_BITS).map(|v| v.map(|v| v as u8))
    }

    /// Returns an iterator that pops `nbits` wide values until the
    /// stream is exhausted.
    ///
    /// The iterator ends after yielding the first error.
    pub fn values(&mut self, nbits: u32) -> Values<'_> {
        Values {
            decoder: self,
            nbits,
            done: false,
        }
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the values of a [`Decoder`].
///
/// Created by [`Decoder::values`].
#[derive(Debug)]
pub struct Values<'d> {
    decoder: &'d mut Decoder,
    nbits: u32,
    done: bool,
}

impl Iterator for Values<'_> {
    type Item = Result<u32, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.decoder.pop(self.nbits) {
            Ok(Some(v)) => Some(Ok(v)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
