use crate::{
    alphabet::{self, Alphabet},
    utils::{check_bits, cold, mask, DEFAULT_BITS, SYMBOL_BITS},
    Error,
};

/// A buffer which serializes variable-width values into base64 text.
///
/// Bits are written MSB first. Every 6 bits complete a symbol which
/// is appended to the output; a trailing partial symbol is kept in
/// the encoder until [`Self::flush`] is called.
#[derive(Clone, Debug)]
pub struct Encoder {
    // The completed symbols produced since the last flush.
    inner: String,

    // The partially filled symbol, aligned to the top of 6 bits.
    value: u8,

    // How many bits in `value` are still free.
    place: u32,

    alphabet: Alphabet,
}

impl Encoder {
    /// Creates an empty [`Encoder`] using the standard alphabet.
    pub const fn new() -> Self {
        Self::with_alphabet(alphabet::STANDARD)
    }

    /// Creates an empty [`Encoder`] which emits symbols from a
    /// given [`Alphabet`].
    pub const fn with_alphabet(alphabet: Alphabet) -> Self {
        Self {
            inner: String::new(),
            value: 0,
            place: SYMBOL_BITS,
            alphabet,
        }
    }

    /// Gets the number of bits pushed since the last flush.
    #[inline]
    pub fn written_bits(&self) -> usize {
        self.inner.len() * SYMBOL_BITS as usize + (SYMBOL_BITS - self.place) as usize
    }

    /// Gets a view of the symbols completed so far.
    ///
    /// This excludes the pending partial symbol and padding.
    #[inline]
    pub fn view(&self) -> &str {
        &self.inner
    }

    /// Reserves capacity for at least `nsymbols` more symbols in
    /// the output buffer.
    #[inline]
    pub fn reserve(&mut self, nsymbols: usize) {
        self.inner.reserve(nsymbols);
    }

    #[inline]
    fn emit(&mut self, value: u8) {
        self.inner.push(self.alphabet.symbol(value) as char);
    }

    /// Appends the low `nbits` bits of `value` to the stream.
    ///
    /// Fails when `nbits` is not in `1..=32` or when `value` does
    /// not fit into `nbits` bits.
    pub fn push(&mut self, value: u64, nbits: u32) -> Result<(), Error> {
        check_bits(nbits)?;
        if value > mask(nbits) {
            cold();
            return Err(Error::Overflow { value, nbits });
        }

        self.push_unchecked(value, nbits);
        Ok(())
    }

    // Caller must make sure `value` fits into `nbits` bits.
    fn push_unchecked(&mut self, value: u64, mut nbits: u32) {
        while nbits > 0 {
            if nbits >= self.place {
                // The top bits of the window complete the current symbol.
                let bits = (value & mask(nbits)) >> (nbits - self.place);
                self.emit(self.value | bits as u8);

                nbits -= self.place;
                self.place = SYMBOL_BITS;
                self.value = 0;
            } else {
                self.place -= nbits;
                self.value |= ((value & mask(nbits)) << self.place) as u8;
                break;
            }
        }
    }

    /// Appends a signed value, which must not be negative, as
    /// `nbits` unsigned bits.
    pub fn push_signed(&mut self, value: i64, nbits: u32) -> Result<(), Error> {
        let value = u64::try_from(value).map_err(|_| Error::NegativeValue(value))?;
        self.push(value, nbits)
    }

    /// Appends a whole byte to the stream.
    #[inline]
    pub fn push_u8(&mut self, value: u8) {
        self.push_unchecked(value as u64, DEFAULT_BITS);
    }

    /// Finishes the stream and returns it as padded base64 text.
    ///
    /// A partial symbol is zero-padded in its low bits, then `=`
    /// is appended until the length is a multiple of 4. The encoder
    /// is reset and can be reused afterwards.
    pub fn flush(&mut self) -> String {
        if self.place != SYMBOL_BITS {
            self.emit(self.value);
            self.place = SYMBOL_BITS;
            self.value = 0;
        }

        let mut out = std::mem::take(&mut self.inner);

        // A lone trailing symbol never comes from whole bytes, but it
        // is padded all the same.
        let padding = match out.len() % 4 {
            0 => 0,
            1 => 3,
            2 => 2,
            _ => 1,
        };
        out.extend(std::iter::repeat(alphabet::PAD as char).take(padding));

        log::trace!("Flushed {} symbols ({padding} padding)", out.len());
        out
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}
