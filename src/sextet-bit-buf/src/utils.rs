//! Miscellaneous utilities for working with bits.

use crate::Error;

/// The number of bits encoded by a single base64 symbol.
pub const SYMBOL_BITS: u32 = 6;

/// The widest value that can be pushed or popped at once.
pub const MAX_BITS: u32 = u32::BITS;

/// The bit width used by the `*_u8` convenience methods.
pub const DEFAULT_BITS: u32 = u8::BITS;

// There are no stable branch prediction hints for us.
// We emulate them by nudging the compiler into optimizing
// around the paths which do not call this function.
#[cold]
#[inline(always)]
pub(crate) fn cold() {}

/// Produces a mask with the low `nbits` bits set.
///
/// Computed in 64-bit arithmetic so that `nbits == 32` does not
/// overflow the shift. `nbits` must not exceed 63.
#[inline]
pub const fn mask(nbits: u32) -> u64 {
    (1 << nbits) - 1
}

/// Validates that `nbits` is a bit width accepted by the codec.
#[inline]
pub fn check_bits(nbits: u32) -> Result<(), Error> {
    if (1..=MAX_BITS).contains(&nbits) {
        Ok(())
    } else {
        cold();
        Err(Error::InvalidBitWidth(nbits))
    }
}
