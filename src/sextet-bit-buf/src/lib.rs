//! Provides bit level serialization of data into base64 text.
//!
//! Base64 is normally treated as a byte codec: three octets in, four
//! symbols out. This crate instead treats every symbol as a group of
//! 6 bits and lets callers write and read unsigned integers of any
//! width between 1 and 32 bits, with no regard for byte boundaries.
//!
//! - [`Encoder`] accumulates values into symbols and produces padded
//!   base64 text on [`Encoder::flush`].
//!
//! - [`Decoder`] loads base64 text and extracts values of arbitrary
//!   width from a bit cursor which may be repositioned at any time.
//!
//! Bits are always ordered MSB first, so a stream of 8-bit values
//! encodes to the exact same text as standard byte-wise base64.
//!
//! ```
//! use sextet_bit_buf::{Decoder, Encoder};
//!
//! let mut encoder = Encoder::new();
//! encoder.push(84, 8)?;
//! encoder.push(104, 8)?;
//! assert_eq!(encoder.flush(), "VGg=");
//!
//! let mut decoder = Decoder::new();
//! decoder.load("VGg=", None)?;
//! assert_eq!(decoder.pop(8)?, Some(84));
//! assert_eq!(decoder.pop(8)?, Some(104));
//! assert_eq!(decoder.pop(8)?, None);
//! # Ok::<(), sextet_bit_buf::Error>(())
//! ```

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod alphabet;
pub use alphabet::Alphabet;

mod error;
pub use error::Error;

mod reader;
pub use reader::{Decoder, Values};

mod writer;
pub use writer::Encoder;

pub mod utils;
