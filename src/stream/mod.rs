//! Low-level byte and bit access to action-string buffers.
//!
//! This module implements the cursor abstraction the decoder and the control-flow builder are
//! written against:
//!
//! - [`Cursor`] - positioned, bounds-checked reader (little-endian integers and floats,
//!   null-terminated strings, raw byte runs, bounded sub-regions, position get/set)
//! - [`BitReader`] - MSB-first bit-level reads usable mid-stream, with explicit byte
//!   realignment
//! - [`AvmIO`] / [`read_le_at`] - the conversion trait and free function the fixed-width
//!   reads are built on
//!
//! # Example
//!
//! ```rust
//! use avmscope::stream::Cursor;
//!
//! let data = [0x96, 0x02, 0x00];
//! let mut cursor = Cursor::new(&data);
//! let code = cursor.read_le::<u8>()?;
//! let length = cursor.read_le::<u16>()?;
//! assert_eq!((code, length), (0x96, 2));
//! # Ok::<(), avmscope::Error>(())
//! ```

mod bits;
mod cursor;
mod io;

pub use bits::BitReader;
pub use cursor::Cursor;
pub use io::{read_le_at, AvmIO};
