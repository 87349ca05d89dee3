// Copyright 2025 The avmscope Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(unsafe_code)]

//! # avmscope
//!
//! A framework for decoding AVM1 "action string" bytecode and reconstructing control flow
//! graphs from the flat, offset-addressed instruction stream. Built in pure Rust, `avmscope`
//! turns the byte-level encoding of the legacy Flash scripting virtual machine into typed
//! instructions and structured graphs, for analyzers, decompilers, and re-encoders that need
//! more than a linear instruction list.
//!
//! ## Features
//!
//! - **Complete instruction decoding** - Every documented action opcode, with unknown opcodes
//!   preserved verbatim for round-tripping
//! - **Control flow reconstruction** - Minimal labeled block graphs from arbitrary, possibly
//!   overlapping forward/backward jump targets
//! - **Structured regions** - Function bodies, try/catch/finally, with-blocks, and
//!   frame-waits reconstructed as nested graphs
//! - **Deterministic output** - Identical bytes always produce an identical graph, serde
//!   serializable for fixture comparison
//! - **Robust error handling** - Local decode failures stay local; only undecodable streams
//!   fail the parse
//!
//! ## Quick Start
//!
//! ```rust
//! use avmscope::parse_cfg;
//!
//! // trace("..."); laid out as: push, trace, end
//! let bytes = [0x96, 0x02, 0x00, 0x00, 0x00, 0x26, 0x00];
//! let cfg = parse_cfg(&bytes)?;
//! assert_eq!(cfg.blocks.len(), 1);
//! # Ok::<(), avmscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! `avmscope` is organized into three modules, leaves first:
//!
//! - [`stream`] - cursor and bit-level access to the raw bytes
//! - [`disassembler`] - decoding one action at a time into the closed [`disassembler::Action`]
//!   sum type
//! - [`cfg`] - the two-phase discovery/emission builder producing [`Cfg`] values
//!
//! The decoder never interprets control flow and the builder never touches raw bytes; the
//! [`disassembler::ActionReader`] facade is the boundary between them.
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, Error>`](Result). Decoding is pure: no I/O, no retries,
//! and a failed parse on the same bytes always fails the same way. See [`Error`] for the
//! fatal/non-fatal split.

#[macro_use]
pub(crate) mod error;

/// Control-flow-graph reconstruction.
///
/// See [`cfg::parse_cfg`] for the main entry point and [`cfg::Cfg`] for the output model.
pub mod cfg;

/// Action decoding from raw bytes.
///
/// See [`disassembler::decode_action`] and [`disassembler::Action`].
pub mod disassembler;

/// Convenient re-exports of the most commonly used types.
///
/// # Example
///
/// ```rust
/// use avmscope::prelude::*;
///
/// let cfg = parse_cfg(&[0x07])?;
/// assert_eq!(cfg.blocks.len(), 1);
/// # Ok::<(), avmscope::Error>(())
/// ```
pub mod prelude;

/// Cursor and bit-level access to action-string buffers.
///
/// See [`stream::Cursor`] and [`stream::BitReader`].
pub mod stream;

/// `avmscope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always
/// [`Error`]. Used consistently throughout the crate for all fallible operations.
pub type Result<T> = std::result::Result<T, Error>;

/// `avmscope` Error type
///
/// The main error type for all operations in this crate. Provides detailed error information
/// for stream access, action decoding, and graph construction.
pub use error::Error;

/// Main entry point: decode an action string into its control flow graph.
///
/// # Example
///
/// ```rust
/// use avmscope::parse_cfg;
/// let cfg = parse_cfg(&[0x07])?;
/// println!("{} blocks", cfg.blocks.len());
/// # Ok::<(), avmscope::Error>(())
/// ```
pub use cfg::parse_cfg;

/// The control-flow-graph model produced by [`parse_cfg`].
pub use cfg::{Cfg, CfgBlock, CfgLabel, Flow};
