//! # avmscope Prelude
//!
//! This module re-exports the types and functions most code working with action strings
//! needs, allowing for convenient glob imports.
//!
//! # Example
//!
//! ```rust
//! use avmscope::prelude::*;
//!
//! let cfg = parse_cfg(&[0x07])?;
//! for block in &cfg.blocks {
//!     println!("{}: {} actions", block.label, block.actions.len());
//! }
//! # Ok::<(), avmscope::Error>(())
//! ```

pub use crate::cfg::{
    parse_cfg, CatchHandler, Cfg, CfgAction, CfgBlock, CfgDefineFunction, CfgDefineFunction2,
    CfgLabel, Flow,
};
pub use crate::disassembler::{
    decode_action, decode_header, Action, ActionHeader, ActionReader, CatchTarget, Value,
};
pub use crate::stream::{BitReader, Cursor};
pub use crate::{Error, Result};
