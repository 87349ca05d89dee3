//! Action-string disassembler and instruction decoding engine.
//!
//! This module decodes raw action bytes into typed [`Action`] values. It is a leaf,
//! table-driven binary parser: one opcode byte, an optional 16-bit operand length, and a
//! per-opcode operand grammar. Control-flow reconstruction lives in [`crate::cfg`] and is
//! built on top of the [`ActionReader`] random-access facade.
//!
//! # Key Types
//! - [`Action`] - Represents a decoded action
//! - [`ActionHeader`] - Opcode byte plus declared operand length
//! - [`ActionReader`] - Random-access decoding over a whole action string
//!
//! # Main Functions
//! - [`decode_action`] - Decode a single action
//! - [`decode_header`] - Decode only the opcode/length header
//!
//! # Example
//! ```rust
//! use avmscope::disassembler::{decode_action, Action};
//! use avmscope::stream::Cursor;
//!
//! let bytecode = &[0x96, 0x02, 0x00, 0x02, 0x03]; // push null, undefined
//! let mut cursor = Cursor::new(bytecode);
//! let action = decode_action(&mut cursor)?;
//! println!("Mnemonic: {}", action.mnemonic());
//! # Ok::<(), avmscope::Error>(())
//! ```

mod action;
mod decoder;
pub mod opcodes;

pub use action::{
    Action, CatchClause, CatchTarget, ConstantPool, DefineFunction, DefineFunction2, GetUrl,
    GetUrl2, GotoFrame, GotoFrame2, GotoLabel, If, Jump, Parameter, Push, SendVarsMethod,
    SetTarget, StoreRegister, TryAction, UnknownAction, Value, WaitForFrame, WaitForFrame2, With,
};
pub use decoder::{decode_action, decode_header, ActionHeader, ActionReader};
