//! Typed representation of decoded action-string instructions.
//!
//! The [`Action`] enum is a closed sum type covering the full instruction set: one variant per
//! recognized opcode, [`Action::Unknown`] preserving unrecognized opcodes verbatim for
//! round-tripping, [`Action::Error`] for local operand decode failures, and [`Action::End`]
//! for the explicit zero opcode terminating a stream. Every site that consumes actions
//! (successor computation, block emission) matches exhaustively on this type.
//!
//! All types serialize with serde so decoded streams and graphs can be compared against JSON
//! fixtures.

use serde::{Deserialize, Serialize};

/// A single decoded action.
///
/// Most variants are stack-machine operations without operands. The structured variants
/// ([`Action::DefineFunction`], [`Action::DefineFunction2`], [`Action::Try`],
/// [`Action::With`], [`Action::WaitForFrame`], [`Action::WaitForFrame2`]) carry byte lengths
/// or skip counts describing regions of the stream; the control-flow builder recurses into
/// those regions rather than the decoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Action {
    Add,
    Add2,
    And,
    AsciiToChar,
    BitAnd,
    BitLShift,
    BitOr,
    BitRShift,
    BitURShift,
    BitXor,
    Call,
    CallFunction,
    CallMethod,
    CastOp,
    CharToAscii,
    CloneSprite,
    ConstantPool(ConstantPool),
    Decrement,
    DefineFunction(DefineFunction),
    DefineFunction2(DefineFunction2),
    DefineLocal,
    DefineLocal2,
    Delete,
    Delete2,
    Divide,
    /// Explicit zero opcode, or the end of the readable region.
    End,
    EndDrag,
    Enumerate,
    Enumerate2,
    Equals,
    Equals2,
    /// Placeholder for an operand region that failed to decode.
    ///
    /// Instruction boundary alignment is unaffected (the declared operand length is still
    /// consumed), so decoding continues after it; the control-flow builder turns it into a
    /// terminal error flow.
    Error {
        /// Description of the decode failure
        message: String,
    },
    Extends,
    FsCommand2,
    GetMember,
    GetProperty,
    GetTime,
    GetUrl(GetUrl),
    GetUrl2(GetUrl2),
    GetVariable,
    GotoFrame(GotoFrame),
    GotoFrame2(GotoFrame2),
    GotoLabel(GotoLabel),
    Greater,
    If(If),
    ImplementsOp,
    Increment,
    InitArray,
    InitObject,
    InstanceOf,
    Jump(Jump),
    Less,
    Less2,
    MbAsciiToChar,
    MbCharToAscii,
    MbStringExtract,
    MbStringLength,
    Modulo,
    Multiply,
    NewMethod,
    NewObject,
    NextFrame,
    Not,
    Or,
    Play,
    Pop,
    PreviousFrame,
    Push(Push),
    PushDuplicate,
    RandomNumber,
    RemoveSprite,
    Return,
    SetMember,
    SetProperty,
    SetTarget(SetTarget),
    SetTarget2,
    SetVariable,
    StackSwap,
    StartDrag,
    Stop,
    StopSounds,
    StoreRegister(StoreRegister),
    StrictEquals,
    StringAdd,
    StringEquals,
    StringExtract,
    StringGreater,
    StringLength,
    StringLess,
    Subtract,
    TargetPath,
    Throw,
    ToInteger,
    ToNumber,
    ToString,
    ToggleQuality,
    Trace,
    Try(TryAction),
    TypeOf,
    Unknown(UnknownAction),
    WaitForFrame(WaitForFrame),
    WaitForFrame2(WaitForFrame2),
    With(With),
}

impl Action {
    /// Static mnemonic for display and logging.
    #[must_use]
    pub fn mnemonic(&self) -> &'static str {
        self.into()
    }

    /// Whether this action never transfers control to the following instruction.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Action::Return | Action::Throw | Action::End | Action::Error { .. })
    }
}

/// Jump to a specific frame number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GotoFrame {
    /// Zero-based target frame
    pub frame: u16,
}

/// Fetch a URL into a target window or sprite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetUrl {
    pub url: String,
    pub target: String,
}

/// Store the top of the stack into a register without popping it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreRegister {
    pub register: u8,
}

/// Replace the constant pool referenced by constant push values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstantPool {
    pub pool: Vec<String>,
}

/// Branch depending on whether a frame is loaded.
///
/// When the frame is not loaded yet, the next `skip_count` actions are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitForFrame {
    pub frame: u16,
    pub skip_count: u8,
}

/// Stack-operand variant of [`WaitForFrame`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitForFrame2 {
    pub skip_count: u8,
}

/// Change the current target sprite by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetTarget {
    pub target_name: String,
}

/// Jump to a labeled frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GotoLabel {
    pub label: String,
}

/// A named function parameter bound to a register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub register: u8,
    pub name: String,
}

/// Function definition; the body is the next `body_size` bytes of the stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefineFunction {
    pub name: String,
    pub parameters: Vec<String>,
    pub body_size: u16,
}

/// Extended function definition with register bindings and preload/suppress toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefineFunction2 {
    pub name: String,
    pub register_count: u8,
    pub preload_this: bool,
    pub suppress_this: bool,
    pub preload_arguments: bool,
    pub suppress_arguments: bool,
    pub preload_super: bool,
    pub suppress_super: bool,
    pub preload_root: bool,
    pub preload_parent: bool,
    pub preload_global: bool,
    pub parameters: Vec<Parameter>,
    pub body_size: u16,
}

/// Where a caught value is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatchTarget {
    /// Caught value goes into a register
    Register(u8),
    /// Caught value goes into a named variable
    Variable(String),
}

/// Catch clause of a [`TryAction`]: target plus the byte length of the handler region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatchClause {
    pub target: CatchTarget,
    pub size: u16,
}

/// Exception-handling region header.
///
/// The three regions follow the instruction back to back: `try_size` bytes of protected code,
/// then the catch handler (when present), then the finally handler (when present).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TryAction {
    pub try_size: u16,
    pub catch: Option<CatchClause>,
    pub finally_size: Option<u16>,
}

/// Scope block; the body is the next `size` bytes of the stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct With {
    pub size: u16,
}

/// Push a list of values onto the stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Push {
    pub values: Vec<Value>,
}

/// A single value in a [`Push`] list, tagged by its wire type code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    String(String),
    Float32(f32),
    Null,
    Undefined,
    Register(u8),
    Boolean(bool),
    Float64(f64),
    Sint32(i32),
    /// Index into the current constant pool
    Constant(u16),
}

/// Unconditional branch; `offset` is relative to the end of this instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jump {
    pub offset: i16,
}

/// Conditional branch; `offset` is relative to the end of this instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct If {
    pub offset: i16,
}

/// HTTP method selector of [`GetUrl2`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SendVarsMethod {
    None,
    Get,
    Post,
}

/// Stack-operand variant of [`GetUrl`] with bit-packed options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetUrl2 {
    pub method: SendVarsMethod,
    pub load_target: bool,
    pub load_variables: bool,
}

/// Stack-operand variant of [`GotoFrame`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GotoFrame2 {
    pub play: bool,
    pub scene_bias: u16,
}

/// An opcode this library does not recognize, preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnknownAction {
    pub code: u8,
    pub data: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mnemonics() {
        assert_eq!(Action::Stop.mnemonic(), "stop");
        assert_eq!(Action::PushDuplicate.mnemonic(), "push_duplicate");
        assert_eq!(
            Action::Jump(Jump { offset: -2 }).mnemonic(),
            "jump"
        );
    }

    #[test]
    fn terminal_actions() {
        assert!(Action::Return.is_terminal());
        assert!(Action::Throw.is_terminal());
        assert!(Action::End.is_terminal());
        assert!(!Action::Stop.is_terminal());
        assert!(!Action::Jump(Jump { offset: 0 }).is_terminal());
    }
}
