//! Action decoding from raw bytes.
//!
//! This module provides the low-level functions turning bytes into [`Action`] values:
//! [`decode_header`] for the opcode/length header alone, [`decode_action`] for one complete
//! instruction, and [`ActionReader`] for random access into a whole action string (the access
//! pattern of the control-flow builder).
//!
//! # Example: Decoding a Single Action
//!
//! ```rust
//! use avmscope::{disassembler::{decode_action, Action}, stream::Cursor};
//!
//! let code = [0x07]; // stop
//! let mut cursor = Cursor::new(&code);
//! let action = decode_action(&mut cursor)?;
//! assert_eq!(action, Action::Stop);
//! # Ok::<(), avmscope::Error>(())
//! ```

use bitflags::bitflags;

use crate::{
    disassembler::{
        action::{
            Action, CatchClause, CatchTarget, ConstantPool, DefineFunction, DefineFunction2,
            GetUrl, GetUrl2, GotoFrame, GotoFrame2, GotoLabel, If, Jump, Parameter, Push,
            SendVarsMethod, SetTarget, StoreRegister, TryAction, UnknownAction, Value,
            WaitForFrame, WaitForFrame2, With,
        },
        opcodes,
    },
    stream::Cursor,
    Error, Result,
};

bitflags! {
    /// Flag byte of the try action.
    struct TryFlags: u8 {
        const CATCH = 1 << 0;
        const FINALLY = 1 << 1;
        const CATCH_IN_REGISTER = 1 << 2;
    }
}

bitflags! {
    /// Flag word of the extended function definition.
    struct Function2Flags: u16 {
        const PRELOAD_THIS = 1 << 0;
        const SUPPRESS_THIS = 1 << 1;
        const PRELOAD_ARGUMENTS = 1 << 2;
        const SUPPRESS_ARGUMENTS = 1 << 3;
        const PRELOAD_SUPER = 1 << 4;
        const SUPPRESS_SUPER = 1 << 5;
        const PRELOAD_ROOT = 1 << 6;
        const PRELOAD_PARENT = 1 << 7;
        const PRELOAD_GLOBAL = 1 << 8;
    }
}

/// Opcode byte and declared operand length of one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionHeader {
    /// The opcode byte
    pub code: u8,
    /// Declared operand length; always 0 below the length-prefix threshold
    pub length: usize,
}

/// Decode an action header at the cursor position.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] if the header itself is truncated.
pub fn decode_header(cursor: &mut Cursor) -> Result<ActionHeader> {
    let code = cursor.read_le::<u8>()?;
    let length = if code < opcodes::LENGTH_PREFIX_THRESHOLD {
        0
    } else {
        usize::from(cursor.read_le::<u16>()?)
    };
    Ok(ActionHeader { code, length })
}

/// Decode exactly one action at the cursor position, leaving the cursor at the next
/// instruction boundary.
///
/// Grammars that consume less than the declared operand length have the remaining declared
/// bytes skipped, so unrecognized operand encodings cannot desynchronize the stream. An
/// unrecognized opcode is not an error: it decodes to [`Action::Unknown`] with its operand
/// bytes preserved verbatim. A malformed operand payload that does not affect boundary
/// alignment decodes to [`Action::Error`].
///
/// # Errors
/// Returns [`crate::Error::IncompleteStream`] if the declared operand length exceeds the
/// remaining bytes, or [`crate::Error::OutOfBounds`] if a fixed-width read crosses the end of
/// the buffer.
pub fn decode_action(cursor: &mut Cursor) -> Result<Action> {
    let start = cursor.pos();
    let header = decode_header(cursor)?;

    if cursor.remaining() < header.length {
        return Err(Error::IncompleteStream {
            offset: start,
            declared: header.length,
            available: cursor.remaining(),
        });
    }

    let operands_start = cursor.pos();
    let action = match header.code {
        opcodes::NEXT_FRAME => Action::NextFrame,
        opcodes::PREVIOUS_FRAME => Action::PreviousFrame,
        opcodes::PLAY => Action::Play,
        opcodes::STOP => Action::Stop,
        opcodes::TOGGLE_QUALITY => Action::ToggleQuality,
        opcodes::STOP_SOUNDS => Action::StopSounds,
        opcodes::ADD => Action::Add,
        opcodes::SUBTRACT => Action::Subtract,
        opcodes::MULTIPLY => Action::Multiply,
        opcodes::DIVIDE => Action::Divide,
        opcodes::EQUALS => Action::Equals,
        opcodes::LESS => Action::Less,
        opcodes::AND => Action::And,
        opcodes::OR => Action::Or,
        opcodes::NOT => Action::Not,
        opcodes::STRING_EQUALS => Action::StringEquals,
        opcodes::STRING_LENGTH => Action::StringLength,
        opcodes::STRING_EXTRACT => Action::StringExtract,
        opcodes::POP => Action::Pop,
        opcodes::TO_INTEGER => Action::ToInteger,
        opcodes::GET_VARIABLE => Action::GetVariable,
        opcodes::SET_VARIABLE => Action::SetVariable,
        opcodes::SET_TARGET2 => Action::SetTarget2,
        opcodes::STRING_ADD => Action::StringAdd,
        opcodes::GET_PROPERTY => Action::GetProperty,
        opcodes::SET_PROPERTY => Action::SetProperty,
        opcodes::CLONE_SPRITE => Action::CloneSprite,
        opcodes::REMOVE_SPRITE => Action::RemoveSprite,
        opcodes::TRACE => Action::Trace,
        opcodes::START_DRAG => Action::StartDrag,
        opcodes::END_DRAG => Action::EndDrag,
        opcodes::STRING_LESS => Action::StringLess,
        opcodes::THROW => Action::Throw,
        opcodes::CAST_OP => Action::CastOp,
        opcodes::IMPLEMENTS_OP => Action::ImplementsOp,
        opcodes::FS_COMMAND2 => Action::FsCommand2,
        opcodes::RANDOM_NUMBER => Action::RandomNumber,
        opcodes::MB_STRING_LENGTH => Action::MbStringLength,
        opcodes::CHAR_TO_ASCII => Action::CharToAscii,
        opcodes::ASCII_TO_CHAR => Action::AsciiToChar,
        opcodes::GET_TIME => Action::GetTime,
        opcodes::MB_STRING_EXTRACT => Action::MbStringExtract,
        opcodes::MB_CHAR_TO_ASCII => Action::MbCharToAscii,
        opcodes::MB_ASCII_TO_CHAR => Action::MbAsciiToChar,
        opcodes::DELETE => Action::Delete,
        opcodes::DELETE2 => Action::Delete2,
        opcodes::DEFINE_LOCAL => Action::DefineLocal,
        opcodes::CALL_FUNCTION => Action::CallFunction,
        opcodes::RETURN => Action::Return,
        opcodes::MODULO => Action::Modulo,
        opcodes::NEW_OBJECT => Action::NewObject,
        opcodes::DEFINE_LOCAL2 => Action::DefineLocal2,
        opcodes::INIT_ARRAY => Action::InitArray,
        opcodes::INIT_OBJECT => Action::InitObject,
        opcodes::TYPE_OF => Action::TypeOf,
        opcodes::TARGET_PATH => Action::TargetPath,
        opcodes::ENUMERATE => Action::Enumerate,
        opcodes::ADD2 => Action::Add2,
        opcodes::LESS2 => Action::Less2,
        opcodes::EQUALS2 => Action::Equals2,
        opcodes::TO_NUMBER => Action::ToNumber,
        opcodes::TO_STRING => Action::ToString,
        opcodes::PUSH_DUPLICATE => Action::PushDuplicate,
        opcodes::STACK_SWAP => Action::StackSwap,
        opcodes::GET_MEMBER => Action::GetMember,
        opcodes::SET_MEMBER => Action::SetMember,
        opcodes::INCREMENT => Action::Increment,
        opcodes::DECREMENT => Action::Decrement,
        opcodes::CALL_METHOD => Action::CallMethod,
        opcodes::NEW_METHOD => Action::NewMethod,
        opcodes::INSTANCE_OF => Action::InstanceOf,
        opcodes::ENUMERATE2 => Action::Enumerate2,
        opcodes::BIT_AND => Action::BitAnd,
        opcodes::BIT_OR => Action::BitOr,
        opcodes::BIT_XOR => Action::BitXor,
        opcodes::BIT_LSHIFT => Action::BitLShift,
        opcodes::BIT_RSHIFT => Action::BitRShift,
        opcodes::BIT_URSHIFT => Action::BitURShift,
        opcodes::STRICT_EQUALS => Action::StrictEquals,
        opcodes::GREATER => Action::Greater,
        opcodes::STRING_GREATER => Action::StringGreater,
        opcodes::EXTENDS => Action::Extends,
        opcodes::GOTO_FRAME => Action::GotoFrame(decode_goto_frame(cursor)?),
        opcodes::GET_URL => Action::GetUrl(decode_get_url(cursor)?),
        opcodes::STORE_REGISTER => Action::StoreRegister(decode_store_register(cursor)?),
        opcodes::CONSTANT_POOL => Action::ConstantPool(decode_constant_pool(cursor)?),
        opcodes::WAIT_FOR_FRAME => Action::WaitForFrame(decode_wait_for_frame(cursor)?),
        opcodes::SET_TARGET => Action::SetTarget(decode_set_target(cursor)?),
        opcodes::GOTO_LABEL => Action::GotoLabel(decode_goto_label(cursor)?),
        opcodes::WAIT_FOR_FRAME2 => Action::WaitForFrame2(decode_wait_for_frame2(cursor)?),
        opcodes::DEFINE_FUNCTION2 => Action::DefineFunction2(decode_define_function2(cursor)?),
        opcodes::TRY => Action::Try(decode_try(cursor)?),
        opcodes::WITH => Action::With(decode_with(cursor)?),
        opcodes::PUSH => decode_push(cursor.take(header.length)?),
        opcodes::JUMP => Action::Jump(Jump {
            offset: cursor.read_le::<i16>()?,
        }),
        opcodes::GET_URL2 => decode_get_url2(cursor)?,
        opcodes::DEFINE_FUNCTION => Action::DefineFunction(decode_define_function(cursor)?),
        opcodes::IF => Action::If(If {
            offset: cursor.read_le::<i16>()?,
        }),
        opcodes::CALL => Action::Call,
        opcodes::GOTO_FRAME2 => Action::GotoFrame2(decode_goto_frame2(cursor)?),
        code => Action::Unknown(UnknownAction {
            code,
            data: cursor.read_bytes(header.length)?.to_vec(),
        }),
    };

    // Skip declared operand bytes the grammar did not consume.
    let consumed = cursor.pos() - operands_start;
    if consumed < header.length {
        cursor.advance_by(header.length - consumed)?;
    }

    Ok(action)
}

fn decode_goto_frame(cursor: &mut Cursor) -> Result<GotoFrame> {
    Ok(GotoFrame {
        frame: cursor.read_le::<u16>()?,
    })
}

fn decode_get_url(cursor: &mut Cursor) -> Result<GetUrl> {
    let url = cursor.read_string_utf8()?;
    let target = cursor.read_string_utf8()?;
    Ok(GetUrl { url, target })
}

fn decode_store_register(cursor: &mut Cursor) -> Result<StoreRegister> {
    Ok(StoreRegister {
        register: cursor.read_le::<u8>()?,
    })
}

fn decode_constant_pool(cursor: &mut Cursor) -> Result<ConstantPool> {
    let count = cursor.read_le::<u16>()?;
    let mut pool = Vec::with_capacity(usize::from(count));
    for _ in 0..count {
        pool.push(cursor.read_string_utf8()?);
    }
    Ok(ConstantPool { pool })
}

fn decode_wait_for_frame(cursor: &mut Cursor) -> Result<WaitForFrame> {
    let frame = cursor.read_le::<u16>()?;
    let skip_count = cursor.read_le::<u8>()?;
    Ok(WaitForFrame { frame, skip_count })
}

fn decode_set_target(cursor: &mut Cursor) -> Result<SetTarget> {
    Ok(SetTarget {
        target_name: cursor.read_string_utf8()?,
    })
}

fn decode_goto_label(cursor: &mut Cursor) -> Result<GotoLabel> {
    Ok(GotoLabel {
        label: cursor.read_string_utf8()?,
    })
}

fn decode_wait_for_frame2(cursor: &mut Cursor) -> Result<WaitForFrame2> {
    Ok(WaitForFrame2 {
        skip_count: cursor.read_le::<u8>()?,
    })
}

fn decode_define_function2(cursor: &mut Cursor) -> Result<DefineFunction2> {
    let name = cursor.read_string_utf8()?;
    let parameter_count = cursor.read_le::<u16>()?;
    let register_count = cursor.read_le::<u8>()?;
    // Bits 9..15 of the flag word are reserved.
    let flags = Function2Flags::from_bits_truncate(cursor.read_le::<u16>()?);

    let mut parameters = Vec::with_capacity(usize::from(parameter_count));
    for _ in 0..parameter_count {
        let register = cursor.read_le::<u8>()?;
        let name = cursor.read_string_utf8()?;
        parameters.push(Parameter { register, name });
    }
    let body_size = cursor.read_le::<u16>()?;

    Ok(DefineFunction2 {
        name,
        register_count,
        preload_this: flags.contains(Function2Flags::PRELOAD_THIS),
        suppress_this: flags.contains(Function2Flags::SUPPRESS_THIS),
        preload_arguments: flags.contains(Function2Flags::PRELOAD_ARGUMENTS),
        suppress_arguments: flags.contains(Function2Flags::SUPPRESS_ARGUMENTS),
        preload_super: flags.contains(Function2Flags::PRELOAD_SUPER),
        suppress_super: flags.contains(Function2Flags::SUPPRESS_SUPER),
        preload_root: flags.contains(Function2Flags::PRELOAD_ROOT),
        preload_parent: flags.contains(Function2Flags::PRELOAD_PARENT),
        preload_global: flags.contains(Function2Flags::PRELOAD_GLOBAL),
        parameters,
        body_size,
    })
}

fn decode_try(cursor: &mut Cursor) -> Result<TryAction> {
    let flags = TryFlags::from_bits_truncate(cursor.read_le::<u8>()?);
    let try_size = cursor.read_le::<u16>()?;
    let catch_size = cursor.read_le::<u16>()?;
    let finally_size = cursor.read_le::<u16>()?;
    // The catch target descriptor is present on the wire even without a catch handler.
    let catch_target = if flags.contains(TryFlags::CATCH_IN_REGISTER) {
        CatchTarget::Register(cursor.read_le::<u8>()?)
    } else {
        CatchTarget::Variable(cursor.read_string_utf8()?)
    };

    Ok(TryAction {
        try_size,
        catch: flags.contains(TryFlags::CATCH).then_some(CatchClause {
            target: catch_target,
            size: catch_size,
        }),
        finally_size: flags.contains(TryFlags::FINALLY).then_some(finally_size),
    })
}

fn decode_with(cursor: &mut Cursor) -> Result<With> {
    Ok(With {
        size: cursor.read_le::<u16>()?,
    })
}

fn decode_push(mut cursor: Cursor) -> Action {
    let mut values = Vec::new();
    while cursor.remaining() > 0 {
        match decode_push_value(&mut cursor) {
            Ok(value) => values.push(value),
            Err(err) => {
                return Action::Error {
                    message: err.to_string(),
                }
            }
        }
    }
    Action::Push(Push { values })
}

fn decode_push_value(cursor: &mut Cursor) -> Result<Value> {
    let type_code = cursor.read_le::<u8>()?;
    Ok(match type_code {
        0 => Value::String(cursor.read_string_utf8()?),
        1 => Value::Float32(cursor.read_le::<f32>()?),
        2 => Value::Null,
        3 => Value::Undefined,
        4 => Value::Register(cursor.read_le::<u8>()?),
        5 => Value::Boolean(cursor.read_le::<u8>()? != 0),
        6 => Value::Float64(cursor.read_le::<f64>()?),
        7 => Value::Sint32(cursor.read_le::<i32>()?),
        8 => Value::Constant(u16::from(cursor.read_le::<u8>()?)),
        9 => Value::Constant(cursor.read_le::<u16>()?),
        code => return Err(malformed_error!("Unknown push value type code {}", code)),
    })
}

fn decode_get_url2(cursor: &mut Cursor) -> Result<Action> {
    let mut bits = cursor.bits();
    let method = match bits.read_bits(2)? {
        0 => SendVarsMethod::None,
        1 => SendVarsMethod::Get,
        2 => SendVarsMethod::Post,
        value => {
            return Ok(Action::Error {
                message: format!("Reserved get_url2 method value {value}"),
            })
        }
    };
    bits.skip_bits(4)?;
    let load_target = bits.read_bool()?;
    let load_variables = bits.read_bool()?;
    bits.align();

    Ok(Action::GetUrl2(GetUrl2 {
        method,
        load_target,
        load_variables,
    }))
}

fn decode_define_function(cursor: &mut Cursor) -> Result<DefineFunction> {
    let name = cursor.read_string_utf8()?;
    let parameter_count = cursor.read_le::<u16>()?;
    let mut parameters = Vec::with_capacity(usize::from(parameter_count));
    for _ in 0..parameter_count {
        parameters.push(cursor.read_string_utf8()?);
    }
    let body_size = cursor.read_le::<u16>()?;

    Ok(DefineFunction {
        name,
        parameters,
        body_size,
    })
}

fn decode_goto_frame2(cursor: &mut Cursor) -> Result<GotoFrame2> {
    let flags = cursor.read_le::<u8>()?;
    let play = (flags & (1 << 0)) != 0;
    let has_scene_bias = (flags & (1 << 1)) != 0;
    let scene_bias = if has_scene_bias {
        cursor.read_le::<u16>()?
    } else {
        0
    };
    Ok(GotoFrame2 { play, scene_bias })
}

/// Random-access decoder over one complete action string.
///
/// The control-flow builder does not walk the stream linearly: discovery jumps between
/// arbitrary offsets, and frame-wait successors need a header-only scan. `ActionReader` wraps
/// the buffer and exposes exactly those two access patterns.
///
/// # Examples
///
/// ```rust
/// use avmscope::disassembler::{Action, ActionReader};
///
/// let data = [0x07, 0x00]; // stop, end
/// let reader = ActionReader::new(&data);
///
/// let (end, action) = reader.read_at(0)?;
/// assert_eq!((end, action), (1, Action::Stop));
///
/// let (end, action) = reader.read_at(1)?;
/// assert_eq!((end, action), (2, Action::End));
/// # Ok::<(), avmscope::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ActionReader<'a> {
    data: &'a [u8],
}

impl<'a> ActionReader<'a> {
    /// Create a reader over an action string.
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        ActionReader { data }
    }

    /// Length of the underlying buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the underlying buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Decode the action starting at `offset`, returning the end offset of the instruction
    /// and its decoded value.
    ///
    /// An offset at or past the end of the buffer yields [`Action::End`] without consuming
    /// anything; a zero opcode byte yields [`Action::End`] consuming one byte.
    ///
    /// # Errors
    /// Propagates the fatal errors of [`decode_action`].
    pub fn read_at(&self, offset: usize) -> Result<(usize, Action)> {
        if offset >= self.data.len() {
            return Ok((offset, Action::End));
        }

        let mut cursor = Cursor::new(self.data);
        cursor.seek(offset)?;
        if cursor.peek_byte()? == opcodes::END {
            return Ok((offset + 1, Action::End));
        }

        let action = decode_action(&mut cursor)?;
        Ok((cursor.pos(), action))
    }

    /// Scan `count` action headers forward from `offset` without decoding operand payloads,
    /// returning the offset after the last skipped action.
    ///
    /// This is how frame-wait successors are computed: the skipped actions must not be
    /// recursively decoded, only stepped over.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if a header or its declared operand region
    /// crosses the end of the buffer.
    pub fn skip_from(&self, offset: usize, count: usize) -> Result<usize> {
        let mut cursor = Cursor::new(self.data);
        cursor.seek(offset)?;
        for _ in 0..count {
            let header = decode_header(&mut cursor)?;
            cursor.advance_by(header.length)?;
        }
        Ok(cursor.pos())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_short_form() {
        let input = [0x07, 0x00, 0x00];
        let mut cursor = Cursor::new(&input);
        assert_eq!(
            decode_header(&mut cursor).unwrap(),
            ActionHeader {
                code: 0x07,
                length: 0
            }
        );
        assert_eq!(cursor.pos(), 1);
    }

    #[test]
    fn header_long_form() {
        let input = [0x80, 0x00, 0x01, 0x00];
        let mut cursor = Cursor::new(&input);
        assert_eq!(
            decode_header(&mut cursor).unwrap(),
            ActionHeader {
                code: 0x80,
                length: 256
            }
        );
        assert_eq!(cursor.pos(), 3);
    }

    #[test]
    fn unknown_without_operands() {
        let input = [0x01];
        let mut cursor = Cursor::new(&input);
        assert_eq!(
            decode_action(&mut cursor).unwrap(),
            Action::Unknown(UnknownAction {
                code: 0x01,
                data: Vec::new()
            })
        );
        assert_eq!(cursor.pos(), 1);
    }

    #[test]
    fn unknown_preserves_operands() {
        let input = [0x80, 0x01, 0x00, 0x03];
        let mut cursor = Cursor::new(&input);
        assert_eq!(
            decode_action(&mut cursor).unwrap(),
            Action::Unknown(UnknownAction {
                code: 0x80,
                data: vec![0x03]
            })
        );
        assert_eq!(cursor.pos(), 4);
    }

    #[test]
    fn declared_length_exceeds_stream() {
        let input = [0x80, 0x02, 0x00, 0x03];
        let mut cursor = Cursor::new(&input);
        assert!(matches!(
            decode_action(&mut cursor),
            Err(Error::IncompleteStream {
                offset: 0,
                declared: 2,
                available: 1
            })
        ));
    }

    #[test]
    fn push_values() {
        let input = [
            0x96, 0x09, 0x00, 0x04, 0x00, 0x07, 0x01, 0x00, 0x00, 0x00, 0x08, 0x02,
        ];
        let mut cursor = Cursor::new(&input);
        assert_eq!(
            decode_action(&mut cursor).unwrap(),
            Action::Push(Push {
                values: vec![Value::Register(0), Value::Sint32(1), Value::Constant(2)]
            })
        );
        assert_eq!(cursor.pos(), 12);
    }

    #[test]
    fn push_empty_string() {
        let input = [0x96, 0x02, 0x00, 0x00, 0x00];
        let mut cursor = Cursor::new(&input);
        assert_eq!(
            decode_action(&mut cursor).unwrap(),
            Action::Push(Push {
                values: vec![Value::String(String::new())]
            })
        );
    }

    #[test]
    fn push_unknown_type_code_is_local_error() {
        let input = [0x96, 0x01, 0x00, 0x0A];
        let mut cursor = Cursor::new(&input);
        let action = decode_action(&mut cursor).unwrap();
        assert!(matches!(action, Action::Error { .. }));
        // Boundary alignment is preserved.
        assert_eq!(cursor.pos(), 4);
    }

    #[test]
    fn push_truncated_value_is_local_error() {
        // Declares 3 bytes: a float64 tag with only 2 payload bytes in the region.
        let input = [0x96, 0x03, 0x00, 0x06, 0x01, 0x02];
        let mut cursor = Cursor::new(&input);
        let action = decode_action(&mut cursor).unwrap();
        assert!(matches!(action, Action::Error { .. }));
        assert_eq!(cursor.pos(), 6);
    }

    #[test]
    fn jump_and_if_displacements() {
        let input = [0x99, 0x02, 0x00, 0xFE, 0xFF];
        let mut cursor = Cursor::new(&input);
        assert_eq!(
            decode_action(&mut cursor).unwrap(),
            Action::Jump(Jump { offset: -2 })
        );

        let input = [0x9D, 0x02, 0x00, 0x05, 0x00];
        let mut cursor = Cursor::new(&input);
        assert_eq!(
            decode_action(&mut cursor).unwrap(),
            Action::If(If { offset: 5 })
        );
    }

    #[test]
    fn get_url2_bit_fields() {
        let input = [0x9A, 0x01, 0x00, 0b0100_0011];
        let mut cursor = Cursor::new(&input);
        assert_eq!(
            decode_action(&mut cursor).unwrap(),
            Action::GetUrl2(GetUrl2 {
                method: SendVarsMethod::Get,
                load_target: true,
                load_variables: true,
            })
        );
        assert_eq!(cursor.pos(), 4);
    }

    #[test]
    fn get_url2_reserved_method() {
        let input = [0x9A, 0x01, 0x00, 0b1100_0000];
        let mut cursor = Cursor::new(&input);
        assert!(matches!(
            decode_action(&mut cursor).unwrap(),
            Action::Error { .. }
        ));
        assert_eq!(cursor.pos(), 4);
    }

    #[test]
    fn constant_pool() {
        let input = [0x88, 0x07, 0x00, 0x02, 0x00, b'a', 0x00, b'b', b'c', 0x00];
        let mut cursor = Cursor::new(&input);
        assert_eq!(
            decode_action(&mut cursor).unwrap(),
            Action::ConstantPool(ConstantPool {
                pool: vec!["a".to_string(), "bc".to_string()]
            })
        );
    }

    #[test]
    fn define_function2_flags_and_parameters() {
        // name "" | 1 parameter | 4 registers | flags 0x0101 | (r1, "x") | body size 0
        let input = [
            0x8E, 0x0B, 0x00, 0x00, 0x01, 0x00, 0x04, 0x01, 0x01, 0x01, b'x', 0x00, 0x00, 0x00,
        ];
        let mut cursor = Cursor::new(&input);
        let action = decode_action(&mut cursor).unwrap();
        let Action::DefineFunction2(function) = action else {
            panic!("expected DefineFunction2, got {action:?}");
        };
        assert_eq!(function.register_count, 4);
        assert!(function.preload_this);
        assert!(function.preload_global);
        assert!(!function.suppress_this);
        assert!(!function.preload_parent);
        assert_eq!(
            function.parameters,
            vec![Parameter {
                register: 1,
                name: "x".to_string()
            }]
        );
        assert_eq!(function.body_size, 0);
    }

    #[test]
    fn try_header_regions() {
        // flags: catch + register | try 1 | catch 2 | finally 3 | register 7
        let input = [
            0x8F, 0x08, 0x00, 0x05, 0x01, 0x00, 0x02, 0x00, 0x03, 0x00, 0x07,
        ];
        let mut cursor = Cursor::new(&input);
        assert_eq!(
            decode_action(&mut cursor).unwrap(),
            Action::Try(TryAction {
                try_size: 1,
                catch: Some(CatchClause {
                    target: CatchTarget::Register(7),
                    size: 2
                }),
                finally_size: None,
            })
        );
    }

    #[test]
    fn goto_frame2_scene_bias() {
        let input = [0x9F, 0x03, 0x00, 0x03, 0x2A, 0x00];
        let mut cursor = Cursor::new(&input);
        assert_eq!(
            decode_action(&mut cursor).unwrap(),
            Action::GotoFrame2(GotoFrame2 {
                play: true,
                scene_bias: 42
            })
        );
    }

    #[test]
    fn reader_end_of_actions() {
        let data = [0x07, 0x00, 0x07];
        let reader = ActionReader::new(&data);

        assert_eq!(reader.read_at(0).unwrap(), (1, Action::Stop));
        assert_eq!(reader.read_at(1).unwrap(), (2, Action::End));
        assert_eq!(reader.read_at(5).unwrap(), (5, Action::End));
    }

    #[test]
    fn reader_skip_from() {
        // stop | push (3 bytes declared) | stop
        let data = [0x07, 0x96, 0x03, 0x00, 0x02, 0x02, 0x02, 0x07];
        let reader = ActionReader::new(&data);

        assert_eq!(reader.skip_from(0, 1).unwrap(), 1);
        assert_eq!(reader.skip_from(0, 2).unwrap(), 7);
        assert_eq!(reader.skip_from(0, 3).unwrap(), 8);
        assert!(reader.skip_from(0, 4).is_err());
    }
}
