//! Raw opcode bytes of the action-string instruction set.
//!
//! Opcodes below [`LENGTH_PREFIX_THRESHOLD`] carry no operand length prefix and have an empty
//! operand region; opcodes at or above it are followed by a 16-bit little-endian operand
//! length. The decoder matches on these constants; anything not listed here decodes to
//! [`crate::disassembler::Action::Unknown`].

/// Opcodes at or above this value carry a 16-bit operand length prefix.
pub const LENGTH_PREFIX_THRESHOLD: u8 = 0x80;

/// Explicit end-of-actions marker.
pub const END: u8 = 0x00;

pub const NEXT_FRAME: u8 = 0x04;
pub const PREVIOUS_FRAME: u8 = 0x05;
pub const PLAY: u8 = 0x06;
pub const STOP: u8 = 0x07;
pub const TOGGLE_QUALITY: u8 = 0x08;
pub const STOP_SOUNDS: u8 = 0x09;
pub const ADD: u8 = 0x0a;
pub const SUBTRACT: u8 = 0x0b;
pub const MULTIPLY: u8 = 0x0c;
pub const DIVIDE: u8 = 0x0d;
pub const EQUALS: u8 = 0x0e;
pub const LESS: u8 = 0x0f;
pub const AND: u8 = 0x10;
pub const OR: u8 = 0x11;
pub const NOT: u8 = 0x12;
pub const STRING_EQUALS: u8 = 0x13;
pub const STRING_LENGTH: u8 = 0x14;
pub const STRING_EXTRACT: u8 = 0x15;
pub const POP: u8 = 0x17;
pub const TO_INTEGER: u8 = 0x18;
pub const GET_VARIABLE: u8 = 0x1c;
pub const SET_VARIABLE: u8 = 0x1d;
pub const SET_TARGET2: u8 = 0x20;
pub const STRING_ADD: u8 = 0x21;
pub const GET_PROPERTY: u8 = 0x22;
pub const SET_PROPERTY: u8 = 0x23;
pub const CLONE_SPRITE: u8 = 0x24;
pub const REMOVE_SPRITE: u8 = 0x25;
pub const TRACE: u8 = 0x26;
pub const START_DRAG: u8 = 0x27;
pub const END_DRAG: u8 = 0x28;
pub const STRING_LESS: u8 = 0x29;
pub const THROW: u8 = 0x2a;
pub const CAST_OP: u8 = 0x2b;
pub const IMPLEMENTS_OP: u8 = 0x2c;
pub const FS_COMMAND2: u8 = 0x2d;
pub const RANDOM_NUMBER: u8 = 0x30;
pub const MB_STRING_LENGTH: u8 = 0x31;
pub const CHAR_TO_ASCII: u8 = 0x32;
pub const ASCII_TO_CHAR: u8 = 0x33;
pub const GET_TIME: u8 = 0x34;
pub const MB_STRING_EXTRACT: u8 = 0x35;
pub const MB_CHAR_TO_ASCII: u8 = 0x36;
pub const MB_ASCII_TO_CHAR: u8 = 0x37;
pub const DELETE: u8 = 0x3a;
pub const DELETE2: u8 = 0x3b;
pub const DEFINE_LOCAL: u8 = 0x3c;
pub const CALL_FUNCTION: u8 = 0x3d;
pub const RETURN: u8 = 0x3e;
pub const MODULO: u8 = 0x3f;
pub const NEW_OBJECT: u8 = 0x40;
pub const DEFINE_LOCAL2: u8 = 0x41;
pub const INIT_ARRAY: u8 = 0x42;
pub const INIT_OBJECT: u8 = 0x43;
pub const TYPE_OF: u8 = 0x44;
pub const TARGET_PATH: u8 = 0x45;
pub const ENUMERATE: u8 = 0x46;
pub const ADD2: u8 = 0x47;
pub const LESS2: u8 = 0x48;
pub const EQUALS2: u8 = 0x49;
pub const TO_NUMBER: u8 = 0x4a;
pub const TO_STRING: u8 = 0x4b;
pub const PUSH_DUPLICATE: u8 = 0x4c;
pub const STACK_SWAP: u8 = 0x4d;
pub const GET_MEMBER: u8 = 0x4e;
pub const SET_MEMBER: u8 = 0x4f;
pub const INCREMENT: u8 = 0x50;
pub const DECREMENT: u8 = 0x51;
pub const CALL_METHOD: u8 = 0x52;
pub const NEW_METHOD: u8 = 0x53;
pub const INSTANCE_OF: u8 = 0x54;
pub const ENUMERATE2: u8 = 0x55;
pub const BIT_AND: u8 = 0x60;
pub const BIT_OR: u8 = 0x61;
pub const BIT_XOR: u8 = 0x62;
pub const BIT_LSHIFT: u8 = 0x63;
pub const BIT_RSHIFT: u8 = 0x64;
pub const BIT_URSHIFT: u8 = 0x65;
pub const STRICT_EQUALS: u8 = 0x66;
pub const GREATER: u8 = 0x67;
pub const STRING_GREATER: u8 = 0x68;
pub const EXTENDS: u8 = 0x69;
pub const GOTO_FRAME: u8 = 0x81;
pub const GET_URL: u8 = 0x83;
pub const STORE_REGISTER: u8 = 0x87;
pub const CONSTANT_POOL: u8 = 0x88;
pub const WAIT_FOR_FRAME: u8 = 0x8a;
pub const SET_TARGET: u8 = 0x8b;
pub const GOTO_LABEL: u8 = 0x8c;
pub const WAIT_FOR_FRAME2: u8 = 0x8d;
pub const DEFINE_FUNCTION2: u8 = 0x8e;
pub const TRY: u8 = 0x8f;
pub const WITH: u8 = 0x94;
pub const PUSH: u8 = 0x96;
pub const JUMP: u8 = 0x99;
pub const GET_URL2: u8 = 0x9a;
pub const DEFINE_FUNCTION: u8 = 0x9b;
pub const IF: u8 = 0x9d;
pub const CALL: u8 = 0x9e;
pub const GOTO_FRAME2: u8 = 0x9f;
