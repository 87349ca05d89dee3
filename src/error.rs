use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

macro_rules! out_of_bounds_error {
    () => {
        crate::Error::OutOfBounds
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// This enum covers all failure modes that can occur while reading an action string and
/// reconstructing its control flow graph. Decoding is pure and deterministic, so none of these
/// errors are transient: retrying a failed parse on the same bytes always fails the same way.
///
/// Note that not everything that is wrong with an action string surfaces here. Unrecognized
/// opcodes are preserved as [`crate::disassembler::Action::Unknown`] values, and malformed push
/// payloads become local [`crate::disassembler::Action::Error`] values embedded in the graph —
/// only failures that make the instruction stream undecodable as a whole are fatal.
///
/// # Examples
///
/// ```rust
/// use avmscope::{parse_cfg, Error};
///
/// // A push action declaring 5 operand bytes, with only 1 present.
/// let truncated = [0x96, 0x05, 0x00, 0x01];
/// match parse_cfg(&truncated) {
///     Err(Error::IncompleteStream { offset, declared, available }) => {
///         assert_eq!((offset, declared, available), (0, 5, 1));
///     }
///     other => panic!("expected IncompleteStream, got {:?}", other),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// An out of bound access was attempted while reading the action string.
    ///
    /// This error occurs when a fixed-width read, a seek, or a skip would cross the end of the
    /// buffer. It's a safety check to prevent buffer overruns during parsing.
    #[error("Out of bound read would have occurred!")]
    OutOfBounds,

    /// An action declared more operand bytes than the stream still holds.
    ///
    /// Action headers at or above the length-prefix threshold carry an explicit operand length;
    /// when that length exceeds the remaining bytes the stream is truncated and no partial graph
    /// is produced.
    #[error("Incomplete action at offset {offset}: {declared} operand bytes declared, {available} available")]
    IncompleteStream {
        /// Offset of the action header whose operand region is truncated
        offset: usize,
        /// Operand length declared by the header
        declared: usize,
        /// Bytes actually remaining after the header
        available: usize,
    },

    /// The action string is damaged, or the builder detected an internal inconsistency.
    ///
    /// The error includes the source location where the malformation was detected for
    /// debugging purposes.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// Recursion limit reached.
    ///
    /// Structured actions (function bodies, try/catch/finally, with-blocks) nest, and the
    /// builder recurses once per nesting level. A maximum nesting depth is enforced so that
    /// hostile input cannot exhaust the call stack.
    ///
    /// The associated value shows the nesting limit that was reached.
    #[error("Reached the maximum nesting level allowed - {0}")]
    RecursionLimit(usize),
}
