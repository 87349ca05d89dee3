//! The control-flow-graph data model.
//!
//! A [`Cfg`] is an ordered list of labeled [`CfgBlock`]s: each block carries a run of
//! straight-line actions and exactly one terminal [`Flow`] describing where control goes next.
//! Structured regions (function bodies, try/catch/finally bodies, with bodies) appear as
//! nested `Cfg` values embedded inline in their owning action or flow, never as references.
//!
//! Everything here serializes with serde, so graphs can be written out as JSON and compared
//! against fixtures.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::disassembler::{Action, CatchTarget, Parameter};

/// Identifier of a block within one graph, derived deterministically from the layer id and the
/// block's byte offset (`l{layer}_{offset}`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CfgLabel(pub String);

impl fmt::Display for CfgLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One layer's control flow graph.
///
/// Blocks are ordered by ascending source offset of their label; the first block is the layer
/// entry point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cfg {
    /// The labeled blocks of this graph
    pub blocks: Vec<CfgBlock>,
}

impl Cfg {
    /// Look up a block by label.
    #[must_use]
    pub fn block(&self, label: &CfgLabel) -> Option<&CfgBlock> {
        self.blocks.iter().find(|block| &block.label == label)
    }
}

/// A labeled straight-line run of actions with a single terminal flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CfgBlock {
    /// Unique label of this block within its graph
    pub label: CfgLabel,
    /// Actions executed in order before the flow transfers control
    pub actions: Vec<CfgAction>,
    /// How control leaves this block
    pub flow: Flow,
}

/// An action as it appears inside a block.
///
/// Function definitions are rewritten to embed their recursively-built body graph; every other
/// action passes through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CfgAction {
    /// Function definition with its body reconstructed as an independent graph
    DefineFunction(CfgDefineFunction),
    /// Extended function definition with its body reconstructed as an independent graph
    DefineFunction2(CfgDefineFunction2),
    /// Any non-structured action, unchanged from the decoder
    Raw(Action),
}

/// [`crate::disassembler::DefineFunction`] with the body length replaced by the decoded body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CfgDefineFunction {
    pub name: String,
    pub parameters: Vec<String>,
    pub body: Cfg,
}

/// [`crate::disassembler::DefineFunction2`] with the body length replaced by the decoded body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CfgDefineFunction2 {
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
    pub body: Cfg,
}

/// Terminal control transfer of a block.
///
/// Targets are labels within the enclosing graph, or labels of an ancestor layer when control
/// leaves a soft region; `None` means control leaves the decoded region entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Flow {
    /// Unconditional continuation
    Simple {
        /// Following block, or `None` when control leaves the decoded region
        next: Option<CfgLabel>,
    },
    /// Two-way conditional branch
    If {
        /// Block reached when the condition holds
        true_target: Option<CfgLabel>,
        /// Fallthrough block
        false_target: Option<CfgLabel>,
    },
    /// Return from the enclosing function
    Return,
    /// Throw the value on top of the stack
    Throw,
    /// An operand region failed to decode; control cannot continue past it
    Error {
        /// Description of the decode failure, when one was captured
        error: Option<String>,
    },
    /// Exception-handling region with its handler graphs
    Try {
        /// Protected region
        r#try: Cfg,
        /// Catch handler, when present
        catch: Option<CatchHandler>,
        /// Finally handler, when present
        finally: Option<Cfg>,
    },
    /// Scope block
    With {
        /// Body of the with-block
        body: Cfg,
    },
    /// Frame-load branch
    WaitForFrame {
        /// Frame whose load state is tested
        frame: u16,
        /// Block reached while the frame is still loading (skip path)
        loading_target: Option<CfgLabel>,
        /// Block reached once the frame is ready (fallthrough path)
        ready_target: Option<CfgLabel>,
    },
    /// Stack-operand variant of [`Flow::WaitForFrame`]
    WaitForFrame2 {
        /// Block reached while the frame is still loading (skip path)
        loading_target: Option<CfgLabel>,
        /// Block reached once the frame is ready (fallthrough path)
        ready_target: Option<CfgLabel>,
    },
}

/// Catch clause of a [`Flow::Try`]: where the caught value goes, and the handler graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchHandler {
    /// Register or variable receiving the caught value
    pub target: CatchTarget,
    /// Handler body
    pub body: Cfg,
}
