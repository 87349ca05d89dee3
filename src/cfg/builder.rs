//! Two-phase reconstruction of a control flow graph from an action string.
//!
//! The builder runs once per layer. **Discovery** drains the layer's worklist: each popped
//! offset is decoded, its successor offsets are classified through the
//! [`crate::cfg::layers::LayerStack`] (fallthrough vs. required block boundary), and unseen
//! successors go back on the worklist. Structured actions recurse — function bodies into an
//! independent hard layer, try/catch/finally and with bodies into soft layers on the same
//! stack. **Emission** then walks forward from every block-start offset, collecting
//! straight-line actions until a terminal flow or another block boundary is reached.
//!
//! An offset becomes a labeled block if and only if it is a layer entry point, a branch or
//! jump target, or reached by more than one predecessor. This keeps the block count minimal:
//! straight-line runs never split.

use std::collections::HashMap;

use log::trace;

use crate::{
    cfg::{
        graph::{CatchHandler, Cfg, CfgAction, CfgBlock, CfgDefineFunction, CfgDefineFunction2, Flow},
        layers::{IdGen, LayerStack},
    },
    disassembler::{Action, ActionReader},
    Error, Result,
};

/// Upper bound on nesting depth (hard recursion plus soft layers), so hostile input cannot
/// exhaust the call stack.
const MAX_NESTING: usize = 64;

/// Decode an action string and reconstruct its control flow graph.
///
/// The result is deterministic: identical input bytes always produce an identical graph,
/// label text included.
///
/// # Examples
///
/// ```rust
/// use avmscope::{parse_cfg, Flow};
///
/// let cfg = parse_cfg(&[0x07])?; // a single stop action
/// assert_eq!(cfg.blocks.len(), 1);
/// assert_eq!(cfg.blocks[0].flow, Flow::Simple { next: None });
/// # Ok::<(), avmscope::Error>(())
/// ```
///
/// # Errors
/// Returns [`crate::Error::IncompleteStream`] when a declared operand length exceeds the
/// remaining buffer, [`crate::Error::Malformed`] on internal consistency violations, and
/// [`crate::Error::RecursionLimit`] when structured actions nest too deeply. Malformed operand
/// payloads and unrecognized opcodes are not fatal; they surface in the graph itself.
pub fn parse_cfg(data: &[u8]) -> Result<Cfg> {
    let reader = ActionReader::new(data);
    let mut ids = IdGen::new();
    let mut layers = LayerStack::new(&mut ids, 0..data.len());
    build_cfg(&reader, &mut layers)
}

/// Result of decoding one offset during discovery: either an in-block action with its end
/// offset, or a terminal flow.
enum Parsed {
    Action { end: usize, action: CfgAction },
    Flow(Flow),
}

fn build_cfg(reader: &ActionReader, cx: &mut LayerStack) -> Result<Cfg> {
    if cx.depth() > MAX_NESTING {
        return Err(Error::RecursionLimit(MAX_NESTING));
    }

    // Discovery: decode every reachable offset once, classifying successors as we go.
    let mut parsed: HashMap<usize, Parsed> = HashMap::new();
    while let Some(offset) = cx.pop_worklist() {
        let entry = if cx.contains(offset) {
            let (end, raw) = reader.read_at(offset)?;
            from_raw(reader, cx, end, raw)?
        } else {
            // The offset left the current layer; resolution happens in an enclosing scope.
            Parsed::Flow(Flow::Simple {
                next: cx.mark_jump(offset),
            })
        };

        if let Parsed::Action { end, .. } = &entry {
            cx.mark_advance(*end);
        }

        let previous = parsed.insert(offset, entry);
        debug_assert!(previous.is_none(), "offset decoded twice during discovery");
    }

    trace!(
        "layer l{}: discovered {} offsets",
        cx.head_id(),
        parsed.len()
    );

    // Emission: one block per Jump-classified offset, walking forward through Advance runs.
    let mut blocks = Vec::new();
    for start in cx.block_starts() {
        let label = cx.head_label(start);
        let mut actions = Vec::new();
        let mut index = start;
        let flow = loop {
            let entry = parsed.remove(&index).ok_or_else(|| {
                malformed_error!("No decoded action at offset {} while emitting block {}", index, label)
            })?;
            match entry {
                Parsed::Action { end, action } => {
                    actions.push(action);
                    index = end;
                    if cx.is_jump(index) {
                        break Flow::Simple {
                            next: cx.get_jump(index),
                        };
                    }
                }
                Parsed::Flow(flow) => break flow,
            }
        };
        blocks.push(CfgBlock {
            label,
            actions,
            flow,
        });
    }

    trace!("layer l{}: emitted {} blocks", cx.head_id(), blocks.len());

    Ok(Cfg { blocks })
}

/// Compute the successor classification of one decoded action.
///
/// Plain actions fall through to `end`; branches and terminals become flows; structured
/// actions recurse into their regions here, during discovery, because the recursion changes
/// the byte region being walked.
fn from_raw(reader: &ActionReader, cx: &mut LayerStack, end: usize, raw: Action) -> Result<Parsed> {
    Ok(match raw {
        Action::DefineFunction(function) => {
            let body_end = end + usize::from(function.body_size);
            let mut child = cx.child(end..body_end);
            let body = build_cfg(reader, &mut child)?;
            Parsed::Action {
                end: body_end,
                action: CfgAction::DefineFunction(CfgDefineFunction {
                    name: function.name,
                    parameters: function.parameters,
                    body,
                }),
            }
        }
        Action::DefineFunction2(function) => {
            let body_end = end + usize::from(function.body_size);
            let mut child = cx.child(end..body_end);
            let body = build_cfg(reader, &mut child)?;
            Parsed::Action {
                end: body_end,
                action: CfgAction::DefineFunction2(CfgDefineFunction2 {
                    name: function.name,
                    register_count: function.register_count,
                    preload_this: function.preload_this,
                    suppress_this: function.suppress_this,
                    preload_arguments: function.preload_arguments,
                    suppress_arguments: function.suppress_arguments,
                    preload_super: function.preload_super,
                    suppress_super: function.suppress_super,
                    preload_root: function.preload_root,
                    preload_parent: function.preload_parent,
                    preload_global: function.preload_global,
                    parameters: function.parameters,
                    body,
                }),
            }
        }
        Action::End => Parsed::Flow(Flow::Simple { next: None }),
        Action::Error { message } => Parsed::Flow(Flow::Error {
            error: Some(message),
        }),
        Action::If(branch) => {
            let target = end as i64 + i64::from(branch.offset);
            // A target before the start of the decoded region is an immediate terminal.
            let true_target = if target < 0 {
                None
            } else {
                cx.mark_jump(target as usize)
            };
            let false_target = cx.mark_jump(end);
            Parsed::Flow(Flow::If {
                true_target,
                false_target,
            })
        }
        Action::Jump(jump) => {
            let target = end as i64 + i64::from(jump.offset);
            let next = if target < 0 {
                None
            } else {
                cx.mark_jump(target as usize)
            };
            Parsed::Flow(Flow::Simple { next })
        }
        Action::Return => Parsed::Flow(Flow::Return),
        Action::Throw => Parsed::Flow(Flow::Throw),
        Action::Try(header) => {
            let try_start = end;
            let catch_start = try_start + usize::from(header.try_size);
            let finally_start =
                catch_start + header.catch.as_ref().map_or(0, |clause| usize::from(clause.size));
            let finally_range = header
                .finally_size
                .map(|size| finally_start..finally_start + usize::from(size));
            let has_finally = finally_range.is_some();

            // The finally layer stays active while try and catch are built, so jumps out of
            // either resolve into it before reaching the enclosing layer.
            cx.with_layer(finally_range, |cx| -> Result<Parsed> {
                let finally = if has_finally {
                    Some(build_cfg(reader, cx)?)
                } else {
                    None
                };
                let r#try =
                    cx.with_layer(Some(try_start..catch_start), |cx| build_cfg(reader, cx))?;
                let catch = match header.catch {
                    Some(clause) => {
                        let catch_end = catch_start + usize::from(clause.size);
                        let body =
                            cx.with_layer(Some(catch_start..catch_end), |cx| build_cfg(reader, cx))?;
                        Some(CatchHandler {
                            target: clause.target,
                            body,
                        })
                    }
                    None => None,
                };
                Ok(Parsed::Flow(Flow::Try {
                    r#try,
                    catch,
                    finally,
                }))
            })?
        }
        Action::With(with) => {
            let body = cx.with_layer(Some(end..end + usize::from(with.size)), |cx| {
                build_cfg(reader, cx)
            })?;
            Parsed::Flow(Flow::With { body })
        }
        Action::WaitForFrame(wait) => {
            let loading_offset = reader.skip_from(end, usize::from(wait.skip_count))?;
            let loading_target = cx.mark_jump(loading_offset);
            let ready_target = cx.mark_jump(end);
            Parsed::Flow(Flow::WaitForFrame {
                frame: wait.frame,
                loading_target,
                ready_target,
            })
        }
        Action::WaitForFrame2(wait) => {
            let loading_offset = reader.skip_from(end, usize::from(wait.skip_count))?;
            let loading_target = cx.mark_jump(loading_offset);
            let ready_target = cx.mark_jump(end);
            Parsed::Flow(Flow::WaitForFrame2 {
                loading_target,
                ready_target,
            })
        }
        other => Parsed::Action {
            end,
            action: CfgAction::Raw(other),
        },
    })
}
