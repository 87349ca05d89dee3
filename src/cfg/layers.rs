//! Layer bookkeeping for control-flow discovery.
//!
//! Discovery runs over nested byte-range scopes called layers. A *hard* layer begins an
//! independent graph (the top-level program, or a function body) and shares nothing with its
//! parent except the label id generator. A *soft* layer (try/catch/finally bodies, with
//! bodies) has its own label namespace but resolves jumps against its ancestors, which is how
//! a jump out of a try body gets attributed to the enclosing layer.
//!
//! Each layer tracks which offsets have been discovered and how they are reached
//! ([`Reachability`]), plus a worklist of offsets not yet decoded. The map is ordered so block
//! starts come out in ascending offset order.

use std::collections::BTreeMap;
use std::ops::Range;

use crate::cfg::graph::CfgLabel;

/// How a discovered offset is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Reachability {
    /// Reached only by straight-line fallthrough from a single predecessor so far.
    Advance,
    /// Required block boundary: a layer entry point, an explicit branch or jump target, or an
    /// offset with more than one predecessor.
    Jump,
}

/// Generator for process-unique layer ids within one builder invocation.
///
/// Owned by the outermost call and passed down through every recursive call, so two
/// independent invocations never collide on label namespaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct IdGen(u64);

impl IdGen {
    pub(crate) fn new() -> Self {
        IdGen(0)
    }

    fn next(&mut self) -> u64 {
        let id = self.0;
        self.0 += 1;
        id
    }
}

#[derive(Debug)]
struct Layer {
    id: u64,
    range: Range<usize>,
    /// Discovered offsets and their reachability; ordered so block starts emit sorted
    actions: BTreeMap<usize, Reachability>,
    /// Discovered offsets not yet decoded
    worklist: Vec<usize>,
}

impl Layer {
    fn new(id: u64, range: Range<usize>) -> Self {
        let mut layer = Layer {
            id,
            range,
            actions: BTreeMap::new(),
            worklist: Vec::new(),
        };
        // The entry point is always a block boundary.
        layer.actions.insert(layer.range.start, Reachability::Jump);
        layer.worklist.push(layer.range.start);
        layer
    }
}

fn label(layer_id: u64, offset: usize) -> CfgLabel {
    CfgLabel(format!("l{layer_id}_{offset}"))
}

/// The stack of layers active during one builder invocation.
///
/// The innermost (current) layer is the head; discovery and emission operate on the head,
/// while jump resolution searches outward through the whole stack.
#[derive(Debug)]
pub(crate) struct LayerStack<'a> {
    ids: &'a mut IdGen,
    /// Hard-nesting depth accumulated by `child`, counted for the recursion bound
    hard_depth: usize,
    layers: Vec<Layer>,
}

impl<'a> LayerStack<'a> {
    pub(crate) fn new(ids: &'a mut IdGen, range: Range<usize>) -> Self {
        let id = ids.next();
        LayerStack {
            ids,
            hard_depth: 0,
            layers: vec![Layer::new(id, range)],
        }
    }

    /// Begin an independent hard layer over `range`, sharing only the id generator.
    pub(crate) fn child(&mut self, range: Range<usize>) -> LayerStack<'_> {
        let hard_depth = self.hard_depth + self.layers.len();
        let id = self.ids.next();
        LayerStack {
            ids: &mut *self.ids,
            hard_depth,
            layers: vec![Layer::new(id, range)],
        }
    }

    /// Total nesting depth (hard recursion plus active soft layers).
    pub(crate) fn depth(&self) -> usize {
        self.hard_depth + self.layers.len()
    }

    /// Run `f` with a soft layer over `range` pushed onto the stack, popping it on every exit
    /// path. A `None` range runs `f` on the stack unchanged.
    pub(crate) fn with_layer<R>(
        &mut self,
        range: Option<Range<usize>>,
        f: impl FnOnce(&mut Self) -> R,
    ) -> R {
        let Some(range) = range else {
            return f(self);
        };

        let id = self.ids.next();
        self.layers.push(Layer::new(id, range));
        let result = f(self);
        let popped = self.layers.pop();
        debug_assert!(popped.is_some());
        result
    }

    fn head(&self) -> &Layer {
        self.layers.last().expect("layer stack is never empty")
    }

    fn head_mut(&mut self) -> &mut Layer {
        self.layers.last_mut().expect("layer stack is never empty")
    }

    /// Whether the current layer's range contains `offset`.
    pub(crate) fn contains(&self, offset: usize) -> bool {
        self.head().range.contains(&offset)
    }

    /// Id of the current layer (used for logging).
    pub(crate) fn head_id(&self) -> u64 {
        self.head().id
    }

    /// Record `offset` as reached by straight-line fallthrough in the current layer.
    ///
    /// The first record classifies it [`Reachability::Advance`]; any further record promotes
    /// it to [`Reachability::Jump`], since it then has multiple predecessors.
    pub(crate) fn mark_advance(&mut self, offset: usize) {
        let Layer {
            actions, worklist, ..
        } = self.head_mut();
        actions
            .entry(offset)
            .and_modify(|reachability| *reachability = Reachability::Jump)
            .or_insert_with(|| {
                worklist.push(offset);
                Reachability::Advance
            });
    }

    /// Record `offset` as an explicit jump target and return its label.
    ///
    /// Resolution searches the current layer, then enclosing layers outward; the offset is
    /// registered (and enqueued for discovery if new) in the innermost layer that holds it.
    /// Returns `None` when no active layer holds the offset: control leaves the decoded
    /// region, and no label exists for it.
    pub(crate) fn mark_jump(&mut self, offset: usize) -> Option<CfgLabel> {
        let index = self.find_jump_layer(offset)?;
        let Layer {
            id,
            actions,
            worklist,
            ..
        } = &mut self.layers[index];
        actions
            .entry(offset)
            .and_modify(|reachability| *reachability = Reachability::Jump)
            .or_insert_with(|| {
                worklist.push(offset);
                Reachability::Jump
            });
        Some(label(*id, offset))
    }

    /// Whether walking into `offset` must end the current block.
    ///
    /// True when the offset is a known block boundary in its layer, or when it falls outside
    /// every active layer.
    pub(crate) fn is_jump(&self, offset: usize) -> bool {
        match self.find_jump_layer(offset) {
            Some(index) => self.layers[index].actions.get(&offset) == Some(&Reachability::Jump),
            None => true,
        }
    }

    /// Label of `offset` in the innermost layer holding it, without registering anything.
    pub(crate) fn get_jump(&self, offset: usize) -> Option<CfgLabel> {
        self.find_jump_layer(offset)
            .map(|index| label(self.layers[index].id, offset))
    }

    /// Label of `offset` in the current layer's namespace.
    pub(crate) fn head_label(&self, offset: usize) -> CfgLabel {
        label(self.head().id, offset)
    }

    /// Pop the next offset awaiting discovery in the current layer.
    pub(crate) fn pop_worklist(&mut self) -> Option<usize> {
        self.head_mut().worklist.pop()
    }

    /// All block-start offsets of the current layer, ascending.
    pub(crate) fn block_starts(&self) -> Vec<usize> {
        self.head()
            .actions
            .iter()
            .filter_map(|(offset, reachability)| match reachability {
                Reachability::Jump => Some(*offset),
                Reachability::Advance => None,
            })
            .collect()
    }

    fn find_jump_layer(&self, offset: usize) -> Option<usize> {
        let top = self.layers.len() - 1;
        for (index, layer) in self.layers.iter().enumerate().rev() {
            // Equality with an ancestor's start bound counts as containment so that an empty
            // region (a zero-length finally clause) can still be targeted.
            if layer.range.contains(&offset) || (index != top && offset == layer.range.start) {
                return Some(index);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_point_is_block_start() {
        let mut ids = IdGen::new();
        let stack = LayerStack::new(&mut ids, 0..10);
        assert_eq!(stack.block_starts(), vec![0]);
        assert_eq!(stack.head_label(0), CfgLabel("l0_0".to_string()));
    }

    #[test]
    fn advance_promotes_on_second_predecessor() {
        let mut ids = IdGen::new();
        let mut stack = LayerStack::new(&mut ids, 0..10);

        stack.mark_advance(4);
        assert_eq!(stack.block_starts(), vec![0]);
        assert!(!stack.is_jump(4));

        stack.mark_advance(4);
        assert_eq!(stack.block_starts(), vec![0, 4]);
        assert!(stack.is_jump(4));
    }

    #[test]
    fn jump_out_of_every_layer_is_terminal() {
        let mut ids = IdGen::new();
        let mut stack = LayerStack::new(&mut ids, 0..10);

        assert_eq!(stack.mark_jump(10), None);
        assert!(stack.is_jump(10));
        assert_eq!(stack.get_jump(10), None);
    }

    #[test]
    fn soft_layer_resolves_into_ancestor() {
        let mut ids = IdGen::new();
        let mut stack = LayerStack::new(&mut ids, 0..20);

        let target = stack.with_layer(Some(5..10), |stack| {
            assert!(stack.contains(5));
            assert!(!stack.contains(12));
            stack.mark_jump(12)
        });

        // Attributed to the root layer, which keeps the offset queued for discovery.
        assert_eq!(target, Some(CfgLabel("l0_12".to_string())));
        assert_eq!(stack.pop_worklist(), Some(12));
    }

    #[test]
    fn empty_ancestor_layer_is_targetable_at_its_start() {
        let mut ids = IdGen::new();
        let mut stack = LayerStack::new(&mut ids, 0..20);

        let target = stack.with_layer(Some(8..8), |stack| {
            stack.with_layer(Some(3..8), |stack| stack.mark_jump(8))
        });

        assert_eq!(target, Some(CfgLabel("l1_8".to_string())));
    }

    #[test]
    fn empty_head_layer_is_not_self_targetable() {
        let mut ids = IdGen::new();
        let mut stack = LayerStack::new(&mut ids, 0..20);

        // From inside the empty layer itself, its start resolves to the ancestor.
        let target = stack.with_layer(Some(8..8), |stack| stack.mark_jump(8));
        assert_eq!(target, Some(CfgLabel("l0_8".to_string())));
    }

    #[test]
    fn child_shares_id_sequence() {
        let mut ids = IdGen::new();
        let mut stack = LayerStack::new(&mut ids, 0..20);
        assert_eq!(stack.head_id(), 0);

        {
            let child = stack.child(5..10);
            assert_eq!(child.head_id(), 1);
            assert_eq!(child.depth(), 2);
        }

        let child = stack.child(10..15);
        assert_eq!(child.head_id(), 2);
    }

    #[test]
    fn with_layer_pops_on_error_path() {
        let mut ids = IdGen::new();
        let mut stack = LayerStack::new(&mut ids, 0..20);

        let result: Result<(), ()> = stack.with_layer(Some(5..10), |_| Err(()));
        assert!(result.is_err());
        assert_eq!(stack.depth(), 1);
        assert!(stack.contains(15));
    }
}
