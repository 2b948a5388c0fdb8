use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use std::collections::VecDeque;

/// Per-render scratch state, created at the start of each top-level render
/// call and threaded explicitly through every resolution step.
///
/// Holds the operation's declared variables and the FIFO queue of input
/// object type names discovered (but not inlined) during resolution. The
/// context is a stack value owned by the in-flight call; nothing attaches
/// it to the builder, so concurrent renders on one builder are well-defined.
#[derive(Debug, Default)]
pub(crate) struct RenderContext {
    pending_input_types: VecDeque<String>,
    variables: IndexMap<String, TypeAnnotation>,
}
impl RenderContext {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn declare_variable(&mut self, name: &str, annotation: TypeAnnotation) {
        self.variables.insert(name.to_string(), annotation);
    }

    pub(crate) fn variable(&self, name: &str) -> Option<&TypeAnnotation> {
        self.variables.get(name)
    }

    /// Queue an input object type name for later expansion. Names already
    /// pending are not queued twice.
    pub(crate) fn enqueue_input_type(&mut self, name: &str) {
        if !self.pending_input_types.iter().any(|pending| pending == name) {
            self.pending_input_types.push_back(name.to_string());
        }
    }

    pub(crate) fn dequeue_input_type(&mut self) -> Option<String> {
        self.pending_input_types.pop_front()
    }

    pub(crate) fn take_pending_input_types(&mut self) -> Vec<String> {
        self.pending_input_types.drain(..).collect()
    }
}
