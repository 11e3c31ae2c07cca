use std::collections::HashMap;

use crate::ast::{Component, non_blank};

/// Hands out `<kind><n>` identifiers, counting separately for each kind.
///
/// One generator lives for a single render pass, so the same input always
/// gets the same identifiers.
#[derive(Debug, Default)]
pub struct IdGenerator {
    counters: HashMap<String, usize>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the component's identifier. Explicit identifiers are kept as
    /// they are and do not advance any counter.
    pub fn assign(&mut self, component: &Component) -> String {
        if non_blank(&component.id).is_some() {
            return component.id.clone();
        }
        let n = self.counters.entry(component.kind.clone()).or_insert(0);
        *n += 1;
        format!("{}{n}", component.kind)
    }
}
