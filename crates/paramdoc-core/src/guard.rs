//! Expansion stack for cycle and depth detection

use crate::config::CyclePolicy;
use crate::error::{DocError, DocResult};

/// Outcome of entering a class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Entry {
    Expand,
    Truncate,
}

/// Labels of the classes currently being expanded, outermost first
#[derive(Debug)]
pub(crate) struct ExpansionStack {
    policy: CyclePolicy,
    max_depth: usize,
    frames: Vec<String>,
}

impl ExpansionStack {
    pub(crate) fn new(policy: CyclePolicy, max_depth: usize) -> Self {
        Self {
            policy,
            max_depth,
            frames: Vec::new(),
        }
    }

    /// Push `label` unless it is already on the stack or the stack is full.
    ///
    /// Only an `Expand` result must be paired with [`exit`](Self::exit).
    pub(crate) fn enter(&mut self, label: &str) -> DocResult<Entry> {
        if self.frames.iter().any(|frame| frame == label) {
            let mut path = self.frames.clone();
            path.push(label.to_string());
            return match self.policy {
                CyclePolicy::Fail => Err(DocError::CyclicType { path }),
                CyclePolicy::Truncate => {
                    tracing::debug!(path = %path.join(" -> "), "cyclic type truncated");
                    Ok(Entry::Truncate)
                }
            };
        }

        if self.frames.len() >= self.max_depth {
            return match self.policy {
                CyclePolicy::Fail => Err(DocError::DepthExceeded {
                    max_depth: self.max_depth,
                    class: label.to_string(),
                }),
                CyclePolicy::Truncate => {
                    tracing::debug!(class = label, max_depth = self.max_depth, "expansion depth reached");
                    Ok(Entry::Truncate)
                }
            };
        }

        tracing::trace!(class = label, depth = self.frames.len(), "expanding");
        self.frames.push(label.to_string());
        Ok(Entry::Expand)
    }

    pub(crate) fn exit(&mut self) {
        self.frames.pop();
    }

    #[cfg(test)]
    pub(crate) fn depth(&self) -> usize {
        self.frames.len()
    }
}
