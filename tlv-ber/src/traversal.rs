//! Tree walks with per-node flow control
//!
//! Both walks start at the node they are called on and hand every visited
//! node to a callback. The callback decides how the walk proceeds through
//! the returned [`Visit`].
//!
//! Child lists are read after the callback returns, so a callback may
//! add, remove or replace the children of the node it is looking at and
//! the walk follows the updated tree.

use crate::node::Tlv;
use log::trace;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tlv_core::{TlvError, TlvResult};

/// Control signal returned by a traversal callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visit {
    /// Descend into this node's children
    Continue,
    /// Skip this node's subtree, keep walking elsewhere
    Prune,
    /// Stop the whole walk
    Break,
}

/// Walk order for [`Tlv::traverse`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Order {
    /// Pre-order: a node, then each child subtree left to right
    DepthFirst,
    /// Level by level, left to right within a level
    BreadthFirst,
}

impl Tlv {
    /// Depth-first pre-order walk
    ///
    /// Returns `false` if the callback stopped the walk with [`Visit::Break`].
    pub fn dfs<F>(&self, mut visit: F) -> bool
    where
        F: FnMut(&Tlv) -> Visit,
    {
        let mut stack = vec![self.clone()];
        while let Some(node) = stack.pop() {
            match visit(&node) {
                Visit::Break => {
                    trace!("depth-first walk stopped at {}", node.tag());
                    return false;
                }
                Visit::Prune => continue,
                Visit::Continue => {}
            }
            // Reversed so the first child is popped next
            stack.extend(node.children().into_iter().rev());
        }
        true
    }

    /// Breadth-first walk
    ///
    /// Returns `false` if the callback stopped the walk with [`Visit::Break`].
    pub fn bfs<F>(&self, mut visit: F) -> bool
    where
        F: FnMut(&Tlv) -> Visit,
    {
        let mut queue = VecDeque::from([self.clone()]);
        while let Some(node) = queue.pop_front() {
            match visit(&node) {
                Visit::Break => {
                    trace!("breadth-first walk stopped at {}", node.tag());
                    return false;
                }
                Visit::Prune => continue,
                Visit::Continue => {}
            }
            queue.extend(node.children());
        }
        true
    }

    /// Walk in `order` with an optional callback
    ///
    /// # Error Handling
    /// - `BadArgument` if `visit` is `None`; nothing is visited
    pub fn traverse(
        &self,
        order: Order,
        visit: Option<&mut dyn FnMut(&Tlv) -> Visit>,
    ) -> TlvResult<bool> {
        let Some(visit) = visit else {
            return Err(TlvError::BadArgument("missing traversal callback".into()));
        };
        Ok(match order {
            Order::DepthFirst => self.dfs(visit),
            Order::BreadthFirst => self.bfs(visit),
        })
    }
}
