//! Minimal behavior tree for turn-based decision making.
//!
//! - **No delta time**: every tick completes immediately
//! - **No Running state**: a node either succeeds or fails
//! - **Borrowed contexts**: nodes are boxed with an explicit lifetime, so a
//!   tree can be assembled around a context that only borrows its data
//!
//! # Architecture
//!
//! - [`Behavior`]: core trait for all nodes, [`Node`] its boxed form
//! - [`Status`]: Success or Failure
//! - Composites: [`Sequence`], [`Selector`]
//!
//! Leaves are domain structs implementing [`Behavior`] directly.

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod status;

pub use behavior::{Behavior, Node};
pub use composite::{Selector, Sequence};
pub use status::Status;
