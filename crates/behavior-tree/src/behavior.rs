//! Core behavior trait.

use crate::Status;

/// A node evaluated against a mutable context (the blackboard).
///
/// Nodes may read the context and write intermediate results into it for
/// later siblings to consume.
pub trait Behavior<C> {
    fn tick(&self, ctx: &mut C) -> Status;
}

/// Boxed node living at most as long as `'n`.
///
/// The explicit lifetime lets `C` itself borrow data, e.g. a per-turn
/// context holding `&mut` references into the caller's state.
pub type Node<'n, C> = Box<dyn Behavior<C> + 'n>;

impl<'n, C> Behavior<C> for Node<'n, C> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }
}
