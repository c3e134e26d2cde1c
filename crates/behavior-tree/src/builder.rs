//! Shorthands for assembling trees without `Box::new` noise.

use crate::{Behavior, Node, Selector, Sequence};

#[inline]
pub fn sequence<'n, C: 'n>(children: Vec<Node<'n, C>>) -> Node<'n, C> {
    Box::new(Sequence::new(children))
}

#[inline]
pub fn selector<'n, C: 'n>(children: Vec<Node<'n, C>>) -> Node<'n, C> {
    Box::new(Selector::new(children))
}

/// Boxes any node.
#[inline]
pub fn node<'n, C, B>(behavior: B) -> Node<'n, C>
where
    B: Behavior<C> + 'n,
{
    Box::new(behavior)
}
