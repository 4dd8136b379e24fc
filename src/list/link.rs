//! Node-graph primitives.
//!
//! Every function here rewires `next`/`prev` links of nodes that form
//! closed cycles. None of them knows about the owning [`List`], its head or
//! its length: the list keeps that bookkeeping itself.
//!
//! A *run* is a closed cycle of one or more nodes identified by its front
//! node; a single freshly allocated node is a run of length one.
//!
//! [`List`]: crate::List

use std::marker::PhantomData;
use std::ptr::NonNull;

pub(crate) struct Node<T> {
    pub(crate) next: NonNull<Node<T>>,
    pub(crate) prev: NonNull<Node<T>>,
    pub(crate) element: T,
}

/// A run of nodes detached from any list, used in range extraction and
/// splicing. It does not free its nodes when dropped: it must be handed to
/// [`List::from_detached`] or attached to a list.
///
/// [`List::from_detached`]: crate::List
pub(crate) struct DetachedNodes<T> {
    pub(crate) front: NonNull<Node<T>>,
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

impl<T> Node<T> {
    /// Allocate a node whose `next` and `prev` point to itself.
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        let node = NonNull::from(Box::leak(Box::new(Node {
            next: NonNull::dangling(),
            prev: NonNull::dangling(),
            element,
        })));
        // SAFETY: `node` was just allocated and nothing else refers to it.
        unsafe {
            (*node.as_ptr()).next = node;
            (*node.as_ptr()).prev = node;
        }
        node
    }

    pub(crate) fn into_element(self: Box<Self>) -> T {
        self.element
    }
}

impl<T> DetachedNodes<T> {
    /// It is unsafe because `front` must be the front of a closed run of
    /// exactly `len` nodes that no list owns.
    pub(crate) unsafe fn new(front: NonNull<Node<T>>, len: usize) -> Self {
        debug_assert!(len > 0, "Cannot detach nodes of length 0");
        Self {
            front,
            len,
            _marker: PhantomData,
        }
    }

    pub(crate) fn single(element: T) -> Self {
        // SAFETY: a new node is a closed run of length 1.
        unsafe { Self::new(Node::new_detached(element), 1) }
    }
}

/// Make `prev` and `next` adjacent.
pub(crate) unsafe fn connect<T>(mut prev: NonNull<Node<T>>, mut next: NonNull<Node<T>>) {
    prev.as_mut().next = next;
    next.as_mut().prev = prev;
}

/// Insert the closed run starting at `front` right before `existing`.
///
/// It is unsafe because the run and `existing` must belong to two different
/// cycles; splicing a cycle into itself corrupts both halves.
pub(crate) unsafe fn splice_before<T>(front: NonNull<Node<T>>, existing: NonNull<Node<T>>) {
    let back = front.as_ref().prev;
    let prev = existing.as_ref().prev;
    connect(prev, front);
    connect(back, existing);
    #[cfg(debug_assertions)]
    {
        assert_adjacent(prev, front);
        assert_adjacent(back, existing);
    }
}

/// Unlink `node` from its cycle and take back its allocation. The
/// neighbours are joined together.
///
/// It is unsafe because `node` must be a live node allocated by
/// [`Node::new_detached`] and not referenced from anywhere else afterwards.
pub(crate) unsafe fn unlink<T>(node: NonNull<Node<T>>) -> Box<Node<T>> {
    connect(node.as_ref().prev, node.as_ref().next);
    Box::from_raw(node.as_ptr())
}

/// Cut the nodes `first..past` out of their cycle. Both the remaining nodes
/// and the cut run are closed again, so `first` becomes the front of a run
/// and `past` stays linked to what preceded `first`.
///
/// It is unsafe because `first..past` must be a non-empty proper sub-range
/// of one cycle (`past` is not inside the run).
pub(crate) unsafe fn unlink_range<T>(first: NonNull<Node<T>>, past: NonNull<Node<T>>) {
    let before = first.as_ref().prev;
    let back = past.as_ref().prev;
    connect(before, past);
    connect(back, first);
}

#[cfg(debug_assertions)]
fn assert_adjacent<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    unsafe {
        assert_eq!(prev.as_ref().next, next);
        assert_eq!(next.as_ref().prev, prev);
    }
}
