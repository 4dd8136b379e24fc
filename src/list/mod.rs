use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};
use std::ptr::NonNull;

use log::trace;

use crate::error::{Error, Result};
use crate::list::cursor::{Cursor, CursorMut};
use crate::list::link::{DetachedNodes, Node};
use crate::{IntoIter, Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod algorithms;
pub(crate) mod link;

// proptest doesn't run under miri with default config
#[cfg(all(not(miri), test))]
mod proptests;

/// The `List` is a doubly-linked list with owned nodes, implemented as a
/// cyclic chain of nodes without any sentinel.
///
/// It allows inserting and removing elements at a resolved position in
/// constant time. Resolving an index walks from the head in whichever
/// direction is shorter, so accessing the element at index *k* of a list
/// of length *n* takes *O*(min(*k*, *n* - *k*)) time.
///
/// The `List` contains:
/// - an optional pointer `head` to the first node, `None` iff the list is
///   empty;
/// - a length field `len`.
///
/// The `prev` of the head node is the last node, and the `next` of the last
/// node is the head, so both ends are reachable in *O*(1) time. A list with
/// one element is a single node linked to itself.
///
/// # Naming Conventions
///
/// - an *index* addresses an element, valid in `0..len`;
/// - a *position* addresses a gap between elements, valid in `0..=len`
///   (position `len` is the end of the list).
pub struct List<T> {
    pub(crate) head: Option<NonNull<Node<T>>>,
    /// the length of the list
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

// private methods
impl<T> List<T> {
    pub(crate) fn back_node(&self) -> Option<NonNull<Node<T>>> {
        // SAFETY: `head.prev` is always valid (either `head` itself, or the last
        // element of the chain).
        self.head.map(|head| unsafe { head.as_ref().prev })
    }

    /// Resolve the node at `index`, walking forward from the head for the
    /// first half of the list and backward from the head for the second.
    pub(crate) fn node_at(&self, index: usize) -> Result<NonNull<Node<T>>> {
        let mut node = match self.head {
            Some(head) if index < self.len => head,
            _ => return Err(Error::element_index(index, self.len)),
        };
        // SAFETY: every step follows a valid link of the cycle.
        unsafe {
            if index < self.len / 2 {
                for _ in 0..index {
                    node = node.as_ref().next;
                }
            } else {
                for _ in index..self.len {
                    node = node.as_ref().prev;
                }
            }
        }
        Ok(node)
    }

    /// Resolve the node right after `position`, or `None` for the end of the
    /// list.
    pub(crate) fn node_after(&self, position: usize) -> Result<Option<NonNull<Node<T>>>> {
        match position {
            position if position > self.len => Err(Error::position(position, self.len)),
            position if position == self.len => Ok(None),
            position => self.node_at(position).map(Some),
        }
    }

    /// Attach a run of detached nodes right before `next`, or at the end of
    /// the list if `next` is `None`. Attaching before the head makes the
    /// front of the run the new head.
    ///
    /// It is unsafe because it does not check whether `next` belongs to the
    /// list.
    pub(crate) unsafe fn attach_nodes(
        &mut self,
        next: Option<NonNull<Node<T>>>,
        detached: DetachedNodes<T>,
    ) {
        match self.head {
            None => self.head = Some(detached.front),
            Some(head) => {
                link::splice_before(detached.front, next.unwrap_or(head));
                if next == Some(head) {
                    self.head = Some(detached.front);
                }
            }
        }
        self.len += detached.len;
        self.debug_check();
    }

    /// Attach a new element right before `next`. See [`List::attach_nodes`].
    pub(crate) unsafe fn attach_element(&mut self, next: Option<NonNull<Node<T>>>, element: T) {
        self.attach_nodes(next, DetachedNodes::single(element));
    }

    /// Detach a single node `node` from the list, and return it as a box.
    ///
    /// It is unsafe because it does not check whether `node` belongs to the
    /// list. If it does not, this call will make both lists ill-formed.
    pub(crate) unsafe fn detach_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        self.len -= 1;
        if self.len == 0 {
            self.head = None;
        } else if self.head == Some(node) {
            self.head = Some(node.as_ref().next);
        }
        let node = link::unlink(node);
        self.debug_check();
        node
    }

    /// Detach the `len` nodes `first..past` from the list, where `past` is
    /// `None` for the end of the list, and return the detached nodes.
    ///
    /// It is unsafe because it does not check whether `first..past` is a
    /// range of exactly `len` nodes of this list.
    pub(crate) unsafe fn detach_nodes(
        &mut self,
        first: NonNull<Node<T>>,
        past: Option<NonNull<Node<T>>>,
        len: usize,
    ) -> DetachedNodes<T> {
        if len == self.len {
            self.head = None;
        } else if let Some(head) = self.head {
            let past = past.unwrap_or(head);
            link::unlink_range(first, past);
            if first == head {
                self.head = Some(past);
            }
        }
        self.len -= len;
        self.debug_check();
        DetachedNodes::new(first, len)
    }

    /// Detach all nodes from the list, and return the detached nodes, or
    /// return `None` if the list is empty.
    pub(crate) fn detach_all_nodes(&mut self) -> Option<DetachedNodes<T>> {
        let head = self.head.take()?;
        let len = std::mem::replace(&mut self.len, 0);
        // SAFETY: the whole chain is a closed run of `len` nodes, and the
        // list no longer refers to it.
        Some(unsafe { DetachedNodes::new(head, len) })
    }

    /// Construct a list from detached nodes.
    pub(crate) fn from_detached(detached: DetachedNodes<T>) -> Self {
        let mut list = List::new();
        // SAFETY: the list is empty, so the run becomes the whole chain.
        unsafe { list.attach_nodes(None, detached) };
        list
    }

    /// Like [`List::detach_all_nodes`], but consume the list.
    pub(crate) fn into_detached(mut self) -> Option<DetachedNodes<T>> {
        self.detach_all_nodes()
    }

    #[inline]
    fn debug_check(&self) {
        #[cfg(any(test, feature = "check-invariants"))]
        self.check_invariants();
    }

    /// Walk the chain in both directions and assert that it forms a single
    /// cycle of exactly `len` distinct nodes starting at the head.
    #[cfg(any(test, feature = "check-invariants"))]
    pub(crate) fn check_invariants(&self) {
        let head = match self.head {
            None => {
                assert_eq!(self.len, 0, "an empty chain must have length 0");
                return;
            }
            Some(head) => head,
        };
        assert!(self.len > 0, "a non-empty chain must have a positive length");
        let mut seen = std::collections::HashSet::with_capacity(self.len);
        let mut node = head;
        for _ in 0..self.len {
            assert!(seen.insert(node), "a node is reached twice within `len` steps");
            // SAFETY: links of a live chain are valid.
            let next = unsafe { node.as_ref().next };
            assert_eq!(unsafe { next.as_ref().prev }, node, "`next.prev` must link back");
            node = next;
        }
        assert_eq!(node, head, "`len` forward steps must return to the head");
        for _ in 0..self.len {
            node = unsafe { node.as_ref().prev };
            assert!(seen.contains(&node), "a backward step left the chain");
        }
        assert_eq!(node, head, "`len` backward steps must return to the head");
    }
}

impl<T> List<T> {
    /// Create an empty `List`
    ///
    /// # Examples
    /// ```
    /// use circular_list::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            head: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the length of the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `List`.
    ///
    /// The chain is detached from the list at once; dropping the elements
    /// then takes *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::from([1, 2]);
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), None);
    /// ```
    pub fn clear(&mut self) {
        if let Some(detached) = self.detach_all_nodes() {
            trace!("clearing {} nodes", detached.len);
            let mut node = detached.front;
            for _ in 0..detached.len {
                // SAFETY: the detached run is owned by nobody else, and each
                // node is freed exactly once.
                let boxed = unsafe { Box::from_raw(node.as_ptr()) };
                node = boxed.next;
            }
        }
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        // SAFETY: the head node holds a valid element.
        self.head.map(|node| unsafe { &(*node.as_ptr()).element })
    }

    /// Provides a mutable reference to the front element, or `None` if the
    /// list is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.map(|node| unsafe { &mut (*node.as_ptr()).element })
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push_back(1);
    /// list.push_back(2);
    /// assert_eq!(list.back(), Some(&2));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.back_node()
            .map(|node| unsafe { &(*node.as_ptr()).element })
    }

    /// Provides a mutable reference to the back element, or `None` if the
    /// list is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.back_node()
            .map(|node| unsafe { &mut (*node.as_ptr()).element })
    }

    /// Adds an element first in the list. The new node becomes the head.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list, [1, 2]);
    /// ```
    pub fn push_front(&mut self, elt: T) {
        // SAFETY: the head belongs to the list.
        unsafe { self.attach_element(self.head, elt) }
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::from([3, 1]);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        // SAFETY: the head belongs to the list.
        Some(unsafe { self.detach_node(head) }.into_element())
    }

    /// Appends an element to the back of a list, i.e. right before the head
    /// of the cycle.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back("A");
    /// list.push_back("B");
    /// list.push_back("C");
    /// assert_eq!(list, ["A", "B", "C"]);
    /// ```
    pub fn push_back(&mut self, elt: T) {
        // SAFETY: `None` denotes the end of the list.
        unsafe { self.attach_element(None, elt) }
    }

    /// Removes the last element from a list and returns it, or `None` if
    /// it is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::from([1, 3]);
    /// assert_eq!(list.pop_back(), Some(3));
    /// assert_eq!(list.pop_back(), Some(1));
    /// assert_eq!(list.pop_back(), None);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        let back = self.back_node()?;
        // SAFETY: the back node belongs to the list.
        Some(unsafe { self.detach_node(back) }.into_element())
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(min(*index*, *len* - *index*))
    /// time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::{Error, List};
    ///
    /// let list = List::from(["A", "B", "C"]);
    /// assert_eq!(list.get(2), Ok(&"C"));
    ///
    /// let empty: List<&str> = List::new();
    /// assert_eq!(empty.get(0), Err(Error::IndexOutOfRange { index: 0, max: -1 }));
    /// ```
    pub fn get(&self, index: usize) -> Result<&T> {
        let node = self.node_at(index)?;
        // SAFETY: a resolved node holds a valid element.
        Ok(unsafe { &(*node.as_ptr()).element })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let node = self.node_at(index)?;
        Ok(unsafe { &mut (*node.as_ptr()).element })
    }

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// assert_eq!(list.set(1, 5), Ok(2));
    /// assert_eq!(list, [1, 5, 3]);
    /// assert!(list.set(3, 0).is_err());
    /// ```
    pub fn set(&mut self, index: usize, elt: T) -> Result<T> {
        self.get_mut(index)
            .map(|element| std::mem::replace(element, elt))
    }

    /// Provides a cursor at the given position.
    ///
    /// By convention, the cursor is at the end of the list if `at == len`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// assert_eq!(list.cursor(1).unwrap().peek_next(), Some(&2));
    /// assert_eq!(list.cursor(3).unwrap().peek_next(), None);
    /// assert!(list.cursor(4).is_err());
    /// ```
    pub fn cursor(&self, at: usize) -> Result<Cursor<'_, T>> {
        let current = self.node_after(at)?;
        Ok(Cursor::new(self, current, at))
    }

    /// Provides a cursor at the start of the list.
    pub fn cursor_start(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.head, 0)
    }

    /// Provides a cursor at the end of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_end();
    /// assert!(cursor.next().is_err());
    /// assert_eq!(cursor.previous(), Ok(&3));
    /// ```
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, None, self.len)
    }

    /// Provides a cursor with editing operations at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_mut(1).unwrap();
    ///
    /// *cursor.next().unwrap() *= 5;
    /// assert_eq!(list, [1, 10, 3]);
    /// ```
    pub fn cursor_mut(&mut self, at: usize) -> Result<CursorMut<'_, T>> {
        let current = self.node_after(at)?;
        Ok(CursorMut::new(self, current, at))
    }

    /// Provides a cursor with editing operations at the start of the list.
    pub fn cursor_start_mut(&mut self) -> CursorMut<'_, T> {
        let head = self.head;
        CursorMut::new(self, head, 0)
    }

    /// Provides a cursor with editing operations at the end of the list.
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        let len = self.len;
        CursorMut::new(self, None, len)
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let list = List::from([0, 1, 2]);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next_back(), Some(&2));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::from([0, 1, 2]);
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    /// assert_eq!(list, [10, 11, 12]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Moves all elements from `other` to the end of the list.
    ///
    /// This reuses all the nodes from `other` and moves them into `self`. After
    /// this operation, `other` becomes empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list1 = List::from(['a']);
    /// let mut list2 = List::from(['b', 'c']);
    ///
    /// list1.append(&mut list2);
    /// assert_eq!(list1, ['a', 'b', 'c']);
    /// assert!(list2.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        if let Some(detached) = other.detach_all_nodes() {
            trace!("appending {} nodes to a list of {}", detached.len, self.len);
            // SAFETY: `None` denotes the end of the list.
            unsafe { self.attach_nodes(None, detached) }
        }
    }

    /// Moves all elements from `other` to the begin of the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list1 = List::from(['a']);
    /// let mut list2 = List::from(['b', 'c']);
    ///
    /// list2.prepend(&mut list1);
    /// assert_eq!(list2, ['a', 'b', 'c']);
    /// assert!(list1.is_empty());
    /// ```
    pub fn prepend(&mut self, other: &mut Self) {
        if let Some(detached) = other.detach_all_nodes() {
            trace!("prepending {} nodes to a list of {}", detached.len, self.len);
            // SAFETY: the head belongs to the list.
            unsafe { self.attach_nodes(self.head, detached) }
        }
    }

    /// Removes the elements in `from..to` and returns them as a new list.
    ///
    /// The removed nodes are not copied: the run `from..to` is cut out of
    /// the chain and handed to the returned list as a whole. If the run
    /// contains the head, the node right after it becomes the new head.
    ///
    /// # Complexity
    ///
    /// Resolving `from` and `to` takes *O*(min(*k*, *n* - *k*)) time each;
    /// the splice itself is *O*(1).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] unless `from <= to <= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::from([1, 2, 3, 4, 5]);
    ///
    /// let removed = list.remove_range(1, 4).unwrap();
    /// assert_eq!(removed, [2, 3, 4]);
    /// assert_eq!(list, [1, 5]);
    /// ```
    pub fn remove_range(&mut self, from: usize, to: usize) -> Result<List<T>> {
        if to > self.len {
            return Err(Error::position(to, self.len));
        }
        if from > to {
            return Err(Error::position(from, to));
        }
        let len = to - from;
        trace!("removing range {}..{} of a list of {}", from, to, self.len);
        if len == 0 {
            return Ok(List::new());
        }
        let first = self.node_at(from)?;
        let past = self.node_after(to)?;
        // SAFETY: `first..past` spans exactly the `len` nodes of `from..to`.
        let detached = unsafe { self.detach_nodes(first, past, len) };
        Ok(List::from_detached(detached))
    }

    /// Splits the list into two at the given position. Returns everything
    /// after the given position (inclusive).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let split = list.split_off(2).unwrap();
    ///
    /// assert_eq!(list, [1, 2]);
    /// assert_eq!(split, [3]);
    /// ```
    pub fn split_off(&mut self, at: usize) -> Result<List<T>> {
        self.remove_range(at, self.len)
    }

    /// Removes the element at the given index and returns it. If it was the
    /// head, its successor becomes the head.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(min(*index*, *len* - *index*))
    /// time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `at >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::from(["A", "B", "C"]);
    /// assert_eq!(list.remove(1), Ok("B"));
    /// assert_eq!(list, ["A", "C"]);
    /// assert_eq!(list.get(0), Ok(&"A"));
    /// ```
    pub fn remove(&mut self, at: usize) -> Result<T> {
        let node = self.node_at(at)?;
        // SAFETY: `node` was resolved in this list.
        Ok(unsafe { self.detach_node(node) }.into_element())
    }

    /// Adds an element at the given position in the list. Inserting at
    /// position `len` appends.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(min(*at*, *len* - *at*)) time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    ///
    /// list.insert(2, 4).unwrap();
    /// list.insert(4, 5).unwrap();
    /// list.insert(0, 0).unwrap();
    ///
    /// assert_eq!(list, [0, 1, 2, 4, 3, 5]);
    /// ```
    pub fn insert(&mut self, at: usize, elt: T) -> Result<()> {
        let next = self.node_after(at)?;
        // SAFETY: `next` was resolved in this list.
        unsafe { self.attach_element(next, elt) };
        Ok(())
    }

    /// Inserts every element of `elements` at the given position, keeping
    /// their order. Returns `true` if anything was inserted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::from([1, 5]);
    /// assert_eq!(list.insert_all(1, 2..5), Ok(true));
    /// assert_eq!(list, [1, 2, 3, 4, 5]);
    /// assert_eq!(list.insert_all(0, None), Ok(false));
    /// ```
    pub fn insert_all<I>(&mut self, at: usize, elements: I) -> Result<bool>
    where
        I: IntoIterator<Item = T>,
    {
        let mut cursor = self.cursor_mut(at)?;
        let mut inserted = false;
        for element in elements {
            cursor.insert(element);
            inserted = true;
        }
        Ok(inserted)
    }

    /// Splices another list at the given position.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(min(*at*, *len* - *at*)) time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `at > len`; `other` is dropped
    /// in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// list.splice_at(2, List::from([4, 5, 6])).unwrap();
    ///
    /// assert_eq!(list, [1, 2, 4, 5, 6, 3]);
    /// ```
    pub fn splice_at(&mut self, at: usize, other: Self) -> Result<()> {
        let next = self.node_after(at)?;
        if let Some(detached) = other.into_detached() {
            trace!("splicing {} nodes at {} of a list of {}", detached.len, at, self.len);
            // SAFETY: `next` was resolved in this list.
            unsafe { self.attach_nodes(next, detached) };
        }
        Ok(())
    }

    /// Returns a copy of the elements in `from..to`, leaving the list
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] unless `from <= to <= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let list = List::from([1, 2, 3, 4]);
    /// assert_eq!(list.sub_list(1, 3).unwrap(), [2, 3]);
    /// assert_eq!(list.len(), 4);
    /// ```
    pub fn sub_list(&self, from: usize, to: usize) -> Result<List<T>>
    where
        T: Clone,
    {
        if to > self.len {
            return Err(Error::position(to, self.len));
        }
        if from > to {
            return Err(Error::position(from, to));
        }
        let cursor = self.cursor(from)?;
        Ok(cursor.into_iter().take(to - from).cloned().collect())
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Panics with the [`Error`] message if `index >= len`, like slices do.
impl<T> Index<usize> for List<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(element) => element,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> IndexMut<usize> for List<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(element) => element,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send> Send for List<T> {}

unsafe impl<T: Sync> Sync for List<T> {}

// Ensure that `List` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::list::List;
    use std::cell::RefCell;

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        list.push_back(1);
        assert!(!list.is_empty());
        assert_eq!(list.pop_back(), Some(1));
        assert!(list.is_empty());
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        for i in 1..=5 {
            list.push_back(DropChecker::new(i, &dropped));
        }
        let range = list.remove_range(1, 3).unwrap();
        assert!(dropped.borrow().is_empty());
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 4, 5]);
        drop(range);
        assert_eq!(dropped.borrow().as_slice(), &[1, 4, 5, 2, 3]);
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert_eq!(list.len(), 0);

        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);

        list.push_back(1);
        assert_eq!(list.back(), Some(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());

        list.push_front(1);
        list.push_front(2);
        list.push_back(3);
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_back(), Some(3));

        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn list_get_and_set() {
        let mut list = List::from_iter(0..10);
        for i in 0..10 {
            assert_eq!(list.get(i), Ok(&i));
            assert_eq!(list[i], i);
        }
        assert_eq!(list.get(10), Err(Error::IndexOutOfRange { index: 10, max: 9 }));

        assert_eq!(list.set(7, 70), Ok(7));
        assert_eq!(list.get(7), Ok(&70));
        list[2] = 20;
        assert_eq!(list, [0, 1, 20, 3, 4, 5, 6, 70, 8, 9]);

        assert_eq!(list.set(10, 0), Err(Error::IndexOutOfRange { index: 10, max: 9 }));
        assert_eq!(list.len(), 10);
    }

    #[test]
    fn list_empty_get_reports_negative_bound() {
        let list = List::<&str>::new();
        let err = list.get(0).unwrap_err();
        assert_eq!(err, Error::IndexOutOfRange { index: 0, max: -1 });
        assert_eq!(
            err.to_string(),
            "the index (0) is outside the allowed range: [0..-1]"
        );
    }

    #[test]
    #[should_panic(expected = "the index (3) is outside the allowed range: [0..2]")]
    fn list_index_panics() {
        let list = List::from([1, 2, 3]);
        let _ = list[3];
    }

    #[test]
    fn list_insert_and_remove() {
        let mut list = List::from_iter(0..10);
        list.insert(5, 10).unwrap();
        assert!(list.iter().copied().eq((0..5).chain(Some(10)).chain(5..10)));

        assert_eq!(list.remove(10), Ok(9));
        assert_eq!(list.back(), Some(&8));
        assert!(list.iter().copied().eq((0..5).chain(Some(10)).chain(5..9)));

        list.insert(0, 11).unwrap();
        assert_eq!(list.front(), Some(&11));

        assert_eq!(list.remove(0), Ok(11));
        assert_eq!(list.front(), Some(&0));
        assert!(list.iter().copied().eq((0..5).chain(Some(10)).chain(5..9)));

        list.insert(10, 12).unwrap();
        assert_eq!(list.back(), Some(&12));

        assert_eq!(list.insert(12, 0), Err(Error::IndexOutOfRange { index: 12, max: 11 }));
        assert_eq!(list.remove(11), Err(Error::IndexOutOfRange { index: 11, max: 10 }));
        assert_eq!(list.len(), 11);
    }

    #[test]
    fn list_remove_last_then_push() {
        let mut list = List::from(["x"]);
        assert_eq!(list.remove(0), Ok("x"));
        assert!(list.is_empty());
        assert!(list.head.is_none());

        list.push_back("y");
        let head = list.head.unwrap();
        unsafe {
            assert_eq!(head.as_ref().next, head);
            assert_eq!(head.as_ref().prev, head);
        }
        assert_eq!(list, ["y"]);
    }

    #[test]
    fn list_remove_item() {
        let mut list = List::from([Some(1), None, Some(2), None]);
        assert!(list.remove_item(&None));
        assert_eq!(list, [Some(1), Some(2), None]);
        assert!(list.remove_item(&Some(1)));
        assert!(!list.remove_item(&Some(1)));
        assert_eq!(list, [Some(2), None]);

        let mut empty = List::<i32>::new();
        assert!(!empty.remove_item(&0));
    }

    #[test]
    fn list_remove_range() {
        fn test_remove_range(len: usize, from: usize, to: usize) {
            let mut list = List::from_iter(0..len);
            let removed = list.remove_range(from, to).unwrap();
            assert!(removed.iter().copied().eq(from..to));
            assert!(list.iter().copied().eq((0..from).chain(to..len)));
            assert_eq!(list.len() + removed.len(), len);
            list.check_invariants();
            removed.check_invariants();
        }
        for len in 0..6 {
            for from in 0..=len {
                for to in from..=len {
                    test_remove_range(len, from, to);
                }
            }
        }
    }

    #[test]
    fn list_remove_range_errors() {
        let mut list = List::from([1, 2, 3]);
        assert_eq!(
            list.remove_range(0, 4).unwrap_err(),
            Error::IndexOutOfRange { index: 4, max: 3 }
        );
        assert_eq!(
            list.remove_range(2, 1).unwrap_err(),
            Error::IndexOutOfRange { index: 2, max: 1 }
        );
        assert_eq!(list, [1, 2, 3]);
    }

    #[test]
    fn list_remove_whole_range_moves_chain() {
        let mut list = List::from(["a", "b", "c"]);
        let head = list.head;
        let all = list.remove_range(0, 3).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(all.head, head);
        assert_eq!(all, ["a", "b", "c"]);
    }

    #[test]
    fn list_split_and_append() {
        fn test_split_and_append(list: Vec<i32>, other: Vec<i32>) {
            let at = list.len();
            let mut appended = List::from(list.clone());
            appended.append(&mut List::from(other.clone()));
            assert_eq!(appended.len(), list.len() + other.len());

            let split = appended.split_off(at).unwrap();
            assert_eq!(appended, list);
            assert_eq!(split, other);

            let mut prepended = List::from(other.clone());
            prepended.prepend(&mut List::from(list.clone()));
            assert!(prepended.iter().eq(list.iter().chain(other.iter())));
        }
        test_split_and_append(vec![0, 1, 2], vec![3, 4]);
        test_split_and_append(vec![0], vec![]);
        test_split_and_append(vec![], vec![0, 1]);
        test_split_and_append(vec![], vec![]);
    }

    #[test]
    fn list_splice() {
        fn test_splice(list: Vec<i32>, other: Vec<i32>, at: usize, spliced: Vec<i32>) {
            let mut list = List::from(list);
            list.splice_at(at, List::from(other)).unwrap();
            assert_eq!(list, spliced);
            assert_eq!(list.len(), spliced.len());
        }
        test_splice(vec![0, 1, 2], vec![5, 6], 3, vec![0, 1, 2, 5, 6]);
        test_splice(vec![0, 1, 2], vec![5, 6], 1, vec![0, 5, 6, 1, 2]);
        test_splice(vec![0, 1, 2], vec![5, 6], 0, vec![5, 6, 0, 1, 2]);
        test_splice(vec![0], vec![1], 1, vec![0, 1]);
        test_splice(vec![], vec![0, 1], 0, vec![0, 1]);
        test_splice(vec![0, 1], vec![], 1, vec![0, 1]);

        let mut list = List::from([1]);
        assert!(list.splice_at(2, List::from([2])).is_err());
        assert_eq!(list, [1]);
    }

    #[test]
    fn list_sub_list() {
        let list = List::from_iter(0..5);
        assert_eq!(list.sub_list(1, 4).unwrap(), [1, 2, 3]);
        assert_eq!(list.sub_list(5, 5).unwrap(), List::<i32>::new());
        assert_eq!(list.sub_list(0, 5).unwrap(), list);
        assert!(list.sub_list(0, 6).is_err());
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn list_clear() {
        let mut list = List::from_iter(0..4);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        list.push_back(9);
        assert_eq!(list, [9]);
    }
}
