use crate::error::{Error, Result};
use crate::list::link::Node;
use crate::list::List;
use std::fmt;
use std::fmt::Formatter;
use std::ptr::NonNull;

/// What the cursor did last, and which node it returned if it stepped.
enum Step<T> {
    Idle,
    Forward(NonNull<Node<T>>),
    Backward(NonNull<Node<T>>),
    Mutated,
}

impl<T> Clone for Step<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Step<T> {}

/// The observable state of a cursor.
///
/// [`CursorMut::set`] and [`CursorMut::remove`] act on the element returned
/// by the last step, so they are only allowed in a stepped state.
///
/// ```text
///          next()                set() / remove()
/// Idle ----------> SteppedForward ---------------> Mutated
///   |   previous()                                  ^  |
///   +------------> SteppedBackward -----------------+  |
///                                                      |
/// insert() leads to Mutated from any state; seeking    |
/// leads back to Idle. next() / previous() step again <-+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorState {
    /// Created or seeked, nothing returned yet.
    Idle,
    /// The last operation was a successful `next`.
    SteppedForward,
    /// The last operation was a successful `previous`.
    SteppedBackward,
    /// The list was modified through the cursor after its last step.
    Mutated,
}

/// A bidirectional cursor over a `List`.
///
/// A `Cursor` is like an iterator, except that it can freely seek
/// back-and-forth and reports the positions it passes.
///
/// In a list with length *n*, there are *n* + 1 valid positions for the
/// cursor, indexed by 0, 1, ..., *n*. The cursor at position *i* sits
/// between the elements *i* - 1 and *i*: `next` returns element *i* and
/// `previous` returns element *i* - 1.
///
/// # Examples
///
/// Here is a simple example showing how the cursors work. (The cursor
/// position is denoted by `|`).
/// ```
/// use circular_list::List;
///
/// // Create a list: [ A B C D ]
/// let list = List::from(['A', 'B', 'C', 'D']);
///
/// // Create a cursor at start: [|A B C D ] (index = 0)
/// let mut cursor = list.cursor_start();
/// assert!(!cursor.has_previous());
///
/// // Step forward: [ A|B C D ] (index = 1)
/// assert_eq!(cursor.next(), Ok(&'A'));
/// assert_eq!(cursor.next_index(), 1);
///
/// // Create a cursor at the end: [ A B C D|] (index = 4)
/// let mut cursor = list.cursor_end();
/// assert!(!cursor.has_next());
///
/// // Step backward: [ A B C|D ] (index = 3)
/// assert_eq!(cursor.previous(), Ok(&'D'));
/// assert_eq!(cursor.previous_index(), Some(2));
/// ```
pub struct Cursor<'a, T: 'a> {
    index: usize,
    /// The node at `index`, `None` iff `index == len`.
    pub(crate) current: Option<NonNull<Node<T>>>,
    step: Step<T>,
    pub(crate) list: &'a List<T>,
}

impl<'a, T: 'a> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            current: self.current,
            step: self.step,
            list: self.list,
        }
    }
}

/// A cursor over a `List` with editing operations.
///
/// A `CursorMut` is like a [`Cursor`], except that it can also insert,
/// replace and remove elements. It mutably borrows the list, so the list
/// cannot be modified behind its back while it is alive.
///
/// For convenience, [`CursorMut::view`] provides a function to temporarily
/// borrow the list and returns an immutable reference whose lifetime is
/// shorter than the cursor.
///
/// # Examples
///
/// ```compile_fail
/// use circular_list::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let mut cursor = list.cursor_start_mut();
/// list.push_back(4);
/// cursor.insert(0);
/// ```
pub struct CursorMut<'a, T: 'a> {
    index: usize,
    pub(crate) current: Option<NonNull<Node<T>>>,
    step: Step<T>,
    pub(crate) list: &'a mut List<T>,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        // Private methods
        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// The node at `index - 1`, or `None` at the start.
            fn node_before(&self) -> Option<NonNull<Node<T>>> {
                if self.index == 0 {
                    return None;
                }
                match self.current {
                    // SAFETY: `current.prev` is always valid since it is a cyclic list.
                    Some(current) => Some(unsafe { current.as_ref().prev }),
                    None => self.list.back_node(),
                }
            }

            /// Step over the node at `index` and return it.
            fn step_forward(&mut self) -> Result<NonNull<Node<T>>> {
                let node = self.current.ok_or(Error::NoSuchElement)?;
                self.index += 1;
                self.current = if self.index == self.list.len {
                    None
                } else {
                    // SAFETY: `node` is a live node of the list.
                    Some(unsafe { node.as_ref().next })
                };
                self.step = Step::Forward(node);
                Ok(node)
            }

            /// Step back over the node at `index - 1` and return it.
            fn step_backward(&mut self) -> Result<NonNull<Node<T>>> {
                let node = self.node_before().ok_or(Error::NoSuchElement)?;
                self.index -= 1;
                self.current = Some(node);
                self.step = Step::Backward(node);
                Ok(node)
            }
        }

        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// Returns the index of the element that `next` would return,
            /// or the length of the list at the end.
            #[inline]
            pub fn next_index(&self) -> usize {
                self.index
            }

            /// Returns the index of the element that `previous` would
            /// return, or `None` at the start.
            ///
            /// # Examples
            ///
            /// ```
            /// use circular_list::List;
            ///
            /// let list = List::from([1, 2]);
            /// assert_eq!(list.cursor_start().previous_index(), None);
            /// assert_eq!(list.cursor_end().previous_index(), Some(1));
            /// ```
            #[inline]
            pub fn previous_index(&self) -> Option<usize> {
                self.index.checked_sub(1)
            }

            /// Returns `true` unless the cursor is at the end of the list.
            #[inline]
            pub fn has_next(&self) -> bool {
                self.index < self.list.len
            }

            /// Returns `true` unless the cursor is at the start of the list.
            #[inline]
            pub fn has_previous(&self) -> bool {
                self.index > 0
            }

            /// Returns the length of the `List`. See [`List::len`].
            pub fn len(&self) -> usize {
                self.list.len()
            }

            /// Returns `true` if the `List` is empty. See [`List::is_empty`].
            pub fn is_empty(&self) -> bool {
                self.list.is_empty()
            }

            /// Returns the state of the cursor. See [`CursorState`].
            pub fn state(&self) -> CursorState {
                match self.step {
                    Step::Idle => CursorState::Idle,
                    Step::Forward(_) => CursorState::SteppedForward,
                    Step::Backward(_) => CursorState::SteppedBackward,
                    Step::Mutated => CursorState::Mutated,
                }
            }

            /// Returns the element that `next` would return, without
            /// moving the cursor.
            ///
            /// # Examples
            ///
            /// ```
            /// use circular_list::List;
            ///
            /// let list = List::from([1, 2, 3]);
            /// assert_eq!(list.cursor(0).unwrap().peek_next(), Some(&1));
            /// assert_eq!(list.cursor(2).unwrap().peek_next(), Some(&3));
            /// assert_eq!(list.cursor(3).unwrap().peek_next(), None);
            /// ```
            pub fn peek_next(&self) -> Option<&T> {
                // SAFETY: live nodes hold a valid element.
                self.current
                    .map(|node| unsafe { &(*node.as_ptr()).element })
            }

            /// Returns the element that `previous` would return, without
            /// moving the cursor.
            ///
            /// # Examples
            ///
            /// ```
            /// use circular_list::List;
            ///
            /// let list = List::from([1, 2, 3]);
            /// assert_eq!(list.cursor(0).unwrap().peek_previous(), None);
            /// assert_eq!(list.cursor(1).unwrap().peek_previous(), Some(&1));
            /// assert_eq!(list.cursor(3).unwrap().peek_previous(), Some(&3));
            /// ```
            pub fn peek_previous(&self) -> Option<&T> {
                self.node_before()
                    .map(|node| unsafe { &(*node.as_ptr()).element })
            }

            /// Moves the cursor to the start of the list and resets its
            /// state to [`CursorState::Idle`].
            ///
            /// This operation should compute in *O*(1) time.
            #[inline]
            pub fn seek_to_start(&mut self) {
                self.index = 0;
                self.current = self.list.head;
                self.step = Step::Idle;
            }

            /// Moves the cursor to the end of the list and resets its
            /// state to [`CursorState::Idle`].
            ///
            /// This operation should compute in *O*(1) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use circular_list::List;
            ///
            /// let list = List::from([1, 2, 3]);
            /// let mut cursor = list.cursor_start();
            ///
            /// cursor.seek_to_end();
            /// assert_eq!(cursor.next_index(), 3);
            /// assert_eq!(cursor.previous(), Ok(&3));
            /// ```
            #[inline]
            pub fn seek_to_end(&mut self) {
                self.index = self.list.len;
                self.current = None;
                self.step = Step::Idle;
            }

            /// Moves the cursor to the given position `target` and resets
            /// its state to [`CursorState::Idle`].
            ///
            /// The cursor takes the shortest walk among going forward or
            /// backward from the head, or from where it is now.
            ///
            /// If an error occurs, the cursor stays put.
            ///
            /// # Errors
            ///
            /// Returns [`Error::IndexOutOfRange`] if `target > len`.
            ///
            /// # Examples
            ///
            /// ```
            /// use circular_list::List;
            ///
            /// let list = List::from([1, 2, 3]);
            /// let mut cursor = list.cursor_start();
            ///
            /// // Move cursor to a valid place (before the third element)
            /// assert!(cursor.seek_to(2).is_ok());
            /// assert_eq!(cursor.peek_next(), Some(&3));
            ///
            /// // Forbid to move to a invalid place
            /// assert!(cursor.seek_to(5).is_err());
            ///
            /// // The cursor is still before the third element
            /// assert_eq!(cursor.peek_next(), Some(&3));
            /// ```
            pub fn seek_to(&mut self, target: usize) -> Result<()> {
                let len = self.list.len;
                if target > len {
                    return Err(Error::position(target, len));
                }
                if target == len {
                    self.seek_to_end();
                    return Ok(());
                }
                let from_head = target.min(len - target);
                let node = match self.current {
                    // [   c-->t      ]
                    Some(mut node) if target >= self.index && target - self.index < from_head => {
                        for _ in self.index..target {
                            // SAFETY: `t < len`, so no step passes the back node.
                            node = unsafe { node.as_ref().next };
                        }
                        node
                    }
                    // [   t<--c      ]
                    Some(mut node) if target < self.index && self.index - target < from_head => {
                        for _ in target..self.index {
                            node = unsafe { node.as_ref().prev };
                        }
                        node
                    }
                    // [-->t        c<--]
                    _ => self.list.node_at(target)?,
                };
                self.index = target;
                self.current = Some(node);
                self.step = Step::Idle;
                Ok(())
            }
        }

        impl<'a, T: fmt::Debug + 'a> fmt::Debug for $CURSOR<'a, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($CURSOR))
                    .field("list", &self.list)
                    .field("index", &self.index)
                    .field("state", &self.state())
                    .finish()
            }
        }
    };
}

impl_cursor!(CursorMut);
impl_cursor!(Cursor);

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(list: &'a List<T>, current: Option<NonNull<Node<T>>>, index: usize) -> Self {
        Self {
            index,
            current,
            step: Step::Idle,
            list,
        }
    }

    /// Returns the element after the cursor and moves the cursor past it.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchElement`] at the end of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::{Error, List};
    ///
    /// let list = List::from([1, 2]);
    /// let mut cursor = list.cursor_start();
    /// assert_eq!(cursor.next(), Ok(&1));
    /// assert_eq!(cursor.next(), Ok(&2));
    /// assert_eq!(cursor.next(), Err(Error::NoSuchElement));
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<&'a T> {
        let node = self.step_forward()?;
        // SAFETY: the list outlives `'a` and is not mutated during `'a`.
        Ok(unsafe { &(*node.as_ptr()).element })
    }

    /// Moves the cursor back over the element before it and returns that
    /// element.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchElement`] at the start of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::{Error, List};
    ///
    /// let list = List::from([1, 2]);
    /// let mut cursor = list.cursor_end();
    /// assert_eq!(cursor.previous(), Ok(&2));
    /// assert_eq!(cursor.previous(), Ok(&1));
    /// assert_eq!(cursor.previous(), Err(Error::NoSuchElement));
    /// ```
    pub fn previous(&mut self) -> Result<&'a T> {
        let node = self.step_backward()?;
        Ok(unsafe { &(*node.as_ptr()).element })
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(
        list: &'a mut List<T>,
        current: Option<NonNull<Node<T>>>,
        index: usize,
    ) -> Self {
        Self {
            index,
            current,
            step: Step::Idle,
            list,
        }
    }

    /// The node returned by the last step, if the cursor is in a stepped
    /// state.
    fn last_returned(&self) -> Result<NonNull<Node<T>>> {
        match self.step {
            Step::Forward(node) | Step::Backward(node) => Ok(node),
            Step::Idle | Step::Mutated => Err(Error::InvalidCursorState),
        }
    }
}

// Methods that does not change the linking structure of the list.
impl<'a, T: 'a> CursorMut<'a, T> {
    /// Returns a mutable reference to the element after the cursor and
    /// moves the cursor past it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchElement`] at the end of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    /// while let Ok(element) = cursor.next() {
    ///     *element *= 10;
    /// }
    /// assert_eq!(list, [10, 20, 30]);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<&mut T> {
        let node = self.step_forward()?;
        // SAFETY: the returned reference borrows the cursor, which holds the
        // only access to the list.
        Ok(unsafe { &mut (*node.as_ptr()).element })
    }

    /// Moves the cursor back over the element before it and returns a
    /// mutable reference to that element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchElement`] at the start of the list.
    pub fn previous(&mut self) -> Result<&mut T> {
        let node = self.step_backward()?;
        Ok(unsafe { &mut (*node.as_ptr()).element })
    }

    /// Replaces the element returned by the last `next` or `previous`,
    /// returning the old one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCursorState`] if the cursor has not stepped
    /// since it was created, seeked or last used to modify the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::{Error, List};
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_mut(1).unwrap();
    ///
    /// assert_eq!(cursor.set(0), Err(Error::InvalidCursorState));
    /// assert_eq!(cursor.next(), Ok(&mut 2));
    /// assert_eq!(cursor.set(5), Ok(2));
    /// assert_eq!(list, [1, 5, 3]);
    /// ```
    pub fn set(&mut self, elt: T) -> Result<T> {
        let mut node = self.last_returned()?;
        self.step = Step::Mutated;
        // SAFETY: the last returned node is still linked, since every
        // structural change through the cursor leaves the stepped state.
        Ok(std::mem::replace(unsafe { &mut node.as_mut().element }, elt))
    }

    /// Re-borrow the mutable cursor as a short-lived immutable one.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor {
            index: self.index,
            current: self.current,
            step: self.step,
            list: self.list,
        }
    }

    /// Convert the mutable cursor to an immutable one.
    pub fn into_cursor(self) -> Cursor<'a, T> {
        Cursor {
            index: self.index,
            current: self.current,
            step: self.step,
            list: self.list,
        }
    }

    /// Temporarily view the list via an immutable reference.
    ///
    /// This is useful where the list is not able to read while a
    /// mutable cursor is created and being used.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    ///
    /// // Temporarily view the list
    /// assert_eq!(cursor.view().back(), Some(&3));
    ///
    /// cursor.insert(4);
    /// assert_eq!(list, [4, 1, 2, 3]);
    /// ```
    pub fn view(&self) -> &List<T> {
        self.list
    }
}

// Methods that might change the linking structure of the list.
impl<'a, T: 'a> CursorMut<'a, T> {
    /// Inserts an element before the cursor position, so that a following
    /// `previous` would return it and `next` is unaffected.
    ///
    /// After insertion, the cursor stays put but its index becomes
    /// `index + 1`, and its state becomes [`CursorState::Mutated`].
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_mut(1).unwrap();
    ///
    /// cursor.insert(4); // becomes [1, 4, 2, 3]
    /// assert_eq!(cursor.next_index(), 2);
    /// assert_eq!(cursor.peek_next(), Some(&2));
    ///
    /// cursor.seek_to_end();
    /// cursor.insert(5); // becomes [1, 4, 2, 3, 5]
    /// assert_eq!(cursor.next_index(), 5);
    /// assert_eq!(cursor.peek_previous(), Some(&5));
    ///
    /// assert_eq!(list, [1, 4, 2, 3, 5]);
    /// ```
    pub fn insert(&mut self, elt: T) {
        // SAFETY: `self.current` is a node of the list, or the end.
        unsafe { self.list.attach_element(self.current, elt) };
        self.index += 1;
        self.step = Step::Mutated;
    }

    /// Removes the element returned by the last `next` or `previous` and
    /// returns it.
    ///
    /// After a forward step the cursor index decreases by one, since the
    /// removed element was before the cursor. After a backward step the
    /// cursor keeps its index and now faces the element that followed the
    /// removed one. Either way its state becomes [`CursorState::Mutated`].
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCursorState`] if the cursor has not stepped
    /// since it was created, seeked or last used to modify the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::{Error, List};
    ///
    /// let mut list = List::from_iter(0..5);
    /// let mut cursor = list.cursor_mut(2).unwrap();
    ///
    /// assert_eq!(cursor.next(), Ok(&mut 2));
    /// assert_eq!(cursor.remove(), Ok(2)); // becomes [0, 1, 3, 4]
    /// assert_eq!(cursor.next_index(), 2);
    /// assert_eq!(cursor.remove(), Err(Error::InvalidCursorState));
    ///
    /// assert_eq!(cursor.previous(), Ok(&mut 1));
    /// assert_eq!(cursor.remove(), Ok(1)); // becomes [0, 3, 4]
    /// assert_eq!(cursor.next_index(), 1);
    /// assert_eq!(cursor.peek_next(), Some(&3));
    ///
    /// assert_eq!(list, [0, 3, 4]);
    /// ```
    pub fn remove(&mut self) -> Result<T> {
        let node = self.last_returned()?;
        match self.step {
            Step::Backward(_) => {
                // `node` is `current`; the cursor moves on to its successor.
                self.current = if self.index + 1 == self.list.len {
                    None
                } else {
                    // SAFETY: `node` is a live node of the list.
                    Some(unsafe { node.as_ref().next })
                };
            }
            _ => self.index -= 1,
        }
        self.step = Step::Mutated;
        // SAFETY: the last returned node is still linked in the list.
        Ok(unsafe { self.list.detach_node(node) }.into_element())
    }
}

/// `CursorIter` turns a [`Cursor`] into a forward iterator, starting at the
/// cursor position and stopping at the end of the list.
///
/// If you are looking for container-like iterators,
/// see [`Iter`](crate::Iter) and [`IterMut`](crate::IterMut) for details.
///
/// # Examples
///
/// ```
/// use circular_list::List;
///
/// let list = List::from([1, 2, 3]);
/// // Create a cursor iterator
/// let mut cursor_iter = list.cursor(1).unwrap().into_iter();
/// assert_eq!(cursor_iter.next(), Some(&2));
/// assert_eq!(cursor_iter.next(), Some(&3));
/// assert_eq!(cursor_iter.next(), None);
///
/// // Convert back to a cursor
/// let mut cursor = cursor_iter.into_cursor();
/// assert_eq!(cursor.previous(), Ok(&3));
/// ```
pub struct CursorIter<'a, T: 'a> {
    pub(crate) cursor: Cursor<'a, T>,
}

impl<'a, T: 'a> CursorIter<'a, T> {
    pub fn into_cursor(self) -> Cursor<'a, T> {
        self.cursor
    }
    pub fn peek(&self) -> Option<&T> {
        self.cursor.peek_next()
    }
}

impl<'a, T: 'a> IntoIterator for Cursor<'a, T> {
    type Item = &'a T;
    type IntoIter = CursorIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        CursorIter { cursor: self }
    }
}

impl<'a, T: 'a> Iterator for CursorIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.cursor.len() - self.cursor.next_index();
        (rest, Some(rest))
    }
}

impl<T> ExactSizeIterator for CursorIter<'_, T> {}

impl<T> std::iter::FusedIterator for CursorIter<'_, T> {}

impl<'a, T: 'a> From<CursorIter<'a, T>> for Cursor<'a, T> {
    fn from(cursor_iter: CursorIter<'a, T>) -> Self {
        cursor_iter.into_cursor()
    }
}

impl<'a, T: 'a> From<CursorMut<'a, T>> for Cursor<'a, T> {
    fn from(cursor: CursorMut<'a, T>) -> Self {
        cursor.into_cursor()
    }
}

unsafe impl<T: Sync> Send for Cursor<'_, T> {}

unsafe impl<T: Sync> Sync for Cursor<'_, T> {}

unsafe impl<T: Send> Send for CursorMut<'_, T> {}

unsafe impl<T: Sync> Sync for CursorMut<'_, T> {}

unsafe impl<T: Sync> Send for CursorIter<'_, T> {}

unsafe impl<T: Sync> Sync for CursorIter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::CursorState;
    use crate::error::Error;
    use crate::list::List;

    #[test]
    fn cursor_walks_both_ways() {
        let list = List::from_iter(0..5);
        let mut cursor = list.cursor_start();
        for i in 0..5 {
            assert!(cursor.has_next());
            assert_eq!(cursor.next_index(), i);
            assert_eq!(cursor.next(), Ok(&i));
            assert_eq!(cursor.state(), CursorState::SteppedForward);
        }
        assert!(!cursor.has_next());
        assert_eq!(cursor.next(), Err(Error::NoSuchElement));
        for i in (0..5).rev() {
            assert!(cursor.has_previous());
            assert_eq!(cursor.previous_index(), Some(i));
            assert_eq!(cursor.previous(), Ok(&i));
            assert_eq!(cursor.state(), CursorState::SteppedBackward);
        }
        assert!(!cursor.has_previous());
        assert_eq!(cursor.previous_index(), None);
        assert_eq!(cursor.previous(), Err(Error::NoSuchElement));
    }

    #[test]
    fn cursor_at_end() {
        let list = List::from(["a", "b", "c"]);
        let mut cursor = list.cursor_end();
        assert_eq!(cursor.next(), Err(Error::NoSuchElement));
        assert_eq!(cursor.state(), CursorState::Idle);
        assert_eq!(cursor.previous(), Ok(&"c"));
    }

    #[test]
    fn cursor_on_empty_list() {
        let mut list = List::<i32>::new();
        let mut cursor = list.cursor_start_mut();
        assert!(!cursor.has_next());
        assert!(!cursor.has_previous());
        assert_eq!(cursor.next(), Err(Error::NoSuchElement));
        assert_eq!(cursor.previous(), Err(Error::NoSuchElement));
        assert_eq!(cursor.remove(), Err(Error::InvalidCursorState));
        cursor.insert(1);
        assert_eq!(cursor.next_index(), 1);
        assert_eq!(list, [1]);
    }

    #[test]
    fn cursor_position_errors() {
        let mut list = List::from([1, 2]);
        assert_eq!(
            list.cursor(3).unwrap_err(),
            Error::IndexOutOfRange { index: 3, max: 2 }
        );
        assert!(list.cursor_mut(3).is_err());
        let mut cursor = list.cursor(2).unwrap();
        assert_eq!(
            cursor.seek_to(3),
            Err(Error::IndexOutOfRange { index: 3, max: 2 })
        );
        assert_eq!(cursor.next_index(), 2);
    }

    #[test]
    fn cursor_remove_after_next() {
        let mut list = List::from([1, 2, 3]);
        let mut cursor = list.cursor_start_mut();
        assert_eq!(cursor.next(), Ok(&mut 1));
        assert_eq!(cursor.remove(), Ok(1));
        assert_eq!(cursor.state(), CursorState::Mutated);
        assert_eq!(cursor.next_index(), 0);
        assert_eq!(cursor.remove(), Err(Error::InvalidCursorState));
        assert_eq!(cursor.next(), Ok(&mut 2));
        assert_eq!(list, [2, 3]);
    }

    #[test]
    fn cursor_remove_all_forward() {
        let mut list = List::from_iter(0..6);
        let mut cursor = list.cursor_start_mut();
        let mut removed = Vec::new();
        while let Ok(&mut element) = cursor.next() {
            if element % 2 == 0 {
                removed.push(cursor.remove().unwrap());
            }
        }
        assert_eq!(cursor.next_index(), 3);
        assert!(!cursor.has_next());
        assert_eq!(removed, [0, 2, 4]);
        assert_eq!(list, [1, 3, 5]);
    }

    #[test]
    fn cursor_remove_all_backward() {
        let mut list = List::from_iter(0..4);
        let mut cursor = list.cursor_end_mut();
        while cursor.previous().is_ok() {
            cursor.remove().unwrap();
            assert_eq!(cursor.next_index(), cursor.len());
            assert_eq!(cursor.peek_next(), None);
        }
        assert!(cursor.is_empty());
        assert!(list.is_empty());
    }

    #[test]
    fn cursor_remove_after_previous_in_the_middle() {
        let mut list = List::from_iter(0..5);
        let mut cursor = list.cursor_mut(3).unwrap();
        assert_eq!(cursor.previous(), Ok(&mut 2));
        assert_eq!(cursor.remove(), Ok(2));
        assert_eq!(cursor.next_index(), 2);
        assert_eq!(cursor.peek_next(), Some(&3));
        assert_eq!(cursor.peek_previous(), Some(&1));
        assert_eq!(list, [0, 1, 3, 4]);
    }

    #[test]
    fn cursor_remove_head_moves_head() {
        let mut list = List::from([1, 2, 3]);
        let mut cursor = list.cursor_mut(1).unwrap();
        assert_eq!(cursor.previous(), Ok(&mut 1));
        assert_eq!(cursor.remove(), Ok(1));
        assert_eq!(cursor.next(), Ok(&mut 2));
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.back(), Some(&3));
    }

    #[test]
    fn cursor_state_machine() {
        let mut list = List::from([1, 2, 3]);
        let mut cursor = list.cursor_start_mut();
        assert_eq!(cursor.state(), CursorState::Idle);
        assert_eq!(cursor.set(0), Err(Error::InvalidCursorState));

        cursor.next().unwrap();
        assert_eq!(cursor.set(10), Ok(1));
        assert_eq!(cursor.state(), CursorState::Mutated);
        assert_eq!(cursor.set(0), Err(Error::InvalidCursorState));
        assert_eq!(cursor.remove(), Err(Error::InvalidCursorState));

        cursor.next().unwrap();
        cursor.insert(15);
        assert_eq!(cursor.state(), CursorState::Mutated);
        assert_eq!(cursor.remove(), Err(Error::InvalidCursorState));

        cursor.previous().unwrap();
        cursor.seek_to_start();
        assert_eq!(cursor.state(), CursorState::Idle);
        assert_eq!(cursor.remove(), Err(Error::InvalidCursorState));

        cursor.next().unwrap();
        cursor.seek_to(2).unwrap();
        assert_eq!(cursor.set(0), Err(Error::InvalidCursorState));
        drop(cursor);
        assert_eq!(list, [10, 2, 15, 3]);
    }

    #[test]
    fn cursor_insert_builds_in_order() {
        let mut list = List::new();
        let mut cursor = list.cursor_end_mut();
        for i in 0..5 {
            cursor.insert(i);
            assert_eq!(cursor.next_index(), i + 1);
        }
        let forward: Vec<_> = list.cursor_start().into_iter().copied().collect();
        assert_eq!(forward, [0, 1, 2, 3, 4]);

        let mut cursor = list.cursor_end();
        let mut backward = Vec::new();
        while let Ok(&element) = cursor.previous() {
            backward.push(element);
        }
        assert_eq!(backward, [4, 3, 2, 1, 0]);
    }

    #[test]
    fn cursor_insert_at_start_moves_head() {
        let mut list = List::from([2, 3]);
        let mut cursor = list.cursor_start_mut();
        cursor.insert(0);
        cursor.insert(1);
        assert_eq!(cursor.peek_next(), Some(&2));
        assert_eq!(list, [0, 1, 2, 3]);
        assert_eq!(list.front(), Some(&0));
    }

    #[test]
    fn cursor_seek() {
        let len = 9;
        let list = List::from_iter(0..len);
        for from in 0..=len {
            for to in 0..=len {
                let mut cursor = list.cursor(from).unwrap();
                cursor.seek_to(to).unwrap();
                assert_eq!(cursor.next_index(), to);
                assert_eq!(cursor.peek_next(), list.get(to).ok());
                assert_eq!(cursor.peek_previous(), to.checked_sub(1).map(|i| &list[i]));
            }
        }
        let mut cursor = list.cursor(4).unwrap();
        cursor.seek_to_end();
        assert_eq!(cursor.next_index(), len);
        assert_eq!(cursor.peek_next(), None);
        cursor.seek_to_start();
        assert_eq!(cursor.next_index(), 0);
        assert_eq!(cursor.peek_next(), Some(&0));
    }

    #[test]
    fn cursor_mut_to_cursor() {
        let mut list = List::from([1, 2, 3]);
        let mut cursor = list.cursor_mut(1).unwrap();
        cursor.next().unwrap();
        assert_eq!(cursor.as_cursor().state(), CursorState::SteppedForward);
        assert_eq!(cursor.as_cursor().next(), Ok(&3));
        let mut cursor = cursor.into_cursor();
        assert_eq!(cursor.next_index(), 2);
        assert_eq!(cursor.previous(), Ok(&2));
    }
}
