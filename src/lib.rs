//! This crate provides an indexed doubly-linked list with owned nodes,
//! implemented as a cyclic chain without any sentinel node.
//!
//! The [`List`] allows inserting and removing elements at a resolved position
//! in constant time, and cutting out or splicing in whole runs of nodes
//! without moving any element. Accessing elements by index walks from the head
//! in whichever direction is shorter, so it takes *O*(min(*k*, *n* - *k*))
//! time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use circular_list::List;
//!
//! let mut list = List::from([1, 2, 3, 4]);
//!
//! let mut cursor = list.cursor_start_mut();
//!
//! cursor.insert(0); // insert 0 at the beginning of the list
//! assert_eq!(cursor.peek_next(), Some(&1));
//! assert_eq!(cursor.view(), &[0, 1, 2, 3, 4]);
//!
//! cursor.seek_to(3).unwrap(); // move the cursor before 3, and removes it.
//! assert_eq!(cursor.next(), Ok(&mut 3));
//! assert_eq!(cursor.remove(), Ok(3));
//! assert_eq!(cursor.view(), &[0, 1, 2, 4]);
//!
//! let tail = list.remove_range(1, 3).unwrap(); // cut out [1, 2]
//! assert_eq!(tail, [1, 2]);
//! assert_eq!(list, [0, 4]);
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!          ┌──────────────────────────────────────────────────────────────────┐
//!          ↓                                                   Node N-1       │
//!    ╔═══════════╗           ╔═══════════╗                   ╔═══════════╗    │
//!    ║   next    ║ ────────→ ║   next    ║ ───→ ┄┄ ────────→ ║   next    ║ ───┘
//!    ╟───────────╢           ╟───────────╢   Node 2, 3, ...  ╟───────────╢
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←─── ┄┄ ←──────── ║   prev    ║
//! │  ╟───────────╢           ╟───────────╢                   ╟───────────╢
//! │  ║ payload T ║           ║ payload T ║                   ║ payload T ║
//! │  ╚═══════════╝           ╚═══════════╝                   ╚═══════════╝
//! │      Node 0 ↑                Node 1                            ↑
//! └─────────────┼──────────────────────────────────────────────────┘
//! ╔═══════════╗ │
//! ║   head    ║ ┘
//! ╟───────────╢
//! ║    len    ║
//! ╚═══════════╝
//!     List
//! ```
//! The `List` contains:
//! - an optional pointer `head` to the first node, which is `None` iff the
//!   list is empty;
//! - a length field `len` indicating the length of the list.
//!
//! Each node of the list `List<T>` is allocated on heap, which contains:
//! - the `next` pointer that points to the next element (or the head if it is
//!   the last element in the list);
//! - the `prev` pointer that points to the previous element (or the last
//!   element if it is the head);
//! - the actual payload `T`.
//!
//! A list with a single element is a node whose `next` and `prev` point to
//! itself. Following `next` from the head exactly `len` times returns to the
//! head.
//!
//! In convention, in a list with length *n*, the nodes are indexed by 0, 1,
//! ..., *n* - 1, and positions between them (used by cursors and insertion)
//! by 0, 1, ..., *n*.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. These
//! are double-ended iterators and iterate the list like an array (fused and
//! non-cyclic). [`IterMut`] provides mutability of the elements (but not the
//! linked structure of the list).
//!
//! ## Examples
//!
//! ```
//! use circular_list::List;
//!
//! let mut list = List::from([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused and non-cyclic
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Cursors
//!
//! The cursors [`Cursor`] and [`CursorMut`] walk the list in both directions
//! and report the positions they pass. In a list with length *n*, there are
//! *n* + 1 valid positions for the cursor, indexed by 0, 1, ..., *n*.
//!
//! [`CursorMut`] also edits the list where it stands:
//! - [`insert`]: insert a new element before the cursor;
//! - [`set`]: replace the element returned by the last step;
//! - [`remove`]: remove the element returned by the last step.
//!
//! `set` and `remove` need a preceding `next` or `previous`, which is
//! tracked by an explicit [`CursorState`]. Calling them twice in a row, or
//! right after `insert` or a seek, fails with [`Error::InvalidCursorState`].
//!
//! ## Examples
//!
//! ```
//! use circular_list::{Error, List};
//!
//! let mut list = List::from([1, 2, 3, 4]);
//!
//! let mut cursor = list.cursor_start_mut();
//!
//! cursor.insert(5); // becomes [5, 1, 2, 3, 4], before 1
//! assert_eq!(cursor.peek_next(), Some(&1));
//!
//! cursor.seek_to(3).unwrap();
//! assert_eq!(cursor.next(), Ok(&mut 3));
//! assert_eq!(cursor.remove(), Ok(3)); // becomes [5, 1, 2, 4], before 4
//! assert_eq!(cursor.peek_next(), Some(&4));
//! assert_eq!(cursor.remove(), Err(Error::InvalidCursorState));
//!
//! assert_eq!(cursor.previous(), Ok(&mut 2));
//! assert_eq!(cursor.remove(), Ok(2)); // becomes [5, 1, 4], before 4
//! assert_eq!(cursor.peek_next(), Some(&4));
//!
//! assert_eq!(Vec::from_iter(list), vec![5, 1, 4]);
//! ```
//!
//! See more functions in [`CursorMut`].
//!
//! # Errors
//!
//! Fallible operations return [`Result`], and leave the list untouched when
//! they fail. Out-of-range indices report the inclusive bound that was
//! accepted:
//!
//! ```
//! use circular_list::List;
//!
//! let list: List<i32> = List::new();
//! assert_eq!(
//!     list.get(0).unwrap_err().to_string(),
//!     "the index (0) is outside the allowed range: [0..-1]",
//! );
//! ```
//!
//! # Features
//!
//! - `check-invariants`: after every structural mutation, walk the whole
//!   chain in both directions and assert that it forms one cycle of `len`
//!   distinct nodes. Always on in this crate's own unit tests.
//!
//! [`List`]: crate::List
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`Cursor`]: crate::list::cursor::Cursor
//! [`CursorMut`]: crate::list::cursor::CursorMut
//! [`CursorState`]: crate::list::cursor::CursorState
//! [`insert`]: crate::list::cursor::CursorMut::insert
//! [`set`]: crate::list::cursor::CursorMut::set
//! [`remove`]: crate::list::cursor::CursorMut::remove

#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use list::cursor::{Cursor, CursorMut, CursorState};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;
#[doc(inline)]
pub use sequence::Sequence;

pub mod error;
pub mod list;
pub mod sequence;
