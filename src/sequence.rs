//! Order-sensitive equality and hashing across sequence types.
//!
//! A [`Sequence`] is anything that can report its length and iterate its
//! elements from both ends in a fixed order. Two sequences are equal when
//! they have the same length and pairwise equal elements, whatever their
//! concrete types, and equal sequences have equal [`hash_code`]s.
//!
//! ```
//! use circular_list::{List, Sequence};
//! use std::collections::VecDeque;
//!
//! let list = List::from([1, 2, 3]);
//! let deque = VecDeque::from([1, 2, 3]);
//!
//! assert!(list.seq_eq(&deque));
//! assert!(deque.seq_eq(&list));
//! assert_eq!(list.seq_hash_code(), deque.seq_hash_code());
//! assert_eq!(list.seq_get(1), Some(&2));
//! ```

use std::collections::hash_map::DefaultHasher;
use std::collections::VecDeque;
use std::hash::{Hash, Hasher};

use crate::{Iter, List};

/// An ordered, finite, double-ended sequence of elements.
pub trait Sequence {
    type Element;
    type Iter<'a>: DoubleEndedIterator<Item = &'a Self::Element> + ExactSizeIterator
    where
        Self: 'a;

    fn seq_len(&self) -> usize;

    fn seq_iter(&self) -> Self::Iter<'_>;

    /// Returns the element at `index`. The default walks from the front.
    fn seq_get(&self, index: usize) -> Option<&Self::Element> {
        self.seq_iter().nth(index)
    }

    /// Structural, order-sensitive equality against any other sequence.
    fn seq_eq<S>(&self, other: &S) -> bool
    where
        S: Sequence + ?Sized,
        Self::Element: PartialEq<S::Element>,
    {
        self.seq_len() == other.seq_len()
            && self.seq_iter().zip(other.seq_iter()).all(|(a, b)| a == b)
    }

    /// See [`hash_code`].
    fn seq_hash_code(&self) -> u64
    where
        Self::Element: Hash,
    {
        hash_code(self.seq_iter())
    }
}

/// Folds the hashes of `elements` into one code, starting from 1 and
/// combining as `31 * acc + hash(element)` with wrapping arithmetic.
///
/// Element hashes come from a [`DefaultHasher`] with fixed keys, so the
/// code only depends on the elements and their order.
///
/// ```
/// use circular_list::sequence::hash_code;
///
/// let empty: [u8; 0] = [];
/// assert_eq!(hash_code(&empty), 1);
/// assert_eq!(hash_code(&[1, 2]), hash_code(vec![1, 2].iter()));
/// assert_ne!(hash_code(&[1, 2]), hash_code(&[2, 1]));
/// ```
pub fn hash_code<'a, T, I>(elements: I) -> u64
where
    T: Hash + 'a,
    I: IntoIterator<Item = &'a T>,
{
    elements.into_iter().fold(1_u64, |acc, element| {
        acc.wrapping_mul(31).wrapping_add(element_hash(element))
    })
}

fn element_hash<T: Hash + ?Sized>(element: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    element.hash(&mut hasher);
    hasher.finish()
}

impl<T> Sequence for List<T> {
    type Element = T;
    type Iter<'a> = Iter<'a, T> where Self: 'a;

    fn seq_len(&self) -> usize {
        self.len()
    }

    fn seq_iter(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn seq_get(&self, index: usize) -> Option<&T> {
        self.get(index).ok()
    }
}

impl<T> Sequence for Vec<T> {
    type Element = T;
    type Iter<'a> = std::slice::Iter<'a, T> where Self: 'a;

    fn seq_len(&self) -> usize {
        self.len()
    }

    fn seq_iter(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn seq_get(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T> Sequence for [T] {
    type Element = T;
    type Iter<'a> = std::slice::Iter<'a, T> where Self: 'a;

    fn seq_len(&self) -> usize {
        self.len()
    }

    fn seq_iter(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn seq_get(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T> Sequence for VecDeque<T> {
    type Element = T;
    type Iter<'a> = std::collections::vec_deque::Iter<'a, T> where Self: 'a;

    fn seq_len(&self) -> usize {
        self.len()
    }

    fn seq_iter(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn seq_get(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}
