use crate::list::List;
use crate::sequence::{self, Sequence};
use std::collections::VecDeque;
use std::hash::{Hash, Hasher};

impl<T: PartialEq<U>, U> PartialEq<List<U>> for List<T> {
    fn eq(&self, other: &List<U>) -> bool {
        self.seq_eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

macro_rules! impl_eq_sequence {
    ($($RHS:ty),* $(,)?) => {
        $(
            impl<T: PartialEq<U>, U> PartialEq<$RHS> for List<T> {
                fn eq(&self, other: &$RHS) -> bool {
                    self.seq_eq(other)
                }
            }
        )*
    };
}

impl_eq_sequence!(Vec<U>, VecDeque<U>, [U]);

impl<T: PartialEq<U>, U> PartialEq<&[U]> for List<T> {
    fn eq(&self, other: &&[U]) -> bool {
        self.seq_eq(*other)
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for List<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.seq_eq(&other[..])
    }
}

/// Deep copy: the new list is built element by element and shares no node
/// with the source.
impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, other: &Self) {
        while self.len > other.len {
            self.pop_back();
        }
        for (elem, elem_other) in self.iter_mut().zip(other) {
            elem.clone_from(elem_other);
        }
        let len = self.len;
        self.extend(other.iter().skip(len).cloned());
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for elt in self {
            elt.hash(state);
        }
        self.len.hash(state);
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|e| e == x)
    }

    /// Returns the index of the first element equal to `x`, or `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let list = List::from([Some(1), None, Some(1), None]);
    /// assert_eq!(list.index_of(&None), Some(1));
    /// assert_eq!(list.index_of(&Some(1)), Some(0));
    /// assert_eq!(list.index_of(&Some(2)), None);
    /// ```
    pub fn index_of(&self, x: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|e| e == x)
    }

    /// Returns the index of the last element equal to `x`, or `None`. The
    /// list is scanned from the back.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let list = List::from([Some(1), None, Some(1), None]);
    /// assert_eq!(list.last_index_of(&None), Some(3));
    /// assert_eq!(list.last_index_of(&Some(1)), Some(2));
    /// assert_eq!(list.last_index_of(&Some(2)), None);
    /// ```
    pub fn last_index_of(&self, x: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().rposition(|e| e == x)
    }

    /// Removes the first element equal to `x`. Returns `true` if an element
    /// was removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::from(["a", "b", "a"]);
    /// assert!(list.remove_item(&"a"));
    /// assert_eq!(list, ["b", "a"]);
    /// assert!(!list.remove_item(&"c"));
    /// ```
    pub fn remove_item(&mut self, x: &T) -> bool
    where
        T: PartialEq,
    {
        let mut cursor = self.cursor_start_mut();
        while let Ok(element) = cursor.next() {
            if *element == *x {
                return cursor.remove().is_ok();
            }
        }
        false
    }

    /// Order-sensitive hash code, identical for every [`Sequence`] holding
    /// equal elements. See [`sequence::hash_code`].
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::{List, Sequence};
    ///
    /// let list = List::from([1, 2, 3]);
    /// assert_eq!(list.hash_code(), vec![1, 2, 3].seq_hash_code());
    /// assert_ne!(list.hash_code(), List::from([3, 2, 1]).hash_code());
    /// ```
    pub fn hash_code(&self) -> u64
    where
        T: Hash,
    {
        sequence::hash_code(self)
    }
}
