use crate::list::link::Node;
use crate::list::List;
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// An iterator over the elements of a `List`.
///
/// It keeps the nodes at both ends of the range still to be yielded and
/// the number of elements between them, so it stops after `len` steps
/// instead of walking around the cycle.
///
/// Though the `Iter` does not hold a reference from the list,
/// it actually *borrows* (immutably) from the list, so a phantom
/// marker of `&'a List<T>` is added to protect the list from being
/// written.
///
/// # Examples
///
/// ```compile_fail
/// use circular_list::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let mut iter = list.iter();
///
/// // Won't compile, because list is already borrowed immutably.
/// list.push_back(4);
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, T: 'a> {
    front: Option<NonNull<Node<T>>>,
    back: Option<NonNull<Node<T>>>,
    len: usize,
    _marker: PhantomData<&'a List<T>>,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        Self {
            front: list.head,
            back: list.back_node(),
            len: list.len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.len).finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    /// Return `*front` and move `front` to `front.next`, or return `None`
    /// if no element is left.
    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        // SAFETY: `len > 0`, so `front` is a live node of the borrowed list.
        let current = unsafe { &*self.front?.as_ptr() };
        self.len -= 1;
        self.front = Some(current.next);
        Some(&current.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Iter<'a, T> {
    /// Return `*back` and move `back` to `back.prev`, or return `None`
    /// if no element is left.
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        // SAFETY: `len > 0`, so `back` is a live node of the borrowed list.
        let current = unsafe { &*self.back?.as_ptr() };
        self.len -= 1;
        self.back = Some(current.prev);
        Some(&current.element)
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// A mutable iterator over the elements of a `List`.
///
/// Though the `IterMut` does not hold a reference from the list,
/// it actually *borrows* (mutably) from the list, so a phantom
/// marker of `&'a mut List<T>` is added to protect the list from
/// being read.
///
/// # Examples
///
/// `List` is not readable after an `IterMut` is created.
/// ```compile_fail
/// use circular_list::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let mut iter = list.iter_mut();
/// println!("{:?}", list.back());
/// println!("{:?}", iter.next());
/// ```
pub struct IterMut<'a, T: 'a> {
    front: Option<NonNull<Node<T>>>,
    back: Option<NonNull<Node<T>>>,
    len: usize,
    _marker: PhantomData<&'a mut List<T>>,
}

impl<'a, T: 'a> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>) -> Self {
        Self {
            front: list.head,
            back: list.back_node(),
            len: list.len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for IterMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IterMut").field(&self.len).finish()
    }
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        // SAFETY: `len > 0`, so `front` is a live node, and no node is
        // yielded twice since both ends stop after `len` steps in total.
        let current = unsafe { &mut *self.front?.as_ptr() };
        self.len -= 1;
        self.front = Some(current.next);
        Some(&mut current.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let current = unsafe { &mut *self.back?.as_ptr() };
        self.len -= 1;
        self.back = Some(current.prev);
        Some(&mut current.element)
    }
}

impl<'a, T: 'a> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T: 'a> FusedIterator for IterMut<'a, T> {}

/// An owning iterator over the elements of a `List`.
///
/// This `struct` is created by the [`into_iter`] method on [`List`]
/// (provided by the `IntoIterator` trait). See its documentation for more.
///
/// [`into_iter`]: List::into_iter
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("list", &self.list)
            .finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len;
        (len, Some(len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.push_back(item));
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for List<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(array: [T; N]) -> Self {
        array.into_iter().collect()
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}

unsafe impl<T: Sync> Sync for Iter<'_, T> {}

unsafe impl<T: Send> Send for IterMut<'_, T> {}

unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::fmt::Debug;

    #[test]
    fn test_iter() {
        macro_rules! test_iter {
            ($FN:ident, $ITER:ident $(, $REV:ident)?) => {
                fn $FN<T, I>(input: I, mid: usize)
                where
                    T: Eq + Debug + Clone,
                    I: IntoIterator<Item = T>,
                {
                    #[allow(unused_mut)]
                    let mut vec = Vec::from_iter(input);
                    #[allow(unused_mut)]
                    let mut list = List::from_iter(vec.clone());
                    let len = vec.len();
                    let mut iter = list.$ITER() $( .$REV() )?;
                    for (i, item) in vec.$ITER() $( .$REV() )?.enumerate() {
                        assert_eq!(iter.next(), Some(item));
                        assert_eq!(iter.len(), len - i - 1);
                    }
                    assert_eq!(iter.next(), None);
                    assert_eq!(iter.next(), None);
                    assert_eq!(iter.next_back(), None);
                    assert_eq!(iter.len(), 0);

                    let mut iter = list.$ITER() $( .$REV() )?;
                    for (i, item) in vec.$ITER() $( .$REV() )? .take(mid).enumerate() {
                        assert_eq!(iter.next(), Some(item));
                        assert_eq!(iter.len(), len - i - 1);
                    }
                    let mut iter = iter.rev();
                    for (i, item) in vec.$ITER() $( .$REV() )? .skip(mid).rev().enumerate() {
                        assert_eq!(iter.next(), Some(item));
                        assert_eq!(iter.len(), len - mid - i - 1);
                    }
                    assert_eq!(iter.next(), None);
                    assert_eq!(iter.next(), None);
                    assert_eq!(iter.next_back(), None);
                    assert_eq!(iter.len(), 0);
                }
            };
        }
        test_iter!(test_iter, iter);
        test_iter!(test_iter_mut, iter_mut);
        test_iter!(test_back_iter, iter, rev);
        test_iter!(test_back_iter_mut, iter_mut, rev);

        fn test_case<T, I>(input: I, mid: usize)
        where
            T: Eq + Debug + Clone,
            I: IntoIterator<Item = T> + Clone,
        {
            test_iter(input.clone(), mid);
            test_iter_mut(input.clone(), mid);
            test_back_iter(input.clone(), mid);
            test_back_iter_mut(input.clone(), mid);
        }
        test_case(0..10, 10);
        test_case(0..10, 8);
        test_case(0..10, 5);
        test_case(0..10, 2);
        test_case(0..10, 0);
        test_case(0..2, 2);
        test_case(0..2, 1);
        test_case(0..2, 0);
        test_case(0..1, 1);
        test_case(0..1, 0);
        test_case(0..0, 0);
    }

    #[test]
    fn test_into_iter() {
        let list = List::from_iter(0..6);
        let mut iter = list.into_iter();
        assert_eq!(iter.len(), 6);
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next_back(), Some(5));
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.collect::<Vec<_>>(), [1, 2, 3, 4]);
    }

    #[test]
    fn test_extend_and_from() {
        let mut list = List::from(vec![1, 2]);
        list.extend([3, 4]);
        list.extend(&[5, 6]);
        assert_eq!(list, [1, 2, 3, 4, 5, 6]);
        assert_eq!(format!("{:?}", list), "[1, 2, 3, 4, 5, 6]");
        assert!(List::<u8>::default().is_empty());
    }
}
