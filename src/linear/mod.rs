use std::cmp::Ordering;
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::error::Error;
use crate::linear::cursor::{Cursor, CursorMut};
use crate::linear::iterator::{Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod search;

/// A comparator installed on a [`LinearList`], overriding the natural
/// ordering of the element type.
///
/// It must return [`Ordering::Less`], [`Ordering::Equal`] or
/// [`Ordering::Greater`] for "first argument before", "equivalent" and
/// "first argument after" respectively, and it must describe a total order;
/// otherwise the placement of sorted insertions is unspecified.
pub type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// A doubly-linked list with owned nodes, two reachable ends and an
/// optional maintained sort order.
///
/// The `LinearList` contains:
/// - `head` and `tail` links, [`None`] exactly while the list is empty;
/// - the element count `len`;
/// - the insertion mode: a *plain* list accepts positional insertion
///   ([`push_front`], [`push_back`], [`CursorMut::insert_before`],
///   [`CursorMut::insert_after`]), while a *sort-keeping* list accepts
///   [`sorted_insert`] only;
/// - an optional [`Comparator`] that overrides the natural ordering for
///   [`sorted_insert`] and [`find`].
///
/// The insertion mode is fixed when the first element arrives and can only
/// change by draining the list back to zero elements: the next first
/// insertion then decides the mode anew.
///
/// # Naming Conventions
///
/// - `front..=back`: a closed range of list nodes, both inclusive;
/// - a *vacant* cursor: a node handle obtained from an empty list,
///   referring to no element.
///
/// [`push_front`]: LinearList::push_front
/// [`push_back`]: LinearList::push_back
/// [`sorted_insert`]: LinearList::sorted_insert
/// [`find`]: LinearList::find
pub struct LinearList<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    sorted: bool,
    compare: Option<Comparator<T>>,
    _marker: PhantomData<Box<Node<T>>>,
}

pub(crate) struct Node<T> {
    pub(crate) next: Option<NonNull<Node<T>>>,
    pub(crate) prev: Option<NonNull<Node<T>>>,
    pub(crate) element: T,
}

// private methods
impl<T> LinearList<T> {
    pub(crate) fn head_node(&self) -> Option<NonNull<Node<T>>> {
        self.head
    }

    pub(crate) fn tail_node(&self) -> Option<NonNull<Node<T>>> {
        self.tail
    }

    /// Link `node` between `prev` and `next`, where `None` stands for the
    /// respective end of the list.
    ///
    /// It is unsafe because it does not check whether `prev` and `next`
    /// belong to the list, or whether they are adjacent (only in
    /// `#[cfg(debug_assertions)]`).
    ///
    /// If `prev` and `next` do not belong to the list, or they are not
    /// adjacent, this function call will make the list ill-formed.
    pub(crate) unsafe fn attach_node(
        &mut self,
        prev: Option<NonNull<Node<T>>>,
        next: Option<NonNull<Node<T>>>,
        mut node: NonNull<Node<T>>,
    ) {
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        node.as_mut().prev = prev;
        node.as_mut().next = next;
        match prev {
            Some(mut prev) => prev.as_mut().next = Some(node),
            None => self.head = Some(node),
        }
        match next {
            Some(mut next) => next.as_mut().prev = Some(node),
            None => self.tail = Some(node),
        }
        self.len += 1;
        #[cfg(debug_assertions)]
        {
            self.assert_adjacent(prev, Some(node));
            self.assert_adjacent(Some(node), next);
        }
    }

    /// Unlink a single node `node` from the list, and return it as a box.
    ///
    /// It is unsafe because it does not check whether `node` belongs to the
    /// list.
    ///
    /// If the `node` does not belong to the list, this function call will
    /// make the list ill-formed.
    pub(crate) unsafe fn detach_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        let node = Box::from_raw(node.as_ptr());
        match node.prev {
            Some(mut prev) => prev.as_mut().next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(mut next) => next.as_mut().prev = node.prev,
            None => self.tail = node.prev,
        }
        self.len -= 1;
        node
    }

    /// Create the first node and fix the insertion mode for this
    /// population of the list.
    pub(crate) fn init_first(&mut self, element: T, sorted: bool) {
        debug_assert!(self.len == 0, "first-element initialization on a populated list");
        self.sorted = sorted;
        // SAFETY: the list has no nodes, so `None..None` is its only gap.
        unsafe { self.attach_node(None, None, Node::new_detached(element)) };
    }

    #[cfg(debug_assertions)]
    fn assert_adjacent(&self, prev: Option<NonNull<Node<T>>>, next: Option<NonNull<Node<T>>>) {
        unsafe {
            match prev {
                Some(prev) => assert_eq!(prev.as_ref().next, next),
                None => assert_eq!(self.head, next),
            }
            match next {
                Some(next) => assert_eq!(next.as_ref().prev, prev),
                None => assert_eq!(self.tail, prev),
            }
        }
    }
}

impl<T> LinearList<T> {
    /// Create an empty `LinearList`.
    ///
    /// The insertion mode is decided by the first mutation: any of the
    /// positional insertions makes the list plain, while
    /// [`sorted_insert`](LinearList::sorted_insert) makes it sort-keeping.
    ///
    /// # Examples
    ///
    /// ```
    /// use doubly::LinearList;
    /// let list: LinearList<u32> = LinearList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            sorted: false,
            compare: None,
            _marker: PhantomData,
        }
    }

    /// Create a plain-mode `LinearList` holding a single element.
    ///
    /// # Examples
    ///
    /// ```
    /// use doubly::LinearList;
    ///
    /// let list = LinearList::with_first(7);
    /// assert_eq!(list.len(), 1);
    /// assert_eq!(list.front(), Some(&7));
    /// assert_eq!(list.back(), Some(&7));
    /// ```
    pub fn with_first(element: T) -> Self {
        let mut list = Self::new();
        list.init_first(element, false);
        list
    }

    /// Create an empty `LinearList` with a [`Comparator`] installed.
    ///
    /// The comparator overrides the natural ordering wherever elements are
    /// compared: [`sorted_insert`](LinearList::sorted_insert) places
    /// elements by it, and [`find`](LinearList::find) treats two elements
    /// as matching when it returns [`Ordering::Equal`].
    ///
    /// # Examples
    ///
    /// ```
    /// use doubly::LinearList;
    /// use std::iter::FromIterator;
    ///
    /// // Order descending instead of ascending.
    /// let mut list = LinearList::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// list.sorted_insert(2).unwrap();
    /// list.sorted_insert(3).unwrap();
    /// list.sorted_insert(1).unwrap();
    /// assert_eq!(Vec::from_iter(list), vec![3, 2, 1]);
    /// ```
    pub fn with_comparator<F>(compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        let mut list = Self::new();
        list.compare = Some(Box::new(compare));
        list
    }

    /// Install a [`Comparator`], replacing any previous one.
    ///
    /// The comparator survives the list being drained and repopulated; only
    /// the insertion mode is decided anew by the first insertion.
    pub fn set_comparator<F>(&mut self, compare: F)
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        self.compare = Some(Box::new(compare));
    }

    /// Returns `true` if the list keeps a maintained sort order.
    ///
    /// # Examples
    ///
    /// ```
    /// use doubly::LinearList;
    ///
    /// let mut list = LinearList::new();
    /// assert!(!list.is_sorted());
    ///
    /// list.sorted_insert(1).unwrap();
    /// assert!(list.is_sorted());
    ///
    /// // Draining the list opens the mode up again.
    /// list.pop_front().unwrap();
    /// list.push_back(2).unwrap();
    /// assert!(!list.is_sorted());
    /// ```
    #[inline]
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// Returns `true` if the `LinearList` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of elements in the `LinearList`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use doubly::LinearList;
    ///
    /// let mut list = LinearList::new();
    ///
    /// list.push_front(2).unwrap();
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1).unwrap();
    /// assert_eq!(list.len(), 2);
    ///
    /// list.push_back(3).unwrap();
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `LinearList`.
    ///
    /// The insertion mode is decided anew by the next first insertion.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_ok() {}
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use doubly::LinearList;
    ///
    /// let mut list = LinearList::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1).unwrap();
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        // SAFETY: `head` is a live node owned by this list.
        self.head.map(|node| unsafe { &(*node.as_ptr()).element })
    }

    /// Provides a mutable reference to the front element, or `None` if the
    /// list is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        // SAFETY: `head` is a live node owned by this list.
        self.head.map(|node| unsafe { &mut (*node.as_ptr()).element })
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use doubly::LinearList;
    ///
    /// let mut list = LinearList::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push_back(1).unwrap();
    /// assert_eq!(list.back(), Some(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        // SAFETY: `tail` is a live node owned by this list.
        self.tail.map(|node| unsafe { &(*node.as_ptr()).element })
    }

    /// Provides a mutable reference to the back element, or `None` if the
    /// list is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        // SAFETY: `tail` is a live node owned by this list.
        self.tail.map(|node| unsafe { &mut (*node.as_ptr()).element })
    }

    /// Adds an element first in the list.
    ///
    /// On an empty list this is first-element initialization: it succeeds
    /// in any mode and leaves the list plain. On a non-empty sort-keeping
    /// list it is rejected with [`Error::ModeMismatch`], because positional
    /// insertion could break the maintained order; use
    /// [`sorted_insert`](LinearList::sorted_insert) there instead.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use doubly::LinearList;
    ///
    /// let mut list = LinearList::new();
    ///
    /// list.push_front(2).unwrap();
    /// assert_eq!(list.front(), Some(&2));
    ///
    /// list.push_front(1).unwrap();
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    ///
    /// ```
    /// use doubly::{Error, LinearList};
    ///
    /// let mut list = LinearList::new();
    /// list.sorted_insert(1).unwrap();
    /// assert_eq!(list.push_front(0), Err(Error::ModeMismatch));
    /// ```
    pub fn push_front(&mut self, element: T) -> Result<(), Error> {
        if self.is_empty() {
            self.init_first(element, false);
            return Ok(());
        }
        if self.sorted {
            return Err(Error::ModeMismatch);
        }
        // SAFETY: `head` is a live node and `None..head` is the front gap.
        unsafe { self.attach_node(None, self.head, Node::new_detached(element)) };
        Ok(())
    }

    /// Appends an element to the back of the list.
    ///
    /// On an empty list this is first-element initialization: it succeeds
    /// in any mode and leaves the list plain. On a non-empty sort-keeping
    /// list it is rejected with [`Error::ModeMismatch`].
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use doubly::LinearList;
    ///
    /// let mut list = LinearList::new();
    /// list.push_back(1).unwrap();
    /// list.push_back(3).unwrap();
    /// assert_eq!(list.back(), Some(&3));
    /// ```
    pub fn push_back(&mut self, element: T) -> Result<(), Error> {
        if self.is_empty() {
            self.init_first(element, false);
            return Ok(());
        }
        if self.sorted {
            return Err(Error::ModeMismatch);
        }
        // SAFETY: `tail` is a live node and `tail..None` is the back gap.
        unsafe { self.attach_node(self.tail, None, Node::new_detached(element)) };
        Ok(())
    }

    /// Removes the first element and returns it, or [`Error::Empty`] if
    /// the list is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use doubly::{Error, LinearList};
    ///
    /// let mut list = LinearList::new();
    /// assert_eq!(list.pop_front(), Err(Error::Empty));
    ///
    /// list.push_front(1).unwrap();
    /// list.push_front(3).unwrap();
    /// assert_eq!(list.pop_front(), Ok(3));
    /// assert_eq!(list.pop_front(), Ok(1));
    /// assert_eq!(list.pop_front(), Err(Error::Empty));
    /// ```
    pub fn pop_front(&mut self) -> Result<T, Error> {
        let node = self.head.ok_or(Error::Empty)?;
        // SAFETY: `head` belongs to this list.
        Ok(unsafe { self.detach_node(node) }.into_element())
    }

    /// Removes the last element and returns it, or [`Error::Empty`] if
    /// the list is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use doubly::{Error, LinearList};
    ///
    /// let mut list = LinearList::new();
    /// assert_eq!(list.pop_back(), Err(Error::Empty));
    /// list.push_back(1).unwrap();
    /// list.push_back(3).unwrap();
    /// assert_eq!(list.pop_back(), Ok(3));
    /// ```
    pub fn pop_back(&mut self) -> Result<T, Error> {
        let node = self.tail.ok_or(Error::Empty)?;
        // SAFETY: `tail` belongs to this list.
        Ok(unsafe { self.detach_node(node) }.into_element())
    }

    /// Provides a cursor at the front node.
    ///
    /// The cursor is vacant if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use doubly::LinearList;
    /// use std::iter::FromIterator;
    ///
    /// let list = LinearList::from_iter([1, 2, 3]);
    /// let cursor = list.cursor_front();
    /// assert_eq!(cursor.value(), Some(&1));
    /// ```
    pub fn cursor_front(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.head)
    }

    /// Provides a cursor at the back node.
    ///
    /// The cursor is vacant if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use doubly::LinearList;
    /// use std::iter::FromIterator;
    ///
    /// let list = LinearList::from_iter([1, 2, 3]);
    /// let cursor = list.cursor_back();
    /// assert_eq!(cursor.value(), Some(&3));
    /// ```
    pub fn cursor_back(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.tail)
    }

    /// Provides a cursor with editing operations at the front node.
    ///
    /// The cursor is vacant if the list is empty.
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        let head = self.head;
        CursorMut::new(self, head)
    }

    /// Provides a cursor with editing operations at the back node.
    ///
    /// The cursor is vacant if the list is empty.
    pub fn cursor_back_mut(&mut self) -> CursorMut<'_, T> {
        let tail = self.tail;
        CursorMut::new(self, tail)
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use doubly::LinearList;
    ///
    /// let mut list = LinearList::new();
    ///
    /// list.push_back(0).unwrap();
    /// list.push_back(1).unwrap();
    /// list.push_back(2).unwrap();
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// Only the elements are mutable, not the linked structure. On a
    /// sort-keeping list it is the caller's responsibility to keep the
    /// rewritten elements in order, the same as with
    /// [`CursorMut::set_value`].
    ///
    /// # Examples
    ///
    /// ```
    /// use doubly::LinearList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = LinearList::new();
    ///
    /// list.push_back(0).unwrap();
    /// list.push_back(1).unwrap();
    ///
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// assert_eq!(Vec::from_iter(list), vec![10, 11]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }
}

impl<T: Debug> Debug for LinearList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for LinearList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    /// Create a detached node with the given element.
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node {
            next: None,
            prev: None,
            element,
        })))
    }

    pub(crate) fn into_element(self: Box<Self>) -> T {
        self.element
    }
}

impl<T> Drop for LinearList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

// The raw node links make the list `!Send`/`!Sync` by default; the list
// owns its nodes exclusively, so it is exactly as shareable as `T`. The
// stored comparator is constrained to `Send + Sync` by `Comparator`.
unsafe impl<T: Send> Send for LinearList<T> {}

unsafe impl<T: Sync> Sync for LinearList<T> {}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::linear::LinearList;
    use std::cell::RefCell;
    use std::iter::FromIterator;

    #[test]
    fn list_create() {
        let mut list = LinearList::<i32>::new();
        assert!(list.is_empty());
        list.push_back(1).unwrap();
        assert!(!list.is_empty());
        assert_eq!(list.pop_back(), Ok(1));
        assert!(list.is_empty());
    }

    #[test]
    fn list_with_first() {
        let mut list = LinearList::with_first(7);
        assert_eq!(list.len(), 1);
        assert!(!list.is_sorted());
        assert_eq!(list.front(), Some(&7));
        assert_eq!(list.back(), Some(&7));
        assert_eq!(list.pop_back(), Ok(7));
        assert_eq!(list.len(), 0);
        assert_eq!(list.pop_front(), Err(Error::Empty));
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = LinearList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.pop_front(), Err(Error::Empty));
        assert_eq!(list.pop_back(), Err(Error::Empty));

        list.push_back(1).unwrap();
        assert_eq!(list.back(), Some(&1));
        assert_eq!(list.pop_front(), Ok(1));
        assert_eq!(list.pop_back(), Err(Error::Empty));
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        list.push_front(1).unwrap();
        list.push_front(2).unwrap();
        list.push_back(3).unwrap();
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.pop_front(), Ok(2));
        assert_eq!(list.pop_back(), Ok(3));

        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.pop_front(), Ok(1));
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn list_len_tracks_net_mutations() {
        let mut list = LinearList::new();
        for round in 0..3 {
            for i in 0..10 {
                if i % 2 == 0 {
                    list.push_back(i).unwrap();
                } else {
                    list.push_front(i).unwrap();
                }
            }
            assert_eq!(list.len(), 10);
            for i in 0..10 {
                if i % 2 == 0 {
                    list.pop_front().unwrap();
                } else {
                    list.pop_back().unwrap();
                }
                assert_eq!(list.len(), 10 - i - 1);
            }
            assert_eq!(list.len(), 0, "round {}", round);
            assert_eq!(list.pop_front(), Err(Error::Empty));
        }
    }

    #[test]
    fn list_round_trip() {
        let values = [1, 2, 3, 4, 5];
        let mut list = LinearList::new();
        for v in values.iter() {
            list.push_back(*v).unwrap();
        }

        let forward: Vec<i32> = list.iter().copied().collect();
        assert_eq!(forward, values);

        let backward: Vec<i32> = list.iter().rev().copied().collect();
        let mut reversed = values;
        reversed.reverse();
        assert_eq!(backward, reversed);
    }

    #[test]
    fn list_mode_reset_through_empty() {
        let mut list = LinearList::new();
        list.sorted_insert(5).unwrap();
        assert!(list.is_sorted());
        assert_eq!(list.push_back(6), Err(Error::ModeMismatch));
        assert_eq!(list.push_front(4), Err(Error::ModeMismatch));

        assert_eq!(list.pop_front(), Ok(5));
        // The list is empty again, so the next first insertion decides the
        // mode: a plain push succeeds and turns sort-keeping off.
        list.push_back(6).unwrap();
        assert!(!list.is_sorted());
        list.push_front(4).unwrap();
        assert_eq!(Vec::from_iter(list), vec![4, 6]);
    }

    #[test]
    fn list_drop() {
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
        let mut list = LinearList::new();
        list.push_back(DropChecker::new(1, &dropped)).ok();
        list.push_back(DropChecker::new(2, &dropped)).ok();
        list.push_back(DropChecker::new(3, &dropped)).ok();
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn list_front_back_mut() {
        let mut list = LinearList::from_iter([1, 2, 3]);
        *list.front_mut().unwrap() = 10;
        *list.back_mut().unwrap() = 30;
        assert_eq!(Vec::from_iter(list), vec![10, 2, 30]);
    }

    #[test]
    fn list_clear() {
        let mut list = LinearList::from_iter(0..10);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        list.push_back(1).unwrap();
        assert_eq!(list.len(), 1);
    }
}
