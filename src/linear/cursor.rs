use std::fmt;
use std::fmt::Formatter;
use std::ptr::NonNull;

use crate::error::Error;
use crate::linear::{LinearList, Node};

/// A node handle over a [`LinearList`].
///
/// A `Cursor` designates one node of the list and can seek back and forth
/// over it. Unlike an iterator it never runs off the list: stepping past
/// the back (or the front) leaves the cursor in place, so a caller detects
/// the boundary by the step reporting `false`, or by comparing positions —
/// cursors compare equal exactly when they designate the same node of the
/// same list.
///
/// A cursor obtained from an empty list is *vacant*: it designates no node,
/// reads no value, and stays vacant however it is moved.
///
/// # Examples
///
/// ```
/// use doubly::LinearList;
/// use std::iter::FromIterator;
///
/// let list = LinearList::from_iter(['A', 'B', 'C']);
///
/// let mut cursor = list.cursor_front();
/// assert_eq!(cursor.value(), Some(&'A'));
///
/// assert!(cursor.move_next());
/// assert_eq!(cursor.value(), Some(&'B'));
///
/// // Stepping past the back end goes nowhere.
/// assert!(cursor.move_next());
/// assert!(!cursor.move_next());
/// assert_eq!(cursor, list.cursor_back());
/// ```
pub struct Cursor<'a, T: 'a> {
    pub(crate) current: Option<NonNull<Node<T>>>,
    pub(crate) list: &'a LinearList<T>,
}

/// A node handle over a [`LinearList`] with editing operations.
///
/// A `CursorMut` seeks the same way as a [`Cursor`], and can additionally
/// splice new nodes in next to its position, rewrite the designated
/// element, and remove it. The cursor borrows the list mutably, which is
/// how a removal knows its owning list without taking one as an argument —
/// and why a handle can never outlive or disagree with the list it came
/// from.
///
/// # Examples
///
/// ```
/// use doubly::LinearList;
/// use std::iter::FromIterator;
///
/// let mut list = LinearList::from_iter([1, 2, 4]);
///
/// let mut cursor = list.cursor_front_mut();
/// cursor.move_next();
/// cursor.insert_after(3).unwrap();
/// assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 4]);
/// ```
pub struct CursorMut<'a, T: 'a> {
    pub(crate) current: Option<NonNull<Node<T>>>,
    pub(crate) list: &'a mut LinearList<T>,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        impl<'a, T: 'a> $CURSOR<'a, T> {
            fn same_list_with(&self, other: &Self) -> bool {
                let this: *const LinearList<T> = &*self.list;
                let that: *const LinearList<T> = &*other.list;
                this == that
            }

            /// Returns `true` if the cursor designates no node.
            pub fn is_vacant(&self) -> bool {
                self.current.is_none()
            }

            /// Returns `true` if the cursor designates the front node.
            pub fn at_front(&self) -> bool {
                self.current.is_some() && self.current == self.list.head_node()
            }

            /// Returns `true` if the cursor designates the back node.
            pub fn at_back(&self) -> bool {
                self.current.is_some() && self.current == self.list.tail_node()
            }

            /// Step the cursor toward the back, and report whether it
            /// moved.
            ///
            /// At the back node — and on a vacant cursor — there is nowhere
            /// to go: the cursor stays put and `false` is returned.
            ///
            /// # Examples
            ///
            /// ```
            /// use doubly::LinearList;
            /// use std::iter::FromIterator;
            ///
            /// let list = LinearList::from_iter([1, 2]);
            /// let mut cursor = list.cursor_front();
            ///
            /// assert!(cursor.move_next());
            /// assert_eq!(cursor.value(), Some(&2));
            ///
            /// // Already at the back: the position is unchanged.
            /// assert!(!cursor.move_next());
            /// assert_eq!(cursor.value(), Some(&2));
            /// ```
            pub fn move_next(&mut self) -> bool {
                // SAFETY: a non-vacant cursor designates a live node of the
                // borrowed list.
                match self.current.and_then(|node| unsafe { node.as_ref().next }) {
                    Some(next) => {
                        self.current = Some(next);
                        true
                    }
                    None => false,
                }
            }

            /// Step the cursor toward the front, and report whether it
            /// moved.
            ///
            /// At the front node — and on a vacant cursor — the cursor
            /// stays put and `false` is returned.
            ///
            /// # Examples
            ///
            /// ```
            /// use doubly::LinearList;
            /// use std::iter::FromIterator;
            ///
            /// let list = LinearList::from_iter([1, 2]);
            /// let mut cursor = list.cursor_front();
            ///
            /// assert!(!cursor.move_prev());
            /// assert_eq!(cursor.value(), Some(&1));
            /// ```
            pub fn move_prev(&mut self) -> bool {
                // SAFETY: a non-vacant cursor designates a live node of the
                // borrowed list.
                match self.current.and_then(|node| unsafe { node.as_ref().prev }) {
                    Some(prev) => {
                        self.current = Some(prev);
                        true
                    }
                    None => false,
                }
            }

            /// Read the element under the cursor, or `None` if the cursor
            /// is vacant.
            pub fn value(&self) -> Option<&T> {
                // SAFETY: a non-vacant cursor designates a live node of the
                // borrowed list.
                self.current.map(|node| unsafe { &(*node.as_ptr()).element })
            }
        }

        /// Cursors compare by position: equal exactly when they designate
        /// the same node of the same list.
        impl<'a, T: 'a> PartialEq for $CURSOR<'a, T> {
            fn eq(&self, other: &Self) -> bool {
                self.same_list_with(other) && self.current == other.current
            }
        }

        impl<'a, T: 'a> Eq for $CURSOR<'a, T> {}

        impl<'a, T: fmt::Debug + 'a> fmt::Debug for $CURSOR<'a, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($CURSOR))
                    .field("value", &self.value())
                    .finish()
            }
        }
    };
}

impl_cursor!(Cursor);
impl_cursor!(CursorMut);

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(list: &'a LinearList<T>, current: Option<NonNull<Node<T>>>) -> Self {
        Self { current, list }
    }
}

impl<'a, T: 'a> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        Cursor {
            current: self.current,
            list: self.list,
        }
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut LinearList<T>, current: Option<NonNull<Node<T>>>) -> Self {
        Self { current, list }
    }

    /// Re-borrow the mutable cursor as a short-lived immutable one at the
    /// same position.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor {
            current: self.current,
            list: &*self.list,
        }
    }

    /// Read the element under the cursor mutably, or `None` if the cursor
    /// is vacant.
    ///
    /// On a sort-keeping list it is the caller's responsibility to keep a
    /// rewritten element in order; the linked structure is untouched
    /// either way.
    pub fn value_mut(&mut self) -> Option<&mut T> {
        // SAFETY: a non-vacant cursor designates a live node of the
        // borrowed list.
        self.current.map(|node| unsafe { &mut (*node.as_ptr()).element })
    }

    /// Replace the element under the cursor and return the previous one.
    ///
    /// Fails with [`Error::VacantNode`] if the cursor is vacant.
    ///
    /// # Examples
    ///
    /// ```
    /// use doubly::LinearList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = LinearList::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_front_mut();
    /// cursor.move_next();
    ///
    /// assert_eq!(cursor.set_value(20), Ok(2));
    /// assert_eq!(Vec::from_iter(list), vec![1, 20, 3]);
    /// ```
    pub fn set_value(&mut self, element: T) -> Result<T, Error> {
        match self.value_mut() {
            Some(slot) => Ok(std::mem::replace(slot, element)),
            None => Err(Error::VacantNode),
        }
    }

    /// Splice a new element in just before the cursor's node. The cursor
    /// keeps designating the same node.
    ///
    /// Inserting before the front node makes the new node the front. Fails
    /// with [`Error::VacantNode`] on a vacant cursor and with
    /// [`Error::ModeMismatch`] on a sort-keeping list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use doubly::LinearList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = LinearList::from_iter([2, 3]);
    ///
    /// let mut cursor = list.cursor_front_mut();
    /// cursor.insert_before(1).unwrap();
    /// assert_eq!(cursor.value(), Some(&2));
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3]);
    /// ```
    pub fn insert_before(&mut self, element: T) -> Result<(), Error> {
        let node = self.current.ok_or(Error::VacantNode)?;
        if self.list.is_sorted() {
            return Err(Error::ModeMismatch);
        }
        // SAFETY: `node` is a live node of the borrowed list, and
        // `node.prev..node` is a real gap of it.
        unsafe {
            let prev = node.as_ref().prev;
            self.list
                .attach_node(prev, Some(node), Node::new_detached(element));
        }
        Ok(())
    }

    /// Splice a new element in just after the cursor's node. The cursor
    /// keeps designating the same node.
    ///
    /// Inserting after the back node makes the new node the back. Fails
    /// with [`Error::VacantNode`] on a vacant cursor and with
    /// [`Error::ModeMismatch`] on a sort-keeping list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use doubly::LinearList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = LinearList::from_iter([1, 3]);
    ///
    /// let mut cursor = list.cursor_front_mut();
    /// cursor.insert_after(2).unwrap();
    /// assert_eq!(cursor.value(), Some(&1));
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3]);
    /// ```
    pub fn insert_after(&mut self, element: T) -> Result<(), Error> {
        let node = self.current.ok_or(Error::VacantNode)?;
        if self.list.is_sorted() {
            return Err(Error::ModeMismatch);
        }
        // SAFETY: `node` is a live node of the borrowed list, and
        // `node..node.next` is a real gap of it.
        unsafe {
            let next = node.as_ref().next;
            self.list
                .attach_node(Some(node), next, Node::new_detached(element));
        }
        Ok(())
    }

    /// Detach the cursor's node from its list and return the element,
    /// consuming the handle.
    ///
    /// The owning list is known through the cursor's borrow, so no list
    /// argument is needed. Removal at the front or back goes through
    /// [`LinearList::pop_front`]/[`LinearList::pop_back`]; an interior
    /// node splices its two neighbors together directly. Fails with
    /// [`Error::VacantNode`] if the cursor is vacant.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use doubly::LinearList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = LinearList::from_iter([1, 2, 3]);
    ///
    /// let mut cursor = list.cursor_front_mut();
    /// cursor.move_next();
    /// assert_eq!(cursor.remove(), Ok(2));
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 3]);
    /// ```
    pub fn remove(self) -> Result<T, Error> {
        let node = self.current.ok_or(Error::VacantNode)?;
        let list = self.list;
        if list.head_node() == Some(node) {
            return list.pop_front();
        }
        if list.tail_node() == Some(node) {
            return list.pop_back();
        }
        // SAFETY: `node` is an interior node of the borrowed list.
        Ok(unsafe { list.detach_node(node) }.into_element())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::linear::LinearList;
    use std::iter::FromIterator;

    #[test]
    fn cursor_boundary_is_idempotent() {
        let list = LinearList::from_iter([1, 2, 3]);

        let mut cursor = list.cursor_back();
        let before = cursor.clone();
        assert!(!cursor.move_next());
        assert_eq!(cursor, before);
        assert_eq!(cursor.value(), Some(&3));

        let mut cursor = list.cursor_front();
        let before = cursor.clone();
        assert!(!cursor.move_prev());
        assert_eq!(cursor, before);
        assert_eq!(cursor.value(), Some(&1));
    }

    #[test]
    fn cursor_walks_both_ways() {
        let list = LinearList::from_iter([1, 2, 3]);

        let mut cursor = list.cursor_front();
        let mut forward = vec![*cursor.value().unwrap()];
        while cursor.move_next() {
            forward.push(*cursor.value().unwrap());
        }
        assert_eq!(forward, vec![1, 2, 3]);
        assert!(cursor.at_back());

        let mut backward = vec![*cursor.value().unwrap()];
        while cursor.move_prev() {
            backward.push(*cursor.value().unwrap());
        }
        assert_eq!(backward, vec![3, 2, 1]);
        assert!(cursor.at_front());
    }

    #[test]
    fn cursor_vacant_stays_vacant() {
        let list = LinearList::<i32>::new();
        let mut cursor = list.cursor_front();
        assert!(cursor.is_vacant());
        assert!(!cursor.move_next());
        assert!(!cursor.move_prev());
        assert!(cursor.is_vacant());
        assert_eq!(cursor.value(), None);
        assert!(!cursor.at_front());
        assert!(!cursor.at_back());
    }

    #[test]
    fn cursor_vacant_mutations_fail() {
        let mut list = LinearList::<i32>::new();
        {
            let mut cursor = list.cursor_front_mut();
            assert_eq!(cursor.insert_before(1), Err(Error::VacantNode));
            assert_eq!(cursor.insert_after(1), Err(Error::VacantNode));
            assert_eq!(cursor.set_value(1), Err(Error::VacantNode));
            assert_eq!(cursor.remove(), Err(Error::VacantNode));
        }
        assert!(list.is_empty());
    }

    #[test]
    fn cursor_insert_updates_boundaries() {
        let mut list = LinearList::with_first(2);

        list.cursor_front_mut().insert_before(1).unwrap();
        assert_eq!(list.front(), Some(&1));

        list.cursor_back_mut().insert_after(3).unwrap();
        assert_eq!(list.back(), Some(&3));

        let mut cursor = list.cursor_front_mut();
        cursor.move_next();
        cursor.insert_after(9).unwrap();
        assert_eq!(cursor.value(), Some(&2));

        assert_eq!(list.len(), 4);
        assert_eq!(Vec::from_iter(list), vec![1, 2, 9, 3]);
    }

    #[test]
    fn cursor_remove_front_back_and_interior() {
        let mut list = LinearList::from_iter([1, 2, 3, 4, 5]);

        assert_eq!(list.cursor_front_mut().remove(), Ok(1));
        assert_eq!(list.cursor_back_mut().remove(), Ok(5));

        let mut cursor = list.cursor_front_mut();
        cursor.move_next();
        assert_eq!(cursor.remove(), Ok(3));

        assert_eq!(list.len(), 2);
        assert_eq!(Vec::from_iter(list), vec![2, 4]);
    }

    #[test]
    fn cursor_remove_only_element() {
        let mut list = LinearList::with_first(7);
        assert_eq!(list.cursor_back_mut().remove(), Ok(7));
        assert!(list.is_empty());
        assert_eq!(list.pop_front(), Err(Error::Empty));
    }

    #[test]
    fn cursor_rejects_positional_insert_in_sorted_mode() {
        let mut list = LinearList::new();
        list.sorted_insert(1).unwrap();
        list.sorted_insert(3).unwrap();

        let mut cursor = list.cursor_front_mut();
        assert_eq!(cursor.insert_after(2), Err(Error::ModeMismatch));
        assert_eq!(cursor.insert_before(0), Err(Error::ModeMismatch));
        // Removal is order-preserving and stays allowed.
        assert_eq!(cursor.remove(), Ok(1));
        assert_eq!(Vec::from_iter(list), vec![3]);
    }

    #[test]
    fn cursor_set_value() {
        let mut list = LinearList::from_iter([1, 2, 3]);
        let mut cursor = list.cursor_back_mut();
        assert_eq!(cursor.set_value(30), Ok(3));
        assert_eq!(cursor.value(), Some(&30));
        assert_eq!(Vec::from_iter(list), vec![1, 2, 30]);
    }

    #[test]
    fn cursor_positions_compare_by_identity() {
        let list = LinearList::from_iter([1, 2]);
        let other = LinearList::from_iter([1, 2]);

        let mut cursor = list.cursor_front();
        assert_eq!(cursor, list.cursor_front());
        cursor.move_next();
        assert_ne!(cursor, list.cursor_front());
        assert_eq!(cursor, list.cursor_back());

        // Same value, different list: never equal.
        assert_ne!(list.cursor_front(), other.cursor_front());
    }
}
