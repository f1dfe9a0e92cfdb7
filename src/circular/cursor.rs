use std::fmt;
use std::fmt::Formatter;
use std::ptr::NonNull;

use crate::circular::{CircularList, RingNode};
use crate::error::Error;

/// A node handle over a [`CircularList`].
///
/// Unlike the linear list's [`Cursor`](crate::Cursor), a ring cursor has
/// no boundary to stop at: stepping always advances, and enough forward
/// steps come back around to where it started. The one exception is a
/// *vacant* cursor, obtained from an empty ring, which designates no node
/// and stays in place however it is moved.
///
/// Cursors compare equal exactly when they designate the same node of the
/// same ring — and designating the same node means sharing its value and
/// both of its neighbors.
///
/// # Examples
///
/// ```
/// use doubly::CircularList;
///
/// let mut ring = CircularList::with_first(1);
/// ring.push(2);
/// ring.push(3);
///
/// let mut cursor = ring.cursor();
/// for expected in [1, 2, 3, 1, 2].iter() {
///     assert_eq!(cursor.value(), Some(expected));
///     cursor.move_next();
/// }
/// ```
pub struct RingCursor<'a, T: 'a> {
    pub(crate) current: Option<NonNull<RingNode<T>>>,
    pub(crate) list: &'a CircularList<T>,
}

/// A node handle over a [`CircularList`] with editing operations.
///
/// Seeks like a [`RingCursor`] and can additionally rewrite the designated
/// element. The cursor borrows the ring mutably, so the node it designates
/// is always the live, authoritative one — stale copies of a node cannot
/// exist.
///
/// # Examples
///
/// ```
/// use doubly::CircularList;
///
/// let mut ring = CircularList::with_first(1);
/// ring.push(2);
///
/// let mut cursor = ring.cursor_mut();
/// cursor.move_next();
/// assert_eq!(cursor.set_value(20), Ok(2));
/// assert_eq!(ring.pop(), Ok(1));
/// assert_eq!(ring.handle(), Some(&20));
/// ```
pub struct RingCursorMut<'a, T: 'a> {
    pub(crate) current: Option<NonNull<RingNode<T>>>,
    pub(crate) list: &'a mut CircularList<T>,
}

macro_rules! impl_ring_cursor {
    ($CURSOR:ident) => {
        impl<'a, T: 'a> $CURSOR<'a, T> {
            fn same_list_with(&self, other: &Self) -> bool {
                let this: *const CircularList<T> = &*self.list;
                let that: *const CircularList<T> = &*other.list;
                this == that
            }

            /// Returns `true` if the cursor designates no node.
            pub fn is_vacant(&self) -> bool {
                self.current.is_none()
            }

            /// Returns `true` if the cursor designates the handle node.
            pub fn at_handle(&self) -> bool {
                self.current.is_some() && self.current == self.list.handle_node()
            }

            /// Step the cursor forward around the ring, and report whether
            /// it moved.
            ///
            /// The ring is closed, so this always succeeds except on a
            /// vacant cursor, which stays in place and reports `false`.
            pub fn move_next(&mut self) -> bool {
                // SAFETY: a non-vacant cursor designates a live node of
                // the borrowed ring, and ring links are always live.
                match self.current {
                    Some(node) => {
                        self.current = Some(unsafe { node.as_ref().next });
                        true
                    }
                    None => false,
                }
            }

            /// Step the cursor backward around the ring, and report
            /// whether it moved.
            ///
            /// The ring is closed, so this always succeeds except on a
            /// vacant cursor, which stays in place and reports `false`.
            pub fn move_prev(&mut self) -> bool {
                // SAFETY: a non-vacant cursor designates a live node of
                // the borrowed ring, and ring links are always live.
                match self.current {
                    Some(node) => {
                        self.current = Some(unsafe { node.as_ref().prev });
                        true
                    }
                    None => false,
                }
            }

            /// Read the element under the cursor, or `None` if the cursor
            /// is vacant.
            pub fn value(&self) -> Option<&T> {
                // SAFETY: a non-vacant cursor designates a live node of
                // the borrowed ring.
                self.current.map(|node| unsafe { &(*node.as_ptr()).element })
            }
        }

        /// Cursors compare by position: equal exactly when they designate
        /// the same node of the same ring.
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

impl_ring_cursor!(RingCursor);
impl_ring_cursor!(RingCursorMut);

impl<'a, T: 'a> RingCursor<'a, T> {
    pub(crate) fn new(list: &'a CircularList<T>, current: Option<NonNull<RingNode<T>>>) -> Self {
        Self { current, list }
    }
}

impl<'a, T: 'a> Clone for RingCursor<'a, T> {
    fn clone(&self) -> Self {
        RingCursor {
            current: self.current,
            list: self.list,
        }
    }
}

impl<'a, T: 'a> RingCursorMut<'a, T> {
    pub(crate) fn new(
        list: &'a mut CircularList<T>,
        current: Option<NonNull<RingNode<T>>>,
    ) -> Self {
        Self { current, list }
    }

    /// Re-borrow the mutable cursor as a short-lived immutable one at the
    /// same position.
    pub fn as_cursor(&self) -> RingCursor<'_, T> {
        RingCursor {
            current: self.current,
            list: &*self.list,
        }
    }

    /// Read the element under the cursor mutably, or `None` if the cursor
    /// is vacant.
    pub fn value_mut(&mut self) -> Option<&mut T> {
        // SAFETY: a non-vacant cursor designates a live node of the
        // borrowed ring.
        self.current.map(|node| unsafe { &mut (*node.as_ptr()).element })
    }

    /// Replace the element under the cursor and return the previous one.
    ///
    /// The write goes through the live node — the cursor's borrow
    /// guarantees there is no other copy to reconcile. Fails with
    /// [`Error::VacantNode`] if the cursor is vacant.
    ///
    /// # Examples
    ///
    /// ```
    /// use doubly::{CircularList, Error};
    ///
    /// let mut empty = CircularList::<i32>::new();
    /// assert_eq!(empty.cursor_mut().set_value(1), Err(Error::VacantNode));
    ///
    /// let mut ring = CircularList::with_first(1);
    /// assert_eq!(ring.cursor_mut().set_value(10), Ok(1));
    /// assert_eq!(ring.handle(), Some(&10));
    /// ```
    pub fn set_value(&mut self, element: T) -> Result<T, Error> {
        match self.value_mut() {
            Some(slot) => Ok(std::mem::replace(slot, element)),
            None => Err(Error::VacantNode),
        }
    }
}
