/// The error type shared by [`LinearList`](crate::LinearList) and
/// [`CircularList`](crate::CircularList) operations.
///
/// Every rejected precondition is reported back to the caller through a
/// `Result`; nothing is logged or retried, and a rejected mutation leaves
/// the list untouched. Accessors with a sensible "nothing here" answer
/// (element count of an empty list, cursor steps at a boundary) return that
/// answer instead of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The operation needs at least one element.
    ///
    /// # Examples
    ///
    /// ```
    /// use doubly::{Error, LinearList};
    ///
    /// let mut list = LinearList::<i32>::new();
    /// assert_eq!(list.pop_front(), Err(Error::Empty));
    /// ```
    #[error("the list contains no elements")]
    Empty,

    /// The node handle refers to no element.
    ///
    /// A cursor is vacant when it was obtained from an empty list; it is
    /// the one way a handle can fail to designate a node.
    ///
    /// # Examples
    ///
    /// ```
    /// use doubly::{Error, LinearList};
    ///
    /// let mut list = LinearList::<i32>::new();
    /// let mut cursor = list.cursor_front_mut();
    /// assert_eq!(cursor.insert_after(1), Err(Error::VacantNode));
    /// ```
    #[error("vacant node handle")]
    VacantNode,

    /// The mutation is not allowed in the list's current insertion mode:
    /// either a plain insertion into a list that keeps a maintained order,
    /// or [`sorted_insert`](crate::LinearList::sorted_insert) into a
    /// non-empty list that does not.
    #[error("operation not allowed in the list's current insertion mode")]
    ModeMismatch,

    /// A structural invariant did not hold. Reaching this is a bug in this
    /// crate, not in the caller.
    #[error("internal list invariant violated")]
    Corrupted,
}
