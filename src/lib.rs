//! This crate provides two doubly-linked lists with owned nodes: a
//! bounded [`LinearList`] with an optional maintained sort order, and a
//! closed [`CircularList`] addressed through a rotating handle.
//!
//! Both containers hand out *node cursors* — handles that designate one
//! node and seek over its neighbors — next to the usual iterators, and
//! both report rejected preconditions through the shared [`Error`] type
//! rather than panicking.
//!
//! Here is a quick example showing how the linear list works.
//!
//! ```
//! use doubly::LinearList;
//! use std::iter::FromIterator;
//!
//! let mut list = LinearList::from_iter([1, 2, 4]);
//!
//! let mut cursor = list.find_mut(&2).unwrap();
//! cursor.insert_after(3).unwrap(); // becomes [1, 2, 3, 4]
//!
//! assert_eq!(list.pop_front(), Ok(1));
//! assert_eq!(Vec::from_iter(list), vec![2, 3, 4]);
//! ```
//!
//! # Memory Layout
//!
//! The linear list owns a chain of heap nodes; both end links are
//! [`None`], so every boundary case is an explicit `Option` rather than a
//! null pointer:
//!
//! ```text
//! ╔═══════════╗
//! ║   head    ║ ──→ ╔═══════════╗      ╔═══════════╗      ╔═══════════╗
//! ╟───────────╢     ║   next    ║ ───→ ║   next    ║ ───→ ║ next=None ║
//! ║   tail    ║ ─┐  ╟───────────╢      ╟───────────╢      ╟───────────╢
//! ╟───────────╢  │  ║ prev=None ║ ←─── ║   prev    ║ ←─── ║   prev    ║
//! ║ len, mode ║  │  ╟───────────╢      ╟───────────╢      ╟───────────╢
//! ╚═══════════╝  │  ║ element T ║      ║ element T ║      ║ element T ║
//!   LinearList   │  ╚═══════════╝      ╚═══════════╝      ╚═══════════╝
//!                └────────────────────────────────────────────↑
//! ```
//!
//! The circular list has no ends at all — the nodes close into a ring,
//! and the list holds only the *handle*, the node currently treated as
//! the ring's logical start (a one-node ring references itself both
//! ways):
//!
//! ```text
//!        ┌─────────────────────────────────────────────┐
//!        ↓                                             │
//! ╔═══════════╗      ╔═══════════╗      ╔═══════════╗  │
//! ║   next    ║ ───→ ║   next    ║ ───→ ║   next    ║ ─┘
//! ╟───────────╢      ╟───────────╢      ╟───────────╢
//! ║   prev    ║ ←─── ║   prev    ║ ←─── ║   prev    ║ ←┐
//! ╟───────────╢      ╟───────────╢      ╟───────────╢  ┆
//! ║ element T ║      ║ element T ║      ║ element T ║
//! ╚═══════════╝      ╚═══════════╝      ╚═══════════╝
//!       ↑ handle
//! ```
//!
//! # Insertion Modes
//!
//! A `LinearList` is either *plain* or *sort-keeping*. The mode is fixed
//! by the first insertion — positional pushes make it plain,
//! [`sorted_insert`] makes it sort-keeping — and only draining the list
//! back to empty opens the decision up again. A sort-keeping list rejects
//! every positional insertion with [`Error::ModeMismatch`], so its
//! head-to-tail traversal is non-decreasing by construction:
//!
//! ```
//! use doubly::LinearList;
//! use std::iter::FromIterator;
//!
//! let mut list = LinearList::new();
//! for value in [3, 1, 4, 1, 5].iter() {
//!     list.sorted_insert(*value).unwrap();
//! }
//! assert!(list.push_back(2).is_err());
//! assert_eq!(Vec::from_iter(list), vec![1, 1, 3, 4, 5]);
//! ```
//!
//! The ordering is the element type's by default; installing a
//! [`Comparator`] replaces it, for [`sorted_insert`] placements and
//! [`find`] equivalence both.
//!
//! # Cursors
//!
//! [`Cursor`] and [`CursorMut`] designate a node of a linear list.
//! Stepping past an end is not an error and does not wrap around: the
//! cursor stays where it is and reports that it did not move, so
//! traversal code needs no separate boundary check. [`RingCursor`] and
//! [`RingCursorMut`] do the same over a ring, where stepping *always*
//! moves — the ring has no boundary — and enough steps come back around:
//!
//! ```
//! use doubly::CircularList;
//!
//! let mut ring = CircularList::with_first(1);
//! ring.push(2);
//! ring.push(3);
//!
//! let mut cursor = ring.cursor();
//! cursor.move_next();
//! cursor.move_next();
//! cursor.move_next();
//! assert_eq!(cursor, ring.cursor()); // back at the handle
//! ```
//!
//! A `CursorMut` additionally splices elements in next to its node,
//! rewrites the element under it, and removes its node —
//! [`CursorMut::remove`] finds the owning list through the cursor itself,
//! so there is no list argument to get wrong.
//!
//! # Iteration
//!
//! Iterating over a `LinearList` is by [`Iter`], [`IterMut`] and
//! [`IntoIter`]; they are double-ended and exact-size, and iterate the
//! list like an array (fused and non-cyclic). A `CircularList` iterates
//! from the handle forward, yielding each element exactly once.
//!
//! [`sorted_insert`]: LinearList::sorted_insert
//! [`find`]: LinearList::find
//! [`Comparator`]: crate::linear::Comparator

pub use error::Error;

#[doc(inline)]
pub use linear::cursor::{Cursor, CursorMut};
#[doc(inline)]
pub use linear::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use linear::LinearList;

#[doc(inline)]
pub use circular::cursor::{RingCursor, RingCursorMut};
#[doc(inline)]
pub use circular::CircularList;

pub mod circular;
pub mod error;
pub mod linear;

mod experiments;
