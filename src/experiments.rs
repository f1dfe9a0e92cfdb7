#![allow(dead_code)]
//! A compile-time-checked rendition of the linear list's two-ended core.
//!
//! The list in [`crate::linear`] threads raw `NonNull` links and argues
//! their validity in safety comments. This module keeps a second, fully
//! safe rendition of the same link discipline next to it: each node is
//! owned as two `StaticRc` halves — one held by each neighbor, or by the
//! list itself at the ends — and all link fields live behind `GhostCell`,
//! so a single token stands in for the borrow of the whole structure.
//! Pushing splits a fresh node into its two halves; popping collects both
//! halves, joins them back into a whole and unwraps the element. A
//! mispaired link discipline would fail to join.
//!
//! It is intentionally minimal — front/back push/pop and the element
//! count, no cursors and no ordering — and is exercised by its tests
//! only.

use ghost_cell::{GhostCell, GhostToken};
use static_rc::StaticRc;
use std::ops::Deref;

type Half<'id, T> = StaticRc<GhostCell<'id, Node<'id, T>>, 1, 2>;
type Whole<'id, T> = StaticRc<GhostCell<'id, Node<'id, T>>, 2, 2>;

struct Node<'id, T> {
    /// Half of the neighboring node toward the front; `None` at the front
    /// end.
    toward_front: Option<Half<'id, T>>,
    /// Half of the neighboring node toward the back; `None` at the back
    /// end.
    toward_back: Option<Half<'id, T>>,
    element: T,
}

impl<'id, T> Node<'id, T> {
    fn new(element: T) -> Self {
        Self {
            toward_front: None,
            toward_back: None,
            element,
        }
    }
}

pub struct TokenList<'id, T> {
    front: Option<Half<'id, T>>,
    back: Option<Half<'id, T>>,
    len: usize,
}

impl<'id, T> Default for TokenList<'id, T> {
    fn default() -> Self {
        Self {
            front: None,
            back: None,
            len: 0,
        }
    }
}

impl<'id, T> TokenList<'id, T> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn is_empty(&self) -> bool {
        self.front.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn push_back(&mut self, element: T, token: &mut GhostToken<'id>) {
        let (one, two) = Whole::split(Whole::new(GhostCell::new(Node::new(element))));
        match self.back.take() {
            Some(old_back) => {
                // The old back node takes one half of the newcomer; the
                // newcomer takes the half the list just gave up.
                old_back.deref().borrow_mut(token).toward_back = Some(one);
                two.deref().borrow_mut(token).toward_front = Some(old_back);
                self.back = Some(two);
            }
            None => {
                self.front = Some(one);
                self.back = Some(two);
            }
        }
        self.len += 1;
    }

    pub fn push_front(&mut self, element: T, token: &mut GhostToken<'id>) {
        let (one, two) = Whole::split(Whole::new(GhostCell::new(Node::new(element))));
        match self.front.take() {
            Some(old_front) => {
                old_front.deref().borrow_mut(token).toward_front = Some(one);
                two.deref().borrow_mut(token).toward_back = Some(old_front);
                self.front = Some(two);
            }
            None => {
                self.front = Some(one);
                self.back = Some(two);
            }
        }
        self.len += 1;
    }

    pub fn pop_back(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        let back = self.back.take()?;
        let neighbor = back.deref().borrow_mut(token).toward_front.take();
        let other = match neighbor {
            Some(prev) => {
                // The neighbor holds the second half of the back node;
                // trade it for the list's back slot.
                let other = prev.deref().borrow_mut(token).toward_back.take().unwrap();
                self.back = Some(prev);
                other
            }
            None => self.front.take().unwrap(),
        };
        self.len -= 1;
        Some(Whole::into_box(Whole::join(other, back)).into_inner().element)
    }

    pub fn pop_front(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        let front = self.front.take()?;
        let neighbor = front.deref().borrow_mut(token).toward_back.take();
        let other = match neighbor {
            Some(next) => {
                let other = next.deref().borrow_mut(token).toward_front.take().unwrap();
                self.front = Some(next);
                other
            }
            None => self.back.take().unwrap(),
        };
        self.len -= 1;
        Some(Whole::into_box(Whole::join(other, front)).into_inner().element)
    }

    pub fn clear(&mut self, token: &mut GhostToken<'id>) {
        while self.pop_front(token).is_some() {}
    }
}

#[cfg(test)]
mod tests {
    use crate::experiments::TokenList;
    use ghost_cell::GhostToken;

    #[test]
    fn token_list_push_pop() {
        GhostToken::new(|mut token| {
            let mut list = TokenList::new();
            assert!(list.is_empty());

            list.push_back(1, &mut token);
            list.push_front(2, &mut token);
            list.push_back(3, &mut token);
            assert_eq!(list.len(), 3);

            // The list is now [2, 1, 3].
            assert_eq!(list.pop_front(&mut token), Some(2));
            assert_eq!(list.pop_back(&mut token), Some(3));
            assert_eq!(list.pop_back(&mut token), Some(1));
            assert_eq!(list.pop_back(&mut token), None);
            assert_eq!(list.pop_front(&mut token), None);
            assert!(list.is_empty());
            assert_eq!(list.len(), 0);
        })
    }

    #[test]
    fn token_list_front_and_back_agree() {
        GhostToken::new(|mut token| {
            let mut list = TokenList::new();
            for i in 0..5 {
                list.push_back(i, &mut token);
            }
            for i in 0..5 {
                assert_eq!(list.pop_front(&mut token), Some(i));
            }
            assert!(list.is_empty());

            for i in 0..5 {
                list.push_front(i, &mut token);
            }
            for i in 0..5 {
                assert_eq!(list.pop_back(&mut token), Some(i));
            }
            assert!(list.is_empty());
        })
    }

    #[test]
    fn token_list_clear() {
        GhostToken::new(|mut token| {
            let mut list = TokenList::new();
            for i in 0..10 {
                list.push_back(i, &mut token);
            }
            assert_eq!(list.len(), 10);
            list.clear(&mut token);
            assert!(list.is_empty());
            assert_eq!(list.len(), 0);
        })
    }
}
