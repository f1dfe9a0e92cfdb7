use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ptr::NonNull;

use crate::error::Error;
use crate::linear::cursor::{Cursor, CursorMut};
use crate::linear::{LinearList, Node};

impl<T: PartialEq> PartialEq for LinearList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for LinearList<T> {}

impl<T: PartialOrd> PartialOrd for LinearList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for LinearList<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Hash> Hash for LinearList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

// comparator plumbing
impl<T> LinearList<T> {
    /// Order two elements under the active ordering: the installed
    /// comparator if any, the natural one otherwise.
    fn order(&self, a: &T, b: &T) -> Ordering
    where
        T: Ord,
    {
        match &self.compare {
            Some(compare) => compare(a, b),
            None => a.cmp(b),
        }
    }

    /// Test two elements for a match: comparator equivalence if one is
    /// installed, plain equality otherwise.
    fn matches(&self, a: &T, b: &T) -> bool
    where
        T: PartialEq,
    {
        match &self.compare {
            Some(compare) => compare(a, b) == Ordering::Equal,
            None => a == b,
        }
    }
}

impl<T: PartialEq> LinearList<T> {
    /// Search the list for `target` and return a cursor at the first
    /// matching node, or `None` if no element matches.
    ///
    /// The scan runs from both ends at once (see
    /// [`sorted_insert`](LinearList::sorted_insert) for the walk shape),
    /// so the expected number of visited nodes is half of a one-way scan.
    /// Within each round the front side is tested first, so among several
    /// matches the one closest to the front wins its round.
    ///
    /// A match is decided by the installed [`Comparator`] returning
    /// [`Ordering::Equal`] if there is one, and by `==` otherwise.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use doubly::LinearList;
    /// use std::iter::FromIterator;
    ///
    /// let list = LinearList::from_iter([1, 1, 3, 4, 5]);
    ///
    /// // Ties go to the front: this is the head node.
    /// let found = list.find(&1).unwrap();
    /// assert_eq!(found, list.cursor_front());
    ///
    /// assert!(list.find(&9).is_none());
    /// ```
    ///
    /// [`Comparator`]: crate::linear::Comparator
    /// [`Ordering::Equal`]: std::cmp::Ordering::Equal
    pub fn find(&self, target: &T) -> Option<Cursor<'_, T>> {
        let node = self.scan_for(target)?;
        Some(Cursor::new(self, Some(node)))
    }

    /// Like [`find`](LinearList::find), but returns an editing cursor, so
    /// the match can be rewritten or removed in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use doubly::LinearList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = LinearList::from_iter([1, 2, 3]);
    /// list.find_mut(&2).unwrap().remove().unwrap();
    /// assert_eq!(Vec::from_iter(list), vec![1, 3]);
    /// ```
    pub fn find_mut(&mut self, target: &T) -> Option<CursorMut<'_, T>> {
        let node = self.scan_for(target)?;
        Some(CursorMut::new(self, Some(node)))
    }

    /// Returns `true` if the list contains an element matching `target`.
    ///
    /// # Examples
    ///
    /// ```
    /// use doubly::LinearList;
    /// use std::iter::FromIterator;
    ///
    /// let list = LinearList::from_iter([0, 1, 2]);
    /// assert!(list.contains(&0));
    /// assert!(!list.contains(&10));
    /// ```
    pub fn contains(&self, target: &T) -> bool {
        self.scan_for(target).is_some()
    }

    /// The double-ended scan behind [`find`](LinearList::find): a front
    /// walker from the head and a rear walker from the tail move in
    /// lockstep for `(len + 1) / 2` rounds, which visits every node from
    /// one side or the other without either walker leaving the list.
    fn scan_for(&self, target: &T) -> Option<NonNull<Node<T>>> {
        let mut front = self.head_node()?;
        let mut rear = self.tail_node()?;
        for _ in 0..(self.len() + 1) / 2 {
            // SAFETY: both walkers stay on live nodes of this list for the
            // whole scan.
            unsafe {
                if self.matches(&front.as_ref().element, target) {
                    return Some(front);
                }
                if self.matches(&rear.as_ref().element, target) {
                    return Some(rear);
                }
                front = front.as_ref().next?;
                rear = rear.as_ref().prev?;
            }
        }
        None
    }
}

impl<T: Ord> LinearList<T> {
    /// Insert an element so that the list stays in ascending order under
    /// the active ordering (the installed [`Comparator`] if any, the
    /// natural one otherwise).
    ///
    /// On an empty list this is first-element initialization and switches
    /// the list into sort-keeping mode; that is the only way the mode
    /// turns on. On a non-empty plain list the call is rejected with
    /// [`Error::ModeMismatch`].
    ///
    /// The insertion point is located by the same double-ended walk as
    /// [`find`](LinearList::find): the first front-side node not below the
    /// new element takes it as its new predecessor (so equal elements
    /// found from the front keep the newcomer in front of them), and the
    /// first rear-side node below it takes it as its new successor (so
    /// equal elements found from the back keep the newcomer behind them).
    /// If neither side fires, the walkers have crossed and the slot is
    /// exactly where they met.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use doubly::LinearList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = LinearList::new();
    /// for value in [3, 1, 4, 1, 5].iter() {
    ///     list.sorted_insert(*value).unwrap();
    /// }
    /// assert_eq!(Vec::from_iter(list), vec![1, 1, 3, 4, 5]);
    /// ```
    ///
    /// ```
    /// use doubly::{Error, LinearList};
    ///
    /// let mut list = LinearList::with_first(2);
    /// assert_eq!(list.sorted_insert(1), Err(Error::ModeMismatch));
    /// ```
    ///
    /// [`Comparator`]: crate::linear::Comparator
    pub fn sorted_insert(&mut self, element: T) -> Result<(), Error> {
        if self.is_empty() {
            self.init_first(element, true);
            return Ok(());
        }
        if !self.is_sorted() {
            return Err(Error::ModeMismatch);
        }
        let mut front = self.head_node().ok_or(Error::Corrupted)?;
        let mut rear = self.tail_node().ok_or(Error::Corrupted)?;
        for _ in 0..(self.len() + 1) / 2 {
            // SAFETY: both walkers stay on live nodes of this list, and
            // every splice happens into a real gap next to one of them.
            unsafe {
                if self.order(&front.as_ref().element, &element) != Ordering::Less {
                    let prev = front.as_ref().prev;
                    self.attach_node(prev, Some(front), Node::new_detached(element));
                    return Ok(());
                }
                if self.order(&rear.as_ref().element, &element) == Ordering::Less {
                    let next = rear.as_ref().next;
                    self.attach_node(Some(rear), next, Node::new_detached(element));
                    return Ok(());
                }
                front = match front.as_ref().next {
                    Some(next) => next,
                    None => return Err(Error::Corrupted),
                };
                rear = match rear.as_ref().prev {
                    Some(prev) => prev,
                    None => return Err(Error::Corrupted),
                };
            }
        }
        // Neither side fired: every node the front walker saw is below the
        // element and every node the rear walker saw is not, so the slot
        // is the gap where the walkers met — right before the front
        // walker's final node. (Possible only for even lengths; odd
        // lengths fire on the middle node from one side or the other.)
        // SAFETY: the front walker is still on a live node of this list.
        unsafe {
            let prev = front.as_ref().prev;
            self.attach_node(prev, Some(front), Node::new_detached(element));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::linear::LinearList;
    use std::cmp::Ordering;
    use std::iter::FromIterator;

    fn is_non_decreasing(list: &LinearList<i32>) -> bool {
        let values: Vec<i32> = list.iter().copied().collect();
        values.windows(2).all(|pair| pair[0] <= pair[1])
    }

    #[test]
    fn find_prefers_the_front_on_ties() {
        let list = LinearList::from_iter([1, 1, 3, 4, 5]);
        let found = list.find(&1).unwrap();
        assert_eq!(found, list.cursor_front());
        assert_eq!(found.value(), Some(&1));
    }

    #[test]
    fn find_reaches_both_halves() {
        let list = LinearList::from_iter([1, 2, 3, 4, 5]);
        assert_eq!(list.find(&5).unwrap(), list.cursor_back());
        assert_eq!(list.find(&1).unwrap(), list.cursor_front());

        // The middle node is only reached in the final round.
        let mut expected = list.cursor_front();
        expected.move_next();
        expected.move_next();
        assert_eq!(list.find(&3).unwrap(), expected);

        assert!(list.find(&6).is_none());
        assert!(list.find(&0).is_none());
    }

    #[test]
    fn find_on_empty_and_singleton() {
        let empty = LinearList::<i32>::new();
        assert!(empty.find(&1).is_none());

        let one = LinearList::with_first(7);
        assert_eq!(one.find(&7).unwrap(), one.cursor_front());
        assert!(one.find(&8).is_none());
    }

    #[test]
    fn find_uses_the_comparator_for_equivalence() {
        // Compare by absolute value.
        let mut list = LinearList::with_comparator(|a: &i32, b: &i32| a.abs().cmp(&b.abs()));
        list.push_back(-3).unwrap();
        list.push_back(5).unwrap();

        let found = list.find(&3).unwrap();
        assert_eq!(found.value(), Some(&-3));
        assert!(list.contains(&-5));
        assert!(!list.contains(&4));
    }

    #[test]
    fn find_mut_can_remove_the_match() {
        // The rear walker tests the tail in the first round, so between the
        // two 2s the one at the back is found first.
        let mut list = LinearList::from_iter([1, 2, 3, 2]);
        assert_eq!(list.find_mut(&2).unwrap().remove(), Ok(2));
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2, 3]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn sorted_insert_keeps_ascending_order() {
        let mut list = LinearList::new();
        for value in [3, 1, 4, 1, 5].iter() {
            list.sorted_insert(*value).unwrap();
            assert!(is_non_decreasing(&list));
        }
        assert_eq!(Vec::from_iter(list), vec![1, 1, 3, 4, 5]);
    }

    #[test]
    fn sorted_insert_fills_the_middle_gap() {
        // Even length, slot exactly between the two walkers' half ranges.
        let mut list = LinearList::new();
        list.sorted_insert(1).unwrap();
        list.sorted_insert(3).unwrap();
        list.sorted_insert(2).unwrap();
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2, 3]);

        let mut list = LinearList::new();
        for value in [1, 2, 4, 5].iter() {
            list.sorted_insert(*value).unwrap();
        }
        list.sorted_insert(3).unwrap();
        assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorted_insert_handles_extremes_and_duplicates() {
        let mut list = LinearList::new();
        for value in [5, 5, 5, 0, 10, 5].iter() {
            list.sorted_insert(*value).unwrap();
        }
        assert_eq!(Vec::from_iter(list), vec![0, 5, 5, 5, 5, 10]);
    }

    #[test]
    fn sorted_insert_orders_permuted_inputs() {
        let permutations: &[&[i32]] = &[
            &[1, 2, 3, 4, 5, 6],
            &[6, 5, 4, 3, 2, 1],
            &[4, 1, 6, 2, 5, 3],
            &[2, 6, 1, 5, 3, 4],
            &[3, 3, 1, 6, 1, 4],
        ];
        for input in permutations {
            let mut list = LinearList::new();
            for value in input.iter() {
                list.sorted_insert(*value).unwrap();
            }
            let mut expected: Vec<i32> = input.to_vec();
            expected.sort();
            assert_eq!(Vec::from_iter(list), expected, "input {:?}", input);
        }
    }

    #[test]
    fn sorted_insert_rejects_plain_lists() {
        let mut list = LinearList::with_first(2);
        assert_eq!(list.sorted_insert(1), Err(Error::ModeMismatch));
        assert_eq!(list.len(), 1);

        // Draining re-opens the mode decision.
        list.pop_back().unwrap();
        list.sorted_insert(1).unwrap();
        assert!(list.is_sorted());
    }

    #[test]
    fn sorted_insert_uses_the_comparator() {
        let mut list = LinearList::with_comparator(|a: &i32, b: &i32| b.cmp(a));
        for value in [3, 1, 4, 1, 5].iter() {
            list.sorted_insert(*value).unwrap();
        }
        assert_eq!(Vec::from_iter(list), vec![5, 4, 3, 1, 1]);
    }

    #[test]
    fn comparator_survives_draining() {
        let mut list = LinearList::with_comparator(|a: &i32, b: &i32| b.cmp(a));
        list.sorted_insert(1).unwrap();
        list.pop_front().unwrap();

        list.sorted_insert(2).unwrap();
        list.sorted_insert(3).unwrap();
        assert_eq!(Vec::from_iter(list), vec![3, 2]);
    }

    #[test]
    fn comparator_breaks_ties_stably() {
        // Order pairs by their first component only; the second tells
        // insertion order apart.
        let mut list: LinearList<(i32, u32)> =
            LinearList::with_comparator(|a: &(i32, u32), b| a.0.cmp(&b.0));
        list.sorted_insert((1, 0)).unwrap();
        list.sorted_insert((1, 1)).unwrap();
        // The newcomer meets (1, 0) from the front and goes before it.
        assert_eq!(Vec::from_iter(list), vec![(1, 1), (1, 0)]);
    }

    #[test]
    fn list_comparisons_follow_element_sequences() {
        let a = LinearList::from_iter([1, 2, 3]);
        let b = LinearList::from_iter([1, 2, 3]);
        let c = LinearList::from_iter([1, 2, 4]);
        let d = LinearList::from_iter([1, 2]);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
        assert!(a < c);
        assert!(d < a);
        assert_eq!(a.cmp(&b), Ordering::Equal);
    }
}
