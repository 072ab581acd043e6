//! Ordering rules for the hero-slide collection.
//!
//! Active slides form a strictly ordered, gap-free sequence: their
//! `sort_order` values are exactly `{0, 1, .., k-1}` between completed
//! operations. This module contains the pure planning half of that
//! contract -- clamping a requested position, computing which siblings
//! an insert/reposition/remove must shift and by how much, and checking
//! contiguity. The repository layer executes a plan as a single
//! database transaction.

/// Base of the ordering sequence. Active slides occupy `{BASE, .., BASE+k-1}`.
pub const ORDER_BASE: i32 = 0;

/// A half-open adjustment to apply to sibling slides: every active slide
/// whose order lies in `[lo, hi)` (excluding the moved slide itself) is
/// shifted by `delta`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shift {
    pub lo: i32,
    /// Exclusive upper bound; `i32::MAX` means unbounded.
    pub hi: i32,
    pub delta: i32,
}

impl Shift {
    /// Whether `order` falls inside this shift's range.
    pub fn contains(&self, order: i32) -> bool {
        order >= self.lo && order < self.hi
    }
}

/// Clamp a requested insert position to the valid range `[BASE, BASE + k]`
/// for a collection of `active_count` active slides. Appending at the end
/// (`k`) is allowed; negative requests snap to the base.
pub fn clamp_insert_order(desired: i32, active_count: i64) -> i32 {
    let end = ORDER_BASE + i32::try_from(active_count).unwrap_or(i32::MAX - ORDER_BASE);
    desired.clamp(ORDER_BASE, end)
}

/// Clamp a reposition target for an existing member of the sequence. With
/// `active_count` actives the valid positions are `[BASE, BASE + k - 1]`.
pub fn clamp_reposition_order(desired: i32, active_count: i64) -> i32 {
    let last = ORDER_BASE + i32::try_from(active_count.max(1) - 1).unwrap_or(i32::MAX - ORDER_BASE);
    desired.clamp(ORDER_BASE, last)
}

/// Plan an insert at `order`: every active slide at `order` or later moves
/// up by one to open the slot.
pub fn insert_shift(order: i32) -> Shift {
    Shift {
        lo: order,
        hi: i32::MAX,
        delta: 1,
    }
}

/// Plan a reposition from `old_order` to `new_order`.
///
/// Moving towards the front shifts the displaced range `[new, old)` up by
/// one; moving towards the back shifts `(old, new]` down by one. A move to
/// the same position needs no sibling adjustment.
pub fn reposition_shift(old_order: i32, new_order: i32) -> Option<Shift> {
    use std::cmp::Ordering;
    match new_order.cmp(&old_order) {
        Ordering::Less => Some(Shift {
            lo: new_order,
            hi: old_order,
            delta: 1,
        }),
        Ordering::Greater => Some(Shift {
            lo: old_order + 1,
            hi: new_order + 1,
            delta: -1,
        }),
        Ordering::Equal => None,
    }
}

/// Plan a removal of the slide at `order`: everything after it moves down
/// by one to close the gap.
pub fn removal_shift(order: i32) -> Shift {
    Shift {
        lo: order + 1,
        hi: i32::MAX,
        delta: -1,
    }
}

/// Check that a set of order values is exactly `{BASE, .., BASE+k-1}`
/// with no duplicates. `orders` need not be sorted.
pub fn is_contiguous(orders: &[i32]) -> bool {
    let mut sorted = orders.to_vec();
    sorted.sort_unstable();
    sorted
        .iter()
        .enumerate()
        .all(|(i, &o)| o == ORDER_BASE + i as i32)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory model of the active collection: `(name, order)` pairs.
    /// Applies plans the same way the repository's SQL does, so the
    /// invariant properties can be checked without a database.
    struct Model {
        slides: Vec<(String, i32)>,
    }

    impl Model {
        fn new(names: &[&str]) -> Self {
            Self {
                slides: names
                    .iter()
                    .enumerate()
                    .map(|(i, n)| (n.to_string(), ORDER_BASE + i as i32))
                    .collect(),
            }
        }

        fn insert(&mut self, name: &str, desired: i32) {
            let order = clamp_insert_order(desired, self.slides.len() as i64);
            let shift = insert_shift(order);
            for (_, o) in &mut self.slides {
                if shift.contains(*o) {
                    *o += shift.delta;
                }
            }
            self.slides.push((name.to_string(), order));
        }

        fn reposition(&mut self, name: &str, new_order: i32) {
            let old_order = self.order_of(name);
            if let Some(shift) = reposition_shift(old_order, new_order) {
                for (n, o) in &mut self.slides {
                    if n != name && shift.contains(*o) {
                        *o += shift.delta;
                    }
                }
            }
            for (n, o) in &mut self.slides {
                if n == name {
                    *o = new_order;
                }
            }
        }

        fn remove(&mut self, name: &str) {
            let order = self.order_of(name);
            self.slides.retain(|(n, _)| n != name);
            let shift = removal_shift(order);
            for (_, o) in &mut self.slides {
                if shift.contains(*o) {
                    *o += shift.delta;
                }
            }
        }

        fn order_of(&self, name: &str) -> i32 {
            self.slides.iter().find(|(n, _)| n == name).unwrap().1
        }

        fn orders(&self) -> Vec<i32> {
            self.slides.iter().map(|(_, o)| *o).collect()
        }

        fn sequence(&self) -> Vec<String> {
            let mut sorted = self.slides.clone();
            sorted.sort_by_key(|(_, o)| *o);
            sorted.into_iter().map(|(n, _)| n).collect()
        }
    }

    // -- clamp_insert_order --------------------------------------------------

    #[test]
    fn clamps_negative_order_to_base() {
        assert_eq!(clamp_insert_order(-5, 3), ORDER_BASE);
    }

    #[test]
    fn clamps_past_end_to_append_position() {
        assert_eq!(clamp_insert_order(99, 3), 3);
    }

    #[test]
    fn keeps_in_range_order() {
        assert_eq!(clamp_insert_order(1, 3), 1);
    }

    #[test]
    fn empty_collection_only_accepts_base() {
        assert_eq!(clamp_insert_order(7, 0), ORDER_BASE);
    }

    #[test]
    fn reposition_clamps_to_last_slot() {
        assert_eq!(clamp_reposition_order(10, 3), 2);
        assert_eq!(clamp_reposition_order(-1, 3), 0);
        assert_eq!(clamp_reposition_order(1, 3), 1);
    }

    // -- reposition_shift ----------------------------------------------------

    #[test]
    fn move_to_front_shifts_displaced_range_up() {
        let shift = reposition_shift(2, 0).unwrap();
        assert_eq!(shift, Shift { lo: 0, hi: 2, delta: 1 });
    }

    #[test]
    fn move_to_back_shifts_displaced_range_down() {
        let shift = reposition_shift(0, 2).unwrap();
        assert_eq!(shift, Shift { lo: 1, hi: 3, delta: -1 });
    }

    #[test]
    fn move_to_same_position_is_noop() {
        assert!(reposition_shift(1, 1).is_none());
    }

    // -- is_contiguous -------------------------------------------------------

    #[test]
    fn contiguous_sequence_passes() {
        assert!(is_contiguous(&[2, 0, 1]));
    }

    #[test]
    fn empty_sequence_is_contiguous() {
        assert!(is_contiguous(&[]));
    }

    #[test]
    fn gap_fails() {
        assert!(!is_contiguous(&[0, 2, 3]));
    }

    #[test]
    fn duplicate_fails() {
        assert!(!is_contiguous(&[0, 1, 1]));
    }

    // -- invariant scenarios -------------------------------------------------

    #[test]
    fn insert_in_middle_shifts_later_siblings() {
        let mut m = Model::new(&["a", "b", "c"]);
        m.insert("d", 1);

        assert!(is_contiguous(&m.orders()));
        assert_eq!(m.sequence(), vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn insert_at_order_shifts_exactly_count_minus_order_siblings() {
        // k = 4 actives, insert at o = 1: exactly k - o = 3 slides shift.
        let mut m = Model::new(&["a", "b", "c", "d"]);
        let before = m.slides.clone();
        m.insert("x", 1);

        let shifted = before
            .iter()
            .filter(|(n, o)| m.order_of(n) != *o)
            .count();
        assert_eq!(shifted, 3);
    }

    #[test]
    fn reposition_to_front_rotates_displaced_slides() {
        // [A=0, B=1, C=2], move C to 0 -> [C=0, A=1, B=2].
        let mut m = Model::new(&["A", "B", "C"]);
        m.reposition("C", 0);

        assert!(is_contiguous(&m.orders()));
        assert_eq!(m.sequence(), vec!["C", "A", "B"]);
    }

    #[test]
    fn reposition_shifts_exactly_distance_many_siblings() {
        let mut m = Model::new(&["a", "b", "c", "d", "e"]);
        let before = m.slides.clone();
        m.reposition("a", 3);

        // |0 - 3| = 3 siblings move, the target ends exactly at 3.
        let shifted = before
            .iter()
            .filter(|(n, o)| n != "a" && m.order_of(n) != *o)
            .count();
        assert_eq!(shifted, 3);
        assert_eq!(m.order_of("a"), 3);
        assert!(is_contiguous(&m.orders()));
    }

    #[test]
    fn remove_closes_the_gap() {
        let mut m = Model::new(&["a", "b", "c", "d"]);
        m.remove("b");

        assert!(is_contiguous(&m.orders()));
        assert_eq!(m.sequence(), vec!["a", "c", "d"]);
        // No slide retains an order >= the original count.
        assert!(m.orders().iter().all(|&o| o < 3));
    }

    #[test]
    fn insert_then_remove_round_trips() {
        let mut m = Model::new(&["a", "b", "c"]);
        let before: Vec<_> = m.slides.clone();

        m.insert("x", 1);
        m.remove("x");

        let mut after = m.slides.clone();
        after.sort_by(|l, r| l.0.cmp(&r.0));
        let mut expected = before;
        expected.sort_by(|l, r| l.0.cmp(&r.0));
        assert_eq!(after, expected);
    }

    #[test]
    fn interleaved_operations_preserve_contiguity() {
        let mut m = Model::new(&["a", "b", "c"]);
        m.insert("d", 0);
        m.reposition("b", 3);
        m.remove("a");
        m.insert("e", 2);
        m.reposition("e", 0);

        assert!(is_contiguous(&m.orders()));
        assert_eq!(m.orders().len(), 4);
    }
}
