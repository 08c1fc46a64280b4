use std::cmp::Ordering;

use crate::timing::Seconds;

/// Sort key for a ranked value: unrecorded, zero and NaN values sort last.
pub fn sort_key(value: Option<Seconds>) -> Seconds {
    match value {
        Some(v) if v != 0.0 && !v.is_nan() => v,
        _ => f64::INFINITY,
    }
}

/// Indices of `items` in ascending key order. Ties keep their input order.
pub fn rank<T, F>(items: &[T], key: F) -> Vec<usize>
where
    F: Fn(&T) -> Option<Seconds>,
{
    let keys: Vec<Seconds> = items.iter().map(|item| sort_key(key(item))).collect();
    let mut order: Vec<usize> = (0..items.len()).collect();
    // sort_by is stable
    order.sort_by(|&a, &b| keys[a].partial_cmp(&keys[b]).unwrap_or(Ordering::Equal));
    order
}

/// One ranking of a wave: each member's 1-based place and the leading value.
///
/// Positions are keyed by the member's index in the wave, so athletes that share
/// (or lack) a race identifier still get distinct places.
#[derive(Debug, Clone)]
pub struct RankedOrder {
    positions: Vec<usize>,
    best: Seconds,
}

impl RankedOrder {
    pub fn new<T, F>(items: &[T], key: F) -> Self
    where
        F: Fn(&T) -> Option<Seconds>,
    {
        let order = rank(items, &key);
        let best = Self::best_of(items, &order, &key);

        Self {
            positions: Self::build_positions(&order),
            best,
        }
    }

    /// 1-based position of the member at `index` in the ranked items.
    pub fn position_of(&self, index: usize) -> Option<usize> {
        self.positions.get(index).copied()
    }

    /// Key value of the rank-1 entry, or 0 when there is none or it is unrecorded.
    pub fn best_value(&self) -> Seconds {
        self.best
    }

    fn build_positions(order: &[usize]) -> Vec<usize> {
        let mut positions = vec![0; order.len()];
        for (position, &index) in order.iter().enumerate() {
            positions[index] = position + 1;
        }
        positions
    }

    fn best_of<T, F>(items: &[T], order: &[usize], key: &F) -> Seconds
    where
        F: Fn(&T) -> Option<Seconds>,
    {
        order
            .first()
            .and_then(|&index| key(&items[index]))
            .filter(|v| *v != 0.0 && !v.is_nan())
            .unwrap_or(0.0)
    }
}
