// Chart order and drag session state
use crate::domain::chart::CHART_COUNT;
use crate::domain::error::DragError;

/// Which chart renders in which visual slot: `order[slot] = chart index`.
/// Always a permutation of `0..CHART_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartOrder([usize; CHART_COUNT]);

impl Default for ChartOrder {
    fn default() -> Self {
        Self::identity()
    }
}

impl ChartOrder {
    pub fn identity() -> Self {
        let mut order = [0; CHART_COUNT];
        for (slot, entry) in order.iter_mut().enumerate() {
            *entry = slot;
        }
        Self(order)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn check_slot(slot: usize) -> Result<usize, DragError> {
        if slot < CHART_COUNT {
            Ok(slot)
        } else {
            Err(DragError::SlotOutOfRange {
                slot,
                len: CHART_COUNT,
            })
        }
    }

    /// Remove the entry at `from` and reinsert it at `to`; the others shift
    /// to close the gap.
    pub fn move_entry(&mut self, from: usize, to: usize) -> Result<(), DragError> {
        let from = Self::check_slot(from)?;
        let to = Self::check_slot(to)?;
        if from < to {
            self.0[from..=to].rotate_left(1);
        } else if to < from {
            self.0[to..=from].rotate_right(1);
        }
        Ok(())
    }

    pub fn is_permutation(&self) -> bool {
        let mut seen = [false; CHART_COUNT];
        for &chart in &self.0 {
            match seen.get_mut(chart) {
                Some(flag) if !*flag => *flag = true,
                _ => return false,
            }
        }
        true
    }
}

/// In-progress reorder gesture. Both indices are `None` while idle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragSession {
    pub dragged_index: Option<usize>,
    pub drop_index: Option<usize>,
}

impl DragSession {
    pub fn is_active(&self) -> bool {
        self.dragged_index.is_some()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
