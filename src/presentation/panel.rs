// Reorderable chart panel - chart order plus drag gesture handling
use crate::domain::error::DragError;
use crate::domain::order::{ChartOrder, DragSession};

/// The four gesture operations a drop zone understands, independent of
/// whatever input technology produces them.
pub trait DragTarget {
    fn begin_drag(&mut self, slot: usize) -> Result<(), DragError>;

    /// Returns whether a drop here is allowed. Any slot accepts a drop while
    /// a drag is in progress.
    fn hover(&mut self, slot: usize) -> Result<bool, DragError>;

    /// Returns whether the order changed.
    fn drop_dragged(&mut self) -> bool;

    fn end_drag(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEvent {
    Start(usize),
    Over(usize),
    Drop,
    End,
}

impl DragEvent {
    pub fn apply<T: DragTarget + ?Sized>(self, target: &mut T) -> Result<(), DragError> {
        match self {
            DragEvent::Start(slot) => target.begin_drag(slot),
            DragEvent::Over(slot) => target.hover(slot).map(|_| ()),
            DragEvent::Drop => {
                target.drop_dragged();
                Ok(())
            }
            DragEvent::End => {
                target.end_drag();
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ChartPanel {
    order: ChartOrder,
    drag: DragSession,
}

impl ChartPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order(&self) -> &ChartOrder {
        &self.order
    }

    pub fn drag_session(&self) -> &DragSession {
        &self.drag
    }
}

impl DragTarget for ChartPanel {
    fn begin_drag(&mut self, slot: usize) -> Result<(), DragError> {
        let slot = ChartOrder::check_slot(slot)?;
        if self.drag.is_active() {
            tracing::debug!(session = ?self.drag, "replacing unfinished drag session");
        }
        self.drag = DragSession {
            dragged_index: Some(slot),
            drop_index: None,
        };
        Ok(())
    }

    fn hover(&mut self, slot: usize) -> Result<bool, DragError> {
        let slot = ChartOrder::check_slot(slot)?;
        if !self.drag.is_active() {
            return Ok(false);
        }
        self.drag.drop_index = Some(slot);
        Ok(true)
    }

    fn drop_dragged(&mut self) -> bool {
        let session = self.drag;
        self.drag.clear();

        let (Some(from), Some(to)) = (session.dragged_index, session.drop_index) else {
            return false;
        };
        if from == to || self.order.move_entry(from, to).is_err() {
            return false;
        }
        tracing::debug!(from, to, order = ?self.order.as_slice(), "charts reordered");
        true
    }

    fn end_drag(&mut self) {
        self.drag.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(panel: &mut ChartPanel, from: usize, to: usize) -> bool {
        panel.begin_drag(from).unwrap();
        assert!(panel.hover(to).unwrap());
        panel.drop_dragged()
    }

    #[test]
    fn test_drop_moves_first_to_last() {
        let mut panel = ChartPanel::new();
        assert!(drag(&mut panel, 0, 3));
        assert_eq!(panel.order().as_slice(), &[1, 2, 3, 0]);
        assert!(!panel.drag_session().is_active());
    }

    #[test]
    fn test_drop_on_same_slot_keeps_order() {
        let mut panel = ChartPanel::new();
        assert!(!drag(&mut panel, 2, 2));
        assert_eq!(panel.order(), &ChartOrder::identity());
    }

    #[test]
    fn test_end_drag_without_drop_cancels() {
        let mut panel = ChartPanel::new();
        panel.begin_drag(1).unwrap();
        panel.hover(3).unwrap();
        panel.end_drag();

        assert_eq!(panel.drag_session(), &DragSession::default());
        assert!(!panel.drop_dragged());
        assert_eq!(panel.order(), &ChartOrder::identity());
    }

    #[test]
    fn test_hover_without_session_is_rejected() {
        let mut panel = ChartPanel::new();
        assert!(!panel.hover(2).unwrap());
        assert_eq!(panel.drag_session().drop_index, None);
    }

    #[test]
    fn test_drop_without_hover_only_clears() {
        let mut panel = ChartPanel::new();
        panel.begin_drag(2).unwrap();
        assert!(!panel.drop_dragged());
        assert!(!panel.drag_session().is_active());
        assert_eq!(panel.order(), &ChartOrder::identity());
    }

    #[test]
    fn test_out_of_range_slot_changes_nothing() {
        let mut panel = ChartPanel::new();
        assert_eq!(
            panel.begin_drag(7),
            Err(DragError::SlotOutOfRange { slot: 7, len: 4 })
        );
        assert!(!panel.drag_session().is_active());

        panel.begin_drag(0).unwrap();
        assert!(panel.hover(4).is_err());
        assert_eq!(panel.drag_session().drop_index, None);
    }

    #[test]
    fn test_events_drive_the_panel() {
        let mut panel = ChartPanel::new();
        for event in [DragEvent::Start(3), DragEvent::Over(1), DragEvent::Drop, DragEvent::End] {
            event.apply(&mut panel).unwrap();
        }
        assert_eq!(panel.order().as_slice(), &[0, 3, 1, 2]);

        // the slot is re-resolved against the new order on the next gesture
        for event in [DragEvent::Start(1), DragEvent::Over(0), DragEvent::Drop] {
            event.apply(&mut panel).unwrap();
        }
        assert_eq!(panel.order().as_slice(), &[3, 0, 1, 2]);
        assert!(panel.order().is_permutation());
    }
}
