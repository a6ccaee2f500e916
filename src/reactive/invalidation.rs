use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use bitflags::bitflags;

bitflags! {
    /// Flags indicating what aspects of rendering need to be updated
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ChangeFlags: u8 {
        /// Widget needs layout recalculation (size/position may change)
        const NEEDS_LAYOUT = 0b01;
        /// Widget needs repainting (visual appearance changed)
        const NEEDS_PAINT  = 0b10;
    }
}

/// Unique identifier for a widget
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct WidgetId(u64);

static NEXT_WIDGET_ID: AtomicU64 = AtomicU64::new(1);

impl WidgetId {
    /// Generate a new unique widget ID
    pub fn next() -> Self {
        WidgetId(NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Request that this widget be re-laid out (and repainted)
    pub fn request_layout(&self) {
        self.invalidate(ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT);
    }

    /// Request that this widget be repainted (without layout)
    pub fn request_paint(&self) {
        self.invalidate(ChangeFlags::NEEDS_PAINT);
    }

    fn invalidate(&self, flags: ChangeFlags) {
        PENDING_FRAMES.with(|pending| {
            *pending
                .borrow_mut()
                .entry(*self)
                .or_insert(ChangeFlags::empty()) |= flags;
        });
    }
}

// All widget callbacks run on one UI thread, so the pending requests live
// there too. Entries are keyed by the widget that raised them, so each host
// only consumes the requests of its own root.
thread_local! {
    static PENDING_FRAMES: RefCell<HashMap<WidgetId, ChangeFlags>> =
        RefCell::new(HashMap::new());
}

/// True when any widget on this thread is waiting for a frame.
pub fn has_pending_frames() -> bool {
    PENDING_FRAMES.with(|pending| !pending.borrow().is_empty())
}

/// Changes requested by `id` that no frame has consumed yet.
pub fn pending_changes(id: WidgetId) -> ChangeFlags {
    PENDING_FRAMES.with(|pending| {
        pending
            .borrow()
            .get(&id)
            .copied()
            .unwrap_or(ChangeFlags::empty())
    })
}

/// Check if `id` requested a frame and clear only that request.
pub fn take_frame_request(id: WidgetId) -> bool {
    PENDING_FRAMES.with(|pending| pending.borrow_mut().remove(&id).is_some())
}

/// Wipe all pending invalidation state for the current thread.
pub fn reset_invalidation() {
    PENDING_FRAMES.with(|pending| pending.borrow_mut().clear());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_ids_are_unique() {
        let a = WidgetId::next();
        let b = WidgetId::next();
        assert_ne!(a, b);
    }

    #[test]
    fn test_request_paint_marks_widget_and_requests_frame() {
        let id = WidgetId::next();
        id.request_paint();

        assert_eq!(pending_changes(id), ChangeFlags::NEEDS_PAINT);
        assert!(has_pending_frames());
        assert!(take_frame_request(id));
        assert!(!take_frame_request(id));
        assert_eq!(pending_changes(id), ChangeFlags::empty());
    }

    #[test]
    fn test_request_layout_implies_paint() {
        let id = WidgetId::next();
        id.request_layout();
        assert_eq!(
            pending_changes(id),
            ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT
        );
    }

    #[test]
    fn test_taking_one_request_keeps_the_others() {
        let a = WidgetId::next();
        let b = WidgetId::next();
        a.request_paint();
        b.request_layout();

        assert!(take_frame_request(a));
        assert!(!take_frame_request(a));
        assert!(pending_changes(b).contains(ChangeFlags::NEEDS_LAYOUT));
        assert!(take_frame_request(b));
    }

    #[test]
    fn test_reset_clears_everything() {
        let id = WidgetId::next();
        id.request_layout();
        reset_invalidation();
        assert!(!has_pending_frames());
        assert!(!take_frame_request(id));
    }
}
