pub mod invalidation;

pub use invalidation::{
    has_pending_frames, pending_changes, reset_invalidation, take_frame_request, ChangeFlags,
    WidgetId,
};
