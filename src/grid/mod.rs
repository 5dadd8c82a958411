mod rect;
mod spec;

pub use rect::Rect;
pub use spec::{GridSpec, MAX_CANVAS_PIXELS, Placement};
