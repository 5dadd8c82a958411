mod builder;
mod types;

pub use builder::SheetBuilder;
pub use types::{Frame, SpriteSheet};
