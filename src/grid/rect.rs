use serde::Serialize;

/// Pixel region of one grid cell on the sheet canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    #[serde(rename = "w")]
    pub width: u32,
    #[serde(rename = "h")]
    pub height: u32,
}

impl Rect {
    pub fn square(x: u32, y: u32, size: u32) -> Self {
        Self {
            x,
            y,
            width: size,
            height: size,
        }
    }

    /// First column past the cell
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// First row past the cell
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Canvas offset in the form `imageops::replace` takes
    pub fn origin(&self) -> (i64, i64) {
        (i64::from(self.x), i64::from(self.y))
    }
}
