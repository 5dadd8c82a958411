use image::{RgbaImage, imageops, imageops::FilterType};

/// Scale `img` until it covers a `size x size` square, then crop the overflow
/// around the center.
///
/// The shorter side ends up exactly `size`; the longer side keeps the source
/// aspect ratio (rounded to the nearest pixel) before the crop. When the
/// overflow is odd the extra pixel is cut from the leading edge.
pub fn cover_fit(img: &RgbaImage, size: u32, filter: FilterType) -> RgbaImage {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return RgbaImage::new(size, size);
    }

    let (scaled_w, scaled_h) = cover_dimensions(w, h, size);
    let scaled = if (scaled_w, scaled_h) == (w, h) {
        img.clone()
    } else {
        imageops::resize(img, scaled_w, scaled_h, filter)
    };

    let x = (scaled_w - size).div_ceil(2);
    let y = (scaled_h - size).div_ceil(2);
    imageops::crop_imm(&scaled, x, y, size, size).to_image()
}

/// Dimensions of a `w x h` image scaled so its shorter side equals `size`
pub fn cover_dimensions(w: u32, h: u32, size: u32) -> (u32, u32) {
    let scale_long = |long: u32, short: u32| -> u32 {
        let long = u64::from(long);
        let short = u64::from(short);
        let scaled = (long * u64::from(size) + short / 2) / short;
        u32::try_from(scaled).unwrap_or(u32::MAX).max(size)
    };

    if w >= h {
        (scale_long(w, h), size)
    } else {
        (size, scale_long(h, w))
    }
}
