use std::fs;
use std::path::Path;

use image::{Rgba, RgbaImage};
use spritegrid::{AssembleOptions, ResizeFilter, SpriteGridError, UnnumberedPolicy, assemble};

fn write_frame(dir: &Path, name: &str, w: u32, h: u32, shade: u8) {
    RgbaImage::from_pixel(w, h, Rgba([shade, 255 - shade, 0, 255]))
        .save(dir.join(name))
        .unwrap();
}

fn options(input: &Path, output: &Path) -> AssembleOptions {
    AssembleOptions {
        input_dir: input.to_path_buf(),
        output_file: output.to_path_buf(),
        tile_size: 10,
        resize_filter: ResizeFilter::Nearest,
        ..AssembleOptions::default()
    }
}

fn cell_color(sheet: &RgbaImage, index: u32, columns: u32, size: u32) -> Rgba<u8> {
    let x = (index % columns) * size + size / 2;
    let y = (index / columns) * size + size / 2;
    *sheet.get_pixel(x, y)
}

#[test]
fn numeric_order_drives_placement() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("images");
    fs::create_dir(&input).unwrap();
    write_frame(&input, "2.png", 10, 10, 20);
    write_frame(&input, "10.png", 10, 10, 100);
    write_frame(&input, "1.png", 10, 10, 10);

    let output = dir.path().join("sheet.png");
    assemble(&options(&input, &output)).unwrap();

    let sheet = image::open(&output).unwrap().into_rgba8();
    assert_eq!(cell_color(&sheet, 0, 2, 10), Rgba([10, 245, 0, 255]));
    assert_eq!(cell_color(&sheet, 1, 2, 10), Rgba([20, 235, 0, 255]));
    assert_eq!(cell_color(&sheet, 2, 2, 10), Rgba([100, 155, 0, 255]));
}

#[test]
fn geometry_for_five_tiles() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("images");
    fs::create_dir(&input).unwrap();
    for n in 1..=5u8 {
        write_frame(&input, &format!("{}.png", n), 30, 20, n * 10);
    }

    let output = dir.path().join("catsprites.png");
    let summary = assemble(&AssembleOptions {
        tile_size: 100,
        ..options(&input, &output)
    })
    .unwrap();

    assert_eq!((summary.width, summary.height), (200, 300));
    assert_eq!((summary.columns, summary.rows), (2, 3));
    assert_eq!(summary.tiles, 5);
    assert_eq!(summary.output, output);

    let sheet = image::open(&output).unwrap().into_rgba8();
    assert_eq!(sheet.dimensions(), (200, 300));
    // fifth image at top=200, left=0; the cell to its right stays transparent
    assert_eq!(*sheet.get_pixel(50, 250), Rgba([50, 205, 0, 255]));
    assert_eq!(*sheet.get_pixel(150, 250), Rgba([0, 0, 0, 0]));
}

#[test]
fn only_lowercase_png_files_are_tiles() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("images");
    fs::create_dir(&input).unwrap();
    write_frame(&input, "a.png", 10, 10, 1);
    write_frame(&input, "c.PNG", 10, 10, 2);
    RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0, 255]))
        .save_with_format(input.join("b.jpg"), image::ImageFormat::Png)
        .unwrap();

    let output = dir.path().join("sheet.png");
    let summary = assemble(&options(&input, &output)).unwrap();
    assert_eq!(summary.tiles, 1);
    assert_eq!((summary.width, summary.height), (20, 10));
}

#[test]
fn partial_last_row_stays_transparent() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("images");
    fs::create_dir(&input).unwrap();
    for n in 0..7u8 {
        write_frame(&input, &format!("{}.png", n), 12, 12, n + 1);
    }

    let output = dir.path().join("sheet.png");
    assemble(&AssembleOptions {
        columns: 3,
        ..options(&input, &output)
    })
    .unwrap();

    let sheet = image::open(&output).unwrap().into_rgba8();
    assert_eq!(sheet.dimensions(), (30, 30));
    for (x, y, pixel) in sheet.enumerate_pixels() {
        let index = (y / 10) * 3 + x / 10;
        if index < 7 {
            assert_eq!(pixel[3], 255, "pixel ({}, {}) should be covered", x, y);
        } else {
            assert_eq!(*pixel, Rgba([0, 0, 0, 0]), "pixel ({}, {}) should be empty", x, y);
        }
    }
}

#[test]
fn repeated_runs_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("images");
    fs::create_dir(&input).unwrap();
    for n in 0..6u32 {
        let mut img = RgbaImage::new(17 + n * 3, 11 + n);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = Rgba([(x * 9 % 256) as u8, (y * 13 % 256) as u8, (n * 40) as u8, 255]);
        }
        img.save(input.join(format!("{}.png", n))).unwrap();
    }

    let first = dir.path().join("first.png");
    let second = dir.path().join("second.png");
    let base = AssembleOptions {
        resize_filter: ResizeFilter::Lanczos3,
        ..options(&input, &first)
    };
    assemble(&base).unwrap();
    assemble(&AssembleOptions {
        output_file: second.clone(),
        ..base
    })
    .unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn missing_input_directory_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("sheet.png");

    let err = assemble(&options(&dir.path().join("nope"), &output)).unwrap_err();
    assert!(matches!(err, SpriteGridError::DirectoryRead { .. }));
    assert!(!output.exists());
}

#[test]
fn corrupt_tile_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("images");
    fs::create_dir(&input).unwrap();
    write_frame(&input, "1.png", 10, 10, 1);
    fs::write(input.join("2.png"), b"not an image").unwrap();
    write_frame(&input, "3.png", 10, 10, 3);

    let output = dir.path().join("sheet.png");
    let err = assemble(&options(&input, &output)).unwrap_err();
    assert!(matches!(err, SpriteGridError::ImageLoad { ref path, .. } if path.ends_with("2.png")));
    assert!(!output.exists());
}

#[test]
fn too_many_tiles_for_canvas_limit_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("images");
    fs::create_dir(&input).unwrap();
    // one 4096px column: 16 rows reach the pixel limit, 17 exceed it
    for n in 0..17u8 {
        write_frame(&input, &format!("{}.png", n), 1, 1, n);
    }

    let output = dir.path().join("sheet.png");
    let err = assemble(&AssembleOptions {
        columns: 1,
        tile_size: 1 << 12,
        ..options(&input, &output)
    })
    .unwrap_err();
    assert!(matches!(err, SpriteGridError::InvalidConfig(_)));
    assert!(!output.exists());
}

#[test]
fn empty_directory_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("sheet.png");

    let err = assemble(&options(dir.path(), &output)).unwrap_err();
    assert!(matches!(err, SpriteGridError::NoImages(_)));
    assert!(!output.exists());
}

#[test]
fn unnumbered_files_follow_policy() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("images");
    fs::create_dir(&input).unwrap();
    write_frame(&input, "1.png", 10, 10, 1);
    write_frame(&input, "idle.png", 10, 10, 2);

    let output = dir.path().join("sheet.png");
    let last = assemble(&options(&input, &output)).unwrap();
    assert_eq!(last.tiles, 2);

    let skipped = assemble(&AssembleOptions {
        unnumbered: UnnumberedPolicy::Skip,
        ..options(&input, &output)
    })
    .unwrap();
    assert_eq!(skipped.tiles, 1);

    let err = assemble(&AssembleOptions {
        unnumbered: UnnumberedPolicy::Error,
        ..options(&input, &output)
    })
    .unwrap_err();
    assert!(matches!(err, SpriteGridError::InvalidSortKey(_)));
}

#[test]
fn metadata_sidecar_lists_frames() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("images");
    fs::create_dir(&input).unwrap();
    write_frame(&input, "3.png", 10, 10, 3);
    write_frame(&input, "1.png", 10, 10, 1);

    let output = dir.path().join("cats.png");
    let summary = assemble(&AssembleOptions {
        metadata: true,
        ..options(&input, &output)
    })
    .unwrap();

    let json_path = summary.metadata.unwrap();
    assert_eq!(json_path, dir.path().join("cats.json"));
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(json_path).unwrap()).unwrap();
    assert_eq!(value["frames"][0]["name"], "1.png");
    assert_eq!(value["frames"][1]["name"], "3.png");
    assert_eq!(value["frames"][1]["frame"]["x"], 10);
}
