use bgclear::{clear_background_file, rescale_file, ClearOptions, Error, Mode, TRANSPARENT};
use image::{Rgba, RgbaImage};
use tempfile::TempDir;

const PAPER: Rgba<u8> = Rgba([245, 246, 247, 255]);
const INK: Rgba<u8> = Rgba([20, 20, 20, 255]);

/// A letter "O" on a near-white sheet: 11x9, 1px ink ring with a hole.
fn letter_o() -> RgbaImage {
    let mut img = RgbaImage::from_pixel(11, 9, PAPER);
    for x in 3..8 {
        img.put_pixel(x, 2, INK);
        img.put_pixel(x, 6, INK);
    }
    for y in 2..7 {
        img.put_pixel(3, y, INK);
        img.put_pixel(7, y, INK);
    }
    img
}

fn is_hole(x: u32, y: u32) -> bool {
    (4..7).contains(&x) && (3..6).contains(&y)
}

#[test]
fn clear_file_keeps_counter() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("o.png");
    let dst = dir.path().join("out/o_clear.png");
    letter_o().save(&src).unwrap();

    let summary = clear_background_file(&src, &dst, &ClearOptions::default()).unwrap();
    assert_eq!((summary.width, summary.height), (11, 9));
    assert_eq!(summary.cleared, 11 * 9 - 16 - 9);

    let out = image::open(&dst).unwrap().into_rgba8();
    for (x, y, px) in out.enumerate_pixels() {
        let original = *letter_o().get_pixel(x, y);
        if original == INK || is_hole(x, y) {
            assert_eq!(*px, original, "pixel ({x}, {y}) should be unchanged");
        } else {
            assert_eq!(px.0, TRANSPARENT, "pixel ({x}, {y}) should be cleared");
        }
    }
}

#[test]
fn clear_file_global_mode_hollows_counter() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("o.png");
    let dst = dir.path().join("o_global.png");
    letter_o().save(&src).unwrap();

    let options = ClearOptions::default().with_mode(Mode::Global);
    let summary = clear_background_file(&src, &dst, &options).unwrap();
    assert_eq!(summary.cleared, 11 * 9 - 16);

    let out = image::open(&dst).unwrap().into_rgba8();
    assert_eq!(out.get_pixel(5, 4).0, TRANSPARENT);
}

#[test]
fn threshold_above_paper_clears_nothing() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("o.png");
    let dst = dir.path().join("o_same.png");
    letter_o().save(&src).unwrap();

    let summary = clear_background_file(&src, &dst, &ClearOptions::new(245)).unwrap();
    assert_eq!(summary.cleared, 0);

    let out = image::open(&dst).unwrap().into_rgba8();
    assert_eq!(out, letter_o());
}

#[test]
fn missing_input_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("nope.png");
    let dst = dir.path().join("never.png");

    let err = clear_background_file(&src, &dst, &ClearOptions::default()).unwrap_err();
    assert!(matches!(err, Error::Open(..)));
    assert!(!dst.exists());
}

#[test]
fn jpeg_output_is_rejected() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("o.png");
    let dst = dir.path().join("o.jpg");
    letter_o().save(&src).unwrap();

    let err = clear_background_file(&src, &dst, &ClearOptions::default()).unwrap_err();
    assert!(matches!(err, Error::UnsupportedOutput { .. }));
    assert!(!dst.exists());
}

#[test]
fn rescale_file_doubles() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("o.png");
    let dst = dir.path().join("o_big.png");
    letter_o().save(&src).unwrap();

    rescale_file(&src, &dst, 22, 18).unwrap();

    let out = image::open(&dst).unwrap().into_rgba8();
    assert_eq!(out.dimensions(), (22, 18));
    assert_eq!(*out.get_pixel(0, 0), PAPER);
    assert_eq!(*out.get_pixel(6, 4), INK);
}
