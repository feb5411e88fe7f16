mod common;
use common::TestEnv;
use habitlog::errors::{AppError, AppResult};
use habitlog::ocr::preprocess::{binarize, load_image, otsu_level, preprocess};
use habitlog::ocr::{OcrEngine, OcrLogic, TesseractCli};
use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use predicates::str::contains;
use std::path::Path;

/// Dark text-like block on the left, light background on the right.
fn two_tone(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgb([30, 30, 30])
        } else {
            Rgb([220, 220, 220])
        }
    })
}

fn write_png(path: &Path) {
    two_tone(40, 20).save(path).expect("write png");
}

/// Accepts only binarized images, answers with a fixed text.
struct CheckingEngine;

impl OcrEngine for CheckingEngine {
    fn recognize(&self, image: &Path) -> AppResult<String> {
        let gray = image::open(image)?.to_luma8();
        assert!(gray.pixels().all(|p| p[0] == 0 || p[0] == 255));
        Ok("Hello from the screenshot\n".to_string())
    }
}

#[test]
fn test_otsu_splits_two_tones() {
    let gray = DynamicImage::ImageRgb8(two_tone(40, 20)).to_luma8();
    let level = otsu_level(&gray);

    let dark = gray.get_pixel(0, 0)[0];
    let light = gray.get_pixel(39, 0)[0];
    assert!(level >= dark && level < light, "level {level} not between {dark} and {light}");

    let bin = binarize(&gray, level);
    assert_eq!(bin.get_pixel(0, 0), &Luma([0]));
    assert_eq!(bin.get_pixel(39, 19), &Luma([255]));
}

#[test]
fn test_otsu_on_empty_and_uniform_images() {
    assert_eq!(otsu_level(&GrayImage::new(0, 0)), 0);

    let uniform = GrayImage::from_pixel(8, 8, Luma([128]));
    let bin = binarize(&uniform, otsu_level(&uniform));
    assert!(bin.pixels().all(|p| p[0] == 0 || p[0] == 255));
}

#[test]
fn test_preprocess_outputs_only_black_and_white() {
    let img = DynamicImage::ImageRgb8(RgbImage::from_fn(16, 16, |x, y| {
        Rgb([(x * 16) as u8, (y * 16) as u8, 100])
    }));
    let out = preprocess(&img);

    assert_eq!(out.dimensions(), (16, 16));
    assert!(out.pixels().all(|p| p[0] == 0 || p[0] == 255));
}

#[test]
fn test_load_image_rejects_other_extensions() {
    let env = TestEnv::new();
    let path = env.path("shot.bmp");
    std::fs::write(&path, b"BM").expect("write");

    let err = load_image(&path).expect_err("bmp must be refused");
    assert!(matches!(err, AppError::UnsupportedImage(_)));
}

#[test]
fn test_extract_hands_binarized_image_to_engine() {
    let env = TestEnv::new();
    let img = env.path("shot.png");
    write_png(&img);

    let text = OcrLogic::extract(&CheckingEngine, &img).expect("extract");
    assert_eq!(text, "Hello from the screenshot\n");
}

#[test]
fn test_missing_engine_binary_is_reported() {
    let env = TestEnv::new();
    let img = env.path("shot.png");
    write_png(&img);

    let engine = TesseractCli::new("habitlog-no-such-ocr-engine", "eng");
    let err = OcrLogic::extract(&engine, &img).expect_err("engine missing");

    assert!(matches!(err, AppError::Ocr(_)));
    assert!(err.to_string().contains("not found"));
}

#[test]
fn test_save_text_refuses_overwrite_without_confirmation() {
    let env = TestEnv::new();
    let out = env.path("extracted_text.txt");
    std::fs::write(&out, "old").expect("write");

    let mut answer: &[u8] = b"n\n";
    assert!(OcrLogic::save_text("new", &out, false, &mut answer).is_err());
    assert_eq!(std::fs::read_to_string(&out).expect("read"), "old");

    let mut answer: &[u8] = b"y\n";
    OcrLogic::save_text("new", &out, false, &mut answer).expect("overwrite");
    assert_eq!(std::fs::read_to_string(&out).expect("read"), "new");
}

#[test]
fn test_cli_one_shot_fails_when_engine_missing() {
    let env = TestEnv::new();
    let img = env.path("shot.png");
    write_png(&img);

    env.hl()
        .args([
            "ocr",
            img.to_str().expect("utf8 path"),
            "--engine",
            "habitlog-no-such-ocr-engine",
        ])
        .assert()
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn test_cli_interactive_survives_bad_input() {
    let env = TestEnv::new();
    let missing = env.path("missing.png");

    env.hl()
        .args(["ocr", "--engine", "habitlog-no-such-ocr-engine"])
        .write_stdin(format!("notes.bmp\n{}\nexit\n", missing.display()))
        .assert()
        .success()
        .stderr(contains("Unsupported image type"))
        .stderr(contains("Error during OCR"));
}
