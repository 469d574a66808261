use image::ColorType;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const LOCK_ICONS: &str = env!("CARGO_BIN_EXE_lock-icons");
const VERIFY_ICONS: &str = env!("CARGO_BIN_EXE_verify_icons");

fn run_in(dir: &Path, binary: &str) -> Output {
    Command::new(binary)
        .current_dir(dir)
        .output()
        .expect("Failed to run binary")
}

fn assert_success(output: &Output, what: &str) {
    if !output.status.success() {
        eprintln!("Command failed with status: {}", output.status);
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("{what} failed");
    }
}

/// Runs `lock-icons` in an empty directory and checks both the files and
/// the exact progress output.
#[test]
fn test_generates_three_icons_in_empty_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let output = run_in(temp_dir.path(), LOCK_ICONS);
    assert_success(&output, "lock-icons");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Created icons/icon16.png (16x16)",
            "Created icons/icon48.png (48x48)",
            "Created icons/icon128.png (128x128)",
            "All icons created successfully!",
        ]
    );

    let icons_dir = temp_dir.path().join("icons");
    let mut names: Vec<String> = std::fs::read_dir(&icons_dir)
        .expect("icons directory should exist")
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["icon128.png", "icon16.png", "icon48.png"]);

    for size in [16, 48, 128] {
        let path = icons_dir.join(format!("icon{size}.png"));
        let icon = image::open(&path).expect("Failed to load generated icon");
        assert_eq!(icon.width(), size);
        assert_eq!(icon.height(), size);
        assert_eq!(icon.color(), ColorType::Rgba8);
    }
}

#[test]
fn test_second_run_overwrites() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    assert_success(&run_in(temp_dir.path(), LOCK_ICONS), "first run");
    let first = std::fs::read(temp_dir.path().join("icons/icon48.png")).unwrap();

    std::fs::write(temp_dir.path().join("icons/icon48.png"), b"stale").unwrap();
    assert_success(&run_in(temp_dir.path(), LOCK_ICONS), "second run");
    let second = std::fs::read(temp_dir.path().join("icons/icon48.png")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_verifier_accepts_generated_icons() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    assert_success(&run_in(temp_dir.path(), LOCK_ICONS), "lock-icons");
    let output = run_in(temp_dir.path(), VERIFY_ICONS);
    assert_success(&output, "verify_icons");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("3 icon(s) verified"), "stdout: {stdout}");
}

#[test]
fn test_verifier_rejects_foreign_image() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("icon16.png");
    image::RgbaImage::from_pixel(16, 16, image::Rgba([0, 0, 0, 255]))
        .save(&path)
        .expect("Failed to save test image");

    let output = Command::new(VERIFY_ICONS)
        .arg(&path)
        .output()
        .expect("Failed to run verify_icons");
    assert!(!output.status.success());
}

#[test]
fn test_fails_when_icons_path_is_a_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    std::fs::write(temp_dir.path().join("icons"), b"").unwrap();

    let output = run_in(temp_dir.path(), LOCK_ICONS);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Can't create output directory"),
        "stderr: {stderr}"
    );
    assert!(output.stdout.is_empty());
}

#[test]
fn test_rejects_arguments() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let output = Command::new(LOCK_ICONS)
        .arg("--size")
        .arg("64")
        .current_dir(temp_dir.path())
        .output()
        .expect("Failed to run lock-icons");

    assert!(!output.status.success());
    assert!(!temp_dir.path().join("icons").exists());
}
