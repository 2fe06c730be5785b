//! Command-line surface tests

use assert_cmd::Command;
use tempfile::TempDir;

fn reelcut(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("reelcut").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("REELCUT_FFMPEG")
        .env_remove("REELCUT_FFPROBE")
        .env_remove("REELCUT_DEFAULT_FPS")
        .env("REELCUT_LOG_LEVEL", "error");
    cmd
}

#[test]
fn test_help() {
    let dir = TempDir::new().unwrap();
    let output = reelcut(&dir).arg("--help").output().unwrap();
    assert!(output.status.success());

    let help = String::from_utf8_lossy(&output.stdout);
    for command in ["probe", "edit", "concat"] {
        assert!(help.contains(command), "missing {} in help", command);
    }
}

#[test]
fn test_edit_requires_input() {
    let dir = TempDir::new().unwrap();
    reelcut(&dir).args(["edit", "--print"]).assert().failure();
}

#[test]
fn test_concat_requires_clips() {
    let dir = TempDir::new().unwrap();
    reelcut(&dir).args(["concat", "-o", "joined.mov"]).assert().failure();
}

#[test]
fn test_malformed_edit_step_rejected() {
    let dir = TempDir::new().unwrap();
    reelcut(&dir)
        .args(["edit", "-i", "in.mp4", "-e", "size=wide", "--print"])
        .assert()
        .failure();
}

#[test]
fn test_missing_probe_tool_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("in.mp4"), b"fake video data").unwrap();

    let output = reelcut(&dir)
        .args([
            "--ffprobe",
            "/nonexistent/bin/ffprobe",
            "edit",
            "-i",
            "in.mp4",
            "-e",
            "trim=1-2",
            "--print",
        ])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_invalid_config_file_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("reelcut.toml"), "[reelcut]\ndefault_frame_rate = 0\n").unwrap();

    reelcut(&dir)
        .args(["probe", "-i", "in.mp4"])
        .assert()
        .failure();
}
