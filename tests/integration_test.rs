//! Integration tests for the gadd CLI.

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Helper to run gadd in `dir` and return (stdout, stderr, exit_code).
fn run_gadd(dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_gadd"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to spawn gadd");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .args(args)
        .current_dir(dir)
        .status()
        .expect("Failed to run git");
    assert!(status.success(), "git {:?} failed", args);
}

/// Fresh repository with nothing staged.
fn git_repo() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    git(dir.path(), &["init", "-q"]);
    dir
}

#[test]
fn test_version() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_gadd(dir.path(), &["--version"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), format!("gadd {}", env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_staged_files() {
    let repo = git_repo();
    let (stdout, stderr, exit_code) = run_gadd(repo.path(), &[]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("# Make it PEP8 again! #"));
    assert!(stdout.contains("No python files found!"));
    assert!(stdout.trim_end().ends_with("########"));
    assert!(stdout.contains("# Exit #"));
}

#[test]
fn test_pattern_file_created_and_merged() {
    let repo = git_repo();
    let gadd_file = repo.path().join(".gadd");

    let (_, stderr, exit_code) = run_gadd(
        repo.path(),
        &["--exclude", "docs/*.py", "--ignore-decorators", "@app.route"],
    );
    assert_eq!(exit_code, 0, "stderr: {}", stderr);

    let (_, stderr, exit_code) = run_gadd(
        repo.path(),
        &["--exclude", "*settings.py,docs/*.py", "--ignore-names", "visit_*"],
    );
    assert_eq!(exit_code, 0, "stderr: {}", stderr);

    let content = fs::read_to_string(&gadd_file).unwrap();
    assert!(content.starts_with("[GADD]\n"), "content: {}", content);
    assert!(content.contains("exclude = *settings.py,docs/*.py\n"));
    assert!(content.contains("ignore_decorators = @app.route\n"));
    assert!(content.contains("ignore_names = visit_*\n"));
}

#[test]
fn test_existing_pattern_file_is_kept() {
    let repo = git_repo();
    let gadd_file = repo.path().join(".gadd");
    fs::write(&gadd_file, "[GADD]\nexclude = old/*\n").unwrap();

    let (_, stderr, exit_code) = run_gadd(repo.path(), &["--exclude", "new/*"]);
    assert_eq!(exit_code, 0, "stderr: {}", stderr);

    let content = fs::read_to_string(&gadd_file).unwrap();
    assert!(content.contains("exclude = new/*,old/*\n"), "content: {}", content);
}

#[test]
fn test_custom_config_path() {
    let repo = git_repo();
    let (_, stderr, exit_code) = run_gadd(
        repo.path(),
        &["--config", "conf/patterns.ini", "--ignore-names", "do_*"],
    );
    assert_eq!(exit_code, 0, "stderr: {}", stderr);

    let content = fs::read_to_string(repo.path().join("conf/patterns.ini")).unwrap();
    assert!(content.contains("ignore_names = do_*\n"));
    assert!(!repo.path().join(".gadd").exists());
}

#[test]
fn test_malformed_pattern_file_is_fatal() {
    let repo = git_repo();
    fs::write(repo.path().join(".gadd"), "exclude = nothing above me\n").unwrap();

    let (stdout, stderr, exit_code) = run_gadd(repo.path(), &[]);

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("Failed to parse config file"), "stderr: {}", stderr);
    assert!(!stdout.contains("Make it PEP8 again"));
}

#[test]
fn test_missing_section_is_fatal() {
    let repo = git_repo();
    fs::write(repo.path().join(".gadd"), "[OTHER]\nexclude = a\n").unwrap();

    let (_, stderr, exit_code) = run_gadd(repo.path(), &[]);

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("missing [GADD] section"), "stderr: {}", stderr);
}

#[test]
fn test_invalid_decorator_pattern() {
    let repo = git_repo();
    let (_, stderr, exit_code) = run_gadd(repo.path(), &["--ignore-decorators", "app.route"]);

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("must start with '@'"), "stderr: {}", stderr);
    assert!(!repo.path().join(".gadd").exists());
}

#[test]
fn test_pattern_with_space_is_rejected() {
    let repo = git_repo();
    let gadd_file = repo.path().join(".gadd");
    fs::write(&gadd_file, "[GADD]\nexclude = docs/*.py\n").unwrap();

    let (_, stderr, exit_code) = run_gadd(repo.path(), &["--exclude", "my docs/*.py"]);

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("contains whitespace"), "stderr: {}", stderr);
    let content = fs::read_to_string(&gadd_file).unwrap();
    assert_eq!(content, "[GADD]\nexclude = docs/*.py\n");
}

#[test]
fn test_outside_git_repository_is_fatal() {
    let dir = TempDir::new().unwrap();
    let (stdout, stderr, exit_code) = run_gadd(dir.path(), &[]);

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("Failed to list staged files"), "stderr: {}", stderr);
    assert!(!stdout.contains("No python files found!"));
}

#[test]
fn test_staged_python_file_runs_every_stage() {
    let repo = git_repo();
    fs::write(repo.path().join("app.py"), "import os\n\n\ndef main():\n    pass\n").unwrap();
    fs::write(repo.path().join("notes.txt"), "not python\n").unwrap();
    git(repo.path(), &["add", "app.py", "notes.txt"]);

    // Outcomes depend on which Python tools are installed; the run completes either way.
    let (stdout, stderr, exit_code) = run_gadd(repo.path(), &[]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("Found 1 python file(s):"));
    assert!(stdout.contains("app.py"));
    assert!(!stdout.contains("notes.txt"));
    for banner in [
        "Removing and sorting imports.",
        "Applying Black.",
        "Checking with flake8.",
        "Checking with pylint.",
        "Checking with Vulture.",
    ] {
        assert!(stdout.contains(banner), "missing {:?} in {}", banner, stdout);
    }
    assert!(stdout.contains("1 file(s) checked"));
    assert!(stdout.contains("# Exit #"));
}

#[test]
fn test_debug_logging_writes_log_file() {
    let repo = git_repo();
    let log_dir = repo.path().join("logs");

    let (_, stderr, exit_code) = run_gadd(
        repo.path(),
        &["--debug", "--log-dir", log_dir.to_str().unwrap()],
    );
    assert_eq!(exit_code, 0, "stderr: {}", stderr);

    let entries: Vec<_> = fs::read_dir(&log_dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().starts_with("gadd"))
        .collect();
    assert!(!entries.is_empty(), "no log file in {}", log_dir.display());
}
