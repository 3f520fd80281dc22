use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn indentsync_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_indentsync"))
}

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// ===========================================
// resolve
// ===========================================

#[test]
fn test_resolve_space_style() {
    let dir = TempDir::new().unwrap();

    let output = indentsync_cmd()
        .current_dir(dir.path())
        .args(["resolve", "--set", "indent_style=space", "--set", "indent_size=2"])
        .arg("src/main.rs")
        .output()
        .unwrap();

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("# src/main.rs"));
    assert!(out.contains("indentSize = 2"));
    assert!(out.contains("insertSpaces = true"));
    assert!(!out.contains("tabSize"));
}

#[test]
fn test_resolve_tab_reference() {
    let dir = TempDir::new().unwrap();

    let output = indentsync_cmd()
        .current_dir(dir.path())
        .args(["resolve", "--set", "indent_style=tab", "--set", "indent_size=tab"])
        .args(["--set", "tab_width=8", "a.go"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("tabSize = 8"));
    assert!(out.contains("indentSize = 8"));
    assert!(out.contains("insertSpaces = false"));
}

#[test]
fn test_resolve_without_project_config_keeps_defaults() {
    let dir = TempDir::new().unwrap();

    let output = indentsync_cmd()
        .current_dir(dir.path())
        .args(["resolve", "--tab-size", "8", "a.txt"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(stdout(&output).contains("(editor defaults)"));
}

#[test]
fn test_resolve_dangling_tab_reference_uses_defaults() {
    let dir = TempDir::new().unwrap();

    let output = indentsync_cmd()
        .current_dir(dir.path())
        .args(["resolve", "--set", "indent_size=tab", "--tab-size", "8"])
        .args(["--indent-size", "4", "a.rs"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(!out.contains("(editor defaults)"));
    assert!(out.contains("tabSize = 8"));
    assert!(out.contains("indentSize = 4"));
    assert!(!out.contains("insertSpaces"));
}

#[test]
fn test_resolve_uses_settings_file_defaults() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    fs::write(
        dir.path().join("indentsync.toml"),
        r#"
[editor]
tab_size = 4
indent_size = 4

[language.go]
tab_size = 8
"#,
    )
    .unwrap();

    let output = indentsync_cmd()
        .current_dir(dir.path())
        .args(["resolve", "--set", "indent_style=space", "a.go", "b.rs"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let out = stdout(&output);
    let (go, rs) = out.split_once("# b.rs").unwrap();
    assert!(go.contains("tabSize = 8"));
    assert!(rs.contains("tabSize = 4"));
    assert!(rs.contains("indentSize = 4"));
}

#[test]
fn test_resolve_cli_overrides_settings_file() {
    let dir = TempDir::new().unwrap();
    let settings = dir.path().join("custom.toml");
    fs::write(&settings, "[editor]\ntab_size = 4\n").unwrap();

    let output = indentsync_cmd()
        .current_dir(dir.path())
        .arg("resolve")
        .arg("--settings")
        .arg(settings.to_str().unwrap())
        .args(["--tab-size", "3", "--set", "indent_style=space", "a.rs"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(stdout(&output).contains("tabSize = 3"));
}

#[test]
fn test_resolve_detect_indentation_ignores_defaults() {
    let dir = TempDir::new().unwrap();

    let output = indentsync_cmd()
        .current_dir(dir.path())
        .args(["resolve", "--detect-indentation", "true", "--tab-size", "8"])
        .args(["--set", "indent_style=tab", "a.rs"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(!out.contains("tabSize = 8"));
    assert!(out.contains("indentSize = \"tabSize\""));
}

#[test]
fn test_resolve_project_file() {
    let dir = TempDir::new().unwrap();
    let project = dir.path().join("project.toml");
    fs::write(&project, "indent_style = \"tab\"\ntab_width = 2\n").unwrap();

    let output = indentsync_cmd()
        .current_dir(dir.path())
        .arg("resolve")
        .arg("--project")
        .arg(project.to_str().unwrap())
        .arg("a.c")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(stdout(&output).contains("tabSize = 2"));
}

#[test]
fn test_resolve_apply_prints_diff() {
    let dir = TempDir::new().unwrap();

    let output = indentsync_cmd()
        .current_dir(dir.path())
        .args(["resolve", "--apply", "--insert-spaces", "true", "--tab-size", "4"])
        .args(["--set", "indent_style=tab", "a.rs"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("--- a.rs"));
    assert!(out.contains("-insertSpaces = true"));
    assert!(out.contains("+insertSpaces = false"));
}

#[test]
fn test_resolve_bad_entry_fails() {
    let dir = TempDir::new().unwrap();

    let output = indentsync_cmd()
        .current_dir(dir.path())
        .args(["resolve", "--set", "indent_style", "a.rs"])
        .output()
        .unwrap();

    assert!(!output.status.success());
}

#[test]
fn test_resolve_invalid_settings_file_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("indentsync.toml"), "invalid toml {{{\n").unwrap();

    let output = indentsync_cmd()
        .current_dir(dir.path())
        .args(["resolve", "a.rs"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"));
}

// ===========================================
// export
// ===========================================

#[test]
fn test_export_spaces_with_auto_tab_size() {
    let output = indentsync_cmd()
        .args(["export", "--insert-spaces", "true", "--tab-size", "auto"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(stdout(&output), "indent_size = 4\nindent_style = space\n");
}

#[test]
fn test_export_tabs() {
    let output = indentsync_cmd()
        .args(["export", "--insert-spaces", "auto", "--tab-size", "8"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(stdout(&output), "indent_style = tab\ntab_width = 8\n");
}

#[test]
fn test_export_without_spacing_is_empty() {
    let output = indentsync_cmd()
        .args(["export", "--tab-size", "8"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(stdout(&output), "");
}

#[test]
fn test_export_rejects_non_numeric_tab_size() {
    let output = indentsync_cmd()
        .args(["export", "--insert-spaces", "true", "--tab-size", "wide"])
        .output()
        .unwrap();

    assert!(!output.status.success());
}

// ===========================================
// init
// ===========================================

#[test]
fn test_init_creates_settings_file() {
    let dir = TempDir::new().unwrap();

    let output = indentsync_cmd()
        .current_dir(dir.path())
        .arg("init")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(dir.path().join("indentsync.toml").exists());
    assert!(stdout(&output).contains("Created"));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("indentsync.toml"), "existing").unwrap();

    let output = indentsync_cmd()
        .current_dir(dir.path())
        .arg("init")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert_eq!(
        fs::read_to_string(dir.path().join("indentsync.toml")).unwrap(),
        "existing"
    );
}
