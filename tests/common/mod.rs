use assert_cmd::Command;
use std::path::Path;

pub fn journo_cmd() -> Command {
    let mut cmd = Command::cargo_bin("journo").unwrap();
    cmd.env_remove("JOURNO_ROOT");
    cmd.env_remove("JOURNO_LOG");
    cmd
}

/// Run `journo add` in `dir` and return the printed id.
#[allow(dead_code)]
pub fn add_entry(dir: &Path, args: &[&str]) -> String {
    let output = journo_cmd()
        .current_dir(dir)
        .arg("add")
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success(), "add failed: {:?}", output);

    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .trim()
        .strip_prefix("Entry added with ID ")
        .unwrap_or_else(|| panic!("unexpected add output: {}", stdout))
        .to_string()
}
