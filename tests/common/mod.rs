#![allow(dead_code)]
#![allow(deprecated)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn daybook_cmd() -> Command {
    let mut cmd = Command::cargo_bin("daybook").unwrap();
    cmd.env_remove("DAYBOOK_ROOT");
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Fresh initialized diary in a temporary directory
pub fn init_diary() -> TempDir {
    let temp = TempDir::new().unwrap();
    daybook_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

/// Path of the persisted entry collection
pub fn entries_file(root: &Path) -> PathBuf {
    root.join(".daybook/data/DIARY_ENTRIES.json")
}

/// Run `daybook write` with `args` and return the printed id
pub fn write(root: &Path, args: &[&str]) -> String {
    let output = daybook_cmd()
        .current_dir(root)
        .arg("write")
        .args(args)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "write failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}
