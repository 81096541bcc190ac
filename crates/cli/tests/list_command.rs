use assert_cmd::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn taskgraph(work: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("taskgraph"));
    cmd.current_dir(work).env("XDG_CONFIG_HOME", work.join("xdg")).env_remove("RUST_LOG");
    cmd
}

fn indexed_vault() -> tempfile::TempDir {
    let tmp = tempdir().unwrap();
    let vault = tmp.path().join("vault");
    fs::create_dir_all(vault.join("work")).unwrap();
    fs::write(
        vault.join("work/release.md"),
        "# Release\n- [ ] Tag build\n- [x] Freeze branch\n\n- plain bullet\n",
    )
    .unwrap();
    fs::write(vault.join("inbox.md"), "- [ ] Reply to Sam\n").unwrap();

    taskgraph(tmp.path()).args(["index", "vault"]).assert().success();
    tmp
}

#[test]
fn list_shows_open_items_only() {
    let tmp = indexed_vault();
    taskgraph(tmp.path()).arg("list").assert().success().stdout(
        "- [ ] Reply to Sam (inbox.md:1)\n\
         - [ ] Tag build (work/release.md:2)\n",
    );
}

#[test]
fn list_all_includes_closed_items() {
    let tmp = indexed_vault();
    taskgraph(tmp.path()).args(["list", "--all"]).assert().success().stdout(
        "- [ ] Reply to Sam (inbox.md:1)\n\
         - [ ] Tag build (work/release.md:2)\n\
         - [x] Freeze branch (work/release.md:3)\n",
    );
}
