use assert_cmd::cargo;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn directory_input_exits_4_and_touches_nothing() {
    let td = tempdir().unwrap();
    fs::create_dir(td.path().join("some_dir")).unwrap();

    let me = cargo::cargo_bin!("appendfilename");
    let out = Command::new(me)
        .current_dir(td.path())
        .args(["-t", "x", "some_dir"])
        .output()
        .expect("spawn binary");

    assert_eq!(out.status.code(), Some(4));
    assert!(td.path().join("some_dir").is_dir(), "directory must remain");
    assert!(!td.path().join("some_dir x").exists());
}

#[test]
fn missing_file_exits_4() {
    let td = tempdir().unwrap();

    let me = cargo::cargo_bin!("appendfilename");
    let out = Command::new(me)
        .current_dir(td.path())
        .args(["-t", "x", "does-not-exist.txt"])
        .output()
        .expect("spawn binary");

    assert_eq!(out.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("error(s) occurred"), "stderr: {stderr}");
}

#[test]
fn batch_continues_past_a_failing_file() {
    let td = tempdir().unwrap();
    fs::write(td.path().join("good.txt"), "g").unwrap();

    let me = cargo::cargo_bin!("appendfilename");
    let out = Command::new(me)
        .current_dir(td.path())
        .args(["-t", "x", "missing.txt", "good.txt"])
        .output()
        .expect("spawn binary");

    // The failing file counts, but the good one is still renamed.
    assert_eq!(out.status.code(), Some(4));
    assert!(td.path().join("good x.txt").is_file());

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("1 error(s) occurred"), "stderr: {stderr}");
}

#[test]
fn existing_target_failure_is_counted() {
    let td = tempdir().unwrap();
    fs::write(td.path().join("a.txt"), "a").unwrap();
    // Occupy the computed target name with a directory so the rename fails.
    fs::create_dir(td.path().join("a x.txt")).unwrap();

    let me = cargo::cargo_bin!("appendfilename");
    let out = Command::new(me)
        .current_dir(td.path())
        .args(["-t", "x", "a.txt"])
        .output()
        .expect("spawn binary");

    assert_eq!(out.status.code(), Some(4));
    assert!(td.path().join("a.txt").is_file(), "source must survive");
}
