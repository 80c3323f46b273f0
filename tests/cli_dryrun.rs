use assert_cmd::cargo;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn dryrun_reports_but_renames_nothing() {
    let td = tempdir().unwrap();
    fs::write(td.path().join("report.pptx"), "slides").unwrap();

    let me = cargo::cargo_bin!("appendfilename");
    let out = Command::new(me)
        .current_dir(td.path())
        .args(["--dryrun", "-t", "of projectA", "report.pptx"])
        .output()
        .expect("spawn binary");

    assert!(out.status.success());
    assert!(td.path().join("report.pptx").is_file(), "original must remain");
    assert!(
        !td.path().join("report of projectA.pptx").exists(),
        "dry-run must not create the target"
    );

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.contains("report of projectA.pptx"),
        "the computed name must be reported: {stdout}"
    );
}

#[test]
fn dryrun_and_wet_run_compute_the_same_name() {
    let td = tempdir().unwrap();
    fs::write(td.path().join("2021-12-31_test.txt"), "t").unwrap();

    let me = cargo::cargo_bin!("appendfilename");
    let dry = Command::new(&me)
        .current_dir(td.path())
        .args(["-d", "--smart-prepend", "-t", "book", "2021-12-31_test.txt"])
        .output()
        .expect("spawn binary");
    assert!(dry.status.success());

    let wet = Command::new(&me)
        .current_dir(td.path())
        .args(["--smart-prepend", "-t", "book", "2021-12-31_test.txt"])
        .output()
        .expect("spawn binary");
    assert!(wet.status.success());

    let expected = "2021-12-31 book test.txt";
    assert!(td.path().join(expected).is_file());
    let dry_stdout = String::from_utf8_lossy(&dry.stdout);
    assert!(
        dry_stdout.contains(expected),
        "dry-run must announce the same name: {dry_stdout}"
    );
}
