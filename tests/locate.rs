// tests/locate.rs

use std::error::Error;
use std::fs;

use tempfile::TempDir;

use nvnodetop::errors::LauncherError;
use nvnodetop::locate::{SCRIPT_NAME, locate_under};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn script_next_to_the_launcher_is_found() -> TestResult {
    let dir = TempDir::new()?;
    let script = dir.path().join(SCRIPT_NAME);
    fs::write(&script, "#!/bin/sh\n")?;

    let found = locate_under(dir.path(), SCRIPT_NAME)?;
    assert_eq!(found, script);
    Ok(())
}

#[test]
fn script_in_the_share_directory_is_found() -> TestResult {
    let root = TempDir::new()?;
    let bin = root.path().join("bin");
    let share = root.path().join("share").join("nvnodetop");
    fs::create_dir_all(&bin)?;
    fs::create_dir_all(&share)?;
    let script = share.join(SCRIPT_NAME);
    fs::write(&script, "#!/bin/sh\n")?;

    let found = locate_under(&bin, SCRIPT_NAME)?;
    assert_eq!(found.canonicalize()?, script.canonicalize()?);
    Ok(())
}

#[test]
fn flat_layout_wins_over_the_share_directory() -> TestResult {
    let root = TempDir::new()?;
    let bin = root.path().join("bin");
    let share = root.path().join("share").join("nvnodetop");
    fs::create_dir_all(&bin)?;
    fs::create_dir_all(&share)?;
    fs::write(bin.join(SCRIPT_NAME), "#!/bin/sh\n")?;
    fs::write(share.join(SCRIPT_NAME), "#!/bin/sh\n")?;

    let found = locate_under(&bin, SCRIPT_NAME)?;
    assert_eq!(found, bin.join(SCRIPT_NAME));
    Ok(())
}

#[test]
fn missing_script_reports_a_packaging_problem() {
    let dir = TempDir::new().unwrap();

    let err = locate_under(dir.path(), SCRIPT_NAME).unwrap_err();
    match &err {
        LauncherError::PackagingIntegrity { script, .. } => assert_eq!(script, SCRIPT_NAME),
        other => panic!("expected PackagingIntegrity, got: {other:?}"),
    }
    assert!(err.to_string().contains("reinstall"));
}

#[test]
fn a_directory_with_the_script_name_does_not_count() -> TestResult {
    let dir = TempDir::new()?;
    fs::create_dir(dir.path().join(SCRIPT_NAME))?;

    assert!(locate_under(dir.path(), SCRIPT_NAME).is_err());
    Ok(())
}
