#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::wildcard_imports,
    clippy::indexing_slicing
)]
//! Integration tests for reconciling packages into the `absent` state.

mod common;

use common::TestFarm;
use stow_cli::reconcile::process;

/// `absent` removes a previously created nested-layout link, reports the
/// removal, and leaves the repository untouched.
#[test]
fn absent_removes_nested_link() {
    let farm = TestFarm::new();
    let payload = farm.package_file("rofi", ".config/rofi/config.rasi");

    process(farm.repo(), "rofi", farm.dest(), "present").unwrap();
    let target = farm.dest().join(".config/rofi");
    assert!(target.is_symlink());

    let report = process(farm.repo(), "rofi", farm.dest(), "absent").unwrap();

    assert!(report.changed);
    assert_eq!(
        report.messages,
        vec![format!("Removed link: {}", target.display())]
    );
    assert!(target.symlink_metadata().is_err(), "link should be gone");
    assert!(payload.exists(), "repository payload must be untouched");
}

/// `absent` removes every link of a multi-file flat package.
#[test]
fn absent_removes_flat_links() {
    let farm = TestFarm::new();
    farm.package_file("bash", ".bashrc");
    farm.package_file("bash", ".bash_profile");

    process(farm.repo(), "bash", farm.dest(), "present").unwrap();
    let report = process(farm.repo(), "bash", farm.dest(), "absent").unwrap();

    assert!(report.changed);
    assert_eq!(report.messages.len(), 2);
    assert_eq!(farm.dest_entry_count(), 0);
}

/// `absent` on targets that were never linked is a clean no-op.
#[test]
fn absent_without_links_is_unchanged() {
    let farm = TestFarm::new();
    farm.package_file("bash", ".bashrc");

    let report = process(farm.repo(), "bash", farm.dest(), "absent").unwrap();

    assert!(!report.changed);
    assert!(report.messages.is_empty());
}

/// `absent` never deletes a regular file occupying the target path.
#[test]
fn absent_leaves_regular_file_alone() {
    let farm = TestFarm::new();
    farm.package_file("bash", ".bashrc");
    std::fs::write(farm.dest().join(".bashrc"), "user content").unwrap();

    let report = process(farm.repo(), "bash", farm.dest(), "absent").unwrap();

    assert!(!report.changed);
    assert_eq!(
        std::fs::read(farm.dest().join(".bashrc")).unwrap(),
        b"user content"
    );
}

/// Applying then removing returns the destination to its initial state.
#[test]
fn apply_then_remove_round_trips() {
    let farm = TestFarm::new();
    farm.package_file("bash", ".bashrc");

    let applied = process(farm.repo(), "bash", farm.dest(), "present").unwrap();
    let removed = process(farm.repo(), "bash", farm.dest(), "absent").unwrap();
    let removed_again = process(farm.repo(), "bash", farm.dest(), "absent").unwrap();

    assert!(applied.changed);
    assert!(removed.changed);
    assert!(!removed_again.changed);
    assert_eq!(farm.dest_entry_count(), 0);
}
