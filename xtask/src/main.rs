//! Custom cargo commands for the decima workspace.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests, every feature combination
//!   cargo xtask check     - Quick check (default features only)
//!   cargo xtask bench     - Run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Feature sets the test suite must pass under.
const FEATURE_SETS: &[&[&str]] = &[
    &["--no-default-features"],
    &[],
    &["--all-features"],
];

/// Default messages that are part of the public contract.
const DEFAULT_MESSAGES: &[&str] = &[
    "Failed requirement because the required value was false",
    "Failed requirement because the required value was null",
];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (contract + tests + clippy + docs)
  test      Run all Rust tests under every feature set
  check     Quick check (cargo test + clippy, default features)
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("decima Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking published default messages...");
    check_default_messages()?;
    println!("✓ Default messages unchanged\n");

    println!("[2/4] Running Rust tests...");
    test()?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--workspace", "--all-features", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Building docs...");
    run_cargo(&["doc", "--no-deps", "--all-features", "--quiet"])?;
    println!("✓ Docs build\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");
    println!("\nSafe to commit changes.");

    Ok(())
}

/// Run all tests under each feature set
fn test() -> Result<()> {
    for features in FEATURE_SETS {
        let mut args = vec!["test", "--quiet"];
        args.extend_from_slice(features);
        run_cargo(&args)?;
    }
    Ok(())
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--workspace"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// Fail if either published default message is missing from src/guard.rs.
fn check_default_messages() -> Result<()> {
    let root = project_root()?;
    let guard_rs = std::fs::read_to_string(root.join("src/guard.rs"))
        .context("Failed to read src/guard.rs")?;

    for message in DEFAULT_MESSAGES {
        let literal = format!("\"{}\"", message);
        if !guard_rs.contains(&literal) {
            bail!("Default message changed or missing: {}", literal);
        }
    }

    Ok(())
}
