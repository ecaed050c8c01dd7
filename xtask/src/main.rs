//! Custom cargo commands for the levtrie crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check
//!   cargo xtask fuzz      - Run each fuzz target briefly

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Fuzz targets under fuzz/fuzz_targets.
const FUZZ_TARGETS: &[&str] = &["automaton_oracle", "trie_agreement"];

/// Seconds per fuzz target in `cargo xtask fuzz`.
const FUZZ_SECONDS: u32 = 60;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (tests, feature matrix, clippy, contracts)
  test      Run all Rust tests
  check     Quick check (cargo test + clippy)
  bench     Run benchmarks
  fuzz      Run every fuzz target for {} seconds (needs cargo-fuzz)
"#,
        FUZZ_SECONDS
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("levtrie Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking contract markers...");
    check_contract_markers()?;
    println!("✓ Contracts present\n");

    println!("[2/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    // Sequential matcher and plain-text output paths
    println!("[3/4] Running tests without default features...");
    run_cargo(&["test", "--quiet", "--no-default-features"])?;
    println!("✓ Minimal build passes\n");

    println!("[4/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

fn test() -> Result<()> {
    run_cargo(&["test"])
}

fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

fn fuzz() -> Result<()> {
    let max_time = format!("-max_total_time={}", FUZZ_SECONDS);
    for target in FUZZ_TARGETS {
        println!("Fuzzing {} for {}s...", target, FUZZ_SECONDS);
        run_cargo(&["+nightly", "fuzz", "run", target, "--", &max_time])?;
    }
    println!("\n✓ No fuzz failures");
    Ok(())
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

/// Count the debug-build checks in src/contracts.rs.
fn check_contract_markers() -> Result<()> {
    let root = project_root()?;
    let contracts = std::fs::read_to_string(root.join("src/contracts.rs"))
        .context("Failed to read src/contracts.rs")?;

    let count = contracts.matches("Contract violation").count();
    if count < 4 {
        bail!(
            "Expected at least 4 contract checks in src/contracts.rs, found {}",
            count
        );
    }

    Ok(())
}
