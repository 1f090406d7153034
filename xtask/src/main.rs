// Task runner for the lcd-rs workspace, invoked as `cargo x <task>`.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "x")]
#[command(about = "Task runner for the lcd-rs workspace")]
struct Cli {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Format check, lints, build, and tests
    Ci,
    /// Format check and lints only
    Check,
    /// Reformat the workspace
    Fmt,
    /// Lint with clippy, denying warnings
    Clippy,
    /// Run the test suite
    Test {
        /// Restrict to one lib module (panel, display, input, simulator)
        #[arg(long)]
        module: Option<String>,
    },
    /// Run the criterion benchmarks
    Bench,
    /// Install a git pre-commit hook that runs `cargo x check`
    Hook,
}

fn main() -> Result<()> {
    match Cli::parse().task {
        Task::Ci => ci(),
        Task::Check => check(),
        Task::Fmt => cargo("fmt", &["fmt", "--all"]),
        Task::Clippy => clippy(),
        Task::Test { module } => test(module.as_deref()),
        Task::Bench => cargo("bench", &["bench"]),
        Task::Hook => install_hook(),
    }
}

fn ci() -> Result<()> {
    let started = Instant::now();

    cargo("fmt", &["fmt", "--all", "--", "--check"])?;
    clippy()?;
    cargo("build", &["build", "--workspace"])?;
    test(None)?;

    println!(
        "{} in {:.1}s",
        "ci passed".green().bold(),
        started.elapsed().as_secs_f64()
    );
    Ok(())
}

fn check() -> Result<()> {
    cargo("fmt", &["fmt", "--all", "--", "--check"])?;
    clippy()
}

fn clippy() -> Result<()> {
    cargo("clippy", &["clippy", "--all-targets", "--", "-D", "warnings"])
}

fn test(module: Option<&str>) -> Result<()> {
    match module {
        Some(module) => cargo("test", &["test", "--lib", module]),
        None => cargo("test", &["test"]),
    }
}

fn install_hook() -> Result<()> {
    let hook = "#!/bin/sh\n# Installed by `cargo x hook`\nset -e\ncargo x check\n";
    let path = ".git/hooks/pre-commit";

    std::fs::write(path, hook).with_context(|| format!("could not write {}", path))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let mut perms = std::fs::metadata(path)?.permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(path, perms)?;
    }

    println!("{} pre-commit hook runs `cargo x check`", "installed".green());
    Ok(())
}

fn cargo(name: &str, args: &[&str]) -> Result<()> {
    println!("{} cargo {}", "→".blue(), args.join(" "));

    let status = Command::new("cargo")
        .args(args)
        .status()
        .with_context(|| format!("failed to spawn cargo for {}", name))?;

    if !status.success() {
        bail!("{} failed", name);
    }
    Ok(())
}
