// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask - Project Automation
//!
//! Lint, test and coverage orchestration for the workspace, plus helpers for
//! crafting and inspecting session tokens by hand.
//!
//! ```text
//! cargo xtask ci
//! cargo xtask token encode payload.json
//! cargo xtask token decode H4sIAAAAAAAC...
//! ```

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::{io, path::PathBuf, process::Output};

use cargo_metadata::MetadataCommand;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::Context};
use duct::cmd;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    if let Err(err) = args.run() {
        tracing::error!("{err}");
        std::process::exit(1);
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<()> {
        self.command.run()
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Run CI checks (lint, deny, machete, build, test)
    CI,

    /// Build the workspace
    #[command(visible_alias = "b")]
    Build,

    /// Generate an lcov coverage report
    #[command(visible_alias = "cov")]
    Coverage,

    /// Check dependency licenses and advisories
    #[command(visible_alias = "cd")]
    Deny,

    /// Check for unused dependencies
    #[command(visible_alias = "m")]
    Machete,

    /// Lint clippy, docs, formatting and typos
    #[command(visible_alias = "l")]
    Lint,

    /// Fix formatting issues
    #[command(visible_alias = "fmt")]
    FixFormatting,

    /// Run lib and doc tests
    #[command(visible_alias = "t")]
    Test,

    /// Encode or decode session tokens
    #[command(subcommand)]
    Token(TokenCommand),
}

#[derive(Clone, Debug, Subcommand)]
enum TokenCommand {
    /// Encode a JSON file (or stdin when omitted) into a token
    Encode { path: Option<PathBuf> },

    /// Decode a token and pretty-print its JSON
    Decode { token: String },
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::CI => ci(),
            Self::Build => build(),
            Self::Coverage => coverage(),
            Self::Deny => deny(),
            Self::Machete => machete(),
            Self::Lint => lint(),
            Self::FixFormatting => run_cargo_nightly(&["fmt", "--all"]),
            Self::Test => test(),
            Self::Token(command) => command.run(),
        }
    }
}

impl TokenCommand {
    fn run(self) -> Result<()> {
        let runtime: tokio::runtime::Runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .wrap_err("failed to start the tokio runtime")?;

        match self {
            Self::Encode { path } => {
                let text: String = match path {
                    Some(path) => std::fs::read_to_string(&path)
                        .wrap_err_with(|| format!("failed to read {}", path.display()))?,
                    None => io::read_to_string(io::stdin()).wrap_err("failed to read stdin")?,
                };
                let value: serde_json::Value =
                    serde_json::from_str(&text).wrap_err("input is not valid JSON")?;
                let token: String = runtime.block_on(slot_picker_codec::encode(&value))?;
                println!("{token}");
            }
            Self::Decode { token } => {
                let value: serde_json::Value =
                    runtime.block_on(slot_picker_codec::decode(token.trim()))?;
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
        }
        Ok(())
    }
}

fn ci() -> Result<()> {
    lint()?;
    deny()?;
    machete()?;
    build()?;
    test()
}

fn build() -> Result<()> {
    run_cargo(&["build", "--all-targets", "--all-features"])
}

fn coverage() -> Result<()> {
    run_cargo(&[
        "llvm-cov",
        "--workspace",
        "--lcov",
        "--output-path",
        "target/lcov.info",
    ])
}

fn deny() -> Result<()> {
    run_cargo(&["deny", "check"])
}

fn machete() -> Result<()> {
    cmd!("cargo-machete").run_with_trace()?;
    Ok(())
}

/// Lint clippy, docs, formatting and typos, stopping at the first failure
fn lint() -> Result<()> {
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ])?;
    lint_docs()?;
    run_cargo_nightly(&["fmt", "--all", "--check"])?;
    cmd!("typos").run_with_trace()?;
    Ok(())
}

/// Check that docs build without warnings for every library crate
fn lint_docs() -> Result<()> {
    let meta = MetadataCommand::new()
        .exec()
        .wrap_err("failed to get cargo metadata")?;

    for package in meta.workspace_default_packages() {
        cmd(
            "cargo",
            ["doc", "--no-deps", "--package", package.name.as_str()],
        )
        .env_remove("CARGO")
        .env("RUSTDOCFLAGS", "-D warnings")
        .run_with_trace()?;
    }

    Ok(())
}

fn test() -> Result<()> {
    run_cargo(&["test", "--workspace", "--all-targets"])?;
    // doc tests are slow, run them last
    run_cargo(&["test", "--workspace", "--doc"])
}

fn run_cargo(args: &[&str]) -> Result<()> {
    cmd("cargo", args).run_with_trace()?;
    Ok(())
}

fn run_cargo_nightly(args: &[&str]) -> Result<()> {
    cmd("cargo", args)
        // CARGO is set because we run as a cargo subcommand
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .run_with_trace()?;
    Ok(())
}

/// Logs a `duct::Expression` before running it.
trait ExpressionExt {
    fn run_with_trace(&self) -> io::Result<Output>;
}

impl ExpressionExt for duct::Expression {
    fn run_with_trace(&self) -> io::Result<Output> {
        tracing::info!("running command: {:?}", self);
        self.run().inspect_err(|_| {
            tracing::error!("failed to run command: {:?}", self);
        })
    }
}
