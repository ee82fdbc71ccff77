//! CLI module for Team Manager
//!
//! Provides subcommands for the two sides of the system:
//! - `serve`: the HTTP record store
//! - `form`: the interactive client form

pub mod form;
pub mod serve;

use clap::{Parser, Subcommand};

/// Team Manager - a small record store for sports teams
#[derive(Parser)]
#[command(name = "team-manager")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the team record store
    Serve(serve::ServeArgs),

    /// Run the interactive client form against a running store
    Form(form::FormArgs),
}
