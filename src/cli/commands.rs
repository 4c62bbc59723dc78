//! CLI commands and argument parsing

use clap::{Parser, Subcommand};

/// Export your social graph from the command line
#[derive(Parser, Debug)]
#[command(name = "flock")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
///
/// One fixed set, matched exhaustively; anything else dies in the parser.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Print the authenticated account's id (no trailing newline)
    Id,

    /// Print the raw identity response body
    Me,

    /// List accounts the authenticated user follows, oldest first, as
    /// `id,username` lines
    Following,

    /// List follower ids in natural order, one per line
    Followers,

    /// List muted account ids in natural order, one per line
    Mutes,

    /// List blocked account ids in natural order, one per line
    Blocks,
}
