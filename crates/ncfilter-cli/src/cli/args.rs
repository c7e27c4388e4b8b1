//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Filter body file, `-` for stdin (positional).
pub fn filter_path_arg() -> Arg {
    Arg::new("filter_path")
        .value_name("FILTER")
        .value_parser(value_parser!(PathBuf))
        .help("Filter body file (XML), or '-' for stdin")
}

/// Inline filter body (-t/--text).
pub fn filter_text_arg() -> Arg {
    Arg::new("filter_text")
        .short('t')
        .long("text")
        .value_name("TEXT")
        .conflicts_with("filter_path")
        .help("Inline filter body (XML)")
}

/// Schema registry file (-m/--modules).
pub fn registry_arg() -> Arg {
    Arg::new("registry")
        .short('m')
        .long("modules")
        .value_name("REGISTRY")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Schema registry (JSON module list)")
}

/// Filter type attribute (--type).
pub fn filter_type_arg() -> Arg {
    Arg::new("filter_type")
        .long("type")
        .value_name("TYPE")
        .value_parser(["subtree", "xpath"])
        .help("Filter type (default: xpath with --select, else subtree)")
}

/// XPath select attribute (--select).
pub fn select_arg() -> Arg {
    Arg::new("select")
        .long("select")
        .value_name("XPATH")
        .help("XPath expression for xpath filters")
}

/// Join filters for a notification subscription (--subscription).
pub fn subscription_arg() -> Arg {
    Arg::new("subscription")
        .long("subscription")
        .action(ArgAction::SetTrue)
        .conflicts_with("json")
        .help("Print one expression joined with 'and'")
}

/// JSON output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print JSON instead of one entry per line")
}

/// Diagnostic verbosity (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .help("Log skipped elements (-v) or every emitted filter (-vv)")
}
