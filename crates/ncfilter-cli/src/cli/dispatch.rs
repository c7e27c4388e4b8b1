//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;
use ncfilter_compiler::FilterType;

use super::OutputFormat;
use crate::commands::compile::{CompileArgs, OutputMode};
use crate::commands::modules::ModulesArgs;

pub struct CompileParams {
    pub filter_path: Option<PathBuf>,
    pub filter_text: Option<String>,
    pub registry: PathBuf,
    pub filter_type: Option<FilterType>,
    pub select: Option<String>,
    pub subscription: bool,
    pub format: OutputFormat,
    pub verbose: u8,
}

impl CompileParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            filter_path: m.get_one::<PathBuf>("filter_path").cloned(),
            filter_text: m.get_one::<String>("filter_text").cloned(),
            registry: registry_path(m),
            filter_type: parse_filter_type(m),
            select: m.get_one::<String>("select").cloned(),
            subscription: m.get_flag("subscription"),
            format: OutputFormat::from_flag(m.get_flag("json")),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<CompileParams> for CompileArgs {
    fn from(p: CompileParams) -> Self {
        // A bare --select means an xpath filter.
        let filter_type = p.filter_type.unwrap_or(if p.select.is_some() {
            FilterType::XPath
        } else {
            FilterType::Subtree
        });

        let output = match (p.subscription, p.format) {
            (true, _) => OutputMode::Subscription,
            (false, OutputFormat::Json) => OutputMode::Json,
            (false, OutputFormat::Lines) => OutputMode::Lines,
        };

        Self {
            filter_path: p.filter_path,
            filter_text: p.filter_text,
            registry: p.registry,
            filter_type,
            select: p.select,
            output,
        }
    }
}

pub struct ModulesParams {
    pub registry: PathBuf,
    pub format: OutputFormat,
    pub verbose: u8,
}

impl ModulesParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            registry: registry_path(m),
            format: OutputFormat::from_flag(m.get_flag("json")),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<ModulesParams> for ModulesArgs {
    fn from(p: ModulesParams) -> Self {
        Self {
            registry: p.registry,
            json: p.format == OutputFormat::Json,
        }
    }
}

/// `--modules` is required, so clap has already rejected its absence.
fn registry_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("registry").cloned().unwrap_or_default()
}

fn parse_filter_type(m: &ArgMatches) -> Option<FilterType> {
    match m.get_one::<String>("filter_type").map(|s| s.as_str()) {
        Some("xpath") => Some(FilterType::XPath),
        Some("subtree") => Some(FilterType::Subtree),
        _ => None,
    }
}
