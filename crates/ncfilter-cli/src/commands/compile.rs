use std::path::PathBuf;

use ncfilter_compiler::{FilterCarrier, FilterSet, FilterType, request_filters};
use ncfilter_core::FilterAttribute;
use tracing::debug;

use super::fail;
use super::loader::{LoadError, load_filter, load_registry};

/// How the filter set is printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputMode {
    Lines,
    Json,
    Subscription,
}

pub struct CompileArgs {
    pub filter_path: Option<PathBuf>,
    pub filter_text: Option<String>,
    pub registry: PathBuf,
    pub filter_type: FilterType,
    pub select: Option<String>,
    pub output: OutputMode,
}

pub fn run(args: CompileArgs) {
    let registry = load_registry(&args.registry).unwrap_or_else(|e| fail(e));
    let carrier = build_carrier(&args).unwrap_or_else(|e| fail(e));

    debug!(modules = registry.len(), "registry loaded");

    let filters = request_filters(carrier.as_ref(), &registry).unwrap_or_else(|e| fail(e));
    let output = render(&filters, args.output).unwrap_or_else(|e| fail(e));
    print!("{}", output);
}

/// The `<filter>` element the flags describe; `None` when there is none.
pub fn build_carrier(args: &CompileArgs) -> Result<Option<FilterCarrier>, LoadError> {
    match args.filter_type {
        FilterType::XPath => {
            let carrier = match &args.select {
                Some(select) => FilterCarrier::xpath(select.as_str()),
                // Missing select is reported by the dispatcher.
                None => FilterCarrier::new().with_attribute(FilterAttribute::new("type", "xpath")),
            };
            Ok(Some(carrier))
        }
        FilterType::Subtree => {
            let payload = load_filter(args.filter_path.as_deref(), args.filter_text.as_deref())?;
            Ok(payload.map(FilterCarrier::subtree))
        }
    }
}

pub fn render(filters: &FilterSet, mode: OutputMode) -> Result<String, serde_json::Error> {
    let mut out = match mode {
        OutputMode::Lines => filters.iter().collect::<Vec<_>>().join("\n"),
        OutputMode::Json => serde_json::to_string_pretty(filters.as_slice())?,
        OutputMode::Subscription => filters.subscription_xpath().unwrap_or_default(),
    };
    if !out.is_empty() {
        out.push('\n');
    }
    Ok(out)
}
