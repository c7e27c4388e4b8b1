use std::path::PathBuf;

use ncfilter_core::SchemaRegistry;
use serde::Serialize;

use super::fail;
use super::loader::load_registry;

pub struct ModulesArgs {
    pub registry: PathBuf,
    pub json: bool,
}

#[derive(Serialize)]
struct ModuleEntry<'a> {
    name: &'a str,
    namespace: &'a str,
    top_level: &'a [String],
}

pub fn run(args: ModulesArgs) {
    let registry = load_registry(&args.registry).unwrap_or_else(|e| fail(e));
    let output = render(&registry, args.json).unwrap_or_else(|e| fail(e));
    print!("{}", output);
}

/// Modules in registration order: `name namespace top-level...`, or JSON.
pub fn render(registry: &SchemaRegistry, json: bool) -> Result<String, serde_json::Error> {
    if json {
        let entries: Vec<_> = registry
            .iter()
            .map(|(name, info)| ModuleEntry {
                name,
                namespace: &info.namespace,
                top_level: &info.top_level,
            })
            .collect();
        let mut out = serde_json::to_string_pretty(&entries)?;
        out.push('\n');
        return Ok(out);
    }

    let mut out = String::new();
    for (name, info) in registry.iter() {
        out.push_str(name);
        out.push(' ');
        out.push_str(&info.namespace);
        for node in &info.top_level {
            out.push(' ');
            out.push_str(node);
        }
        out.push('\n');
    }
    Ok(out)
}
