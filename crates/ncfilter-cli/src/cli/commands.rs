//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("ncfilter")
        .about("Compile NETCONF subtree filters into XPath")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(compile_command())
        .subcommand(modules_command())
}

/// Compile a `<filter>` body into its filter set.
pub fn compile_command() -> Command {
    Command::new("compile")
        .about("Compile a filter into XPath expressions")
        .override_usage(
            "\
  ncfilter compile <FILTER> -m <REGISTRY>
  ncfilter compile -t <TEXT> -m <REGISTRY>
  ncfilter compile --select <XPATH> -m <REGISTRY>",
        )
        .after_help(
            r#"EXAMPLES:
  ncfilter compile filter.xml -m modules.json           # one XPath per line
  ncfilter compile - -m modules.json < filter.xml       # body from stdin
  ncfilter compile -t '<users/>' -m modules.json        # inline body
  ncfilter compile filter.xml -m modules.json --json    # JSON array
  ncfilter compile filter.xml -m modules.json --subscription
  ncfilter compile --select '/ex:top' -m modules.json   # xpath filter

With no filter body at all, the whole datastore is selected ('/*')."#,
        )
        .arg(filter_path_arg())
        .arg(filter_text_arg())
        .arg(registry_arg())
        .arg(filter_type_arg())
        .arg(select_arg())
        .arg(subscription_arg())
        .arg(json_arg())
        .arg(verbose_arg())
}

/// List the modules of a schema registry.
pub fn modules_command() -> Command {
    Command::new("modules")
        .about("List registry modules with their namespaces and top-level nodes")
        .after_help(
            r#"EXAMPLES:
  ncfilter modules -m modules.json
  ncfilter modules -m modules.json --json"#,
        )
        .arg(registry_arg())
        .arg(json_arg())
        .arg(verbose_arg())
}
