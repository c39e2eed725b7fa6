use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Flags that may also be spelled with a single dash (`-src`, `-dst=...`)
const SINGLE_DASH_FLAGS: &[&str] = &["src", "dst"];

/// Monitoring Mixin Bumper
///
/// Copies the jsonnet sources of the monitoring mixins from one checkout into
/// another. Dashboards and alerts already present under the destination's
/// `mixins/grafana_dashboards` and `mixins/prometheus` are refreshed from the
/// source, and `mixins/lib/config_util.libsonnet` is always taken from the
/// source.
///
/// ## Usage
/// ```bash
/// bump-monitoring -src ../prow/config/prow/cluster/monitoring -dst ./monitoring
/// ```
///
/// ## Environment Variables
/// - `RUST_LOG`: Controls logging verbosity (trace, debug, info, warn, error); defaults to info
#[derive(Parser, Debug, Clone)]
#[command(name = "bump-monitoring")]
#[command(about = "Copy monitoring mixin sources between two directory trees")]
#[command(version)]
#[command(
    long_about = "Copies .jsonnet and .libsonnet monitoring mixin files from a source tree into a destination tree. \nExisting destination files are overwritten; missing destination directories are an error."
)]
pub struct Cli {
    /// Source root; required configs are looked up here and every file is read from here.
    ///
    /// Empty or omitted means the current directory.
    #[arg(
        long = "src",
        value_name = "DIR",
        help = "Src dir of monitoring",
        long_help = "Source root directory. Required configs are looked up under it and every collected file is read from it."
    )]
    pub src: Option<OsString>,

    /// Destination root; optional configs are looked up here and every file is written here.
    ///
    /// Empty or omitted means the current directory.
    #[arg(
        long = "dst",
        value_name = "DIR",
        help = "Dst dir of monitoring",
        long_help = "Destination root directory. Optional configs are discovered under it and every collected file is written into it."
    )]
    pub dst: Option<OsString>,
}

impl Cli {
    /// Parse the process arguments into a configuration
    ///
    /// Exits with clap's usage message on invalid arguments.
    pub fn parse_config() -> Config {
        Self::try_parse_config_from(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    /// Parse an explicit argument list, first item being the program name
    pub fn try_parse_config_from<I, T>(args: I) -> Result<Config, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Ok(Self::try_parse_from(normalize_args(args))?.into_config())
    }

    pub fn into_config(self) -> Config {
        Config::new(
            self.src.map(PathBuf::from).unwrap_or_default(),
            self.dst.map(PathBuf::from).unwrap_or_default(),
        )
    }
}

/// Rewrite `-src`/`-dst` (and their `=value` forms) to their `--` spelling
///
/// The program name and anything after a `--` terminator are left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut terminated = false;

    args.into_iter()
        .map(Into::into)
        .enumerate()
        .map(|(index, arg)| {
            if index == 0 || terminated {
                return arg;
            }
            if arg == "--" {
                terminated = true;
                return arg;
            }
            match arg.to_str() {
                Some(flag) if is_single_dash_flag(flag) => OsString::from(format!("-{}", flag)),
                _ => arg,
            }
        })
        .collect()
}

fn is_single_dash_flag(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };

    SINGLE_DASH_FLAGS.iter().any(|name| {
        rest.strip_prefix(name)
            .is_some_and(|tail| tail.is_empty() || tail.starts_with('='))
    })
}
