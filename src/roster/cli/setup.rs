use clap::Parser;
use std::path::PathBuf;

/// Returns the version string, including the git hash for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "roster", bin_name = "roster", version = get_version())]
#[command(about = "Interactive in-memory student roster", long_about = None)]
pub struct Cli {
    /// Config file (defaults to the user config dir)
    #[arg(long, env = "ROSTER_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags() {
        let cli =
            Cli::try_parse_from(["roster", "--no-color", "-v", "--config", "x.json"]).unwrap();
        assert!(cli.no_color);
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("x.json")));
    }

    #[test]
    fn flags_default_off() {
        let cli = Cli::try_parse_from(["roster"]).unwrap();
        assert!(!cli.no_color);
        assert!(!cli.verbose);
    }

    #[test]
    fn rejects_positional_args() {
        assert!(Cli::try_parse_from(["roster", "add"]).is_err());
    }

    #[test]
    fn version_starts_with_package_version() {
        assert!(get_version().starts_with(env!("CARGO_PKG_VERSION")));
    }
}
