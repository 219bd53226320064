use clap::{value_parser, Parser};

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Current step number (1-based)
    #[arg(long, value_name = "N", value_parser = value_parser!(u64).range(1..))]
    pub stepno: u64,

    /// Total number of build steps
    #[arg(long, value_name = "N", value_parser = value_parser!(u64).range(1..))]
    pub nsteps: u64,

    /// Free-form label printed after the bar (e.g. the file being built)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub remainder: Vec<String>,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags_and_remainder_in_order() {
        let cli = Cli::try_parse_from([
            "echo-progress",
            "--stepno",
            "3",
            "--nsteps",
            "10",
            "building",
            "foo.c",
        ])
        .unwrap();

        assert_eq!(cli.stepno, 3);
        assert_eq!(cli.nsteps, 10);
        assert_eq!(cli.remainder, ["building", "foo.c"]);
    }

    #[test]
    fn remainder_may_be_empty() {
        let cli = Cli::try_parse_from(["echo-progress", "--stepno", "1", "--nsteps", "1"]).unwrap();
        assert!(cli.remainder.is_empty());
    }

    #[test]
    fn remainder_keeps_hyphenated_tokens() {
        let cli = Cli::try_parse_from([
            "echo-progress",
            "--stepno",
            "2",
            "--nsteps",
            "4",
            "cc",
            "-O2",
            "bar.c",
        ])
        .unwrap();

        assert_eq!(cli.remainder, ["cc", "-O2", "bar.c"]);
    }

    #[test]
    fn rejects_zero_counts() {
        assert!(Cli::try_parse_from(["echo-progress", "--stepno", "0", "--nsteps", "5"]).is_err());
        assert!(Cli::try_parse_from(["echo-progress", "--stepno", "1", "--nsteps", "0"]).is_err());
    }

    #[test]
    fn both_counters_are_required() {
        assert!(Cli::try_parse_from(["echo-progress", "--nsteps", "5"]).is_err());
        assert!(Cli::try_parse_from(["echo-progress", "--stepno", "1"]).is_err());
    }
}
