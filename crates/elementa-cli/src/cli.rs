use clap::{Args, Parser, Subcommand, ValueEnum};
use elementa::core::models::element::ElementCategory;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Elementa Contributors",
    version,
    about = "Elementa CLI - explore the periodic table, mix acids and bases, and try element reactions.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    /// Defaults to the per-user config file if it exists.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S mixing.reject-non-positive=true
    #[arg(short = 'S', long = "set", global = true, value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a single element by symbol or atomic number.
    Element(ElementArgs),
    /// List elements, optionally filtered by category.
    Elements(ElementsArgs),
    /// Place two to four elements in the reaction zone and see what happens.
    React(ReactArgs),
    /// Mix acids and bases and estimate the resulting pH.
    Mix(MixArgs),
    /// List the acid/base catalog.
    Substances(SubstancesArgs),
    /// List the reaction table.
    Reactions(ReactionsArgs),
    /// Look up the balanced form of a known equation.
    Balance(BalanceArgs),
    /// Compute the molar mass of a chemical formula.
    Mass(MassArgs),
}

#[derive(Args, Debug)]
pub struct ElementArgs {
    /// Element symbol (e.g. 'Na') or atomic number (e.g. 11).
    #[arg(required = true, value_name = "SYMBOL|NUMBER")]
    pub query: String,
}

#[derive(Args, Debug)]
pub struct ElementsArgs {
    /// Only list elements of this category (e.g. 'noble-gas').
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<ElementCategory>,
}

#[derive(Args, Debug)]
pub struct ReactArgs {
    /// Element symbols in placement order. Only the first two react.
    #[arg(required = true, num_args = 2..=4, value_name = "SYMBOL")]
    pub symbols: Vec<String>,

    /// Reject symbols that are not in the periodic table instead of reporting no reaction.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug)]
pub struct MixArgs {
    /// Acid to add, as ID or ID:CONCENTRATION (e.g. 'hcl:0.5'). Repeatable.
    #[arg(short, long = "acid", value_name = "ID[:CONC]")]
    pub acids: Vec<String>,

    /// Base to add, as ID or ID:CONCENTRATION (e.g. 'naoh:2'). Repeatable.
    #[arg(short, long = "base", value_name = "ID[:CONC]")]
    pub bases: Vec<String>,

    /// Name for the resulting solution.
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Override the concentration used when a portion gives none.
    #[arg(long, value_name = "FLOAT")]
    pub default_concentration: Option<f64>,

    /// Reject zero or negative concentrations, overriding the config file.
    #[arg(long)]
    pub strict: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindFilter {
    Acid,
    Base,
}

#[derive(Args, Debug)]
pub struct SubstancesArgs {
    /// Only list acids or bases.
    #[arg(long, value_enum)]
    pub kind: Option<KindFilter>,
}

#[derive(Args, Debug)]
pub struct ReactionsArgs {
    /// Report pairs defined under both orderings with different content.
    #[arg(long)]
    pub audit: bool,
}

#[derive(Args, Debug)]
pub struct BalanceArgs {
    /// The unbalanced equation, e.g. "H2 + O2 -> H2O". Omit to list known equations.
    #[arg(value_name = "EQUATION")]
    pub equation: Option<String>,
}

#[derive(Args, Debug)]
pub struct MassArgs {
    /// Chemical formula, e.g. 'Ca(OH)2' or 'CuSO4*5H2O'.
    #[arg(required = true, value_name = "FORMULA")]
    pub formula: String,

    /// Also print the atom count per element.
    #[arg(long)]
    pub composition: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn react_accepts_two_to_four_symbols() {
        assert!(Cli::try_parse_from(["elementa", "react", "Na"]).is_err());
        assert!(Cli::try_parse_from(["elementa", "react", "Na", "Cl"]).is_ok());
        assert!(Cli::try_parse_from(["elementa", "react", "H", "O", "Na", "Cl"]).is_ok());
        assert!(Cli::try_parse_from(["elementa", "react", "H", "O", "Na", "Cl", "K"]).is_err());
    }

    #[test]
    fn mix_collects_repeated_acids_and_bases() {
        let cli = Cli::try_parse_from([
            "elementa", "mix", "-a", "hcl", "--acid", "hno3:0.5", "-b", "naoh",
        ])
        .unwrap();
        match cli.command {
            Commands::Mix(args) => {
                assert_eq!(args.acids, vec!["hcl", "hno3:0.5"]);
                assert_eq!(args.bases, vec!["naoh"]);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn elements_category_uses_from_str() {
        let cli = Cli::try_parse_from(["elementa", "elements", "--category", "Noble Gas"]).unwrap();
        match cli.command {
            Commands::Elements(args) => {
                assert_eq!(args.category, Some(ElementCategory::NobleGas))
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert!(Cli::try_parse_from(["elementa", "elements", "--category", "gas"]).is_err());
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = Cli::try_parse_from([
            "elementa", "mass", "H2O", "-vv", "-S", "mixing.reject-non-positive=true",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.set_values, vec!["mixing.reject-non-positive=true"]);
    }
}
