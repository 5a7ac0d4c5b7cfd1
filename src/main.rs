#![deny(unsafe_code)]

use std::io::IsTerminal;

use anyhow::Result;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::Parser;
use env_logger::Env;
use log::info;

use strategy_sort::employee::{sample_staff, Field};
use strategy_sort::report::Report;
use strategy_sort::{Algorithm, SortContext, SortStrategy};

/// Custom styles for CLI help output
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// Sorts the sample staff list with the chosen algorithm and prints it before and after.
#[derive(Parser, Debug)]
#[command(version, styles = STYLES)]
struct Args {
    /// Sort algorithm: bubble, insertion, selection, merge or quick.
    #[arg(short = 'a', long = "algorithm", default_value = "quick")]
    algorithm: Algorithm,

    /// Field to sort by: age, name or surname.
    #[arg(short = 'f', long = "field", default_value = "name")]
    field: Field,

    /// Print without ANSI colors.
    #[arg(long = "plain")]
    plain: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    info!(
        "Sorting the sample staff by {} with {} sort",
        args.field, args.algorithm
    );

    let context = SortContext::new(args.algorithm);
    let before = sample_staff();
    let after = context.sort(before.clone(), args.field.comparator());

    let report = Report {
        before: &before,
        after: &after,
        strategy: context.strategy().name(),
        field: args.field,
        styled: !args.plain && std::io::stdout().is_terminal(),
    };
    print!("{report}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_is_a_flag() {
        let args = Args::try_parse_from(["strategy_sort"]).unwrap();
        assert!(!args.plain);
        assert_eq!(args.algorithm, Algorithm::Quick);

        let args = Args::try_parse_from(["strategy_sort", "--plain", "-a", "merge"]).unwrap();
        assert!(args.plain);
        assert_eq!(args.algorithm, Algorithm::Merge);

        assert!(Args::try_parse_from(["strategy_sort", "--plain=false"]).is_err());
    }
}
