use crate::cli::ReactArgs;
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use elementa::core::data::elements;
use elementa::workflows;
use tracing::info;

pub fn run(args: ReactArgs, config: &AppConfig) -> Result<()> {
    if args.strict {
        if let Some(unknown) = args.symbols.iter().find(|s| !elements::is_known_symbol(s)) {
            return Err(CliError::Argument(format!(
                "'{}' is not an element symbol",
                unknown
            )));
        }
    }

    let symbols: Vec<&str> = args.symbols.iter().map(String::as_str).collect();
    info!("Placing {:?} in the reaction zone.", symbols);
    let outcome = workflows::react::run(&config.reactions, &symbols)?;

    let (a, b) = &outcome.reactants;
    println!("{} + {} => {}", a, b, outcome.result.result);
    println!("  {}", outcome.result.description);
    println!("  Effect: {}", outcome.result.animation);
    if !outcome.ignored.is_empty() {
        println!(
            "  Not reacting: {} (only the first two elements react)",
            outcome.ignored.join(", ")
        );
    }
    Ok(())
}
