use crate::cli::BalanceArgs;
use crate::error::{CliError, Result};
use elementa::core::data::equations;

pub fn run(args: BalanceArgs) -> Result<()> {
    match args.equation {
        Some(equation) => {
            let balanced = equations::balance(&equation).ok_or_else(|| {
                CliError::Argument(format!(
                    "'{}' is not a known equation. Run 'elementa balance' to list them.",
                    equation
                ))
            })?;
            println!("{}", balanced);
        }
        None => {
            for (_, balanced) in equations::known_equations() {
                println!("{}", balanced);
            }
        }
    }
    Ok(())
}
