use crate::cli::MassArgs;
use crate::error::Result;
use elementa::core::chemistry::molar_mass;
use elementa::core::data::elements;

pub fn run(args: MassArgs) -> Result<()> {
    let mass = molar_mass::molar_mass(&args.formula)?;
    println!("{}: {:.3} g/mol", args.formula.trim(), mass);

    if args.composition {
        for (symbol, count) in molar_mass::parse_formula(&args.formula)? {
            let atomic_mass = elements::by_symbol(symbol).map_or(0.0, |e| e.atomic_mass);
            let share = atomic_mass * count as f64 / mass * 100.0;
            println!("  {:<3} x{:<3} {:>6.2}%", symbol, count, share);
        }
    }
    Ok(())
}
