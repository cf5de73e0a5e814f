use crate::cli::{KindFilter, ReactionsArgs, SubstancesArgs};
use crate::config::AppConfig;
use crate::error::Result;
use elementa::core::models::substance::SubstanceKind;
use tracing::warn;

pub fn run_substances(args: SubstancesArgs, config: &AppConfig) -> Result<()> {
    let kind = args.kind.map(|k| match k {
        KindFilter::Acid => SubstanceKind::Acid,
        KindFilter::Base => SubstanceKind::Base,
    });
    let mut count = 0;
    for substance in config
        .substances
        .iter()
        .filter(|s| kind.is_none_or(|k| s.kind == k))
    {
        println!(
            "{:<10} {:<22} {:<9} {:<4} {:<6} {:>6.2} M  {}",
            substance.id,
            substance.name,
            substance.formula,
            substance.kind,
            substance.strength,
            substance.concentration,
            substance.color
        );
        count += 1;
    }
    println!("{} substance(s)", count);
    Ok(())
}

pub fn run_reactions(args: ReactionsArgs, config: &AppConfig) -> Result<()> {
    if args.audit {
        let asymmetric = config.reactions.asymmetric_pairs();
        if asymmetric.is_empty() {
            println!("No asymmetric pairs: every pair resolves the same in both orders.");
        }
        for (forward, reversed) in &asymmetric {
            warn!("Asymmetric pair {} / {}", forward, reversed);
            println!("{} and {} disagree; '{}' wins for that order.", forward, reversed, forward);
        }
        return Ok(());
    }

    for (key, combo) in config.reactions.iter() {
        println!("{:<8} {:<30} {}", key, combo.result, combo.animation);
    }
    println!("{} reaction(s)", config.reactions.len());
    Ok(())
}
