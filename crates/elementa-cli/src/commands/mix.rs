use crate::cli::MixArgs;
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::utils::parser;
use elementa::engine::config::{MixConfig, MixConfigBuilder};
use elementa::engine::solution::Solution;
use elementa::workflows::{self, mix::MixRequest};
use tracing::info;

pub fn run(args: MixArgs, config: &AppConfig) -> Result<()> {
    let request = MixRequest {
        name: args.name.clone(),
        acids: parser::parse_portions(&args.acids)
            .map_err(|e| CliError::Argument(e.to_string()))?,
        bases: parser::parse_portions(&args.bases)
            .map_err(|e| CliError::Argument(e.to_string()))?,
    };
    let mix_config = merge_with_cli(&config.mix, &args)?;

    info!(
        "Mixing {} acid(s) and {} base(s).",
        request.acids.len(),
        request.bases.len()
    );
    let solution = workflows::mix::run(&config.substances, &request, &mix_config)?;
    print!("{}", render(&solution));
    Ok(())
}

fn merge_with_cli(base: &MixConfig, args: &MixArgs) -> Result<MixConfig> {
    let mut builder =
        MixConfigBuilder::new().reject_non_positive(args.strict || base.reject_non_positive);
    if let Some(concentration) = args.default_concentration.or(base.default_concentration) {
        builder = builder.default_concentration(concentration);
    }
    Ok(builder.build()?)
}

fn render(solution: &Solution) -> String {
    let mut out = format!("{}\n", solution.name());
    for (label, list) in [("Acids", solution.acids()), ("Bases", solution.bases())] {
        if list.is_empty() {
            continue;
        }
        out.push_str(&format!("  {}:\n", label));
        for substance in list {
            out.push_str(&format!(
                "    {:<22} {:<9} {:>6} {:.3} M\n",
                substance.name, substance.formula, substance.strength, substance.concentration
            ));
        }
    }
    let estimate = solution.estimate();
    out.push_str(&format!(
        "  pH: {:.2}  [{}]  (net acidity {:+.3})\n",
        estimate.ph, estimate.color_bucket, estimate.net_acidity
    ));
    out
}
