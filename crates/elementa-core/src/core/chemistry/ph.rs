use crate::core::models::substance::AcidBaseSubstance;
use std::fmt;

pub const NEUTRAL_PH: f64 = 7.0;
pub const MIN_PH: f64 = 0.0;
pub const MAX_PH: f64 = 14.0;

/// Discrete display range of a pH value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorBucket {
    StrongAcidRed,
    WeakAcidOrange,
    NeutralGray,
    WeakBaseBlue,
    StrongBaseBlue,
}

impl ColorBucket {
    /// Classifies a pH value: `<3`, `[3,6]`, `(6,8)`, `[8,11)`, `>=11`.
    ///
    /// pH 6.0 is the reading of a 1 M strong acid and counts as weakly acidic.
    pub fn from_ph(ph: f64) -> Self {
        if ph < 3.0 {
            ColorBucket::StrongAcidRed
        } else if ph <= 6.0 {
            ColorBucket::WeakAcidOrange
        } else if ph < 8.0 {
            ColorBucket::NeutralGray
        } else if ph < 11.0 {
            ColorBucket::WeakBaseBlue
        } else {
            ColorBucket::StrongBaseBlue
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorBucket::StrongAcidRed => "strong-acid-red",
            ColorBucket::WeakAcidOrange => "weak-acid-orange",
            ColorBucket::NeutralGray => "neutral-gray",
            ColorBucket::WeakBaseBlue => "weak-base-blue",
            ColorBucket::StrongBaseBlue => "strong-base-blue",
        }
    }
}

impl fmt::Display for ColorBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhEstimate {
    pub ph: f64,
    pub color_bucket: ColorBucket,
    /// Weighted acid score minus weighted base score.
    pub net_acidity: f64,
}

impl PhEstimate {
    pub fn neutral() -> Self {
        Self {
            ph: NEUTRAL_PH,
            color_bucket: ColorBucket::NeutralGray,
            net_acidity: 0.0,
        }
    }
}

/// Sum of `concentration * strength factor` over `substances`.
pub fn weighted_score(substances: &[AcidBaseSubstance]) -> f64 {
    substances
        .iter()
        .map(AcidBaseSubstance::weighted_concentration)
        .sum()
}

/// Maps a net acidity onto the 0..=14 scale.
///
/// `log10` is only evaluated on a strictly positive argument. A zero (or NaN) net
/// acidity is neutral.
pub fn ph_from_net_acidity(net_acidity: f64) -> f64 {
    let ph = if net_acidity > 0.0 {
        (NEUTRAL_PH - (net_acidity * 10.0).log10()).max(MIN_PH)
    } else if net_acidity < 0.0 {
        (NEUTRAL_PH + (net_acidity.abs() * 10.0).log10()).min(MAX_PH)
    } else {
        NEUTRAL_PH
    };
    ph.clamp(MIN_PH, MAX_PH)
}

/// Estimates the pH of a mixture of acids and bases.
///
/// Kinds are taken from list membership, not from each substance's `kind` field.
/// Concentrations are not validated: out-of-range values flow through the arithmetic and
/// still produce a clamped pH.
pub fn estimate(acids: &[AcidBaseSubstance], bases: &[AcidBaseSubstance]) -> PhEstimate {
    if acids.is_empty() && bases.is_empty() {
        return PhEstimate::neutral();
    }

    let net_acidity = weighted_score(acids) - weighted_score(bases);
    let ph = ph_from_net_acidity(net_acidity);
    PhEstimate {
        ph,
        color_bucket: ColorBucket::from_ph(ph),
        net_acidity,
    }
}
