//! Dictionary of textbook equations with their balanced forms.
//!
//! There is no balancing algorithm here: only equations present in the dictionary can be
//! balanced. Lookup ignores whitespace and accepts `->`, `→` or `=` as the arrow.

use phf::{Map, phf_map};

static KNOWN_EQUATIONS: Map<&'static str, &'static str> = phf_map! {
    "H2+O2->H2O" => "2H2 + O2 -> 2H2O",
    "Na+Cl2->NaCl" => "2Na + Cl2 -> 2NaCl",
    "CH4+O2->CO2+H2O" => "CH4 + 2O2 -> CO2 + 2H2O",
    "N2+H2->NH3" => "N2 + 3H2 -> 2NH3",
    "Fe+O2->Fe2O3" => "4Fe + 3O2 -> 2Fe2O3",
    "Mg+O2->MgO" => "2Mg + O2 -> 2MgO",
    "Al+O2->Al2O3" => "4Al + 3O2 -> 2Al2O3",
    "C3H8+O2->CO2+H2O" => "C3H8 + 5O2 -> 3CO2 + 4H2O",
    "C6H12O6+O2->CO2+H2O" => "C6H12O6 + 6O2 -> 6CO2 + 6H2O",
    "H2O2->H2O+O2" => "2H2O2 -> 2H2O + O2",
    "KClO3->KCl+O2" => "2KClO3 -> 2KCl + 3O2",
    "Zn+HCl->ZnCl2+H2" => "Zn + 2HCl -> ZnCl2 + H2",
    "HCl+NaOH->NaCl+H2O" => "HCl + NaOH -> NaCl + H2O",
    "H2SO4+NaOH->Na2SO4+H2O" => "H2SO4 + 2NaOH -> Na2SO4 + 2H2O",
    "CaCO3->CaO+CO2" => "CaCO3 -> CaO + CO2",
    "Na+H2O->NaOH+H2" => "2Na + 2H2O -> 2NaOH + H2",
    "Fe+Cl2->FeCl3" => "2Fe + 3Cl2 -> 2FeCl3",
    "P4+O2->P4O10" => "P4 + 5O2 -> P4O10",
    "AgNO3+NaCl->AgCl+NaNO3" => "AgNO3 + NaCl -> AgCl + NaNO3",
    "C2H5OH+O2->CO2+H2O" => "C2H5OH + 3O2 -> 2CO2 + 3H2O",
};

fn normalize(equation: &str) -> String {
    equation
        .replace('→', "->")
        .replace('=', "->")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Returns the balanced form of a known equation.
pub fn balance(equation: &str) -> Option<&'static str> {
    KNOWN_EQUATIONS.get(normalize(equation).as_str()).copied()
}

/// All known equations as `(unbalanced_key, balanced)` pairs, sorted by key.
pub fn known_equations() -> Vec<(&'static str, &'static str)> {
    let mut equations: Vec<_> = KNOWN_EQUATIONS.entries().map(|(k, v)| (*k, *v)).collect();
    equations.sort_unstable();
    equations
}
