//! The built-in periodic table.
//!
//! Elements are stored in atomic-number order, so `ELEMENTS[n - 1]` is element `n`. A
//! compile-time map from symbol to table index gives constant-time symbol lookup.

use crate::core::models::element::{Element, ElementCategory};
use phf::{Map, phf_map};

use ElementCategory::*;

pub const ELEMENT_COUNT: usize = 118;

static ELEMENTS: [Element; ELEMENT_COUNT] = [
    Element::new(1, "H", "Hydrogen", 1.008, Nonmetal),
    Element::new(2, "He", "Helium", 4.0026, NobleGas),
    Element::new(3, "Li", "Lithium", 6.94, AlkaliMetal),
    Element::new(4, "Be", "Beryllium", 9.0122, AlkalineEarthMetal),
    Element::new(5, "B", "Boron", 10.81, Metalloid),
    Element::new(6, "C", "Carbon", 12.011, Nonmetal),
    Element::new(7, "N", "Nitrogen", 14.007, Nonmetal),
    Element::new(8, "O", "Oxygen", 15.999, Nonmetal),
    Element::new(9, "F", "Fluorine", 18.998, Halogen),
    Element::new(10, "Ne", "Neon", 20.180, NobleGas),
    Element::new(11, "Na", "Sodium", 22.990, AlkaliMetal),
    Element::new(12, "Mg", "Magnesium", 24.305, AlkalineEarthMetal),
    Element::new(13, "Al", "Aluminum", 26.982, PostTransitionMetal),
    Element::new(14, "Si", "Silicon", 28.085, Metalloid),
    Element::new(15, "P", "Phosphorus", 30.974, Nonmetal),
    Element::new(16, "S", "Sulfur", 32.06, Nonmetal),
    Element::new(17, "Cl", "Chlorine", 35.45, Halogen),
    Element::new(18, "Ar", "Argon", 39.948, NobleGas),
    Element::new(19, "K", "Potassium", 39.098, AlkaliMetal),
    Element::new(20, "Ca", "Calcium", 40.078, AlkalineEarthMetal),
    Element::new(21, "Sc", "Scandium", 44.956, TransitionMetal),
    Element::new(22, "Ti", "Titanium", 47.867, TransitionMetal),
    Element::new(23, "V", "Vanadium", 50.942, TransitionMetal),
    Element::new(24, "Cr", "Chromium", 51.996, TransitionMetal),
    Element::new(25, "Mn", "Manganese", 54.938, TransitionMetal),
    Element::new(26, "Fe", "Iron", 55.845, TransitionMetal),
    Element::new(27, "Co", "Cobalt", 58.933, TransitionMetal),
    Element::new(28, "Ni", "Nickel", 58.693, TransitionMetal),
    Element::new(29, "Cu", "Copper", 63.546, TransitionMetal),
    Element::new(30, "Zn", "Zinc", 65.38, TransitionMetal),
    Element::new(31, "Ga", "Gallium", 69.723, PostTransitionMetal),
    Element::new(32, "Ge", "Germanium", 72.630, Metalloid),
    Element::new(33, "As", "Arsenic", 74.922, Metalloid),
    Element::new(34, "Se", "Selenium", 78.971, Nonmetal),
    Element::new(35, "Br", "Bromine", 79.904, Halogen),
    Element::new(36, "Kr", "Krypton", 83.798, NobleGas),
    Element::new(37, "Rb", "Rubidium", 85.468, AlkaliMetal),
    Element::new(38, "Sr", "Strontium", 87.62, AlkalineEarthMetal),
    Element::new(39, "Y", "Yttrium", 88.906, TransitionMetal),
    Element::new(40, "Zr", "Zirconium", 91.224, TransitionMetal),
    Element::new(41, "Nb", "Niobium", 92.906, TransitionMetal),
    Element::new(42, "Mo", "Molybdenum", 95.95, TransitionMetal),
    Element::new(43, "Tc", "Technetium", 98.0, TransitionMetal),
    Element::new(44, "Ru", "Ruthenium", 101.07, TransitionMetal),
    Element::new(45, "Rh", "Rhodium", 102.91, TransitionMetal),
    Element::new(46, "Pd", "Palladium", 106.42, TransitionMetal),
    Element::new(47, "Ag", "Silver", 107.87, TransitionMetal),
    Element::new(48, "Cd", "Cadmium", 112.41, TransitionMetal),
    Element::new(49, "In", "Indium", 114.82, PostTransitionMetal),
    Element::new(50, "Sn", "Tin", 118.71, PostTransitionMetal),
    Element::new(51, "Sb", "Antimony", 121.76, Metalloid),
    Element::new(52, "Te", "Tellurium", 127.60, Metalloid),
    Element::new(53, "I", "Iodine", 126.90, Halogen),
    Element::new(54, "Xe", "Xenon", 131.29, NobleGas),
    Element::new(55, "Cs", "Cesium", 132.91, AlkaliMetal),
    Element::new(56, "Ba", "Barium", 137.33, AlkalineEarthMetal),
    Element::new(57, "La", "Lanthanum", 138.91, Lanthanide),
    Element::new(58, "Ce", "Cerium", 140.12, Lanthanide),
    Element::new(59, "Pr", "Praseodymium", 140.91, Lanthanide),
    Element::new(60, "Nd", "Neodymium", 144.24, Lanthanide),
    Element::new(61, "Pm", "Promethium", 145.0, Lanthanide),
    Element::new(62, "Sm", "Samarium", 150.36, Lanthanide),
    Element::new(63, "Eu", "Europium", 151.96, Lanthanide),
    Element::new(64, "Gd", "Gadolinium", 157.25, Lanthanide),
    Element::new(65, "Tb", "Terbium", 158.93, Lanthanide),
    Element::new(66, "Dy", "Dysprosium", 162.50, Lanthanide),
    Element::new(67, "Ho", "Holmium", 164.93, Lanthanide),
    Element::new(68, "Er", "Erbium", 167.26, Lanthanide),
    Element::new(69, "Tm", "Thulium", 168.93, Lanthanide),
    Element::new(70, "Yb", "Ytterbium", 173.05, Lanthanide),
    Element::new(71, "Lu", "Lutetium", 174.97, Lanthanide),
    Element::new(72, "Hf", "Hafnium", 178.49, TransitionMetal),
    Element::new(73, "Ta", "Tantalum", 180.95, TransitionMetal),
    Element::new(74, "W", "Tungsten", 183.84, TransitionMetal),
    Element::new(75, "Re", "Rhenium", 186.21, TransitionMetal),
    Element::new(76, "Os", "Osmium", 190.23, TransitionMetal),
    Element::new(77, "Ir", "Iridium", 192.22, TransitionMetal),
    Element::new(78, "Pt", "Platinum", 195.08, TransitionMetal),
    Element::new(79, "Au", "Gold", 196.97, TransitionMetal),
    Element::new(80, "Hg", "Mercury", 200.59, TransitionMetal),
    Element::new(81, "Tl", "Thallium", 204.38, PostTransitionMetal),
    Element::new(82, "Pb", "Lead", 207.2, PostTransitionMetal),
    Element::new(83, "Bi", "Bismuth", 208.98, PostTransitionMetal),
    Element::new(84, "Po", "Polonium", 209.0, PostTransitionMetal),
    Element::new(85, "At", "Astatine", 210.0, Halogen),
    Element::new(86, "Rn", "Radon", 222.0, NobleGas),
    Element::new(87, "Fr", "Francium", 223.0, AlkaliMetal),
    Element::new(88, "Ra", "Radium", 226.0, AlkalineEarthMetal),
    Element::new(89, "Ac", "Actinium", 227.0, Actinide),
    Element::new(90, "Th", "Thorium", 232.04, Actinide),
    Element::new(91, "Pa", "Protactinium", 231.04, Actinide),
    Element::new(92, "U", "Uranium", 238.03, Actinide),
    Element::new(93, "Np", "Neptunium", 237.0, Actinide),
    Element::new(94, "Pu", "Plutonium", 244.0, Actinide),
    Element::new(95, "Am", "Americium", 243.0, Actinide),
    Element::new(96, "Cm", "Curium", 247.0, Actinide),
    Element::new(97, "Bk", "Berkelium", 247.0, Actinide),
    Element::new(98, "Cf", "Californium", 251.0, Actinide),
    Element::new(99, "Es", "Einsteinium", 252.0, Actinide),
    Element::new(100, "Fm", "Fermium", 257.0, Actinide),
    Element::new(101, "Md", "Mendelevium", 258.0, Actinide),
    Element::new(102, "No", "Nobelium", 259.0, Actinide),
    Element::new(103, "Lr", "Lawrencium", 266.0, Actinide),
    Element::new(104, "Rf", "Rutherfordium", 267.0, TransitionMetal),
    Element::new(105, "Db", "Dubnium", 268.0, TransitionMetal),
    Element::new(106, "Sg", "Seaborgium", 269.0, TransitionMetal),
    Element::new(107, "Bh", "Bohrium", 270.0, TransitionMetal),
    Element::new(108, "Hs", "Hassium", 277.0, TransitionMetal),
    Element::new(109, "Mt", "Meitnerium", 278.0, TransitionMetal),
    Element::new(110, "Ds", "Darmstadtium", 281.0, TransitionMetal),
    Element::new(111, "Rg", "Roentgenium", 282.0, TransitionMetal),
    Element::new(112, "Cn", "Copernicium", 285.0, TransitionMetal),
    Element::new(113, "Nh", "Nihonium", 286.0, Unknown),
    Element::new(114, "Fl", "Flerovium", 289.0, Unknown),
    Element::new(115, "Mc", "Moscovium", 290.0, Unknown),
    Element::new(116, "Lv", "Livermorium", 293.0, Unknown),
    Element::new(117, "Ts", "Tennessine", 294.0, Unknown),
    Element::new(118, "Og", "Oganesson", 294.0, Unknown),
];

static SYMBOL_INDEX: Map<&'static str, usize> = phf_map! {
    "H" => 0, "He" => 1, "Li" => 2, "Be" => 3, "B" => 4, "C" => 5, "N" => 6, "O" => 7, "F" => 8,
    "Ne" => 9, "Na" => 10, "Mg" => 11, "Al" => 12, "Si" => 13, "P" => 14, "S" => 15, "Cl" => 16,
    "Ar" => 17, "K" => 18, "Ca" => 19, "Sc" => 20, "Ti" => 21, "V" => 22, "Cr" => 23,
    "Mn" => 24, "Fe" => 25, "Co" => 26, "Ni" => 27, "Cu" => 28, "Zn" => 29, "Ga" => 30,
    "Ge" => 31, "As" => 32, "Se" => 33, "Br" => 34, "Kr" => 35, "Rb" => 36, "Sr" => 37,
    "Y" => 38, "Zr" => 39, "Nb" => 40, "Mo" => 41, "Tc" => 42, "Ru" => 43, "Rh" => 44,
    "Pd" => 45, "Ag" => 46, "Cd" => 47, "In" => 48, "Sn" => 49, "Sb" => 50, "Te" => 51,
    "I" => 52, "Xe" => 53, "Cs" => 54, "Ba" => 55, "La" => 56, "Ce" => 57, "Pr" => 58,
    "Nd" => 59, "Pm" => 60, "Sm" => 61, "Eu" => 62, "Gd" => 63, "Tb" => 64, "Dy" => 65,
    "Ho" => 66, "Er" => 67, "Tm" => 68, "Yb" => 69, "Lu" => 70, "Hf" => 71, "Ta" => 72,
    "W" => 73, "Re" => 74, "Os" => 75, "Ir" => 76, "Pt" => 77, "Au" => 78, "Hg" => 79,
    "Tl" => 80, "Pb" => 81, "Bi" => 82, "Po" => 83, "At" => 84, "Rn" => 85, "Fr" => 86,
    "Ra" => 87, "Ac" => 88, "Th" => 89, "Pa" => 90, "U" => 91, "Np" => 92, "Pu" => 93,
    "Am" => 94, "Cm" => 95, "Bk" => 96, "Cf" => 97, "Es" => 98, "Fm" => 99, "Md" => 100,
    "No" => 101, "Lr" => 102, "Rf" => 103, "Db" => 104, "Sg" => 105, "Bh" => 106, "Hs" => 107,
    "Mt" => 108, "Ds" => 109, "Rg" => 110, "Cn" => 111, "Nh" => 112, "Fl" => 113, "Mc" => 114,
    "Lv" => 115, "Ts" => 116, "Og" => 117,
};
/// Looks up an element by its exact (case-sensitive) symbol.
pub fn by_symbol(symbol: &str) -> Option<&'static Element> {
    SYMBOL_INDEX
        .get(symbol.trim())
        .map(|&index| &ELEMENTS[index])
}

/// Looks up an element by atomic number (1-based).
pub fn by_number(atomic_number: u8) -> Option<&'static Element> {
    match atomic_number as usize {
        0 => None,
        n if n <= ELEMENT_COUNT => Some(&ELEMENTS[n - 1]),
        _ => None,
    }
}

pub fn all() -> &'static [Element] {
    &ELEMENTS
}

pub fn by_category(category: ElementCategory) -> impl Iterator<Item = &'static Element> {
    ELEMENTS.iter().filter(move |e| e.category == category)
}

pub fn is_known_symbol(symbol: &str) -> bool {
    SYMBOL_INDEX.contains_key(symbol.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn atomic_numbers_run_from_one_to_table_size_in_order() {
        for (i, element) in all().iter().enumerate() {
            assert_eq!(element.atomic_number as usize, i + 1, "{}", element.symbol);
        }
    }

    #[test]
    fn symbols_are_unique_and_indexed() {
        let symbols: HashSet<_> = all().iter().map(|e| e.symbol).collect();
        assert_eq!(symbols.len(), ELEMENT_COUNT);
        for element in all() {
            assert_eq!(by_symbol(element.symbol), Some(element));
        }
    }

    #[test]
    fn atomic_masses_are_positive_and_mostly_increasing() {
        assert!(all().iter().all(|e| e.atomic_mass > 0.0));
        assert!(by_number(1).unwrap().atomic_mass < by_number(118).unwrap().atomic_mass);
    }

    #[test]
    fn by_symbol_is_case_sensitive_and_trims_whitespace() {
        assert_eq!(by_symbol("Na").map(|e| e.name), Some("Sodium"));
        assert_eq!(by_symbol(" Cl ").map(|e| e.atomic_number), Some(17));
        assert!(by_symbol("na").is_none());
        assert!(by_symbol("Xx").is_none());
        assert!(by_symbol("").is_none());
    }

    #[test]
    fn by_number_rejects_zero_and_out_of_range() {
        assert!(by_number(0).is_none());
        assert!(by_number(119).is_none());
        assert_eq!(by_number(8).map(|e| e.symbol), Some("O"));
        assert_eq!(by_number(118).map(|e| e.symbol), Some("Og"));
    }

    #[test]
    fn by_category_returns_expected_families() {
        let noble: Vec<_> = by_category(ElementCategory::NobleGas)
            .map(|e| e.symbol)
            .collect();
        assert_eq!(noble, vec!["He", "Ne", "Ar", "Kr", "Xe", "Rn"]);
        assert_eq!(by_category(ElementCategory::Lanthanide).count(), 15);
        assert_eq!(by_category(ElementCategory::Actinide).count(), 15);
    }

    #[test]
    fn is_known_symbol_matches_lookup() {
        assert!(is_known_symbol("Fe"));
        assert!(!is_known_symbol("Fee"));
    }
}
