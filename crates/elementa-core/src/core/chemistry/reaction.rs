use crate::core::data::reactions::BuiltinReactions;
use crate::core::models::reaction::{ReactionResult, pair_key};

/// Anything that can answer a lookup for one ordered `"A-B"` key.
pub trait CombinationSource {
    fn lookup(&self, key: &str) -> Option<ReactionResult>;
}

/// Resolves a pair of element symbols against `source`.
///
/// The forward key `"A-B"` is tried first, then `"B-A"`. When neither is present the
/// "No Reaction" result is returned, so resolution never fails. Symbols are used
/// verbatim: no trimming and no case folding.
pub fn resolve_with<S>(source: &S, a: &str, b: &str) -> ReactionResult
where
    S: CombinationSource + ?Sized,
{
    source
        .lookup(&pair_key(a, b))
        .or_else(|| source.lookup(&pair_key(b, a)))
        .unwrap_or_else(|| ReactionResult::no_reaction(a, b))
}

/// Resolves a pair of element symbols against the built-in reaction table.
pub fn resolve(a: &str, b: &str) -> ReactionResult {
    resolve_with(&BuiltinReactions, a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::reactions::ReactionTable;
    use crate::core::models::reaction::{AnimationCategory, ReactionCombination};

    #[test]
    fn sodium_and_chlorine_crystallize_into_table_salt() {
        let result = resolve("Na", "Cl");
        assert!(result.result.contains("NaCl"));
        assert_eq!(result.animation, AnimationCategory::Crystallization);
    }

    #[test]
    fn resolution_is_order_independent_for_builtin_pairs() {
        assert_eq!(resolve("Na", "Cl"), resolve("Cl", "Na"));
        assert_eq!(resolve("O", "H"), resolve("H", "O"));
    }

    #[test]
    fn unknown_symbols_fall_through_to_no_reaction() {
        let result = resolve("Xx", "Yy");
        assert!(result.is_no_reaction());
        assert_eq!(result.animation, AnimationCategory::Fade);
        assert!(result.description.contains("Xx") && result.description.contains("Yy"));
    }

    #[test]
    fn known_elements_without_entry_do_not_react() {
        assert!(resolve("He", "Ne").is_no_reaction());
        assert!(resolve("Na", "Na").is_no_reaction());
    }

    #[test]
    fn symbols_are_matched_verbatim() {
        assert!(resolve("na", "cl").is_no_reaction());
        assert!(resolve(" Na", "Cl").is_no_reaction());
    }

    #[test]
    fn forward_key_wins_when_both_orientations_exist() {
        let mut table = ReactionTable::new();
        table
            .insert(
                "H-O",
                ReactionCombination::new("Water", "forward", AnimationCategory::Explosion),
            )
            .unwrap();
        table
            .insert(
                "O-H",
                ReactionCombination::new("Hydroxyl", "reverse", AnimationCategory::Gas),
            )
            .unwrap();

        assert_eq!(resolve_with(&table, "H", "O").result, "Water");
        assert_eq!(resolve_with(&table, "O", "H").result, "Hydroxyl");
    }

    #[test]
    fn reversed_key_is_used_when_forward_is_absent() {
        let mut table = ReactionTable::new();
        table
            .insert(
                "Ag-Cl",
                ReactionCombination::new("AgCl", "precipitate", AnimationCategory::Precipitation),
            )
            .unwrap();
        let result = resolve_with(&table, "Cl", "Ag");
        assert_eq!(result.result, "AgCl");
        assert_eq!(result.animation, AnimationCategory::Precipitation);
    }

    #[test]
    fn resolution_is_deterministic() {
        for _ in 0..3 {
            assert_eq!(resolve("Mg", "O"), resolve("Mg", "O"));
        }
    }
}
