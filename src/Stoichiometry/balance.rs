use super::coefficient::{CoefficientInput, UserCoefficients};
use super::formula_parser::{parse_formula, ElementCount};
use std::collections::HashSet;

/// Total atom counts for one side of an equation: per-formula composition
/// weighted by the effective multiplier of the paired coefficient. A missing
/// coefficient behaves like a blank box.
pub fn calculate_atom_counts(
    formulas: &[String],
    coefficients: &[CoefficientInput],
) -> ElementCount {
    let mut totals = ElementCount::new();
    for (i, formula) in formulas.iter().enumerate() {
        let multiplier = coefficients
            .get(i)
            .copied()
            .unwrap_or(CoefficientInput::Empty)
            .effective_multiplier();
        for (symbol, count) in parse_formula(formula) {
            *totals.entry(symbol).or_insert(0) += count * multiplier;
        }
    }
    totals
}

/// Same as [`calculate_atom_counts`], starting from raw coefficient strings.
pub fn atom_counts_for_side(formulas: &[String], raw_coefficients: &[String]) -> ElementCount {
    let coefficients: Vec<CoefficientInput> = raw_coefficients
        .iter()
        .map(|raw| CoefficientInput::parse(raw))
        .collect();
    calculate_atom_counts(formulas, &coefficients)
}

/// Verdict for a user's attempt at balancing `reactants -> products`. True
/// iff the equation contributes at least one element, every element occurs
/// in equal total amounts on both sides and every coefficient box holds a
/// valid positive integer. Blank boxes are counted with multiplier 1 during
/// aggregation but fail the final validation, so an unfilled answer is never
/// accepted.
pub fn check_balance(reactants: &[String], products: &[String], user: &UserCoefficients) -> bool {
    let reactant_atoms = atom_counts_for_side(reactants, &user.reactants);
    let product_atoms = atom_counts_for_side(products, &user.products);

    let all_elements: HashSet<&str> = reactant_atoms
        .keys()
        .chain(product_atoms.keys())
        .map(|symbol| symbol.as_str())
        .collect();
    if all_elements.is_empty() {
        return false;
    }
    for element in all_elements {
        let in_reactants = reactant_atoms.get(element).copied().unwrap_or(0);
        let in_products = product_atoms.get(element).copied().unwrap_or(0);
        if in_reactants != in_products {
            return false;
        }
    }
    user.all()
        .all(|raw| CoefficientInput::parse(raw).is_valid())
}
