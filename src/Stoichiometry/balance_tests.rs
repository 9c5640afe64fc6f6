#[cfg(test)]
mod tests {
    use crate::Stoichiometry::balance::{
        atom_counts_for_side, calculate_atom_counts, check_balance,
    };
    use crate::Stoichiometry::coefficient::{CoefficientInput, UserCoefficients};
    use crate::Stoichiometry::formula_parser::parse_formula;
    use std::collections::HashMap;

    fn side(formulas: &[&str]) -> Vec<String> {
        formulas.iter().map(|f| f.to_string()).collect()
    }

    fn coeffs(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_calculate_atom_counts_weighted_sum() {
        let formulas = side(&["CH4", "O2"]);
        let coefficients = vec![CoefficientInput::Valid(1), CoefficientInput::Valid(2)];
        let totals = calculate_atom_counts(&formulas, &coefficients);
        assert_eq!(
            totals,
            HashMap::from([
                ("C".to_string(), 1),
                ("H".to_string(), 4),
                ("O".to_string(), 4)
            ])
        );
    }

    #[test]
    fn test_calculate_atom_counts_blank_counts_as_one() {
        let formulas = side(&["H2", "O2"]);
        // second coefficient missing entirely, first one blank
        let totals = calculate_atom_counts(&formulas, &[CoefficientInput::Empty]);
        assert_eq!(
            totals,
            HashMap::from([("H".to_string(), 2), ("O".to_string(), 2)])
        );
    }

    #[test]
    fn test_calculate_atom_counts_matches_per_formula_parses() {
        // the aggregate is the multiplier-weighted sum of the individual
        // formula parses, element by element
        let formulas = side(&["KMnO4", "HCl", "H2O"]);
        let coefficients: Vec<CoefficientInput> = ["2", "16", ""]
            .iter()
            .map(|c| CoefficientInput::parse(c))
            .collect();
        let totals = calculate_atom_counts(&formulas, &coefficients);

        let mut expected = HashMap::new();
        for (formula, coefficient) in formulas.iter().zip(&coefficients) {
            for (symbol, count) in parse_formula(formula) {
                *expected.entry(symbol).or_insert(0) += count * coefficient.effective_multiplier();
            }
        }
        assert_eq!(totals, expected);
        assert_eq!(expected.get("Cl"), Some(&16));
        assert_eq!(expected.get("H"), Some(&18));
    }

    #[test]
    fn test_atom_counts_for_side_from_raw_strings() {
        let totals = atom_counts_for_side(&side(&["Fe2O3", "CO"]), &coeffs(&["1", "3"]));
        assert_eq!(
            totals,
            HashMap::from([
                ("Fe".to_string(), 2),
                ("O".to_string(), 6),
                ("C".to_string(), 3)
            ])
        );
        // garbage raw input behaves like a blank box
        let totals = atom_counts_for_side(&side(&["H2O"]), &coeffs(&["abc"]));
        assert_eq!(
            totals,
            HashMap::from([("H".to_string(), 2), ("O".to_string(), 1)])
        );
    }

    #[test]
    fn test_check_balance_correct_answer() {
        let reactants = side(&["H2", "O2"]);
        let products = side(&["H2O"]);
        let user = UserCoefficients {
            reactants: coeffs(&["2", "1"]),
            products: coeffs(&["2"]),
        };
        assert!(check_balance(&reactants, &products, &user));

        let reactants = side(&["CH4", "O2"]);
        let products = side(&["CO2", "H2O"]);
        let user = UserCoefficients {
            reactants: coeffs(&["1", "2"]),
            products: coeffs(&["1", "2"]),
        };
        assert!(check_balance(&reactants, &products, &user));
    }

    #[test]
    fn test_check_balance_is_symmetric() {
        let reactants = side(&["H2", "O2"]);
        let products = side(&["H2O"]);
        let forward = UserCoefficients {
            reactants: coeffs(&["2", "1"]),
            products: coeffs(&["2"]),
        };
        let backward = UserCoefficients {
            reactants: forward.products.clone(),
            products: forward.reactants.clone(),
        };
        assert_eq!(
            check_balance(&reactants, &products, &forward),
            check_balance(&products, &reactants, &backward)
        );

        let unbalanced = UserCoefficients {
            reactants: coeffs(&["1", "1"]),
            products: coeffs(&["1"]),
        };
        let unbalanced_swapped = UserCoefficients {
            reactants: unbalanced.products.clone(),
            products: unbalanced.reactants.clone(),
        };
        assert_eq!(
            check_balance(&reactants, &products, &unbalanced),
            check_balance(&products, &reactants, &unbalanced_swapped)
        );
    }

    #[test]
    fn test_check_balance_multi_product_equation() {
        let reactants = side(&["KMnO4", "HCl"]);
        let products = side(&["KCl", "MnCl2", "H2O", "Cl2"]);
        let user = UserCoefficients {
            reactants: coeffs(&["2", "16"]),
            products: coeffs(&["2", "2", "8", "5"]),
        };
        assert!(check_balance(&reactants, &products, &user));
    }

    #[test]
    fn test_check_balance_wrong_coefficients() {
        // H matches (2 vs 2), O alone is off (2 vs 1)
        let reactants = side(&["H2", "O2"]);
        let products = side(&["H2O"]);
        let user = UserCoefficients {
            reactants: coeffs(&["1", "1"]),
            products: coeffs(&["1"]),
        };
        assert!(!check_balance(&reactants, &products, &user));
    }

    #[test]
    fn test_check_balance_rejects_blank_boxes() {
        // with the multiplier-1 fallback the atom counts match, yet a blank
        // box must never pass
        let reactants = side(&["H2", "Cl2"]);
        let products = side(&["HCl"]);
        let user = UserCoefficients {
            reactants: coeffs(&["", ""]),
            products: coeffs(&["2"]),
        };
        assert!(!check_balance(&reactants, &products, &user));

        // all boxes blank on an equation that balances with ones: the
        // element counts come out equal, the rejection comes from the
        // validity pass
        let reactants = side(&["C", "O2"]);
        let products = side(&["CO2"]);
        let user = UserCoefficients::blank(2, 1);
        assert!(!check_balance(&reactants, &products, &user));

        // a single blank inside an otherwise correct solution: 2 H2 + O2 ->
        // 2 H2O with the O2 box empty still balances count-wise (blank = 1)
        // and must still be refused
        let reactants = side(&["H2", "O2"]);
        let products = side(&["H2O"]);
        let user = UserCoefficients {
            reactants: coeffs(&["2", ""]),
            products: coeffs(&["2"]),
        };
        assert!(!check_balance(&reactants, &products, &user));
    }

    #[test]
    fn test_check_balance_rejects_invalid_coefficients() {
        let reactants = side(&["C", "O2"]);
        let products = side(&["CO2"]);
        for bad in ["0", "-1", "1.5", "abc"] {
            let user = UserCoefficients {
                reactants: coeffs(&["1", bad]),
                products: coeffs(&["1"]),
            };
            assert!(
                !check_balance(&reactants, &products, &user),
                "coefficient {:?} must be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_check_balance_accepts_padded_input() {
        let reactants = side(&["C", "O2"]);
        let products = side(&["CO2"]);
        let user = UserCoefficients {
            reactants: coeffs(&[" 1 ", "1"]),
            products: coeffs(&["1 "]),
        };
        assert!(check_balance(&reactants, &products, &user));
    }

    #[test]
    fn test_check_balance_no_elements_at_all() {
        // formulas outside the token grammar contribute nothing, leaving an
        // empty element union
        let reactants = side(&["123"]);
        let products = side(&["()"]);
        let user = UserCoefficients {
            reactants: coeffs(&["1"]),
            products: coeffs(&["1"]),
        };
        assert!(!check_balance(&reactants, &products, &user));
        assert!(!check_balance(&[], &[], &UserCoefficients::default()));
    }
}
