pub fn quiz_examples(task: usize) {
    //
    match task {
        0 => {
            // FORMULA PARSING
            use crate::Stoichiometry::formula_parser::parse_formula;
            use std::collections::HashMap;
            let formula = "C6H12O6";
            let atoms = parse_formula(formula);
            println!("{} -> {:?}", formula, atoms);
            assert_eq!(
                atoms,
                HashMap::from([
                    ("C".to_string(), 6),
                    ("H".to_string(), 12),
                    ("O".to_string(), 6)
                ])
            );

            // repeated symbols are summed
            let formula = "CH3COOH";
            println!("{} -> {:?}", formula, parse_formula(formula));

            // characters outside the token grammar contribute nothing
            let formula = "H2O(g)";
            println!("{} -> {:?}", formula, parse_formula(formula));
        }
        1 => {
            // BALANCE CHECKING
            use crate::Stoichiometry::balance::{atom_counts_for_side, check_balance};
            use crate::Stoichiometry::coefficient::UserCoefficients;
            let reactants: Vec<String> = vec!["CH4".to_string(), "O2".to_string()];
            let products: Vec<String> = vec!["CO2".to_string(), "H2O".to_string()];

            let correct = UserCoefficients {
                reactants: vec!["1".to_string(), "2".to_string()],
                products: vec!["1".to_string(), "2".to_string()],
            };
            println!(
                "CH4 + 2 O2 -> CO2 + 2 H2O balanced: {}",
                check_balance(&reactants, &products, &correct)
            );
            println!(
                "reactant atoms: {:?}",
                atom_counts_for_side(&reactants, &correct.reactants)
            );

            let wrong = UserCoefficients {
                reactants: vec!["1".to_string(), "1".to_string()],
                products: vec!["1".to_string(), "2".to_string()],
            };
            println!(
                "CH4 + O2 -> CO2 + 2 H2O balanced: {}",
                check_balance(&reactants, &products, &wrong)
            );

            // blank boxes are counted with multiplier 1 but never accepted
            let blank = UserCoefficients::blank(2, 2);
            println!(
                "blank boxes balanced: {}",
                check_balance(&reactants, &products, &blank)
            );
        }
        2 => {
            // EQUATION CATALOG
            use crate::Quiz::equation_catalog::{global_catalog, Difficulty};
            use crate::Quiz::quiz_output::format_skeleton;
            use rand::rngs::StdRng;
            use rand::SeedableRng;
            let catalog = global_catalog();
            println!("catalog size: {}", catalog.len());
            for difficulty in Difficulty::ALL {
                println!(
                    "{}: {} equations",
                    difficulty.as_str(),
                    catalog.of_difficulty(difficulty).count()
                );
            }
            for eq in catalog.of_difficulty(Difficulty::Hard) {
                println!("  {}", format_skeleton(eq));
            }

            let mut rng = StdRng::seed_from_u64(42);
            let picked = catalog
                .pick_equation(&mut rng, Difficulty::Medium, None)
                .unwrap();
            println!("picked: {}", format_skeleton(picked));
            let next = catalog
                .pick_equation(&mut rng, Difficulty::Medium, Some(picked.id))
                .unwrap();
            assert_ne!(next.id, picked.id);
            println!("next (repeat avoided): {}", format_skeleton(next));
        }
        3 => {
            // SCRIPTED QUIZ SESSION
            use crate::Quiz::equation_catalog::{global_catalog, Difficulty};
            use crate::Quiz::quiz_output::{
                atom_count_table, format_equation, history_table, stats_table,
            };
            use crate::Quiz::session::{QuizSession, Side};
            use rand::rngs::StdRng;
            use rand::SeedableRng;
            let catalog = global_catalog();
            let mut rng = StdRng::seed_from_u64(7);
            let mut session = QuizSession::start_with_rng(Difficulty::Easy, catalog, &mut rng);
            let equation = session.current.clone().unwrap();
            println!("{}", format_equation(&equation, &session.coefficients));

            // deliberately wrong first try
            for i in 0..equation.reactants.len() {
                session.set_coefficient(Side::Reactants, i, "9");
            }
            for i in 0..equation.products.len() {
                session.set_coefficient(Side::Products, i, "1");
            }
            let outcome = session.check().unwrap();
            println!("first try: {}", outcome.message);
            if let Some(table) = atom_count_table(&equation, &session.coefficients) {
                table.printstd();
            }

            // now type the canonical solution
            for (i, c) in equation.solution.reactants.iter().enumerate() {
                session.set_coefficient(Side::Reactants, i, &c.to_string());
            }
            for (i, c) in equation.solution.products.iter().enumerate() {
                session.set_coefficient(Side::Products, i, &c.to_string());
            }
            let outcome = session.check().unwrap();
            println!("second try: {}", outcome.message);
            assert!(outcome.balanced);

            stats_table(session.score, &session.stats).printstd();
            if let Some(table) = history_table(&session.history) {
                table.printstd();
            }
        }
        _ => {
            println!("there is no task number {}", task);
        }
    }
}
