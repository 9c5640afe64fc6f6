//! Rendering of the quiz state for the terminal. Builders only: everything
//! returns a `String` or a `prettytable::Table` and the CLI decides when to
//! print.
use super::equation_catalog::Equation;
use super::session::{HistoryEntry, SessionStats};
use crate::Stoichiometry::balance::atom_counts_for_side;
use crate::Stoichiometry::coefficient::UserCoefficients;
use prettytable::{Cell, Row, Table};
use std::collections::BTreeSet;

const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Bare equation without coefficients, e.g. "H2 + O2 -> H2O".
pub fn format_skeleton(equation: &Equation) -> String {
    format!(
        "{} -> {}",
        equation.reactants.join(" + "),
        equation.products.join(" + ")
    )
}

/// Equation with the user's coefficient boxes, e.g. "[2] H2 + [ ] O2 -> [2] H2O".
/// A blank box renders as "[ ]"; anything typed is shown as typed.
pub fn format_equation(equation: &Equation, coefficients: &UserCoefficients) -> String {
    let render_side = |formulas: &[String], boxes: &[String]| -> String {
        formulas
            .iter()
            .enumerate()
            .map(|(i, formula)| {
                let raw = boxes.get(i).map(|b| b.trim()).unwrap_or("");
                if raw.is_empty() {
                    format!("[ ] {}", formula)
                } else {
                    format!("[{}] {}", raw, formula)
                }
            })
            .collect::<Vec<String>>()
            .join(" + ")
    };
    format!(
        "{} -> {}",
        render_side(&equation.reactants, &coefficients.reactants),
        render_side(&equation.products, &coefficients.products)
    )
}

/// Equation with its canonical solution written in, coefficient 1 omitted,
/// e.g. "2 H2 + O2 -> 2 H2O".
pub fn format_solved(equation: &Equation) -> String {
    let render_side = |formulas: &[String], coeffs: &[usize]| -> String {
        formulas
            .iter()
            .enumerate()
            .map(|(i, formula)| {
                let coeff = coeffs.get(i).copied().unwrap_or(1);
                if coeff > 1 {
                    format!("{} {}", coeff, formula)
                } else {
                    formula.clone()
                }
            })
            .collect::<Vec<String>>()
            .join(" + ")
    };
    format!(
        "{} -> {}",
        render_side(&equation.reactants, &equation.solution.reactants),
        render_side(&equation.products, &equation.solution.products)
    )
}

/// Atom count hint table: one row per element, current totals on both
/// sides, mismatched rows in red. None when the equation contributes no
/// elements at all.
pub fn atom_count_table(equation: &Equation, coefficients: &UserCoefficients) -> Option<Table> {
    let reactant_atoms = atom_counts_for_side(&equation.reactants, &coefficients.reactants);
    let product_atoms = atom_counts_for_side(&equation.products, &coefficients.products);
    let all_elements: BTreeSet<&str> = reactant_atoms
        .keys()
        .chain(product_atoms.keys())
        .map(|symbol| symbol.as_str())
        .collect();
    if all_elements.is_empty() {
        return None;
    }
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Elemento"),
        Cell::new("Reagentes"),
        Cell::new("Produtos"),
    ]));
    for element in all_elements {
        let in_reactants = reactant_atoms.get(element).copied().unwrap_or(0);
        let in_products = product_atoms.get(element).copied().unwrap_or(0);
        let row = if in_reactants == in_products {
            vec![
                Cell::new(element),
                Cell::new(&in_reactants.to_string()),
                Cell::new(&in_products.to_string()),
            ]
        } else {
            vec![
                Cell::new(&format!("{}{}{}", RED, element, RESET)),
                Cell::new(&format!("{}{}{}", RED, in_reactants, RESET)),
                Cell::new(&format!("{}{}{}", RED, in_products, RESET)),
            ]
        };
        table.add_row(Row::new(row));
    }
    Some(table)
}

/// Score and number of equations solved without help, per difficulty.
pub fn stats_table(score: usize, stats: &SessionStats) -> Table {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Pontos"),
        Cell::new("Fácil"),
        Cell::new("Médio"),
        Cell::new("Difícil"),
    ]));
    table.add_row(Row::new(vec![
        Cell::new(&score.to_string()),
        Cell::new(&stats.easy.to_string()),
        Cell::new(&stats.medium.to_string()),
        Cell::new(&stats.hard.to_string()),
    ]));
    table
}

/// Solve history, newest first. None when nothing was played yet.
pub fn history_table(history: &[HistoryEntry]) -> Option<Table> {
    if history.is_empty() {
        return None;
    }
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Equação"),
        Cell::new("Dificuldade"),
        Cell::new("Status"),
    ]));
    for entry in history {
        let difficulty = entry.equation.difficulty;
        table.add_row(Row::new(vec![
            Cell::new(&format_solved(&entry.equation)),
            Cell::new(&format!(
                "{}{}{}",
                difficulty.ansi_color(),
                difficulty.label(),
                RESET
            )),
            Cell::new(entry.status.label()),
        ]));
    }
    Some(table)
}
