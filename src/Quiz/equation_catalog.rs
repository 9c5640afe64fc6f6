//! # Equation catalog
//!
//! The training material of the quiz: chemical equations grouped by a closed
//! set of difficulty levels, each carrying its canonical balanced solution.
//! A catalog is loaded from JSON (the embedded base or a user file), fully
//! validated at load time and immutable afterwards, so every consumer works
//! against a dataset whose invariants are already established.
use crate::Stoichiometry::balance::check_balance;
use crate::Stoichiometry::coefficient::UserCoefficients;
use crate::Stoichiometry::formula_parser::parse_formula;
use log::{info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;

/// Difficulty level of a quiz equation. The set is closed: every level maps
/// to points, a display label and a terminal color through exhaustive
/// matches, so adding a level is a compile-time affair.
#[derive(Debug, PartialEq, Eq, Serialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}
impl<'de> Deserialize<'de> for Difficulty {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(serde::de::Error::custom(format!(
                "Unknown difficulty: {}",
                s
            ))),
        }
    }
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Display label shown in the terminal UI
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Fácil",
            Difficulty::Medium => "Médio",
            Difficulty::Hard => "Difícil",
        }
    }

    /// Points awarded for solving an equation of this level without help
    pub fn points(&self) -> usize {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 20,
            Difficulty::Hard => 30,
        }
    }

    /// ANSI escape used by the CLI when printing this level
    pub fn ansi_color(&self) -> &'static str {
        match self {
            Difficulty::Easy => "\x1b[32m",
            Difficulty::Medium => "\x1b[33m",
            Difficulty::Hard => "\x1b[31m",
        }
    }
}

/// Canonical balanced coefficients of an equation, positionally aligned
/// with its formula lists.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Solution {
    pub reactants: Vec<usize>,
    pub products: Vec<usize>,
}

impl Solution {
    /// The solution rendered as raw coefficient strings, the form the
    /// balance verdict takes.
    pub fn as_user_coefficients(&self) -> UserCoefficients {
        UserCoefficients {
            reactants: self.reactants.iter().map(|c| c.to_string()).collect(),
            products: self.products.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// One quiz equation: unbalanced skeleton plus its canonical solution.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Equation {
    pub id: u32,
    pub difficulty: Difficulty,
    pub reactants: Vec<String>,
    pub products: Vec<String>,
    pub solution: Solution,
}

impl Equation {
    /// True iff the user's coefficients balance this equation.
    pub fn is_balanced_by(&self, user: &UserCoefficients) -> bool {
        check_balance(&self.reactants, &self.products, user)
    }

    /// True iff the canonical solution itself balances the equation.
    pub fn solution_balances(&self) -> bool {
        self.is_balanced_by(&self.solution.as_user_coefficients())
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read equation base: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse equation base: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Equation base contains no equations")]
    EmptyCatalog,
    #[error("Duplicate equation id {0}")]
    DuplicateId(u32),
    #[error("Equation {id} is malformed: {reason}")]
    InvalidEquation { id: u32, reason: String },
}

/// Immutable, validated collection of quiz equations.
#[derive(Debug, Clone, PartialEq)]
pub struct EquationCatalog {
    equations: Vec<Equation>,
}

impl EquationCatalog {
    /// Build a catalog from already deserialized equations, rejecting
    /// datasets that would break the game later.
    pub fn from_equations(equations: Vec<Equation>) -> Result<Self, CatalogError> {
        Self::validate(&equations)?;
        info!("equation catalog ready: {} equations", equations.len());
        Ok(EquationCatalog { equations })
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let equations: Vec<Equation> = serde_json::from_str(json)?;
        Self::from_equations(equations)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        info!("loading equation catalog from {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    fn validate(equations: &[Equation]) -> Result<(), CatalogError> {
        if equations.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        let mut seen_ids = HashSet::new();
        for eq in equations {
            if !seen_ids.insert(eq.id) {
                return Err(CatalogError::DuplicateId(eq.id));
            }
            if eq.reactants.is_empty() {
                return Err(CatalogError::InvalidEquation {
                    id: eq.id,
                    reason: "no reactant formulas".to_string(),
                });
            }
            if eq.products.is_empty() {
                return Err(CatalogError::InvalidEquation {
                    id: eq.id,
                    reason: "no product formulas".to_string(),
                });
            }
            if eq.solution.reactants.len() != eq.reactants.len()
                || eq.solution.products.len() != eq.products.len()
            {
                return Err(CatalogError::InvalidEquation {
                    id: eq.id,
                    reason: "solution does not cover every formula".to_string(),
                });
            }
            if eq
                .solution
                .reactants
                .iter()
                .chain(eq.solution.products.iter())
                .any(|&c| c == 0)
            {
                return Err(CatalogError::InvalidEquation {
                    id: eq.id,
                    reason: "solution contains a zero coefficient".to_string(),
                });
            }
            for formula in eq.reactants.iter().chain(eq.products.iter()) {
                if parse_formula(formula).is_empty() {
                    return Err(CatalogError::InvalidEquation {
                        id: eq.id,
                        reason: format!("formula '{}' contains no recognizable elements", formula),
                    });
                }
            }
            // an unbalanced canonical solution is a data bug, but the rest
            // of the catalog is still playable
            if !eq.solution_balances() {
                warn!("equation {}: canonical solution does not balance", eq.id);
            }
        }
        Ok(())
    }

    pub fn equations(&self) -> &[Equation] {
        &self.equations
    }

    pub fn len(&self) -> usize {
        self.equations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.equations.is_empty()
    }

    pub fn by_id(&self, id: u32) -> Option<&Equation> {
        self.equations.iter().find(|eq| eq.id == id)
    }

    pub fn of_difficulty(&self, difficulty: Difficulty) -> impl Iterator<Item = &Equation> {
        self.equations
            .iter()
            .filter(move |eq| eq.difficulty == difficulty)
    }

    /// Pick a random equation of the given difficulty, avoiding the one the
    /// user just saw. When the pool without the excluded equation is empty
    /// (a difficulty with a single equation) the first equation of that
    /// difficulty is returned, so a repeat beats a dead end. None only when
    /// the difficulty has no equations at all.
    pub fn pick_equation<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        difficulty: Difficulty,
        exclude_id: Option<u32>,
    ) -> Option<&Equation> {
        let pool: Vec<&Equation> = self
            .equations
            .iter()
            .filter(|eq| eq.difficulty == difficulty && Some(eq.id) != exclude_id)
            .collect();
        if pool.is_empty() {
            return self.of_difficulty(difficulty).next();
        }
        Some(pool[rng.random_range(0..pool.len())])
    }
}

/// Equation base shipped with the crate, embedded at compile time.
pub const EQUATION_BASE_JSON: &str = include_str!("equation_base.json");

/// Global singleton catalog built from the embedded equation base.
static GLOBAL_CATALOG: OnceLock<EquationCatalog> = OnceLock::new();

/// The process-wide catalog. Parsed and validated on first access; the
/// embedded base is covered by tests, so a failure here means a corrupted
/// build.
pub fn global_catalog() -> &'static EquationCatalog {
    GLOBAL_CATALOG.get_or_init(|| {
        EquationCatalog::from_json_str(EQUATION_BASE_JSON)
            .expect("embedded equation base must be valid")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_embedded_base_loads_and_balances() {
        let catalog = EquationCatalog::from_json_str(EQUATION_BASE_JSON).unwrap();
        assert_eq!(catalog.len(), 17);
        assert!(!catalog.is_empty());
        for eq in catalog.equations() {
            assert!(
                eq.solution_balances(),
                "equation {} has an unbalanced canonical solution",
                eq.id
            );
        }
        for difficulty in Difficulty::ALL {
            assert!(catalog.of_difficulty(difficulty).count() >= 5);
        }
        let permanganate = catalog.by_id(17).unwrap();
        assert_eq!(permanganate.difficulty, Difficulty::Hard);
        assert_eq!(permanganate.reactants, vec!["KMnO4", "HCl"]);
        assert!(catalog.by_id(99).is_none());
    }

    #[test]
    fn test_global_catalog_is_shared() {
        let a = global_catalog();
        let b = global_catalog();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.len(), 17);
    }

    #[test]
    fn test_difficulty_tables() {
        assert_eq!(Difficulty::Easy.points(), 10);
        assert_eq!(Difficulty::Medium.points(), 20);
        assert_eq!(Difficulty::Hard.points(), 30);
        assert_eq!(Difficulty::Easy.label(), "Fácil");
        assert_eq!(Difficulty::Medium.label(), "Médio");
        assert_eq!(Difficulty::Hard.label(), "Difícil");
        for difficulty in Difficulty::ALL {
            let round_trip: Difficulty =
                serde_json::from_str(&serde_json::to_string(&difficulty).unwrap()).unwrap();
            assert_eq!(round_trip, difficulty);
        }
    }

    #[test]
    fn test_unknown_difficulty_is_rejected() {
        let json = r#"[{
            "id": 1,
            "difficulty": "nightmare",
            "reactants": ["H2"],
            "products": ["H2"],
            "solution": { "reactants": [1], "products": [1] }
        }]"#;
        let err = EquationCatalog::from_json_str(json).unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
        assert!(err.to_string().contains("Unknown difficulty"));
    }

    #[test]
    fn test_validation_rejects_broken_datasets() {
        let err = EquationCatalog::from_equations(vec![]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyCatalog));

        let eq = Equation {
            id: 7,
            difficulty: Difficulty::Easy,
            reactants: vec!["H2".to_string()],
            products: vec!["H2".to_string()],
            solution: Solution {
                reactants: vec![1],
                products: vec![1],
            },
        };
        let err = EquationCatalog::from_equations(vec![eq.clone(), eq.clone()]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(7)));

        let mut no_products = eq.clone();
        no_products.products.clear();
        no_products.solution.products.clear();
        let err = EquationCatalog::from_equations(vec![no_products]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidEquation { id: 7, .. }));

        let mut short_solution = eq.clone();
        short_solution.solution.products.clear();
        let err = EquationCatalog::from_equations(vec![short_solution]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidEquation { id: 7, .. }));

        let mut zero_coeff = eq.clone();
        zero_coeff.solution.reactants[0] = 0;
        let err = EquationCatalog::from_equations(vec![zero_coeff]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidEquation { id: 7, .. }));

        let mut gibberish = eq;
        gibberish.reactants[0] = "123".to_string();
        let err = EquationCatalog::from_equations(vec![gibberish]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidEquation { id: 7, .. }));
    }

    #[test]
    fn test_from_json_file() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(EQUATION_BASE_JSON.as_bytes()).unwrap();
        let catalog = EquationCatalog::from_json_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 17);

        let missing = EquationCatalog::from_json_file(Path::new("no_such_base.json"));
        assert!(matches!(missing, Err(CatalogError::Io(_))));
    }

    #[test]
    fn test_pick_equation_avoids_current() {
        let catalog = EquationCatalog::from_json_str(EQUATION_BASE_JSON).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let eq = catalog
                .pick_equation(&mut rng, Difficulty::Medium, Some(5))
                .unwrap();
            assert_eq!(eq.difficulty, Difficulty::Medium);
            assert_ne!(eq.id, 5);
        }
        // no exclusion: any hard equation may come back
        let eq = catalog
            .pick_equation(&mut rng, Difficulty::Hard, None)
            .unwrap();
        assert_eq!(eq.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_pick_equation_falls_back_on_single_equation_pool() {
        let eq = Equation {
            id: 1,
            difficulty: Difficulty::Easy,
            reactants: vec!["H2".to_string(), "O2".to_string()],
            products: vec!["H2O".to_string()],
            solution: Solution {
                reactants: vec![2, 1],
                products: vec![2],
            },
        };
        let catalog = EquationCatalog::from_equations(vec![eq]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        // the only easy equation is the excluded one: repeat it rather than
        // stall the game
        let picked = catalog
            .pick_equation(&mut rng, Difficulty::Easy, Some(1))
            .unwrap();
        assert_eq!(picked.id, 1);
        assert!(catalog
            .pick_equation(&mut rng, Difficulty::Hard, None)
            .is_none());
    }
}
