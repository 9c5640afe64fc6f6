//! # Quiz session
//!
//! Holds the state of one training run: the equation on screen, the
//! coefficients typed so far, score and per-difficulty statistics, hint
//! usage and the solve history. The session never owns the catalog; every
//! operation that needs a fresh equation borrows one and clones the picked
//! record, so the same catalog can serve any number of sessions.
use super::equation_catalog::{Difficulty, Equation, EquationCatalog};
use crate::Stoichiometry::coefficient::UserCoefficients;
use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Oldest entries fall off once the history grows past this.
pub const MAX_HISTORY_LENGTH: usize = 30;

/// Lifecycle of the equation currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// coefficients still being edited
    Playing,
    /// last check succeeded, equation locked
    Correct,
    /// last check failed, editing continues
    Incorrect,
    /// solution revealed, equation locked
    Solved,
}

/// Which side of the equation a coefficient box belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Reactants,
    Products,
}

/// How an equation left the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveStatus {
    Solved,
    SolvedWithHint,
    Revealed,
}

impl SolveStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SolveStatus::Solved => "Resolvido",
            SolveStatus::SolvedWithHint => "Resolvido com Dica",
            SolveStatus::Revealed => "Revelado",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub equation: Equation,
    pub status: SolveStatus,
}

/// Equations solved without help, per difficulty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
}

impl SessionStats {
    pub fn solved(&self) -> usize {
        self.easy + self.medium + self.hard
    }

    pub fn count(&self, difficulty: Difficulty) -> usize {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    fn bump(&mut self, difficulty: Difficulty) {
        match difficulty {
            Difficulty::Easy => self.easy += 1,
            Difficulty::Medium => self.medium += 1,
            Difficulty::Hard => self.hard += 1,
        }
    }
}

/// Result of one answer check.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    pub balanced: bool,
    pub points_awarded: usize,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    pub difficulty: Difficulty,
    pub current: Option<Equation>,
    pub coefficients: UserCoefficients,
    pub status: GameStatus,
    pub score: usize,
    pub stats: SessionStats,
    /// hint table visible right now
    pub show_hint: bool,
    /// hint was opened at least once for the current equation; sticky until
    /// the next equation, forfeits the points
    pub hint_used: bool,
    pub history: Vec<HistoryEntry>,
    /// CLI advances to the next equation right after a correct answer
    pub auto_next: bool,
}

impl QuizSession {
    pub fn start(difficulty: Difficulty, catalog: &EquationCatalog) -> Self {
        Self::start_with_rng(difficulty, catalog, &mut rand::rng())
    }

    pub fn start_with_rng<R: Rng + ?Sized>(
        difficulty: Difficulty,
        catalog: &EquationCatalog,
        rng: &mut R,
    ) -> Self {
        info!("starting quiz session at difficulty '{}'", difficulty.as_str());
        let mut session = QuizSession {
            difficulty,
            current: None,
            coefficients: UserCoefficients::default(),
            status: GameStatus::Playing,
            score: 0,
            stats: SessionStats::default(),
            show_hint: false,
            hint_used: false,
            history: Vec::new(),
            auto_next: true,
        };
        let first = catalog.pick_equation(rng, difficulty, None).cloned();
        session.load_equation(first);
        session
    }

    /// Switch the difficulty and load a fresh equation, avoiding the one on
    /// screen.
    pub fn set_difficulty(&mut self, difficulty: Difficulty, catalog: &EquationCatalog) {
        self.set_difficulty_with_rng(difficulty, catalog, &mut rand::rng())
    }

    pub fn set_difficulty_with_rng<R: Rng + ?Sized>(
        &mut self,
        difficulty: Difficulty,
        catalog: &EquationCatalog,
        rng: &mut R,
    ) {
        self.difficulty = difficulty;
        self.next_equation_with_rng(catalog, rng);
    }

    /// Load the next equation of the current difficulty. Score, statistics
    /// and history survive; everything tied to the equation resets.
    pub fn next_equation(&mut self, catalog: &EquationCatalog) {
        self.next_equation_with_rng(catalog, &mut rand::rng())
    }

    pub fn next_equation_with_rng<R: Rng + ?Sized>(
        &mut self,
        catalog: &EquationCatalog,
        rng: &mut R,
    ) {
        let exclude = self.current.as_ref().map(|eq| eq.id);
        let next = catalog.pick_equation(rng, self.difficulty, exclude).cloned();
        self.load_equation(next);
    }

    fn load_equation(&mut self, equation: Option<Equation>) {
        self.coefficients = match &equation {
            Some(eq) => UserCoefficients::blank(eq.reactants.len(), eq.products.len()),
            None => UserCoefficients::default(),
        };
        self.current = equation;
        self.show_hint = false;
        self.hint_used = false;
        self.status = GameStatus::Playing;
    }

    /// Correct answers and revealed solutions freeze the equation until the
    /// next one is loaded.
    pub fn is_locked(&self) -> bool {
        matches!(self.status, GameStatus::Correct | GameStatus::Solved)
    }

    /// Write one coefficient box. Rejected (false) when the equation is
    /// locked or the index is out of range; an accepted edit puts the
    /// session back into `Playing`.
    pub fn set_coefficient(&mut self, side: Side, index: usize, value: &str) -> bool {
        if self.is_locked() || self.current.is_none() {
            return false;
        }
        let boxes = match side {
            Side::Reactants => &mut self.coefficients.reactants,
            Side::Products => &mut self.coefficients.products,
        };
        match boxes.get_mut(index) {
            Some(slot) => {
                *slot = value.to_string();
                self.status = GameStatus::Playing;
                true
            }
            None => false,
        }
    }

    /// Check the current coefficients. Points and statistics move only for
    /// a correct answer found without the hint; with the hint the answer is
    /// still celebrated but worth nothing. None when there is no equation
    /// or it is already locked.
    pub fn check(&mut self) -> Option<CheckOutcome> {
        if self.is_locked() {
            return None;
        }
        let equation = self.current.clone()?;
        if equation.is_balanced_by(&self.coefficients) {
            self.status = GameStatus::Correct;
            if !self.hint_used {
                let points = equation.difficulty.points();
                self.score += points;
                self.stats.bump(equation.difficulty);
                self.push_history(equation, SolveStatus::Solved);
                Some(CheckOutcome {
                    balanced: true,
                    points_awarded: points,
                    message: format!("Correto! +{} pontos!", points),
                })
            } else {
                self.push_history(equation, SolveStatus::SolvedWithHint);
                Some(CheckOutcome {
                    balanced: true,
                    points_awarded: 0,
                    message: "Correto! Muito bem!".to_string(),
                })
            }
        } else {
            self.status = GameStatus::Incorrect;
            Some(CheckOutcome {
                balanced: false,
                points_awarded: 0,
                message: "Ops! Ainda não está balanceado. Tente novamente!".to_string(),
            })
        }
    }

    /// Give up and reveal the canonical solution. Fills the boxes, opens
    /// the hint table and locks the equation; no points.
    pub fn solve(&mut self) -> Option<String> {
        if self.is_locked() {
            return None;
        }
        let equation = self.current.clone()?;
        self.coefficients = equation.solution.as_user_coefficients();
        self.status = GameStatus::Solved;
        self.show_hint = true;
        self.push_history(equation, SolveStatus::Revealed);
        Some("Aqui está a solução. Estude-a para a próxima!".to_string())
    }

    /// Toggle the atom count table. Opening it (even once) marks the
    /// current equation as hint-assisted. Returns the new visibility.
    pub fn toggle_hint(&mut self) -> bool {
        self.show_hint = !self.show_hint;
        if self.show_hint {
            self.hint_used = true;
        }
        self.show_hint
    }

    fn push_history(&mut self, equation: Equation, status: SolveStatus) {
        self.history.insert(0, HistoryEntry { equation, status });
        self.history.truncate(MAX_HISTORY_LENGTH);
    }
}
