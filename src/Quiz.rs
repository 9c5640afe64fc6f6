/// Catalog of training equations: closed difficulty levels, equation records
/// with their canonical solutions, JSON loading with validation at load time,
/// random selection with repeat avoidance and the embedded equation base
/// shipped with the crate.
///
///  # Examples
/// ```
/// use ChemiQuiz::Quiz::equation_catalog::{global_catalog, Difficulty};
/// let catalog = global_catalog();
/// assert!(catalog.of_difficulty(Difficulty::Easy).count() > 0);
/// ```
pub mod equation_catalog;

/// State machine of one training session: current equation, user
/// coefficients, score, per-difficulty statistics, hint tracking and the
/// solve history.
pub mod session;

/// Terminal rendering of the quiz: equation line with coefficient boxes,
/// atom count hint table, session statistics and solve history.
pub mod quiz_output;
