/// Parsing of chemical formulas into their atomic composition.
/// A formula is a string of runs "element symbol + optional multiplicity",
/// e.g. "C6H12O6"; brackets, hydrates and ionic charges are not supported.
///
///  # Examples
/// ```
/// use ChemiQuiz::Stoichiometry::formula_parser::parse_formula;
/// let atoms = parse_formula("C6H12O6");
/// assert_eq!(atoms.get("C"), Some(&6));
/// assert_eq!(atoms.get("H"), Some(&12));
/// assert_eq!(atoms.get("O"), Some(&6));
/// ```
pub mod formula_parser;

/// Classification of raw user coefficients. A coefficient box arrives as a
/// string which may be blank; it is parsed once into a tagged value (valid
/// positive integer / empty / invalid) and the two consumers read the tag
/// differently: atom counting falls back to a multiplier of 1 so the hint
/// table keeps rendering, the balance verdict accepts only valid boxes.
pub mod coefficient;

/// Atom aggregation over one side of an equation and the balance verdict
/// over both sides.
///
///  # Examples
/// ```
/// use ChemiQuiz::Stoichiometry::balance::check_balance;
/// use ChemiQuiz::Stoichiometry::coefficient::UserCoefficients;
/// let reactants = vec!["H2".to_string(), "O2".to_string()];
/// let products = vec!["H2O".to_string()];
/// let user = UserCoefficients {
///     reactants: vec!["2".to_string(), "1".to_string()],
///     products: vec!["2".to_string()],
/// };
/// assert!(check_balance(&reactants, &products, &user));
/// ```
pub mod balance;

mod balance_tests;
