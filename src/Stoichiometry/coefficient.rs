/// Classification of one raw coefficient box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoefficientInput {
    /// positive integer, the only form the balance verdict accepts
    Valid(usize),
    /// blank box
    Empty,
    /// zero, negative, fractional or plain garbage
    Invalid,
}

impl CoefficientInput {
    /// Classify a raw coefficient string. Leading/trailing whitespace is
    /// ignored; only whole positive integers are Valid, so "1.5", "0", "-2"
    /// and "abc" all come out Invalid.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return CoefficientInput::Empty;
        }
        match raw.parse::<usize>() {
            Ok(0) => CoefficientInput::Invalid,
            Ok(n) => CoefficientInput::Valid(n),
            Err(_) => CoefficientInput::Invalid,
        }
    }

    /// Multiplier used during atom counting. Blank and invalid boxes count
    /// as 1 so partially filled equations still produce a hint table; the
    /// balance verdict rejects them separately.
    pub fn effective_multiplier(&self) -> usize {
        match self {
            CoefficientInput::Valid(n) => *n,
            CoefficientInput::Empty | CoefficientInput::Invalid => 1,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, CoefficientInput::Valid(_))
    }
}

/// Raw coefficients for both sides of an equation, exactly as typed by the
/// user and positionally aligned with the equation's formula lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserCoefficients {
    pub reactants: Vec<String>,
    pub products: Vec<String>,
}

impl UserCoefficients {
    /// Blank boxes for an equation with the given side lengths.
    pub fn blank(n_reactants: usize, n_products: usize) -> Self {
        Self {
            reactants: vec![String::new(); n_reactants],
            products: vec![String::new(); n_products],
        }
    }

    /// All raw entries, reactants first.
    pub fn all(&self) -> impl Iterator<Item = &String> {
        self.reactants.iter().chain(self.products.iter())
    }
}
