use std::collections::HashSet;
use std::fmt;

use crate::error::AppError;

/// One (digit, letter) pair; displays as the concatenated identifier, e.g. "2B"
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlotId {
    pub(crate) number: String,
    pub(crate) letter: String,
    /// 1-based position of `number` within its set
    pub(crate) number_rank: usize,
}

impl PlotId {
    /// Frequency multiplier for the chart's sine wave.
    ///
    /// Numeric tokens scale by their value, anything else by its rank.
    pub(crate) fn frequency(&self) -> f64 {
        self.number
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .unwrap_or(self.number_rank as f64)
    }
}

impl fmt::Display for PlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.number, self.letter)
    }
}

/// Cross-product of both sets, numbers outer and letters inner.
///
/// Fails if either set is empty or two pairs concatenate to the same identifier.
pub(crate) fn plot_ids(numbers: &[String], letters: &[String]) -> Result<Vec<PlotId>, AppError> {
    if numbers.is_empty() {
        return Err(AppError::EmptyIdentifierSet { name: "numbers" });
    }
    if letters.is_empty() {
        return Err(AppError::EmptyIdentifierSet { name: "letters" });
    }

    let mut seen = HashSet::new();
    let mut ids = Vec::with_capacity(numbers.len() * letters.len());
    for (i, number) in numbers.iter().enumerate() {
        for letter in letters {
            let id = PlotId {
                number: number.clone(),
                letter: letter.clone(),
                number_rank: i + 1,
            };
            if !seen.insert(id.to_string()) {
                return Err(AppError::DuplicatePlotId { id: id.to_string() });
            }
            ids.push(id);
        }
    }
    Ok(ids)
}
