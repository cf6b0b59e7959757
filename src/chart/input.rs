use super::date::CivilDate;
use super::error::ChartError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Raw birth data as submitted by the form layer.
///
/// `birth_time` and `birth_location` arrive already validated upstream and
/// are carried through unchanged; neither participates in derivation.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct BirthInput {
    pub name: String,
    pub birth_date: Option<CivilDate>,
    pub birth_time: Option<String>,
    pub birth_location: String,
}

impl BirthInput {
    pub fn new(name: impl Into<String>, birth_date: CivilDate) -> Self {
        Self {
            name: name.into(),
            birth_date: Some(birth_date),
            birth_time: None,
            birth_location: String::new(),
        }
    }

    /// Check the rejection rules and hand back the concrete birth date.
    pub(crate) fn validate(&self, today: CivilDate) -> Result<CivilDate, ChartError> {
        if self.name.trim().is_empty() {
            return Err(ChartError::EmptyName);
        }

        let date = self.birth_date.ok_or(ChartError::MissingBirthDate)?;
        if date > today {
            return Err(ChartError::FutureBirthDate { date, today });
        }

        Ok(date)
    }
}
