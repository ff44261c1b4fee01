/// The raw value carried by a form field.
///
/// The variant determines which bounds apply: length bounds only check
/// `Text`, numeric bounds only check `Number`. A bound whose type does not
/// match the value is skipped, not failed.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    fn as_display_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => n.to_string(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<u32> for FieldValue {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

/// Validation requirements for one form field.
///
/// All bounds are inclusive and all are optional; an absent bound is not
/// checked, but a present bound of 0 still is.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConstraint {
    pub value: FieldValue,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl FieldConstraint {
    /// Creates an unconstrained descriptor for a text value
    pub fn text(value: impl Into<String>) -> Self {
        Self::new(FieldValue::Text(value.into()))
    }

    /// Creates an unconstrained descriptor for a numeric value
    pub fn number(value: f64) -> Self {
        Self::new(FieldValue::Number(value))
    }

    fn new(value: FieldValue) -> Self {
        Self {
            value,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    pub fn max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    pub fn min(mut self, bound: f64) -> Self {
        self.min = Some(bound);
        self
    }

    pub fn max(mut self, bound: f64) -> Self {
        self.max = Some(bound);
        self
    }

    /// Checks every applicable constraint against the value
    pub fn is_valid(&self) -> bool {
        validate(self)
    }
}

/// Returns true iff every applicable constraint on the descriptor holds.
///
/// `required` checks the trimmed text form of the value (numbers are
/// stringified first, so any finite number passes). Length bounds apply to
/// text values, numeric bounds to numbers; both ends are inclusive.
pub fn validate(constraint: &FieldConstraint) -> bool {
    let mut is_valid = true;

    if constraint.required {
        is_valid = is_valid && !constraint.value.as_display_text().trim().is_empty();
    }

    match &constraint.value {
        FieldValue::Text(text) => {
            if let Some(min_length) = constraint.min_length {
                is_valid = is_valid && text.chars().count() >= min_length;
            }
            if let Some(max_length) = constraint.max_length {
                is_valid = is_valid && text.chars().count() <= max_length;
            }
        }
        FieldValue::Number(number) => {
            if let Some(min) = constraint.min {
                is_valid = is_valid && *number >= min;
            }
            if let Some(max) = constraint.max {
                is_valid = is_valid && *number <= max;
            }
        }
    }

    is_valid
}
