use serde_derive::{Deserialize, Serialize};

/// Opaque identifier of a person taking part in an allocation. The shell may
/// use numeric or textual ids; whichever shape it sends is the shape it gets
/// back on save.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PersonId {
    Numeric(u64),
    Text(String),
}

/// A person selected in the shell for an expense, optionally carrying the
/// amounts saved for them last time.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedPerson {
    pub id: PersonId,
    pub name: String,
    pub amount: Option<f64>,
    pub original_amount: Option<f64>,
}

// --

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersonId::Numeric(n) => write!(f, "{}", n),
            PersonId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<u64> for PersonId {
    fn from(n: u64) -> Self {
        PersonId::Numeric(n)
    }
}

impl From<&str> for PersonId {
    fn from(s: &str) -> Self {
        PersonId::Text(s.to_string())
    }
}

impl SelectedPerson {
    pub fn new(id: impl Into<PersonId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            amount: None,
            original_amount: None,
        }
    }

    pub fn with_amounts(mut self, amount: f64, original_amount: Option<f64>) -> Self {
        self.amount = Some(amount);
        self.original_amount = original_amount;
        self
    }
}
