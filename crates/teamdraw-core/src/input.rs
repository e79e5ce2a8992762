//! Raw participant records handed over by the surrounding shell.
//!
//! Records are already parsed from whatever source format the caller uses;
//! nothing here touches files or bytes.

/// One participant row: a name and an optional gender label.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub gender: Option<String>,
}

impl Record {
    /// A record without a gender label.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gender: None,
        }
    }

    /// A record with a gender label, as captains require.
    pub fn with_gender(name: impl Into<String>, gender: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gender: Some(gender.into()),
        }
    }
}

/// The four input lists of a draw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrawInput {
    pub captains: Vec<Record>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub veterans: Vec<Record>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rookies: Vec<Record>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub others: Vec<Record>,
}
