//! Participants, their categories and genders.

use std::fmt;

/// Binary gender label used for captain balance and room partitioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gender {
    #[cfg_attr(feature = "serde", serde(rename = "M"))]
    Male,
    #[cfg_attr(feature = "serde", serde(rename = "F"))]
    Female,
}

impl Gender {
    /// Parses a `M`/`F` label, ignoring case and surrounding whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use teamdraw_core::Gender;
    ///
    /// assert_eq!(Gender::from_label(" f "), Some(Gender::Female));
    /// assert_eq!(Gender::from_label("X"), None);
    /// ```
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_uppercase().as_str() {
            "M" => Some(Gender::Male),
            "F" => Some(Gender::Female),
            _ => None,
        }
    }

    /// Returns the other gender.
    pub fn opposite(self) -> Self {
        match self {
            Gender::Male => Gender::Female,
            Gender::Female => Gender::Male,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Population group a participant was drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Category {
    Captain,
    Veteran,
    Rookie,
    Other,
}

impl Category {
    /// The three non-captain groups, in distribution order.
    pub const GROUPS: [Category; 3] = [Category::Veteran, Category::Rookie, Category::Other];

    /// Gender assumed for pool records that carry no label.
    ///
    /// Captains always carry an explicit label and have no natural gender.
    pub fn natural_gender(self) -> Option<Gender> {
        match self {
            Category::Captain => None,
            Category::Veteran | Category::Rookie => Some(Gender::Male),
            Category::Other => Some(Gender::Female),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Captain => "captain",
            Category::Veteran => "veteran",
            Category::Rookie => "rookie",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A participant. Identity is by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    pub name: String,
    pub category: Category,
    pub gender: Gender,
}

impl Person {
    pub fn new(name: impl Into<String>, category: Category, gender: Gender) -> Self {
        Self {
            name: name.into(),
            category,
            gender,
        }
    }

    /// Creates a captain.
    pub fn captain(name: impl Into<String>, gender: Gender) -> Self {
        Self::new(name, Category::Captain, gender)
    }

    /// Creates a pool member with the pool's natural gender.
    ///
    /// # Panics
    ///
    /// Panics if `category` is [`Category::Captain`].
    pub fn member(name: impl Into<String>, category: Category) -> Self {
        let gender = category
            .natural_gender()
            .expect("captains must be created with an explicit gender");
        Self::new(name, category, gender)
    }

    pub fn is_captain(&self) -> bool {
        self.category == Category::Captain
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}/{}]", self.name, self.category, self.gender)
    }
}
