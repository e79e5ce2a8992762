//! Intake: raw records to a validated, deduplicated population.
//!
//! Names are claimed in the order captains, veterans, rookies, others. A name
//! seen earlier is dropped from later lists, so a captain keeps its captain
//! identity and pool members keep their first pool.

use std::collections::HashSet;

use teamdraw_core::{
    Category, DrawError, DrawInput, Gender, GroupQuota, Person, Record, Result,
    CAPTAINS_PER_GENDER, TEAM_COUNT,
};
use tracing::debug;

/// The participants of one run, grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Population {
    pub captains: Vec<Person>,
    pub veterans: Vec<Person>,
    pub rookies: Vec<Person>,
    pub others: Vec<Person>,
    /// Records dropped from each pool because the name was already claimed.
    pub duplicates: GroupQuota,
}

impl Population {
    /// Validates and deduplicates `input`.
    ///
    /// # Errors
    ///
    /// - [`DrawError::InvalidGenderLabel`] for a captain without a valid
    ///   `M`/`F` label, or a pool record with an unrecognized label
    /// - [`DrawError::InvalidCaptainComposition`] unless the deduplicated
    ///   captains are exactly 4 M + 4 F
    ///
    /// # Example
    ///
    /// ```
    /// use teamdraw_core::{DrawInput, Record};
    /// use teamdraw_solver::Population;
    ///
    /// let mut input = DrawInput::default();
    /// for i in 1..=8 {
    ///     let gender = if i <= 4 { "M" } else { "F" };
    ///     input.captains.push(Record::with_gender(format!("C{i}"), gender));
    /// }
    /// input.veterans.push(Record::named("C1"));
    /// input.veterans.push(Record::named("Kim"));
    ///
    /// let population = Population::from_input(&input).unwrap();
    /// assert_eq!(population.veterans.len(), 1);
    /// assert_eq!(population.duplicates.veteran, 1);
    /// ```
    pub fn from_input(input: &DrawInput) -> Result<Self> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut population = Population::default();

        for record in &input.captains {
            let Some(name) = clean_name(record) else {
                continue;
            };
            let label = record.gender.as_deref().unwrap_or("");
            let gender = Gender::from_label(label).ok_or_else(|| DrawError::InvalidGenderLabel {
                name: name.clone(),
                label: label.to_string(),
            })?;
            if seen.insert(name.clone()) {
                population.captains.push(Person::captain(name, gender));
            } else {
                debug!(event = "duplicate_dropped", name = %name, category = "captain");
            }
        }

        validate_captains(&population.captains)?;

        let pools = [
            (Category::Veteran, &input.veterans),
            (Category::Rookie, &input.rookies),
            (Category::Other, &input.others),
        ];
        for (category, records) in pools {
            let mut people = Vec::with_capacity(records.len());
            let mut dropped = 0;
            for record in records {
                let Some(name) = clean_name(record) else {
                    continue;
                };
                let gender = pool_gender(&name, record, category)?;
                if seen.insert(name.clone()) {
                    people.push(Person::new(name, category, gender));
                } else {
                    dropped += 1;
                }
            }
            if dropped > 0 {
                debug!(
                    event = "duplicates_dropped",
                    category = %category,
                    count = dropped,
                );
            }
            if let Some(slot) = population.duplicates.get_mut(category) {
                *slot = dropped;
            }
            match category {
                Category::Veteran => population.veterans = people,
                Category::Rookie => population.rookies = people,
                Category::Other => population.others = people,
                Category::Captain => {}
            }
        }

        Ok(population)
    }

    /// Pool sizes.
    pub fn counts(&self) -> GroupQuota {
        GroupQuota::new(self.veterans.len(), self.rookies.len(), self.others.len())
    }

    /// Everyone, captains first, then pools in distribution order.
    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.captains
            .iter()
            .chain(&self.veterans)
            .chain(&self.rookies)
            .chain(&self.others)
    }

    pub fn len(&self) -> usize {
        self.captains.len() + self.counts().total()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Everyone of `gender`, in [`Population::people`] order.
    pub fn by_gender(&self, gender: Gender) -> Vec<Person> {
        self.people().filter(|p| p.gender == gender).cloned().collect()
    }
}

/// Checks the 8-captain, 4 M / 4 F precondition.
pub fn validate_captains(captains: &[Person]) -> Result<()> {
    let male = captains.iter().filter(|c| c.gender == Gender::Male).count();
    let female = captains.len() - male;
    if captains.len() != TEAM_COUNT || male != CAPTAINS_PER_GENDER || female != CAPTAINS_PER_GENDER
    {
        return Err(DrawError::InvalidCaptainComposition {
            count: captains.len(),
            male,
            female,
        });
    }
    Ok(())
}

fn clean_name(record: &Record) -> Option<String> {
    let name = record.name.trim();
    (!name.is_empty()).then(|| name.to_string())
}

fn pool_gender(name: &str, record: &Record, category: Category) -> Result<Gender> {
    match record.gender.as_deref().map(str::trim) {
        Some(label) if !label.is_empty() => {
            Gender::from_label(label).ok_or_else(|| DrawError::InvalidGenderLabel {
                name: name.to_string(),
                label: label.to_string(),
            })
        }
        // Pools always have a natural gender.
        _ => Ok(category.natural_gender().unwrap_or(Gender::Male)),
    }
}
