//! Roster input: people with validated availability and stable positions.

use crate::availability::Availability;
use crate::error::{MatchError, Result};
use rand::Rng;
use std::collections::HashMap;

/// One roster member.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    /// Unique key within a roster (e.g. an email address).
    pub identity: String,
    /// Display name.
    pub name: String,
    /// Weekly free time.
    pub availability: Availability,
}

impl Person {
    pub fn new(
        identity: impl Into<String>,
        name: impl Into<String>,
        availability: Availability,
    ) -> Self {
        Self {
            identity: identity.into(),
            name: name.into(),
            availability,
        }
    }

    /// Builds a person from raw day values, rejecting negative or
    /// over-wide masks.
    pub fn from_raw(
        identity: impl Into<String>,
        name: impl Into<String>,
        raw: [i64; 7],
    ) -> Result<Self> {
        Ok(Self::new(identity, name, Availability::from_raw(raw)?))
    }
}

/// An ordered set of people for one matching run.
///
/// A person's index in the roster is their position for the run; it is
/// fixed once the roster is built. Identities are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Roster {
    people: Vec<Person>,
    #[cfg_attr(feature = "serde", serde(skip))]
    positions: HashMap<String, usize>,
}

impl Roster {
    /// Builds a roster, failing on the first duplicate identity.
    pub fn new(people: Vec<Person>) -> Result<Self> {
        let mut positions = HashMap::with_capacity(people.len());
        for (i, person) in people.iter().enumerate() {
            if positions.insert(person.identity.clone(), i).is_some() {
                return Err(MatchError::DuplicateIdentity(person.identity.clone()));
            }
        }
        Ok(Self { people, positions })
    }

    /// A roster of `n` people named `A`, `B`, ... with random availability.
    ///
    /// Past 26 members names continue as `A1`, `B1`, ... so identities
    /// stay unique.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let people: Vec<Person> = (0..n)
            .map(|i| {
                let letter = char::from(b'A' + (i % 26) as u8);
                let label = match i / 26 {
                    0 => letter.to_string(),
                    round => format!("{letter}{round}"),
                };
                Person::new(label.clone(), label, Availability::random(rng))
            })
            .collect();
        let positions = people
            .iter()
            .enumerate()
            .map(|(i, p)| (p.identity.clone(), i))
            .collect();
        Self { people, positions }
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Whether the roster has no members.
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Member at `position`.
    pub fn get(&self, position: usize) -> Option<&Person> {
        self.people.get(position)
    }

    /// Position of the member with `identity`.
    pub fn position_of(&self, identity: &str) -> Option<usize> {
        self.positions.get(identity).copied()
    }

    /// Members in position order.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Person> {
        self.people.iter()
    }
}

impl std::ops::Index<usize> for Roster {
    type Output = Person;

    fn index(&self, position: usize) -> &Person {
        &self.people[position]
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Roster {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            people: Vec<Person>,
        }
        let raw = Raw::deserialize(deserializer)?;
        Roster::new(raw.people).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn person(id: &str) -> Person {
        Person::new(id, id.to_uppercase(), Availability::empty())
    }

    #[test]
    fn test_positions_follow_input_order() {
        let roster = Roster::new(vec![person("c"), person("a"), person("b")]).unwrap();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster.position_of("c"), Some(0));
        assert_eq!(roster.position_of("b"), Some(2));
        assert_eq!(roster.position_of("z"), None);
        assert_eq!(roster[1].name, "A");
    }

    #[test]
    fn test_duplicate_identity_rejected() {
        let err = Roster::new(vec![person("a"), person("b"), person("a")]).unwrap_err();
        assert_eq!(err, MatchError::DuplicateIdentity("a".into()));
    }

    #[test]
    fn test_empty_roster() {
        let roster = Roster::new(Vec::new()).unwrap();
        assert!(roster.is_empty());
        assert!(roster.get(0).is_none());
    }

    #[test]
    fn test_person_from_raw() {
        assert!(Person::from_raw("a", "A", [0, 0, 0, 0, 0, 0, -3]).is_err());
        let p = Person::from_raw("a", "A", [1, 0, 0, 0, 0, 0, 0]).unwrap();
        assert_eq!(p.availability.days()[0], 1);
    }

    #[test]
    fn test_random_roster_unique_identities() {
        let mut rng = StdRng::seed_from_u64(1);
        let roster = Roster::random(60, &mut rng);
        assert_eq!(roster.len(), 60);
        assert_eq!(roster[0].identity, "A");
        assert_eq!(roster[27].identity, "B1");
        for (i, p) in roster.iter().enumerate() {
            assert_eq!(roster.position_of(&p.identity), Some(i));
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_rejects_duplicates() {
        let json = r#"{"people":[
            {"identity":"a","name":"A","availability":[0,0,0,0,0,0,0]},
            {"identity":"a","name":"B","availability":[0,0,0,0,0,0,0]}]}"#;
        assert!(serde_json::from_str::<Roster>(json).is_err());

        let json = r#"{"people":[
            {"identity":"a","name":"A","availability":[0,0,0,0,0,0,-1]}]}"#;
        assert!(serde_json::from_str::<Roster>(json).is_err());
    }
}
