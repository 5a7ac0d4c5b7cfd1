//! The staff records the driver sorts, and one comparator per field.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::SortError;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Employee {
    pub age: u32,
    pub name: String,
    pub surname: String,
}

impl Employee {
    pub fn new(age: u32, name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            age,
            name: name.into(),
            surname: surname.into(),
        }
    }
}

pub fn by_age(a: &Employee, b: &Employee) -> Ordering {
    a.age.cmp(&b.age)
}

pub fn by_name(a: &Employee, b: &Employee) -> Ordering {
    a.name.cmp(&b.name)
}

pub fn by_surname(a: &Employee, b: &Employee) -> Ordering {
    a.surname.cmp(&b.surname)
}

/// A field of [`Employee`] to order by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Age,
    Name,
    Surname,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Age, Field::Name, Field::Surname];

    pub fn comparator(self) -> fn(&Employee, &Employee) -> Ordering {
        match self {
            Field::Age => by_age,
            Field::Name => by_name,
            Field::Surname => by_surname,
        }
    }

    #[inline]
    pub fn compare(self, a: &Employee, b: &Employee) -> Ordering {
        (self.comparator())(a, b)
    }

    fn as_str(self) -> &'static str {
        match self {
            Field::Age => "age",
            Field::Name => "name",
            Field::Surname => "surname",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let base = normalized.strip_prefix("by").unwrap_or(&normalized);

        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == base)
            .ok_or_else(|| SortError::UnknownField(s.to_string()))
    }
}

/// The ten employees the driver sorts, in their unsorted input order.
pub fn sample_staff() -> Vec<Employee> {
    [
        (20, "Alex", "Smith"),
        (18, "Jeffrey", "Taylor"),
        (23, "Garrett", "Brown"),
        (21, "Henry", "Evans"),
        (19, "Lewis", "Wilson"),
        (31, "John", "Thompson"),
        (20, "Edward", "Robinson"),
        (30, "Bradley", "Martin"),
        (27, "Bill", "Parker"),
        (22, "Andrew", "Fisher"),
    ]
    .into_iter()
    .map(|(age, name, surname)| Employee::new(age, name, surname))
    .collect()
}
