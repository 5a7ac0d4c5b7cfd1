//! Text rendering of the before and after tables printed by the driver.

use std::fmt;

use clap::builder::styling::{AnsiColor, Style};

use crate::employee::{Employee, Field};

const SEPARATOR_WIDTH: usize = 80;

/// One line per employee followed by a separator, optionally highlighting one field.
#[derive(Clone, Copy, Debug)]
pub struct Table<'a> {
    pub staff: &'a [Employee],
    pub highlight: Option<Field>,
    pub styled: bool,
}

impl fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for employee in self.staff {
            self.segment(f, Field::Age, format_args!("Age = {}", employee.age))?;
            f.write_str(" \t")?;
            self.segment(f, Field::Name, format_args!("Name = {}", employee.name))?;
            f.write_str(" \t")?;
            self.segment(
                f,
                Field::Surname,
                format_args!("Surname = {}", employee.surname),
            )?;
            writeln!(f)?;
        }

        writeln!(f, "{}", "-".repeat(SEPARATOR_WIDTH))
    }
}

impl Table<'_> {
    fn segment(
        &self,
        f: &mut fmt::Formatter<'_>,
        field: Field,
        text: fmt::Arguments<'_>,
    ) -> fmt::Result {
        if self.highlight == Some(field) {
            paint(f, self.styled, AnsiColor::Cyan.on_default(), text)
        } else {
            f.write_fmt(text)
        }
    }
}

/// The full output of one driver run: the input table, the strategy used and the sorted table.
#[derive(Clone, Copy, Debug)]
pub struct Report<'a> {
    pub before: &'a [Employee],
    pub after: &'a [Employee],
    pub strategy: &'a str,
    pub field: Field,
    pub styled: bool,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let before = Table {
            staff: self.before,
            highlight: None,
            styled: self.styled,
        };
        let after = Table {
            staff: self.after,
            highlight: Some(self.field),
            styled: self.styled,
        };

        let heading = AnsiColor::Yellow.on_default();
        paint(f, self.styled, heading, format_args!("Sequence before sorting:"))?;
        writeln!(f)?;
        write!(f, "{before}")?;

        writeln!(f)?;
        let heading = AnsiColor::Cyan.on_default();
        paint(
            f,
            self.styled,
            heading,
            format_args!("Sort strategy: {}", self.strategy),
        )?;
        writeln!(f)?;

        writeln!(f)?;
        let heading = AnsiColor::Green.on_default();
        paint(
            f,
            self.styled,
            heading,
            format_args!("Sequence after sorting by {}:", self.field),
        )?;
        writeln!(f)?;
        write!(f, "{after}")
    }
}

fn paint(
    f: &mut fmt::Formatter<'_>,
    styled: bool,
    style: Style,
    text: fmt::Arguments<'_>,
) -> fmt::Result {
    if styled {
        write!(f, "{}{}{}", style.render(), text, style.render_reset())
    } else {
        f.write_fmt(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staff() -> Vec<Employee> {
        vec![
            Employee::new(20, "Alex", "Smith"),
            Employee::new(18, "Jeffrey", "Taylor"),
        ]
    }

    #[test]
    fn plain_table() {
        let staff = staff();
        let table = Table {
            staff: &staff,
            highlight: Some(Field::Name),
            styled: false,
        };

        let expected = format!(
            "Age = 20 \tName = Alex \tSurname = Smith\n\
             Age = 18 \tName = Jeffrey \tSurname = Taylor\n\
             {}\n",
            "-".repeat(80)
        );
        assert_eq!(table.to_string(), expected);
    }

    #[test]
    fn highlighted_field_is_styled() {
        let staff = staff();
        let table = Table {
            staff: &staff[..1],
            highlight: Some(Field::Surname),
            styled: true,
        };

        let cyan = AnsiColor::Cyan.on_default();
        let expected = format!(
            "Age = 20 \tName = Alex \t{}Surname = Smith{}\n",
            cyan.render(),
            cyan.render_reset()
        );
        assert!(table.to_string().starts_with(&expected));
    }

    #[test]
    fn no_highlight_means_no_styling() {
        let staff = staff();
        let table = Table {
            staff: &staff,
            highlight: None,
            styled: true,
        };

        assert!(!table.to_string().contains('\u{1b}'));
    }

    #[test]
    fn plain_report_headings() {
        let before = staff();
        let mut after = before.clone();
        after.reverse();

        let report = Report {
            before: &before,
            after: &after,
            strategy: "merge",
            field: Field::Age,
            styled: false,
        };
        let text = report.to_string();
        let lines = text.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], "Sequence before sorting:");
        assert_eq!(lines[1], "Age = 20 \tName = Alex \tSurname = Smith");
        assert!(lines.contains(&"Sort strategy: merge"));
        assert!(lines.contains(&"Sequence after sorting by age:"));
        assert_eq!(lines.last(), Some(&"-".repeat(80).as_str()));
        assert!(!text.contains('\u{1b}'));
    }
}
