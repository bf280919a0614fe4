//! Count labels using Slavic plural categories.

/// Plural category selected for a count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    /// Counts ending in 1, except those ending in 11.
    One,
    /// Counts ending in 2-4, except those ending in 12-14.
    Few,
    /// Every other count.
    Many,
}

impl PluralCategory {
    /// Selects the category for `count`.
    #[must_use]
    #[expect(
        clippy::integer_division_remainder_used,
        reason = "plural categories are defined by the last one and two digits"
    )]
    pub const fn for_count(count: usize) -> Self {
        let last_digit = count % 10;
        let last_two_digits = count % 100;
        if last_digit == 1 && last_two_digits != 11 {
            Self::One
        } else if matches!(last_digit, 2..=4) && !matches!(last_two_digits, 12..=14) {
            Self::Few
        } else {
            Self::Many
        }
    }
}

/// Noun forms for each plural category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralForms {
    /// Form used with [`PluralCategory::One`].
    pub one: String,
    /// Form used with [`PluralCategory::Few`].
    pub few: String,
    /// Form used with [`PluralCategory::Many`].
    pub many: String,
}

impl PluralForms {
    /// Creates a set of noun forms.
    #[must_use]
    pub fn new(one: impl Into<String>, few: impl Into<String>, many: impl Into<String>) -> Self {
        Self {
            one: one.into(),
            few: few.into(),
            many: many.into(),
        }
    }

    /// Returns the form for `category`.
    #[must_use]
    pub fn form(&self, category: PluralCategory) -> &str {
        match category {
            PluralCategory::One => &self.one,
            PluralCategory::Few => &self.few,
            PluralCategory::Many => &self.many,
        }
    }

    /// Renders `"<count> <noun>"` with the matching noun form.
    #[must_use]
    pub fn label(&self, count: usize) -> String {
        format!("{count} {}", self.form(PluralCategory::for_count(count)))
    }
}

impl Default for PluralForms {
    /// Russian forms of "task".
    fn default() -> Self {
        Self::new("Задача", "Задачи", "Задач")
    }
}
