use std::collections::HashSet;

use rand::Rng;
use tracing::debug;

use personae_core::PersonRecord;

use crate::contacts::translit::transliterate;
use crate::errors::GenerationError;

/// Domains an email can end with.
pub const DOMAINS: [&str; 10] = [
    "@ruspost.online",
    "@ruspost.net",
    "@ruspost.net.ru",
    "@ruspost.ru.net",
    "@ruspost.su",
    "@ru-email.online",
    "@ru-email.net",
    "@ru-email.net.ru",
    "@ru-email.ru.net",
    "@ru-email.su",
];

/// Row `i` starts at pattern `i % INITIAL_PATTERNS`, the plain name forms.
pub const INITIAL_PATTERNS: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Part {
    First,
    Initial,
    Last,
    Year,
    ShortYear,
    Sep(char),
}

const F: Part = Part::First;
const I: Part = Part::Initial;
const L: Part = Part::Last;
const Y: Part = Part::Year;
const YY: Part = Part::ShortYear;
const DOT: Part = Part::Sep('.');
const UND: Part = Part::Sep('_');
const DASH: Part = Part::Sep('-');

/// Login shapes, from the most common to the least.
const PATTERNS: [&[Part]; 43] = [
    &[F, DOT, L],
    &[I, DOT, L],
    &[L, DOT, F],
    &[L, DOT, I],
    &[F, UND, L],
    &[I, UND, L],
    &[L, UND, F],
    &[L, UND, I],
    &[F, DASH, L],
    &[I, DASH, L],
    &[L, DASH, F],
    &[L, DASH, I],
    &[I, L],
    &[F, DOT, L, DOT, Y],
    &[I, DOT, L, DOT, Y],
    &[L, DOT, F, DOT, Y],
    &[L, DOT, I, DOT, Y],
    &[I, L, DOT, Y],
    &[I, L, UND, Y],
    &[F, UND, L, UND, Y],
    &[I, UND, L, UND, Y],
    &[L, UND, F, UND, Y],
    &[L, UND, I, UND, Y],
    &[I, L, DASH, Y],
    &[F, DASH, L, DASH, Y],
    &[I, DASH, L, DASH, Y],
    &[L, DASH, F, DASH, Y],
    &[L, DASH, I, DASH, Y],
    &[F, DOT, L, DOT, YY],
    &[I, DOT, L, DOT, YY],
    &[L, DOT, F, DOT, YY],
    &[L, DOT, I, DOT, YY],
    &[I, L, DOT, YY],
    &[I, L, UND, YY],
    &[F, UND, L, UND, YY],
    &[I, UND, L, UND, YY],
    &[L, UND, F, UND, YY],
    &[L, UND, I, UND, YY],
    &[I, L, DASH, YY],
    &[F, DASH, L, DASH, YY],
    &[I, DASH, L, DASH, YY],
    &[L, DASH, F, DASH, YY],
    &[L, DASH, I, DASH, YY],
];

/// Number of distinct login shapes before counters are appended.
pub const PATTERN_COUNT: usize = PATTERNS.len();

fn render(parts: &[Part], person: &PersonRecord) -> String {
    let year = person.birth_year();
    let mut login = String::new();
    for part in parts {
        match part {
            Part::First => login.push_str(&person.first_name),
            Part::Initial => login.extend(person.first_name.chars().next()),
            Part::Last => login.push_str(&person.last_name),
            Part::Year => login.push_str(&format!("{year:04}")),
            Part::ShortYear => login.push_str(&format!("{:02}", year.rem_euclid(100))),
            Part::Sep(sep) => login.push(*sep),
        }
    }
    login
}

/// Latin login for a person under pattern `variant`.
///
/// Variants past the table wrap around and append the pass number, so every
/// variant yields a different login for the same person.
pub fn login(person: &PersonRecord, variant: usize) -> Result<String, GenerationError> {
    let parts = PATTERNS[variant % PATTERN_COUNT];
    let pass = variant / PATTERN_COUNT;
    let mut login = transliterate(&render(parts, person))?;
    if pass > 0 {
        login.push_str(&(pass + 1).to_string());
    }
    Ok(login)
}

/// Emails for a dataset plus how many rows needed a fallback pattern.
#[derive(Debug, Clone, Default)]
pub struct EmailBatch {
    pub emails: Vec<String>,
    pub fallbacks: u64,
}

/// Derives globally unique emails from names and birth years.
#[derive(Debug, Clone, Copy)]
pub struct EmailGenerator {
    max_attempts: u32,
}

impl Default for EmailGenerator {
    fn default() -> Self {
        Self { max_attempts: 1000 }
    }
}

impl EmailGenerator {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn generate(
        &self,
        persons: &[PersonRecord],
        rng: &mut impl Rng,
    ) -> Result<EmailBatch, GenerationError> {
        let mut seen = HashSet::with_capacity(persons.len());
        let mut emails = Vec::with_capacity(persons.len());
        let mut fallbacks = 0_u64;

        for (row, person) in persons.iter().enumerate() {
            let mut variant = row % INITIAL_PATTERNS;
            let mut attempts = 1;
            let mut email = candidate(person, variant, rng)?;
            while seen.contains(&email) {
                if attempts >= self.max_attempts {
                    return Err(GenerationError::SamplingExhaustion {
                        what: "emails",
                        requested: persons.len(),
                        available: emails.len(),
                    });
                }
                attempts += 1;
                variant += 1;
                email = candidate(person, variant, rng)?;
            }
            if attempts > 1 {
                fallbacks += 1;
            }
            seen.insert(email.clone());
            emails.push(email);
        }

        debug!(emails = emails.len(), fallbacks, "emails generated");
        Ok(EmailBatch { emails, fallbacks })
    }
}

fn candidate(
    person: &PersonRecord,
    variant: usize,
    rng: &mut impl Rng,
) -> Result<String, GenerationError> {
    let domain = DOMAINS[rng.random_range(0..DOMAINS.len())];
    Ok(login(person, variant)? + domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_patterns_carry_no_year() {
        for parts in &PATTERNS[..INITIAL_PATTERNS] {
            assert!(!parts.iter().any(|p| matches!(p, Part::Year | Part::ShortYear)));
        }
    }

    #[test]
    fn patterns_are_distinct() {
        let unique: HashSet<_> = PATTERNS.iter().collect();
        assert_eq!(unique.len(), PATTERN_COUNT);
    }
}
