//! Phones and emails aligned with the base dataset.

pub mod emails;
pub mod phones;
pub mod translit;

use rand::Rng;

use personae_core::{ContactRecord, PersonRecord};

use crate::errors::GenerationError;

pub use emails::{EmailBatch, EmailGenerator};
pub use phones::PhoneGenerator;
pub use translit::transliterate;

/// Contact columns for a dataset.
#[derive(Debug, Clone)]
pub struct ContactBatch {
    pub contacts: Vec<ContactRecord>,
    pub email_fallbacks: u64,
}

/// Composes the phone and email generators.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactGenerator {
    phones: PhoneGenerator,
    emails: EmailGenerator,
}

impl ContactGenerator {
    pub fn new(max_attempts_email: u32) -> Self {
        Self {
            phones: PhoneGenerator,
            emails: EmailGenerator::new(max_attempts_email),
        }
    }

    /// One contact per person, row `i` belonging to `persons[i]`.
    pub fn generate(
        &self,
        persons: &[PersonRecord],
        rng: &mut impl Rng,
    ) -> Result<ContactBatch, GenerationError> {
        let phones = self.phones.generate(persons.len(), rng)?;
        let EmailBatch { emails, fallbacks } = self.emails.generate(persons, rng)?;
        let contacts = phones
            .into_iter()
            .zip(emails)
            .map(|(phone, email)| ContactRecord { phone, email })
            .collect();
        Ok(ContactBatch {
            contacts,
            email_fallbacks: fallbacks,
        })
    }
}
