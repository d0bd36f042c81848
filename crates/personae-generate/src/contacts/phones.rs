use rand::Rng;
use rand::seq::index;

use crate::errors::GenerationError;

/// Mobile operator codes used after the `+7` country prefix.
pub const REGIONAL_CODES: [&str; 13] = [
    "907", "935", "943", "944", "945", "946", "947", "948", "972", "973", "974", "975", "976",
];

const SUFFIX_START: u32 = 1_110_011;
const SUFFIX_END: u32 = 9_990_100;

/// Number of distinct 7-digit subscriber suffixes.
pub const POOL_SIZE: usize = (SUFFIX_END - SUFFIX_START) as usize;

/// Draws phone numbers whose subscriber parts never repeat within a call.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneGenerator;

impl PhoneGenerator {
    pub fn generate(&self, count: usize, rng: &mut impl Rng) -> Result<Vec<String>, GenerationError> {
        if count > POOL_SIZE {
            return Err(GenerationError::SamplingExhaustion {
                what: "phone numbers",
                requested: count,
                available: POOL_SIZE,
            });
        }

        let picks = index::sample(rng, POOL_SIZE, count);
        let phones = picks
            .into_iter()
            .map(|offset| {
                let code = REGIONAL_CODES[rng.random_range(0..REGIONAL_CODES.len())];
                format_phone(code, SUFFIX_START + offset as u32)
            })
            .collect();
        Ok(phones)
    }
}

/// `+7(<code>)<3>-<2>-<2>`.
pub fn format_phone(code: &str, suffix: u32) -> String {
    format!(
        "+7({code}){:03}-{:02}-{:02}",
        suffix / 10_000,
        (suffix / 100) % 100,
        suffix % 100
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_groups_of_three_two_two() {
        assert_eq!(format_phone("907", 1_110_011), "+7(907)111-00-11");
        assert_eq!(format_phone("976", 9_990_099), "+7(976)999-00-99");
    }

    #[test]
    fn pool_covers_the_numeric_range() {
        assert_eq!(POOL_SIZE, 8_880_089);
    }
}
