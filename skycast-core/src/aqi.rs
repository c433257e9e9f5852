//! Air Quality Index buckets (1 = good … 5 = very poor)

use thiserror::Error;

use crate::locale::Locale;

/// Severity label plus a one-sentence health advisory
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AqiAdvisory {
    pub level: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AqiError {
    #[error("air quality index {0} is outside 1..=5")]
    OutOfRange(u8),
}

/// A validated AQI bucket
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Aqi(u8);

impl Aqi {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn index(&self) -> u8 {
        self.0
    }

    pub fn advisory(&self, locale: Locale) -> AqiAdvisory {
        locale.aqi_table()[usize::from(self.0 - Self::MIN)]
    }
}

impl TryFrom<u8> for Aqi {
    type Error = AqiError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&index) {
            Ok(Self(index))
        } else {
            Err(AqiError::OutOfRange(index))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_good_label_per_locale() {
        let aqi = Aqi::try_from(1).unwrap();
        assert_eq!(aqi.advisory(Locale::En).level, "Good");
        assert_eq!(aqi.advisory(Locale::PtBr).level, "Bom");
    }

    #[test]
    fn test_very_poor() {
        let aqi = Aqi::try_from(5).unwrap();
        assert_eq!(aqi.advisory(Locale::En).level, "Very Poor");
        assert!(aqi.advisory(Locale::En).message.starts_with("Health warnings"));
    }

    #[test]
    fn test_out_of_range_is_error() {
        assert_eq!(Aqi::try_from(0), Err(AqiError::OutOfRange(0)));
        assert_eq!(Aqi::try_from(6), Err(AqiError::OutOfRange(6)));
    }

    #[test]
    fn test_every_bucket_has_text() {
        for index in Aqi::MIN..=Aqi::MAX {
            let aqi = Aqi::try_from(index).unwrap();
            for locale in [Locale::En, Locale::PtBr] {
                let advisory = aqi.advisory(locale);
                assert!(!advisory.level.is_empty());
                assert!(!advisory.message.is_empty());
            }
        }
    }
}
