//! Locale tables
//!
//! A single [`Locale`] value selects weekday names, month names and the AQI
//! advisory texts. Adding a language means adding one arm to each table.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::aqi::AqiAdvisory;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    PtBr,
}

const WEEKDAYS_EN: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const WEEKDAYS_PT_BR: [&str; 7] = [
    "Domingo", "Segunda", "Terça", "Quarta", "Quinta", "Sexta", "Sabado",
];

const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const MONTHS_PT_BR: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

const AQI_EN: [AqiAdvisory; 5] = [
    AqiAdvisory {
        level: "Good",
        message: "Air quality is considered satisfactory and air pollution poses little or no risk.",
    },
    AqiAdvisory {
        level: "Fair",
        message: "Air quality is acceptable; however, for some pollutants there may be a moderate health concern for a very small number of people who are unusually sensitive to air pollution.",
    },
    AqiAdvisory {
        level: "Moderate",
        message: "Members of sensitive groups may experience health effects. The general public is not likely to be affected.",
    },
    AqiAdvisory {
        level: "Poor",
        message: "Everyone may begin to experience health effects; members of sensitive groups may experience more serious health effects.",
    },
    AqiAdvisory {
        level: "Very Poor",
        message: "Health warnings of emergency conditions. The entire population is more likely to be affected.",
    },
];

const AQI_PT_BR: [AqiAdvisory; 5] = [
    AqiAdvisory {
        level: "Bom",
        message: "A qualidade do ar é considerada satisfatória e a poluição do ar apresenta pouco ou nenhum risco.",
    },
    AqiAdvisory {
        level: "Adequada",
        message: "A qualidade do ar é aceitável; no entanto, para alguns poluentes, pode haver uma preocupação moderada com a saúde para um número muito pequeno de pessoas que são especialmente sensíveis à poluição do ar.",
    },
    AqiAdvisory {
        level: "Moderada",
        message: "Membros de grupos sensíveis podem experienciar efeitos na saúde. O público em geral não é provável de ser afetado.",
    },
    AqiAdvisory {
        level: "Ruim",
        message: "Todos podem começar a experimentar efeitos na saúde; membros de grupos sensíveis podem experimentar efeitos na saúde mais graves.",
    },
    AqiAdvisory {
        level: "Muito Ruim",
        message: "Avisos de saúde sobre condições de emergência. É mais provável que toda a população seja afetada.",
    },
];

impl Locale {
    /// Weekday name, `0` = Sunday
    pub fn weekday(&self, days_from_sunday: usize) -> &'static str {
        let table = match self {
            Locale::En => &WEEKDAYS_EN,
            Locale::PtBr => &WEEKDAYS_PT_BR,
        };
        table[days_from_sunday % 7]
    }

    /// Abbreviated month name, `0` = January
    pub fn month(&self, month0: usize) -> &'static str {
        let table = match self {
            Locale::En => &MONTHS_EN,
            Locale::PtBr => &MONTHS_PT_BR,
        };
        table[month0 % 12]
    }

    pub(crate) fn aqi_table(&self) -> &'static [AqiAdvisory; 5] {
        match self {
            Locale::En => &AQI_EN,
            Locale::PtBr => &AQI_PT_BR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::PtBr => "pt-br",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("unsupported locale: {0} (expected en or pt-br)")]
    Unsupported(String),
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            "pt" | "pt-br" => Ok(Locale::PtBr),
            other => Err(LocaleError::Unsupported(other.to_string())),
        }
    }
}
