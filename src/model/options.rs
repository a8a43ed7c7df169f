//! Static form option catalogs
//!
//! The prediction service accepts a fixed vocabulary for the categorical
//! fields. Each option pairs the stable wire code with display labels for
//! both supported locales. The wire code is what gets serialized into the
//! request payload regardless of the active locale.

use crate::i18n::Locale;

/// A categorical option: wire code plus localized display labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    /// Stable code sent to the prediction service
    pub value: &'static str,
    pub label_en: &'static str,
    pub label_bs: &'static str,
}

impl SelectOption {
    pub fn label(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.label_en,
            Locale::Bs => self.label_bs,
        }
    }
}

/// Municipalities grouped by region, in the service's vocabulary
pub const LOCATIONS_BY_REGION: &[(&str, &[&str])] = &[
    (
        "Sarajevo",
        &[
            "Sarajevo - Centar",
            "Sarajevo - Novi Grad",
            "Sarajevo - Novo Sarajevo",
            "Sarajevo - Stari Grad",
            "Hadžići",
            "Ilidža",
            "Ilijaš",
            "Trnovo",
            "Vogošća",
            "Istočna Ilidža",
            "Istočni Stari Grad",
            "Istočno Sarajevo",
        ],
    ),
    (
        "Banja Luka Region",
        &[
            "Banja Luka",
            "Čelinac",
            "Gradiška",
            "Jezero",
            "Kneževo",
            "Kostajnica",
            "Kotor Varoš",
            "Kozarska Dubica",
            "Krupa na Uni",
            "Laktaši",
            "Mrkonjić Grad",
            "Novi Grad",
            "Oštra Luka",
            "Prijedor",
            "Prnjavor",
            "Ribnik",
            "Šipovo",
            "Srbac",
        ],
    ),
    (
        "Tuzla Region",
        &[
            "Tuzla",
            "Banovići",
            "Čelić",
            "Doboj Istok",
            "Gračanica",
            "Gradačac",
            "Kalesija",
            "Kladanj",
            "Lukavac",
            "Sapna",
            "Srebrenik",
            "Teočak",
            "Živinice",
        ],
    ),
    (
        "Zenica-Doboj",
        &[
            "Zenica", "Breza", "Doboj", "Doboj Jug", "Kakanj", "Maglaj", "Olovo", "Tešanj",
            "Usora", "Vareš", "Visoko", "Zavidovići", "Žepče",
        ],
    ),
    (
        "Mostar Region",
        &[
            "Mostar",
            "Čapljina",
            "Čitluk",
            "Jablanica",
            "Konjic",
            "Neum",
            "Prozor",
            "Ravno",
            "Stolac",
            "Grude",
            "Ljubuški",
            "Posušje",
            "Široki Brijeg",
            "Istočni Mostar",
        ],
    ),
    (
        "Central Bosnia",
        &[
            "Travnik",
            "Bugojno",
            "Busovača",
            "Dobretići",
            "Donji Vakuf",
            "Fojnica",
            "Gornji Vakuf-Uskoplje",
            "Jajce",
            "Kiseljak",
            "Kreševo",
            "Novi Travnik",
            "Vitez",
        ],
    ),
    (
        "Una-Sana",
        &[
            "Bihać",
            "Bosanska Krupa",
            "Bosanski Petrovac",
            "Bužim",
            "Cazin",
            "Ključ",
            "Sanski Most",
            "Velika Kladuša",
        ],
    ),
    (
        "Posavina",
        &[
            "Brčko",
            "Bijeljina",
            "Brod",
            "Derventa",
            "Domaljevac-Šamac",
            "Donji Žabar",
            "Lopare",
            "Modriča",
            "Odžak",
            "Orašje",
            "Pelagićevo",
            "Petrovo",
            "Šamac",
            "Stanari",
            "Teslić",
            "Ugljevik",
            "Vukosavlje",
        ],
    ),
    (
        "Eastern Bosnia",
        &[
            "Zvornik",
            "Bratunac",
            "Han Pijesak",
            "Milići",
            "Novo Goražde",
            "Osmaci",
            "Pale",
            "Rogatica",
            "Rudo",
            "Šekovići",
            "Sokolac",
            "Srebrenica",
            "Višegrad",
            "Vlasenica",
            "Goražde",
            "Ustikolina",
        ],
    ),
    (
        "Herzegovina",
        &[
            "Trebinje",
            "Berkovići",
            "Bileća",
            "Čajniče",
            "Foča",
            "Gacko",
            "Kalinovik",
            "Ljubinje",
            "Nevesinje",
        ],
    ),
    (
        "Western Bosnia",
        &[
            "Livno",
            "Bosansko Grahovo",
            "Drvar",
            "Glamoč",
            "Kupres",
            "Tomislavgrad",
        ],
    ),
];

/// All municipalities as a flat, alphabetically sorted list
pub fn all_locations() -> Vec<&'static str> {
    let mut cities: Vec<&'static str> = LOCATIONS_BY_REGION
        .iter()
        .flat_map(|(_, cities)| cities.iter().copied())
        .collect();
    cities.sort_unstable();
    cities
}

/// Whether `location` is one of the municipalities the service knows
pub fn is_valid_location(location: &str) -> bool {
    LOCATIONS_BY_REGION
        .iter()
        .any(|(_, cities)| cities.contains(&location))
}

pub const YEAR_BUILT_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "2025+", label_en: "2025 or newer", label_bs: "2025 ili novije" },
    SelectOption { value: "2020+", label_en: "2020-2024", label_bs: "2020-2024" },
    SelectOption { value: "2015+", label_en: "2015-2019", label_bs: "2015-2019" },
    SelectOption { value: "2010+", label_en: "2010-2014", label_bs: "2010-2014" },
    SelectOption { value: "2000 do 2009", label_en: "2000-2009", label_bs: "2000 do 2009" },
    SelectOption { value: "1990 do 1999", label_en: "1990-1999", label_bs: "1990 do 1999" },
    SelectOption { value: "1980 do 1989", label_en: "1980-1989", label_bs: "1980 do 1989" },
    SelectOption { value: "1970 do 1979", label_en: "1970-1979", label_bs: "1970 do 1979" },
    SelectOption { value: "1960 do 1969", label_en: "1960-1969", label_bs: "1960 do 1969" },
    SelectOption { value: "1950 do 1959", label_en: "1950-1959", label_bs: "1950 do 1959" },
    SelectOption { value: "Prije 1950", label_en: "Before 1950", label_bs: "Prije 1950" },
];

pub const CONDITION_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "Novogradnja", label_en: "New Construction", label_bs: "Novogradnja" },
    SelectOption { value: "Renoviran", label_en: "Renovated", label_bs: "Renoviran" },
    SelectOption { value: "Dobro stanje", label_en: "Good Condition", label_bs: "Dobro stanje" },
    SelectOption {
        value: "Parcijalno renoviran",
        label_en: "Partially Renovated",
        label_bs: "Parcijalno renoviran",
    },
    SelectOption {
        value: "Za renoviranje",
        label_en: "Needs Renovation",
        label_bs: "Za renoviranje",
    },
    SelectOption { value: "U izgradnji", label_en: "Under Construction", label_bs: "U izgradnji" },
];

pub const FURNISHED_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "Namješten", label_en: "Furnished", label_bs: "Namješten" },
    SelectOption { value: "Nenamješten", label_en: "Unfurnished", label_bs: "Nenamješten" },
    SelectOption { value: "Polunamješten", label_en: "Semi-furnished", label_bs: "Polunamješten" },
];

pub const HEATING_OPTIONS: &[SelectOption] = &[
    SelectOption {
        value: "Centralno (gradsko)",
        label_en: "Central (City)",
        label_bs: "Centralno (gradsko)",
    },
    SelectOption {
        value: "Centralno (Kotlovnica)",
        label_en: "Central (Boiler Room)",
        label_bs: "Centralno (Kotlovnica)",
    },
    SelectOption {
        value: "Centralno (Plin)",
        label_en: "Central (Gas)",
        label_bs: "Centralno (Plin)",
    },
    SelectOption { value: "Plin", label_en: "Gas", label_bs: "Plin" },
    SelectOption { value: "Struja", label_en: "Electric", label_bs: "Struja" },
    SelectOption { value: "Drva", label_en: "Wood", label_bs: "Drva" },
    SelectOption { value: "Ostalo", label_en: "Other", label_bs: "Ostalo" },
];

/// Find an option by its wire code
pub fn find_option(options: &'static [SelectOption], value: &str) -> Option<&'static SelectOption> {
    options.iter().find(|o| o.value == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_locations_sorted_and_complete() {
        let locations = all_locations();
        let total: usize = LOCATIONS_BY_REGION.iter().map(|(_, c)| c.len()).sum();
        assert_eq!(locations.len(), total);
        let mut sorted = locations.clone();
        sorted.sort_unstable();
        assert_eq!(locations, sorted);
    }

    #[test]
    fn test_known_locations_valid() {
        assert!(is_valid_location("Sarajevo - Centar"));
        assert!(is_valid_location("Banja Luka"));
        assert!(is_valid_location("Brčko"));
        assert!(!is_valid_location("Vienna"));
        assert!(!is_valid_location(""));
    }

    #[test]
    fn test_option_label_by_locale() {
        let option = find_option(CONDITION_OPTIONS, "Dobro stanje").unwrap();
        assert_eq!(option.label(Locale::En), "Good Condition");
        assert_eq!(option.label(Locale::Bs), "Dobro stanje");
    }

    #[test]
    fn test_option_codes_unique() {
        for options in [
            YEAR_BUILT_OPTIONS,
            CONDITION_OPTIONS,
            FURNISHED_OPTIONS,
            HEATING_OPTIONS,
        ] {
            for (i, a) in options.iter().enumerate() {
                for b in &options[i + 1..] {
                    assert_ne!(a.value, b.value);
                }
            }
        }
    }

    #[test]
    fn test_find_option_unknown_code() {
        assert!(find_option(HEATING_OPTIONS, "Nuklearno").is_none());
    }
}
