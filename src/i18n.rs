//! Localization
//!
//! Every user-visible string is addressed by a message key and resolved
//! against the active locale. English is the default; Bosnian is the
//! language of the market the estimator serves. The locale is part of the
//! persisted config and can be switched at runtime.

use serde::{Deserialize, Serialize};

/// Supported display locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Bs,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Bs => "bs",
        }
    }

    /// The locale the language toggle switches to
    pub fn other(&self) -> Locale {
        match self {
            Locale::En => Locale::Bs,
            Locale::Bs => Locale::En,
        }
    }

    pub fn from_code(code: &str) -> Option<Locale> {
        match code {
            "en" => Some(Locale::En),
            "bs" => Some(Locale::Bs),
            _ => None,
        }
    }
}

/// Message keys for all user-visible strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    // Form
    FormTitle,
    FormSubtitle,
    Location,
    LocationPlaceholder,
    Size,
    Rooms,
    Floor,
    Bathrooms,
    YearBuilt,
    Condition,
    Furnished,
    Heating,
    Extras,
    Balcony,
    Garage,
    Parking,
    Elevator,
    Registered,
    ArmoredDoor,
    Submit,
    Submitting,
    SelectOption,

    // Result panel
    ResultTitle,
    ResultSubtitle,
    EstimatedPrice,
    Currency,
    Calculating,
    CalculatingDetail,
    Ready,
    ReadyDetail,
    NewEstimation,
    PreviousEstimation,
    Completed,
    Disclaimer,

    // Notifications
    EstimationFailed,

    // Validation
    LocationRequired,
    LocationUnknown,
    SizeRange,
    RoomsRange,
    FloorRange,
    BathroomsRange,
    YearRequired,
    ConditionRequired,
    FurnishedRequired,
    HeatingRequired,
    NotANumber,

    // Quit dialog
    QuitTitle,
    QuitPrompt,
    QuitYes,
    QuitNo,

    // Help bar and overlay
    HelpTitle,
    HelpNavigate,
    HelpEdit,
    HelpSubmit,
    HelpNewEstimation,
    HelpReset,
    HelpLanguage,
    HelpTheme,
    HelpQuit,
}

/// Resolve a message key for the given locale
pub fn tr(locale: Locale, msg: Msg) -> &'static str {
    match locale {
        Locale::En => tr_en(msg),
        Locale::Bs => tr_bs(msg),
    }
}

fn tr_en(msg: Msg) -> &'static str {
    match msg {
        Msg::FormTitle => "Apartment Price Estimation",
        Msg::FormSubtitle => "Enter the property details to get an estimate",
        Msg::Location => "Location",
        Msg::LocationPlaceholder => "Choose a municipality...",
        Msg::Size => "Size (m²)",
        Msg::Rooms => "Rooms",
        Msg::Floor => "Floor",
        Msg::Bathrooms => "Bathrooms",
        Msg::YearBuilt => "Year Built",
        Msg::Condition => "Condition",
        Msg::Furnished => "Furnished",
        Msg::Heating => "Heating",
        Msg::Extras => "Additional Features",
        Msg::Balcony => "Balcony",
        Msg::Garage => "Garage",
        Msg::Parking => "Parking",
        Msg::Elevator => "Elevator",
        Msg::Registered => "Registered (1/1)",
        Msg::ArmoredDoor => "Armored Door",
        Msg::Submit => "Estimate Price",
        Msg::Submitting => "Estimating...",
        Msg::SelectOption => "Select an option",
        Msg::ResultTitle => "Your Estimate",
        Msg::ResultSubtitle => "Based on current market data",
        Msg::EstimatedPrice => "Estimated price",
        Msg::Currency => "KM",
        Msg::Calculating => "Calculating...",
        Msg::CalculatingDetail => "Analyzing comparable properties",
        Msg::Ready => "Ready to estimate",
        Msg::ReadyDetail => "Fill in the form and submit to see a price",
        Msg::NewEstimation => "New Estimation",
        Msg::PreviousEstimation => "Previous Estimation",
        Msg::Completed => "Completed",
        Msg::Disclaimer => "Estimates are informational and not a formal appraisal.",
        Msg::EstimationFailed => "Estimation failed, please try again",
        Msg::LocationRequired => "Location is required",
        Msg::LocationUnknown => "Unknown municipality",
        Msg::SizeRange => "Size must be between 15 and 1000 m²",
        Msg::RoomsRange => "Rooms must be between 1 and 20",
        Msg::FloorRange => "Floor must be between -4 and 100",
        Msg::BathroomsRange => "Bathrooms must be between 1 and 10",
        Msg::YearRequired => "Year built is required",
        Msg::ConditionRequired => "Condition is required",
        Msg::FurnishedRequired => "Furnished state is required",
        Msg::HeatingRequired => "Heating type is required",
        Msg::NotANumber => "Enter a valid number",
        Msg::QuitTitle => "Quit?",
        Msg::QuitPrompt => "Are you sure you want to quit?",
        Msg::QuitYes => "Yes, quit",
        Msg::QuitNo => "No, cancel",
        Msg::HelpTitle => "Help",
        Msg::HelpNavigate => "Navigate",
        Msg::HelpEdit => "Edit",
        Msg::HelpSubmit => "Submit",
        Msg::HelpNewEstimation => "New estimation",
        Msg::HelpReset => "Reset",
        Msg::HelpLanguage => "Language",
        Msg::HelpTheme => "Theme",
        Msg::HelpQuit => "Quit",
    }
}

fn tr_bs(msg: Msg) -> &'static str {
    match msg {
        Msg::FormTitle => "Procjena cijene stana",
        Msg::FormSubtitle => "Unesite podatke o nekretnini za procjenu",
        Msg::Location => "Lokacija",
        Msg::LocationPlaceholder => "Odaberite općinu...",
        Msg::Size => "Površina (m²)",
        Msg::Rooms => "Broj soba",
        Msg::Floor => "Sprat",
        Msg::Bathrooms => "Kupatila",
        Msg::YearBuilt => "Godina izgradnje",
        Msg::Condition => "Stanje",
        Msg::Furnished => "Namještenost",
        Msg::Heating => "Grijanje",
        Msg::Extras => "Dodatne karakteristike",
        Msg::Balcony => "Balkon",
        Msg::Garage => "Garaža",
        Msg::Parking => "Parking",
        Msg::Elevator => "Lift",
        Msg::Registered => "Uknjižen (1/1)",
        Msg::ArmoredDoor => "Blindirana vrata",
        Msg::Submit => "Procijeni cijenu",
        Msg::Submitting => "Procjenjujem...",
        Msg::SelectOption => "Odaberite opciju",
        Msg::ResultTitle => "Vaša procjena",
        Msg::ResultSubtitle => "Na osnovu aktuelnih tržišnih podataka",
        Msg::EstimatedPrice => "Procijenjena cijena",
        Msg::Currency => "KM",
        Msg::Calculating => "Računam...",
        Msg::CalculatingDetail => "Analiziram uporedive nekretnine",
        Msg::Ready => "Spremno za procjenu",
        Msg::ReadyDetail => "Popunite formu i pošaljite da vidite cijenu",
        Msg::NewEstimation => "Nova procjena",
        Msg::PreviousEstimation => "Prethodna procjena",
        Msg::Completed => "Završeno",
        Msg::Disclaimer => "Procjene su informativne i nisu formalna procjena vrijednosti.",
        Msg::EstimationFailed => "Procjena nije uspjela, pokušajte ponovo",
        Msg::LocationRequired => "Lokacija je obavezna",
        Msg::LocationUnknown => "Nepoznata općina",
        Msg::SizeRange => "Površina mora biti između 15 i 1000 m²",
        Msg::RoomsRange => "Broj soba mora biti između 1 i 20",
        Msg::FloorRange => "Sprat mora biti između -4 i 100",
        Msg::BathroomsRange => "Broj kupatila mora biti između 1 i 10",
        Msg::YearRequired => "Godina izgradnje je obavezna",
        Msg::ConditionRequired => "Stanje je obavezno",
        Msg::FurnishedRequired => "Namještenost je obavezna",
        Msg::HeatingRequired => "Tip grijanja je obavezan",
        Msg::NotANumber => "Unesite ispravan broj",
        Msg::QuitTitle => "Izlaz?",
        Msg::QuitPrompt => "Da li ste sigurni da želite izaći?",
        Msg::QuitYes => "Da, izađi",
        Msg::QuitNo => "Ne, odustani",
        Msg::HelpTitle => "Pomoć",
        Msg::HelpNavigate => "Navigacija",
        Msg::HelpEdit => "Uredi",
        Msg::HelpSubmit => "Pošalji",
        Msg::HelpNewEstimation => "Nova procjena",
        Msg::HelpReset => "Poništi",
        Msg::HelpLanguage => "Jezik",
        Msg::HelpTheme => "Tema",
        Msg::HelpQuit => "Izlaz",
    }
}

/// Format a price with thousands separators, e.g. 185000 -> "185,000"
pub fn format_price(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_roundtrip() {
        assert_eq!(Locale::from_code("bs"), Some(Locale::Bs));
        assert_eq!(Locale::from_code("en"), Some(Locale::En));
        assert_eq!(Locale::from_code("de"), None);
        assert_eq!(Locale::En.other(), Locale::Bs);
        assert_eq!(Locale::Bs.other(), Locale::En);
    }

    #[test]
    fn test_translations_differ_where_expected() {
        assert_eq!(tr(Locale::En, Msg::Currency), "KM");
        assert_eq!(tr(Locale::Bs, Msg::Currency), "KM");
        assert_ne!(tr(Locale::En, Msg::Submit), tr(Locale::Bs, Msg::Submit));
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "0");
        assert_eq!(format_price(950), "950");
        assert_eq!(format_price(1000), "1,000");
        assert_eq!(format_price(185000), "185,000");
        assert_eq!(format_price(1234567), "1,234,567");
    }
}
