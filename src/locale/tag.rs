use std::fmt;
use std::str::FromStr;

use crate::error::ArgumentError;
use crate::locale::{Country, data};

/// Language, country and variant triple.
///
/// Language is stored lower case, country upper case; the variant is kept
/// as given. Any part may be empty.
///
/// | Parts                      | `Display`        | `to_language_tag()` |
/// |----------------------------|------------------|---------------------|
/// | `de`                       | `de`             | `de`                |
/// | `de`, `AT`                 | `de_AT`          | `de-AT`             |
/// | `""`, `AT`                 | `_AT`            | `und-AT`            |
/// | `de`, `AT`, `POSIX`        | `de_AT_POSIX`    | `de-AT-POSIX`       |
/// | `de`, `""`, `POSIX`        | `de__POSIX`      | `de-POSIX`          |
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locale {
    language: String,
    country: String,
    variant: String,
}

impl Locale {
    pub fn new(language: &str, country: &str) -> Self {
        Self::with_variant(language, country, "")
    }

    pub fn with_variant(language: &str, country: &str, variant: &str) -> Self {
        Self {
            language: language.trim().to_ascii_lowercase(),
            country: country.trim().to_ascii_uppercase(),
            variant: variant.trim().to_owned(),
        }
    }

    /// Parses `de`, `de_AT`, `de-AT`, `_AT`, `und-AT` or `de_AT_VARIANT`.
    ///
    /// # Errors
    ///
    /// [`ArgumentError::InvalidArgument`] when the tag is empty, the language
    /// is not 2 to 8 letters, or the country is not 2 letters or 3 digits.
    pub fn parse(tag: &str) -> Result<Self, ArgumentError> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(ArgumentError::invalid("empty locale tag"));
        }

        let mut parts = tag.splitn(3, ['_', '-']);
        let language = match parts.next().unwrap_or_default() {
            // undetermined, as written by `to_language_tag`
            und if und.eq_ignore_ascii_case("und") => "",
            language => language,
        };
        let country = parts.next().unwrap_or_default();
        let variant = parts.next().unwrap_or_default();

        if !language.is_empty()
            && !((2..=8).contains(&language.len()) && language.bytes().all(|b| b.is_ascii_alphabetic()))
        {
            return Err(ArgumentError::invalid(format!("invalid language in locale tag: {tag:?}")));
        }
        let country_ok = country.is_empty()
            || (country.len() == 2 && country.bytes().all(|b| b.is_ascii_alphabetic()))
            || (country.len() == 3 && country.bytes().all(|b| b.is_ascii_digit()));
        if !country_ok {
            return Err(ArgumentError::invalid(format!("invalid country in locale tag: {tag:?}")));
        }
        if language.is_empty() && country.is_empty() {
            return Err(ArgumentError::invalid(format!("locale tag has no language or country: {tag:?}")));
        }

        Ok(Self::with_variant(language, country, variant))
    }

    #[inline]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[inline]
    pub fn country(&self) -> &str {
        &self.country
    }

    #[inline]
    pub fn variant(&self) -> &str {
        &self.variant
    }

    /// BCP 47 style tag joined with `-`; an empty language becomes `und`.
    pub fn to_language_tag(&self) -> String {
        let mut tag = if self.language.is_empty() {
            String::from("und")
        } else {
            self.language.clone()
        };
        for part in [&self.country, &self.variant] {
            if !part.is_empty() {
                tag.push('-');
                tag.push_str(part);
            }
        }
        tag
    }

    /// English language name, if the code is ISO 639-1.
    pub fn display_language(&self) -> Option<&'static str> {
        data::language_name(&self.language)
    }

    pub fn display_country(&self) -> Option<&'static str> {
        self.country_record().map(|country| country.name)
    }

    pub fn iso3_country(&self) -> Option<&'static str> {
        self.country_record().map(|country| country.alpha3)
    }

    /// Resolves the country part, which may be alpha-2 or a numeric code.
    pub fn country_record(&self) -> Option<&'static Country> {
        match self.country.parse::<u16>() {
            Ok(numeric) => Country::by_numeric(numeric),
            Err(_) => data::country_by_alpha2(&self.country),
        }
    }

    /// `true` when every non-empty part is a known ISO code and at least one
    /// of language and country is set.
    pub fn is_known(&self) -> bool {
        let language_ok = self.language.is_empty() || self.display_language().is_some();
        let country_ok = self.country.is_empty() || self.country_record().is_some();
        language_ok && country_ok && !(self.language.is_empty() && self.country.is_empty())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.language.is_empty() && self.country.is_empty() {
            return f.pad("");
        }
        let mut out = self.language.clone();
        if !self.country.is_empty() || !self.variant.is_empty() {
            out.push('_');
            out.push_str(&self.country);
        }
        if !self.variant.is_empty() {
            out.push('_');
            out.push_str(&self.variant);
        }
        f.pad(&out)
    }
}

impl FromStr for Locale {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case() {
        let locale = Locale::new(" DE ", "at");
        assert_eq!(locale.language(), "de");
        assert_eq!(locale.country(), "AT");
        assert_eq!(locale.to_string(), "de_AT");
    }

    #[test]
    fn display_forms() {
        assert_eq!(Locale::new("de", "").to_string(), "de");
        assert_eq!(Locale::new("", "AT").to_string(), "_AT");
        assert_eq!(Locale::with_variant("de", "AT", "POSIX").to_string(), "de_AT_POSIX");
        assert_eq!(Locale::with_variant("de", "", "POSIX").to_string(), "de__POSIX");
        assert_eq!(Locale::with_variant("", "", "POSIX").to_string(), "");
    }

    #[test]
    fn language_tags() {
        assert_eq!(Locale::new("de", "AT").to_language_tag(), "de-AT");
        assert_eq!(Locale::new("", "AT").to_language_tag(), "und-AT");
        assert_eq!(Locale::with_variant("de", "", "POSIX").to_language_tag(), "de-POSIX");
    }

    #[test]
    fn parse_accepts_both_separators() {
        assert_eq!(Locale::parse("de_AT").unwrap(), Locale::new("de", "AT"));
        assert_eq!(Locale::parse("de-at").unwrap(), Locale::new("de", "AT"));
        assert_eq!(Locale::parse("fr").unwrap(), Locale::new("fr", ""));
        assert_eq!(Locale::parse("_GB").unwrap(), Locale::new("", "GB"));
        assert_eq!(Locale::parse("es_419").unwrap().country(), "419");
        assert_eq!(
            Locale::parse("ja_JP_TRADITIONAL_X").unwrap().variant(),
            "TRADITIONAL_X"
        );
        assert_eq!("en-US".parse::<Locale>().unwrap().to_string(), "en_US");
    }

    #[test]
    fn undetermined_language_parses_back_to_empty() {
        let locale = Locale::new("", "AT");
        assert_eq!(locale.to_language_tag(), "und-AT");
        assert_eq!(Locale::parse("und-AT").unwrap(), locale);
        assert_eq!(Locale::parse("UND_at").unwrap(), locale);
        assert!(Locale::parse("und").is_err());
    }

    #[test]
    fn display_honors_width() {
        let locale = Locale::new("de", "AT");
        assert_eq!(format!("[{locale:<8}]"), "[de_AT   ]");
        assert_eq!(format!("[{locale:>7}]"), "[  de_AT]");
        assert_eq!(format!("{locale}"), "de_AT");
    }

    #[test]
    fn parse_rejects_malformed() {
        for bad in ["", "   ", "d", "de_A", "de_1234", "12_AT", "_", "de_A1"] {
            assert!(Locale::parse(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn display_names() {
        let locale = Locale::new("de", "AT");
        assert_eq!(locale.display_language(), Some("German"));
        assert_eq!(locale.display_country(), Some("Austria"));
        assert_eq!(locale.iso3_country(), Some("AUT"));
        assert!(locale.is_known());

        assert_eq!(Locale::new("de", "276").display_country(), Some("Germany"));
        assert!(!Locale::new("qq", "AT").is_known());
        assert!(!Locale::new("de", "QQ").is_known());
        assert!(!Locale::default().is_known());
    }
}
