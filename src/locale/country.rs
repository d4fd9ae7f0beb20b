use std::fmt;

use crate::locale::data;

/// ISO 3166-1 country record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Country {
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    pub numeric: u16,
    pub name: &'static str,
}

impl Country {
    pub(crate) const fn new(
        alpha2: &'static str,
        alpha3: &'static str,
        numeric: u16,
        name: &'static str,
    ) -> Self {
        Self {
            alpha2,
            alpha3,
            numeric,
            name,
        }
    }

    /// Looks up an alpha-2 or alpha-3 code, ignoring case and surrounding
    /// whitespace.
    ///
    /// ```
    /// use commonskit::locale::Country;
    ///
    /// assert_eq!(Country::by_code("at").map(|c| c.name), Some("Austria"));
    /// assert_eq!(Country::by_code("DEU").map(|c| c.alpha2), Some("DE"));
    /// assert!(Country::by_code("Z").is_none());
    /// ```
    pub fn by_code(code: &str) -> Option<&'static Country> {
        let code = code.trim().to_ascii_uppercase();
        match code.len() {
            2 => data::country_by_alpha2(&code),
            3 => data::country_by_alpha3(&code),
            _ => None,
        }
    }

    pub fn by_numeric(numeric: u16) -> Option<&'static Country> {
        data::country_by_numeric(numeric)
    }

    /// Every known country in alpha-2 order.
    pub fn all() -> &'static [Country] {
        data::COUNTRIES
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_code_is_case_insensitive() {
        let austria = Country::by_code("AT").unwrap();
        assert_eq!(Country::by_code(" at "), Some(austria));
        assert_eq!(Country::by_code("aut"), Some(austria));
        assert_eq!(austria.numeric, 40);
        assert_eq!(austria.to_string(), "Austria");
    }

    #[test]
    fn unknown_codes() {
        assert_eq!(Country::by_code(""), None);
        assert_eq!(Country::by_code("XX"), None);
        assert_eq!(Country::by_code("ABCD"), None);
        assert_eq!(Country::by_numeric(999), None);
    }
}
