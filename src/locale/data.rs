//! Static ISO tables.
//!
//! `LANGUAGES` holds ISO 639-1 codes, `COUNTRIES` ISO 3166-1 records. Both
//! are sorted by their two-letter code so lookups can binary search.

use crate::locale::Country;

/// ISO 639-1 `(code, English name)` pairs, sorted by code.
pub static LANGUAGES: &[(&str, &str)] = &[
    ("aa", "Afar"),
    ("ab", "Abkhazian"),
    ("ae", "Avestan"),
    ("af", "Afrikaans"),
    ("ak", "Akan"),
    ("am", "Amharic"),
    ("an", "Aragonese"),
    ("ar", "Arabic"),
    ("as", "Assamese"),
    ("av", "Avaric"),
    ("ay", "Aymara"),
    ("az", "Azerbaijani"),
    ("ba", "Bashkir"),
    ("be", "Belarusian"),
    ("bg", "Bulgarian"),
    ("bi", "Bislama"),
    ("bm", "Bambara"),
    ("bn", "Bengali"),
    ("bo", "Tibetan"),
    ("br", "Breton"),
    ("bs", "Bosnian"),
    ("ca", "Catalan"),
    ("ce", "Chechen"),
    ("ch", "Chamorro"),
    ("co", "Corsican"),
    ("cr", "Cree"),
    ("cs", "Czech"),
    ("cu", "Church Slavic"),
    ("cv", "Chuvash"),
    ("cy", "Welsh"),
    ("da", "Danish"),
    ("de", "German"),
    ("dv", "Divehi"),
    ("dz", "Dzongkha"),
    ("ee", "Ewe"),
    ("el", "Greek"),
    ("en", "English"),
    ("eo", "Esperanto"),
    ("es", "Spanish"),
    ("et", "Estonian"),
    ("eu", "Basque"),
    ("fa", "Persian"),
    ("ff", "Fula"),
    ("fi", "Finnish"),
    ("fj", "Fijian"),
    ("fo", "Faroese"),
    ("fr", "French"),
    ("fy", "Western Frisian"),
    ("ga", "Irish"),
    ("gd", "Scottish Gaelic"),
    ("gl", "Galician"),
    ("gn", "Guarani"),
    ("gu", "Gujarati"),
    ("gv", "Manx"),
    ("ha", "Hausa"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("ho", "Hiri Motu"),
    ("hr", "Croatian"),
    ("ht", "Haitian Creole"),
    ("hu", "Hungarian"),
    ("hy", "Armenian"),
    ("hz", "Herero"),
    ("ia", "Interlingua"),
    ("id", "Indonesian"),
    ("ie", "Interlingue"),
    ("ig", "Igbo"),
    ("ii", "Sichuan Yi"),
    ("ik", "Inupiaq"),
    ("io", "Ido"),
    ("is", "Icelandic"),
    ("it", "Italian"),
    ("iu", "Inuktitut"),
    ("ja", "Japanese"),
    ("jv", "Javanese"),
    ("ka", "Georgian"),
    ("kg", "Kongo"),
    ("ki", "Kikuyu"),
    ("kj", "Kuanyama"),
    ("kk", "Kazakh"),
    ("kl", "Kalaallisut"),
    ("km", "Khmer"),
    ("kn", "Kannada"),
    ("ko", "Korean"),
    ("kr", "Kanuri"),
    ("ks", "Kashmiri"),
    ("ku", "Kurdish"),
    ("kv", "Komi"),
    ("kw", "Cornish"),
    ("ky", "Kyrgyz"),
    ("la", "Latin"),
    ("lb", "Luxembourgish"),
    ("lg", "Ganda"),
    ("li", "Limburgish"),
    ("ln", "Lingala"),
    ("lo", "Lao"),
    ("lt", "Lithuanian"),
    ("lu", "Luba-Katanga"),
    ("lv", "Latvian"),
    ("mg", "Malagasy"),
    ("mh", "Marshallese"),
    ("mi", "Maori"),
    ("mk", "Macedonian"),
    ("ml", "Malayalam"),
    ("mn", "Mongolian"),
    ("mr", "Marathi"),
    ("ms", "Malay"),
    ("mt", "Maltese"),
    ("my", "Burmese"),
    ("na", "Nauru"),
    ("nb", "Norwegian Bokmal"),
    ("nd", "North Ndebele"),
    ("ne", "Nepali"),
    ("ng", "Ndonga"),
    ("nl", "Dutch"),
    ("nn", "Norwegian Nynorsk"),
    ("no", "Norwegian"),
    ("nr", "South Ndebele"),
    ("nv", "Navajo"),
    ("ny", "Nyanja"),
    ("oc", "Occitan"),
    ("oj", "Ojibwa"),
    ("om", "Oromo"),
    ("or", "Odia"),
    ("os", "Ossetic"),
    ("pa", "Punjabi"),
    ("pi", "Pali"),
    ("pl", "Polish"),
    ("ps", "Pashto"),
    ("pt", "Portuguese"),
    ("qu", "Quechua"),
    ("rm", "Romansh"),
    ("rn", "Rundi"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("rw", "Kinyarwanda"),
    ("sa", "Sanskrit"),
    ("sc", "Sardinian"),
    ("sd", "Sindhi"),
    ("se", "Northern Sami"),
    ("sg", "Sango"),
    ("si", "Sinhala"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("sm", "Samoan"),
    ("sn", "Shona"),
    ("so", "Somali"),
    ("sq", "Albanian"),
    ("sr", "Serbian"),
    ("ss", "Swati"),
    ("st", "Southern Sotho"),
    ("su", "Sundanese"),
    ("sv", "Swedish"),
    ("sw", "Swahili"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("tg", "Tajik"),
    ("th", "Thai"),
    ("ti", "Tigrinya"),
    ("tk", "Turkmen"),
    ("tl", "Tagalog"),
    ("tn", "Tswana"),
    ("to", "Tongan"),
    ("tr", "Turkish"),
    ("ts", "Tsonga"),
    ("tt", "Tatar"),
    ("tw", "Twi"),
    ("ty", "Tahitian"),
    ("ug", "Uyghur"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("uz", "Uzbek"),
    ("ve", "Venda"),
    ("vi", "Vietnamese"),
    ("vo", "Volapuk"),
    ("wa", "Walloon"),
    ("wo", "Wolof"),
    ("xh", "Xhosa"),
    ("yi", "Yiddish"),
    ("yo", "Yoruba"),
    ("za", "Zhuang"),
    ("zh", "Chinese"),
    ("zu", "Zulu"),
];

/// ISO 3166-1 entries, sorted by alpha-2 code.
pub static COUNTRIES: &[Country] = &[
    Country::new("AD", "AND", 20, "Andorra"),
    Country::new("AE", "ARE", 784, "United Arab Emirates"),
    Country::new("AF", "AFG", 4, "Afghanistan"),
    Country::new("AG", "ATG", 28, "Antigua and Barbuda"),
    Country::new("AI", "AIA", 660, "Anguilla"),
    Country::new("AL", "ALB", 8, "Albania"),
    Country::new("AM", "ARM", 51, "Armenia"),
    Country::new("AO", "AGO", 24, "Angola"),
    Country::new("AQ", "ATA", 10, "Antarctica"),
    Country::new("AR", "ARG", 32, "Argentina"),
    Country::new("AS", "ASM", 16, "American Samoa"),
    Country::new("AT", "AUT", 40, "Austria"),
    Country::new("AU", "AUS", 36, "Australia"),
    Country::new("AW", "ABW", 533, "Aruba"),
    Country::new("AX", "ALA", 248, "Aland Islands"),
    Country::new("AZ", "AZE", 31, "Azerbaijan"),
    Country::new("BA", "BIH", 70, "Bosnia and Herzegovina"),
    Country::new("BB", "BRB", 52, "Barbados"),
    Country::new("BD", "BGD", 50, "Bangladesh"),
    Country::new("BE", "BEL", 56, "Belgium"),
    Country::new("BF", "BFA", 854, "Burkina Faso"),
    Country::new("BG", "BGR", 100, "Bulgaria"),
    Country::new("BH", "BHR", 48, "Bahrain"),
    Country::new("BI", "BDI", 108, "Burundi"),
    Country::new("BJ", "BEN", 204, "Benin"),
    Country::new("BL", "BLM", 652, "Saint Barthelemy"),
    Country::new("BM", "BMU", 60, "Bermuda"),
    Country::new("BN", "BRN", 96, "Brunei"),
    Country::new("BO", "BOL", 68, "Bolivia"),
    Country::new("BQ", "BES", 535, "Caribbean Netherlands"),
    Country::new("BR", "BRA", 76, "Brazil"),
    Country::new("BS", "BHS", 44, "Bahamas"),
    Country::new("BT", "BTN", 64, "Bhutan"),
    Country::new("BV", "BVT", 74, "Bouvet Island"),
    Country::new("BW", "BWA", 72, "Botswana"),
    Country::new("BY", "BLR", 112, "Belarus"),
    Country::new("BZ", "BLZ", 84, "Belize"),
    Country::new("CA", "CAN", 124, "Canada"),
    Country::new("CC", "CCK", 166, "Cocos (Keeling) Islands"),
    Country::new("CD", "COD", 180, "Congo (DRC)"),
    Country::new("CF", "CAF", 140, "Central African Republic"),
    Country::new("CG", "COG", 178, "Congo (Republic)"),
    Country::new("CH", "CHE", 756, "Switzerland"),
    Country::new("CI", "CIV", 384, "Cote d'Ivoire"),
    Country::new("CK", "COK", 184, "Cook Islands"),
    Country::new("CL", "CHL", 152, "Chile"),
    Country::new("CM", "CMR", 120, "Cameroon"),
    Country::new("CN", "CHN", 156, "China"),
    Country::new("CO", "COL", 170, "Colombia"),
    Country::new("CR", "CRI", 188, "Costa Rica"),
    Country::new("CU", "CUB", 192, "Cuba"),
    Country::new("CV", "CPV", 132, "Cabo Verde"),
    Country::new("CW", "CUW", 531, "Curacao"),
    Country::new("CX", "CXR", 162, "Christmas Island"),
    Country::new("CY", "CYP", 196, "Cyprus"),
    Country::new("CZ", "CZE", 203, "Czechia"),
    Country::new("DE", "DEU", 276, "Germany"),
    Country::new("DJ", "DJI", 262, "Djibouti"),
    Country::new("DK", "DNK", 208, "Denmark"),
    Country::new("DM", "DMA", 212, "Dominica"),
    Country::new("DO", "DOM", 214, "Dominican Republic"),
    Country::new("DZ", "DZA", 12, "Algeria"),
    Country::new("EC", "ECU", 218, "Ecuador"),
    Country::new("EE", "EST", 233, "Estonia"),
    Country::new("EG", "EGY", 818, "Egypt"),
    Country::new("EH", "ESH", 732, "Western Sahara"),
    Country::new("ER", "ERI", 232, "Eritrea"),
    Country::new("ES", "ESP", 724, "Spain"),
    Country::new("ET", "ETH", 231, "Ethiopia"),
    Country::new("FI", "FIN", 246, "Finland"),
    Country::new("FJ", "FJI", 242, "Fiji"),
    Country::new("FK", "FLK", 238, "Falkland Islands"),
    Country::new("FM", "FSM", 583, "Micronesia"),
    Country::new("FO", "FRO", 234, "Faroe Islands"),
    Country::new("FR", "FRA", 250, "France"),
    Country::new("GA", "GAB", 266, "Gabon"),
    Country::new("GB", "GBR", 826, "United Kingdom"),
    Country::new("GD", "GRD", 308, "Grenada"),
    Country::new("GE", "GEO", 268, "Georgia"),
    Country::new("GF", "GUF", 254, "French Guiana"),
    Country::new("GG", "GGY", 831, "Guernsey"),
    Country::new("GH", "GHA", 288, "Ghana"),
    Country::new("GI", "GIB", 292, "Gibraltar"),
    Country::new("GL", "GRL", 304, "Greenland"),
    Country::new("GM", "GMB", 270, "Gambia"),
    Country::new("GN", "GIN", 324, "Guinea"),
    Country::new("GP", "GLP", 312, "Guadeloupe"),
    Country::new("GQ", "GNQ", 226, "Equatorial Guinea"),
    Country::new("GR", "GRC", 300, "Greece"),
    Country::new("GS", "SGS", 239, "South Georgia and the South Sandwich Islands"),
    Country::new("GT", "GTM", 320, "Guatemala"),
    Country::new("GU", "GUM", 316, "Guam"),
    Country::new("GW", "GNB", 624, "Guinea-Bissau"),
    Country::new("GY", "GUY", 328, "Guyana"),
    Country::new("HK", "HKG", 344, "Hong Kong"),
    Country::new("HM", "HMD", 334, "Heard Island and McDonald Islands"),
    Country::new("HN", "HND", 340, "Honduras"),
    Country::new("HR", "HRV", 191, "Croatia"),
    Country::new("HT", "HTI", 332, "Haiti"),
    Country::new("HU", "HUN", 348, "Hungary"),
    Country::new("ID", "IDN", 360, "Indonesia"),
    Country::new("IE", "IRL", 372, "Ireland"),
    Country::new("IL", "ISR", 376, "Israel"),
    Country::new("IM", "IMN", 833, "Isle of Man"),
    Country::new("IN", "IND", 356, "India"),
    Country::new("IO", "IOT", 86, "British Indian Ocean Territory"),
    Country::new("IQ", "IRQ", 368, "Iraq"),
    Country::new("IR", "IRN", 364, "Iran"),
    Country::new("IS", "ISL", 352, "Iceland"),
    Country::new("IT", "ITA", 380, "Italy"),
    Country::new("JE", "JEY", 832, "Jersey"),
    Country::new("JM", "JAM", 388, "Jamaica"),
    Country::new("JO", "JOR", 400, "Jordan"),
    Country::new("JP", "JPN", 392, "Japan"),
    Country::new("KE", "KEN", 404, "Kenya"),
    Country::new("KG", "KGZ", 417, "Kyrgyzstan"),
    Country::new("KH", "KHM", 116, "Cambodia"),
    Country::new("KI", "KIR", 296, "Kiribati"),
    Country::new("KM", "COM", 174, "Comoros"),
    Country::new("KN", "KNA", 659, "Saint Kitts and Nevis"),
    Country::new("KP", "PRK", 408, "North Korea"),
    Country::new("KR", "KOR", 410, "South Korea"),
    Country::new("KW", "KWT", 414, "Kuwait"),
    Country::new("KY", "CYM", 136, "Cayman Islands"),
    Country::new("KZ", "KAZ", 398, "Kazakhstan"),
    Country::new("LA", "LAO", 418, "Laos"),
    Country::new("LB", "LBN", 422, "Lebanon"),
    Country::new("LC", "LCA", 662, "Saint Lucia"),
    Country::new("LI", "LIE", 438, "Liechtenstein"),
    Country::new("LK", "LKA", 144, "Sri Lanka"),
    Country::new("LR", "LBR", 430, "Liberia"),
    Country::new("LS", "LSO", 426, "Lesotho"),
    Country::new("LT", "LTU", 440, "Lithuania"),
    Country::new("LU", "LUX", 442, "Luxembourg"),
    Country::new("LV", "LVA", 428, "Latvia"),
    Country::new("LY", "LBY", 434, "Libya"),
    Country::new("MA", "MAR", 504, "Morocco"),
    Country::new("MC", "MCO", 492, "Monaco"),
    Country::new("MD", "MDA", 498, "Moldova"),
    Country::new("ME", "MNE", 499, "Montenegro"),
    Country::new("MF", "MAF", 663, "Saint Martin"),
    Country::new("MG", "MDG", 450, "Madagascar"),
    Country::new("MH", "MHL", 584, "Marshall Islands"),
    Country::new("MK", "MKD", 807, "North Macedonia"),
    Country::new("ML", "MLI", 466, "Mali"),
    Country::new("MM", "MMR", 104, "Myanmar"),
    Country::new("MN", "MNG", 496, "Mongolia"),
    Country::new("MO", "MAC", 446, "Macao"),
    Country::new("MP", "MNP", 580, "Northern Mariana Islands"),
    Country::new("MQ", "MTQ", 474, "Martinique"),
    Country::new("MR", "MRT", 478, "Mauritania"),
    Country::new("MS", "MSR", 500, "Montserrat"),
    Country::new("MT", "MLT", 470, "Malta"),
    Country::new("MU", "MUS", 480, "Mauritius"),
    Country::new("MV", "MDV", 462, "Maldives"),
    Country::new("MW", "MWI", 454, "Malawi"),
    Country::new("MX", "MEX", 484, "Mexico"),
    Country::new("MY", "MYS", 458, "Malaysia"),
    Country::new("MZ", "MOZ", 508, "Mozambique"),
    Country::new("NA", "NAM", 516, "Namibia"),
    Country::new("NC", "NCL", 540, "New Caledonia"),
    Country::new("NE", "NER", 562, "Niger"),
    Country::new("NF", "NFK", 574, "Norfolk Island"),
    Country::new("NG", "NGA", 566, "Nigeria"),
    Country::new("NI", "NIC", 558, "Nicaragua"),
    Country::new("NL", "NLD", 528, "Netherlands"),
    Country::new("NO", "NOR", 578, "Norway"),
    Country::new("NP", "NPL", 524, "Nepal"),
    Country::new("NR", "NRU", 520, "Nauru"),
    Country::new("NU", "NIU", 570, "Niue"),
    Country::new("NZ", "NZL", 554, "New Zealand"),
    Country::new("OM", "OMN", 512, "Oman"),
    Country::new("PA", "PAN", 591, "Panama"),
    Country::new("PE", "PER", 604, "Peru"),
    Country::new("PF", "PYF", 258, "French Polynesia"),
    Country::new("PG", "PNG", 598, "Papua New Guinea"),
    Country::new("PH", "PHL", 608, "Philippines"),
    Country::new("PK", "PAK", 586, "Pakistan"),
    Country::new("PL", "POL", 616, "Poland"),
    Country::new("PM", "SPM", 666, "Saint Pierre and Miquelon"),
    Country::new("PN", "PCN", 612, "Pitcairn Islands"),
    Country::new("PR", "PRI", 630, "Puerto Rico"),
    Country::new("PS", "PSE", 275, "Palestine"),
    Country::new("PT", "PRT", 620, "Portugal"),
    Country::new("PW", "PLW", 585, "Palau"),
    Country::new("PY", "PRY", 600, "Paraguay"),
    Country::new("QA", "QAT", 634, "Qatar"),
    Country::new("RE", "REU", 638, "Reunion"),
    Country::new("RO", "ROU", 642, "Romania"),
    Country::new("RS", "SRB", 688, "Serbia"),
    Country::new("RU", "RUS", 643, "Russia"),
    Country::new("RW", "RWA", 646, "Rwanda"),
    Country::new("SA", "SAU", 682, "Saudi Arabia"),
    Country::new("SB", "SLB", 90, "Solomon Islands"),
    Country::new("SC", "SYC", 690, "Seychelles"),
    Country::new("SD", "SDN", 729, "Sudan"),
    Country::new("SE", "SWE", 752, "Sweden"),
    Country::new("SG", "SGP", 702, "Singapore"),
    Country::new("SH", "SHN", 654, "Saint Helena, Ascension and Tristan da Cunha"),
    Country::new("SI", "SVN", 705, "Slovenia"),
    Country::new("SJ", "SJM", 744, "Svalbard and Jan Mayen"),
    Country::new("SK", "SVK", 703, "Slovakia"),
    Country::new("SL", "SLE", 694, "Sierra Leone"),
    Country::new("SM", "SMR", 674, "San Marino"),
    Country::new("SN", "SEN", 686, "Senegal"),
    Country::new("SO", "SOM", 706, "Somalia"),
    Country::new("SR", "SUR", 740, "Suriname"),
    Country::new("SS", "SSD", 728, "South Sudan"),
    Country::new("ST", "STP", 678, "Sao Tome and Principe"),
    Country::new("SV", "SLV", 222, "El Salvador"),
    Country::new("SX", "SXM", 534, "Sint Maarten"),
    Country::new("SY", "SYR", 760, "Syria"),
    Country::new("SZ", "SWZ", 748, "Eswatini"),
    Country::new("TC", "TCA", 796, "Turks and Caicos Islands"),
    Country::new("TD", "TCD", 148, "Chad"),
    Country::new("TF", "ATF", 260, "French Southern Territories"),
    Country::new("TG", "TGO", 768, "Togo"),
    Country::new("TH", "THA", 764, "Thailand"),
    Country::new("TJ", "TJK", 762, "Tajikistan"),
    Country::new("TK", "TKL", 772, "Tokelau"),
    Country::new("TL", "TLS", 626, "Timor-Leste"),
    Country::new("TM", "TKM", 795, "Turkmenistan"),
    Country::new("TN", "TUN", 788, "Tunisia"),
    Country::new("TO", "TON", 776, "Tonga"),
    Country::new("TR", "TUR", 792, "Turkey"),
    Country::new("TT", "TTO", 780, "Trinidad and Tobago"),
    Country::new("TV", "TUV", 798, "Tuvalu"),
    Country::new("TW", "TWN", 158, "Taiwan"),
    Country::new("TZ", "TZA", 834, "Tanzania"),
    Country::new("UA", "UKR", 804, "Ukraine"),
    Country::new("UG", "UGA", 800, "Uganda"),
    Country::new("UM", "UMI", 581, "United States Minor Outlying Islands"),
    Country::new("US", "USA", 840, "United States"),
    Country::new("UY", "URY", 858, "Uruguay"),
    Country::new("UZ", "UZB", 860, "Uzbekistan"),
    Country::new("VA", "VAT", 336, "Vatican City"),
    Country::new("VC", "VCT", 670, "Saint Vincent and the Grenadines"),
    Country::new("VE", "VEN", 862, "Venezuela"),
    Country::new("VG", "VGB", 92, "British Virgin Islands"),
    Country::new("VI", "VIR", 850, "U.S. Virgin Islands"),
    Country::new("VN", "VNM", 704, "Vietnam"),
    Country::new("VU", "VUT", 548, "Vanuatu"),
    Country::new("WF", "WLF", 876, "Wallis and Futuna"),
    Country::new("WS", "WSM", 882, "Samoa"),
    Country::new("YE", "YEM", 887, "Yemen"),
    Country::new("YT", "MYT", 175, "Mayotte"),
    Country::new("ZA", "ZAF", 710, "South Africa"),
    Country::new("ZM", "ZMB", 894, "Zambia"),
    Country::new("ZW", "ZWE", 716, "Zimbabwe"),
];

/// English name for a lower-case ISO 639-1 code.
pub fn language_name(code: &str) -> Option<&'static str> {
    LANGUAGES
        .binary_search_by(|(candidate, _)| (*candidate).cmp(code))
        .ok()
        .map(|index| LANGUAGES[index].1)
}

/// Country for an upper-case alpha-2 code.
pub fn country_by_alpha2(code: &str) -> Option<&'static Country> {
    COUNTRIES
        .binary_search_by(|country| country.alpha2.cmp(code))
        .ok()
        .map(|index| &COUNTRIES[index])
}

/// Country for an upper-case alpha-3 code.
pub fn country_by_alpha3(code: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|country| country.alpha3 == code)
}

pub fn country_by_numeric(numeric: u16) -> Option<&'static Country> {
    COUNTRIES.iter().find(|country| country.numeric == numeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_sorted_and_unique() {
        assert!(LANGUAGES.windows(2).all(|pair| pair[0].0 < pair[1].0));
        assert!(COUNTRIES.windows(2).all(|pair| pair[0].alpha2 < pair[1].alpha2));

        let mut alpha3: Vec<_> = COUNTRIES.iter().map(|c| c.alpha3).collect();
        alpha3.sort_unstable();
        alpha3.dedup();
        assert_eq!(alpha3.len(), COUNTRIES.len());
    }

    #[test]
    fn table_sizes() {
        assert_eq!(LANGUAGES.len(), 183);
        assert_eq!(COUNTRIES.len(), 249);
    }

    #[test]
    fn codes_are_well_formed() {
        for (code, _) in LANGUAGES {
            assert!(code.len() == 2 && code.bytes().all(|b| b.is_ascii_lowercase()));
        }
        for country in COUNTRIES {
            assert!(country.alpha2.len() == 2 && country.alpha2.bytes().all(|b| b.is_ascii_uppercase()));
            assert!(country.alpha3.len() == 3 && country.alpha3.bytes().all(|b| b.is_ascii_uppercase()));
            assert!(country.numeric > 0 && country.numeric < 1000);
        }
    }

    #[test]
    fn lookups() {
        assert_eq!(language_name("de"), Some("German"));
        assert_eq!(language_name("xx"), None);
        assert_eq!(country_by_alpha2("AT").map(|c| c.name), Some("Austria"));
        assert_eq!(country_by_alpha3("AUT").map(|c| c.alpha2), Some("AT"));
        assert_eq!(country_by_numeric(276).map(|c| c.alpha2), Some("DE"));
        assert_eq!(country_by_alpha2("ZZ"), None);
    }
}
