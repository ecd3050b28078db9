//! ISO 4217 currency codes and the names of their units.
//!
//! Lookup is an exact, case-sensitive match on the three-letter code. Codes
//! missing from the table fall back to the code itself as the main unit name
//! with an empty sub-unit name.

/// Main-unit and sub-unit names of a currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurrencyUnits<'a> {
    /// Primary denomination, e.g. `Dollars`.
    pub main: &'a str,

    /// Fractional denomination, e.g. `Cents`. Empty when unknown.
    pub sub: &'a str,
}

impl<'a> CurrencyUnits<'a> {
    pub fn new(main: &'a str, sub: &'a str) -> Self {
        CurrencyUnits { main, sub }
    }
}

/// `(code, main unit, sub unit)`, sorted by code.
///
/// Currencies without a sub-unit in circulation have an empty sub-unit name.
const CURRENCY_TABLE: &[(&str, &str, &str)] = &[
    ("AED", "Dirham", "Fils"),
    ("AFN", "Afghani", "Pul"),
    ("ALL", "Lek", "Qindarka"),
    ("AMD", "Dram", "Luma"),
    ("AOA", "Kwanza", "Cêntimo"),
    ("ARS", "Peso", "Centavo"),
    ("AUD", "Dollars", "Cents"),
    ("AWG", "Florin", "Cents"),
    ("AZN", "Manat", "Qəpik"),
    ("BAM", "Convertible Mark", "Fening"),
    ("BBD", "Dollars", "Cents"),
    ("BDT", "Taka", "Poisha"),
    ("BGN", "Lev", "Stotinki"),
    ("BHD", "Dinar", "Fils"),
    ("BIF", "Franc", ""),
    ("BMD", "Dollars", "Cents"),
    ("BND", "Dollars", "Sen"),
    ("BOB", "Boliviano", "Centavo"),
    ("BRL", "Real", "Centavos"),
    ("BSD", "Dollars", "Cents"),
    ("BTN", "Ngultrum", "Chetrum"),
    ("BWP", "Pula", "Thebe"),
    ("BYN", "Ruble", "Kopek"),
    ("BZD", "Dollars", "Cents"),
    ("CAD", "Dollars", "Cents"),
    ("CDF", "Franc", "Centime"),
    ("CHF", "Franc", "Rappen"),
    ("CLP", "Peso", ""),
    ("CNY", "Yuan", "Jiao"),
    ("COP", "Peso", "Centavo"),
    ("CRC", "Colón", "Céntimo"),
    ("CUP", "Peso", "Centavo"),
    ("CVE", "Escudo", "Centavo"),
    ("CZK", "Koruna", "Heller"),
    ("DJF", "Franc", ""),
    ("DKK", "Krone", "Øre"),
    ("DOP", "Peso", "Centavo"),
    ("DZD", "Dinar", "Centime"),
    ("EGP", "Pound", "Piastre"),
    ("ERN", "Nakfa", "Cent"),
    ("ETB", "Birr", "Santim"),
    ("EUR", "Euro", "Cents"),
    ("FJD", "Dollar", "Cents"),
    ("FKP", "Pound", "Penny"),
    ("GBP", "Pound", "Pence"),
    ("GEL", "Lari", "Tetri"),
    ("GHS", "Cedi", "Pesewa"),
    ("GIP", "Pound", "Penny"),
    ("GMD", "Dalasi", "Butut"),
    ("GNF", "Franc", ""),
    ("GTQ", "Quetzal", "Centavo"),
    ("GYD", "Dollar", "Cents"),
    ("HKD", "Dollars", "Cents"),
    ("HNL", "Lempira", "Centavo"),
    ("HRK", "Kuna", "Lipa"),
    ("HTG", "Gourde", "Centime"),
    ("HUF", "Forint", ""),
    ("IDR", "Rupiah", "Sen"),
    ("ILS", "New Shekel", "Agorot"),
    ("INR", "Rupee", "Paisa"),
    ("IQD", "Dinar", "Fils"),
    ("IRR", "Rial", ""),
    ("ISK", "Krona", ""),
    ("JMD", "Dollar", "Cents"),
    ("JOD", "Dinar", "Fils"),
    ("JPY", "Yen", ""),
    ("KES", "Shilling", "Cent"),
    ("KGS", "Som", "Tyiyn"),
    ("KHR", "Riel", "Sen"),
    ("KMF", "Franc", ""),
    ("KPW", "Won", "Chon"),
    ("KRW", "Won", ""),
    ("KWD", "Dinar", "Fils"),
    ("KYD", "Dollar", "Cents"),
    ("KZT", "Tenge", "Tïın"),
    ("LAK", "Kip", "Att"),
    ("LBP", "Pound", "Piastre"),
    ("LKR", "Rupee", "Cent"),
    ("LRD", "Dollar", "Cents"),
    ("LSL", "Loti", "Sente"),
    ("LYD", "Dinar", "Dirham"),
    ("MAD", "Dirham", "Centime"),
    ("MDL", "Leu", "Ban"),
    ("MGA", "Ariary", "Iraimbilanja"),
    ("MKD", "Denar", "Deni"),
    ("MMK", "Kyat", "Pya"),
    ("MNT", "Tugrik", "Möngö"),
    ("MOP", "Pataca", "Avo"),
    ("MRU", "Ouguiya", "Khoums"),
    ("MUR", "Rupee", "Cent"),
    ("MVR", "Rufiyaa", "Laari"),
    ("MWK", "Kwacha", "Tambala"),
    ("MXN", "Peso", "Centavo"),
    ("MYR", "Ringgit", "Sen"),
    ("MZN", "Metical", "Centavo"),
    ("NAD", "Dollar", "Cents"),
    ("NGN", "Naira", "Kobo"),
    ("NIO", "Córdoba", "Centavo"),
    ("NOK", "Krone", "Øre"),
    ("NPR", "Rupee", "Paisa"),
    ("NZD", "Dollars", "Cents"),
    ("OMR", "Rial", "Baisa"),
    ("PAB", "Balboa", "Centésimo"),
    ("PEN", "Sol", "Céntimo"),
    ("PGK", "Kina", "Toea"),
    ("PHP", "Peso", "Sentimo"),
    ("PKR", "Rupee", "Paisa"),
    ("PLN", "Złoty", "Grosz"),
    ("PYG", "Guaraní", "Céntimo"),
    ("QAR", "Riyal", "Dirham"),
    ("RON", "Leu", "Ban"),
    ("RSD", "Dinar", "Para"),
    ("RUB", "Ruble", "Kopek"),
    ("RWF", "Franc", ""),
    ("SAR", "Riyal", "Halala"),
    ("SBD", "Dollar", "Cents"),
    ("SCR", "Rupee", "Cent"),
    ("SDG", "Pound", "Piastre"),
    ("SEK", "Krona", "Öre"),
    ("SGD", "Dollar", "Cents"),
    ("SHP", "Pound", "Penny"),
    ("SLL", "Leone", "Cent"),
    ("SOS", "Shilling", "Cent"),
    ("SRD", "Dollar", "Cent"),
    ("SSP", "Pound", "Piastre"),
    ("STN", "Dobra", "Cêntimo"),
    ("SVC", "Colón", "Centavo"),
    ("SYP", "Pound", "Piastre"),
    ("SZL", "Lilangeni", "Cent"),
    ("THB", "Baht", "Satang"),
    ("TJS", "Somoni", "Diram"),
    ("TMT", "Manat", "Tenge"),
    ("TND", "Dinar", "Millime"),
    ("TOP", "Pa'anga", "Seniti"),
    ("TRY", "Lira", "Kuruş"),
    ("TTD", "Dollar", "Cent"),
    ("TWD", "New Dollar", "Cent"),
    ("TZS", "Shilling", "Cent"),
    ("UAH", "Hryvnia", "Kopiyka"),
    ("UGX", "Shilling", ""),
    ("USD", "Dollars", "Cents"),
    ("UYU", "Peso", "Centésimo"),
    ("UZS", "Som", "Tiyin"),
    ("VND", "Đồng", "Hào"),
    ("VUV", "Vatu", ""),
    ("WST", "Tala", "Sene"),
    ("XAF", "Franc", "Centime"),
    ("XCD", "Dollar", "Cent"),
    ("XOF", "Franc", "Centime"),
    ("XPF", "Franc", ""),
    ("YER", "Rial", "Fils"),
    ("ZAR", "Rand", "Cents"),
    ("ZMW", "Kwacha", "Ngwee"),
    ("ZWL", "Dollar", "Cents"),
];

/// Looks up the unit names for a currency code.
///
/// # Examples
///
/// ```
/// use amount_words::currency::units_for;
///
/// assert_eq!(units_for("USD").main, "Dollars");
/// assert_eq!(units_for("GBP").sub, "Pence");
///
/// let unknown = units_for("XYZ");
/// assert_eq!(unknown.main, "XYZ");
/// assert_eq!(unknown.sub, "");
/// ```
pub fn units_for(code: &str) -> CurrencyUnits<'_> {
    match CURRENCY_TABLE.binary_search_by(|(c, _, _)| (*c).cmp(code)) {
        Ok(idx) => {
            let (_, main, sub) = CURRENCY_TABLE[idx];
            CurrencyUnits::new(main, sub)
        }
        Err(_) => CurrencyUnits::new(code, ""),
    }
}

/// Returns `true` if the code has an entry in the table.
pub fn is_known(code: &str) -> bool {
    CURRENCY_TABLE
        .binary_search_by(|(c, _, _)| (*c).cmp(code))
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted_and_unique() {
        for pair in CURRENCY_TABLE.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{} before {}", pair[0].0, pair[1].0);
        }
    }

    #[test]
    fn test_known_codes() {
        assert_eq!(units_for("USD"), CurrencyUnits::new("Dollars", "Cents"));
        assert_eq!(units_for("EUR"), CurrencyUnits::new("Euro", "Cents"));
        assert_eq!(units_for("AED"), CurrencyUnits::new("Dirham", "Fils"));
        assert_eq!(units_for("ZWL"), CurrencyUnits::new("Dollar", "Cents"));
        assert_eq!(units_for("JPY"), CurrencyUnits::new("Yen", ""));
        assert_eq!(units_for("VND"), CurrencyUnits::new("Đồng", "Hào"));
    }

    #[test]
    fn test_currencies_without_sub_units() {
        for code in ["BIF", "CLP", "HUF", "ISK", "JPY", "KRW", "UGX", "VUV"] {
            let units = units_for(code);
            assert!(is_known(code));
            assert_eq!(units.sub, "", "{}", code);
        }
    }

    #[test]
    fn test_unknown_code_passes_through() {
        assert_eq!(units_for("XYZ"), CurrencyUnits::new("XYZ", ""));
        assert_eq!(units_for(""), CurrencyUnits::new("", ""));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(units_for("usd"), CurrencyUnits::new("usd", ""));
        assert!(!is_known("usd"));
        assert!(is_known("USD"));
    }
}
