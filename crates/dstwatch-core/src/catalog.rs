//! The fixed catalog of tracked cities.
//!
//! The catalog is immutable and ordered; its declaration order determines the
//! listing order of notifications and of the `list` command output. Callers
//! receive it by reference so tests can substitute a smaller catalog.

/// One tracked city. `country` may be empty for non-sovereign territories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct City {
    /// Short unique identifier, e.g. `PAR`.
    pub code: &'static str,
    pub name: &'static str,
    pub country: &'static str,
    /// IANA timezone identifier, e.g. `Europe/Paris`.
    pub zonename: &'static str,
}

impl City {
    pub const fn new(
        code: &'static str,
        name: &'static str,
        country: &'static str,
        zonename: &'static str,
    ) -> Self {
        Self {
            code,
            name,
            country,
            zonename,
        }
    }
}

/// All tracked cities, ordered west to east.
pub const CITIES: &[City] = &[
    City::new("PPG", "Pago Pago", "USA", "Pacific/Pago_Pago"),
    City::new("HNL", "Honolulu", "USA", "Pacific/Honolulu"),
    City::new("ANC", "Anchorage", "USA", "America/Anchorage"),
    City::new("YVR", "Vancouver", "Canada", "America/Vancouver"),
    City::new("LAX", "Los Angeles", "USA", "America/Los_Angeles"),
    City::new("YEA", "Edmonton", "Canada", "America/Edmonton"),
    City::new("DEN", "Denver", "USA", "America/Denver"),
    City::new("MEX", "Mexico City", "Mexico", "America/Mexico_City"),
    City::new("CHI", "Chicago", "USA", "America/Chicago"),
    City::new("NYC", "New York City", "USA", "America/New_York"),
    City::new("SCL", "Santiago", "Chile", "America/Santiago"),
    City::new("YHZ", "Halifax", "Canada", "America/Halifax"),
    City::new("YYT", "St. John's", "Canada", "America/St_Johns"),
    City::new("RIO", "Rio de Janeiro", "Brazil", "America/Sao_Paulo"),
    City::new("FEN", "Fernando de Noronha", "Brazil", "America/Noronha"),
    City::new("RAI", "Praia", "Cape Verde", "Atlantic/Cape_Verde"),
    City::new("LIS", "Lisbon", "Portugal", "Europe/Lisbon"),
    City::new("LON", "London", "United Kingdom", "Europe/London"),
    City::new("MAD", "Madrid", "Spain", "Europe/Madrid"),
    City::new("PAR", "Paris", "France", "Europe/Paris"),
    City::new("ROM", "Rome", "Italy", "Europe/Rome"),
    City::new("BER", "Berlin", "Germany", "Europe/Berlin"),
    City::new("STO", "Stockholm", "Sweden", "Europe/Stockholm"),
    City::new("ATH", "Athens", "Greece", "Europe/Athens"),
    City::new("CAI", "Cairo", "Egypt", "Africa/Cairo"),
    City::new("JRS", "Jerusalem", "Israel", "Asia/Jerusalem"),
    City::new("MOW", "Moscow", "Russia", "Europe/Moscow"),
    City::new("JED", "Jeddah", "Saudi Arabia", "Asia/Riyadh"),
    City::new("THR", "Tehran", "Iran", "Asia/Tehran"),
    City::new("DBX", "Dubai", "United Arab Emirates", "Asia/Dubai"),
    City::new("KBL", "Kabul", "Afghanistan", "Asia/Kabul"),
    City::new("KHI", "Karachi", "Pakistan", "Asia/Karachi"),
    City::new("DEL", "Delhi", "India", "Asia/Kolkata"),
    City::new("KTM", "Kathmandu", "Nepal", "Asia/Kathmandu"),
    City::new("DAC", "Dhaka", "Bangladesh", "Asia/Dhaka"),
    City::new("RGN", "Yangon", "Burma", "Asia/Rangoon"),
    City::new("BKK", "Bangkok", "Thailand", "Asia/Bangkok"),
    City::new("SIN", "Singapore", "Singapore", "Asia/Singapore"),
    City::new("HKG", "Hong Kong", "Hong Kong", "Asia/Hong_Kong"),
    City::new("BJS", "Beijing", "China", "Asia/Shanghai"),
    City::new("TPE", "Taipei", "Taiwan", "Asia/Taipei"),
    City::new("SEL", "Seoul", "South Korea", "Asia/Seoul"),
    City::new("TYO", "Tokyo", "Japan", "Asia/Tokyo"),
    City::new("ADL", "Adelaide", "Australia", "Australia/Adelaide"),
    City::new("GUM", "Guam", "", "Pacific/Guam"),
    City::new("SYD", "Sydney", "Australia", "Australia/Sydney"),
    City::new("NOU", "Noumea", "New Caledonia", "Pacific/Noumea"),
    City::new("WLG", "Wellington", "New Zealand", "Pacific/Auckland"),
];
