/// Known fault numbers and their descriptions as shown on the boiler display.
///
/// The controller reports far more faults than listed here; anything not
/// found is reported by number.
pub const ERROR_CODES: &[(&str, &str)] = &[
    ("5", "Aschelade entleeren"),
    ("6", "Aschelade zu voll"),
    ("29", "Verbrennungsstörung"),
    ("30", "Batterie leer"),
    ("31", "Blockade Einschubmotor"),
    ("32", "Füllzeit überschritten"),
    ("70", "Pelletslagerstand niedrig"),
    ("89", "Schieberost schwergängig"),
    ("93", "Aschelade offen"),
    ("227", "Lagerraumschalter aus"),
    ("228", "Pelletsbehälter fast leer"),
    ("229", "Füllstandsmelder kontrollieren"),
    ("371", "Brennraum prüfen"),
];

/// Raw value of the fault-active parameter while the boiler is fault free.
pub const NO_FAULT: &str = "False";

pub struct ErrorCodeString;
impl ErrorCodeString {
    pub fn lookup(code: &str) -> Option<&'static str> {
        ERROR_CODES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, description)| *description)
    }

    /// Description for `code`, or `error <code>` when the code is not known.
    pub fn from_code(code: &str) -> String {
        match Self::lookup(code) {
            Some(description) => description.to_owned(),
            None => format!("error {}", code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes() {
        assert_eq!(ErrorCodeString::from_code("5"), "Aschelade entleeren");
        assert_eq!(ErrorCodeString::from_code("371"), "Brennraum prüfen");
    }

    #[test]
    fn unknown_codes_keep_the_number() {
        assert_eq!(ErrorCodeString::lookup("7"), None);
        assert_eq!(ErrorCodeString::from_code("7"), "error 7");
        assert_eq!(ErrorCodeString::from_code(""), "error ");
        // no normalisation, "06" is not "6"
        assert_eq!(ErrorCodeString::from_code("06"), "error 06");
    }

    #[test]
    fn codes_are_unique() {
        for (i, (code, _)) in ERROR_CODES.iter().enumerate() {
            assert!(
                ERROR_CODES[i + 1..].iter().all(|(other, _)| other != code),
                "duplicate code {}",
                code
            );
        }
    }
}
