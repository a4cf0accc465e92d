//! Static profile data shown on the card
//!
//! Everything here is fixed for the lifetime of the process; the only
//! computed field is the "Sist oppdatert" timestamp, captured at
//! construction and formatted the way the card displays it.

use chrono::{DateTime, Local};

/// Display fields of the student-ID screen. Immutable after construction.
#[derive(Debug, Clone)]
pub struct StaticProfile {
    pub name: String,
    pub birth_date: String,
    pub student_number: String,
    pub institution: String,
    pub validity_header: String,
    pub validity_semester: String,
    pub validity_expiry: String,
    pub version: String,
    pub timezone: String,
    updated_at: DateTime<Local>,
}

impl StaticProfile {
    pub fn new() -> Self {
        Self::with_updated_at(Local::now())
    }

    pub fn with_updated_at(updated_at: DateTime<Local>) -> Self {
        Self {
            name: "Even Martin Abelseth Riksheim (23)".to_string(),
            birth_date: "24.09.2001".to_string(),
            student_number: "599264".to_string(),
            institution: "Norges teknisk-naturvitenskapelige universitet".to_string(),
            validity_header: "Gyldig studentbevis".to_string(),
            validity_semester: "Vår 2025".to_string(),
            validity_expiry: "31.08.2025".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timezone: "Europe/Oslo".to_string(),
            updated_at,
        }
    }

    /// `dd.mm.yyyy kl. HH:MM (CEST)`, the card's footer format.
    pub fn updated_at_label(&self) -> String {
        format!("{} (CEST)", self.updated_at.format("%d.%m.%Y kl. %H:%M"))
    }
}

impl Default for StaticProfile {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_updated_at_label_format() {
        let dt = Local.with_ymd_and_hms(2025, 5, 3, 9, 7, 42).unwrap();
        let profile = StaticProfile::with_updated_at(dt);
        assert_eq!(profile.updated_at_label(), "03.05.2025 kl. 09:07 (CEST)");
    }

    #[test]
    fn test_fixed_fields() {
        let profile = StaticProfile::new();
        assert_eq!(profile.student_number, "599264");
        assert_eq!(profile.validity_semester, "Vår 2025");
        assert_eq!(profile.timezone, "Europe/Oslo");
    }
}
