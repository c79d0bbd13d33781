//! Club identity constants - update these to change branding across the
//! portal.

use chrono::{Datelike, Utc};

/// Club identity.
#[derive(Debug, Clone, Copy)]
pub struct ClubIdentity {
    /// Full registered name
    pub name: &'static str,
    /// Short name used in navigation and buttons
    pub short_name: &'static str,
    /// Village name
    pub village: &'static str,
    /// Village name with suffix
    pub village_full: &'static str,
}

/// The club this portal serves.
pub const CLUB: ClubIdentity = ClubIdentity {
    name: "White Army Arts & Sports Club",
    short_name: "White Army",
    village: "Thumpoly",
    village_full: "Thumpoly Village",
};

/// Club milestones.
#[derive(Debug, Clone, Copy)]
pub struct Milestones {
    /// Year the club was officially registered
    pub registered_year: i32,
    /// Number of years since the club started (informally)
    pub years_of_service: i32,
}

pub const MILESTONES: Milestones = Milestones {
    registered_year: 2014,
    years_of_service: 17,
};

/// Contact email.
pub const CONTACT_EMAIL: &str = "contact@whitearmy.org";
/// Contact phone.
pub const CONTACT_PHONE: &str = "+91 XXXXX XXXXX";

/// Year the club informally started, derived from the current year.
pub fn start_year() -> i32 {
    Utc::now().year() - MILESTONES.years_of_service
}

/// Portal title for metadata.
pub fn app_title() -> String {
    format!("{} - {}", CLUB.name, CLUB.village)
}

/// Portal description for metadata.
pub fn app_description() -> String {
    format!(
        "{}, {}. A community built on unity - no politics, no religion, no caste. Serving our village since {}.",
        CLUB.name,
        CLUB.village,
        start_year()
    )
}
