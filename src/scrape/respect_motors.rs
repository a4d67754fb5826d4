// Respect Motors stock pages.
use crate::scrape::SiteProfile;

pub static PROFILE: SiteProfile = SiteProfile {
    name: "Respect Motors",
    url_marker: "respectmotors",
    title_selector: "h1",
    spec_rows: "table tr",
    image_marker: "vehicles",
};
