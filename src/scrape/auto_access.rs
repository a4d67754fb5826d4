// Auto Access auction lots.
use crate::scrape::SiteProfile;

pub static PROFILE: SiteProfile = SiteProfile {
    name: "Auto Access",
    url_marker: "autoaccess",
    title_selector: "h1",
    spec_rows: ".table-responsive table tr",
    image_marker: "vehicle",
};
