// templates/pages/home.rs

use crate::scrape::AuctionSite;
use crate::templates::{components::card, desktop_layout};
use maud::{html, Markup};

const EXAMPLE_REQUEST: &str = r#"curl -X POST http://localhost:5000/generate \
  -H 'Content-Type: application/json' \
  -d '{"urls": ["https://www.autoaccess.example/lot/5521"]}'"#;

pub fn home_page() -> Markup {
    desktop_layout(
        "Listing Publisher",
        html! {
            h1 { "Auction listing publisher" }

            p {
                "POST a batch of auction listing URLs to "
                code { "/generate" }
                ". Each listing is scraped, described, priced and published; "
                "results come back in the order the URLs were sent."
            }

            (card("Supported sites", html! {
                ul {
                    @for site in AuctionSite::all() {
                        li {
                            (site.name())
                            ": URLs containing "
                            code { (site.profile().url_marker) }
                        }
                    }
                }
            }))

            (card("Example", html! {
                pre { code { (EXAMPLE_REQUEST) } }
            }))
        },
    )
}
