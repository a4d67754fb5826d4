mod generation_error;
mod openai;

pub use generation_error::GenerationError;
pub use openai::OpenAiClient;

use crate::domain::ListingRecord;

pub const SYSTEM_PROMPT: &str = "You are a vehicle listing assistant.";

/// Rendered in the prompt for fields the page did not provide.
const MISSING: &str = "None";

/// One-shot chat completion: a system role plus a single user message.
pub trait TextGenerator: Send + Sync {
    fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String, GenerationError>;
}

pub fn build_prompt(listing: &ListingRecord) -> String {
    let show = |v: &Option<String>| v.clone().unwrap_or_else(|| MISSING.to_string());

    format!(
        "Write a professional vehicle listing description:\n\
         Make: {}\n\
         Model: {}\n\
         Year: {}\n\
         Mileage: {}\n\
         Fuel Type: {}\n\
         Auction Grade: {}\n",
        show(&listing.make),
        show(&listing.model),
        show(&listing.year),
        show(&listing.mileage),
        show(&listing.fuel_type),
        show(&listing.grade),
    )
}

/// Marketing copy for a listing, trimmed. One round trip, no retry.
pub fn generate_description(
    generator: &dyn TextGenerator,
    listing: &ListingRecord,
) -> Result<String, GenerationError> {
    let prompt = build_prompt(listing);
    let text = generator.complete(SYSTEM_PROMPT, &prompt)?;
    Ok(text.trim().to_string())
}
