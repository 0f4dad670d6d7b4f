// src/services/relay.rs
use crate::error::RelayError;
use crate::message::ChatResponse;
use crate::services::catalog::{Catalog, Product};
use crate::services::provider::CompletionProvider;

/// Served whenever the provider call fails, whatever the cause.
pub const FALLBACK_REPLY: &str = "Sorry, I'm having trouble right now. Please try again.";

/// The model is told to say exactly this when nothing in the catalog fits.
pub const NO_MATCH_REPLY: &str = "Sorry, I couldn't find anything matching your request.";

const ID_TAIL_MARKER: &str = "PRODUCT_IDS:";

/// Full per-request pipeline: prompt from the catalog, one provider call,
/// tail extraction, id resolution. Stateless; every call is independent.
pub async fn recommend(
    catalog: &Catalog,
    provider: &dyn CompletionProvider,
    message: &str,
) -> Result<ChatResponse, RelayError> {
    let system = build_system_prompt(catalog);
    let reply = provider.complete(&system, message).await?;

    let (response, ids) = extract_product_ids(&reply);
    let products = catalog.resolve(&ids);
    tracing::debug!(ids = ?ids, resolved = products.len(), "parsed completion reply");

    Ok(ChatResponse { response, products })
}

/// Builds the system instruction, embedding every catalog entry as one
/// labeled line so the rules below can reference the fields by name.
pub fn build_system_prompt(catalog: &Catalog) -> String {
    let product_lines = catalog
        .all()
        .iter()
        .map(render_product_line)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are a helpful TikTok Shop assistant. Keep responses extremely concise, \
         only answering what's required.\n\
         Only use the product catalog below. Never invent products or details.\n\n\
         Catalog:\n{product_lines}\n\n\
         Rules:\n\
         - Recommend at most three products, most relevant first.\n\
         - End every reply with a line in exactly this format: \
         PRODUCT_IDS: [id, id, ...] listing the recommended ids most relevant \
         first, or PRODUCT_IDS: [] when you recommend nothing.\n\
         - Mention only the details the customer asked about. For example, if \
         they only asked about colors, do not bring up the price.\n\
         - If no product is relevant or the question is not about the shop, \
         reply exactly \"{NO_MATCH_REPLY}\" followed by PRODUCT_IDS: []."
    )
}

fn render_product_line(p: &Product) -> String {
    format!(
        "id: {} | name: {} | price: {} | shipping: {} | colors: {} | description: {}",
        p.id, p.name, p.price, p.shipping, p.colors, p.description
    )
}

/// Splits a reply into prose and the ids from its `PRODUCT_IDS: [...]` tail.
///
/// The provider is only best-effort about the format, so this never fails:
/// a missing marker yields the whole reply and no ids, mangled brackets
/// yield the prose and no ids, and non-numeric tokens inside the brackets
/// are skipped.
pub fn extract_product_ids(reply: &str) -> (String, Vec<u32>) {
    let Some(marker) = reply.rfind(ID_TAIL_MARKER) else {
        return (reply.trim().to_string(), Vec::new());
    };

    let after = &reply[marker + ID_TAIL_MARKER.len()..];
    let (ids, tail_len) = match (after.find('['), after.find(']')) {
        (Some(open), Some(close)) if open < close => {
            let ids = after[open + 1..close]
                .split(',')
                .filter_map(|token| token.trim().parse::<u32>().ok())
                .collect();
            (ids, ID_TAIL_MARKER.len() + close + 1)
        }
        // Marker without a readable bracket pair: drop everything from the
        // marker on rather than leak half a tail into the prose.
        _ => (Vec::new(), reply.len() - marker),
    };

    let prose = format!("{}{}", &reply[..marker], &reply[marker + tail_len..]);
    (prose.trim().to_string(), ids)
}
