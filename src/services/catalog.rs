// src/services/catalog.rs
use serde::{Deserialize, Serialize};

/// A single shop listing. `url` is the image URL; the frontend reads it
/// under exactly that name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: String,
    pub shipping: String,
    pub colors: String,
    pub description: String,
    pub url: String,
}

/// The fixed product list, built once at startup and shared read-only with
/// every request. There are no write operations.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The shop's builtin catalog.
    pub fn builtin() -> Self {
        Self::new(vec![
            product(
                1,
                "TikTok Hoodie",
                "$39.99",
                "3-5 days",
                "blue, red, green",
                "Cozy cotton hoodie with the TikTok logo across the chest.",
                "https://cdn.tiktokshop.example/products/hoodie.png",
            ),
            product(
                2,
                "TikTok Cap",
                "$19.99",
                "2-3 days",
                "black, white",
                "Moisture wicking 5-panel cap, one size fits most.",
                "https://cdn.tiktokshop.example/products/cap.png",
            ),
            product(
                3,
                "TikTok Water Bottle",
                "$14.99",
                "5-7 days",
                "pink, grey",
                "Thermal insulating 500ml bottle, keeps drinks cold for 12 hours.",
                "https://cdn.tiktokshop.example/products/bottle.png",
            ),
            product(
                4,
                "TikTok Tote Bag",
                "$12.99",
                "2-3 days",
                "beige, black",
                "Heavy canvas tote, fits a 15-inch laptop.",
                "https://cdn.tiktokshop.example/products/tote.png",
            ),
            product(
                5,
                "TikTok Phone Case",
                "$9.99",
                "1-2 days",
                "clear, black, lilac",
                "Shockproof TPU case for most recent phone models.",
                "https://cdn.tiktokshop.example/products/case.png",
            ),
            product(
                6,
                "TikTok Desk Lamp",
                "$24.99",
                "5-7 days",
                "white",
                "Dimmable LED ring lamp with a phone clip for filming.",
                "https://cdn.tiktokshop.example/products/lamp.png",
            ),
        ])
    }

    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Map identifiers to products, keeping the caller's order. Identifiers
    /// with no catalog entry are dropped, never fabricated.
    pub fn resolve(&self, ids: &[u32]) -> Vec<Product> {
        ids.iter().filter_map(|id| self.get(*id).cloned()).collect()
    }
}

fn product(
    id: u32,
    name: &str,
    price: &str,
    shipping: &str,
    colors: &str,
    description: &str,
    url: &str,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        price: price.to_string(),
        shipping: shipping.to_string(),
        colors: colors.to_string(),
        description: description.to_string(),
        url: url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_ids_are_unique() {
        let catalog = Catalog::builtin();
        let mut ids: Vec<u32> = catalog.all().iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.all().len());
    }

    #[test]
    fn resolve_keeps_order_and_drops_misses() {
        let catalog = Catalog::builtin();
        let found = catalog.resolve(&[3, 99, 1]);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].id, 3);
        assert_eq!(found[1].id, 1);
    }
}
