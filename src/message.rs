// src/message.rs
use serde::{Deserialize, Serialize};

use crate::services::catalog::Product;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub products: Vec<Product>,
}
