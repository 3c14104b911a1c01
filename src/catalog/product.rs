//! Product Module
//!
//! The product snapshot cached by the catalog service. A plain data copy
//! of the store's authoritative row; mutating a returned snapshot never
//! affects the cache or the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// == Product ==
/// A catalog product as served to read paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub image: Option<String>,
    pub category: String,
    pub subcategory: String,
    pub price: f64,
    pub description: String,
    pub stock: i32,
    pub is_active: bool,
    pub sku: Option<String>,
    pub weight: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Minimal constructor used by tests and fixtures; optional fields
    /// start empty, timestamps start at now.
    pub fn new(id: u64, title: impl Into<String>, price: f64) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: title.into(),
            image: None,
            category: String::new(),
            subcategory: String::new(),
            price,
            description: String::new(),
            stock: 0,
            is_active: true,
            sku: None,
            weight: None,
            created_at: now,
            updated_at: now,
        }
    }
}
