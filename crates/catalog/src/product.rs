use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use portside_core::{Clock, DomainResult, ValidationError};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Product category. Replaces a per-category subclass hierarchy: the only
/// behavioral differences are the display tag and whether an age is
/// meaningful at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Land,
    Sea,
    Digital,
}

impl Category {
    /// Display tag prepended to product descriptions.
    pub fn tag(self) -> &'static str {
        match self {
            Category::Land => "[Land]",
            Category::Sea => "[Sea]",
            Category::Digital => "[Digital]",
        }
    }

    /// Digital goods have no manufacturing age worth reporting.
    pub fn has_age(self) -> bool {
        !matches!(self, Category::Digital)
    }
}

/// Catalog entry with a validated name and a guarded price.
///
/// `price` is private so every external write goes through [`set_price`]
/// and its non-negativity check. [`apply_discount`] writes the field
/// directly and is the one documented exception (see its docs).
///
/// [`set_price`]: Product::set_price
/// [`apply_discount`]: Product::apply_discount
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    category: Category,
    name: String,
    price: i64,
    manufactured_at: DateTime<Utc>,
}

impl Product {
    /// Create a product, validating the name and routing the initial price
    /// through the setter so construction-time negatives are rejected too.
    ///
    /// The timestamp is stored verbatim; no normalization, no defaults.
    pub fn new(
        category: Category,
        name: impl Into<String>,
        price: i64,
        manufactured_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let name = name.into();
        validate_name(&name)?;

        let mut product = Self {
            category,
            name,
            price: 0,
            manufactured_at,
        };
        product.set_price(price)?;
        Ok(product)
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current price, in whole currency units. Reflects any discounts
    /// applied so far; there is no separate original-price field.
    pub fn price(&self) -> i64 {
        self.price
    }

    /// Overwrite the price. Rejects negative values; the previous price is
    /// kept on failure.
    pub fn set_price(&mut self, value: i64) -> DomainResult<()> {
        if value < 0 {
            return Err(ValidationError::negative_price(value));
        }
        self.price = value;
        Ok(())
    }

    pub fn manufactured_at(&self) -> DateTime<Utc> {
        self.manufactured_at
    }

    /// One-line display string: `"<tag> <name> costs $<price>"`.
    pub fn describe(&self) -> String {
        format!("{} {} costs ${}", self.category.tag(), self.name, self.price)
    }

    /// Subtract `floor(price * percent / 100)` from the price in place.
    ///
    /// `percent` is deliberately not bounds-checked, and the subtraction
    /// bypasses the setter guard: a negative percent raises the price and a
    /// percent above 100 can leave it negative. Callers own the bounds.
    pub fn apply_discount(&mut self, percent: i64) {
        let discount = (self.price * percent).div_euclid(100);
        self.price -= discount;
    }

    /// Whole days elapsed between `clock.now()` and the manufacture
    /// timestamp, floored. Returns `None` for digital products, where the
    /// question does not apply; the skip is logged at info level.
    pub fn age_in_days(&self, clock: &impl Clock) -> Option<i64> {
        if !self.category.has_age() {
            tracing::info!(name = %self.name, "age not applicable for digital products");
            return None;
        }

        let elapsed = clock.now().signed_duration_since(self.manufactured_at);
        Some(elapsed.num_milliseconds().div_euclid(MILLIS_PER_DAY))
    }
}

/// Stateless name check: at least two characters, so empty names fail too.
pub fn validate_name(name: &str) -> DomainResult<()> {
    let len = name.chars().count();
    if len < 2 {
        return Err(ValidationError::name_too_short(len));
    }
    Ok(())
}
