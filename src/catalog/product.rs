//! Product record and its enumerated attributes.

use crate::ids::ProductId;
use crate::price::Rupees;
use serde::{Deserialize, Serialize};

/// Player skill level a product is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    /// Suitable for every level.
    All,
}

impl SkillLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::All => "All",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Beginner" => Some(SkillLevel::Beginner),
            "Intermediate" => Some(SkillLevel::Intermediate),
            "Advanced" => Some(SkillLevel::Advanced),
            "All" => Some(SkillLevel::All),
            _ => None,
        }
    }
}

/// Playing style a racquet is tuned for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayingStyle {
    Power,
    Control,
    #[serde(rename = "All-Round")]
    AllRound,
}

impl PlayingStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayingStyle::Power => "Power",
            PlayingStyle::Control => "Control",
            PlayingStyle::AllRound => "All-Round",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Power" => Some(PlayingStyle::Power),
            "Control" => Some(PlayingStyle::Control),
            "All-Round" => Some(PlayingStyle::AllRound),
            _ => None,
        }
    }
}

/// Racquet balance point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Balance {
    #[serde(rename = "Head Heavy")]
    HeadHeavy,
    Even,
    #[serde(rename = "Head Light")]
    HeadLight,
}

impl Balance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Balance::HeadHeavy => "Head Heavy",
            Balance::Even => "Even",
            Balance::HeadLight => "Head Light",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Head Heavy" => Some(Balance::HeadHeavy),
            "Even" => Some(Balance::Even),
            "Head Light" => Some(Balance::HeadLight),
            _ => None,
        }
    }
}

/// A sellable item in the catalog.
///
/// The catalog is fixed at build time; products are never created, mutated,
/// or removed at runtime. Brand and category are plain strings drawn from the
/// fixed vocabularies but deliberately not validated against them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Brand name (see `vocab::BRANDS`).
    pub brand: String,
    /// Sport category (e.g. "Badminton", "Cricket").
    pub category: String,
    /// Subcategory within the sport (e.g. "Racquets", "Shoes").
    pub subcategory: String,
    /// Current selling price.
    pub price: Rupees,
    /// Pre-discount price, when the product is on sale.
    pub original_price: Option<Rupees>,
    /// Primary image URL.
    pub image: String,
    /// Additional gallery image URLs.
    pub images: Vec<String>,
    /// Full description.
    pub description: String,
    /// Marketing feature bullets.
    pub features: Vec<String>,
    /// Specification key/value pairs; display order is insertion order.
    pub specifications: Vec<(String, String)>,
    /// Skill level, for products where it applies (racquets).
    pub skill_level: Option<SkillLevel>,
    /// Playing style, for products where it applies (racquets).
    pub playing_style: Option<PlayingStyle>,
    /// Racquet weight class (e.g. "4U").
    pub weight: Option<String>,
    /// Racquet balance point.
    pub balance: Option<Balance>,
    /// Racquet grip size (e.g. "G5").
    pub grip_size: Option<String>,
    /// Size range for apparel/shoes (e.g. "UK 6-12").
    pub size: Option<String>,
    /// Colorway.
    pub color: Option<String>,
    /// Whether the product is currently in stock.
    pub in_stock: bool,
    /// Whether the product carries the NEW badge.
    pub is_new: bool,
    /// Whether the product is featured on the home page.
    pub is_featured: bool,
    /// Average review rating, expected in 0-5 (not enforced).
    pub rating: f64,
    /// Number of reviews behind the rating.
    pub review_count: u32,
}

impl Product {
    /// Create a product with the attributes every catalog entry has.
    /// Optional attributes are set with the `with_*` builders.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        brand: impl Into<String>,
        category: impl Into<String>,
        subcategory: impl Into<String>,
        price: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            brand: brand.into(),
            category: category.into(),
            subcategory: subcategory.into(),
            price: Rupees::new(price),
            original_price: None,
            image: String::new(),
            images: Vec::new(),
            description: String::new(),
            features: Vec::new(),
            specifications: Vec::new(),
            skill_level: None,
            playing_style: None,
            weight: None,
            balance: None,
            grip_size: None,
            size: None,
            color: None,
            in_stock: true,
            is_new: false,
            is_featured: false,
            rating: 0.0,
            review_count: 0,
        }
    }

    /// Set the pre-discount price.
    pub fn with_original_price(mut self, price: u32) -> Self {
        self.original_price = Some(Rupees::new(price));
        self
    }

    /// Set the primary image URL.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = url.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }

    /// Set the feature bullets.
    pub fn with_features(mut self, features: &[&str]) -> Self {
        self.features = features.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Set the specification table (display order = argument order).
    pub fn with_specifications(mut self, specs: &[(&str, &str)]) -> Self {
        self.specifications = specs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self
    }

    /// Set the racquet attributes: skill level, playing style, weight class,
    /// balance, and grip size.
    pub fn with_racquet_specs(
        mut self,
        skill_level: SkillLevel,
        playing_style: PlayingStyle,
        weight: impl Into<String>,
        balance: Balance,
        grip_size: impl Into<String>,
    ) -> Self {
        self.skill_level = Some(skill_level);
        self.playing_style = Some(playing_style);
        self.weight = Some(weight.into());
        self.balance = Some(balance);
        self.grip_size = Some(grip_size.into());
        self
    }

    /// Set the size range.
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Set the colorway.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the review rating and count.
    pub fn with_rating(mut self, rating: f64, review_count: u32) -> Self {
        self.rating = rating;
        self.review_count = review_count;
        self
    }

    /// Give the product the NEW badge.
    pub fn with_new_badge(mut self) -> Self {
        self.is_new = true;
        self
    }

    /// Feature the product on the home page.
    pub fn with_featured(mut self) -> Self {
        self.is_featured = true;
        self
    }

    /// Mark the product out of stock.
    pub fn out_of_stock(mut self) -> Self {
        self.in_stock = false;
        self
    }

    /// Percentage discount against the original price, rounded to the
    /// nearest whole percent. 0 whenever there is no original price or the
    /// original price is not higher than the selling price.
    pub fn discount_percent(&self) -> u32 {
        self.original_price
            .map(|original| original.discount_percent(self.price))
            .unwrap_or(0)
    }

    /// Check if this product shows a discount badge.
    pub fn is_on_sale(&self) -> bool {
        self.discount_percent() > 0
    }

    /// Number of filled stars in the 5-star rating display: `floor(rating)`,
    /// clamped to [0, 5] so out-of-range ratings cannot overflow the row.
    pub fn filled_stars(&self) -> u8 {
        self.rating.floor().clamp(0.0, 5.0) as u8
    }

    /// Selling price formatted for display, e.g. `₹18,999`.
    pub fn price_display(&self) -> String {
        self.price.display()
    }
}
