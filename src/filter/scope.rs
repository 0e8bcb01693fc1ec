//! Route-derived query scope.
//!
//! Scope constraints come from the navigation context (the current category
//! or new-arrivals route) rather than from filter chips, and are applied
//! ahead of the user's selection.

use serde::{Deserialize, Serialize};

/// The sport token treated as an umbrella for the whole badminton range.
pub const BADMINTON_TOKEN: &str = "badminton";

/// Constraints implied by the current route.
///
/// Tokens are raw path segments (usually lowercase) and are matched
/// case-insensitively against the canonical catalog values. Precedence when
/// building a predicate: new-arrivals first (which ignores category scoping
/// entirely), then subcategory, then sport.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteScope {
    /// Sport segment of the route (e.g. "badminton", "cricket").
    pub sport: Option<String>,
    /// Subcategory segment of the route (e.g. "racquets").
    pub subcategory: Option<String>,
    /// Whether this is the new-arrivals listing.
    pub new_arrivals: bool,
}

impl RouteScope {
    /// Scope to a sport category page.
    pub fn sport(token: impl Into<String>) -> Self {
        Self {
            sport: Some(token.into()),
            subcategory: None,
            new_arrivals: false,
        }
    }

    /// Scope to a subcategory page under a sport.
    pub fn subcategory(sport: impl Into<String>, subcategory: impl Into<String>) -> Self {
        Self {
            sport: Some(sport.into()),
            subcategory: Some(subcategory.into()),
            new_arrivals: false,
        }
    }

    /// Scope to the new-arrivals listing.
    pub fn new_arrivals() -> Self {
        Self {
            sport: None,
            subcategory: None,
            new_arrivals: true,
        }
    }

    /// Check if the sport token is the badminton umbrella value.
    pub fn is_badminton_umbrella(&self) -> bool {
        self.sport
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case(BADMINTON_TOKEN))
    }

    /// Title for the listing page: the capitalized subcategory token if
    /// present, else the capitalized sport token, else "All Products".
    pub fn title(&self) -> String {
        if self.new_arrivals {
            return "New Arrivals".to_string();
        }
        self.subcategory
            .as_deref()
            .or(self.sport.as_deref())
            .map(capitalize)
            .unwrap_or_else(|| "All Products".to_string())
    }
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badminton_umbrella() {
        assert!(RouteScope::sport("badminton").is_badminton_umbrella());
        assert!(RouteScope::sport("Badminton").is_badminton_umbrella());
        assert!(!RouteScope::sport("cricket").is_badminton_umbrella());
        assert!(!RouteScope::new_arrivals().is_badminton_umbrella());
    }

    #[test]
    fn test_title() {
        assert_eq!(RouteScope::sport("cricket").title(), "Cricket");
        assert_eq!(RouteScope::subcategory("badminton", "racquets").title(), "Racquets");
        assert_eq!(RouteScope::new_arrivals().title(), "New Arrivals");
        assert_eq!(RouteScope::default().title(), "All Products");
    }
}
