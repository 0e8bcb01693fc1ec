//! Category taxonomy tiles for navigation grids.

use crate::catalog::store::Catalog;
use serde::Serialize;

/// A named category grouping with a display icon and a nominal count.
///
/// `display_count` is a static label inherited from the merchandising copy;
/// it is not recomputed from the catalog and can drift from reality. Use
/// [`CategoryTile::live_count`] when an accurate number is wanted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryTile {
    /// Tile name: a subcategory when under a sport umbrella, else a sport.
    pub name: &'static str,
    /// Display icon (emoji).
    pub icon: &'static str,
    /// Static advertised product count.
    pub display_count: u32,
    /// Sport umbrella the tile lives under; `None` when the tile is itself
    /// a sport.
    pub sport: Option<&'static str>,
}

impl CategoryTile {
    /// Count the products actually in this tile's grouping.
    pub fn live_count(&self, catalog: &Catalog) -> usize {
        catalog
            .iter()
            .filter(|p| match self.sport {
                Some(sport) => p.category == sport && p.subcategory == self.name,
                None => p.category == self.name,
            })
            .count()
    }
}

/// Badminton subcategory tiles, in display order.
pub const BADMINTON_CATEGORIES: [CategoryTile; 7] = [
    tile("Racquets", "\u{1f3f8}", 45),
    tile("Shoes", "\u{1f45f}", 28),
    tile("Kitbags", "\u{1f392}", 15),
    tile("Shuttles", "\u{1fab6}", 12),
    tile("Strings", "\u{1f9f5}", 20),
    tile("Grips", "\u{1f932}", 18),
    tile("Nets", "\u{1f945}", 8),
];

/// Other-sport tiles, in display order.
pub const OTHER_SPORTS: [CategoryTile; 4] = [
    sport_tile("Cricket", "\u{1f3cf}", 35),
    sport_tile("Football", "\u{26bd}", 22),
    sport_tile("Volleyball", "\u{1f3d0}", 15),
    sport_tile("Table Tennis", "\u{1f3d3}", 18),
];

const fn tile(name: &'static str, icon: &'static str, display_count: u32) -> CategoryTile {
    CategoryTile {
        name,
        icon,
        display_count,
        sport: Some("Badminton"),
    }
}

const fn sport_tile(name: &'static str, icon: &'static str, display_count: u32) -> CategoryTile {
    CategoryTile {
        name,
        icon,
        display_count,
        sport: None,
    }
}

/// All tiles across both groups, in display order. This is the chip list the
/// all-products view offers for its category filter.
pub fn all_tiles() -> impl Iterator<Item = &'static CategoryTile> {
    BADMINTON_CATEGORIES.iter().chain(OTHER_SPORTS.iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::store::Catalog;

    #[test]
    fn test_live_count_subcategory_tile() {
        let catalog = Catalog::seeded();
        let racquets = &BADMINTON_CATEGORIES[0];
        assert_eq!(racquets.name, "Racquets");
        assert_eq!(racquets.live_count(catalog), 4);
        // The advertised count drifts from the live catalog; that is expected.
        assert_ne!(racquets.display_count as usize, racquets.live_count(catalog));
    }

    #[test]
    fn test_live_count_sport_tile() {
        let catalog = Catalog::seeded();
        let cricket = &OTHER_SPORTS[0];
        assert_eq!(cricket.live_count(catalog), 1);
    }

    #[test]
    fn test_all_tiles_order() {
        let names: Vec<_> = all_tiles().map(|t| t.name).collect();
        assert_eq!(names.first(), Some(&"Racquets"));
        assert_eq!(names.last(), Some(&"Table Tennis"));
        assert_eq!(names.len(), 11);
    }
}
