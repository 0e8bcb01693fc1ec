//! The hard-coded product catalog.
//!
//! Order here is the canonical catalog order; every query preserves it.

use crate::catalog::product::{Balance, PlayingStyle, Product, SkillLevel};

/// Build the full seed catalog.
pub fn seed_products() -> Vec<Product> {
    vec![
        // Badminton racquets
        Product::new("rac-001", "Yonex Astrox 99 Pro", "Yonex", "Badminton", "Racquets", 18999)
            .with_original_price(22999)
            .with_image("https://images.unsplash.com/photo-1617883861744-13b534e3b928?w=500&q=80")
            .with_description(
                "The Yonex Astrox 99 Pro is designed for players who want maximum power \
                 with steep attack angles.",
            )
            .with_features(&[
                "Rotational Generator System",
                "Namd",
                "Power-Assist Bumper",
                "New Built-in T-Joint",
            ])
            .with_specifications(&[
                ("Flex", "Stiff"),
                ("Frame", "HM Graphite + Namd + Tungsten"),
                ("Shaft", "HM Graphite + Namd"),
                ("Weight", "4U (80-84g)"),
                ("Grip Size", "G5"),
                ("Max Tension", "28 lbs"),
            ])
            .with_racquet_specs(
                SkillLevel::Advanced,
                PlayingStyle::Power,
                "4U",
                Balance::HeadHeavy,
                "G5",
            )
            .with_new_badge()
            .with_featured()
            .with_rating(4.9, 156),
        Product::new("rac-002", "Victor Thruster K Falcon", "Victor", "Badminton", "Racquets", 12499)
            .with_original_price(14999)
            .with_image("https://images.unsplash.com/photo-1626224583764-f87db24ac4ea?w=500&q=80")
            .with_description("Professional grade racquet with excellent control and power balance.")
            .with_racquet_specs(
                SkillLevel::Intermediate,
                PlayingStyle::AllRound,
                "3U",
                Balance::Even,
                "G5",
            )
            .with_featured()
            .with_rating(4.7, 89),
        Product::new("rac-003", "Li-Ning Axforce 80", "Li-Ning", "Badminton", "Racquets", 15999)
            .with_image("https://images.unsplash.com/photo-1554068865-24cecd4e34b8?w=500&q=80")
            .with_description("Cutting-edge technology for aggressive players seeking powerful smashes.")
            .with_racquet_specs(
                SkillLevel::Advanced,
                PlayingStyle::Power,
                "4U",
                Balance::HeadHeavy,
                "G5",
            )
            .with_new_badge()
            .with_rating(4.8, 67),
        Product::new("rac-004", "Yonex Nanoflare 700", "Yonex", "Badminton", "Racquets", 16999)
            .with_image("https://images.unsplash.com/photo-1617883861744-13b534e3b928?w=500&q=80")
            .with_description(
                "Lightning-fast racquet designed for quick exchanges and control-oriented play.",
            )
            .with_racquet_specs(
                SkillLevel::Intermediate,
                PlayingStyle::Control,
                "5U",
                Balance::HeadLight,
                "G5",
            )
            .with_featured()
            .with_rating(4.6, 112),
        // Badminton shoes
        Product::new("shoe-001", "Yonex Power Cushion 65Z3", "Yonex", "Badminton", "Shoes", 11999)
            .with_original_price(13999)
            .with_image("https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=500&q=80")
            .with_description(
                "Premium court shoes with exceptional cushioning and stability for intense games.",
            )
            .with_features(&[
                "Power Cushion+",
                "Lateral Shell",
                "Hexagrip Sole",
                "Syncro-Fit Insole",
            ])
            .with_size("UK 6-12")
            .with_color("White/Red")
            .with_new_badge()
            .with_featured()
            .with_rating(4.8, 203),
        Product::new("shoe-002", "Victor A970ACE", "Victor", "Badminton", "Shoes", 8999)
            .with_image("https://images.unsplash.com/photo-1606107557195-0e29a4b5b4aa?w=500&q=80")
            .with_description("Lightweight performance shoes with excellent grip and support.")
            .with_size("UK 6-11")
            .with_color("Black/Gold")
            .with_rating(4.5, 145),
        Product::new("shoe-003", "Li-Ning Ranger TD", "Li-Ning", "Badminton", "Shoes", 6499)
            .with_original_price(7999)
            .with_image("https://images.unsplash.com/photo-1595950653106-6c9ebd614d3a?w=500&q=80")
            .with_description("Value-packed shoes with non-marking sole and good cushioning.")
            .with_size("UK 6-11")
            .with_color("Navy Blue")
            .with_rating(4.3, 178),
        // Kitbags
        Product::new("bag-001", "Yonex Pro Tournament Bag", "Yonex", "Badminton", "Kitbags", 5999)
            .with_original_price(7499)
            .with_image("https://images.unsplash.com/photo-1553062407-98eeb64c6a62?w=500&q=80")
            .with_description("6-racquet capacity tournament bag with thermal compartment.")
            .with_features(&[
                "Thermal Lining",
                "Multiple Compartments",
                "Shoe Pocket",
                "Accessory Pockets",
            ])
            .with_featured()
            .with_rating(4.7, 89),
        Product::new("bag-002", "Victor BR9211 Backpack", "Victor", "Badminton", "Kitbags", 3499)
            .with_image("https://images.unsplash.com/photo-1622560480654-d96214fdc887?w=500&q=80")
            .with_description("Stylish backpack for casual players with 2-racquet capacity.")
            .with_rating(4.4, 56),
        // Shuttles
        Product::new("shuttle-001", "Yonex AS-50 Feather", "Yonex", "Badminton", "Shuttles", 2499)
            .with_image("https://images.unsplash.com/photo-1599391398131-cd12dfc6c24e?w=500&q=80")
            .with_description("Tournament grade feather shuttlecocks (pack of 12).")
            .with_featured()
            .with_rating(4.9, 312),
        Product::new("shuttle-002", "Li-Ning A+600 Nylon", "Li-Ning", "Badminton", "Shuttles", 799)
            .with_image("https://images.unsplash.com/photo-1599391398131-cd12dfc6c24e?w=500&q=80")
            .with_description("Durable nylon shuttlecocks for practice sessions (pack of 6).")
            .with_rating(4.2, 234),
        // Strings
        Product::new("string-001", "Yonex BG-65", "Yonex", "Badminton", "Strings", 399)
            .with_image("https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=500&q=80")
            .with_description("Most popular all-round string with excellent durability.")
            .with_specifications(&[
                ("Gauge", "0.70mm"),
                ("Length", "10m"),
                ("Tension", "20-28 lbs"),
            ])
            .with_rating(4.6, 456),
        Product::new("string-002", "Yonex BG-80 Power", "Yonex", "Badminton", "Strings", 549)
            .with_image("https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=500&q=80")
            .with_description("High repulsion string for powerful smashes.")
            .with_specifications(&[
                ("Gauge", "0.68mm"),
                ("Length", "10m"),
                ("Tension", "20-28 lbs"),
            ])
            .with_featured()
            .with_rating(4.8, 289),
        // Grips
        Product::new("grip-001", "Yonex AC102EX Super Grap", "Yonex", "Badminton", "Grips", 299)
            .with_image("https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=500&q=80")
            .with_description("Premium overgrip with excellent sweat absorption (pack of 3).")
            .with_rating(4.7, 567),
        // Other sports
        Product::new("cricket-001", "SG Test Cricket Bat", "SG", "Cricket", "Bats", 8999)
            .with_image("https://images.unsplash.com/photo-1531415074968-036ba1b575da?w=500&q=80")
            .with_description("English willow cricket bat for professional players.")
            .with_rating(4.6, 123),
        Product::new("football-001", "Nike Flight Football", "Nike", "Football", "Footballs", 4999)
            .with_image("https://images.unsplash.com/photo-1614632537239-e2258bc5e55b?w=500&q=80")
            .with_description("Official match ball with aerodynamic groove technology.")
            .with_rating(4.8, 89),
        Product::new("tt-001", "Butterfly Timo Boll TT Bat", "Butterfly", "Table Tennis", "Bats", 6999)
            .with_image("https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=500&q=80")
            .with_description("Professional table tennis paddle with premium rubber.")
            .with_rating(4.7, 67),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_size() {
        assert_eq!(seed_products().len(), 17);
    }

    #[test]
    fn test_seed_ids_unique() {
        let products = seed_products();
        let ids: HashSet<_> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_seed_canonical_order() {
        let products = seed_products();
        assert_eq!(products[0].id.as_str(), "rac-001");
        assert_eq!(products[16].id.as_str(), "tt-001");
    }

    #[test]
    fn test_seed_sample_fields() {
        let products = seed_products();
        let astrox = &products[0];
        assert_eq!(astrox.brand, "Yonex");
        assert_eq!(astrox.skill_level, Some(SkillLevel::Advanced));
        assert_eq!(astrox.balance, Some(Balance::HeadHeavy));
        assert_eq!(astrox.specifications[0], ("Flex".to_string(), "Stiff".to_string()));
        assert!(astrox.is_new && astrox.is_featured && astrox.in_stock);
    }
}
