//! The ShopHub seed catalog.

use crate::catalog::{Product, StockStatus};
use crate::money::Money;

/// The full seed catalog, in display ("newest first") order.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new(
            "1",
            "Premium Wireless Headphones",
            "AudioTech",
            "Electronics",
            Money::from_decimal(299.99),
        )
        .with_original_price(Money::from_decimal(399.99))
        .with_rating(4.5, 1203)
        .with_description(
            "Experience premium sound quality with active noise cancellation and 30-hour battery life.",
        )
        .with_image("https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=800&q=80")
        .with_stock(StockStatus::InStock, 45)
        .with_colors(["Black", "Silver", "Rose Gold"])
        .with_spec("Battery Life", "30 hours")
        .with_spec("Connectivity", "Bluetooth 5.0")
        .with_spec("Weight", "250g")
        .with_spec("Charging", "USB-C Fast Charging"),
        Product::new(
            "2",
            "Smart Watch Series 7",
            "TechPro",
            "Electronics",
            Money::from_decimal(449.99),
        )
        .with_original_price(Money::from_decimal(599.99))
        .with_rating(4.8, 2456)
        .with_description("Stay connected with health tracking, GPS, and cellular connectivity.")
        .with_image("https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=800&q=80")
        .with_stock(StockStatus::InStock, 32)
        .with_sizes(["40mm", "44mm"])
        .with_colors(["Space Gray", "Silver", "Gold"])
        .with_spec("Display", "OLED Retina")
        .with_spec("Battery", "Up to 18 hours")
        .with_spec("Water Resistance", "50m")
        .with_spec("Sensors", "Heart Rate, GPS, Accelerometer"),
        Product::new(
            "3",
            "Designer Leather Handbag",
            "LuxeMode",
            "Fashion",
            Money::from_decimal(189.99),
        )
        .with_original_price(Money::from_decimal(299.99))
        .with_rating(4.6, 856)
        .with_description(
            "Premium genuine leather handbag with elegant design and multiple compartments.",
        )
        .with_image("https://images.unsplash.com/photo-1584917865442-de89df76afd3?w=800&q=80")
        .with_stock(StockStatus::Limited, 8)
        .with_colors(["Black", "Brown", "Burgundy"])
        .with_spec("Material", "100% Genuine Leather")
        .with_spec("Dimensions", "35 x 28 x 12 cm")
        .with_spec("Strap", "Adjustable")
        .with_spec("Closure", "Magnetic Snap"),
        Product::new(
            "4",
            "Casual Cotton T-Shirt",
            "UrbanWear",
            "Fashion",
            Money::from_decimal(29.99),
        )
        .with_original_price(Money::from_decimal(49.99))
        .with_rating(4.3, 543)
        .with_description("Comfortable 100% organic cotton t-shirt with modern fit.")
        .with_image("https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=800&q=80")
        .with_stock(StockStatus::InStock, 156)
        .with_sizes(["S", "M", "L", "XL", "XXL"])
        .with_colors(["White", "Black", "Navy", "Gray"])
        .with_spec("Material", "100% Organic Cotton")
        .with_spec("Fit", "Regular")
        .with_spec("Care", "Machine Washable")
        .with_spec("Origin", "Made in USA"),
        Product::new(
            "5",
            "Modern Coffee Maker",
            "BrewMaster",
            "Home",
            Money::from_decimal(159.99),
        )
        .with_rating(4.7, 1834)
        .with_description(
            "Programmable coffee maker with thermal carafe and brew strength control.",
        )
        .with_image("https://images.unsplash.com/photo-1517668808822-9ebb02f2a0e6?w=800&q=80")
        .with_stock(StockStatus::InStock, 67)
        .with_spec("Capacity", "12 cups")
        .with_spec("Features", "Programmable, Auto-shutoff")
        .with_spec("Material", "Stainless Steel")
        .with_spec("Warranty", "2 years"),
        Product::new(
            "6",
            "Luxury Scented Candle Set",
            "AromaLux",
            "Home",
            Money::from_decimal(49.99),
        )
        .with_rating(4.9, 678)
        .with_description("Set of 3 premium soy wax candles with essential oils.")
        .with_image("https://images.unsplash.com/photo-1602874801006-e24f8e476bf0?w=800&q=80")
        .with_stock(StockStatus::InStock, 94)
        .with_spec("Material", "Soy Wax")
        .with_spec("Burn Time", "40 hours each")
        .with_spec("Scents", "Lavender, Vanilla, Sandalwood")
        .with_spec("Size", "8 oz each"),
        Product::new(
            "7",
            "Organic Face Serum",
            "GlowNaturals",
            "Beauty",
            Money::from_decimal(79.99),
        )
        .with_original_price(Money::from_decimal(119.99))
        .with_rating(4.8, 2103)
        .with_description("Anti-aging serum with vitamin C and hyaluronic acid.")
        .with_image("https://images.unsplash.com/photo-1620916566398-39f1143ab7be?w=800&q=80")
        .with_stock(StockStatus::InStock, 124)
        .with_spec("Size", "30ml")
        .with_spec("Key Ingredients", "Vitamin C, Hyaluronic Acid")
        .with_spec("Skin Type", "All skin types")
        .with_spec("Cruelty-Free", "Yes"),
        Product::new(
            "8",
            "Professional Makeup Brush Set",
            "BeautyPro",
            "Beauty",
            Money::from_decimal(69.99),
        )
        .with_original_price(Money::from_decimal(99.99))
        .with_rating(4.6, 891)
        .with_description(
            "12-piece professional makeup brush set with premium synthetic bristles.",
        )
        .with_image("https://images.unsplash.com/photo-1512496015851-a90fb38ba796?w=800&q=80")
        .with_stock(StockStatus::InStock, 53)
        .with_spec("Pieces", "12 brushes")
        .with_spec("Material", "Synthetic bristles")
        .with_spec("Handle", "Bamboo")
        .with_spec("Includes", "Travel case"),
        Product::new(
            "9",
            "Organic Green Tea (100 bags)",
            "TeaHarmony",
            "Grocery",
            Money::from_decimal(24.99),
        )
        .with_rating(4.7, 1456)
        .with_description("Premium organic green tea with antioxidants.")
        .with_image("https://images.unsplash.com/photo-1564890369478-c89ca6d9cde9?w=800&q=80")
        .with_stock(StockStatus::InStock, 234)
        .with_spec("Quantity", "100 tea bags")
        .with_spec("Origin", "Japan")
        .with_spec("Organic", "USDA Certified")
        .with_spec("Caffeine", "Medium"),
        Product::new(
            "10",
            "4K Ultra HD Smart TV 55\"",
            "VisionTech",
            "Electronics",
            Money::from_decimal(799.99),
        )
        .with_original_price(Money::from_decimal(1199.99))
        .with_rating(4.7, 3421)
        .with_description("55-inch 4K UHD Smart TV with HDR and built-in streaming apps.")
        .with_image("https://images.unsplash.com/photo-1593359677879-a4bb92f829d1?w=800&q=80")
        .with_stock(StockStatus::Limited, 12)
        .with_spec("Screen Size", "55 inches")
        .with_spec("Resolution", "4K UHD (3840 x 2160)")
        .with_spec("HDR", "Yes")
        .with_spec("Smart Features", "Netflix, Prime, Disney+"),
        Product::new(
            "11",
            "Wireless Gaming Mouse",
            "GameGear",
            "Electronics",
            Money::from_decimal(89.99),
        )
        .with_rating(4.5, 967)
        .with_description("High-precision wireless gaming mouse with RGB lighting.")
        .with_image("https://images.unsplash.com/photo-1527864550417-7fd91fc51a46?w=800&q=80")
        .with_stock(StockStatus::InStock, 78)
        .with_spec("DPI", "Up to 16000")
        .with_spec("Buttons", "8 programmable")
        .with_spec("Battery", "70 hours")
        .with_spec("Connection", "Wireless 2.4GHz"),
        Product::new(
            "12",
            "Yoga Mat Premium",
            "ZenFit",
            "Fashion",
            Money::from_decimal(39.99),
        )
        .with_rating(4.8, 723)
        .with_description("Non-slip eco-friendly yoga mat with carrying strap.")
        .with_image("https://images.unsplash.com/photo-1601925260368-ae2f83cf8b7f?w=800&q=80")
        .with_stock(StockStatus::InStock, 145)
        .with_colors(["Purple", "Blue", "Pink", "Black"])
        .with_spec("Thickness", "6mm")
        .with_spec("Material", "TPE (Eco-friendly)")
        .with_spec("Size", "183 x 61 cm")
        .with_spec("Non-slip", "Yes"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_size() {
        assert_eq!(seed_products().len(), 12);
    }

    #[test]
    fn test_seed_ids_unique() {
        let products = seed_products();
        let ids: HashSet<_> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_seed_products_valid() {
        for product in seed_products() {
            product.validate().unwrap();
        }
    }

    #[test]
    fn test_seed_prices_in_cents() {
        let products = seed_products();
        assert_eq!(products[0].price.cents(), 29999);
        assert_eq!(products[0].original_price.unwrap().cents(), 39999);
        assert_eq!(products[8].price.cents(), 2499);
    }
}
