// ═══════════════════════════════════════════════════════════════════
// Model Tests — Product, Cart, CartSummary, OrderLine, Settings
// ═══════════════════════════════════════════════════════════════════

use std::collections::HashSet;

use storefront_core::models::cart::{Cart, CartEntry};
use storefront_core::models::order::{CheckoutReport, FailedLine, OrderLine};
use storefront_core::models::product::Product;
use storefront_core::models::settings::{Settings, DEFAULT_TAX_RATE};
use storefront_core::models::summary::{round_cents, CartSummary};

fn prod(id: u32, name: &str, category: &str, price: f64, stock: u32) -> Product {
    Product::new(id, name, category, price, stock)
}

// ═══════════════════════════════════════════════════════════════════
//  Product
// ═══════════════════════════════════════════════════════════════════

mod product {
    use super::*;

    #[test]
    fn construction() {
        let p = prod(1, "Laptop", "Electronics", 55000.0, 10);
        assert_eq!(p.id, 1);
        assert_eq!(p.name, "Laptop");
        assert_eq!(p.category, "Electronics");
        assert_eq!(p.price, 55000.0);
        assert_eq!(p.stock, 10);
    }

    #[test]
    fn in_stock() {
        assert!(prod(1, "Rice", "Grocery", 80.0, 3).in_stock());
        assert!(!prod(2, "Rice", "Grocery", 80.0, 0).in_stock());
    }

    #[test]
    fn equality_is_by_id_only() {
        // Two snapshots of the same product, taken before and after a
        // stock change, still compare equal.
        let before = prod(7, "T-Shirt", "Fashion", 499.0, 20);
        let after = prod(7, "T-Shirt", "Fashion", 549.0, 12);
        assert_eq!(before, after);
        assert_ne!(before, prod(8, "T-Shirt", "Fashion", 499.0, 20));
    }

    #[test]
    fn hash_follows_equality() {
        let mut set = HashSet::new();
        set.insert(prod(7, "T-Shirt", "Fashion", 499.0, 20));
        set.insert(prod(7, "T-Shirt", "Fashion", 549.0, 12));
        set.insert(prod(8, "Jeans", "Fashion", 999.0, 5));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn serde_roundtrip_canonical_casing() {
        let p = prod(3, "Milk", "Grocery", 60.0, 25);
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"id\":3"));
        assert!(json.contains("\"stock\":25"));
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name, "Milk");
        assert_eq!(back.stock, 25);
    }

    #[test]
    fn deserializes_go_exported_casing() {
        let json = r#"{"ID":5,"Name":"Headphones","Category":"Electronics","Price":1999.5,"Stock":4}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, 5);
        assert_eq!(p.name, "Headphones");
        assert_eq!(p.category, "Electronics");
        assert_eq!(p.price, 1999.5);
        assert_eq!(p.stock, 4);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  CartEntry & Cart
// ═══════════════════════════════════════════════════════════════════

mod cart {
    use super::*;

    #[test]
    fn entry_line_total() {
        let entry = CartEntry::new(prod(1, "Rice", "Grocery", 80.0, 50), 3);
        assert!((entry.line_total() - 240.0).abs() < 1e-9);
    }

    #[test]
    fn starts_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
    }

    #[test]
    fn get_and_position() {
        let mut cart = Cart::new();
        cart.entries
            .push(CartEntry::new(prod(1, "Rice", "Grocery", 80.0, 50), 2));
        cart.entries
            .push(CartEntry::new(prod(2, "Milk", "Grocery", 60.0, 25), 1));

        assert_eq!(cart.get(2).unwrap().quantity, 1);
        assert_eq!(cart.position(1), Some(0));
        assert_eq!(cart.position(2), Some(1));
        assert!(cart.get(99).is_none());
        assert_eq!(cart.position(99), None);
    }

    #[test]
    fn clear_empties_unconditionally() {
        let mut cart = Cart::new();
        cart.entries
            .push(CartEntry::new(prod(1, "Rice", "Grocery", 80.0, 50), 2));
        cart.clear();
        assert!(cart.is_empty());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  CartSummary
// ═══════════════════════════════════════════════════════════════════

mod summary {
    use super::*;

    #[test]
    fn empty_summary_is_all_zero() {
        let s = CartSummary::empty();
        assert_eq!(s.subtotal, 0.0);
        assert_eq!(s.tax, 0.0);
        assert_eq!(s.total, 0.0);
        assert_eq!(s.item_count, 0);
    }

    #[test]
    fn round_cents_half_up() {
        assert_eq!(round_cents(25.200000000000003), 25.2);
        assert_eq!(round_cents(1.005), 1.0); // 1.005 is stored below the midpoint
        assert_eq!(round_cents(2.675000001), 2.68);
        assert_eq!(round_cents(0.0), 0.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  OrderLine & CheckoutReport
// ═══════════════════════════════════════════════════════════════════

mod order {
    use super::*;

    #[test]
    fn order_line_wire_shape_is_camel_case() {
        let line = OrderLine::new(4, 2);
        let json = serde_json::to_string(&line).unwrap();
        assert_eq!(json, r#"{"productId":4,"quantity":2}"#);
    }

    #[test]
    fn order_line_roundtrip() {
        let line = OrderLine::new(12, 7);
        let json = serde_json::to_string(&line).unwrap();
        let back: OrderLine = serde_json::from_str(&json).unwrap();
        assert_eq!(line, back);
    }

    #[test]
    fn report_complete_when_nothing_failed() {
        let report = CheckoutReport {
            submitted: vec![OrderLine::new(1, 2)],
            failed: None,
            unsent: Vec::new(),
        };
        assert!(report.is_complete());
    }

    #[test]
    fn report_incomplete_on_failure() {
        let report = CheckoutReport {
            submitted: vec![OrderLine::new(1, 2)],
            failed: Some(FailedLine {
                line: OrderLine::new(2, 1),
                reason: "insufficient stock".into(),
            }),
            unsent: vec![OrderLine::new(3, 4)],
        };
        assert!(!report.is_complete());
    }

    #[test]
    fn report_incomplete_with_unsent_lines() {
        let report = CheckoutReport {
            submitted: Vec::new(),
            failed: None,
            unsent: vec![OrderLine::new(3, 4)],
        };
        assert!(!report.is_complete());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Settings
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;

    #[test]
    fn default_is_full_gst() {
        let s = Settings::default();
        assert_eq!(s.tax_rate, DEFAULT_TAX_RATE);
        assert_eq!(s.tax_rate, 0.18);
    }

    #[test]
    fn tax_free_variant() {
        assert_eq!(Settings::tax_free().tax_rate, 0.0);
    }
}
