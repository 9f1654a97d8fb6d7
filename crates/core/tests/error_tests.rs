// ═══════════════════════════════════════════════════════════════════
// Error Tests — StoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use storefront_core::errors::StoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn invalid_quantity() {
        let err = StoreError::InvalidQuantity;
        assert_eq!(err.to_string(), "Quantity must be a positive whole number");
    }

    #[test]
    fn unknown_product() {
        let err = StoreError::UnknownProduct { id: 42 };
        assert_eq!(err.to_string(), "Product not found: 42");
    }

    #[test]
    fn stock_exceeded() {
        let err = StoreError::StockExceeded {
            id: 7,
            requested: 12,
            available: 5,
        };
        assert_eq!(
            err.to_string(),
            "Not enough stock for product 7: requested 12, only 5 available"
        );
    }

    #[test]
    fn empty_cart() {
        let err = StoreError::EmptyCart;
        assert_eq!(err.to_string(), "Cart is empty — nothing to check out");
    }

    #[test]
    fn invalid_tax_rate() {
        let err = StoreError::InvalidTaxRate("-0.5 — must be a finite, non-negative fraction".into());
        assert_eq!(
            err.to_string(),
            "Invalid tax rate: -0.5 — must be a finite, non-negative fraction"
        );
    }

    #[test]
    fn api_error() {
        let err = StoreError::Api {
            endpoint: "/check-stock".into(),
            message: "Not enough stock available!".into(),
        };
        assert_eq!(
            err.to_string(),
            "API error (/check-stock): Not enough stock available!"
        );
    }

    #[test]
    fn network_error() {
        let err = StoreError::Network("connection refused".into());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn deserialization_error() {
        let err = StoreError::Deserialization("unexpected EOF".into());
        assert_eq!(err.to_string(), "Deserialization error: unexpected EOF");
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn serde_json_errors_become_deserialization() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: StoreError = parse_err.into();
        assert!(matches!(err, StoreError::Deserialization(_)));
    }

    #[test]
    fn question_mark_propagation_compiles() {
        fn parse(json: &str) -> Result<serde_json::Value, StoreError> {
            Ok(serde_json::from_str(json)?)
        }
        assert!(parse("{}").is_ok());
        assert!(parse("{").is_err());
    }
}

// ── Thread safety ───────────────────────────────────────────────────

mod markers {
    use super::*;

    #[test]
    fn error_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<StoreError>();
    }

    #[test]
    fn error_is_sync() {
        fn assert_sync<T: Sync>() {}
        assert_sync::<StoreError>();
    }
}
