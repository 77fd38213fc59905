//! Tests for validation helpers, unit conversion, and enum string forms

use std::str::FromStr;

use shared::{
    clamp_month, f_to_c, format_temp_c, format_temp_range_c, is_valid_event_type, month_name,
    normalize_email, validate_country_code, validate_email, validate_month, BudgetTier,
    CrowdLevel, Region,
};

// =============================================================================
// Input Validation
// =============================================================================

mod input_validation {
    use super::*;

    #[test]
    fn accepts_normal_emails() {
        for email in ["traveler@example.com", "a.b+c@mail.co", "x@y.io"] {
            assert!(validate_email(email).is_ok(), "rejected {email}");
        }
    }

    #[test]
    fn rejects_malformed_emails() {
        for email in ["", "plain", "@no-local.com", "no-domain@", "no-dot@domain", "two words@x.com"] {
            assert!(validate_email(email).is_err(), "accepted {email}");
        }
    }

    #[test]
    fn country_codes_must_be_two_uppercase_letters() {
        assert!(validate_country_code("ES").is_ok());
        assert!(validate_country_code("es").is_err());
        assert!(validate_country_code("ESP").is_err());
        assert!(validate_country_code("E1").is_err());
        assert!(validate_country_code("").is_err());
    }

    #[test]
    fn months_are_one_through_twelve() {
        assert!(validate_month(1).is_ok());
        assert!(validate_month(12).is_ok());
        assert!(validate_month(0).is_err());
        assert!(validate_month(13).is_err());
    }

    #[test]
    fn month_params_clamp_instead_of_failing() {
        assert_eq!(clamp_month(-3), 1);
        assert_eq!(clamp_month(0), 1);
        assert_eq!(clamp_month(6), 6);
        assert_eq!(clamp_month(13), 12);
        assert_eq!(clamp_month(99), 12);
    }

    #[test]
    fn only_known_analytics_events_are_accepted() {
        assert!(is_valid_event_type("page_view"));
        assert!(is_valid_event_type("save_trip"));
        assert!(is_valid_event_type("compare_months"));
        assert!(!is_valid_event_type("drop_tables"));
        assert!(!is_valid_event_type(""));
        assert!(!is_valid_event_type("PAGE_VIEW"));
    }

    #[test]
    fn emails_are_normalized_for_storage() {
        assert_eq!(normalize_email("  Traveler@Example.COM "), "traveler@example.com");
    }

    #[test]
    fn only_active_confirmed_subscribers_are_reachable() {
        let subscriber = |is_active, confirmed| shared::EmailSubscriber {
            id: uuid::Uuid::new_v4(),
            email: "traveler@example.com".to_string(),
            source_page: None,
            confirmed_at: if confirmed { Some(chrono::Utc::now()) } else { None },
            is_active,
            created_at: chrono::Utc::now(),
        };

        assert!(subscriber(true, true).is_reachable());
        assert!(!subscriber(true, false).is_reachable());
        assert!(!subscriber(false, true).is_reachable());
    }
}

// =============================================================================
// Unit Conversion
// =============================================================================

mod units {
    use super::*;

    #[test]
    fn fahrenheit_to_celsius_reference_points() {
        assert_eq!(f_to_c(32.0), 0);
        assert_eq!(f_to_c(212.0), 100);
        assert_eq!(f_to_c(68.0), 20);
        assert_eq!(f_to_c(75.0), 24);
        assert_eq!(f_to_c(-40.0), -40);
    }

    #[test]
    fn range_formatting() {
        assert_eq!(format_temp_range_c(59, 77), "15–25°C");
        assert_eq!(format_temp_c(50), "10°C");
    }
}

// =============================================================================
// Enum String Forms
// Stored string representations must round-trip exactly
// =============================================================================

mod enum_strings {
    use super::*;

    #[test]
    fn crowd_level_round_trips() {
        for level in [CrowdLevel::Low, CrowdLevel::Medium, CrowdLevel::High] {
            assert_eq!(CrowdLevel::from_str(level.as_str()).unwrap(), level);
        }
        assert!(CrowdLevel::from_str("packed").is_err());
    }

    #[test]
    fn budget_tier_round_trips() {
        for tier in [BudgetTier::Budget, BudgetTier::Moderate, BudgetTier::Premium] {
            assert_eq!(BudgetTier::from_str(tier.as_str()).unwrap(), tier);
        }
        assert!(BudgetTier::from_str("$$$$").is_err());
    }

    #[test]
    fn region_round_trips() {
        for region in Region::ALL {
            assert_eq!(Region::from_str(region.as_str()).unwrap(), region);
        }
        assert_eq!(Region::MiddleEast.as_str(), "Middle East");
        assert!(Region::from_str("Atlantis").is_err());
    }

    #[test]
    fn budget_tier_serializes_as_dollar_signs() {
        assert_eq!(
            serde_json::to_string(&BudgetTier::Premium).unwrap(),
            "\"$$$\""
        );
        assert_eq!(
            serde_json::from_str::<BudgetTier>("\"$\"").unwrap(),
            BudgetTier::Budget
        );
    }

    #[test]
    fn crowd_level_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&CrowdLevel::High).unwrap(), "\"high\"");
    }

    #[test]
    fn month_names() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(7), "July");
        assert_eq!(month_name(12), "December");
    }
}
