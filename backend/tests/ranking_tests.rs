//! Tests for the best/avoid month ranking and reason-text generation

use shared::{
    generate_reason, rank_months, BudgetTier, CrowdLevel, MonthlyClimate, AVOID_SCORE_THRESHOLD,
};

/// A neutral climate row with a chosen month and score
fn climate(month: u32, score: i32) -> MonthlyClimate {
    MonthlyClimate {
        country_code: "ES".to_string(),
        month,
        score,
        temp_min_f: 55,
        temp_max_f: 75,
        rain_mm: 60,
        crowd_level: CrowdLevel::Medium,
        budget_tier: BudgetTier::Moderate,
        highlights: vec![],
    }
}

/// A climate row with full control over the reason inputs
fn climate_with(
    temp_min_f: i32,
    temp_max_f: i32,
    rain_mm: i32,
    crowd_level: CrowdLevel,
) -> MonthlyClimate {
    MonthlyClimate {
        country_code: "ES".to_string(),
        month: 6,
        score: 80,
        temp_min_f,
        temp_max_f,
        rain_mm,
        crowd_level,
        budget_tier: BudgetTier::Moderate,
        highlights: vec![],
    }
}

// =============================================================================
// Ranking Tests
// =============================================================================

mod ranking {
    use super::*;

    #[test]
    fn empty_input_means_no_recommendation() {
        assert!(rank_months(&[]).is_none());
    }

    #[test]
    fn best_is_top_three_by_score_descending() {
        let rows: Vec<_> = (1..=12).map(|m| climate(m, 70 + m as i32)).collect();
        let result = rank_months(&rows).unwrap();

        assert_eq!(result.best.len(), 3);
        assert_eq!(result.best[0].month, 12);
        assert_eq!(result.best[1].month, 11);
        assert_eq!(result.best[2].month, 10);
        assert!(result.best[0].score >= result.best[1].score);
        assert!(result.best[1].score >= result.best[2].score);
    }

    #[test]
    fn month_names_are_attached() {
        let rows = vec![climate(1, 90), climate(7, 80)];
        let result = rank_months(&rows).unwrap();
        assert_eq!(result.best[0].month_name, "January");
        assert_eq!(result.best[1].month_name, "July");
    }

    #[test]
    fn avoid_takes_the_two_lowest_below_threshold() {
        let mut rows: Vec<_> = (1..=10).map(|m| climate(m, 85)).collect();
        rows.push(climate(11, 65));
        rows.push(climate(12, 50));
        let result = rank_months(&rows).unwrap();

        assert_eq!(result.avoid.len(), 2);
        // Second-worst first, worst last: the tail of the descending sort.
        assert_eq!(result.avoid[0].month, 11);
        assert_eq!(result.avoid[0].score, 65);
        assert_eq!(result.avoid[1].month, 12);
        assert_eq!(result.avoid[1].score, 50);
        for entry in &result.avoid {
            assert!(entry.score < AVOID_SCORE_THRESHOLD);
        }
    }

    #[test]
    fn decent_worst_months_are_not_surfaced() {
        // Locally worst but above the absolute threshold
        let rows: Vec<_> = (1..=12).map(|m| climate(m, 70 + m as i32)).collect();
        let result = rank_months(&rows).unwrap();
        assert!(result.avoid.is_empty());
    }

    #[test]
    fn mixed_tail_keeps_only_problem_months() {
        let mut rows: Vec<_> = (1..=10).map(|m| climate(m, 85)).collect();
        rows.push(climate(11, 72));
        rows.push(climate(12, 60));
        let result = rank_months(&rows).unwrap();

        assert_eq!(result.avoid.len(), 1);
        assert_eq!(result.avoid[0].month, 12);
    }

    #[test]
    fn partial_data_degrades_gracefully() {
        let rows = vec![climate(3, 72), climate(9, 60)];
        let result = rank_months(&rows).unwrap();

        assert_eq!(result.best.len(), 2);
        assert_eq!(result.best[0].month, 3);
        // With only two rows the tail overlaps the head; the threshold
        // still decides what is surfaced.
        assert_eq!(result.avoid.len(), 1);
        assert_eq!(result.avoid[0].month, 9);
    }

    #[test]
    fn single_low_month_appears_in_both_lists() {
        let rows = vec![climate(2, 55)];
        let result = rank_months(&rows).unwrap();
        assert_eq!(result.best.len(), 1);
        assert_eq!(result.avoid.len(), 1);
        assert_eq!(result.best[0].month, 2);
        assert_eq!(result.avoid[0].month, 2);
    }

    #[test]
    fn tied_scores_keep_month_order() {
        // Stable sort: identical scores stay in month-ascending order
        let rows: Vec<_> = (1..=6).map(|m| climate(m, 80)).collect();
        let result = rank_months(&rows).unwrap();
        assert_eq!(result.best[0].month, 1);
        assert_eq!(result.best[1].month, 2);
        assert_eq!(result.best[2].month, 3);
    }
}

// =============================================================================
// Reason Generation Tests
// Overlapping categories resolved by a fixed first-match-wins order
// =============================================================================

mod reasons {
    use super::*;

    #[test]
    fn good_mild_dry_quiet() {
        // 55°F average is 13°C: mild
        let c = climate_with(45, 65, 20, CrowdLevel::Low);
        assert_eq!(
            generate_reason(&c, true),
            "Pleasant temperatures, low rainfall, and fewer crowds."
        );
    }

    #[test]
    fn good_warm_dry() {
        // 80°F average is 27°C: warm
        let c = climate_with(70, 90, 30, CrowdLevel::Medium);
        assert_eq!(
            generate_reason(&c, true),
            "Warm and dry—ideal conditions for exploring."
        );
    }

    #[test]
    fn good_warm_dry_quiet_prefers_warm_dry() {
        // Both "warm and dry" and "dry season" apply; the earlier rule wins
        let c = climate_with(70, 90, 30, CrowdLevel::Low);
        assert_eq!(
            generate_reason(&c, true),
            "Warm and dry—ideal conditions for exploring."
        );
    }

    #[test]
    fn good_mild_quiet() {
        let c = climate_with(45, 65, 70, CrowdLevel::Low);
        assert_eq!(
            generate_reason(&c, true),
            "Comfortable weather with a peaceful atmosphere."
        );
    }

    #[test]
    fn good_dry_quiet() {
        // 30°F average is -1°C: neither mild nor warm
        let c = climate_with(20, 40, 20, CrowdLevel::Low);
        assert_eq!(
            generate_reason(&c, true),
            "Dry season with minimal tourist crowds."
        );
    }

    #[test]
    fn good_warm_only() {
        let c = climate_with(70, 90, 70, CrowdLevel::Medium);
        assert_eq!(
            generate_reason(&c, true),
            "Warm weather perfect for outdoor activities."
        );
    }

    #[test]
    fn good_fallback() {
        let c = climate_with(20, 40, 70, CrowdLevel::Medium);
        assert_eq!(generate_reason(&c, true), "Favorable conditions for travel.");
    }

    #[test]
    fn bad_rainy_crowded() {
        let c = climate_with(70, 90, 150, CrowdLevel::High);
        assert_eq!(
            generate_reason(&c, false),
            "Peak rainfall and high tourist density."
        );
    }

    #[test]
    fn bad_rainy_only() {
        let c = climate_with(70, 90, 150, CrowdLevel::Medium);
        assert_eq!(
            generate_reason(&c, false),
            "Expect significant rainfall during this period."
        );
    }

    #[test]
    fn bad_crowded_warm() {
        let c = climate_with(70, 90, 50, CrowdLevel::High);
        assert_eq!(
            generate_reason(&c, false),
            "Peak season—expect crowds and higher prices."
        );
    }

    #[test]
    fn bad_cold() {
        let c = climate_with(20, 40, 50, CrowdLevel::Medium);
        assert_eq!(
            generate_reason(&c, false),
            "Cold temperatures may limit outdoor activities."
        );
    }

    #[test]
    fn bad_crowded_mild() {
        let c = climate_with(45, 65, 70, CrowdLevel::High);
        assert_eq!(
            generate_reason(&c, false),
            "High tourist season with elevated prices."
        );
    }

    #[test]
    fn bad_fallback() {
        let c = climate_with(45, 65, 70, CrowdLevel::Medium);
        assert_eq!(
            generate_reason(&c, false),
            "Less favorable conditions for travel."
        );
    }

    #[test]
    fn reason_is_pure() {
        let c = climate_with(70, 90, 30, CrowdLevel::Low);
        assert_eq!(generate_reason(&c, true), generate_reason(&c, true));
        assert_eq!(generate_reason(&c, false), generate_reason(&c, false));
    }

    #[test]
    fn mild_boundaries_are_inclusive() {
        // 50°F avg = 10°C and 68°F avg = 20°C both count as mild
        let low_edge = climate_with(40, 60, 20, CrowdLevel::Low);
        let high_edge = climate_with(58, 78, 20, CrowdLevel::Low);
        assert_eq!(
            generate_reason(&low_edge, true),
            "Pleasant temperatures, low rainfall, and fewer crowds."
        );
        assert_eq!(
            generate_reason(&high_edge, true),
            "Pleasant temperatures, low rainfall, and fewer crowds."
        );
    }
}
