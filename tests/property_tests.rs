//! Property tests for lookups and aggregation

use premium_quote::{
    aggregate_quote, lookup_cancer_rider_premium, lookup_health_plan_premium, lookup_life_a_premium,
    lookup_life_b_premium, ClientProfile, EndowmentCoverage, Gender, HealthPlanId, HealthTier, Kyat,
    LifeInsurance, ProductSelection, RateBook, UniversalPlan,
};
use proptest::prelude::*;

fn gender() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Male), Just(Gender::Female)]
}

fn universal_plan() -> impl Strategy<Value = UniversalPlan> {
    proptest::sample::select(UniversalPlan::ALL.to_vec())
}

fn health_tier() -> impl Strategy<Value = HealthTier> {
    proptest::sample::select(HealthTier::ALL.to_vec())
}

fn coverage() -> impl Strategy<Value = EndowmentCoverage> {
    proptest::sample::select(EndowmentCoverage::ALL.to_vec())
}

fn life_insurance() -> impl Strategy<Value = Option<LifeInsurance>> {
    prop_oneof![
        Just(None),
        (universal_plan(), health_tier())
            .prop_map(|(plan, health_tier)| Some(LifeInsurance::Universal { plan, health_tier })),
        coverage().prop_map(|coverage| Some(LifeInsurance::Endowment { coverage })),
    ]
}

fn selection() -> impl Strategy<Value = ProductSelection> {
    (proptest::collection::btree_set(1u8..=7, 0..=7), life_insurance(), any::<bool>()).prop_map(
        |(plans, life_insurance, cancer_rider)| ProductSelection {
            health_plans: plans.into_iter().filter_map(HealthPlanId::new).collect(),
            life_insurance,
            cancer_rider,
        },
    )
}

proptest! {
    #[test]
    fn lookups_are_repeatable(
        plan in 1u8..=7,
        age in 0u8..=100,
        gender in gender(),
        universal in universal_plan(),
        tier in health_tier(),
        coverage in coverage(),
    ) {
        prop_assert_eq!(
            lookup_health_plan_premium(plan, age, gender),
            lookup_health_plan_premium(plan, age, gender)
        );
        prop_assert_eq!(
            lookup_life_a_premium(universal.as_str(), tier.as_str(), age, gender),
            lookup_life_a_premium(universal.as_str(), tier.as_str(), age, gender)
        );
        prop_assert_eq!(
            lookup_life_b_premium(coverage.as_str(), age, gender),
            lookup_life_b_premium(coverage.as_str(), age, gender)
        );
        prop_assert_eq!(
            lookup_cancer_rider_premium(age, gender),
            lookup_cancer_rider_premium(age, gender)
        );
    }

    #[test]
    fn covered_ages_price_above_zero(plan in 1u8..=7, age in 0u8..=80, gender in gender()) {
        prop_assert!(lookup_health_plan_premium(plan, age, gender) > 0);
    }

    #[test]
    fn uncovered_ages_price_at_zero(age in 81u8..=u8::MAX, gender in gender(), coverage in coverage()) {
        prop_assert_eq!(lookup_health_plan_premium(1, age, gender), 0);
        prop_assert_eq!(lookup_life_a_premium("1000L", "default", age, gender), 0);
        prop_assert_eq!(lookup_life_b_premium(coverage.as_str(), age, gender), 0);
        prop_assert_eq!(lookup_cancer_rider_premium(age, gender), 0);
    }

    #[test]
    fn universal_ignores_gender(plan in universal_plan(), tier in health_tier(), age in 0u8..=70) {
        prop_assert_eq!(
            lookup_life_a_premium(plan.as_str(), tier.as_str(), age, Gender::Male),
            lookup_life_a_premium(plan.as_str(), tier.as_str(), age, Gender::Female)
        );
    }

    #[test]
    fn aggregate_total_law(actual_age in 0u8..=90, gender in gender(), selection in selection()) {
        let profile = ClientProfile::with_age(actual_age, gender);
        let rates = RateBook::standard();
        let insurance_age = profile.insurance_age();

        let Some(quote) = aggregate_quote(&profile, &selection) else {
            prop_assert!(selection.is_empty());
            return Ok(());
        };

        let health: Kyat = selection
            .health_plans
            .iter()
            .map(|&plan| rates.health.premium(plan, insurance_age, gender))
            .sum();
        let life: Kyat = match selection.life_insurance {
            Some(LifeInsurance::Universal { plan, health_tier }) => {
                rates.universal.premium(plan, health_tier, insurance_age, gender)
            }
            Some(LifeInsurance::Endowment { coverage }) => rates.endowment.premium(coverage, actual_age, gender),
            None => 0,
        };
        let cancer = if selection.cancer_rider { rates.cancer_rider.premium(actual_age, gender) } else { 0 };

        prop_assert_eq!(quote.total, health + life + cancer);
        prop_assert_eq!(quote.columns.len(), selection.health_plans.len().max(1));
        for column in &quote.columns {
            prop_assert_eq!(column.column_total, column.health_premium + life + cancer);
        }
    }
}
