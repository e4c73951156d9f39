//! Quote engine: prices a selection for a client and lays it out in columns

use crate::profile::{ClientProfile, LifeInsurance, ProductSelection};
use crate::rates::{HealthPlanId, Kyat, RateBook};
use super::result::{CancerRiderPremium, LifePremium, QuoteColumn, QuoteResult};

/// Prices product selections against a rate book
///
/// Holds no state besides the borrowed tables, so one engine can serve any
/// number of quotes concurrently.
#[derive(Debug, Clone, Copy)]
pub struct QuoteEngine<'a> {
    rates: &'a RateBook,
}

impl QuoteEngine<'static> {
    /// Engine over the compiled-in rate book
    pub fn standard() -> Self {
        Self::new(RateBook::standard())
    }
}

impl<'a> QuoteEngine<'a> {
    pub fn new(rates: &'a RateBook) -> Self {
        Self { rates }
    }

    /// Price a selection; `None` when nothing is selected
    ///
    /// Health plans and universal life are priced at the insurance age,
    /// endowment and the cancer rider at the actual age. A premium of 0 from
    /// an uncovered age is kept as 0 and still summed: gating on eligibility
    /// happens when products are selected, not here.
    ///
    /// The selection's life product is at most one by construction of
    /// [`ProductSelection`].
    pub fn aggregate(&self, profile: &ClientProfile, selection: &ProductSelection) -> Option<QuoteResult> {
        if selection.is_empty() {
            log::debug!("nothing selected, no quote");
            return None;
        }

        let gender = profile.gender;
        let actual_age = profile.actual_age();
        let insurance_age = profile.insurance_age();

        let life_insurance = selection.life_insurance.map(|product| self.price_life(product, profile));
        let cancer_rider = selection.cancer_rider.then(|| CancerRiderPremium {
            age: actual_age,
            premium: self.rates.cancer_rider.premium(actual_age, gender),
        });

        let life_premium = life_insurance.map_or(0, |l| l.premium);
        let cancer_rider_premium = cancer_rider.map_or(0, |c| c.premium);
        let add_ons = life_premium + cancer_rider_premium;

        // BTreeSet iterates smallest plan number first
        let mut columns: Vec<QuoteColumn> = selection
            .health_plans
            .iter()
            .map(|&plan| {
                let health_premium = self.rates.health.premium(plan, insurance_age, gender);
                QuoteColumn {
                    plan,
                    is_default: false,
                    health_premium,
                    life_premium,
                    cancer_rider_premium,
                    column_total: health_premium + add_ons,
                }
            })
            .collect();

        if columns.is_empty() {
            columns.push(QuoteColumn {
                plan: HealthPlanId::PLACEHOLDER,
                is_default: true,
                health_premium: 0,
                life_premium,
                cancer_rider_premium,
                column_total: add_ons,
            });
        }

        let health_total: Kyat = columns.iter().map(|c| c.health_premium).sum();
        let total = health_total + add_ons;

        log::debug!(
            "quote for {gender} age {actual_age} (insurance age {insurance_age}): {} column(s), total {total}",
            columns.len(),
        );

        Some(QuoteResult {
            gender,
            actual_age,
            insurance_age,
            columns,
            life_insurance,
            cancer_rider,
            health_total,
            total,
        })
    }

    fn price_life(&self, product: LifeInsurance, profile: &ClientProfile) -> LifePremium {
        let line = product.product_line();
        let age = line.age_for(profile);
        let premium = match product {
            LifeInsurance::Universal { plan, health_tier } => {
                self.rates.universal.premium(plan, health_tier, age, profile.gender)
            }
            LifeInsurance::Endowment { coverage } => self.rates.endowment.premium(coverage, age, profile.gender),
        };
        LifePremium {
            product,
            age_basis: line.age_basis(),
            age,
            premium,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eligibility::AgeBasis;
    use crate::profile::Gender;
    use crate::rates::{EndowmentCoverage, HealthTier, UniversalPlan};

    fn plan(n: u8) -> HealthPlanId {
        HealthPlanId::new(n).unwrap()
    }

    #[test]
    fn test_health_plans_with_shared_add_ons() {
        let engine = QuoteEngine::standard();
        let profile = ClientProfile::with_age(30, Gender::Male);
        let selection = ProductSelection::new()
            .with_health_plans([plan(5), plan(2)])
            .with_life_insurance(LifeInsurance::Endowment { coverage: EndowmentCoverage::M100 })
            .with_cancer_rider();

        let quote = engine.aggregate(&profile, &selection).unwrap();

        assert_eq!(quote.actual_age, 30);
        assert_eq!(quote.insurance_age, 31);
        assert_eq!(quote.columns.len(), 2);

        let first = &quote.columns[0];
        assert_eq!(first.plan, plan(2));
        assert_eq!(first.health_premium, 94_600);
        assert_eq!(first.life_premium, 6_117_800);
        assert_eq!(first.cancer_rider_premium, 24_000);
        assert_eq!(first.column_total, 6_236_400);

        let second = &quote.columns[1];
        assert_eq!(second.plan, plan(5));
        assert_eq!(second.health_premium, 253_400);
        assert_eq!(second.column_total, 6_395_200);

        assert_eq!(quote.health_total, 348_000);
        assert_eq!(quote.add_on_total(), 6_141_800);
        assert_eq!(quote.total, 6_489_800);
    }

    #[test]
    fn test_life_premium_age_basis() {
        let engine = QuoteEngine::standard();
        let profile = ClientProfile::with_age(30, Gender::Female);

        let universal = ProductSelection::new().with_life_insurance(LifeInsurance::Universal {
            plan: UniversalPlan::L1000,
            health_tier: HealthTier::Default,
        });
        let quote = engine.aggregate(&profile, &universal).unwrap();
        let life = quote.life_insurance.unwrap();
        assert_eq!(life.age_basis, AgeBasis::Insurance);
        assert_eq!(life.age, 31);

        let endowment = ProductSelection::new()
            .with_life_insurance(LifeInsurance::Endowment { coverage: EndowmentCoverage::M10 });
        let quote = engine.aggregate(&profile, &endowment).unwrap();
        let life = quote.life_insurance.unwrap();
        assert_eq!(life.age_basis, AgeBasis::Actual);
        assert_eq!(life.age, 30);
    }

    #[test]
    fn test_placeholder_column_without_health_plan() {
        let engine = QuoteEngine::standard();
        let profile = ClientProfile::with_age(30, Gender::Male);
        let selection = ProductSelection::new().with_cancer_rider();

        let quote = engine.aggregate(&profile, &selection).unwrap();

        assert_eq!(quote.columns.len(), 1);
        let column = &quote.columns[0];
        assert!(column.is_default);
        assert_eq!(column.plan, HealthPlanId::PLACEHOLDER);
        assert_eq!(column.priced_health_premium(), None);
        assert_eq!(column.column_total, 24_000);
        assert!(quote.is_placeholder_only());
        assert_eq!(quote.health_total, 0);
        assert_eq!(quote.total, 24_000);
    }

    #[test]
    fn test_uncovered_health_plan_still_summed_as_zero() {
        let engine = QuoteEngine::standard();
        // Insurance age 81 is past every health band
        let profile = ClientProfile::with_age(80, Gender::Male);
        let selection = ProductSelection::new().with_health_plans([plan(3)]);

        let quote = engine.aggregate(&profile, &selection).unwrap();

        assert_eq!(quote.columns.len(), 1);
        assert!(!quote.columns[0].is_default);
        assert_eq!(quote.columns[0].priced_health_premium(), Some(0));
        assert_eq!(quote.total, 0);
    }

    #[test]
    fn test_empty_selection_has_no_quote() {
        let engine = QuoteEngine::standard();
        let profile = ClientProfile::with_age(30, Gender::Male);
        assert!(engine.aggregate(&profile, &ProductSelection::new()).is_none());
    }

    #[test]
    fn test_engine_over_custom_book() {
        let mut book = RateBook::built_in();
        book.cancer_rider = crate::rates::CancerRiderRates::new(
            crate::rates::RateTable::new(vec![crate::rates::Band::range(1, 99, 1_000)]).unwrap(),
            crate::rates::RateTable::new(vec![crate::rates::Band::range(1, 99, 2_000)]).unwrap(),
        );
        let engine = QuoteEngine::new(&book);

        let quote = engine
            .aggregate(&ClientProfile::with_age(70, Gender::Female), &ProductSelection::new().with_cancer_rider())
            .unwrap();
        assert_eq!(quote.total, 2_000);
    }
}
