//! Products chosen for a quote
//!
//! Health plans toggle independently. Life insurance is a single optional
//! product, so choosing universal life replaces an endowment choice and vice
//! versa; the two can never be held together.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::eligibility::ProductLine;
use crate::rates::{EndowmentCoverage, HealthPlanId, HealthTier, UniversalPlan};

/// The one life insurance product on a quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LifeInsurance {
    /// Life-A, priced by insurance age
    Universal {
        #[serde(alias = "plan_id")]
        plan: UniversalPlan,
        #[serde(default)]
        health_tier: HealthTier,
    },
    /// Life-B, priced by actual age
    Endowment {
        #[serde(alias = "plan_id")]
        coverage: EndowmentCoverage,
    },
}

impl LifeInsurance {
    pub fn product_line(&self) -> ProductLine {
        match self {
            LifeInsurance::Universal { .. } => ProductLine::Universal,
            LifeInsurance::Endowment { .. } => ProductLine::Endowment,
        }
    }

    /// Plan key as shown on a quote, e.g. "1000L" or "100M"
    pub fn plan_key(&self) -> &'static str {
        match self {
            LifeInsurance::Universal { plan, .. } => plan.as_str(),
            LifeInsurance::Endowment { coverage } => coverage.as_str(),
        }
    }
}

/// Everything selected for one quote
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSelection {
    /// Selected health plans, iterated smallest plan number first
    #[serde(default)]
    pub health_plans: BTreeSet<HealthPlanId>,

    #[serde(default)]
    pub life_insurance: Option<LifeInsurance>,

    #[serde(default)]
    pub cancer_rider: bool,
}

impl ProductSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the plan if absent, remove it if present; returns whether it is now selected
    pub fn toggle_health_plan(&mut self, plan: HealthPlanId) -> bool {
        if self.health_plans.remove(&plan) {
            false
        } else {
            self.health_plans.insert(plan);
            true
        }
    }

    pub fn add_health_plan(&mut self, plan: HealthPlanId) {
        self.health_plans.insert(plan);
    }

    pub fn remove_health_plan(&mut self, plan: HealthPlanId) {
        self.health_plans.remove(&plan);
    }

    /// Choose universal life, replacing any existing life product
    pub fn select_universal(&mut self, plan: UniversalPlan, health_tier: HealthTier) {
        self.life_insurance = Some(LifeInsurance::Universal { plan, health_tier });
    }

    /// Choose an endowment, replacing any existing life product
    pub fn select_endowment(&mut self, coverage: EndowmentCoverage) {
        self.life_insurance = Some(LifeInsurance::Endowment { coverage });
    }

    pub fn clear_life_insurance(&mut self) {
        self.life_insurance = None;
    }

    pub fn set_cancer_rider(&mut self, selected: bool) {
        self.cancer_rider = selected;
    }

    pub fn with_health_plans<I: IntoIterator<Item = HealthPlanId>>(mut self, plans: I) -> Self {
        self.health_plans.extend(plans);
        self
    }

    pub fn with_life_insurance(mut self, life_insurance: LifeInsurance) -> Self {
        self.life_insurance = Some(life_insurance);
        self
    }

    pub fn with_cancer_rider(mut self) -> Self {
        self.cancer_rider = true;
        self
    }

    /// Anything besides health plans selected
    pub fn has_add_ons(&self) -> bool {
        self.life_insurance.is_some() || self.cancer_rider
    }

    /// Nothing to quote
    pub fn is_empty(&self) -> bool {
        self.health_plans.is_empty() && !self.has_add_ons()
    }
}
