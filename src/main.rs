//! Premium Quote CLI
//!
//! Prices a selection of products for one client and prints the comparison
//! table, or the full quote as JSON with --json.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;

use premium_quote::{
    ClientProfile, EndowmentCoverage, Gender, HealthPlanId, HealthTier, Kyat, LifeInsurance,
    ProductLine, ProductSelection, ProfileError, QuoteEngine, QuoteResult, RateBook, UniversalPlan,
};

#[derive(Debug, Parser)]
#[command(name = "premium_quote", version, about = "Price health, life and cancer rider premiums for a client")]
struct Cli {
    /// Actual age in completed years
    #[arg(long, required_unless_present = "dob", conflicts_with = "dob")]
    age: Option<u8>,

    /// Date of birth (YYYY-MM-DD)
    #[arg(long)]
    dob: Option<NaiveDate>,

    /// Valuation date for --dob (default: today)
    #[arg(long, requires = "dob")]
    as_of: Option<NaiveDate>,

    /// male or female
    #[arg(long)]
    gender: Gender,

    /// Health plans to compare, e.g. 2,5
    #[arg(long, value_delimiter = ',')]
    health: Vec<HealthPlanId>,

    /// Universal life plan (1000L, 1500L, 2000L, 3000L, 4000L, 5000L)
    #[arg(long, conflicts_with = "endowment")]
    universal: Option<UniversalPlan>,

    /// Universal life health tier (minimum, default, maximum)
    #[arg(long, default_value = "default")]
    tier: HealthTier,

    /// Endowment coverage (10M, 20M, 50M, 100M, 200M)
    #[arg(long)]
    endowment: Option<EndowmentCoverage>,

    /// Add the cancer rider
    #[arg(long)]
    cancer: bool,

    /// Load rate tables from this CSV directory instead of the built-in ones
    #[arg(long, env = "RATES_DIR")]
    rates_dir: Option<PathBuf>,

    /// Print the quote as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn profile(&self) -> Result<ClientProfile> {
        match (self.age, self.dob) {
            (Some(age), _) => Ok(ClientProfile::with_age(age, self.gender)),
            (None, Some(dob)) => {
                let as_of = self.as_of.unwrap_or_else(|| Local::now().date_naive());
                Ok(ClientProfile::from_date_of_birth(dob, as_of, self.gender)?)
            }
            (None, None) => Err(ProfileError::MissingAge.into()),
        }
    }

    fn selection(&self) -> ProductSelection {
        let mut selection = ProductSelection::new().with_health_plans(self.health.iter().copied());
        if let Some(plan) = self.universal {
            selection.select_universal(plan, self.tier);
        }
        if let Some(coverage) = self.endowment {
            selection.select_endowment(coverage);
        }
        selection.set_cancer_rider(self.cancer);
        selection
    }
}

/// Group digits in thousands: 6489800 -> "6,489,800"
fn kyat(amount: Kyat) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn life_label(life: &LifeInsurance) -> String {
    match life {
        LifeInsurance::Universal { plan, health_tier } => format!("Universal {plan} ({health_tier})"),
        LifeInsurance::Endowment { coverage } => format!("Endowment {coverage}"),
    }
}

fn print_table(quote: &QuoteResult) {
    println!(
        "Client: {}, age {} (insurance age {})",
        quote.gender, quote.actual_age, quote.insurance_age
    );
    println!();

    print!("{:<28}", "");
    for column in &quote.columns {
        let header = if column.is_default { "-".to_string() } else { format!("Plan {}", column.plan) };
        print!("{:>14}", header);
    }
    println!();
    println!("{}", "-".repeat(28 + 14 * quote.columns.len()));

    print!("{:<28}", "Health plan");
    for column in &quote.columns {
        let cell = column.priced_health_premium().map(kyat).unwrap_or_else(|| "-".to_string());
        print!("{:>14}", cell);
    }
    println!();

    if let Some(life) = &quote.life_insurance {
        print!("{:<28}", life_label(&life.product));
        for column in &quote.columns {
            print!("{:>14}", kyat(column.life_premium));
        }
        println!();
    }

    if quote.cancer_rider.is_some() {
        print!("{:<28}", "Cancer rider");
        for column in &quote.columns {
            print!("{:>14}", kyat(column.cancer_rider_premium));
        }
        println!();
    }

    print!("{:<28}", "Column total");
    for column in &quote.columns {
        print!("{:>14}", kyat(column.column_total));
    }
    println!();

    println!();
    println!("Total annual premium: {} Kyat", kyat(quote.total));
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let rates = match &cli.rates_dir {
        Some(dir) => RateBook::from_csv_path(dir)
            .with_context(|| format!("failed to load rate tables from {}", dir.display()))?,
        None => RateBook::built_in(),
    };
    let profile = cli.profile()?;
    let selection = cli.selection();

    // Selected products the client is outside the age range of still price at 0
    for eligibility in rates.eligible_lines(&profile) {
        let selected = match eligibility.product_line {
            ProductLine::HealthPlan => !selection.health_plans.is_empty(),
            ProductLine::CancerRider => selection.cancer_rider,
            line => selection.life_insurance.map(|l| l.product_line()) == Some(line),
        };
        if selected && !eligibility.eligible {
            log::warn!(
                "{} is not available at {:?} age {} (covers {:?})",
                eligibility.product_line,
                eligibility.age_basis,
                eligibility.age,
                eligibility.range,
            );
        }
    }

    let engine = QuoteEngine::new(&rates);
    let Some(quote) = engine.aggregate(&profile, &selection) else {
        if cli.json {
            println!("null");
        } else {
            println!("Nothing selected to quote.");
        }
        return Ok(());
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
    } else {
        print_table(&quote);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kyat_grouping() {
        assert_eq!(kyat(0), "0");
        assert_eq!(kyat(999), "999");
        assert_eq!(kyat(1_000), "1,000");
        assert_eq!(kyat(6_489_800), "6,489,800");
    }

    #[test]
    fn test_cli_builds_selection() {
        let cli = Cli::parse_from([
            "premium_quote", "--age", "30", "--gender", "male", "--health", "5,2", "--endowment", "100M", "--cancer",
        ]);
        let selection = cli.selection();

        assert_eq!(selection.health_plans.len(), 2);
        assert_eq!(
            selection.life_insurance,
            Some(LifeInsurance::Endowment { coverage: EndowmentCoverage::M100 })
        );
        assert!(selection.cancer_rider);
        assert_eq!(cli.profile().unwrap().insurance_age(), 31);
    }

    #[test]
    fn test_cli_rejects_two_life_products() {
        let result = Cli::try_parse_from([
            "premium_quote", "--age", "30", "--gender", "female", "--universal", "1000L", "--endowment", "10M",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_age_from_dob() {
        let cli = Cli::parse_from([
            "premium_quote", "--dob", "1995-06-15", "--as-of", "2025-06-14", "--gender", "f",
        ]);
        let profile = cli.profile().unwrap();
        assert_eq!(profile.actual_age(), 29);
        assert_eq!(profile.gender, Gender::Female);
    }
}
