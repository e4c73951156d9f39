//! Export a premium rate sheet for one product line
//!
//! Prices every covered age through the public lookup path and writes one CSV
//! row per age (and gender or plan where the line is rated on them). Useful
//! for checking a replacement rates directory against the insurer's rate sheet.
//!
//! Usage: rate_sheet --line health [--rates-dir data/rates] [--output health.csv]

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use rayon::prelude::*;

use premium_quote::{EndowmentCoverage, Gender, HealthPlanId, HealthTier, ProductLine, RateBook, UniversalPlan};

#[derive(Debug, Parser)]
#[command(name = "rate_sheet", about = "Write the premium rate sheet of a product line as CSV")]
struct Args {
    /// Product line: health, lifeA, lifeB or cancerRider
    #[arg(long)]
    line: ProductLine,

    /// Load rate tables from this CSV directory instead of the built-in ones
    #[arg(long, env = "RATES_DIR")]
    rates_dir: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(long)]
    output: Option<PathBuf>,
}

const GENDERS: [Gender; 2] = [Gender::Male, Gender::Female];

fn header(line: ProductLine) -> Vec<String> {
    let mut header: Vec<String> = match line {
        ProductLine::HealthPlan => vec!["gender".into(), "insurance_age".into()],
        ProductLine::Universal => vec!["plan".into(), "insurance_age".into()],
        ProductLine::Endowment => vec!["gender".into(), "age".into()],
        ProductLine::CancerRider => vec!["age".into()],
    };
    match line {
        ProductLine::HealthPlan => header.extend(HealthPlanId::all().map(|p| format!("plan_{p}"))),
        ProductLine::Universal => header.extend(HealthTier::ALL.iter().map(|t| t.to_string())),
        ProductLine::Endowment => header.extend(EndowmentCoverage::ALL.iter().map(|c| c.to_string())),
        ProductLine::CancerRider => header.extend(GENDERS.iter().map(|g| g.to_string())),
    }
    header
}

/// All rows for one age
fn rows_for_age(rates: &RateBook, line: ProductLine, age: u8) -> Vec<Vec<String>> {
    match line {
        ProductLine::HealthPlan => GENDERS
            .iter()
            .map(|&gender| {
                let mut row = vec![gender.to_string(), age.to_string()];
                row.extend(HealthPlanId::all().map(|p| rates.health.premium(p, age, gender).to_string()));
                row
            })
            .collect(),
        ProductLine::Universal => UniversalPlan::ALL
            .iter()
            .map(|&plan| {
                let mut row = vec![plan.to_string(), age.to_string()];
                row.extend(
                    HealthTier::ALL
                        .iter()
                        .map(|&tier| rates.universal.premium(plan, tier, age, Gender::Male).to_string()),
                );
                row
            })
            .collect(),
        ProductLine::Endowment => GENDERS
            .iter()
            .map(|&gender| {
                let mut row = vec![gender.to_string(), age.to_string()];
                row.extend(
                    EndowmentCoverage::ALL
                        .iter()
                        .map(|&coverage| rates.endowment.premium(coverage, age, gender).to_string()),
                );
                row
            })
            .collect(),
        ProductLine::CancerRider => {
            let mut row = vec![age.to_string()];
            row.extend(GENDERS.iter().map(|&g| rates.cancer_rider.premium(age, g).to_string()));
            vec![row]
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start = Instant::now();

    let rates = match &args.rates_dir {
        Some(dir) => RateBook::from_csv_path(dir)
            .with_context(|| format!("failed to load rate tables from {}", dir.display()))?,
        None => RateBook::built_in(),
    };

    let Some(range) = rates.age_range_for(args.line) else {
        anyhow::bail!("{} has no rate bands", args.line);
    };

    // Price ages in parallel; collect keeps age order
    let ages: Vec<u8> = (range.min_age..=range.max_age).collect();
    let rows: Vec<Vec<String>> = ages
        .par_iter()
        .filter(|&&age| rates.is_age_eligible(args.line, age))
        .flat_map_iter(|&age| rows_for_age(&rates, args.line, age))
        .collect();

    let sink: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(File::create(path).with_context(|| format!("failed to create {}", path.display()))?),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = csv::Writer::from_writer(sink);
    writer.write_record(header(args.line))?;
    for row in &rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    log::info!(
        "{}: {} rows for ages {}-{} in {:?}",
        args.line,
        rows.len(),
        range.min_age,
        range.max_age,
        start.elapsed()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_match_header_width() {
        let rates = RateBook::built_in();
        for line in ProductLine::ALL {
            let width = header(line).len();
            let age = rates.age_range_for(line).unwrap().max_age;
            for row in rows_for_age(&rates, line, age) {
                assert_eq!(row.len(), width, "{line}");
            }
        }
    }

    #[test]
    fn test_cancer_row() {
        let rates = RateBook::built_in();
        let rows = rows_for_age(&rates, ProductLine::CancerRider, 30);
        assert_eq!(rows, vec![vec!["30".to_string(), "24000".to_string(), "28300".to_string()]]);
    }
}
