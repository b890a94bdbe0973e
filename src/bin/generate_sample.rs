use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Datelike, Days, NaiveDate};
use clap::Parser;

/// Write a synthetic avocado CSV with the same layout as the real dataset.
#[derive(Debug, Parser)]
struct Args {
    /// Output file
    #[arg(long, default_value = "resources/avocado.csv")]
    out: PathBuf,

    /// Number of weekly observations per region and type
    #[arg(long, default_value_t = 169)]
    weeks: u64,

    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// Seasonal price bump centred on early autumn.
fn gaussian(x: f64, mu: f64, sigma: f64, amplitude: f64) -> f64 {
    amplitude * (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// (region, base conventional price, base weekly volume)
const REGIONS: [(&str, f64, f64); 8] = [
    ("Albany", 1.25, 90_000.0),
    ("Atlanta", 1.05, 480_000.0),
    ("Boise", 1.10, 75_000.0),
    ("Chicago", 1.30, 700_000.0),
    ("DallasFtWorth", 0.85, 600_000.0),
    ("Denver", 1.05, 450_000.0),
    ("SanFrancisco", 1.45, 650_000.0),
    ("TotalUS", 1.10, 30_000_000.0),
];

const HEADER: [&str; 14] = [
    "", "Date", "AveragePrice", "Total Volume", "4046", "4225", "4770",
    "Total Bags", "Small Bags", "Large Bags", "XLarge Bags", "type", "year", "region",
];

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = SimpleRng::new(args.seed);
    let first_week = NaiveDate::from_ymd_opt(2015, 1, 4).context("invalid start date")?;

    if let Some(dir) = args.out.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let mut writer = csv::Writer::from_path(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;
    writer.write_record(HEADER)?;

    let mut rows = 0usize;
    for (avocado_type, price_factor, volume_factor) in
        [("conventional", 1.0, 1.0), ("organic", 1.35, 0.03)]
    {
        for &(region, base_price, base_volume) in &REGIONS {
            // The real file lists each region newest-first.
            for (index, week) in (0..args.weeks).rev().enumerate() {
                let date = first_week + Days::new(week * 7);
                let season = gaussian(date.ordinal() as f64, 250.0, 45.0, 0.35);
                let price = ((base_price + season) * price_factor + rng.gauss(0.0, 0.05)).max(0.44);
                let volume = (base_volume * volume_factor * (1.6 - season) * rng.gauss(1.0, 0.08)).max(0.0);

                // Rough split between PLU codes and bag sizes.
                let plu: Vec<f64> = [0.35, 0.30, 0.02].iter().map(|share| volume * share).collect();
                let bags = volume - plu.iter().sum::<f64>();

                writer.write_record([
                    index.to_string(),
                    date.format("%Y-%m-%d").to_string(),
                    format!("{price:.2}"),
                    format!("{volume:.2}"),
                    format!("{:.2}", plu[0]),
                    format!("{:.2}", plu[1]),
                    format!("{:.2}", plu[2]),
                    format!("{bags:.2}"),
                    format!("{:.2}", bags * 0.75),
                    format!("{:.2}", bags * 0.24),
                    format!("{:.2}", bags * 0.01),
                    avocado_type.to_string(),
                    date.year().to_string(),
                    region.to_string(),
                ])?;
                rows += 1;
            }
        }
    }
    writer.flush()?;

    println!("Wrote {rows} rows to {}", args.out.display());
    Ok(())
}
