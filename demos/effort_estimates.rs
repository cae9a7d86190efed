//! Fit the estimator to a small history of range estimates and predict new ones.
//!
//! Run with: `RUST_LOG=rangefit=debug cargo run --example effort_estimates`

use rangefit::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), EstimatorError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // (low, high, actual) in days
    let history: Vec<Observation> = [
        (4.0, 5.0, 17.0),
        (14.0, 18.0, 8.0),
        (4.0, 5.0, 5.0),
        (3.0, 4.0, 3.0),
        (4.0, 5.0, 5.0),
        (3.0, 7.0, 4.0),
        (4.0, 5.0, 9.0),
        (9.0, 10.0, 9.0),
        (6.0, 8.0, 4.0),
        (27.0, 30.0, 27.0),
        (20.0, 25.0, 16.0),
        (23.0, 29.0, 15.0),
        (11.0, 14.0, 7.0),
    ]
    .into_iter()
    .map(Observation::from)
    .collect();

    let model = RangeFit::new()
        .iterations(DEFAULT_ITERATIONS)
        .learning_rate(DEFAULT_LEARNING_RATE)
        .build()?
        .fit(&history)?;

    println!("{}\n", model);

    if model.is_degenerate(1e-3) {
        println!("Range width carries no extra uncertainty on this history.\n");
    }

    // Same fit with zeta pinned at 0, for comparison
    let baseline = RangeFit::new().heteroscedastic(false).build()?.fit(&history)?;
    println!(
        "Homoscedastic objective: {:.6} (heteroscedastic: {:.6})\n",
        baseline.objective, model.objective
    );

    println!("{:>6} {:>6} {:>10} {:>10} {:>18}", "low", "high", "median", "p95", "80% interval");
    for (low, high) in [(1.0, 2.0), (5.0, 8.0), (10.0, 15.0), (20.0, 40.0)] {
        let p = model.predict(low, high, 0.95)?;
        let i = model.interval(low, high, 0.80)?;
        println!(
            "{:>6} {:>6} {:>10.2} {:>10.2}   [{:>6.2}, {:>6.2}]",
            low, high, p.point_estimate, p.quantile, i.lower, i.upper
        );
    }
    println!();

    println!("{}", model.diagnostics(&history, 0.9)?);

    Ok(())
}
