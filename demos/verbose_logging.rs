//! Demonstrates enabling verbose logging for pardft.
use pardft::bench::{sweep_all, BenchConfig};
use pardft::signal::generate;

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let samples: Vec<f64> = generate(64);
    for report in sweep_all(&samples, &BenchConfig::new(4)).unwrap() {
        println!(
            "{}: {:.6} s, mean abs error {:e}",
            report.schedule,
            report.seconds(),
            report.mean_abs_error
        );
    }
}
