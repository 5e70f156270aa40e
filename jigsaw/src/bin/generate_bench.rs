//! Generation and hit-test timings for a large board.
//!
//! `generate_bench --pieces=1000 --picks=10000 --seed=7 --max-pick-ms=0.05`

use jigsaw::{ImageInfo, Position, PuzzleConfig, Table};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Instant;

struct BenchArgs {
    pieces: u32,
    picks: usize,
    seed: u64,
    max_pick_ms: Option<f64>,
}

impl BenchArgs {
    fn parse(args: impl Iterator<Item = String>) -> Result<BenchArgs, String> {
        let mut out = BenchArgs { pieces: 1000, picks: 10_000, seed: 7, max_pick_ms: None };
        for arg in args {
            let (key, value) = arg.split_once('=').ok_or_else(|| format!("expected --key=value, got '{}'", arg))?;
            match key {
                "--pieces" => out.pieces = parse_value(key, value)?,
                "--picks" => out.picks = parse_value(key, value)?,
                "--seed" => out.seed = parse_value(key, value)?,
                "--max-pick-ms" => out.max_pick_ms = Some(parse_value(key, value)?),
                _ => return Err(format!("unknown option '{}'", key)),
            }
        }
        Ok(out)
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T, String> {
    value.parse().map_err(|_| format!("bad value for {}: '{}'", key, value))
}

/// Sorted latency samples in milliseconds.
struct Latencies(Vec<f64>);

impl Latencies {
    fn new(mut samples: Vec<f64>) -> Self {
        samples.sort_by(f64::total_cmp);
        Latencies(samples)
    }

    fn quantile(&self, q: f64) -> f64 {
        match self.0.len() {
            0 => 0.0,
            n => self.0[((n - 1) as f64 * q).round() as usize],
        }
    }
}

fn main() -> ExitCode {
    let args = match BenchArgs::parse(std::env::args().skip(1)) {
        Ok(a) => a,
        Err(msg) => {
            eprintln!("{}", msg);
            return ExitCode::from(2);
        }
    };

    let started = Instant::now();
    let image = ImageInfo::new("bench.png", 4000.0, 3000.0);
    let mut table = match Table::new(image, PuzzleConfig::default().with_piece_count(args.pieces), args.seed) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("generation failed: {}", e);
            return ExitCode::from(2);
        }
    };
    let gen_ms = started.elapsed().as_secs_f64() * 1000.0;
    let first_diff = table.take_render_diff();

    let (min, max) = (table.puzzle().board_minimum(), table.puzzle().board_maximum());
    let mut rng = StdRng::seed_from_u64(args.seed.rotate_left(17));
    let mut hits = 0usize;
    let mut samples = Vec::with_capacity(args.picks);
    for _ in 0..args.picks {
        let probe = Position::new(rng.random_range(min.x..max.x), rng.random_range(min.y..max.y));
        let t = Instant::now();
        if table.pick(probe, 0.0).is_some() {
            hits += 1;
        }
        samples.push(t.elapsed().as_secs_f64() * 1000.0);
    }
    let picks = Latencies::new(samples);

    println!(
        "{} gen_ms={:.3} diff_pieces={} picks={} hits={} pick_p50_ms={:.4} pick_p90_ms={:.4} pick_p99_ms={:.4}",
        table.puzzle().grid().label(),
        gen_ms,
        first_diff.pieces.len(),
        args.picks,
        hits,
        picks.quantile(0.5),
        picks.quantile(0.9),
        picks.quantile(0.99),
    );
    match args.max_pick_ms {
        Some(limit) if picks.quantile(0.5) > limit => {
            eprintln!("median pick {:.4} ms exceeds {:.3} ms", picks.quantile(0.5), limit);
            ExitCode::FAILURE
        }
        _ => ExitCode::SUCCESS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<BenchArgs, String> {
        BenchArgs::parse(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn options_override_defaults() {
        let a = args(&["--pieces=64", "--max-pick-ms=0.5"]).unwrap();
        assert_eq!((a.pieces, a.picks, a.seed), (64, 10_000, 7));
        assert_eq!(a.max_pick_ms, Some(0.5));
        assert!(args(&["--pieces=lots"]).is_err());
        assert!(args(&["--verbose"]).is_err());
        assert!(args(&["--colour=red"]).is_err());
    }

    #[test]
    fn quantiles_come_from_sorted_samples() {
        let l = Latencies::new(vec![4.0, 1.0, 3.0, 2.0, 5.0]);
        assert_eq!(l.quantile(0.0), 1.0);
        assert_eq!(l.quantile(0.5), 3.0);
        assert_eq!(l.quantile(1.0), 5.0);
        assert_eq!(Latencies::new(Vec::new()).quantile(0.9), 0.0);
    }
}
