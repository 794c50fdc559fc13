use std::time::Instant;

use clap::Parser;
use crossngram::{SegmentConfig, Segmenter};

#[derive(Parser)]
#[command(name = "cnseg-bench", about = "Measure tokenize latency on synthetic text")]
struct Cli {
    /// Iterations per input size
    #[arg(long, default_value_t = 200)]
    iters: usize,

    /// N-gram length
    #[arg(long = "n", default_value_t = 2)]
    n: usize,

    /// Cut-off frequency
    #[arg(long, default_value_t = 1)]
    threshold: usize,

    /// Input sizes in characters
    #[arg(long, value_delimiter = ',', default_value = "1024,8192,32768")]
    sizes: Vec<usize>,
}

#[derive(Clone, Copy)]
struct Stat {
    p50_us: f64,
    p95_us: f64,
    p99_us: f64,
    total_ms: f64,
}

const ALPHABET: &[char] = &[
    '我', '爱', '自', '然', '语', '言', '处', '理', '东', '京', '的', '是', 'a', 'b', 'c', ' ',
];

/// xorshift64; reproducible input without pulling in an RNG crate.
fn synthetic_text(len: usize, mut seed: u64) -> String {
    let mut out = String::with_capacity(len * 3);
    for _ in 0..len {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        out.push(ALPHABET[(seed % ALPHABET.len() as u64) as usize]);
    }
    out
}

fn percentile_us(samples_ns: &[u128], num: usize, den: usize) -> f64 {
    if samples_ns.is_empty() {
        return 0.0;
    }
    let mut sorted = samples_ns.to_vec();
    sorted.sort_unstable();
    let idx = ((sorted.len() - 1) * num) / den;
    sorted[idx] as f64 / 1_000.0
}

fn measure<F>(iters: usize, mut f: F) -> Stat
where
    F: FnMut() -> usize,
{
    let mut latencies = Vec::with_capacity(iters);
    let start = Instant::now();
    let mut blackhole = 0usize;
    for _ in 0..iters {
        let t0 = Instant::now();
        blackhole ^= f();
        latencies.push(t0.elapsed().as_nanos());
    }
    std::hint::black_box(blackhole);
    Stat {
        p50_us: percentile_us(&latencies, 50, 100),
        p95_us: percentile_us(&latencies, 95, 100),
        p99_us: percentile_us(&latencies, 99, 100),
        total_ms: start.elapsed().as_secs_f64() * 1_000.0,
    }
}

fn main() {
    let cli = Cli::parse();
    let segmenter = match Segmenter::new(SegmentConfig::new(cli.n, cli.threshold)) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "cnseg-bench n={} threshold={} iters={}",
        cli.n, cli.threshold, cli.iters
    );
    for (i, &size) in cli.sizes.iter().enumerate() {
        let text = synthetic_text(size, 0x9E37_79B9_7F4A_7C15 ^ i as u64);
        let stat = measure(cli.iters, || {
            segmenter
                .segment(&text)
                .map(|tokens| tokens.len())
                .unwrap_or(0)
        });
        println!(
            "chars={:>6}  p50={:>9.1}us  p95={:>9.1}us  p99={:>9.1}us  total={:>8.1}ms",
            size, stat.p50_us, stat.p95_us, stat.p99_us, stat.total_ms
        );
    }
}
