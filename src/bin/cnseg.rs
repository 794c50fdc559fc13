use std::path::PathBuf;
use std::process;

use clap::Parser;
use crossngram::io::{read_input, write_output};
use crossngram::{join_tokens, segment_checked, BlankTokens, Limits, SegmentConfig};

#[derive(Parser)]
#[command(
    name = "cnseg",
    about = "CrossNGram Segmenter - split text where n-grams are rare in the document"
)]
struct Cli {
    /// UTF-8 text file to read (stdin if omitted)
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// File to write the segmented result to (stdout if omitted)
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// N-gram length, 2..=9
    #[arg(long = "n", default_value_t = 2)]
    n: usize,

    /// Cut where the straddling n-gram occurs at most this often, 1..=99
    #[arg(long, default_value_t = 1)]
    threshold: usize,

    /// Emit whitespace-only tokens instead of dropping them
    #[arg(long)]
    keep_blank: bool,

    /// Reject input larger than this many bytes
    #[arg(long, value_name = "BYTES")]
    max_input_bytes: Option<usize>,

    /// Log model and segmentation details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli) -> crossngram::Result<()> {
    let blank_tokens = if cli.keep_blank {
        BlankTokens::Keep
    } else {
        BlankTokens::Drop
    };
    let config = SegmentConfig::new(cli.n, cli.threshold).with_blank_tokens(blank_tokens);
    let limits = Limits::cli().with_max_input_bytes(cli.max_input_bytes);

    let text = read_input(cli.input.as_deref())?;
    log::debug!("read {} bytes of input", text.len());

    let tokens = segment_checked(&text, &config, &limits)?;
    write_output(cli.output.as_deref(), &join_tokens(&tokens))
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("ERROR: {}", e);
        process::exit(1);
    }
}
