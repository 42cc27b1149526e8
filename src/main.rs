use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;

use adjlist_rust::io::graph_writer::{write_graph, GraphFormat};
use adjlist_rust::opt::OverlapOpt;
use adjlist_rust::pipeline;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

const PROGRAM: &str = "adjlist-rust";

#[derive(Parser, Debug)]
#[command(
    name = "adjlist-rust",
    author,
    version,
    about = "Find overlaps of exactly k-1 bases. Contigs may be read from FILE(s) or standard input. Output is written to standard output."
)]
struct Cli {
    /// k-mer size; contigs overlapping by exactly k-1 bases are linked
    #[arg(short = 'k', long = "kmer")]
    kmer: Option<usize>,
    /// Contigs FASTA files (standard input if omitted)
    files: Vec<String>,
    /// Output format
    #[arg(long, value_enum, default_value_t = GraphFormat::Adj)]
    format: GraphFormat,
    /// Output the results in adj format
    #[arg(long, conflicts_with_all = ["format", "dot", "sam"])]
    adj: bool,
    /// Output the results in dot format
    #[arg(long, conflicts_with_all = ["format", "sam"])]
    dot: bool,
    /// Output the results in SAM format
    #[arg(long, conflicts_with = "format")]
    sam: bool,
    /// Output path (stdout if omitted)
    #[arg(short, long)]
    out: Option<String>,
    /// Threads used to look up overlap candidates
    #[arg(short = 't', long = "threads", default_value_t = 1)]
    threads: usize,
    /// Display verbose output (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn graph_format(&self) -> GraphFormat {
        if self.adj {
            GraphFormat::Adj
        } else if self.dot {
            GraphFormat::Dot
        } else if self.sam {
            GraphFormat::Sam
        } else {
            self.format
        }
    }
}

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let command_line = std::env::args().collect::<Vec<_>>().join(" ");
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // k 校验先于任何 I/O
    let opt = OverlapOpt::new(cli.kmer, cli.threads)?;
    let format = cli.graph_format();

    // 构图全部成功后才创建输出
    let (g, _) = pipeline::prepare(&cli.files, &opt)?;

    match cli.out.as_deref() {
        Some(p) => {
            let fh = std::fs::File::create(p).with_context(|| format!("cannot create output '{}'", p))?;
            let mut out = std::io::BufWriter::new(fh);
            write_graph(&mut out, &g, format, PROGRAM, &command_line)?;
            out.flush()?;
        }
        None => {
            let mut out = std::io::BufWriter::new(std::io::stdout().lock());
            write_graph(&mut out, &g, format, PROGRAM, &command_line)?;
            out.flush()?;
        }
    }
    Ok(())
}
