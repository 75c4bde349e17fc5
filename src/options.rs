//! コマンドライン引数の解釈.
//! `--input {file}`か`--generate {kind}`で入力のグラフを選ぶ. どちらもなければ4頂点の例を使う.
//! `--benchmark`では代わりに決まった設定のランダムなグラフで計測する.

use clap::{Arg, ArgAction, Command};
use std::error::Error;

use kruskal_trace::generate::GraphKind;

fn make_options_parser() -> Command {
    Command::new("kruskal")
        .no_binary_name(true)
        .version("v0.1.0")
        .about("Builds a minimum spanning tree with Kruskal's algorithm and dumps every decision")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("Graph as JSON: {\"nodes\": [...], \"edges\": [{\"u\", \"v\", \"weight\"}]}")
                .conflicts_with("generate"),
        )
        .arg(
            Arg::new("generate")
                .short('g')
                .long("generate")
                .help("Generate a random graph instead of reading one")
                .value_parser(["tree", "complete", "sparse"]),
        )
        .arg(
            Arg::new("benchmark")
                .short('b')
                .long("benchmark")
                .help("Time the built-in set of random graphs and print a table")
                .action(ArgAction::SetTrue)
                .conflicts_with_all(["input", "generate", "output", "summary"]),
        )
        .arg(
            Arg::new("vertices")
                .short('n')
                .long("vertices")
                .value_parser(clap::value_parser!(usize))
                .default_value("10"),
        )
        .arg(
            Arg::new("edges")
                .short('m')
                .long("edges")
                .help("Number of edges of a sparse graph")
                .value_parser(clap::value_parser!(usize))
                .default_value("15"),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Path to file where the trace and result will be stored (default: stdout)"),
        )
        .arg(
            Arg::new("summary")
                .long("summary")
                .help("Print the tree edges and total weight instead of JSON on stdout")
                .action(ArgAction::SetTrue),
        )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Example,
    File(String),
    Random {
        kind: GraphKind,
        vertices: usize,
        edges: usize,
        seed: Option<u64>,
    },
    Benchmark {
        seed: Option<u64>,
    },
}

#[derive(Debug, PartialEq, Eq)]
pub struct Options {
    pub source: Source,
    pub output: Option<String>,
    pub summary: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            source: Source::Example,
            output: None,
            summary: false,
        }
    }
}

impl Options {
    pub fn parse_from_args<T: AsRef<str>>(flags: &[T]) -> Result<Self, Box<dyn Error>> {
        let app = make_options_parser();
        let matches = app.try_get_matches_from(flags.iter().map(AsRef::as_ref))?;

        let source = if matches.get_flag("benchmark") {
            Source::Benchmark {
                seed: matches.get_one::<u64>("seed").copied(),
            }
        } else if let Some(path) = matches.get_one::<String>("input") {
            Source::File(path.clone())
        } else if let Some(kind) = matches.get_one::<String>("generate") {
            Source::Random {
                kind: kind.parse()?,
                vertices: matches.get_one::<usize>("vertices").copied().unwrap_or(10),
                edges: matches.get_one::<usize>("edges").copied().unwrap_or(15),
                seed: matches.get_one::<u64>("seed").copied(),
            }
        } else {
            Source::Example
        };

        Ok(Options {
            source,
            output: matches.get_one::<String>("output").cloned(),
            summary: matches.get_flag("summary"),
        })
    }
}
