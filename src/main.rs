mod options;

use std::fmt::{Debug, Display};
use std::hash::Hash;

use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use kruskal_trace::benchmark::{run_benchmark, write_table, SCENARIOS};
use kruskal_trace::generate::random_graph;
use kruskal_trace::io::{read_json, to_json_string, write_json, Report};
use kruskal_trace::{compute_mst, Graph, Weight};
use options::{Options, Source};

fn example_graph() -> Graph<String, f64> {
    Graph::from_edges(
        [
            ("A", "B", 1.0),
            ("A", "C", 3.0),
            ("B", "C", 2.0),
            ("C", "D", 4.0),
            ("B", "D", 5.0),
        ]
        .map(|(u, v, w)| (u.to_owned(), v.to_owned(), w)),
    )
}

fn run<N, W>(graph: &Graph<N, W>, options: &Options) -> anyhow::Result<()>
where
    N: Hash + Eq + Clone + Debug + Display + Serialize,
    W: Weight + Display + Serialize,
{
    log::debug!(
        "graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    let (result, trace) = compute_mst(graph)?;

    if options.summary {
        println!("Minimum spanning tree:");
        for e in &result.edges {
            println!("{} - {}", e.u, e.v);
        }
        println!("Total weight: {}", result.total_weight);
    }

    let report = Report { trace, result };
    match &options.output {
        Some(path) => {
            write_json(path, &report).with_context(|| format!("failed to write {path}"))?
        }
        None if !options.summary => println!("{}", to_json_string(&report)?),
        None => {}
    }
    Ok(())
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn main() -> anyhow::Result<()> {
    let e = env_logger::Env::new()
        .filter("KRUSKAL_LOG")
        .write_style("KRUSKAL_LOG_STYLE");
    env_logger::init_from_env(e);

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let options = Options::parse_from_args(&args).map_err(|e| anyhow::anyhow!("{e}"))?;
    log::debug!("options: {:?}", options);

    match &options.source {
        Source::Example => run(&example_graph(), &options),
        Source::File(path) => {
            let graph: Graph<String, f64> =
                read_json(path).with_context(|| format!("failed to read graph from {path}"))?;
            run(&graph, &options)
        }
        &Source::Random {
            kind,
            vertices,
            edges,
            seed,
        } => {
            let mut rng = make_rng(seed);
            run(&random_graph(kind, vertices, edges, &mut rng), &options)
        }
        &Source::Benchmark { seed } => {
            let rows = run_benchmark(&SCENARIOS, &mut make_rng(seed))?;
            write_table(&rows, &mut std::io::stdout().lock())?;
            Ok(())
        }
    }
}
