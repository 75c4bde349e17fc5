//! ランダムに生成したグラフに対する最小全域木の構築の計測
use std::fmt;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use rand::Rng;

use super::error::MstError;
use super::generate::{random_graph, GraphKind};
use super::kruskal::minimum_spanning_forest;

/// 計測する1つのグラフの設定
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Scenario {
    pub name: &'static str,
    pub kind: GraphKind,
    pub vertices: usize,
    /// `GraphKind::Sparse`の辺の本数
    pub edges: usize,
    pub note: &'static str,
}

const fn scenario(
    name: &'static str,
    kind: GraphKind,
    vertices: usize,
    edges: usize,
    note: &'static str,
) -> Scenario {
    Scenario {
        name,
        kind,
        vertices,
        edges,
        note,
    }
}

/// 標準の計測の設定
pub const SCENARIOS: [Scenario; 8] = [
    scenario("Complete", GraphKind::Complete, 10, 45, "fully connected"),
    scenario("Sparse", GraphKind::Sparse, 10, 15, "few edges"),
    scenario("Complete", GraphKind::Complete, 20, 190, "more vertices"),
    scenario("Sparse", GraphKind::Sparse, 20, 30, "more vertices and edges"),
    scenario("Tree", GraphKind::Tree, 15, 14, "already a spanning tree"),
    scenario("Cyclic", GraphKind::Sparse, 10, 20, "has cycles"),
    scenario("Complete", GraphKind::Complete, 50, 1225, "large graph"),
    scenario("Sparse", GraphKind::Sparse, 50, 75, "few edges, many vertices"),
];

/// 計測結果の1行
#[derive(Clone, Debug, PartialEq)]
pub struct BenchmarkRow {
    pub scenario: Scenario,
    /// 生成されたグラフの辺の本数
    pub edges: usize,
    pub total_weight: u32,
    /// `minimum_spanning_forest`にかかった時間. グラフの生成は含まない
    pub elapsed: Duration,
}

impl fmt::Display for BenchmarkRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{:.3}\t{}",
            self.scenario.name,
            self.scenario.vertices,
            self.edges,
            self.total_weight,
            self.elapsed.as_secs_f64() * 1000.0,
            self.scenario.note
        )
    }
}

/// 各設定についてグラフを生成し, 最小全域木の構築にかかった時間を測る.
///
/// 乱数は設定の順に`rng`から取り出されるので, 同じシードなら同じグラフが生成される.
pub fn run_benchmark<R: Rng + ?Sized>(
    scenarios: &[Scenario],
    rng: &mut R,
) -> Result<Vec<BenchmarkRow>, MstError> {
    let mut rows = Vec::with_capacity(scenarios.len());
    for &scenario in scenarios {
        let graph = random_graph(scenario.kind, scenario.vertices, scenario.edges, rng);
        let start = Instant::now();
        let result = minimum_spanning_forest(&graph)?;
        let elapsed = start.elapsed();
        log::info!(
            "{} ({} vertices, {} edges): weight {} in {:?}",
            scenario.name,
            scenario.vertices,
            graph.edge_count(),
            result.total_weight,
            elapsed
        );
        rows.push(BenchmarkRow {
            scenario,
            edges: graph.edge_count(),
            total_weight: result.total_weight,
            elapsed,
        });
    }
    Ok(rows)
}

/// 計測結果をタブ区切りの表として書き出す.
pub fn write_table<W: Write>(rows: &[BenchmarkRow], out: &mut W) -> io::Result<()> {
    writeln!(out, "Graph\tVertices\tEdges\tMST weight\tTime (ms)\tNotes")?;
    for row in rows {
        writeln!(out, "{row}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn all_scenarios() {
        let rows = run_benchmark(&SCENARIOS, &mut StdRng::seed_from_u64(11)).unwrap();
        assert_eq!(rows.len(), 8);
        for (row, scenario) in rows.iter().zip(SCENARIOS) {
            assert_eq!(row.scenario, scenario);
            assert_eq!(row.edges, scenario.edges);
            if scenario.kind != GraphKind::Sparse {
                assert!(row.total_weight >= scenario.vertices as u32 - 1);
            }
        }
    }

    #[test]
    fn tree_weight_is_sum_of_edges() {
        let tree = SCENARIOS[4];
        assert_eq!(tree.kind, GraphKind::Tree);
        let rows = run_benchmark(&[tree], &mut StdRng::seed_from_u64(5)).unwrap();
        let graph = random_graph(
            tree.kind,
            tree.vertices,
            tree.edges,
            &mut StdRng::seed_from_u64(5),
        );
        assert_eq!(
            rows[0].total_weight,
            graph.edges.iter().map(|e| e.weight).sum::<u32>()
        );
    }

    #[test]
    fn table() {
        let rows = run_benchmark(&SCENARIOS[..2], &mut StdRng::seed_from_u64(1)).unwrap();
        let mut out = Vec::new();
        write_table(&rows, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Graph\tVertices"));
        assert!(lines[1].starts_with("Complete\t10\t45\t"));
        assert!(lines[2].ends_with("\tfew edges"));
        assert_eq!(lines[2].split('\t').count(), 6);
    }
}
