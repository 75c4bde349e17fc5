use std::collections::HashSet;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;

use super::graph::{Edge, Graph};

/// ランダムに生成するグラフの形
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum GraphKind {
    /// 頂点`i > 0`を`i`未満のランダムな頂点と結んだ木
    Tree,
    /// 全ての頂点対を結んだグラフ
    Complete,
    /// 指定した本数だけランダムな頂点対を結んだグラフ
    Sparse,
}

impl FromStr for GraphKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tree" => Ok(GraphKind::Tree),
            "complete" => Ok(GraphKind::Complete),
            "sparse" => Ok(GraphKind::Sparse),
            _ => Err(format!("unknown graph kind: {s}")),
        }
    }
}

/// 辺のコストの範囲
const WEIGHTS: std::ops::Range<u32> = 1..20;

/// 頂点`0..vertices`からなるランダムなグラフを作る.
///
/// 自己ループと多重辺は作らない. `GraphKind::Sparse`では辺は`edges`本 (ただし頂点対の総数以下) になり,
/// それ以外では`edges`は無視される.
///
/// # Time complexity
///
/// - *O*(*V*^2) (`GraphKind::Complete`), *O*(*V* + *E*) (期待値, それ以外)
pub fn random_graph<R: Rng + ?Sized>(
    kind: GraphKind,
    vertices: usize,
    edges: usize,
    rng: &mut R,
) -> Graph<usize, u32> {
    let nodes = (0..vertices).collect();
    let max_edges = vertices * vertices.saturating_sub(1) / 2;
    let list = match kind {
        GraphKind::Tree => (1..vertices)
            .map(|i| Edge::new(i, rng.gen_range(0..i), rng.gen_range(WEIGHTS)))
            .collect(),
        GraphKind::Complete => {
            let mut list = Vec::with_capacity(max_edges);
            for u in 0..vertices {
                for v in u + 1..vertices {
                    list.push(Edge::new(u, v, rng.gen_range(WEIGHTS)));
                }
            }
            list.shuffle(rng);
            list
        }
        GraphKind::Sparse => {
            let target = edges.min(max_edges);
            let mut existing = HashSet::with_capacity(target);
            let mut list = Vec::with_capacity(target);
            while list.len() < target {
                let u = rng.gen_range(0..vertices);
                let v = rng.gen_range(0..vertices);
                if u == v || !existing.insert((u.min(v), u.max(v))) {
                    continue;
                }
                list.push(Edge::new(u, v, rng.gen_range(WEIGHTS)));
            }
            list
        }
    };
    Graph::new(nodes, list)
}
