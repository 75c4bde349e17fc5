use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Add;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use super::util::HasZero;

/// 辺のコストとして使える型
///
/// 比較は`PartialOrd`で行うので, NaNのように自分自身と比較できない値は辺のコストに使えない.
pub trait Weight: Copy + PartialOrd + Add<Output = Self> + HasZero + Debug {
    /// 和を求める. 型で表せない場合は`None`を返す.
    fn checked_add(self, rhs: Self) -> Option<Self>;
}

/// 整数型にWeightを実装するマクロ
macro_rules! impl_weight_int {
    ($($t: ty),*) => {$(
        impl Weight for $t {
            fn checked_add(self, rhs: $t) -> Option<$t> { <$t>::checked_add(self, rhs) }
        }
    )*};
}

impl_weight_int! { u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize }

impl Weight for f32 {
    fn checked_add(self, rhs: f32) -> Option<f32> {
        Some(self + rhs)
    }
}

impl Weight for f64 {
    fn checked_add(self, rhs: f64) -> Option<f64> {
        Some(self + rhs)
    }
}

/// 無向の重み付き辺. `(u, v, w)`と`(v, u, w)`は同じ辺を表す.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge<N, W> {
    pub u: N,
    pub v: N,
    pub weight: W,
}

impl<N, W> Edge<N, W> {
    /// 頂点`u`と`v`を結ぶコスト`weight`の辺を作る.
    pub fn new(u: N, v: N, weight: W) -> Self {
        Self { u, v, weight }
    }
}

impl<N: PartialEq + Clone, W> Edge<N, W> {
    /// 両端が同じ頂点か判定する.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.u == self.v
    }

    /// 端点の組を入力された向きのまま返す.
    #[must_use]
    pub fn endpoints(&self) -> (N, N) {
        (self.u.clone(), self.v.clone())
    }
}

impl<N, W> From<(N, N, W)> for Edge<N, W> {
    fn from((u, v, weight): (N, N, W)) -> Self {
        Self::new(u, v, weight)
    }
}

/// 頂点の集合と辺の列からなる無向グラフ
///
/// 同じ頂点対を結ぶ辺が複数あってもよく, それぞれ別の辺として扱う.
/// 辺の並びはコストが等しい辺の優先順位を決める.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Graph<N, W> {
    pub nodes: Vec<N>,
    pub edges: Vec<Edge<N, W>>,
}

impl<N, W> Default for Graph<N, W> {
    fn default() -> Self {
        Self {
            nodes: vec![],
            edges: vec![],
        }
    }
}

impl<N, W> Graph<N, W> {
    pub fn new(nodes: Vec<N>, edges: Vec<Edge<N, W>>) -> Self {
        Self { nodes, edges }
    }

    pub fn add_node(&mut self, node: N) -> &mut Self {
        self.nodes.push(node);
        self
    }

    pub fn add_edge(&mut self, u: N, v: N, weight: W) -> &mut Self {
        self.edges.push(Edge::new(u, v, weight));
        self
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<N: Hash + Eq + Clone, W> Graph<N, W> {
    /// 辺の列からグラフを作る. 頂点は辺に初めて現れた順に並ぶ.
    pub fn from_edges(edges: impl IntoIterator<Item = impl Into<Edge<N, W>>>) -> Self {
        let edges = edges.into_iter().map(Into::into).collect::<Vec<Edge<N, W>>>();
        let mut nodes = IndexSet::new();
        for e in &edges {
            nodes.insert(e.u.clone());
            nodes.insert(e.v.clone());
        }
        Self {
            nodes: nodes.into_iter().collect(),
            edges,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_edges() {
        let g = Graph::from_edges([("B", "A", 1), ("A", "C", 3), ("C", "C", 0)]);
        assert_eq!(g.nodes, vec!["B", "A", "C"]);
        assert_eq!(g.edge_count(), 3);
        assert!(g.edges[2].is_self_loop());
        assert_eq!(g.edges[0].endpoints(), ("B", "A"));
    }

    #[test]
    fn builder() {
        let mut g = Graph::default();
        g.add_node(1).add_node(2).add_edge(1, 2, 0.5);
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edges, vec![Edge::new(1, 2, 0.5)]);
    }

    #[test]
    fn checked_add() {
        assert_eq!(Weight::checked_add(200u8, 55), Some(255));
        assert_eq!(Weight::checked_add(200u8, 100), None);
        assert_eq!(Weight::checked_add(i32::MIN, -1), None);
        assert_eq!(Weight::checked_add(1.5f64, -0.5), Some(1.0));
    }

    #[test]
    fn serde_shape() {
        let g = Graph::from_edges([("A", "B", 2)]);
        let json = serde_json::to_value(&g).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "nodes": ["A", "B"],
                "edges": [{"u": "A", "v": "B", "weight": 2}],
            })
        );
    }
}
