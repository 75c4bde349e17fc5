use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::disjointset::DisjointSet;
use super::error::MstError;
use super::graph::{Edge, Graph, Weight};
use super::trace::{Decision, DecisionTrace, TraceStep};
use super::util::HasZero;

/// 最小全域木 (連結でなければ最小全域森) とそのコストの和
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MstResult<N, W> {
    /// 採用した辺. 採用した順に並ぶ.
    pub edges: Vec<Edge<N, W>>,
    /// 採用した辺のコストの和
    pub total_weight: W,
    /// 連結成分数
    pub components: usize,
}

impl<N, W> MstResult<N, W> {
    /// グラフが連結で, 結果が全域木であるかを返す.
    #[must_use]
    pub fn is_spanning_tree(&self) -> bool {
        self.components == 1
    }

    /// 採用した辺の本数を返す.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// 採用した辺が1本もないかを返す.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// 最小全域木を構築し, 各辺についての判断の履歴と共に返す.
/// 連結でないグラフが与えられた場合は最小全域森 (連結成分数を変えないまま辺のコストの和を最小化したもの) を構築する.
///
/// 辺はコストの昇順に処理され, コストが等しい辺は`graph.edges`で先に現れたものから処理される.
/// 自己ループはどの全域森にも含まれないので, 並べ替えの前に取り除かれ履歴にも現れない.
///
/// 頂点集合が空, 頂点の重複, 頂点集合にない頂点を端点に持つ辺, 自分自身と比較できないコストのいずれかがあると,
/// 辺を1本も処理せずにエラーを返す.
/// 採用した辺のコストの和が`W`で表せない場合は`MstError::WeightOverflow`を返す.
///
/// # Time complexity
///
/// - *O*(*E* log *E* + *E* *V*). 履歴の各ステップがその時点の辺集合を複製するため
pub fn compute_mst<N, W>(
    graph: &Graph<N, W>,
) -> Result<(MstResult<N, W>, DecisionTrace<N, W>), MstError>
where
    N: Hash + Eq + Clone + Debug,
    W: Weight,
{
    if graph.nodes.is_empty() {
        return Err(MstError::EmptyGraph);
    }
    let mut uf = DisjointSet::init(&graph.nodes)?;

    let mut iv = Vec::with_capacity(graph.edges.len());
    for (i, edge) in graph.edges.iter().enumerate() {
        let a = uf.index_of(&edge.u)?;
        let b = uf.index_of(&edge.v)?;
        if edge.weight.partial_cmp(&edge.weight).is_none() {
            return Err(MstError::IncomparableWeight(format!("{:?}", edge.weight)));
        }
        if edge.is_self_loop() {
            debug!("dropping self-loop {:?} at position {i}", edge.u);
            continue;
        }
        iv.push((i, a, b));
    }
    // 安定ソートなので, コストが等しい辺は入力順のまま
    iv.sort_by(|&(i, _, _), &(j, _, _)| {
        graph.edges[i]
            .weight
            .partial_cmp(&graph.edges[j].weight)
            .unwrap_or(Ordering::Equal)
    });

    let tree_size = graph.nodes.len() - 1;
    let mut accepted = Vec::with_capacity(tree_size);
    let mut mst_so_far = Vec::with_capacity(tree_size);
    let mut rejected_so_far = Vec::new();
    let mut steps = Vec::with_capacity(iv.len());
    for (step, (i, a, b)) in (1..).zip(iv) {
        let edge = &graph.edges[i];
        let decision = if uf.same_index(a, b) {
            rejected_so_far.push(edge.endpoints());
            Decision::Rejected
        } else {
            uf.union_index(a, b);
            accepted.push(edge.clone());
            mst_so_far.push(edge.endpoints());
            Decision::Accepted
        };
        debug!(
            "step {step}: {:?} {:?}-{:?} (weight {:?})",
            decision, edge.u, edge.v, edge.weight
        );
        steps.push(TraceStep {
            step,
            edge: edge.endpoints(),
            weight: edge.weight,
            decision,
            mst_so_far: mst_so_far.clone(),
            rejected_so_far: rejected_so_far.clone(),
        });
    }

    let components = uf.component_count();
    let total_weight = accepted
        .iter()
        .try_fold(<W as HasZero>::zero(), |acc, e| acc.checked_add(e.weight))
        .ok_or(MstError::WeightOverflow(std::any::type_name::<W>()))?;
    info!(
        "processed {} edges: {} accepted, {} rejected, total weight {:?}",
        steps.len(),
        accepted.len(),
        rejected_so_far.len(),
        total_weight
    );
    if components > 1 {
        warn!("graph is disconnected ({components} components), result is a spanning forest");
    }

    Ok((
        MstResult {
            edges: accepted,
            total_weight,
            components,
        },
        DecisionTrace::new(steps),
    ))
}

/// 判断の履歴を持たずに最小全域木 (森) だけを構築する.
///
/// エラーの条件と結果は`compute_mst`と同じ.
pub fn minimum_spanning_forest<N, W>(graph: &Graph<N, W>) -> Result<MstResult<N, W>, MstError>
where
    N: Hash + Eq + Clone + Debug,
    W: Weight,
{
    compute_mst(graph).map(|(result, _)| result)
}
