use serde::{Deserialize, Serialize};

/// 1本の辺についての判断
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    /// 最小全域木に加えた
    Accepted,
    /// 加えなかった
    Rejected,
}

/// 辺を棄却した理由
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum RejectReason {
    /// 両端が既に同じ連結成分に属していて, 加えると閉路ができる
    WouldFormCycle,
}

impl Decision {
    /// 棄却した場合はその理由を返す.
    #[must_use]
    pub fn reason(self) -> Option<RejectReason> {
        match self {
            Decision::Accepted => None,
            Decision::Rejected => Some(RejectReason::WouldFormCycle),
        }
    }

    /// 採用したかを返す.
    #[must_use]
    pub fn is_accepted(self) -> bool {
        self == Decision::Accepted
    }
}

/// 判断の履歴の1ステップ
///
/// `mst_so_far`, `rejected_so_far`はこのステップの判断を反映した時点での採用済み, 棄却済みの辺の複製である.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TraceStep<N, W> {
    /// 1から始まる番号
    pub step: usize,
    /// 処理した辺の端点. 入力された向きのまま
    pub edge: (N, N),
    pub weight: W,
    pub decision: Decision,
    /// このステップまでに採用した辺
    pub mst_so_far: Vec<(N, N)>,
    /// このステップまでに棄却した辺
    pub rejected_so_far: Vec<(N, N)>,
}

/// 辺をコストの昇順に処理したときの判断の履歴
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecisionTrace<N, W>(Vec<TraceStep<N, W>>);

impl<N, W> DecisionTrace<N, W> {
    pub(crate) fn new(steps: Vec<TraceStep<N, W>>) -> Self {
        Self(steps)
    }

    /// 処理した辺の本数を返す.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// 処理した辺が1本もないかを返す.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// ステップを処理した順に返すイテレータを作る.
    pub fn iter(&self) -> std::slice::Iter<'_, TraceStep<N, W>> {
        self.0.iter()
    }

    /// `step`番目 (1始まり) のステップを返す.
    #[must_use]
    pub fn get(&self, step: usize) -> Option<&TraceStep<N, W>> {
        self.0.get(step.checked_sub(1)?)
    }

    /// 全てのステップを処理した順に返す.
    #[must_use]
    pub fn steps(&self) -> &[TraceStep<N, W>] {
        &self.0
    }

    /// 最終的に採用された辺を採用順に返す.
    #[must_use]
    pub fn accepted(&self) -> &[(N, N)] {
        self.0.last().map(|s| s.mst_so_far.as_slice()).unwrap_or_default()
    }

    /// 最終的に棄却された辺を棄却順に返す.
    #[must_use]
    pub fn rejected(&self) -> &[(N, N)] {
        self.0.last().map(|s| s.rejected_so_far.as_slice()).unwrap_or_default()
    }
}

impl<N, W> IntoIterator for DecisionTrace<N, W> {
    type Item = TraceStep<N, W>;
    type IntoIter = std::vec::IntoIter<TraceStep<N, W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, N, W> IntoIterator for &'a DecisionTrace<N, W> {
    type Item = &'a TraceStep<N, W>;
    type IntoIter = std::slice::Iter<'a, TraceStep<N, W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DecisionTrace<&'static str, i32> {
        DecisionTrace::new(vec![
            TraceStep {
                step: 1,
                edge: ("A", "B"),
                weight: 1,
                decision: Decision::Accepted,
                mst_so_far: vec![("A", "B")],
                rejected_so_far: vec![],
            },
            TraceStep {
                step: 2,
                edge: ("B", "A"),
                weight: 3,
                decision: Decision::Rejected,
                mst_so_far: vec![("A", "B")],
                rejected_so_far: vec![("B", "A")],
            },
        ])
    }

    #[test]
    fn accessors() {
        let trace = sample();
        assert_eq!(trace.len(), 2);
        assert!(trace.get(0).is_none());
        assert_eq!(trace.get(2).map(|s| s.weight), Some(3));
        assert!(trace.get(3).is_none());
        assert_eq!(trace.accepted(), &[("A", "B")]);
        assert_eq!(trace.rejected(), &[("B", "A")]);
        assert_eq!(
            trace.iter().map(|s| s.decision.reason()).collect::<Vec<_>>(),
            vec![None, Some(RejectReason::WouldFormCycle)]
        );
    }

    #[test]
    fn empty() {
        let trace = DecisionTrace::<u8, u8>::new(vec![]);
        assert!(trace.is_empty());
        assert!(trace.accepted().is_empty());
        assert!(trace.rejected().is_empty());
    }

    #[test]
    fn serde_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json[1],
            serde_json::json!({
                "step": 2,
                "edge": ["B", "A"],
                "weight": 3,
                "decision": "rejected",
                "mst_so_far": [["A", "B"]],
                "rejected_so_far": [["B", "A"]],
            })
        );
        assert_eq!(json[0]["decision"], "accepted");
    }
}
