use thiserror::Error;

/// 最小全域木の構築に失敗した理由. どれも最初の辺を処理する前に検出され, 部分的な結果は返らない.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MstError {
    #[error("graph has no nodes")]
    EmptyGraph,
    #[error("node {0} is not in the node set")]
    UnknownNode(String),
    #[error("node {0} appears more than once in the node set")]
    DuplicateNode(String),
    #[error("weight {0} of an edge is not comparable")]
    IncomparableWeight(String),
    #[error("total weight does not fit in {0}")]
    WeightOverflow(&'static str),
}

impl MstError {
    pub(crate) fn unknown_node(node: &impl std::fmt::Debug) -> Self {
        MstError::UnknownNode(format!("{node:?}"))
    }

    pub(crate) fn duplicate_node(node: &impl std::fmt::Debug) -> Self {
        MstError::DuplicateNode(format!("{node:?}"))
    }
}
