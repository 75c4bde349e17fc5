//! クラスカル法による最小全域木 (森) の構築と, 各辺についての採用/棄却の判断の履歴.

pub mod benchmark;
pub mod disjointset;
pub mod error;
pub mod generate;
pub mod graph;
pub mod io;
pub mod kruskal;
pub mod trace;
pub mod unionfind;
pub mod util;

pub use disjointset::DisjointSet;
pub use error::MstError;
pub use graph::{Edge, Graph, Weight};
pub use kruskal::{compute_mst, minimum_spanning_forest, MstResult};
pub use trace::{Decision, DecisionTrace, RejectReason, TraceStep};
pub use unionfind::UnionFind;
