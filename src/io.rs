//! グラフ, 判断の履歴, 結果のJSONによる入出力
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use super::kruskal::MstResult;
use super::trace::DecisionTrace;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// 1回の実行の出力. `{"trace": [...], "result": {...}}`の形で書き出される.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Report<N, W> {
    pub trace: DecisionTrace<N, W>,
    pub result: MstResult<N, W>,
}

pub fn to_json_string<T>(value: &T) -> Result<String, IoError>
where
    T: Serialize,
{
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn from_json_str<T>(s: &str) -> Result<T, IoError>
where
    T: DeserializeOwned,
{
    Ok(serde_json::from_str(s)?)
}

pub fn write_json<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> Result<(), IoError> {
    let mut file = File::create(path)?;
    let content = to_json_string(value)?;
    file.write_all(content.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}

pub fn read_json<P: AsRef<Path>, T: DeserializeOwned>(path: P) -> Result<T, IoError> {
    let mut file = File::open(path)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    from_json_str(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use crate::kruskal::compute_mst;

    #[test]
    fn graph_from_json() {
        let g: Graph<String, f64> = from_json_str(
            r#"{"nodes": ["A", "B"], "edges": [{"u": "A", "v": "B", "weight": 1.5}]}"#,
        )
        .unwrap();
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edges[0].weight, 1.5);
    }

    #[test]
    fn malformed_json() {
        let err = from_json_str::<Graph<String, f64>>(r#"{"nodes": ["#).unwrap_err();
        assert!(matches!(err, IoError::Json(_)));
    }

    #[test]
    fn report_shape() {
        let g = Graph::from_edges([("A", "B", 1), ("B", "C", 2), ("A", "C", 3)]);
        let (result, trace) = compute_mst(&g).unwrap();
        let json = serde_json::to_value(Report { trace, result }).unwrap();
        assert_eq!(json["trace"].as_array().map(Vec::len), Some(3));
        assert_eq!(json["trace"][2]["decision"], "rejected");
        assert_eq!(json["result"]["total_weight"], 3);
        assert_eq!(json["result"]["components"], 1);
        assert_eq!(
            json["result"]["edges"][1],
            serde_json::json!({"u": "B", "v": "C", "weight": 2})
        );
    }

    #[test]
    fn file_round_trip() {
        let path = std::env::temp_dir().join(format!("kruskal-io-{}.json", std::process::id()));
        let g = Graph::from_edges([(1u32, 2u32, 7i64)]);
        write_json(&path, &g).unwrap();
        let back: Graph<u32, i64> = read_json(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn missing_file() {
        let err = read_json::<_, Graph<u32, u32>>("/nonexistent/kruskal/graph.json").unwrap_err();
        assert!(matches!(err, IoError::Io(_)));
    }
}
