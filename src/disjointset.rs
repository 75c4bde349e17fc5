use std::fmt::Debug;
use std::hash::Hash;

use indexmap::{Equivalent, IndexSet};

use super::error::MstError;
use super::unionfind::UnionFind;

/// 頂点のラベルで操作する素集合データ構造
///
/// ラベルは登録された順に`0..n`の番号が振られ, 中身は番号による`UnionFind`で管理される.
#[derive(Clone)]
pub struct DisjointSet<N> {
    labels: IndexSet<N>,
    uf: UnionFind,
}

impl<N: Hash + Eq + Debug> DisjointSet<N> {
    /// 各頂点が別のグループに属する状態で作る.
    ///
    /// 同じラベルが2回以上現れた場合は`MstError::DuplicateNode`を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(*n*)
    pub fn init(nodes: impl IntoIterator<Item = N>) -> Result<Self, MstError> {
        let mut labels = IndexSet::new();
        for node in nodes {
            if labels.contains(&node) {
                return Err(MstError::duplicate_node(&node));
            }
            labels.insert(node);
        }
        let uf = UnionFind::new(labels.len());
        Ok(Self { labels, uf })
    }

    /// 頂点数を返す.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// 頂点が1つもないかを返す.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// 連結成分数を返す.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.uf.count()
    }

    /// ラベル`node`の番号を返す.
    pub fn index_of<Q>(&self, node: &Q) -> Result<usize, MstError>
    where
        Q: Hash + Equivalent<N> + Debug + ?Sized,
    {
        self.labels
            .get_index_of(node)
            .ok_or_else(|| MstError::unknown_node(&node))
    }

    /// `node`が属するグループの代表のラベルを返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*) (償却)
    pub fn find<Q>(&mut self, node: &Q) -> Result<&N, MstError>
    where
        Q: Hash + Equivalent<N> + Debug + ?Sized,
    {
        let i = self.index_of(node)?;
        let root = self.uf.find(i);
        Ok(&self.labels[root])
    }

    /// `a`が属するグループに`b`が属するグループをマージし, 新しい代表 (`a`の代表) のラベルを返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*) (償却)
    pub fn union<Q>(&mut self, a: &Q, b: &Q) -> Result<&N, MstError>
    where
        Q: Hash + Equivalent<N> + Debug + ?Sized,
    {
        let a = self.index_of(a)?;
        let b = self.index_of(b)?;
        let root = self.union_index(a, b);
        Ok(&self.labels[root])
    }

    /// `a`, `b`が同じグループに属するか判定する.
    pub fn same<Q>(&mut self, a: &Q, b: &Q) -> Result<bool, MstError>
    where
        Q: Hash + Equivalent<N> + Debug + ?Sized,
    {
        let a = self.index_of(a)?;
        let b = self.index_of(b)?;
        Ok(self.same_index(a, b))
    }

    /// 番号で指定した`union`
    pub fn union_index(&mut self, a: usize, b: usize) -> usize {
        self.uf.union(a, b)
    }

    /// 番号で指定した`same`
    pub fn same_index(&mut self, a: usize, b: usize) -> bool {
        self.uf.same(a, b)
    }

    /// グループ分けをラベルで返す. 並びは`UnionFind::groups`と同じ.
    #[must_use]
    pub fn groups(&self) -> Vec<Vec<&N>> {
        self.uf
            .groups()
            .into_iter()
            .map(|g| g.into_iter().map(|i| &self.labels[i]).collect())
            .collect()
    }
}

impl<N: Hash + Eq + Debug> Debug for DisjointSet<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.groups()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_and_union_by_label() {
        let mut set = DisjointSet::init(["A", "B", "C", "D"]).unwrap();
        assert_eq!(set.len(), 4);
        assert_eq!(set.find("C"), Ok(&"C"));
        assert_eq!(set.union("A", "B"), Ok(&"A"));
        assert_eq!(set.union("C", "B"), Ok(&"C"));
        assert_eq!(set.find("A"), Ok(&"C"));
        assert_eq!(set.same("A", "D"), Ok(false));
        assert_eq!(set.component_count(), 2);
        assert_eq!(set.groups(), vec![vec![&"A", &"B", &"C"], vec![&"D"]]);
    }

    #[test]
    fn duplicate_node() {
        let err = DisjointSet::init([1, 2, 1]).unwrap_err();
        assert_eq!(err, MstError::DuplicateNode("1".to_owned()));
    }

    #[test]
    fn unknown_node() {
        let mut set = DisjointSet::init(["A".to_owned()]).unwrap();
        assert_eq!(
            set.find("Z"),
            Err(MstError::UnknownNode("\"Z\"".to_owned()))
        );
        assert!(set.union("A", "Z").is_err());
        assert_eq!(set.component_count(), 1);
    }

    #[test]
    fn borrowed_labels() {
        let nodes = vec![10u32, 20, 30];
        let mut set = DisjointSet::init(nodes.iter()).unwrap();
        assert_eq!(set.index_of(&30u32), Ok(2));
        assert_eq!(set.union(&20u32, &30u32), Ok(&&20));
        assert_eq!(set.find(&10u32), Ok(&&10));
    }
}
