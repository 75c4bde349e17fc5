/// 素集合データ構造
///
/// 各要素は`0..n`の番号で表され, 親へのポインタの配列で森を保持する.
/// 根は自分自身を親に持つ要素で, その木に属する要素全体の代表となる.
#[derive(Clone)]
pub struct UnionFind {
    parent: Box<[usize]>,
    count: usize,
}

impl UnionFind {
    /// `n`個の要素があり, それぞれ別のグループに属しているUnionFindを作る.
    ///
    /// # Time complexity
    ///
    /// - *O*(*n*)
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            count: n,
        }
    }

    /// 要素の総数を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// 要素が1つもないかを返す.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// 要素の連結成分数を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// 要素`a`が属するグループと要素`b`が属するグループを1つのグループにマージし, 新しいグループの代表を返す.
    ///
    /// `b`の代表が`a`の代表の子になるので, 新しい代表は常に`a`の代表である.
    /// 最初から同じグループに属していた場合は, 何もせずにそのグループの代表を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*) (償却)
    pub fn union(&mut self, a: usize, b: usize) -> usize {
        debug_assert!(a < self.len());
        debug_assert!(b < self.len());
        let a = self.find(a);
        let b = self.find(b);
        if a != b {
            self.parent[b] = a;
            self.count -= 1;
        }
        a
    }

    /// 要素`a`が属するグループの代表を返す.
    ///
    /// 辿った要素は全て代表を直接指すように書き換えられる. 代表そのものは変わらない.
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*) (償却)
    #[must_use]
    pub fn find(&mut self, mut a: usize) -> usize {
        debug_assert!(a < self.len());
        let root = self.find_imu(a);
        while a != root {
            let next = self.parent[a];
            self.parent[a] = root;
            a = next;
        }
        root
    }

    /// 要素`a`が属するグループの代表を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(*n*)
    #[must_use]
    pub fn find_imu(&self, mut a: usize) -> usize {
        debug_assert!(a < self.len());
        while self.parent[a] != a {
            a = self.parent[a];
        }
        a
    }

    /// 要素`a`, `b`が同じグループに属するか判定する.
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*) (償却)
    pub fn same(&mut self, a: usize, b: usize) -> bool {
        debug_assert!(a < self.len());
        debug_assert!(b < self.len());
        self.find(a) == self.find(b)
    }

    /// グループ分けを返す. 各グループは昇順に並び, グループ同士は最小の要素の昇順に並ぶ.
    ///
    /// # Time complexity
    ///
    /// - *O*(*n* log *n*)
    #[must_use]
    pub fn groups(&self) -> Vec<Vec<usize>> {
        let mut slot = vec![usize::MAX; self.len()];
        let mut q: Vec<Vec<usize>> = Vec::with_capacity(self.count);
        for i in 0..self.len() {
            let g = self.find_imu(i);
            if slot[g] == usize::MAX {
                slot[g] = q.len();
                q.push(vec![]);
            }
            q[slot[g]].push(i);
        }
        q
    }
}

impl std::fmt::Debug for UnionFind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        struct VecSet(Vec<usize>);
        impl std::fmt::Debug for VecSet {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_set().entries(&self.0).finish()
            }
        }

        f.debug_set()
            .entries(self.groups().into_iter().map(VecSet))
            .finish()
    }
}

impl Default for UnionFind {
    fn default() -> Self {
        Self::new(0)
    }
}
