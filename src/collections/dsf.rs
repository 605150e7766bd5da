/// Disjoint-set forest that also tracks the number of elements in each class
#[derive(Clone, Debug)]
pub struct Dsf {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl Dsf {
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
        }
    }

    /// Finds the representative of the class containing `element`
    pub fn canonify(&mut self, element: usize) -> usize {
        let mut root = element;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut i = element;
        while i != root {
            let next = self.parent[i];
            self.parent[i] = root;
            i = next;
        }
        root
    }

    /// Merges the classes of `a` and `b`. Returns false if they were already in the same class.
    pub fn merge(&mut self, a: usize, b: usize) -> bool {
        let a = self.canonify(a);
        let b = self.canonify(b);
        if a == b {
            return false;
        }
        let (root, child) = if self.size[a] < self.size[b] {
            (b, a)
        } else {
            (a, b)
        };
        self.parent[child] = root;
        self.size[root] += self.size[child];
        true
    }

    /// The number of elements in the class containing `element`
    pub fn size(&mut self, element: usize) -> usize {
        let root = self.canonify(element);
        self.size[root]
    }

    pub fn same_class(&mut self, a: usize, b: usize) -> bool {
        self.canonify(a) == self.canonify(b)
    }
}
