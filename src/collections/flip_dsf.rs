use crate::error::Contradiction;

/// Disjoint-set forest where every element is either identical or inverse to the
/// representative of its class
#[derive(Clone, Debug)]
pub struct FlipDsf {
    parent: Vec<usize>,
    /// true if the element is inverse to its parent
    flip: Vec<bool>,
    size: Vec<usize>,
}

impl FlipDsf {
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            flip: vec![false; len],
            size: vec![1; len],
        }
    }

    /// Returns the representative of the class of `element` and whether `element` is
    /// inverse to it
    pub fn canonify(&mut self, element: usize) -> (usize, bool) {
        let mut root = element;
        let mut inverse = false;
        while self.parent[root] != root {
            inverse ^= self.flip[root];
            root = self.parent[root];
        }
        let mut i = element;
        let mut i_inverse = inverse;
        while i != root {
            let next = self.parent[i];
            let next_inverse = i_inverse ^ self.flip[i];
            self.parent[i] = root;
            self.flip[i] = i_inverse;
            i = next;
            i_inverse = next_inverse;
        }
        (root, inverse)
    }

    /// Records that `a` and `b` are identical (or inverse if `inverse` is true).
    /// Returns false if the relation was already known, and fails if the opposite relation
    /// was already known.
    pub fn merge(&mut self, a: usize, b: usize, inverse: bool) -> Result<bool, Contradiction> {
        let (a, a_inverse) = self.canonify(a);
        let (b, b_inverse) = self.canonify(b);
        let inverse = inverse ^ a_inverse ^ b_inverse;
        if a == b {
            return if inverse { Err(Contradiction) } else { Ok(false) };
        }
        let (root, child) = if self.size[a] < self.size[b] {
            (b, a)
        } else {
            (a, b)
        };
        self.parent[child] = root;
        self.flip[child] = inverse;
        self.size[root] += self.size[child];
        Ok(true)
    }
}
