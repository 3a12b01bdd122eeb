use rustc_hash::FxHashSet;

/// Every `id` written to the output document: root name, clip paths and gradients.
#[derive(Debug, Clone, Default)]
pub struct IdRegistry {
    taken: FxHashSet<String>,
}

impl IdRegistry {
    pub fn contains(&self, id: &str) -> bool {
        self.taken.contains(id)
    }

    /// Marks `id` as used. Returns false when it already was.
    pub fn reserve(&mut self, id: &str) -> bool {
        self.taken.insert(id.to_string())
    }

    /// Registers `base`, or the first free `base_1`, `base_2`, ... when `base` is taken.
    pub fn claim(&mut self, base: &str) -> String {
        let mut id = base.to_string();
        let mut suffix = 1usize;
        while self.taken.contains(&id) {
            id = format!("{base}_{suffix}");
            suffix += 1;
        }
        self.taken.insert(id.clone());
        id
    }
}
