use std::collections::HashMap;

/// Owned name to asset map. Lookups never create entries.
#[derive(Clone, Debug)]
pub struct AssetRegistry<T> {
    items: HashMap<String, T>,
}

impl<T> Default for AssetRegistry<T> {
    fn default() -> Self {
        Self { items: HashMap::new() }
    }
}

impl<T> AssetRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `item` under `name`, returning the asset it replaced.
    pub fn insert(&mut self, name: impl Into<String>, item: T) -> Option<T> {
        self.items.insert(name.into(), item)
    }

    pub fn remove(&mut self, name: &str) -> Option<T> {
        self.items.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.items.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut T> {
        self.items.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    /// All names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.items.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
