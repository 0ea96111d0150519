use crate::component::ComponentId;
use uuid::Uuid;

/// Sequential ID generator for components within an editing session
///
/// IDs have the shape `{seed}-{n}`. A random seed keeps IDs from different
/// sessions apart; a fixed seed makes them predictable in tests.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String,
    count: u64,
}

impl IdGenerator {
    /// Generator with a random 8-character seed
    pub fn new() -> Self {
        let uuid = Uuid::new_v4().simple().to_string();
        Self::from_seed(uuid[..8].to_string())
    }

    pub fn from_seed(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            count: 0,
        }
    }

    /// Generate next sequential ID
    pub fn new_id(&mut self) -> ComponentId {
        self.count += 1;
        ComponentId::new(format!("{}-{}", self.seed, self.count))
    }

    /// Generate IDs until one is not `taken`
    pub fn new_id_avoiding(&mut self, taken: impl Fn(&ComponentId) -> bool) -> ComponentId {
        loop {
            let id = self.new_id();
            if !taken(&id) {
                return id;
            }
        }
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let mut gen = IdGenerator::from_seed("page");

        let id1 = gen.new_id();
        let id2 = gen.new_id();
        let id3 = gen.new_id();

        assert_eq!(id1.as_str(), "page-1");
        assert_eq!(id2.as_str(), "page-2");
        assert_eq!(id3.as_str(), "page-3");
    }

    #[test]
    fn test_random_seeds_differ() {
        let a = IdGenerator::new();
        let b = IdGenerator::new();

        assert_eq!(a.seed().len(), 8);
        assert_ne!(a.seed(), b.seed());
    }

    #[test]
    fn test_new_id_avoiding_skips_taken() {
        let mut gen = IdGenerator::from_seed("c");
        let taken = [ComponentId::from("c-1"), ComponentId::from("c-2")];

        let id = gen.new_id_avoiding(|id| taken.contains(id));
        assert_eq!(id.as_str(), "c-3");
    }
}
