use crate::ports::TextGenerator;

/// Application context holding dependencies for command execution.
pub struct AppContext<G: TextGenerator> {
    generator: G,
}

impl<G: TextGenerator> AppContext<G> {
    /// Create a new application context.
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Get a reference to the text-generation client.
    pub fn generator(&self) -> &G {
        &self.generator
    }
}
