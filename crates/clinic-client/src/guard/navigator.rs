/// Moves the user between screens.
pub trait Navigator {
    /// Client-side navigation; in-memory state survives
    fn push(&mut self, path: &str);

    /// Full navigation; all in-memory screen state is discarded
    fn assign(&mut self, path: &str);
}

/// One recorded navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Push(String),
    Assign(String),
}

impl Navigation {
    pub fn path(&self) -> &str {
        match self {
            Self::Push(path) | Self::Assign(path) => path,
        }
    }
}

/// Navigator that records requested navigations for the shell to act on
#[derive(Debug, Clone, Default)]
pub struct NavigationHistory {
    entries: Vec<Navigation>,
}

impl NavigationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Navigation] {
        &self.entries
    }

    pub fn last(&self) -> Option<&Navigation> {
        self.entries.last()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Navigator for NavigationHistory {
    fn push(&mut self, path: &str) {
        self.entries.push(Navigation::Push(path.to_string()));
    }

    fn assign(&mut self, path: &str) {
        self.entries.push(Navigation::Assign(path.to_string()));
    }
}
