use gallery_kernel::ReferenceOpener;

/// Reference opener for headless hosts: logs each link and keeps it.
#[derive(Debug, Clone, Default)]
pub struct LinkLog {
    opened: Vec<String>,
}

impl LinkLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Links in the order they were opened.
    pub fn opened(&self) -> &[String] {
        &self.opened
    }

    pub fn last(&self) -> Option<&str> {
        self.opened.last().map(String::as_str)
    }
}

impl ReferenceOpener for LinkLog {
    fn open(&mut self, url: &str) {
        tracing::info!(url, "opening reference");
        self.opened.push(url.to_string());
    }
}
