use gallery_common::InfoRecord;
use gallery_kernel::ContentDisplay;

/// Text info panel shown next to the view while an exhibit is disclosed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoPanel {
    record: Option<InfoRecord>,
    /// Number of times the panel switched to a different record.
    changes: u32,
}

impl InfoPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.record.is_some()
    }

    pub fn record(&self) -> Option<&InfoRecord> {
        self.record.as_ref()
    }

    pub fn changes(&self) -> u32 {
        self.changes
    }

    /// Panel contents as lines of text, empty when hidden.
    pub fn text(&self) -> String {
        let Some(info) = &self.record else {
            return String::new();
        };
        format!(
            "{}\nArtist: {}\nDescription: {}\nYear: {}\n",
            info.title, info.creator, info.description, info.period
        )
    }
}

impl ContentDisplay for InfoPanel {
    fn show(&mut self, info: &InfoRecord) {
        if self.record.as_ref() != Some(info) {
            self.record = Some(info.clone());
            self.changes += 1;
        }
    }

    fn hide(&mut self) {
        if self.record.take().is_some() {
            self.changes += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str) -> InfoRecord {
        InfoRecord {
            title: title.into(),
            creator: "Vincent van Gogh".into(),
            description: "Sunflowers in a vase.".into(),
            period: "1888".into(),
            link: "https://example.org/".into(),
        }
    }

    #[test]
    fn hidden_by_default() {
        let panel = InfoPanel::new();
        assert!(!panel.is_visible());
        assert!(panel.text().is_empty());
    }

    #[test]
    fn show_renders_fields() {
        let mut panel = InfoPanel::new();
        panel.show(&record("Sunflowers"));
        let text = panel.text();
        assert!(text.starts_with("Sunflowers\n"));
        assert!(text.contains("Artist: Vincent van Gogh"));
        assert!(text.contains("Year: 1888"));
    }

    #[test]
    fn repeated_show_is_not_a_change() {
        let mut panel = InfoPanel::new();
        panel.show(&record("a"));
        panel.show(&record("a"));
        panel.show(&record("b"));
        panel.hide();
        panel.hide();
        assert_eq!(panel.changes(), 3);
        assert!(!panel.is_visible());
    }
}
