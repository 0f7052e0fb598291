//! Content type to display glyph mapping

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileIcon {
    Document,
    Picture,
    Chart,
    Folder,
}

impl FileIcon {
    /// Ordered substring match on the content type; first hit wins.
    pub fn classify(content_type: &str) -> Self {
        const RULES: [(&str, FileIcon); 5] = [
            ("pdf", FileIcon::Document),
            ("image", FileIcon::Picture),
            ("word", FileIcon::Document),
            ("csv", FileIcon::Chart),
            ("excel", FileIcon::Chart),
        ];

        RULES
            .iter()
            .find(|(needle, _)| content_type.contains(needle))
            .map(|(_, icon)| *icon)
            .unwrap_or(FileIcon::Folder)
    }

    pub fn glyph(self) -> &'static str {
        match self {
            FileIcon::Document => "📄",
            FileIcon::Picture => "🖼️",
            FileIcon::Chart => "📊",
            FileIcon::Folder => "📁",
        }
    }
}

impl std::fmt::Display for FileIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}
