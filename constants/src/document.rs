/// Attribute carrying a section's identifier in the rendered document.
pub const SECTION_ATTRIBUTE: &str = "data-section";

/// Class toggled on a section while its hotspot is hovered.
pub const SECTION_HIGHLIGHT_CLASS: &str = "toc-section--active";

/// Element id the content column is rendered into.
pub const CONTENT_ROOT_ID: &str = "content";
