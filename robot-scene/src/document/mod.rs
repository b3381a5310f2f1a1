//! Content document: the article's table of contents and its coupling to the scene.
//!
//! Sections are authored once and never mutated. A section whose title starts
//! with a numeral followed by a period exposes that numeral as its
//! [`SectionId`]; hotspots reach sections only through that identifier.
//!
//! ## Section Links
//!
//! ```text
//! Hotspot (HotspotDef.section)
//!   └─> SectionId
//!       └─> SectionTarget (typed handle)
//!           ├─> DomSections       (wasm, [data-section] elements)
//!           └─> DocumentSections  (native, authored document)
//! ```

/// Authored article content: header, call to action and section grid.
pub mod content;

/// HTML rendering of the content column with `data-section` attributes.
pub mod html;

/// Section identifier parsed from a section title.
pub mod section_id;

/// Scroll and highlight targets addressed by section identifier.
pub mod targets;

/// Browser DOM mounting and `[data-section]` indexing (wasm only).
#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use content::{ContentDocument, Section, SectionItem};
pub use section_id::SectionId;
pub use targets::{DocumentSections, SectionTarget};
