/*!
 * Sign catalog: entries, the read-only index built over them, the video
 * naming convention, static JSON sources, and query resolution.
 */

pub use self::entry::{CatalogEntry, Transliteration};
pub use self::index::CatalogIndex;
pub use self::naming::{VideoNaming, slugify};
pub use self::resolver::{CatalogResolver, MatchKind, Resolution};

pub mod entry;
pub mod index;
pub mod loader;
pub mod naming;
pub mod resolver;
