//! Infrastructure Layer
//!
//! File-system facing adapters around the pure domain:
//! - `xml` - feature model reader (quick-xml)
//! - `corpus` - configuration files and corpus scanning
//! - `svg` - image renderer
//! - `fs` - atomic writes

pub mod corpus;
pub mod fs;
pub mod svg;
pub mod xml;

pub use corpus::{collect_configs, read_configuration, read_corpus, CONFIG_EXTENSION, DEFAULT_MAX_DEPTH};
pub use fs::atomic_write;
pub use svg::{render_svg, svg_output_path, SvgOptions};
pub use xml::{load_document, load_feature_tree, parse_document};
