//! Domain Entities
//!
//! - `FeatureNode` - one structural element of the feature model
//! - `XmlDocument` - the parsed model document the tree is built from
//! - `Configuration` - one configuration file's feature lines

mod configuration;
mod document;
mod feature_node;

pub use configuration::Configuration;
pub use document::{XmlDocument, XmlElement, XmlNode};
pub use feature_node::{FeatureNode, PreOrder};
