//! Descriptor loaders.

mod yaml;

pub use yaml::YamlDescriptorLoader;
