//! Cluster engine: k-means over RGB space.

mod kmeans;

pub use kmeans::{cluster, Centroid};
