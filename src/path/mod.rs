mod error;
mod location;
mod normalize;

pub use error::{PathError, PathResult};
pub use location::{Location, parse_query, split_location};
pub use normalize::{
    apply_prefix, join_paths, location_path, normalize_path, normalize_prefix,
    strip_prefix_occurrence,
};
