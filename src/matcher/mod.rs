mod order;
mod params;
mod resolver;

pub use order::{MatchOrder, select_match};
pub use params::extract_params;
pub use resolver::{PotentialMatch, resolve};
