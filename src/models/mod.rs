mod movie;
mod scored;
mod weights;

pub use movie::{genre_map, genre_names, Genre, Movie, MoviePage};
pub use scored::{NormalizedMetrics, ScoredMovie};
pub use weights::{Metric, WeightConfig};
