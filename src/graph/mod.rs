pub mod traits;
pub mod directed;
pub mod generators;
pub mod layout;

pub use traits::{Graph, MutableGraph};
pub use directed::DirectedGraph;
pub use layout::{circular_layout, Canvas, Position};
