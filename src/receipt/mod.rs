pub mod money;
pub mod types;

pub use money::Cents;
pub use types::{Item, PointsResponse, ProcessResponse, Receipt};
