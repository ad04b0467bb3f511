pub mod model;
pub mod service;

pub use model::{BoardView, CellView, Direction};
pub use service::GameService;
