pub mod model;
pub mod service;

pub use model::Toast;
pub use service::GameService;
