//! Dog records: model, storage, and domain logic.

mod model;
mod repository;
mod service;

pub use model::{CreateDog, Dog, DogQuery};
pub use repository::{DogRepository, InMemoryDogRepository};
pub use service::DogService;
