//! Domain logic for dog records.

use std::sync::Arc;

use crate::error::{DogHouseError, Result};

use super::model::{CreateDog, Dog, DogQuery};
use super::repository::DogRepository;

/// Version string returned by the ping endpoint.
const SERVICE_VERSION: &str = "Dogshouseservice.Version1.0.1";

/// Maximum accepted length for a dog's name.
const MAX_NAME_LEN: usize = 100;
/// Maximum accepted length for a dog's color.
const MAX_COLOR_LEN: usize = 50;

/// Application service for dog records.
pub struct DogService {
    repository: Arc<dyn DogRepository>,
}

impl DogService {
    /// Create a new service over the given repository.
    pub fn new(repository: Arc<dyn DogRepository>) -> Self {
        Self { repository }
    }

    /// Service identification string.
    pub fn ping(&self) -> &'static str {
        SERVICE_VERSION
    }

    /// List dogs with sorting and pagination.
    pub async fn query_dogs(&self, query: &DogQuery) -> (Vec<Dog>, usize) {
        self.repository.query(query).await
    }

    /// Validate and create a dog record.
    ///
    /// Fails with `Validation` for bad input and `Conflict` when a dog
    /// with the same name already exists.
    pub async fn create_dog(&self, request: CreateDog) -> Result<Dog> {
        if request.name.trim().is_empty() {
            return Err(DogHouseError::Validation("Name is required".to_string()));
        }
        if request.name.len() > MAX_NAME_LEN {
            return Err(DogHouseError::Validation(format!(
                "Name must be at most {MAX_NAME_LEN} characters"
            )));
        }
        if request.color.trim().is_empty() {
            return Err(DogHouseError::Validation("Color is required".to_string()));
        }
        if request.color.len() > MAX_COLOR_LEN {
            return Err(DogHouseError::Validation(format!(
                "Color must be at most {MAX_COLOR_LEN} characters"
            )));
        }
        if request.tail_length < 0 {
            return Err(DogHouseError::Validation(
                "TailLength must be non-negative".to_string(),
            ));
        }
        if request.weight < 0 {
            return Err(DogHouseError::Validation(
                "Weight must be non-negative".to_string(),
            ));
        }

        if self.repository.find_by_name(&request.name).await.is_some() {
            return Err(DogHouseError::Conflict(
                "Dog with the same name already exists".to_string(),
            ));
        }

        let dog = Dog {
            name: request.name,
            color: request.color,
            tail_length: request.tail_length,
            weight: request.weight,
        };
        self.repository.insert(dog.clone()).await;
        Ok(dog)
    }
}
