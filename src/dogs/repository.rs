//! Dog storage.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::model::{Dog, DogQuery};

/// Storage abstraction for dog records.
#[async_trait]
pub trait DogRepository: Send + Sync {
    /// Query dogs with sorting and pagination, returning the page and the
    /// total count before paging.
    async fn query(&self, query: &DogQuery) -> (Vec<Dog>, usize);

    /// Find a dog by exact name.
    async fn find_by_name(&self, name: &str) -> Option<Dog>;

    /// Insert a new dog.
    async fn insert(&self, dog: Dog);
}

/// In-memory repository holding dogs in insertion order.
pub struct InMemoryDogRepository {
    dogs: RwLock<Vec<Dog>>,
}

impl InMemoryDogRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self {
            dogs: RwLock::new(Vec::new()),
        }
    }

    /// Create a repository pre-populated with the standard seed records.
    pub fn seeded() -> Self {
        Self {
            dogs: RwLock::new(vec![
                Dog {
                    name: "Neo".to_string(),
                    color: "red&amber".to_string(),
                    tail_length: 22,
                    weight: 32,
                },
                Dog {
                    name: "Jessy".to_string(),
                    color: "black&white".to_string(),
                    tail_length: 7,
                    weight: 14,
                },
            ]),
        }
    }
}

impl Default for InMemoryDogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DogRepository for InMemoryDogRepository {
    async fn query(&self, query: &DogQuery) -> (Vec<Dog>, usize) {
        let mut dogs = self.dogs.read().await.clone();

        let descending = query
            .order
            .as_deref()
            .is_some_and(|o| o.eq_ignore_ascii_case("desc"));

        if let Some(attribute) = query.attribute.as_deref() {
            match attribute.to_ascii_lowercase().as_str() {
                "name" => dogs.sort_by(|a, b| a.name.cmp(&b.name)),
                "color" => dogs.sort_by(|a, b| a.color.cmp(&b.color)),
                "tail_length" => dogs.sort_by(|a, b| a.tail_length.cmp(&b.tail_length)),
                "weight" => dogs.sort_by(|a, b| a.weight.cmp(&b.weight)),
                // Unknown attribute: keep insertion order.
                _ => {}
            }
            if descending {
                dogs.reverse();
            }
        }

        let total = dogs.len();

        let page_number = query.page_number.max(1);
        let page_size = if query.page_size <= 0 {
            10
        } else {
            query.page_size
        };

        // Both paging values come straight from the query string; saturate
        // instead of overflowing on adversarial inputs.
        let skip = (page_number - 1)
            .saturating_mul(page_size)
            .try_into()
            .unwrap_or(usize::MAX);
        let items = dogs
            .into_iter()
            .skip(skip)
            .take(page_size as usize)
            .collect();

        (items, total)
    }

    async fn find_by_name(&self, name: &str) -> Option<Dog> {
        self.dogs
            .read()
            .await
            .iter()
            .find(|d| d.name == name)
            .cloned()
    }

    async fn insert(&self, dog: Dog) {
        self.dogs.write().await.push(dog);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dog(name: &str, color: &str, tail_length: i32, weight: i32) -> Dog {
        Dog {
            name: name.to_string(),
            color: color.to_string(),
            tail_length,
            weight,
        }
    }

    async fn sample_repo() -> InMemoryDogRepository {
        let repo = InMemoryDogRepository::new();
        repo.insert(dog("Neo", "red&amber", 22, 32)).await;
        repo.insert(dog("Jessy", "black&white", 7, 14)).await;
        repo.insert(dog("Ada", "brown", 12, 20)).await;
        repo
    }

    #[tokio::test]
    async fn test_query_unsorted_keeps_insertion_order() {
        let repo = sample_repo().await;
        let (items, total) = repo.query(&DogQuery::default()).await;

        assert_eq!(total, 3);
        let names: Vec<_> = items.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Neo", "Jessy", "Ada"]);
    }

    #[tokio::test]
    async fn test_sort_by_name_ascending() {
        let repo = sample_repo().await;
        let query = DogQuery {
            attribute: Some("name".to_string()),
            ..Default::default()
        };

        let (items, _) = repo.query(&query).await;
        let names: Vec<_> = items.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Ada", "Jessy", "Neo"]);
    }

    #[tokio::test]
    async fn test_sort_by_weight_descending() {
        let repo = sample_repo().await;
        let query = DogQuery {
            attribute: Some("weight".to_string()),
            order: Some("DESC".to_string()),
            ..Default::default()
        };

        let (items, _) = repo.query(&query).await;
        let weights: Vec<_> = items.iter().map(|d| d.weight).collect();
        assert_eq!(weights, [32, 20, 14]);
    }

    #[tokio::test]
    async fn test_sort_by_tail_length() {
        let repo = sample_repo().await;
        let query = DogQuery {
            attribute: Some("tail_length".to_string()),
            ..Default::default()
        };

        let (items, _) = repo.query(&query).await;
        let tails: Vec<_> = items.iter().map(|d| d.tail_length).collect();
        assert_eq!(tails, [7, 12, 22]);
    }

    #[tokio::test]
    async fn test_unknown_attribute_keeps_order() {
        let repo = sample_repo().await;
        let query = DogQuery {
            attribute: Some("age".to_string()),
            ..Default::default()
        };

        let (items, _) = repo.query(&query).await;
        assert_eq!(items[0].name, "Neo");
    }

    #[tokio::test]
    async fn test_pagination() {
        let repo = sample_repo().await;
        let query = DogQuery {
            page_number: 2,
            page_size: 2,
            ..Default::default()
        };

        let (items, total) = repo.query(&query).await;
        assert_eq!(total, 3);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Ada");
    }

    #[tokio::test]
    async fn test_pagination_clamps_invalid_values() {
        let repo = sample_repo().await;
        let query = DogQuery {
            page_number: -5,
            page_size: 0,
            ..Default::default()
        };

        // Page number clamps to 1, page size to 10.
        let (items, _) = repo.query(&query).await;
        assert_eq!(items.len(), 3);
    }

    #[tokio::test]
    async fn test_huge_page_number_yields_empty_page() {
        let repo = sample_repo().await;
        let query = DogQuery {
            page_number: i64::MAX,
            page_size: 2,
            ..Default::default()
        };

        let (items, total) = repo.query(&query).await;
        assert_eq!(total, 3);
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_find_by_name_is_exact() {
        let repo = sample_repo().await;

        assert!(repo.find_by_name("Neo").await.is_some());
        assert!(repo.find_by_name("neo").await.is_none());
        assert!(repo.find_by_name("Rex").await.is_none());
    }

    #[tokio::test]
    async fn test_seeded_repository() {
        let repo = InMemoryDogRepository::seeded();
        let (items, total) = repo.query(&DogQuery::default()).await;

        assert_eq!(total, 2);
        assert_eq!(items[0].name, "Neo");
        assert_eq!(items[1].name, "Jessy");
    }
}
