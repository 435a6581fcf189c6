//! Typed catalog queries over the upstream `ExerciseDB` endpoints.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::cache::ResponseCache;
use crate::fetch::{ExerciseDbFetcher, FetchError, encode_path_segment};
use crate::model::Exercise;

#[derive(Debug)]
pub enum CatalogError {
    Fetch(FetchError),
    Decode(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch(err) => write!(f, "{err}"),
            Self::Decode(message) => write!(f, "unexpected upstream payload: {message}"),
        }
    }
}

impl Error for CatalogError {}

impl From<FetchError> for CatalogError {
    fn from(err: FetchError) -> Self {
        Self::Fetch(err)
    }
}

/// Cached, typed access to the exercise database.
///
/// Generic over the fetcher so tests can run against canned payloads. The
/// cache is shared across clones and lives for the whole process.
pub struct ExerciseCatalog<F: ExerciseDbFetcher> {
    fetcher: Arc<F>,
    cache: Arc<ResponseCache>,
    use_cache: bool,
}

impl<F: ExerciseDbFetcher> Clone for ExerciseCatalog<F> {
    fn clone(&self) -> Self {
        Self {
            fetcher: self.fetcher.clone(),
            cache: self.cache.clone(),
            use_cache: self.use_cache,
        }
    }
}

impl<F: ExerciseDbFetcher> ExerciseCatalog<F> {
    pub fn new(fetcher: F) -> Self {
        Self::with_fetcher(Arc::new(fetcher))
    }

    pub fn with_fetcher(fetcher: Arc<F>) -> Self {
        Self {
            fetcher,
            cache: Arc::new(ResponseCache::new()),
            use_cache: true,
        }
    }

    /// Disables the response cache; every query hits the upstream.
    #[must_use]
    pub fn without_cache(mut self) -> Self {
        self.use_cache = false;
        self
    }

    /// Raw cached fetch; returns the parsed JSON body.
    ///
    /// # Errors
    /// Returns `CatalogError::Fetch` when the upstream is unreachable or
    /// answers with an error status.
    pub async fn fetch_cached(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<Value, CatalogError> {
        let key = ResponseCache::key(endpoint, params);
        if self.use_cache
            && let Some(cached) = self.cache.get(&key).await
        {
            return Ok(cached);
        }

        let value = self.fetcher.fetch_json(endpoint, params).await?;
        if self.use_cache {
            self.cache.insert(key, value.clone()).await;
        }
        Ok(value)
    }

    async fn fetch_decoded<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, CatalogError> {
        let value = self.fetch_cached(endpoint, &[]).await?;
        serde_json::from_value(value).map_err(|err| CatalogError::Decode(err.to_string()))
    }

    /// Fetches the full exercise list.
    ///
    /// # Errors
    /// Returns `CatalogError` on fetch or decode failure.
    pub async fn all_exercises(&self) -> Result<Vec<Exercise>, CatalogError> {
        self.fetch_decoded("/exercises").await
    }

    /// Fetches a single exercise by its upstream id.
    ///
    /// # Errors
    /// Returns `CatalogError` on fetch or decode failure; an unknown id
    /// surfaces as an upstream error status.
    pub async fn exercise_by_id(&self, exercise_id: &str) -> Result<Exercise, CatalogError> {
        let endpoint = format!(
            "/exercises/exercise/{}",
            encode_path_segment(exercise_id.trim())
        );
        self.fetch_decoded(&endpoint).await
    }

    /// Fetches exercises for a body part (lowercased before the request).
    ///
    /// # Errors
    /// Returns `CatalogError` on fetch or decode failure.
    pub async fn by_body_part(&self, body_part: &str) -> Result<Vec<Exercise>, CatalogError> {
        let endpoint = format!(
            "/exercises/bodyPart/{}",
            encode_path_segment(&body_part.to_lowercase())
        );
        self.fetch_decoded(&endpoint).await
    }

    /// Fetches exercises for a target muscle (lowercased before the request).
    ///
    /// # Errors
    /// Returns `CatalogError` on fetch or decode failure.
    pub async fn by_target(&self, target_muscle: &str) -> Result<Vec<Exercise>, CatalogError> {
        let endpoint = format!(
            "/exercises/target/{}",
            encode_path_segment(&target_muscle.to_lowercase())
        );
        self.fetch_decoded(&endpoint).await
    }

    /// Fetches exercises for an equipment type (lowercased before the request).
    ///
    /// # Errors
    /// Returns `CatalogError` on fetch or decode failure.
    pub async fn by_equipment(&self, equipment: &str) -> Result<Vec<Exercise>, CatalogError> {
        let endpoint = format!(
            "/exercises/equipment/{}",
            encode_path_segment(&equipment.to_lowercase())
        );
        self.fetch_decoded(&endpoint).await
    }

    /// Fetches the upstream body-part taxonomy.
    ///
    /// # Errors
    /// Returns `CatalogError` on fetch or decode failure.
    pub async fn body_part_list(&self) -> Result<Vec<String>, CatalogError> {
        self.fetch_decoded("/exercises/bodyPartList").await
    }

    /// Fetches the upstream target-muscle taxonomy.
    ///
    /// # Errors
    /// Returns `CatalogError` on fetch or decode failure.
    pub async fn target_list(&self) -> Result<Vec<String>, CatalogError> {
        self.fetch_decoded("/exercises/targetList").await
    }

    /// Fetches the upstream equipment taxonomy.
    ///
    /// # Errors
    /// Returns `CatalogError` on fetch or decode failure.
    pub async fn equipment_list(&self) -> Result<Vec<String>, CatalogError> {
        self.fetch_decoded("/exercises/equipmentList").await
    }
}
