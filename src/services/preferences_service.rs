//! Preferencias de conducción

use std::sync::Arc;
use validator::Validate;

use crate::models::UserPreferences;
use crate::repositories::PreferencesRepository;
use crate::utils::clock::Clock;
use crate::utils::errors::AppResult;

#[derive(Clone)]
pub struct PreferencesService {
    repository: PreferencesRepository,
    clock: Arc<dyn Clock>,
}

impl PreferencesService {
    pub fn new(repository: PreferencesRepository, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Crear o actualizar las preferencias del usuario
    pub async fn save_preferences(&self, user_id: &str, preferences: &UserPreferences) -> AppResult<()> {
        preferences.validate()?;
        let now = self.clock.now();

        match self.repository.find_by_user(user_id).await? {
            Some((id, _)) => self.repository.update(&id, preferences, now).await?,
            None => {
                self.repository.create(user_id, preferences, now).await?;
            }
        }

        log::info!("💾 Preferencias guardadas para usuario {}", user_id);
        Ok(())
    }

    /// Preferencias guardadas o valores por defecto
    pub async fn get_preferences(&self, user_id: &str) -> AppResult<UserPreferences> {
        Ok(self
            .repository
            .find_by_user(user_id)
            .await?
            .map(|(_, preferences)| preferences)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{DocumentStore, MemoryDocumentStore};
    use crate::models::PlannedTrip;
    use crate::utils::clock::SystemClock;
    use crate::utils::errors::AppError;

    fn service() -> (Arc<MemoryDocumentStore>, PreferencesService) {
        let store = Arc::new(MemoryDocumentStore::new());
        let dyn_store: Arc<dyn DocumentStore> = store.clone();
        let service = PreferencesService::new(PreferencesRepository::new(dyn_store), Arc::new(SystemClock));
        (store, service)
    }

    #[tokio::test]
    async fn test_defaults_without_record() {
        let (_, service) = service();
        let preferences = service.get_preferences("u1").await.unwrap();
        assert_eq!(preferences, UserPreferences::default());
    }

    #[tokio::test]
    async fn test_save_creates_then_updates() {
        let (store, service) = service();
        let mut preferences = UserPreferences {
            avg_daily_km: 60.0,
            planned_trip: Some(PlannedTrip {
                destination: "Pune".to_string(),
                distance: 150.0,
            }),
            ..UserPreferences::default()
        };

        service.save_preferences("u1", &preferences).await.unwrap();
        assert_eq!(store.insert_count(), 1);

        preferences.planned_trip = None;
        preferences.charging_goal = 90;
        service.save_preferences("u1", &preferences).await.unwrap();
        assert_eq!(store.insert_count(), 1);
        assert_eq!(store.update_count(), 1);

        let stored = service.get_preferences("u1").await.unwrap();
        assert_eq!(stored.avg_daily_km, 60.0);
        assert_eq!(stored.charging_goal, 90);
        assert!(stored.planned_trip.is_none());
    }

    #[tokio::test]
    async fn test_invalid_preferences_are_rejected() {
        let (store, service) = service();
        let preferences = UserPreferences {
            avg_daily_km: 0.0,
            ..UserPreferences::default()
        };
        let result = service.save_preferences("u1", &preferences).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(store.query_count(), 0);
    }
}
