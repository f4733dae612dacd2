//! Profiles service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;

use crate::domain::{
    identity::UserId,
    profiles::{
        errors::ProfilesServiceError,
        models::{ProfileUpdate, UserProfile},
        store::ProfileStore,
    },
};

/// Profiles service backed by the document store.
#[derive(Clone)]
pub struct DocProfilesService {
    store: Arc<dyn ProfileStore>,
}

impl DocProfilesService {
    #[must_use]
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProfilesService for DocProfilesService {
    async fn get_profile(&self, user: &UserId) -> Result<UserProfile, ProfilesServiceError> {
        self.store
            .get_profile(user)
            .await?
            .ok_or(ProfilesServiceError::NotFound)
    }

    async fn upsert_profile(
        &self,
        user: &UserId,
        update: ProfileUpdate,
    ) -> Result<UserProfile, ProfilesServiceError> {
        let now = Timestamp::now();

        let mut profile = self
            .store
            .get_profile(user)
            .await?
            .unwrap_or_else(|| UserProfile {
                email: String::new(),
                first_name: None,
                last_name: None,
                phone: None,
                photo_url: None,
                created_at: now,
                updated_at: now,
            });

        if let Some(email) = update.email {
            profile.email = email;
        }

        if let Some(first_name) = update.first_name {
            profile.first_name = Some(first_name);
        }

        if let Some(last_name) = update.last_name {
            profile.last_name = Some(last_name);
        }

        if let Some(phone) = update.phone {
            profile.phone = Some(phone);
        }

        if let Some(photo_url) = update.photo_url {
            profile.photo_url = Some(photo_url);
        }

        profile.updated_at = now;

        self.store.put_profile(user, profile.clone()).await?;

        Ok(profile)
    }
}

#[automock]
#[async_trait]
pub trait ProfilesService: Send + Sync {
    /// Retrieve the user's profile.
    async fn get_profile(&self, user: &UserId) -> Result<UserProfile, ProfilesServiceError>;

    /// Create or update the profile, merging only the provided fields.
    async fn upsert_profile(
        &self,
        user: &UserId,
        update: ProfileUpdate,
    ) -> Result<UserProfile, ProfilesServiceError>;
}
