//! Profile store boundary.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::{identity::UserId, profiles::models::UserProfile},
    store::StoreError,
};

/// One profile document per user.
#[automock]
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch the user's profile, or `None` when never written.
    async fn get_profile(&self, user: &UserId) -> Result<Option<UserProfile>, StoreError>;

    /// Write the user's profile wholesale, last write wins.
    async fn put_profile(&self, user: &UserId, profile: UserProfile) -> Result<(), StoreError>;
}
