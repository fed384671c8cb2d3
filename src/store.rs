use std::collections::BTreeMap;

use tokio::sync::RwLock;

use crate::models::{
    IssueDraft, IssueReport, Rating, RatingDraft, UserDraft, UserPatch, UserProfile,
};

#[derive(Debug, Default)]
struct StoreInner {
    users: BTreeMap<i64, UserProfile>,
    ratings: Vec<Rating>,
    issues: Vec<IssueReport>,
    next_user_id: i64,
    next_rating_id: i64,
    next_issue_id: i64,
}

/// Process-wide in-memory state: users, ratings, issues, and their id
/// sequences.
///
/// One `RwLock` guards everything, so id allocation and insertion happen
/// in a single critical section; reads run concurrently with each other
/// but never with a mutation. Users live in a `BTreeMap` keyed by id, so
/// listing order is id-ascending, which is also creation order.
#[derive(Debug, Default)]
pub struct Store {
    inner: RwLock<StoreInner>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list_users(&self) -> Vec<UserProfile> {
        self.inner.read().await.users.values().cloned().collect()
    }

    pub async fn create_user(&self, draft: UserDraft) -> UserProfile {
        let mut inner = self.inner.write().await;
        inner.next_user_id += 1;
        let user = UserProfile {
            id: inner.next_user_id,
            name: draft.name,
            bio: draft.bio,
            location: draft.location,
            typical_driving_times: draft.typical_driving_times,
            contact_info: draft.contact_info,
            parking_pass: draft.parking_pass,
            major: draft.major,
            extracurriculars: draft.extracurriculars,
        };
        inner.users.insert(user.id, user.clone());
        user
    }

    pub async fn get_user(&self, id: i64) -> Option<UserProfile> {
        self.inner.read().await.users.get(&id).cloned()
    }

    /// Apply a partial update, returning the updated profile, or `None`
    /// if the user does not exist.
    pub async fn update_user(&self, id: i64, patch: UserPatch) -> Option<UserProfile> {
        let mut inner = self.inner.write().await;
        let user = inner.users.get_mut(&id)?;
        patch.apply(user);
        Some(user.clone())
    }

    /// Remove a profile. Ratings and issues referencing the id are kept
    /// and may dangle.
    pub async fn delete_user(&self, id: i64) -> bool {
        self.inner.write().await.users.remove(&id).is_some()
    }

    /// Ratings received by a user, in creation order, or `None` if the
    /// user does not exist.
    pub async fn reviews_for(&self, user_id: i64) -> Option<Vec<Rating>> {
        let inner = self.inner.read().await;
        if !inner.users.contains_key(&user_id) {
            return None;
        }
        Some(
            inner
                .ratings
                .iter()
                .filter(|rating| rating.to_user_id == user_id)
                .cloned()
                .collect(),
        )
    }

    pub async fn add_rating(&self, draft: RatingDraft) -> Rating {
        let mut inner = self.inner.write().await;
        inner.next_rating_id += 1;
        let rating = Rating {
            id: inner.next_rating_id,
            from_user_id: draft.from_user_id,
            to_user_id: draft.to_user_id,
            role: draft.role,
            score: draft.score,
            comments: draft.comments,
        };
        inner.ratings.push(rating.clone());
        rating
    }

    pub async fn list_ratings(&self, to_user_id: Option<i64>) -> Vec<Rating> {
        let inner = self.inner.read().await;
        match to_user_id {
            Some(id) => inner
                .ratings
                .iter()
                .filter(|rating| rating.to_user_id == id)
                .cloned()
                .collect(),
            None => inner.ratings.clone(),
        }
    }

    pub async fn add_issue(&self, draft: IssueDraft) -> IssueReport {
        let mut inner = self.inner.write().await;
        inner.next_issue_id += 1;
        let issue = IssueReport {
            id: inner.next_issue_id,
            user_id: draft.user_id,
            message: draft.message,
            category: draft.category,
            metadata: draft.metadata,
        };
        inner.issues.push(issue.clone());
        issue
    }

    pub async fn list_issues(&self) -> Vec<IssueReport> {
        self.inner.read().await.issues.clone()
    }

    /// Drop every record and restart the id sequences. Test support; the
    /// running service never calls this.
    pub async fn reset(&self) {
        *self.inner.write().await = StoreInner::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> UserDraft {
        UserDraft {
            name: name.to_string(),
            ..UserDraft::default()
        }
    }

    #[tokio::test]
    async fn test_user_ids_are_monotonic() {
        let store = Store::new();

        let first = store.create_user(draft("A")).await;
        let second = store.create_user(draft("B")).await;
        let third = store.create_user(draft("C")).await;

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn test_deleted_id_is_never_reused() {
        let store = Store::new();

        let first = store.create_user(draft("A")).await;
        assert!(store.delete_user(first.id).await);

        let second = store.create_user(draft("B")).await;
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_list_users_in_creation_order() {
        let store = Store::new();

        for name in ["A", "B", "C"] {
            store.create_user(draft(name)).await;
        }

        let names: Vec<String> = store
            .list_users()
            .await
            .into_iter()
            .map(|user| user.name)
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_update_applies_only_present_fields() {
        let store = Store::new();
        let user = store
            .create_user(UserDraft {
                name: "Alex".to_string(),
                bio: "Original bio".to_string(),
                ..UserDraft::default()
            })
            .await;

        let updated = store
            .update_user(
                user.id,
                UserPatch {
                    location: Some("North Lot".to_string()),
                    ..UserPatch::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.bio, "Original bio");
        assert_eq!(updated.location, "North Lot");
    }

    #[tokio::test]
    async fn test_delete_keeps_ratings() {
        let store = Store::new();
        let user = store.create_user(draft("A")).await;

        store
            .add_rating(RatingDraft {
                from_user_id: 99,
                to_user_id: user.id,
                role: "driver".to_string(),
                score: 5,
                comments: String::new(),
            })
            .await;

        store.delete_user(user.id).await;

        let remaining = store.list_ratings(Some(user.id)).await;
        assert_eq!(remaining.len(), 1);
    }

    #[tokio::test]
    async fn test_reviews_for_missing_user_is_none() {
        let store = Store::new();
        assert!(store.reviews_for(42).await.is_none());
    }

    #[tokio::test]
    async fn test_reset_restarts_sequences() {
        let store = Store::new();
        store.create_user(draft("A")).await;
        store.create_user(draft("B")).await;

        store.reset().await;

        assert!(store.list_users().await.is_empty());
        let fresh = store.create_user(draft("C")).await;
        assert_eq!(fresh.id, 1);
    }
}
