// Unit tests over the library surface

use campus_rideshare::core::{compatibility_score, suggest_payment, Recommender};
use campus_rideshare::models::{
    CompatibilityWeights, PaymentParams, RatingDraft, UserDraft, UserPatch, UserProfile,
};
use campus_rideshare::store::Store;

fn profile(id: i64, location: &str, times: &str, major: &str, extras: &str) -> UserProfile {
    UserProfile {
        id,
        name: format!("User {}", id),
        bio: String::new(),
        location: location.to_string(),
        typical_driving_times: times.to_string(),
        contact_info: String::new(),
        parking_pass: String::new(),
        major: major.to_string(),
        extracurriculars: extras.to_string(),
    }
}

#[test]
fn test_compatibility_commutative_over_samples() {
    let weights = CompatibilityWeights::default();
    let profiles = [
        profile(1, "North", "Morning", "Chemistry", "Band"),
        profile(2, "North", "", "Chemistry", ""),
        profile(3, "South", "Evening", "", "Band"),
        profile(4, "", "", "", ""),
    ];

    for a in &profiles {
        for b in &profiles {
            assert_eq!(
                compatibility_score(a, b, &weights),
                compatibility_score(b, a, &weights),
                "score must be commutative for {} and {}",
                a.id,
                b.id
            );
        }
    }
}

#[test]
fn test_compatibility_zero_without_shared_attributes() {
    let weights = CompatibilityWeights::default();
    let a = profile(1, "North", "Morning", "Chemistry", "Band");
    let b = profile(2, "South", "Evening", "History", "Chess");

    assert_eq!(compatibility_score(&a, &b, &weights), 0);
}

#[test]
fn test_payment_monotonic_in_both_arguments() {
    let params = PaymentParams::default();

    for distance in 0..20 {
        for price_tenths in 0..20 {
            let base = suggest_payment(distance as f64, price_tenths as f64 / 10.0, &params);
            let longer = suggest_payment((distance + 1) as f64, price_tenths as f64 / 10.0, &params);
            let pricier = suggest_payment(distance as f64, (price_tenths + 1) as f64 / 10.0, &params);
            assert!(longer >= base);
            assert!(pricier >= base);
        }
    }
}

#[test]
fn test_payment_golden_values() {
    let params = PaymentParams::default();
    assert_eq!(suggest_payment(0.0, 0.0, &params), 2.5);
    assert_eq!(suggest_payment(10.0, 3.5, &params), 5.16);
}

#[test]
fn test_recommender_scenario_from_the_matching_heuristic() {
    let recommender = Recommender::with_default_weights();
    let a = profile(1, "North", "Morning", "Chem", "Band");
    let b = profile(2, "North", "Morning", "Chem", "Band");
    let c = profile(3, "South", "Evening", "History", "");

    let ranked = recommender.rank(&a, vec![a.clone(), b.clone(), c.clone()], None);

    assert_eq!(ranked[0].user.id, b.id);
    assert_eq!(ranked[0].score, 8);
    assert_eq!(ranked[1].user.id, c.id);
    assert_eq!(ranked[1].score, 0);
}

#[tokio::test]
async fn test_store_round_trip() {
    let store = Store::new();

    let created = store
        .create_user(UserDraft {
            name: "Jordan".to_string(),
            location: "Campus Village".to_string(),
            ..UserDraft::default()
        })
        .await;

    let fetched = store.get_user(created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_store_update_then_delete() {
    let store = Store::new();
    let user = store
        .create_user(UserDraft {
            name: "Alex".to_string(),
            ..UserDraft::default()
        })
        .await;

    let updated = store
        .update_user(
            user.id,
            UserPatch {
                bio: Some("Night commuter".to_string()),
                ..UserPatch::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.bio, "Night commuter");
    assert_eq!(updated.name, "Alex");

    assert!(store.delete_user(user.id).await);
    assert!(store.get_user(user.id).await.is_none());
    assert!(!store.delete_user(user.id).await);
}

#[tokio::test]
async fn test_store_rating_filter_preserves_creation_order() {
    let store = Store::new();

    for (to, score) in [(7, 5), (8, 1), (7, 3)] {
        store
            .add_rating(RatingDraft {
                from_user_id: 1,
                to_user_id: to,
                role: "driver".to_string(),
                score,
                comments: String::new(),
            })
            .await;
    }

    let for_seven = store.list_ratings(Some(7)).await;
    let scores: Vec<i64> = for_seven.iter().map(|rating| rating.score).collect();
    assert_eq!(scores, vec![5, 3]);

    let all = store.list_ratings(None).await;
    assert_eq!(all.len(), 3);
}
