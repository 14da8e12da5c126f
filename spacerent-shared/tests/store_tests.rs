/// Store-level integration tests
///
/// These run against an in-memory SQLite database: migrations are applied
/// to a fresh store, then the model operations are exercised directly.
/// The pool is capped at a single connection, since `sqlite::memory:` opens
/// an independent database per connection.

use spacerent_shared::db::migrations::run_migrations;
use spacerent_shared::db::seed::seed_demo_spaces;
use spacerent_shared::models::booking::{Booking, CreateBooking, UpdateBooking};
use spacerent_shared::models::review::{CreateReview, Review};
use spacerent_shared::models::space::{CreateSpace, Space, UpdateSpace};
use spacerent_shared::models::user::{CreateUser, User};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .unwrap();

    run_migrations(&pool).await.unwrap();
    pool
}

fn sample_user(n: u32) -> CreateUser {
    CreateUser {
        username: format!("guest{}", n),
        email: format!("guest{}@example.com", n),
        full_name: String::new(),
        profile_picture: String::new(),
        password_hash: String::new(),
    }
}

fn sample_space() -> CreateSpace {
    CreateSpace {
        title: "Loft".to_string(),
        description: "x".to_string(),
        price_per_night: 100.0,
        location: "LA".to_string(),
        latitude: None,
        longitude: None,
        capacity: 2,
        amenities: String::new(),
        image_url: String::new(),
    }
}

async fn sample_booking(pool: &SqlitePool) -> Booking {
    let user = User::create(pool, sample_user(1)).await.unwrap();
    let space = Space::create(pool, sample_space()).await.unwrap();

    Booking::create(
        pool,
        CreateBooking {
            user_id: user.id,
            space_id: space.id,
            check_in_date: "2025-06-01".to_string(),
            check_out_date: "2025-06-05".to_string(),
            guests: 1,
            total_price: 400.0,
        },
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn migrations_create_all_four_tables() {
    let pool = test_pool().await;

    for table in ["users", "spaces", "bookings", "reviews"] {
        let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0, "table {} should exist and be empty", table);
    }
}

#[tokio::test]
async fn space_create_then_fetch_round_trips() {
    let pool = test_pool().await;

    let created = Space::create(&pool, sample_space()).await.unwrap();
    assert_eq!(created.capacity, 2);
    assert_eq!(created.amenities, "");
    assert_eq!(created.image_url, "");

    let fetched = Space::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.title, created.title);
    assert_eq!(fetched.price_per_night, created.price_per_night);
    assert_eq!(fetched.created_at, created.created_at);
}

#[tokio::test]
async fn space_ids_are_assigned_in_insertion_order() {
    let pool = test_pool().await;

    let first = Space::create(&pool, sample_space()).await.unwrap();
    let second = Space::create(&pool, sample_space()).await.unwrap();
    assert!(second.id > first.id);

    let listed = Space::list(&pool).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, first.id);
    assert_eq!(listed[1].id, second.id);
}

#[tokio::test]
async fn space_partial_update_preserves_unset_fields() {
    let pool = test_pool().await;
    let created = Space::create(&pool, sample_space()).await.unwrap();

    let updated = Space::update(
        &pool,
        created.id,
        UpdateSpace {
            title: Some("Bigger Loft".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.title, "Bigger Loft");
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.price_per_night, created.price_per_night);
    assert_eq!(updated.location, created.location);
    assert_eq!(updated.capacity, created.capacity);
}

#[tokio::test]
async fn space_update_unknown_id_returns_none() {
    let pool = test_pool().await;

    let result = Space::update(
        &pool,
        9999,
        UpdateSpace {
            title: Some("ghost".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn space_delete_then_fetch_returns_none() {
    let pool = test_pool().await;
    let created = Space::create(&pool, sample_space()).await.unwrap();

    assert!(Space::delete(&pool, created.id).await.unwrap());
    assert!(Space::find_by_id(&pool, created.id).await.unwrap().is_none());
    assert!(!Space::delete(&pool, created.id).await.unwrap());
}

#[tokio::test]
async fn space_with_bookings_has_dependents() {
    let pool = test_pool().await;
    let booking = sample_booking(&pool).await;

    assert!(Space::has_dependents(&pool, booking.space_id).await.unwrap());

    // FK enforcement backstops the restrict policy
    assert!(Space::delete(&pool, booking.space_id).await.is_err());
}

#[tokio::test]
async fn duplicate_username_is_a_constraint_violation() {
    let pool = test_pool().await;

    User::create(&pool, sample_user(1)).await.unwrap();

    let mut dup = sample_user(2);
    dup.username = "guest1".to_string();
    let err = User::create(&pool, dup).await.unwrap_err();
    assert!(err.to_string().contains("UNIQUE constraint failed"));
}

#[tokio::test]
async fn booking_starts_pending_with_defaults() {
    let pool = test_pool().await;
    let booking = sample_booking(&pool).await;

    assert_eq!(booking.status, "pending");
    assert_eq!(booking.guests, 1);
    assert_eq!(booking.total_price, 400.0);
}

#[tokio::test]
async fn booking_with_unknown_space_is_rejected_by_the_store() {
    let pool = test_pool().await;
    let user = User::create(&pool, sample_user(1)).await.unwrap();

    let err = Booking::create(
        &pool,
        CreateBooking {
            user_id: user.id,
            space_id: 424242,
            check_in_date: "2025-06-01".to_string(),
            check_out_date: "2025-06-05".to_string(),
            guests: 1,
            total_price: 400.0,
        },
    )
    .await
    .unwrap_err();

    assert!(err.to_string().contains("FOREIGN KEY constraint failed"));
}

#[tokio::test]
async fn confirm_if_pending_transitions_exactly_once() {
    let pool = test_pool().await;
    let booking = sample_booking(&pool).await;

    let first = Booking::confirm_if_pending(&pool, booking.id).await.unwrap();
    assert_eq!(first.unwrap().status, "confirmed");

    // Second attempt finds no pending row to claim
    let second = Booking::confirm_if_pending(&pool, booking.id).await.unwrap();
    assert!(second.is_none());

    let current = Booking::find_by_id(&pool, booking.id).await.unwrap().unwrap();
    assert_eq!(current.status, "confirmed");
}

#[tokio::test]
async fn concurrent_confirms_have_a_single_winner() {
    let pool = test_pool().await;
    let booking = sample_booking(&pool).await;

    let (a, b) = tokio::join!(
        Booking::confirm_if_pending(&pool, booking.id),
        Booking::confirm_if_pending(&pool, booking.id),
    );

    let wins = [a.unwrap(), b.unwrap()]
        .into_iter()
        .flatten()
        .count();
    assert_eq!(wins, 1);
}

#[tokio::test]
async fn cancel_if_pending_mirrors_confirm() {
    let pool = test_pool().await;
    let booking = sample_booking(&pool).await;

    let cancelled = Booking::cancel_if_pending(&pool, booking.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(cancelled.status, "cancelled");

    // A cancelled booking can neither be cancelled again nor paid
    assert!(Booking::cancel_if_pending(&pool, booking.id)
        .await
        .unwrap()
        .is_none());
    assert!(Booking::confirm_if_pending(&pool, booking.id)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn booking_partial_update_preserves_unset_fields() {
    let pool = test_pool().await;
    let booking = sample_booking(&pool).await;

    let updated = Booking::update(
        &pool,
        booking.id,
        UpdateBooking {
            guests: Some(3),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.guests, 3);
    assert_eq!(updated.check_in_date, booking.check_in_date);
    assert_eq!(updated.check_out_date, booking.check_out_date);
    assert_eq!(updated.status, booking.status);
}

#[tokio::test]
async fn review_create_and_list() {
    let pool = test_pool().await;
    let user = User::create(&pool, sample_user(1)).await.unwrap();
    let space = Space::create(&pool, sample_space()).await.unwrap();

    let review = Review::create(
        &pool,
        CreateReview {
            user_id: user.id,
            space_id: space.id,
            rating: 5,
            comment: "Great stay".to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(review.rating, 5);

    let listed = Review::list(&pool).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, review.id);
    assert_eq!(listed[0].comment, "Great stay");
}

#[tokio::test]
async fn seeding_runs_once_and_only_on_an_empty_store() {
    let pool = test_pool().await;

    seed_demo_spaces(&pool).await.unwrap();
    let seeded = Space::list(&pool).await.unwrap();
    assert_eq!(seeded.len(), 3);

    // Second run is a no-op
    seed_demo_spaces(&pool).await.unwrap();
    assert_eq!(Space::list(&pool).await.unwrap().len(), 3);
}
