//! Demo data seeding
//!
//! Inserts a handful of demo space listings on first startup so a fresh
//! install has something to show. Runs only when the `spaces` table is
//! empty; an existing store is never touched.

use crate::models::space::{CreateSpace, Space};
use anyhow::Result;
use sqlx::SqlitePool;
use tracing::info;

/// Seeds three demo spaces if the `spaces` table is empty
pub async fn seed_demo_spaces(pool: &SqlitePool) -> Result<()> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM spaces")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        return Ok(());
    }

    info!("Seeding demo spaces...");

    let demos = vec![
        CreateSpace {
            title: "Cozy Downtown Loft".to_string(),
            description: "A bright open-plan loft in the heart of the city, steps from \
                          cafes, galleries, and public transit."
                .to_string(),
            price_per_night: 120.0,
            location: "Los Angeles, CA".to_string(),
            latitude: Some(34.0522),
            longitude: Some(-118.2437),
            capacity: 2,
            amenities: "WiFi, Kitchen, Air conditioning, Washer".to_string(),
            image_url: "https://images.spacerent.example/demo/loft.jpg".to_string(),
        },
        CreateSpace {
            title: "Beachside Bungalow".to_string(),
            description: "Wake up to the sound of waves. Private patio, outdoor shower, \
                          and a five-minute walk to the pier."
                .to_string(),
            price_per_night: 210.0,
            location: "Santa Monica, CA".to_string(),
            latitude: Some(34.0195),
            longitude: Some(-118.4912),
            capacity: 4,
            amenities: "WiFi, Beach access, Free parking, BBQ grill".to_string(),
            image_url: "https://images.spacerent.example/demo/bungalow.jpg".to_string(),
        },
        CreateSpace {
            title: "Mountain View Cabin".to_string(),
            description: "Rustic timber cabin with a wood stove and a wraparound deck \
                          overlooking the valley. No cell service, plenty of quiet."
                .to_string(),
            price_per_night: 95.0,
            location: "Big Bear Lake, CA".to_string(),
            latitude: Some(34.2439),
            longitude: Some(-116.9114),
            capacity: 6,
            amenities: "Fireplace, Hot tub, Hiking trails".to_string(),
            image_url: "https://images.spacerent.example/demo/cabin.jpg".to_string(),
        },
    ];

    let n = demos.len();
    for demo in demos {
        Space::create(pool, demo).await?;
    }

    info!("Seeded {} demo spaces", n);
    Ok(())
}
