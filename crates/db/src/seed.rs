//! First-run seed data.
//!
//! When the store is empty, populates a small default catalog and a
//! three-slide hero carousel so a fresh deployment renders something.
//! Each collection is seeded independently and only when it has no
//! active rows, so re-running is harmless.

use sqlx::PgPool;

use crate::repositories::{HeroSlideRepo, ProductRepo};

struct SeedProduct {
    name: &'static str,
    category: &'static str,
    price: i64,
    old_price: Option<i64>,
    image: &'static str,
    badge: Option<&'static str>,
    description: Option<&'static str>,
}

const DEFAULT_PRODUCTS: &[SeedProduct] = &[
    SeedProduct {
        name: "iPhone 16 Pro",
        category: "iphone",
        price: 12_990_000,
        old_price: Some(13_990_000),
        image: "https://images.unsplash.com/photo-1592899677979-23fc1399db67?w=800&h=600&fit=crop",
        badge: Some("Yangi"),
        description: Some("A18 Pro chip, Pro camera system, Action Button"),
    },
    SeedProduct {
        name: "iPhone 16",
        category: "iphone",
        price: 9_990_000,
        old_price: None,
        image: "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?w=800&h=600&fit=crop",
        badge: None,
        description: Some("A18 chip, Advanced dual-camera system"),
    },
    SeedProduct {
        name: "MacBook Pro 14\"",
        category: "macbook",
        price: 21_990_000,
        old_price: Some(23_990_000),
        image: "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?w=800&h=600&fit=crop",
        badge: Some("Chegirma"),
        description: Some("M3 Pro chip, 14.2-inch Liquid Retina XDR display"),
    },
    SeedProduct {
        name: "iPad Pro",
        category: "ipad",
        price: 1_990_000,
        old_price: None,
        image: "https://images.unsplash.com/photo-1512499617640-c74ae3a79d37?w=800&h=600&fit=crop",
        badge: None,
        description: None,
    },
    SeedProduct {
        name: "Apple Watch Ultra 2",
        category: "watch",
        price: 7_990_000,
        old_price: Some(8_990_000),
        image: "https://images.unsplash.com/photo-1524592094714-0f0652a74e95?w=800&h=600&fit=crop",
        badge: Some("Yangi"),
        description: None,
    },
    SeedProduct {
        name: "AirPods Pro 2",
        category: "airpods",
        price: 2_490_000,
        old_price: None,
        image: "https://images.unsplash.com/photo-1579586144249-f12c90ee2154?w=800&h=600&fit=crop",
        badge: None,
        description: None,
    },
];

const DEFAULT_SLIDES: &[(&str, &str, &str)] = &[
    (
        "iPhone Air",
        "Скоро в продаже.",
        "https://images.unsplash.com/photo-1592899677979-23fc1399db67?ixlib=rb-4.0.3&w=1920&h=1080&fit=crop",
    ),
    (
        "iPhone 16 Pro",
        "The ultimate iPhone.",
        "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?ixlib=rb-4.0.3&w=1920&h=1080&fit=crop",
    ),
    (
        "MacBook Pro",
        "Supercharged by M4.",
        "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?ixlib=rb-4.0.3&w=1920&h=1080&fit=crop",
    ),
];

/// Seed both collections if they are empty.
pub async fn seed_default_data(pool: &PgPool) -> Result<(), sqlx::Error> {
    seed_products(pool).await?;
    seed_hero_slides(pool).await?;
    Ok(())
}

async fn seed_products(pool: &PgPool) -> Result<(), sqlx::Error> {
    let existing = ProductRepo::count_active(pool).await?;
    if existing > 0 {
        tracing::debug!(existing, "Products already present, skipping seed");
        return Ok(());
    }

    for p in DEFAULT_PRODUCTS {
        sqlx::query(
            "INSERT INTO products (name, category, price, old_price, image, badge, description)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(p.name)
        .bind(p.category)
        .bind(p.price)
        .bind(p.old_price)
        .bind(p.image)
        .bind(p.badge)
        .bind(p.description)
        .execute(pool)
        .await?;
    }
    tracing::info!(count = DEFAULT_PRODUCTS.len(), "Seeded default products");
    Ok(())
}

async fn seed_hero_slides(pool: &PgPool) -> Result<(), sqlx::Error> {
    let existing = HeroSlideRepo::count_active_slides(pool).await?;
    if existing > 0 {
        tracing::debug!(existing, "Hero slides already present, skipping seed");
        return Ok(());
    }

    for (order, (title, subtitle, image)) in DEFAULT_SLIDES.iter().enumerate() {
        sqlx::query(
            "INSERT INTO hero_slides (title, subtitle, image, sort_order)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(title)
        .bind(subtitle)
        .bind(image)
        .bind(order as i32)
        .execute(pool)
        .await?;
    }
    tracing::info!(count = DEFAULT_SLIDES.len(), "Seeded default hero slides");
    Ok(())
}
