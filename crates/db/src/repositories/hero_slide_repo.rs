//! Repository for the `hero_slides` table.
//!
//! Every mutation that renumbers siblings (insert, reposition, remove,
//! activate/deactivate) runs as one transaction guarded by a collection
//! advisory lock, so concurrent renumbers serialize and the contiguous
//! `sort_order` invariant holds between completed operations.

use sqlx::PgPool;
use vitrina_core::ordering::{
    self, clamp_insert_order, clamp_reposition_order, insert_shift, removal_shift,
    reposition_shift, Shift,
};
use vitrina_core::types::DbId;

use crate::models::hero_slide::{CreateHeroSlide, HeroSlide, UpdateHeroSlide};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, subtitle, image, sort_order, is_active, \
    created_at, updated_at";

/// Advisory lock key serializing renumber transactions on this collection.
const SLIDE_ORDER_LOCK: i64 = 0x6865_726f; // "hero"

/// Provides data access and order maintenance for hero slides.
pub struct HeroSlideRepo;

impl HeroSlideRepo {
    /// List slides ordered for display: `sort_order` ascending, ties broken
    /// by newest first. `active_only` restricts to active slides.
    pub async fn list(pool: &PgPool, active_only: bool) -> Result<Vec<HeroSlide>, sqlx::Error> {
        let where_clause = if active_only {
            "WHERE is_active = TRUE"
        } else {
            ""
        };
        let query = format!(
            "SELECT {COLUMNS} FROM hero_slides {where_clause} \
             ORDER BY sort_order ASC, created_at DESC"
        );
        sqlx::query_as::<_, HeroSlide>(&query).fetch_all(pool).await
    }

    /// Find a slide by id (active or not).
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<HeroSlide>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hero_slides WHERE id = $1");
        sqlx::query_as::<_, HeroSlide>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a slide at the requested position.
    ///
    /// If the slide is active, the position is clamped into `[0, k]` and
    /// every active slide at that position or later is shifted up by one
    /// before the insert; an inactive slide takes no slot and shifts
    /// nothing. All-or-nothing: any failure rolls the whole operation back.
    pub async fn insert(pool: &PgPool, input: &CreateHeroSlide) -> Result<HeroSlide, sqlx::Error> {
        let mut tx = pool.begin().await?;
        lock_collection(&mut tx).await?;

        let is_active = input.is_active.unwrap_or(true);
        let desired = input.sort_order.unwrap_or(ordering::ORDER_BASE);

        let sort_order = if is_active {
            let active_count = count_active(&mut tx).await?;
            let order = clamp_insert_order(desired, active_count);
            apply_shift(&mut tx, insert_shift(order), None).await?;
            order
        } else {
            desired.max(ordering::ORDER_BASE)
        };

        let query = format!(
            "INSERT INTO hero_slides (title, subtitle, image, sort_order, is_active)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let slide = sqlx::query_as::<_, HeroSlide>(&query)
            .bind(input.title.trim())
            .bind(input.subtitle.trim())
            .bind(input.image.trim())
            .bind(sort_order)
            .bind(is_active)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(id = slide.id, order = slide.sort_order, "Hero slide inserted");
        Ok(slide)
    }

    /// Update a slide, repositioning siblings as needed.
    ///
    /// Order changes shift exactly the displaced range; activation changes
    /// claim or release an order slot. Field updates and the renumbering
    /// commit together. Returns `None` if the slide does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateHeroSlide,
    ) -> Result<Option<HeroSlide>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        lock_collection(&mut tx).await?;

        let query = format!("SELECT {COLUMNS} FROM hero_slides WHERE id = $1 FOR UPDATE");
        let Some(existing) = sqlx::query_as::<_, HeroSlide>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let was_active = existing.is_active;
        let now_active = input.is_active.unwrap_or(was_active);
        let desired = input.sort_order.unwrap_or(existing.sort_order);

        let new_order = match (was_active, now_active) {
            (true, true) => {
                let active_count = count_active(&mut tx).await?;
                let target = clamp_reposition_order(desired, active_count);
                if let Some(shift) = reposition_shift(existing.sort_order, target) {
                    apply_shift(&mut tx, shift, Some(id)).await?;
                }
                target
            }
            (true, false) => {
                // Leaving the sequence: close the gap it occupied.
                apply_shift(&mut tx, removal_shift(existing.sort_order), Some(id)).await?;
                desired.max(ordering::ORDER_BASE)
            }
            (false, true) => {
                // Joining the sequence: open a slot at the target.
                let active_count = count_active(&mut tx).await?;
                let target = clamp_insert_order(desired, active_count);
                apply_shift(&mut tx, insert_shift(target), Some(id)).await?;
                target
            }
            (false, false) => desired.max(ordering::ORDER_BASE),
        };

        let query = format!(
            "UPDATE hero_slides SET
                title = COALESCE($2, title),
                subtitle = COALESCE($3, subtitle),
                image = COALESCE($4, image),
                sort_order = $5,
                is_active = $6,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let slide = sqlx::query_as::<_, HeroSlide>(&query)
            .bind(id)
            .bind(input.title.as_deref().map(str::trim))
            .bind(input.subtitle.as_deref().map(str::trim))
            .bind(input.image.as_deref().map(str::trim))
            .bind(new_order)
            .bind(now_active)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(id, order = slide.sort_order, "Hero slide updated");
        Ok(Some(slide))
    }

    /// Delete a slide and close the gap it leaves among active siblings.
    /// Returns the removed slide, or `None` if it does not exist.
    pub async fn remove(pool: &PgPool, id: DbId) -> Result<Option<HeroSlide>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        lock_collection(&mut tx).await?;

        let query = format!("DELETE FROM hero_slides WHERE id = $1 RETURNING {COLUMNS}");
        let Some(removed) = sqlx::query_as::<_, HeroSlide>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        if removed.is_active {
            apply_shift(&mut tx, removal_shift(removed.sort_order), None).await?;
        }

        tx.commit().await?;
        tracing::debug!(id, "Hero slide removed");
        Ok(Some(removed))
    }

    /// Count active slides (used by the seed routine).
    pub async fn count_active_slides(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM hero_slides WHERE is_active = TRUE")
            .fetch_one(pool)
            .await
    }
}

/// Take the collection advisory lock for the current transaction.
async fn lock_collection(tx: &mut sqlx::Transaction<'_, sqlx::Postgres>) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(SLIDE_ORDER_LOCK)
        .execute(&mut **tx)
        .await?;
    Ok(())
}

async fn count_active(tx: &mut sqlx::Transaction<'_, sqlx::Postgres>) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM hero_slides WHERE is_active = TRUE")
        .fetch_one(&mut **tx)
        .await
}

/// Apply a planned shift to every active slide in range, excluding
/// `exclude_id` (the slide being moved) when given.
async fn apply_shift(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    shift: Shift,
    exclude_id: Option<DbId>,
) -> Result<(), sqlx::Error> {
    let query = "UPDATE hero_slides \
         SET sort_order = sort_order + $1, updated_at = NOW() \
         WHERE is_active = TRUE \
           AND sort_order >= $2 AND sort_order < $3 \
           AND ($4::BIGINT IS NULL OR id <> $4)";
    sqlx::query(query)
        .bind(shift.delta)
        .bind(shift.lo)
        .bind(shift.hi)
        .bind(exclude_id)
        .execute(&mut **tx)
        .await?;
    Ok(())
}
