//! Crop requirement table loaded from Postgres.
//!
//! Expected schema is in `sql/crop_requirements.sql`. Rows are read once at
//! startup, ordered by id, so the first row for a (crop, state) pair is the
//! regional fallback.

use sqlx::postgres::PgPoolOptions;
use sqlx::{FromRow, PgPool};

use crate::reference::{CropRequirement, RequirementError, RequirementTable};

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("crop_requirements row {id} has a negative crop_id or state_id")]
    NegativeKey { id: i64 },

    #[error(transparent)]
    InvalidRow(#[from] RequirementError),
}

#[derive(Debug, FromRow)]
struct CropRequirementRow {
    id: i64,
    crop_id: i32,
    state_id: i32,
    district: String,
    required_n: f64,
    required_p: f64,
    required_k: f64,
    min_ph: f64,
    max_ph: f64,
    organic_matter: f64,
    ec: f64,
    zinc: f64,
}

impl TryFrom<CropRequirementRow> for CropRequirement {
    type Error = DbError;

    fn try_from(row: CropRequirementRow) -> Result<Self, Self::Error> {
        let (Ok(crop_id), Ok(state_id)) = (u32::try_from(row.crop_id), u32::try_from(row.state_id))
        else {
            return Err(DbError::NegativeKey { id: row.id });
        };

        Ok(CropRequirement {
            crop_id,
            state_id,
            district: row.district,
            required_n: row.required_n,
            required_p: row.required_p,
            required_k: row.required_k,
            min_ph: row.min_ph,
            max_ph: row.max_ph,
            organic_matter: row.organic_matter,
            ec: row.ec,
            zinc: row.zinc,
        })
    }
}

pub async fn connect(database_url: &str) -> Result<PgPool, DbError> {
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Load and index every requirement row.
pub async fn load_requirements(pool: &PgPool) -> Result<RequirementTable, DbError> {
    let rows = sqlx::query_as::<_, CropRequirementRow>(
        r#"
        SELECT id, crop_id, state_id, district,
               required_n, required_p, required_k,
               min_ph, max_ph, organic_matter, ec, zinc
        FROM crop_requirements
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    let requirements = rows
        .into_iter()
        .map(CropRequirement::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RequirementTable::from_rows(requirements)?)
}
