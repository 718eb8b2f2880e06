//! Database pool setup and the gene store repository
//!
//! All persistence for the workspace goes through [`GeneStore`]: the loader
//! writes with `upsert_sequence` / `insert_expression`, the read endpoints
//! fetch with the `query_*_by_gene_names` lookups. Handlers never issue
//! ad-hoc SQL.

use chrono::NaiveDateTime;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Number of sample slots in an expression record.
pub const SAMPLE_COUNT: usize = 6;

/// Fixed column labels for the six sample slots, in storage order.
pub const SAMPLE_COLUMNS: [&str; SAMPLE_COUNT] =
    ["sample1", "sample2", "sample3", "sample4", "sample5", "sample6"];

/// Database operation errors with contextual information
#[derive(Error, Debug)]
pub enum DbError {
    /// SQL query or connection error
    #[error("Database query failed: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Database configuration is invalid or missing
    #[error("Database configuration error: {0}. Check DATABASE_URL and connection settings.")]
    Config(String),
}

pub type DbResult<T> = Result<T, DbError>;

impl From<DbError> for genex_common::GenexError {
    fn from(err: DbError) -> Self {
        genex_common::GenexError::Database(err.to_string())
    }
}

/// Create a SQLite connection pool from the database configuration
///
/// Foreign keys are enabled per connection so the sequence → expression
/// cascade holds.
pub async fn connect_pool(
    config: &crate::config::DatabaseConfig,
) -> DbResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.url)
        .map_err(|e| DbError::Config(e.to_string()))?
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .connect_with(options)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        "Database connection pool created"
    );

    Ok(pool)
}

/// Probe database connectivity
pub async fn health_check(pool: &SqlitePool) -> DbResult<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(DbError::from)
}

/// Stored gene sequence: one immutable row per gene name
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SequenceRecord {
    pub gene_name: String,
    pub sequence: String,
    pub created_at: NaiveDateTime,
}

/// Stored expression measurement: six ordered sample values, each optional
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ExpressionRecord {
    pub id: i64,
    pub gene_name: String,
    pub sample1: Option<i64>,
    pub sample2: Option<i64>,
    pub sample3: Option<i64>,
    pub sample4: Option<i64>,
    pub sample5: Option<i64>,
    pub sample6: Option<i64>,
    pub created_at: NaiveDateTime,
}

impl ExpressionRecord {
    /// The six sample values in column order
    pub fn samples(&self) -> [Option<i64>; SAMPLE_COUNT] {
        [
            self.sample1,
            self.sample2,
            self.sample3,
            self.sample4,
            self.sample5,
            self.sample6,
        ]
    }
}

/// Repository over the two gene tables
#[derive(Debug, Clone)]
pub struct GeneStore {
    pool: SqlitePool,
}

impl GeneStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Insert a sequence if the gene name is absent; an existing row is
    /// left untouched. Returns whether a new row was inserted.
    pub async fn upsert_sequence(&self, gene_name: &str, sequence: &str) -> DbResult<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO protein_sequences (gene_name, sequence)
            VALUES (?, ?)
            ON CONFLICT (gene_name) DO NOTHING
            "#,
        )
        .bind(gene_name)
        .bind(sequence)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Fetch a single sequence by gene name
    pub async fn get_sequence(&self, gene_name: &str) -> DbResult<Option<SequenceRecord>> {
        let record = sqlx::query_as::<_, SequenceRecord>(
            r#"
            SELECT gene_name, sequence, created_at
            FROM protein_sequences
            WHERE gene_name = ?
            "#,
        )
        .bind(gene_name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Insert one expression row for an existing gene, values in column
    /// order. Returns the new row id.
    pub async fn insert_expression(
        &self,
        gene_name: &str,
        samples: [Option<i64>; SAMPLE_COUNT],
    ) -> DbResult<i64> {
        let mut query = sqlx::query(
            r#"
            INSERT INTO gene_expressions
                (gene_name, sample1, sample2, sample3, sample4, sample5, sample6)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(gene_name);

        for sample in samples {
            query = query.bind(sample);
        }

        let result = query.execute(&self.pool).await?;
        Ok(result.last_insert_rowid())
    }

    /// Fetch sequences matching any of the given gene names, in the
    /// store's natural order. An empty list yields an empty result.
    pub async fn query_sequences_by_gene_names(
        &self,
        gene_names: &[String],
    ) -> DbResult<Vec<SequenceRecord>> {
        if gene_names.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; gene_names.len()].join(", ");
        let sql = format!(
            "SELECT gene_name, sequence, created_at \
             FROM protein_sequences WHERE gene_name IN ({placeholders})"
        );

        let mut query = sqlx::query_as::<_, SequenceRecord>(&sql);
        for gene_name in gene_names {
            query = query.bind(gene_name);
        }

        Ok(query.fetch_all(&self.pool).await?)
    }

    /// Fetch expression rows whose gene name matches any of the given
    /// names, in insertion order. An empty list yields an empty result.
    pub async fn query_expressions_by_gene_names(
        &self,
        gene_names: &[String],
    ) -> DbResult<Vec<ExpressionRecord>> {
        if gene_names.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; gene_names.len()].join(", ");
        let sql = format!(
            "SELECT id, gene_name, sample1, sample2, sample3, sample4, sample5, sample6, \
             created_at FROM gene_expressions WHERE gene_name IN ({placeholders}) ORDER BY id"
        );

        let mut query = sqlx::query_as::<_, ExpressionRecord>(&sql);
        for gene_name in gene_names {
            query = query.bind(gene_name);
        }

        Ok(query.fetch_all(&self.pool).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(migrations = "../../migrations")]
    async fn upsert_sequence_is_insert_if_absent(pool: SqlitePool) -> sqlx::Result<()> {
        let store = GeneStore::new(pool);

        let inserted = store.upsert_sequence("TP53", "MEEPQSDPSV").await.unwrap();
        assert!(inserted);

        // Second upsert must not overwrite the stored sequence
        let inserted = store.upsert_sequence("TP53", "DIFFERENT").await.unwrap();
        assert!(!inserted);

        let record = store.get_sequence("TP53").await.unwrap().unwrap();
        assert_eq!(record.sequence, "MEEPQSDPSV");
        Ok(())
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn get_sequence_missing_gene_is_none(pool: SqlitePool) -> sqlx::Result<()> {
        let store = GeneStore::new(pool);
        assert!(store.get_sequence("NOPE").await.unwrap().is_none());
        Ok(())
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn expression_nulls_round_trip(pool: SqlitePool) -> sqlx::Result<()> {
        let store = GeneStore::new(pool);
        store.upsert_sequence("BRCA1", "MDLSALRVEE").await.unwrap();

        let samples = [Some(1), Some(2), None, Some(4), Some(5), Some(6)];
        store.insert_expression("BRCA1", samples).await.unwrap();

        let rows = store
            .query_expressions_by_gene_names(&["BRCA1".to_string()])
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        // Absent input stays NULL, it is never coerced to zero
        assert_eq!(rows[0].samples(), samples);
        Ok(())
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn query_by_names_ignores_unknown_genes(pool: SqlitePool) -> sqlx::Result<()> {
        let store = GeneStore::new(pool);
        store.upsert_sequence("EGFR", "MRPSGTAGAA").await.unwrap();

        let records = store
            .query_sequences_by_gene_names(&["EGFR".to_string(), "UNKNOWN".to_string()])
            .await
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].gene_name, "EGFR");

        let records = store.query_sequences_by_gene_names(&[]).await.unwrap();
        assert!(records.is_empty());
        Ok(())
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn deleting_sequence_cascades_to_expressions(pool: SqlitePool) -> sqlx::Result<()> {
        let store = GeneStore::new(pool.clone());
        store.upsert_sequence("MYC", "MPLNVSFTNR").await.unwrap();
        store
            .insert_expression("MYC", [Some(1); 6])
            .await
            .unwrap();

        // Cascade requires the pragma on the connection issuing the delete
        let mut conn = pool.acquire().await?;
        sqlx::query("PRAGMA foreign_keys = ON")
            .execute(&mut *conn)
            .await?;
        sqlx::query("DELETE FROM protein_sequences WHERE gene_name = ?")
            .bind("MYC")
            .execute(&mut *conn)
            .await?;
        drop(conn);

        let rows = store
            .query_expressions_by_gene_names(&["MYC".to_string()])
            .await
            .unwrap();
        assert!(rows.is_empty());
        Ok(())
    }
}
