use quiz_core::model::{OptionSlot, Track};
use sqlx::Row;

use super::SqliteRepository;
use super::mapping::{map_question_row, map_recommendation_row};
use crate::repository::{
    QuestionBankSource, QuestionBankWriter, QuestionRecord, RecommendationRecord, StorageError,
};
use crate::schema::BankTable;

fn conn<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Connection(e.to_string())
}

impl SqliteRepository {
    /// Fails fast when `table` or one of its required columns does not exist.
    async fn ensure_schema(&self, table: BankTable) -> Result<(), StorageError> {
        let rows = sqlx::query("SELECT name FROM pragma_table_info(?1)")
            .bind(table.name())
            .fetch_all(&self.pool)
            .await
            .map_err(conn)?;

        if rows.is_empty() {
            return Err(StorageError::MissingTable { table });
        }

        let mut present = Vec::with_capacity(rows.len());
        for row in &rows {
            present.push(row.try_get::<String, _>("name").map_err(conn)?);
        }

        for column in table.required_columns() {
            if !present.iter().any(|name| name == column) {
                return Err(StorageError::MissingColumn { table, column });
            }
        }
        Ok(())
    }

    fn select_sql(table: BankTable) -> String {
        let columns = table.required_columns().join(", ");
        format!("SELECT {columns} FROM {} ORDER BY rowid ASC", table.name())
    }
}

#[async_trait::async_trait]
impl QuestionBankSource for SqliteRepository {
    async fn question_rows(&self, track: Track) -> Result<Vec<QuestionRecord>, StorageError> {
        let table = BankTable::questions(track);
        self.ensure_schema(table).await?;

        let sql = Self::select_sql(table);
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(conn)?;

        let mut records = Vec::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            records.push(map_question_row(i + 1, row)?);
        }
        tracing::debug!(table = %table, rows = records.len(), "read question rows");
        Ok(records)
    }

    async fn recommendation_rows(&self) -> Result<Vec<RecommendationRecord>, StorageError> {
        let table = BankTable::Improvement;
        self.ensure_schema(table).await?;

        let sql = Self::select_sql(table);
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(conn)?;

        let mut records = Vec::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            records.push(map_recommendation_row(i + 1, row)?);
        }
        tracing::debug!(table = %table, rows = records.len(), "read improvement rows");
        Ok(records)
    }
}

#[async_trait::async_trait]
impl QuestionBankWriter for SqliteRepository {
    async fn replace_question_rows(
        &self,
        track: Track,
        rows: &[QuestionRecord],
    ) -> Result<(), StorageError> {
        let table = BankTable::questions(track);
        let columns = table.required_columns();
        let placeholders = (1..=columns.len())
            .map(|i| format!("?{i}"))
            .collect::<Vec<_>>()
            .join(", ");
        let insert = format!(
            "INSERT INTO {} ({}) VALUES ({placeholders})",
            table.name(),
            columns.join(", ")
        );
        let delete = format!("DELETE FROM {}", table.name());

        let mut tx = self.pool.begin().await.map_err(conn)?;
        sqlx::query(&delete).execute(&mut *tx).await.map_err(conn)?;
        for record in rows {
            let mut query = sqlx::query(&insert).bind(record.question.clone());
            for slot in OptionSlot::ALL {
                query = query.bind(record.options[slot.index()].clone());
            }
            for slot in OptionSlot::ALL {
                query = query.bind(record.types[slot.index()].clone());
            }
            query.execute(&mut *tx).await.map_err(conn)?;
        }
        tx.commit().await.map_err(conn)?;

        tracing::debug!(table = %table, rows = rows.len(), "replaced question rows");
        Ok(())
    }

    async fn replace_recommendation_rows(
        &self,
        rows: &[RecommendationRecord],
    ) -> Result<(), StorageError> {
        let mut tx = self.pool.begin().await.map_err(conn)?;
        sqlx::query("DELETE FROM improvement")
            .execute(&mut *tx)
            .await
            .map_err(conn)?;
        for record in rows {
            let [action_1, action_2, action_3] = record.actions.clone();
            sqlx::query(
                r"
                INSERT INTO improvement
                    (type_name, core_kw, core_msg, direction_msg, action_1, action_2, action_3)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                ",
            )
            .bind(record.type_name.clone())
            .bind(record.core_kw.clone())
            .bind(record.core_msg.clone())
            .bind(record.direction_msg.clone())
            .bind(action_1)
            .bind(action_2)
            .bind(action_3)
            .execute(&mut *tx)
            .await
            .map_err(conn)?;
        }
        tx.commit().await.map_err(conn)?;

        tracing::debug!(rows = rows.len(), "replaced improvement rows");
        Ok(())
    }
}
