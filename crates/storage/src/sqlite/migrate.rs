use sqlx::SqlitePool;

use super::SqliteInitError;

/// Creates the bank schema: one table per workbook sheet.
///
/// Data columns are nullable on purpose so a hand-edited bank with blank
/// cells still loads and is reported row by row by the question builder.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), SqliteInitError> {
    let mut tx = pool.begin().await?;

    for table in ["current_state", "ideal_state"] {
        let ddl = format!(
            r"
                CREATE TABLE IF NOT EXISTS {table} (
                    row_no INTEGER PRIMARY KEY,
                    question TEXT,
                    option_A TEXT,
                    option_B TEXT,
                    option_C TEXT,
                    option_D TEXT,
                    option_E TEXT,
                    type_A TEXT,
                    type_B TEXT,
                    type_C TEXT,
                    type_D TEXT,
                    type_E TEXT
                );
            "
        );
        sqlx::query(&ddl).execute(&mut *tx).await?;
    }

    sqlx::query(
        r"
            CREATE TABLE IF NOT EXISTS improvement (
                row_no INTEGER PRIMARY KEY,
                type_name TEXT,
                core_kw TEXT,
                core_msg TEXT,
                direction_msg TEXT,
                action_1 TEXT,
                action_2 TEXT,
                action_3 TEXT
            );
        ",
    )
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(())
}
