//! Table lifecycle (桌台管理)

use super::error::{SeatingError, SeatingResult};
use super::SeatingManager;
use crate::db::repository::{RepoError, dining_table, reservation};
use shared::models::{DiningTable, DiningTableCreate};

impl SeatingManager {
    /// Create a table with a unique `number`
    pub async fn create_table(&self, number: i32, seats: i32) -> SeatingResult<DiningTable> {
        if seats < 0 {
            return Err(SeatingError::InvalidInput(format!(
                "seats must be non-negative, got {seats}"
            )));
        }

        let mut scope = self.db.begin_write().await?;
        if dining_table::find_by_number(scope.conn(), number)
            .await?
            .is_some()
        {
            return Err(SeatingError::TableNumberTaken(number));
        }

        let table = dining_table::create(scope.conn(), DiningTableCreate { number, seats })
            .await
            .map_err(|e| match e {
                RepoError::Duplicate(_) => SeatingError::TableNumberTaken(number),
                other => other.into(),
            })?;
        scope.commit().await?;

        tracing::info!(table_number = number, seats, "Table created");
        Ok(table)
    }

    /// Delete a table that no reservation references
    pub async fn delete_table(&self, number: i32) -> SeatingResult<()> {
        let mut scope = self.db.begin_write().await?;
        let table = dining_table::find_by_number(scope.conn(), number)
            .await?
            .ok_or(SeatingError::TableNotFound(number))?;

        if reservation::count_by_table(scope.conn(), table.id).await? > 0 {
            return Err(SeatingError::TableHasReservations(number));
        }

        dining_table::delete(scope.conn(), table.id)
            .await
            .map_err(|e| match e {
                // FK RESTRICT
                RepoError::Validation(_) => SeatingError::TableHasReservations(number),
                other => other.into(),
            })?;
        scope.commit().await?;

        tracing::info!(table_number = number, "Table deleted");
        Ok(())
    }

    pub async fn get_table(&self, number: i32) -> SeatingResult<DiningTable> {
        let mut tx = self.db.begin_read().await?;
        dining_table::find_by_number(&mut tx, number)
            .await?
            .ok_or(SeatingError::TableNotFound(number))
    }

    /// All tables, ordered by number
    pub async fn list_tables(&self) -> SeatingResult<Vec<DiningTable>> {
        let mut tx = self.db.begin_read().await?;
        Ok(dining_table::find_all(&mut tx).await?)
    }
}
