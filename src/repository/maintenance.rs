//! Maintenance history repository

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{PgConnection, Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::maintenance::{CreateMaintenance, MaintenanceView, UpdateMaintenance},
};

const VIEW_SELECT: &str = r#"
SELECT m.id, m.equipment_id, e.name AS equipment_name,
       m.date, m.type AS maintenance_type, m.description,
       m.performed_by_id, emp.full_name AS performed_by_name,
       m.cost, m.next_maintenance_date
FROM maintenance_history m
JOIN equipment e ON e.id = m.equipment_id
LEFT JOIN employee emp ON emp.id = m.performed_by_id
"#;

#[derive(Clone)]
pub struct MaintenanceRepository {
    pool: Pool<Postgres>,
}

impl MaintenanceRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all maintenance records, newest first
    pub async fn list_views(&self) -> AppResult<Vec<MaintenanceView>> {
        let query = format!("{} ORDER BY m.date DESC", VIEW_SELECT);
        let rows = sqlx::query_as::<_, MaintenanceView>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get a maintenance record view by ID
    pub async fn get_view(&self, id: i64) -> AppResult<MaintenanceView> {
        let query = format!("{} WHERE m.id = $1", VIEW_SELECT);
        sqlx::query_as::<_, MaintenanceView>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Maintenance record {} not found", id)))
    }

    /// List maintenance history of an equipment, newest first
    pub async fn list_by_equipment(&self, equipment_id: i64) -> AppResult<Vec<MaintenanceView>> {
        let query = format!(
            "{} WHERE m.equipment_id = $1 ORDER BY m.date DESC",
            VIEW_SELECT
        );
        let rows = sqlx::query_as::<_, MaintenanceView>(&query)
            .bind(equipment_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get the most recent maintenance record of an equipment
    pub async fn get_latest_view(&self, equipment_id: i64) -> AppResult<MaintenanceView> {
        let query = format!(
            "{} WHERE m.equipment_id = $1 ORDER BY m.date DESC LIMIT 1",
            VIEW_SELECT
        );
        sqlx::query_as::<_, MaintenanceView>(&query)
            .bind(equipment_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "No maintenance history for equipment {}",
                    equipment_id
                ))
            })
    }

    /// List maintenance records of an equipment filtered by type
    pub async fn list_by_equipment_and_type(
        &self,
        equipment_id: i64,
        maintenance_type: &str,
    ) -> AppResult<Vec<MaintenanceView>> {
        let query = format!(
            "{} WHERE m.equipment_id = $1 AND m.type = $2 ORDER BY m.date DESC",
            VIEW_SELECT
        );
        let rows = sqlx::query_as::<_, MaintenanceView>(&query)
            .bind(equipment_id)
            .bind(maintenance_type)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// List maintenance records performed by an employee
    pub async fn list_by_employee(&self, employee_id: i64) -> AppResult<Vec<MaintenanceView>> {
        let query = format!(
            "{} WHERE m.performed_by_id = $1 ORDER BY m.date DESC",
            VIEW_SELECT
        );
        let rows = sqlx::query_as::<_, MaintenanceView>(&query)
            .bind(employee_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// List maintenance records within a date range
    pub async fn list_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<MaintenanceView>> {
        let query = format!(
            "{} WHERE m.date >= $1 AND m.date <= $2 ORDER BY m.date DESC",
            VIEW_SELECT
        );
        let rows = sqlx::query_as::<_, MaintenanceView>(&query)
            .bind(start)
            .bind(end)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// List maintenance records of an equipment since a cutoff instant
    pub async fn list_since(
        &self,
        equipment_id: i64,
        cutoff: DateTime<Utc>,
    ) -> AppResult<Vec<MaintenanceView>> {
        let query = format!(
            "{} WHERE m.equipment_id = $1 AND m.date >= $2 ORDER BY m.date DESC",
            VIEW_SELECT
        );
        let rows = sqlx::query_as::<_, MaintenanceView>(&query)
            .bind(equipment_id)
            .bind(cutoff)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// List maintenance records by type across all equipment
    pub async fn list_by_type(&self, maintenance_type: &str) -> AppResult<Vec<MaintenanceView>> {
        let query = format!(
            "{} WHERE m.type = $1 ORDER BY m.date DESC",
            VIEW_SELECT
        );
        let rows = sqlx::query_as::<_, MaintenanceView>(&query)
            .bind(maintenance_type)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// List records whose next maintenance date has passed, soonest first
    pub async fn list_overdue(&self, today: NaiveDate) -> AppResult<Vec<MaintenanceView>> {
        let query = format!(
            "{} WHERE m.next_maintenance_date < $1 ORDER BY m.next_maintenance_date",
            VIEW_SELECT
        );
        let rows = sqlx::query_as::<_, MaintenanceView>(&query)
            .bind(today)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Count maintenance records of an equipment
    pub async fn count_by_equipment(&self, equipment_id: i64) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM maintenance_history WHERE equipment_id = $1")
                .bind(equipment_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }

    /// Count maintenance records by type
    pub async fn count_by_type(&self, maintenance_type: &str) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM maintenance_history WHERE type = $1")
                .bind(maintenance_type)
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }

    // -- transaction-scoped primitives --

    /// Check existence of a maintenance record within a transaction
    pub async fn exists_in(&self, conn: &mut PgConnection, id: i64) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM maintenance_history WHERE id = $1)")
                .bind(id)
                .fetch_one(conn)
                .await?;
        Ok(exists)
    }

    /// Find the id of the most recent record of an equipment, if any
    pub async fn latest_id_for(
        &self,
        conn: &mut PgConnection,
        equipment_id: i64,
    ) -> AppResult<Option<i64>> {
        let id = sqlx::query_scalar(
            "SELECT id FROM maintenance_history WHERE equipment_id = $1 ORDER BY date DESC LIMIT 1",
        )
        .bind(equipment_id)
        .fetch_optional(conn)
        .await?;
        Ok(id)
    }

    /// Insert a new maintenance record, returning its id
    pub async fn insert(
        &self,
        conn: &mut PgConnection,
        data: &CreateMaintenance,
        date: DateTime<Utc>,
    ) -> AppResult<i64> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO maintenance_history
                (equipment_id, date, type, description, performed_by_id, cost, next_maintenance_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(data.equipment_id)
        .bind(date)
        .bind(&data.maintenance_type)
        .bind(&data.description)
        .bind(data.performed_by_id)
        .bind(data.cost)
        .bind(data.next_maintenance_date)
        .fetch_one(conn)
        .await?;
        Ok(id)
    }

    /// Full update of a maintenance record
    pub async fn update_row(
        &self,
        conn: &mut PgConnection,
        id: i64,
        data: &UpdateMaintenance,
    ) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE maintenance_history
            SET equipment_id = $2, date = $3, type = $4, description = $5,
                performed_by_id = $6, cost = $7, next_maintenance_date = $8
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(data.equipment_id)
        .bind(data.date)
        .bind(&data.maintenance_type)
        .bind(&data.description)
        .bind(data.performed_by_id)
        .bind(data.cost)
        .bind(data.next_maintenance_date)
        .execute(conn)
        .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Maintenance record {} not found",
                id
            )));
        }
        Ok(())
    }

    /// Set the next maintenance date on a record
    pub async fn set_next_date(
        &self,
        conn: &mut PgConnection,
        id: i64,
        next_date: NaiveDate,
    ) -> AppResult<()> {
        let result =
            sqlx::query("UPDATE maintenance_history SET next_maintenance_date = $2 WHERE id = $1")
                .bind(id)
                .bind(next_date)
                .execute(conn)
                .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Maintenance record {} not found",
                id
            )));
        }
        Ok(())
    }

    /// Delete a maintenance record
    pub async fn delete_row(&self, conn: &mut PgConnection, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM maintenance_history WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Maintenance record {} not found",
                id
            )));
        }
        Ok(())
    }
}
