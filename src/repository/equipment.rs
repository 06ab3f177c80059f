//! Equipment repository
//!
//! Read queries assemble the denormalized views directly: type and custodian
//! fields come from joins, child counts from subqueries scoped per row, so
//! every read reflects the current state of the related tables.

use chrono::NaiveDate;
use sqlx::{PgConnection, Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::equipment::{CreateEquipment, EquipmentSummary, EquipmentView, UpdateEquipment},
};

const VIEW_SELECT: &str = r#"
SELECT e.id, e.type_id, t.type_name, t.manufacturer, t.model,
       e.employee_id, emp.full_name AS employee_full_name,
       e.name, e.serial_number, e.mac_address, e.ip_address, e.address,
       e.status, e.date_added, e.date_updated, e.technical_params,
       (SELECT COUNT(*) FROM device_port p WHERE p.equipment_id = e.id) AS ports_count,
       (SELECT COUNT(*) FROM ip_address i WHERE i.equipment_id = e.id) AS ip_addresses_count,
       (SELECT COUNT(*) FROM maintenance_history m WHERE m.equipment_id = e.id) AS maintenance_count
FROM equipment e
JOIN equipment_type t ON t.id = e.type_id
LEFT JOIN employee emp ON emp.id = e.employee_id
"#;

const SUMMARY_SELECT: &str = r#"
SELECT e.id, e.name, t.type_name, t.manufacturer, t.model, e.serial_number,
       e.ip_address, e.address, e.status, e.date_added,
       (SELECT COUNT(*) FROM device_port p WHERE p.equipment_id = e.id) AS ports_count
FROM equipment e
JOIN equipment_type t ON t.id = e.type_id
"#;

#[derive(Clone)]
pub struct EquipmentRepository {
    pool: Pool<Postgres>,
}

impl EquipmentRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all equipment (summary view)
    pub async fn list_summaries(&self) -> AppResult<Vec<EquipmentSummary>> {
        let query = format!("{} ORDER BY e.name", SUMMARY_SELECT);
        let rows = sqlx::query_as::<_, EquipmentSummary>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get the full equipment view by ID
    pub async fn get_view(&self, id: i64) -> AppResult<EquipmentView> {
        let query = format!("{} WHERE e.id = $1", VIEW_SELECT);
        sqlx::query_as::<_, EquipmentView>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Get equipment by serial number
    pub async fn get_view_by_serial(&self, serial_number: &str) -> AppResult<EquipmentView> {
        let query = format!("{} WHERE e.serial_number = $1", VIEW_SELECT);
        sqlx::query_as::<_, EquipmentView>(&query)
            .bind(serial_number)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Equipment with serial number '{}' not found",
                    serial_number
                ))
            })
    }

    /// Get equipment by MAC address
    pub async fn get_view_by_mac(&self, mac_address: &str) -> AppResult<EquipmentView> {
        let query = format!("{} WHERE e.mac_address = $1", VIEW_SELECT);
        sqlx::query_as::<_, EquipmentView>(&query)
            .bind(mac_address)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Equipment with MAC address '{}' not found",
                    mac_address
                ))
            })
    }

    /// Get equipment by its display IP address
    pub async fn get_view_by_ip(&self, ip_address: &str) -> AppResult<EquipmentView> {
        let query = format!("{} WHERE e.ip_address = $1", VIEW_SELECT);
        sqlx::query_as::<_, EquipmentView>(&query)
            .bind(ip_address)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Equipment with IP address '{}' not found",
                    ip_address
                ))
            })
    }

    /// List equipment of a type
    pub async fn list_by_type(&self, type_id: i64) -> AppResult<Vec<EquipmentSummary>> {
        let query = format!("{} WHERE e.type_id = $1", SUMMARY_SELECT);
        let rows = sqlx::query_as::<_, EquipmentSummary>(&query)
            .bind(type_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// List equipment assigned to an employee
    pub async fn list_by_employee(&self, employee_id: i64) -> AppResult<Vec<EquipmentSummary>> {
        let query = format!("{} WHERE e.employee_id = $1", SUMMARY_SELECT);
        let rows = sqlx::query_as::<_, EquipmentSummary>(&query)
            .bind(employee_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// List equipment by status, sorted by name
    pub async fn list_by_status(&self, status: &str) -> AppResult<Vec<EquipmentSummary>> {
        let query = format!("{} WHERE e.status = $1 ORDER BY e.name", SUMMARY_SELECT);
        let rows = sqlx::query_as::<_, EquipmentSummary>(&query)
            .bind(status)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Case-insensitive substring search on name
    pub async fn search_by_name(&self, name: &str) -> AppResult<Vec<EquipmentSummary>> {
        let query = format!("{} WHERE e.name ILIKE '%' || $1 || '%'", SUMMARY_SELECT);
        let rows = sqlx::query_as::<_, EquipmentSummary>(&query)
            .bind(name)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Case-insensitive substring search on physical address
    pub async fn search_by_address(&self, address: &str) -> AppResult<Vec<EquipmentSummary>> {
        let query = format!("{} WHERE e.address ILIKE '%' || $1 || '%'", SUMMARY_SELECT);
        let rows = sqlx::query_as::<_, EquipmentSummary>(&query)
            .bind(address)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// List equipment of a type filtered by status
    pub async fn list_by_type_and_status(
        &self,
        type_id: i64,
        status: &str,
    ) -> AppResult<Vec<EquipmentSummary>> {
        let query = format!(
            "{} WHERE e.type_id = $1 AND e.status = $2",
            SUMMARY_SELECT
        );
        let rows = sqlx::query_as::<_, EquipmentSummary>(&query)
            .bind(type_id)
            .bind(status)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// List equipment added strictly after a date
    pub async fn list_added_after(&self, date: NaiveDate) -> AppResult<Vec<EquipmentSummary>> {
        let query = format!("{} WHERE e.date_added > $1", SUMMARY_SELECT);
        let rows = sqlx::query_as::<_, EquipmentSummary>(&query)
            .bind(date)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// List equipment not updated since the threshold date (or never)
    pub async fn list_needing_maintenance(
        &self,
        threshold: NaiveDate,
    ) -> AppResult<Vec<EquipmentSummary>> {
        let query = format!(
            "{} WHERE e.date_updated < $1 OR e.date_updated IS NULL",
            SUMMARY_SELECT
        );
        let rows = sqlx::query_as::<_, EquipmentSummary>(&query)
            .bind(threshold)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Count equipment of a type
    pub async fn count_by_type(&self, type_id: i64) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM equipment WHERE type_id = $1")
            .bind(type_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Count equipment by status
    pub async fn count_by_status(&self, status: &str) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM equipment WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    // -- transaction-scoped primitives --

    /// Check existence of an equipment row within a transaction
    pub async fn exists_in(&self, conn: &mut PgConnection, id: i64) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM equipment WHERE id = $1)")
                .bind(id)
                .fetch_one(conn)
                .await?;
        Ok(exists)
    }

    /// Find which equipment owns a serial number, if any
    pub async fn serial_owner(
        &self,
        conn: &mut PgConnection,
        serial_number: &str,
    ) -> AppResult<Option<i64>> {
        let id = sqlx::query_scalar("SELECT id FROM equipment WHERE serial_number = $1")
            .bind(serial_number)
            .fetch_optional(conn)
            .await?;
        Ok(id)
    }

    /// Find which equipment owns a MAC address, if any
    pub async fn mac_owner(
        &self,
        conn: &mut PgConnection,
        mac_address: &str,
    ) -> AppResult<Option<i64>> {
        let id = sqlx::query_scalar("SELECT id FROM equipment WHERE mac_address = $1")
            .bind(mac_address)
            .fetch_optional(conn)
            .await?;
        Ok(id)
    }

    /// Insert a new equipment row, returning its id
    pub async fn insert(
        &self,
        conn: &mut PgConnection,
        data: &CreateEquipment,
        status: &str,
        date_added: NaiveDate,
    ) -> AppResult<i64> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO equipment
                (type_id, employee_id, name, serial_number, mac_address, ip_address,
                 address, status, date_added, technical_params)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id
            "#,
        )
        .bind(data.type_id)
        .bind(data.employee_id)
        .bind(&data.name)
        .bind(&data.serial_number)
        .bind(&data.mac_address)
        .bind(&data.ip_address)
        .bind(&data.address)
        .bind(status)
        .bind(date_added)
        .bind(&data.technical_params)
        .fetch_one(conn)
        .await?;
        Ok(id)
    }

    /// Full update of an equipment row
    pub async fn update_row(
        &self,
        conn: &mut PgConnection,
        id: i64,
        data: &UpdateEquipment,
        status: &str,
        date_updated: NaiveDate,
    ) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE equipment
            SET type_id = $2, employee_id = $3, name = $4, serial_number = $5,
                mac_address = $6, ip_address = $7, address = $8, status = $9,
                date_added = COALESCE($10, date_added), date_updated = $11,
                technical_params = $12
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(data.type_id)
        .bind(data.employee_id)
        .bind(&data.name)
        .bind(&data.serial_number)
        .bind(&data.mac_address)
        .bind(&data.ip_address)
        .bind(&data.address)
        .bind(status)
        .bind(data.date_added)
        .bind(date_updated)
        .bind(&data.technical_params)
        .execute(conn)
        .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Equipment {} not found", id)));
        }
        Ok(())
    }

    /// Change equipment status, bumping the update date
    pub async fn set_status(
        &self,
        conn: &mut PgConnection,
        id: i64,
        status: &str,
        date_updated: NaiveDate,
    ) -> AppResult<()> {
        let result =
            sqlx::query("UPDATE equipment SET status = $2, date_updated = $3 WHERE id = $1")
                .bind(id)
                .bind(status)
                .bind(date_updated)
                .execute(conn)
                .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Equipment {} not found", id)));
        }
        Ok(())
    }

    /// Delete an equipment row; owned ports, IPs and maintenance rows cascade
    pub async fn delete_row(&self, conn: &mut PgConnection, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM equipment WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Equipment {} not found", id)));
        }
        Ok(())
    }
}
