//! Device ports repository

use sqlx::{PgConnection, Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::device_port::{CreateDevicePort, DevicePort, DevicePortView, UpdateDevicePort},
};

const VIEW_SELECT: &str = r#"
SELECT p.id, p.equipment_id, e.name AS equipment_name,
       p.port_number, p.port_type, p.status, p.speed,
       p.connected_to_equipment_id, ce.name AS connected_to_equipment_name,
       p.connected_to_port_id, cp.port_number AS connected_to_port_number,
       p.description
FROM device_port p
JOIN equipment e ON e.id = p.equipment_id
LEFT JOIN equipment ce ON ce.id = p.connected_to_equipment_id
LEFT JOIN device_port cp ON cp.id = p.connected_to_port_id
"#;

#[derive(Clone)]
pub struct DevicePortsRepository {
    pool: Pool<Postgres>,
}

impl DevicePortsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all ports
    pub async fn list_views(&self) -> AppResult<Vec<DevicePortView>> {
        let query = format!("{} ORDER BY p.equipment_id, p.port_number", VIEW_SELECT);
        let rows = sqlx::query_as::<_, DevicePortView>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get a port view by ID
    pub async fn get_view(&self, id: i64) -> AppResult<DevicePortView> {
        let query = format!("{} WHERE p.id = $1", VIEW_SELECT);
        sqlx::query_as::<_, DevicePortView>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Device port {} not found", id)))
    }

    /// List ports of an equipment, ordered by port number
    pub async fn list_by_equipment(&self, equipment_id: i64) -> AppResult<Vec<DevicePortView>> {
        let query = format!(
            "{} WHERE p.equipment_id = $1 ORDER BY p.port_number",
            VIEW_SELECT
        );
        let rows = sqlx::query_as::<_, DevicePortView>(&query)
            .bind(equipment_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get a specific port of an equipment by port number
    pub async fn get_by_equipment_and_number(
        &self,
        equipment_id: i64,
        port_number: i32,
    ) -> AppResult<DevicePortView> {
        let query = format!(
            "{} WHERE p.equipment_id = $1 AND p.port_number = $2",
            VIEW_SELECT
        );
        sqlx::query_as::<_, DevicePortView>(&query)
            .bind(equipment_id)
            .bind(port_number)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Port {} of equipment {} not found",
                    port_number, equipment_id
                ))
            })
    }

    /// List ports by status across all equipment
    pub async fn list_by_status(&self, status: &str) -> AppResult<Vec<DevicePortView>> {
        let query = format!("{} WHERE p.status = $1", VIEW_SELECT);
        let rows = sqlx::query_as::<_, DevicePortView>(&query)
            .bind(status)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// List ports of an equipment filtered by status
    pub async fn list_by_equipment_and_status(
        &self,
        equipment_id: i64,
        status: &str,
    ) -> AppResult<Vec<DevicePortView>> {
        let query = format!(
            "{} WHERE p.equipment_id = $1 AND p.status = $2",
            VIEW_SELECT
        );
        let rows = sqlx::query_as::<_, DevicePortView>(&query)
            .bind(equipment_id)
            .bind(status)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// List unconnected ports of an equipment
    pub async fn list_available(&self, equipment_id: i64) -> AppResult<Vec<DevicePortView>> {
        let query = format!(
            "{} WHERE p.equipment_id = $1 AND p.connected_to_equipment_id IS NULL",
            VIEW_SELECT
        );
        let rows = sqlx::query_as::<_, DevicePortView>(&query)
            .bind(equipment_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// List connected ports of an equipment
    pub async fn list_occupied(&self, equipment_id: i64) -> AppResult<Vec<DevicePortView>> {
        let query = format!(
            "{} WHERE p.equipment_id = $1 AND p.connected_to_equipment_id IS NOT NULL",
            VIEW_SELECT
        );
        let rows = sqlx::query_as::<_, DevicePortView>(&query)
            .bind(equipment_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Reverse lookup: ports on other devices whose target is this equipment
    pub async fn list_connected_to(&self, equipment_id: i64) -> AppResult<Vec<DevicePortView>> {
        let query = format!(
            "{} WHERE p.connected_to_equipment_id = $1",
            VIEW_SELECT
        );
        let rows = sqlx::query_as::<_, DevicePortView>(&query)
            .bind(equipment_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// List ports by connector type across all equipment
    pub async fn list_by_port_type(&self, port_type: &str) -> AppResult<Vec<DevicePortView>> {
        let query = format!("{} WHERE p.port_type = $1", VIEW_SELECT);
        let rows = sqlx::query_as::<_, DevicePortView>(&query)
            .bind(port_type)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// List ports of an equipment filtered by type and status
    pub async fn list_by_equipment_type_and_status(
        &self,
        equipment_id: i64,
        port_type: &str,
        status: &str,
    ) -> AppResult<Vec<DevicePortView>> {
        let query = format!(
            "{} WHERE p.equipment_id = $1 AND p.port_type = $2 AND p.status = $3 ORDER BY p.port_number",
            VIEW_SELECT
        );
        let rows = sqlx::query_as::<_, DevicePortView>(&query)
            .bind(equipment_id)
            .bind(port_type)
            .bind(status)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Count ports of an equipment
    pub async fn count_by_equipment(&self, equipment_id: i64) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM device_port WHERE equipment_id = $1")
                .bind(equipment_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }

    /// Count ports of an equipment with a given status
    pub async fn count_by_equipment_and_status(
        &self,
        equipment_id: i64,
        status: &str,
    ) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM device_port WHERE equipment_id = $1 AND status = $2",
        )
        .bind(equipment_id)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    // -- transaction-scoped primitives --

    /// Load a port row within a transaction
    pub async fn get_row(&self, conn: &mut PgConnection, id: i64) -> AppResult<DevicePort> {
        sqlx::query_as::<_, DevicePort>("SELECT * FROM device_port WHERE id = $1")
            .bind(id)
            .fetch_optional(conn)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Device port {} not found", id)))
    }

    /// Load a port row with a row lock, serializing concurrent connects
    pub async fn get_row_locked(&self, conn: &mut PgConnection, id: i64) -> AppResult<DevicePort> {
        sqlx::query_as::<_, DevicePort>("SELECT * FROM device_port WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(conn)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Device port {} not found", id)))
    }

    /// Find the port id holding a number on an equipment, if any
    pub async fn number_owner(
        &self,
        conn: &mut PgConnection,
        equipment_id: i64,
        port_number: i32,
    ) -> AppResult<Option<i64>> {
        let id = sqlx::query_scalar(
            "SELECT id FROM device_port WHERE equipment_id = $1 AND port_number = $2",
        )
        .bind(equipment_id)
        .bind(port_number)
        .fetch_optional(conn)
        .await?;
        Ok(id)
    }

    /// Insert a new port row with resolved connection targets, returning its id
    pub async fn insert(
        &self,
        conn: &mut PgConnection,
        data: &CreateDevicePort,
        connected_to_equipment_id: Option<i64>,
        connected_to_port_id: Option<i64>,
    ) -> AppResult<i64> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO device_port
                (equipment_id, port_number, port_type, status, speed,
                 connected_to_equipment_id, connected_to_port_id, description)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(data.equipment_id)
        .bind(data.port_number)
        .bind(&data.port_type)
        .bind(&data.status)
        .bind(&data.speed)
        .bind(connected_to_equipment_id)
        .bind(connected_to_port_id)
        .bind(&data.description)
        .fetch_one(conn)
        .await?;
        Ok(id)
    }

    /// Full update of a port row with resolved connection targets
    pub async fn update_row(
        &self,
        conn: &mut PgConnection,
        id: i64,
        data: &UpdateDevicePort,
        connected_to_equipment_id: Option<i64>,
        connected_to_port_id: Option<i64>,
    ) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE device_port
            SET equipment_id = $2, port_number = $3, port_type = $4, status = $5,
                speed = $6, connected_to_equipment_id = $7, connected_to_port_id = $8,
                description = $9
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(data.equipment_id)
        .bind(data.port_number)
        .bind(&data.port_type)
        .bind(&data.status)
        .bind(&data.speed)
        .bind(connected_to_equipment_id)
        .bind(connected_to_port_id)
        .bind(&data.description)
        .execute(conn)
        .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Device port {} not found", id)));
        }
        Ok(())
    }

    /// Set or clear the connection target columns of a port
    pub async fn set_connection(
        &self,
        conn: &mut PgConnection,
        id: i64,
        target: Option<(i64, i64)>,
    ) -> AppResult<()> {
        let (equipment_id, port_id) = match target {
            Some((eq, port)) => (Some(eq), Some(port)),
            None => (None, None),
        };
        let result = sqlx::query(
            "UPDATE device_port SET connected_to_equipment_id = $2, connected_to_port_id = $3 WHERE id = $1",
        )
        .bind(id)
        .bind(equipment_id)
        .bind(port_id)
        .execute(conn)
        .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Device port {} not found", id)));
        }
        Ok(())
    }

    /// Change the status of a port
    pub async fn set_status(
        &self,
        conn: &mut PgConnection,
        id: i64,
        status: &str,
    ) -> AppResult<()> {
        let result = sqlx::query("UPDATE device_port SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(conn)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Device port {} not found", id)));
        }
        Ok(())
    }

    /// Delete a port row
    pub async fn delete_row(&self, conn: &mut PgConnection, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM device_port WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Device port {} not found", id)));
        }
        Ok(())
    }
}
