//! IP addresses repository

use chrono::NaiveDate;
use sqlx::{PgConnection, Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::ip_address::{CreateIpAddress, IpAddress, IpAddressView, UpdateIpAddress},
};

const VIEW_SELECT: &str = r#"
SELECT i.id, i.equipment_id, e.name AS equipment_name,
       i.ip_address, i.subnet_mask, i.gateway, i.network_type,
       i.is_primary, i.assigned_date
FROM ip_address i
JOIN equipment e ON e.id = i.equipment_id
"#;

#[derive(Clone)]
pub struct IpAddressesRepository {
    pool: Pool<Postgres>,
}

impl IpAddressesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all IP address assignments
    pub async fn list_views(&self) -> AppResult<Vec<IpAddressView>> {
        let query = format!("{} ORDER BY i.ip_address", VIEW_SELECT);
        let rows = sqlx::query_as::<_, IpAddressView>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get an IP address view by ID
    pub async fn get_view(&self, id: i64) -> AppResult<IpAddressView> {
        let query = format!("{} WHERE i.id = $1", VIEW_SELECT);
        sqlx::query_as::<_, IpAddressView>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("IP address {} not found", id)))
    }

    /// List IP addresses of an equipment
    pub async fn list_by_equipment(&self, equipment_id: i64) -> AppResult<Vec<IpAddressView>> {
        let query = format!("{} WHERE i.equipment_id = $1", VIEW_SELECT);
        let rows = sqlx::query_as::<_, IpAddressView>(&query)
            .bind(equipment_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get the primary IP address of an equipment
    pub async fn get_primary_view(&self, equipment_id: i64) -> AppResult<IpAddressView> {
        let query = format!(
            "{} WHERE i.equipment_id = $1 AND i.is_primary",
            VIEW_SELECT
        );
        sqlx::query_as::<_, IpAddressView>(&query)
            .bind(equipment_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Primary IP address of equipment {} not found",
                    equipment_id
                ))
            })
    }

    /// Look up an assignment by its IP string
    pub async fn get_view_by_ip(&self, ip_address: &str) -> AppResult<IpAddressView> {
        let query = format!("{} WHERE i.ip_address = $1", VIEW_SELECT);
        sqlx::query_as::<_, IpAddressView>(&query)
            .bind(ip_address)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("IP address '{}' not found", ip_address)))
    }

    /// List IP addresses by network type
    pub async fn list_by_network_type(&self, network_type: &str) -> AppResult<Vec<IpAddressView>> {
        let query = format!("{} WHERE i.network_type = $1", VIEW_SELECT);
        let rows = sqlx::query_as::<_, IpAddressView>(&query)
            .bind(network_type)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// List IP addresses of an equipment filtered by network type
    pub async fn list_by_equipment_and_network_type(
        &self,
        equipment_id: i64,
        network_type: &str,
    ) -> AppResult<Vec<IpAddressView>> {
        let query = format!(
            "{} WHERE i.equipment_id = $1 AND i.network_type = $2",
            VIEW_SELECT
        );
        let rows = sqlx::query_as::<_, IpAddressView>(&query)
            .bind(equipment_id)
            .bind(network_type)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// List IP addresses sharing a subnet mask
    pub async fn list_by_subnet_mask(&self, subnet_mask: &str) -> AppResult<Vec<IpAddressView>> {
        let query = format!("{} WHERE i.subnet_mask = $1", VIEW_SELECT);
        let rows = sqlx::query_as::<_, IpAddressView>(&query)
            .bind(subnet_mask)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Check whether an IP string is assigned anywhere
    pub async fn exists_by_ip(&self, ip_address: &str) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM ip_address WHERE ip_address = $1)")
                .bind(ip_address)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// Count IP addresses of an equipment
    pub async fn count_by_equipment(&self, equipment_id: i64) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM ip_address WHERE equipment_id = $1")
                .bind(equipment_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }

    // -- transaction-scoped primitives --

    /// Load an assignment row within a transaction
    pub async fn get_row(&self, conn: &mut PgConnection, id: i64) -> AppResult<IpAddress> {
        sqlx::query_as::<_, IpAddress>("SELECT * FROM ip_address WHERE id = $1")
            .bind(id)
            .fetch_optional(conn)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("IP address {} not found", id)))
    }

    /// Find which assignment owns an IP string, if any
    pub async fn ip_owner(
        &self,
        conn: &mut PgConnection,
        ip_address: &str,
    ) -> AppResult<Option<i64>> {
        let id = sqlx::query_scalar("SELECT id FROM ip_address WHERE ip_address = $1")
            .bind(ip_address)
            .fetch_optional(conn)
            .await?;
        Ok(id)
    }

    /// Find the current primary assignment of an equipment, if any
    pub async fn primary_id_for(
        &self,
        conn: &mut PgConnection,
        equipment_id: i64,
    ) -> AppResult<Option<i64>> {
        let id = sqlx::query_scalar(
            "SELECT id FROM ip_address WHERE equipment_id = $1 AND is_primary FOR UPDATE",
        )
        .bind(equipment_id)
        .fetch_optional(conn)
        .await?;
        Ok(id)
    }

    /// Insert a new assignment row, returning its id
    pub async fn insert(
        &self,
        conn: &mut PgConnection,
        data: &CreateIpAddress,
        assigned_date: NaiveDate,
    ) -> AppResult<i64> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO ip_address
                (equipment_id, ip_address, subnet_mask, gateway, network_type, is_primary, assigned_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(data.equipment_id)
        .bind(&data.ip_address)
        .bind(&data.subnet_mask)
        .bind(&data.gateway)
        .bind(&data.network_type)
        .bind(data.is_primary)
        .bind(assigned_date)
        .fetch_one(conn)
        .await?;
        Ok(id)
    }

    /// Full update of an assignment row
    pub async fn update_row(
        &self,
        conn: &mut PgConnection,
        id: i64,
        data: &UpdateIpAddress,
    ) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE ip_address
            SET equipment_id = $2, ip_address = $3, subnet_mask = $4, gateway = $5,
                network_type = $6, is_primary = $7,
                assigned_date = COALESCE($8, assigned_date)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(data.equipment_id)
        .bind(&data.ip_address)
        .bind(&data.subnet_mask)
        .bind(&data.gateway)
        .bind(&data.network_type)
        .bind(data.is_primary)
        .bind(data.assigned_date)
        .execute(conn)
        .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("IP address {} not found", id)));
        }
        Ok(())
    }

    /// Set or clear the primary flag on an assignment
    pub async fn set_primary_flag(
        &self,
        conn: &mut PgConnection,
        id: i64,
        is_primary: bool,
    ) -> AppResult<()> {
        let result = sqlx::query("UPDATE ip_address SET is_primary = $2 WHERE id = $1")
            .bind(id)
            .bind(is_primary)
            .execute(conn)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("IP address {} not found", id)));
        }
        Ok(())
    }

    /// Delete an assignment row
    pub async fn delete_row(&self, conn: &mut PgConnection, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM ip_address WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("IP address {} not found", id)));
        }
        Ok(())
    }
}
