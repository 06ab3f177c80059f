//! Equipment types repository

use sqlx::{PgConnection, Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::equipment_type::{CreateEquipmentType, EquipmentType, UpdateEquipmentType},
};

#[derive(Clone)]
pub struct EquipmentTypesRepository {
    pool: Pool<Postgres>,
}

impl EquipmentTypesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all equipment types
    pub async fn list(&self) -> AppResult<Vec<EquipmentType>> {
        let rows = sqlx::query_as::<_, EquipmentType>(
            "SELECT * FROM equipment_type ORDER BY type_name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get equipment type by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<EquipmentType> {
        sqlx::query_as::<_, EquipmentType>("SELECT * FROM equipment_type WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment type {} not found", id)))
    }

    /// Get equipment type by its unique name
    pub async fn get_by_name(&self, type_name: &str) -> AppResult<EquipmentType> {
        sqlx::query_as::<_, EquipmentType>("SELECT * FROM equipment_type WHERE type_name = $1")
            .bind(type_name)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Equipment type '{}' not found", type_name))
            })
    }

    /// List equipment types of a manufacturer
    pub async fn list_by_manufacturer(&self, manufacturer: &str) -> AppResult<Vec<EquipmentType>> {
        let rows = sqlx::query_as::<_, EquipmentType>(
            "SELECT * FROM equipment_type WHERE manufacturer = $1",
        )
        .bind(manufacturer)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// List equipment types of a manufacturer, sorted by model
    pub async fn list_by_manufacturer_sorted(
        &self,
        manufacturer: &str,
    ) -> AppResult<Vec<EquipmentType>> {
        let rows = sqlx::query_as::<_, EquipmentType>(
            "SELECT * FROM equipment_type WHERE manufacturer = $1 ORDER BY model",
        )
        .bind(manufacturer)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get equipment type by manufacturer and model
    pub async fn get_by_manufacturer_and_model(
        &self,
        manufacturer: &str,
        model: &str,
    ) -> AppResult<EquipmentType> {
        sqlx::query_as::<_, EquipmentType>(
            "SELECT * FROM equipment_type WHERE manufacturer = $1 AND model = $2",
        )
        .bind(manufacturer)
        .bind(model)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Equipment type {} {} not found",
                manufacturer, model
            ))
        })
    }

    /// Check whether a type name is taken
    pub async fn exists_by_name(&self, type_name: &str) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM equipment_type WHERE type_name = $1)")
                .bind(type_name)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    // -- transaction-scoped primitives --

    /// Check existence of an equipment type within a transaction
    pub async fn exists_in(&self, conn: &mut PgConnection, id: i64) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM equipment_type WHERE id = $1)")
                .bind(id)
                .fetch_one(conn)
                .await?;
        Ok(exists)
    }

    /// Find which type row owns a name, if any
    pub async fn name_owner(
        &self,
        conn: &mut PgConnection,
        type_name: &str,
    ) -> AppResult<Option<i64>> {
        let id = sqlx::query_scalar("SELECT id FROM equipment_type WHERE type_name = $1")
            .bind(type_name)
            .fetch_optional(conn)
            .await?;
        Ok(id)
    }

    /// Count equipment rows referencing a type
    pub async fn equipment_using(&self, conn: &mut PgConnection, id: i64) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM equipment WHERE type_id = $1")
            .bind(id)
            .fetch_one(conn)
            .await?;
        Ok(count)
    }

    /// Insert a new equipment type
    pub async fn insert(
        &self,
        conn: &mut PgConnection,
        data: &CreateEquipmentType,
    ) -> AppResult<EquipmentType> {
        let row = sqlx::query_as::<_, EquipmentType>(
            r#"
            INSERT INTO equipment_type
                (type_name, manufacturer, model, default_port_count, connection_type, osi_level, description)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&data.type_name)
        .bind(&data.manufacturer)
        .bind(&data.model)
        .bind(data.default_port_count)
        .bind(&data.connection_type)
        .bind(&data.osi_level)
        .bind(&data.description)
        .fetch_one(conn)
        .await?;
        Ok(row)
    }

    /// Update an equipment type
    pub async fn update_row(
        &self,
        conn: &mut PgConnection,
        id: i64,
        data: &UpdateEquipmentType,
    ) -> AppResult<EquipmentType> {
        sqlx::query_as::<_, EquipmentType>(
            r#"
            UPDATE equipment_type
            SET type_name = $2, manufacturer = $3, model = $4, default_port_count = $5,
                connection_type = $6, osi_level = $7, description = $8
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.type_name)
        .bind(&data.manufacturer)
        .bind(&data.model)
        .bind(data.default_port_count)
        .bind(&data.connection_type)
        .bind(&data.osi_level)
        .bind(&data.description)
        .fetch_optional(conn)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Equipment type {} not found", id)))
    }

    /// Delete an equipment type
    pub async fn delete_row(&self, conn: &mut PgConnection, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM equipment_type WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Equipment type {} not found",
                id
            )));
        }
        Ok(())
    }
}
