//! Equipment type service

use crate::{
    error::{AppError, AppResult},
    models::equipment_type::{CreateEquipmentType, EquipmentType, UpdateEquipmentType},
    repository::Repository,
};

#[derive(Clone)]
pub struct EquipmentTypesService {
    repository: Repository,
}

impl EquipmentTypesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<EquipmentType>> {
        self.repository.equipment_types.list().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<EquipmentType> {
        self.repository.equipment_types.get_by_id(id).await
    }

    pub async fn get_by_name(&self, type_name: &str) -> AppResult<EquipmentType> {
        self.repository.equipment_types.get_by_name(type_name).await
    }

    pub async fn list_by_manufacturer(&self, manufacturer: &str) -> AppResult<Vec<EquipmentType>> {
        self.repository
            .equipment_types
            .list_by_manufacturer(manufacturer)
            .await
    }

    pub async fn list_by_manufacturer_sorted(
        &self,
        manufacturer: &str,
    ) -> AppResult<Vec<EquipmentType>> {
        self.repository
            .equipment_types
            .list_by_manufacturer_sorted(manufacturer)
            .await
    }

    pub async fn get_by_manufacturer_and_model(
        &self,
        manufacturer: &str,
        model: &str,
    ) -> AppResult<EquipmentType> {
        self.repository
            .equipment_types
            .get_by_manufacturer_and_model(manufacturer, model)
            .await
    }

    pub async fn exists_by_name(&self, type_name: &str) -> AppResult<bool> {
        self.repository
            .equipment_types
            .exists_by_name(type_name)
            .await
    }

    /// Create a new equipment type, enforcing name uniqueness
    pub async fn create(&self, data: &CreateEquipmentType) -> AppResult<EquipmentType> {
        let mut tx = self.repository.pool.begin().await?;

        if self
            .repository
            .equipment_types
            .name_owner(&mut tx, &data.type_name)
            .await?
            .is_some()
        {
            return Err(AppError::Duplicate(format!(
                "Equipment type '{}' already exists",
                data.type_name
            )));
        }

        let created = self.repository.equipment_types.insert(&mut tx, data).await?;
        tx.commit().await?;

        tracing::info!("Created equipment type {} '{}'", created.id, created.type_name);
        Ok(created)
    }

    /// Update an equipment type, re-checking name uniqueness against other rows
    pub async fn update(&self, id: i64, data: &UpdateEquipmentType) -> AppResult<EquipmentType> {
        let mut tx = self.repository.pool.begin().await?;

        if let Some(owner) = self
            .repository
            .equipment_types
            .name_owner(&mut tx, &data.type_name)
            .await?
        {
            if owner != id {
                return Err(AppError::Duplicate(format!(
                    "Equipment type '{}' already exists",
                    data.type_name
                )));
            }
        }

        let updated = self
            .repository
            .equipment_types
            .update_row(&mut tx, id, data)
            .await?;
        tx.commit().await?;
        Ok(updated)
    }

    /// Delete an equipment type; blocked while equipment still references it
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut tx = self.repository.pool.begin().await?;

        let in_use = self
            .repository
            .equipment_types
            .equipment_using(&mut tx, id)
            .await?;
        if in_use > 0 {
            return Err(AppError::InUse(format!(
                "Equipment type {} is referenced by {} equipment",
                id, in_use
            )));
        }

        self.repository
            .equipment_types
            .delete_row(&mut tx, id)
            .await?;
        tx.commit().await?;

        tracing::info!("Deleted equipment type {}", id);
        Ok(())
    }
}
