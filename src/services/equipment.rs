//! Equipment service
//!
//! Creates and updates run their foreign-key and uniqueness checks in one
//! transaction; reads return the assembled views straight from the repository.

use std::str::FromStr;

use chrono::{Months, NaiveDate, Utc};

use crate::{
    config::MaintenanceConfig,
    error::{AppError, AppResult},
    models::enums::EquipmentStatus,
    models::equipment::{CreateEquipment, EquipmentSummary, EquipmentView, UpdateEquipment},
    repository::Repository,
};

/// Status applied when a create request omits one
const DEFAULT_STATUS: &str = "Active";

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
    maintenance: MaintenanceConfig,
}

impl EquipmentService {
    pub fn new(repository: Repository, maintenance: MaintenanceConfig) -> Self {
        Self {
            repository,
            maintenance,
        }
    }

    pub async fn list(&self) -> AppResult<Vec<EquipmentSummary>> {
        self.repository.equipment.list_summaries().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<EquipmentView> {
        self.repository.equipment.get_view(id).await
    }

    pub async fn get_by_serial(&self, serial_number: &str) -> AppResult<EquipmentView> {
        self.repository
            .equipment
            .get_view_by_serial(serial_number)
            .await
    }

    pub async fn get_by_mac(&self, mac_address: &str) -> AppResult<EquipmentView> {
        self.repository.equipment.get_view_by_mac(mac_address).await
    }

    pub async fn get_by_ip(&self, ip_address: &str) -> AppResult<EquipmentView> {
        self.repository.equipment.get_view_by_ip(ip_address).await
    }

    /// List equipment of a type; the type itself must exist
    pub async fn list_by_type(&self, type_id: i64) -> AppResult<Vec<EquipmentSummary>> {
        self.repository.equipment_types.get_by_id(type_id).await?;
        self.repository.equipment.list_by_type(type_id).await
    }

    /// List equipment assigned to an employee; the employee must exist
    pub async fn list_by_employee(&self, employee_id: i64) -> AppResult<Vec<EquipmentSummary>> {
        self.repository.employees.get_by_id(employee_id).await?;
        self.repository.equipment.list_by_employee(employee_id).await
    }

    pub async fn list_by_status(&self, status: &str) -> AppResult<Vec<EquipmentSummary>> {
        Self::check_status(status)?;
        self.repository.equipment.list_by_status(status).await
    }

    pub async fn search_by_name(&self, name: &str) -> AppResult<Vec<EquipmentSummary>> {
        self.repository.equipment.search_by_name(name).await
    }

    pub async fn search_by_address(&self, address: &str) -> AppResult<Vec<EquipmentSummary>> {
        self.repository.equipment.search_by_address(address).await
    }

    pub async fn list_by_type_and_status(
        &self,
        type_id: i64,
        status: &str,
    ) -> AppResult<Vec<EquipmentSummary>> {
        Self::check_status(status)?;
        self.repository.equipment_types.get_by_id(type_id).await?;
        self.repository
            .equipment
            .list_by_type_and_status(type_id, status)
            .await
    }

    pub async fn list_added_after(&self, date: NaiveDate) -> AppResult<Vec<EquipmentSummary>> {
        self.repository.equipment.list_added_after(date).await
    }

    /// List equipment not updated within the staleness window
    ///
    /// `months` overrides the configured threshold for this request.
    pub async fn list_needing_maintenance(
        &self,
        months: Option<u32>,
    ) -> AppResult<Vec<EquipmentSummary>> {
        let months = months.unwrap_or(self.maintenance.staleness_months);
        let threshold = Utc::now()
            .date_naive()
            .checked_sub_months(Months::new(months))
            .ok_or_else(|| AppError::BadRequest(format!("Invalid months value: {}", months)))?;
        self.repository
            .equipment
            .list_needing_maintenance(threshold)
            .await
    }

    pub async fn count_by_type(&self, type_id: i64) -> AppResult<i64> {
        self.repository.equipment_types.get_by_id(type_id).await?;
        self.repository.equipment.count_by_type(type_id).await
    }

    pub async fn count_by_status(&self, status: &str) -> AppResult<i64> {
        Self::check_status(status)?;
        self.repository.equipment.count_by_status(status).await
    }

    /// Create new equipment, resolving foreign keys and unique fields
    pub async fn create(&self, data: &CreateEquipment) -> AppResult<EquipmentView> {
        let mut tx = self.repository.pool.begin().await?;

        if !self
            .repository
            .equipment_types
            .exists_in(&mut tx, data.type_id)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "Equipment type {} not found",
                data.type_id
            )));
        }
        if let Some(employee_id) = data.employee_id {
            if !self
                .repository
                .employees
                .exists_in(&mut tx, employee_id)
                .await?
            {
                return Err(AppError::NotFound(format!(
                    "Employee {} not found",
                    employee_id
                )));
            }
        }
        if let Some(serial) = &data.serial_number {
            if self
                .repository
                .equipment
                .serial_owner(&mut tx, serial)
                .await?
                .is_some()
            {
                return Err(AppError::Duplicate(format!(
                    "Equipment with serial number '{}' already exists",
                    serial
                )));
            }
        }
        if let Some(mac) = &data.mac_address {
            if self
                .repository
                .equipment
                .mac_owner(&mut tx, mac)
                .await?
                .is_some()
            {
                return Err(AppError::Duplicate(format!(
                    "Equipment with MAC address '{}' already exists",
                    mac
                )));
            }
        }

        let status = data.status.as_deref().unwrap_or(DEFAULT_STATUS);
        let date_added = data.date_added.unwrap_or_else(|| Utc::now().date_naive());

        let id = self
            .repository
            .equipment
            .insert(&mut tx, data, status, date_added)
            .await?;
        tx.commit().await?;

        tracing::info!("Created equipment {} '{}'", id, data.name);
        self.repository.equipment.get_view(id).await
    }

    /// Full update of an equipment record
    pub async fn update(&self, id: i64, data: &UpdateEquipment) -> AppResult<EquipmentView> {
        let mut tx = self.repository.pool.begin().await?;

        if !self
            .repository
            .equipment_types
            .exists_in(&mut tx, data.type_id)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "Equipment type {} not found",
                data.type_id
            )));
        }
        if let Some(employee_id) = data.employee_id {
            if !self
                .repository
                .employees
                .exists_in(&mut tx, employee_id)
                .await?
            {
                return Err(AppError::NotFound(format!(
                    "Employee {} not found",
                    employee_id
                )));
            }
        }
        if let Some(serial) = &data.serial_number {
            if let Some(owner) = self
                .repository
                .equipment
                .serial_owner(&mut tx, serial)
                .await?
            {
                if owner != id {
                    return Err(AppError::Duplicate(format!(
                        "Equipment with serial number '{}' already exists",
                        serial
                    )));
                }
            }
        }
        if let Some(mac) = &data.mac_address {
            if let Some(owner) = self.repository.equipment.mac_owner(&mut tx, mac).await? {
                if owner != id {
                    return Err(AppError::Duplicate(format!(
                        "Equipment with MAC address '{}' already exists",
                        mac
                    )));
                }
            }
        }

        let status = data.status.as_deref().unwrap_or(DEFAULT_STATUS);
        let date_updated = data.date_updated.unwrap_or_else(|| Utc::now().date_naive());

        self.repository
            .equipment
            .update_row(&mut tx, id, data, status, date_updated)
            .await?;
        tx.commit().await?;

        self.repository.equipment.get_view(id).await
    }

    /// Change equipment status, bumping the update date
    pub async fn change_status(&self, id: i64, status: &str) -> AppResult<EquipmentView> {
        Self::check_status(status)?;

        let mut tx = self.repository.pool.begin().await?;
        self.repository
            .equipment
            .set_status(&mut tx, id, status, Utc::now().date_naive())
            .await?;
        tx.commit().await?;

        tracing::info!("Equipment {} status changed to {}", id, status);
        self.repository.equipment.get_view(id).await
    }

    /// Delete equipment; owned ports, IPs and maintenance rows cascade
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut tx = self.repository.pool.begin().await?;
        self.repository.equipment.delete_row(&mut tx, id).await?;
        tx.commit().await?;

        tracing::info!("Deleted equipment {}", id);
        Ok(())
    }

    fn check_status(status: &str) -> AppResult<()> {
        EquipmentStatus::from_str(status).map_err(|_| {
            AppError::BadRequest(format!(
                "Unknown equipment status '{}', expected one of: {}",
                status,
                EquipmentStatus::ALL.join(", ")
            ))
        })?;
        Ok(())
    }
}
