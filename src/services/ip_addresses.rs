//! IP address service
//!
//! Enforces the two assignment invariants: the IP string is unique across
//! the whole system, and an equipment carries at most one primary address.
//! Every check-then-write runs in one transaction; the partial unique index
//! on (equipment_id) WHERE is_primary backs the primary check at the store.

use chrono::Utc;

use crate::{
    error::{AppError, AppResult},
    models::ip_address::{CreateIpAddress, IpAddressView, UpdateIpAddress},
    repository::Repository,
};

#[derive(Clone)]
pub struct IpAddressesService {
    repository: Repository,
}

impl IpAddressesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<IpAddressView>> {
        self.repository.ip_addresses.list_views().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<IpAddressView> {
        self.repository.ip_addresses.get_view(id).await
    }

    pub async fn list_by_equipment(&self, equipment_id: i64) -> AppResult<Vec<IpAddressView>> {
        self.require_equipment(equipment_id).await?;
        self.repository
            .ip_addresses
            .list_by_equipment(equipment_id)
            .await
    }

    pub async fn get_primary(&self, equipment_id: i64) -> AppResult<IpAddressView> {
        self.require_equipment(equipment_id).await?;
        self.repository
            .ip_addresses
            .get_primary_view(equipment_id)
            .await
    }

    pub async fn get_by_ip(&self, ip_address: &str) -> AppResult<IpAddressView> {
        self.repository.ip_addresses.get_view_by_ip(ip_address).await
    }

    pub async fn list_by_network_type(&self, network_type: &str) -> AppResult<Vec<IpAddressView>> {
        self.repository
            .ip_addresses
            .list_by_network_type(network_type)
            .await
    }

    pub async fn list_by_equipment_and_network_type(
        &self,
        equipment_id: i64,
        network_type: &str,
    ) -> AppResult<Vec<IpAddressView>> {
        self.require_equipment(equipment_id).await?;
        self.repository
            .ip_addresses
            .list_by_equipment_and_network_type(equipment_id, network_type)
            .await
    }

    pub async fn list_by_subnet_mask(&self, subnet_mask: &str) -> AppResult<Vec<IpAddressView>> {
        self.repository
            .ip_addresses
            .list_by_subnet_mask(subnet_mask)
            .await
    }

    pub async fn exists_by_ip(&self, ip_address: &str) -> AppResult<bool> {
        self.repository.ip_addresses.exists_by_ip(ip_address).await
    }

    pub async fn count_by_equipment(&self, equipment_id: i64) -> AppResult<i64> {
        self.require_equipment(equipment_id).await?;
        self.repository
            .ip_addresses
            .count_by_equipment(equipment_id)
            .await
    }

    /// Create a new assignment
    pub async fn create(&self, data: &CreateIpAddress) -> AppResult<IpAddressView> {
        let mut tx = self.repository.pool.begin().await?;

        if !self
            .repository
            .equipment
            .exists_in(&mut tx, data.equipment_id)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "Equipment {} not found",
                data.equipment_id
            )));
        }
        if self
            .repository
            .ip_addresses
            .ip_owner(&mut tx, &data.ip_address)
            .await?
            .is_some()
        {
            return Err(AppError::Duplicate(format!(
                "IP address '{}' is already assigned",
                data.ip_address
            )));
        }
        if data.is_primary {
            if let Some(current) = self
                .repository
                .ip_addresses
                .primary_id_for(&mut tx, data.equipment_id)
                .await?
            {
                return Err(AppError::PrimaryIpConflict(format!(
                    "Equipment {} already has primary IP address {}",
                    data.equipment_id, current
                )));
            }
        }

        let assigned_date = data.assigned_date.unwrap_or_else(|| Utc::now().date_naive());
        let id = self
            .repository
            .ip_addresses
            .insert(&mut tx, data, assigned_date)
            .await?;
        tx.commit().await?;

        tracing::info!(
            "Assigned IP '{}' to equipment {}",
            data.ip_address,
            data.equipment_id
        );
        self.repository.ip_addresses.get_view(id).await
    }

    /// Full update of an assignment
    ///
    /// Uniqueness re-checks exempt the record itself, so re-saving an
    /// already-primary assignment with is_primary passes. When the owner
    /// changes, the primary check runs against the new owner.
    pub async fn update(&self, id: i64, data: &UpdateIpAddress) -> AppResult<IpAddressView> {
        let mut tx = self.repository.pool.begin().await?;

        let existing = self.repository.ip_addresses.get_row(&mut tx, id).await?;

        if !self
            .repository
            .equipment
            .exists_in(&mut tx, data.equipment_id)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "Equipment {} not found",
                data.equipment_id
            )));
        }
        if data.ip_address != existing.ip_address {
            if self
                .repository
                .ip_addresses
                .ip_owner(&mut tx, &data.ip_address)
                .await?
                .is_some()
            {
                return Err(AppError::Duplicate(format!(
                    "IP address '{}' is already assigned",
                    data.ip_address
                )));
            }
        }
        if data.is_primary {
            if let Some(current) = self
                .repository
                .ip_addresses
                .primary_id_for(&mut tx, data.equipment_id)
                .await?
            {
                if current != id {
                    return Err(AppError::PrimaryIpConflict(format!(
                        "Equipment {} already has primary IP address {}",
                        data.equipment_id, current
                    )));
                }
            }
        }

        self.repository
            .ip_addresses
            .update_row(&mut tx, id, data)
            .await?;
        tx.commit().await?;

        self.repository.ip_addresses.get_view(id).await
    }

    /// Mark an assignment as the primary address of its equipment
    pub async fn set_primary(&self, id: i64) -> AppResult<IpAddressView> {
        let mut tx = self.repository.pool.begin().await?;

        let existing = self.repository.ip_addresses.get_row(&mut tx, id).await?;
        if let Some(current) = self
            .repository
            .ip_addresses
            .primary_id_for(&mut tx, existing.equipment_id)
            .await?
        {
            if current != id {
                return Err(AppError::PrimaryIpConflict(format!(
                    "Equipment {} already has primary IP address {}",
                    existing.equipment_id, current
                )));
            }
        }

        self.repository
            .ip_addresses
            .set_primary_flag(&mut tx, id, true)
            .await?;
        tx.commit().await?;

        tracing::info!("IP address {} marked primary", id);
        self.repository.ip_addresses.get_view(id).await
    }

    /// Clear the primary flag; nothing to validate when clearing
    pub async fn unset_primary(&self, id: i64) -> AppResult<IpAddressView> {
        let mut tx = self.repository.pool.begin().await?;

        self.repository.ip_addresses.get_row(&mut tx, id).await?;
        self.repository
            .ip_addresses
            .set_primary_flag(&mut tx, id, false)
            .await?;
        tx.commit().await?;

        self.repository.ip_addresses.get_view(id).await
    }

    /// Delete an assignment
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut tx = self.repository.pool.begin().await?;
        self.repository.ip_addresses.delete_row(&mut tx, id).await?;
        tx.commit().await?;

        tracing::info!("Deleted IP address {}", id);
        Ok(())
    }

    async fn require_equipment(&self, equipment_id: i64) -> AppResult<()> {
        self.repository.equipment.get_view(equipment_id).await?;
        Ok(())
    }
}
