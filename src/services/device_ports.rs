//! Device port service
//!
//! Owns the port-connection state machine. A port is Unconnected (both
//! target columns NULL) or Connected (target equipment + target port). The
//! dedicated connect path refuses to take an occupied target; the
//! create/update path resolves targets without that occupancy check. The
//! two entry points are deliberately not equivalent.
//!
//! Links are one-directional: connect(A, B) sets A's target columns only,
//! B stays unconnected from its own point of view.

use std::str::FromStr;

use sqlx::PgConnection;

use crate::{
    error::{AppError, AppResult},
    models::device_port::{CreateDevicePort, DevicePortView, UpdateDevicePort},
    models::enums::PortStatus,
    repository::Repository,
};

#[derive(Clone)]
pub struct DevicePortsService {
    repository: Repository,
}

impl DevicePortsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<DevicePortView>> {
        self.repository.device_ports.list_views().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<DevicePortView> {
        self.repository.device_ports.get_view(id).await
    }

    /// List ports of an equipment, ordered by port number
    pub async fn list_by_equipment(&self, equipment_id: i64) -> AppResult<Vec<DevicePortView>> {
        self.require_equipment(equipment_id).await?;
        self.repository
            .device_ports
            .list_by_equipment(equipment_id)
            .await
    }

    pub async fn get_by_equipment_and_number(
        &self,
        equipment_id: i64,
        port_number: i32,
    ) -> AppResult<DevicePortView> {
        self.repository
            .device_ports
            .get_by_equipment_and_number(equipment_id, port_number)
            .await
    }

    pub async fn list_by_status(&self, status: &str) -> AppResult<Vec<DevicePortView>> {
        Self::check_status(status)?;
        self.repository.device_ports.list_by_status(status).await
    }

    /// List active ports of an equipment
    pub async fn list_active(&self, equipment_id: i64) -> AppResult<Vec<DevicePortView>> {
        self.require_equipment(equipment_id).await?;
        self.repository
            .device_ports
            .list_by_equipment_and_status(equipment_id, "Active")
            .await
    }

    /// List unconnected ports of an equipment
    pub async fn list_available(&self, equipment_id: i64) -> AppResult<Vec<DevicePortView>> {
        self.require_equipment(equipment_id).await?;
        self.repository.device_ports.list_available(equipment_id).await
    }

    /// List connected ports of an equipment
    pub async fn list_occupied(&self, equipment_id: i64) -> AppResult<Vec<DevicePortView>> {
        self.require_equipment(equipment_id).await?;
        self.repository.device_ports.list_occupied(equipment_id).await
    }

    /// Reverse lookup: what connects to this equipment
    pub async fn list_connected_to(&self, equipment_id: i64) -> AppResult<Vec<DevicePortView>> {
        self.require_equipment(equipment_id).await?;
        self.repository
            .device_ports
            .list_connected_to(equipment_id)
            .await
    }

    pub async fn list_by_port_type(&self, port_type: &str) -> AppResult<Vec<DevicePortView>> {
        self.repository.device_ports.list_by_port_type(port_type).await
    }

    pub async fn list_by_equipment_type_and_status(
        &self,
        equipment_id: i64,
        port_type: &str,
        status: &str,
    ) -> AppResult<Vec<DevicePortView>> {
        Self::check_status(status)?;
        self.require_equipment(equipment_id).await?;
        self.repository
            .device_ports
            .list_by_equipment_type_and_status(equipment_id, port_type, status)
            .await
    }

    pub async fn count_by_equipment(&self, equipment_id: i64) -> AppResult<i64> {
        self.require_equipment(equipment_id).await?;
        self.repository
            .device_ports
            .count_by_equipment(equipment_id)
            .await
    }

    pub async fn count_active(&self, equipment_id: i64) -> AppResult<i64> {
        self.require_equipment(equipment_id).await?;
        self.repository
            .device_ports
            .count_by_equipment_and_status(equipment_id, "Active")
            .await
    }

    /// Create a new port, enforcing per-equipment port-number uniqueness
    pub async fn create(&self, data: &CreateDevicePort) -> AppResult<DevicePortView> {
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
            .device_ports
            .number_owner(&mut tx, data.equipment_id, data.port_number)
            .await?
            .is_some()
        {
            return Err(AppError::Duplicate(format!(
                "Port {} already exists on equipment {}",
                data.port_number, data.equipment_id
            )));
        }

        let (target_equipment, target_port) = self
            .resolve_connections(
                &mut tx,
                data.connected_to_equipment_id,
                data.connected_to_port_id,
            )
            .await?;

        let id = self
            .repository
            .device_ports
            .insert(&mut tx, data, target_equipment, target_port)
            .await?;
        tx.commit().await?;

        tracing::info!(
            "Created port {} on equipment {} (number {})",
            id,
            data.equipment_id,
            data.port_number
        );
        self.repository.device_ports.get_view(id).await
    }

    /// Full update of a port
    ///
    /// The port-number uniqueness check only re-runs when the owning
    /// equipment or the number actually changed.
    pub async fn update(&self, id: i64, data: &UpdateDevicePort) -> AppResult<DevicePortView> {
        let mut tx = self.repository.pool.begin().await?;

        let existing = self.repository.device_ports.get_row(&mut tx, id).await?;

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

        let placement_changed = data.equipment_id != existing.equipment_id
            || data.port_number != existing.port_number;
        if placement_changed
            && self
                .repository
                .device_ports
                .number_owner(&mut tx, data.equipment_id, data.port_number)
                .await?
                .is_some()
        {
            return Err(AppError::Duplicate(format!(
                "Port {} already exists on equipment {}",
                data.port_number, data.equipment_id
            )));
        }

        let (target_equipment, target_port) = self
            .resolve_connections(
                &mut tx,
                data.connected_to_equipment_id,
                data.connected_to_port_id,
            )
            .await?;

        self.repository
            .device_ports
            .update_row(&mut tx, id, data, target_equipment, target_port)
            .await?;
        tx.commit().await?;

        self.repository.device_ports.get_view(id).await
    }

    /// Connect a source port to a target port
    ///
    /// Preconditions, checked in order: both ports exist, the ports are
    /// distinct, they belong to different equipment, and the target is
    /// currently unconnected. Only the source side is written.
    pub async fn connect(&self, source_id: i64, target_id: i64) -> AppResult<DevicePortView> {
        let mut tx = self.repository.pool.begin().await?;

        let source = self
            .repository
            .device_ports
            .get_row_locked(&mut tx, source_id)
            .await?;
        let target = self
            .repository
            .device_ports
            .get_row_locked(&mut tx, target_id)
            .await?;

        if source.id == target.id {
            return Err(AppError::InvalidConnection(format!(
                "Port {} cannot be connected to itself",
                source_id
            )));
        }
        if source.equipment_id == target.equipment_id {
            return Err(AppError::InvalidConnection(format!(
                "Ports {} and {} belong to the same equipment",
                source_id, target_id
            )));
        }
        if target.connected_to_port_id.is_some() {
            return Err(AppError::InvalidConnection(format!(
                "Target port {} is already connected",
                target_id
            )));
        }

        self.repository
            .device_ports
            .set_connection(&mut tx, source.id, Some((target.equipment_id, target.id)))
            .await?;
        tx.commit().await?;

        tracing::info!("Connected port {} -> port {}", source_id, target_id);
        self.repository.device_ports.get_view(source_id).await
    }

    /// Clear a port's connection target; idempotent once the port exists
    pub async fn disconnect(&self, id: i64) -> AppResult<DevicePortView> {
        let mut tx = self.repository.pool.begin().await?;

        self.repository.device_ports.get_row(&mut tx, id).await?;
        self.repository
            .device_ports
            .set_connection(&mut tx, id, None)
            .await?;
        tx.commit().await?;

        tracing::info!("Disconnected port {}", id);
        self.repository.device_ports.get_view(id).await
    }

    /// The port this port is connected to
    pub async fn get_connected(&self, id: i64) -> AppResult<DevicePortView> {
        let mut conn = self.repository.pool.acquire().await?;
        let port = self.repository.device_ports.get_row(&mut conn, id).await?;

        match port.connected_to_port_id {
            Some(target_id) => self.repository.device_ports.get_view(target_id).await,
            None => Err(AppError::NotFound(format!("Port {} is not connected", id))),
        }
    }

    /// Whether this port holds a connection target of its own
    pub async fn is_connected(&self, id: i64) -> AppResult<bool> {
        let mut conn = self.repository.pool.acquire().await?;
        let port = self.repository.device_ports.get_row(&mut conn, id).await?;
        Ok(port.is_connected())
    }

    /// Change the status of a port
    pub async fn change_status(&self, id: i64, status: &str) -> AppResult<DevicePortView> {
        Self::check_status(status)?;

        let mut tx = self.repository.pool.begin().await?;
        self.repository
            .device_ports
            .set_status(&mut tx, id, status)
            .await?;
        tx.commit().await?;

        self.repository.device_ports.get_view(id).await
    }

    /// Delete a port
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut tx = self.repository.pool.begin().await?;
        self.repository.device_ports.delete_row(&mut tx, id).await?;
        tx.commit().await?;

        tracing::info!("Deleted port {}", id);
        Ok(())
    }

    /// Resolve the connection target pair given on create/update
    ///
    /// Each side resolves independently; when both are given the target
    /// port must belong to the target equipment. Unlike `connect`, this
    /// path does not reject an already-occupied target.
    async fn resolve_connections(
        &self,
        conn: &mut PgConnection,
        connected_to_equipment_id: Option<i64>,
        connected_to_port_id: Option<i64>,
    ) -> AppResult<(Option<i64>, Option<i64>)> {
        if let Some(equipment_id) = connected_to_equipment_id {
            if !self.repository.equipment.exists_in(conn, equipment_id).await? {
                return Err(AppError::NotFound(format!(
                    "Equipment {} not found",
                    equipment_id
                )));
            }
        }

        if let Some(port_id) = connected_to_port_id {
            let target = self.repository.device_ports.get_row(conn, port_id).await?;
            if let Some(equipment_id) = connected_to_equipment_id {
                if target.equipment_id != equipment_id {
                    return Err(AppError::InvalidConnection(format!(
                        "Port {} does not belong to equipment {}",
                        port_id, equipment_id
                    )));
                }
            }
        }

        Ok((connected_to_equipment_id, connected_to_port_id))
    }

    async fn require_equipment(&self, equipment_id: i64) -> AppResult<()> {
        self.repository.equipment.get_view(equipment_id).await?;
        Ok(())
    }

    fn check_status(status: &str) -> AppResult<()> {
        PortStatus::from_str(status).map_err(|_| {
            AppError::BadRequest(format!(
                "Unknown port status '{}', expected one of: {}",
                status,
                PortStatus::ALL.join(", ")
            ))
        })?;
        Ok(())
    }
}
