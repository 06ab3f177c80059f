//! Maintenance history service

use chrono::{Duration, NaiveDate, Utc};

use crate::{
    error::{AppError, AppResult},
    models::maintenance::{CreateMaintenance, MaintenanceView, UpdateMaintenance},
    repository::Repository,
};

/// Window for the recent-history lookup when no day count is given
const DEFAULT_RECENT_DAYS: i64 = 30;

#[derive(Clone)]
pub struct MaintenanceService {
    repository: Repository,
}

impl MaintenanceService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<MaintenanceView>> {
        self.repository.maintenance.list_views().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<MaintenanceView> {
        self.repository.maintenance.get_view(id).await
    }

    /// Maintenance history of an equipment, newest first
    pub async fn list_by_equipment(&self, equipment_id: i64) -> AppResult<Vec<MaintenanceView>> {
        self.require_equipment(equipment_id).await?;
        self.repository
            .maintenance
            .list_by_equipment(equipment_id)
            .await
    }

    pub async fn get_latest(&self, equipment_id: i64) -> AppResult<MaintenanceView> {
        self.require_equipment(equipment_id).await?;
        self.repository.maintenance.get_latest_view(equipment_id).await
    }

    pub async fn list_by_equipment_and_type(
        &self,
        equipment_id: i64,
        maintenance_type: &str,
    ) -> AppResult<Vec<MaintenanceView>> {
        self.require_equipment(equipment_id).await?;
        self.repository
            .maintenance
            .list_by_equipment_and_type(equipment_id, maintenance_type)
            .await
    }

    /// Records performed by an employee; the employee must exist
    pub async fn list_by_employee(&self, employee_id: i64) -> AppResult<Vec<MaintenanceView>> {
        self.repository.employees.get_by_id(employee_id).await?;
        self.repository.maintenance.list_by_employee(employee_id).await
    }

    pub async fn list_by_date_range(
        &self,
        start: chrono::DateTime<Utc>,
        end: chrono::DateTime<Utc>,
    ) -> AppResult<Vec<MaintenanceView>> {
        if end < start {
            return Err(AppError::BadRequest(
                "Date range end precedes start".to_string(),
            ));
        }
        self.repository.maintenance.list_by_date_range(start, end).await
    }

    /// Records of an equipment within the last `days` days
    pub async fn list_recent(
        &self,
        equipment_id: i64,
        days: Option<i64>,
    ) -> AppResult<Vec<MaintenanceView>> {
        self.require_equipment(equipment_id).await?;
        let days = days.unwrap_or(DEFAULT_RECENT_DAYS);
        if days < 0 {
            return Err(AppError::BadRequest(format!("Invalid day count: {}", days)));
        }
        let cutoff = Utc::now() - Duration::days(days);
        self.repository.maintenance.list_since(equipment_id, cutoff).await
    }

    pub async fn list_by_type(&self, maintenance_type: &str) -> AppResult<Vec<MaintenanceView>> {
        self.repository.maintenance.list_by_type(maintenance_type).await
    }

    /// Records whose next maintenance date has passed, soonest first
    pub async fn list_overdue(&self) -> AppResult<Vec<MaintenanceView>> {
        self.repository
            .maintenance
            .list_overdue(Utc::now().date_naive())
            .await
    }

    pub async fn count_by_equipment(&self, equipment_id: i64) -> AppResult<i64> {
        self.require_equipment(equipment_id).await?;
        self.repository
            .maintenance
            .count_by_equipment(equipment_id)
            .await
    }

    pub async fn count_by_type(&self, maintenance_type: &str) -> AppResult<i64> {
        self.repository.maintenance.count_by_type(maintenance_type).await
    }

    /// Create a new maintenance record
    pub async fn create(&self, data: &CreateMaintenance) -> AppResult<MaintenanceView> {
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
        if let Some(employee_id) = data.performed_by_id {
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

        let date = data.date.unwrap_or_else(Utc::now);
        let id = self.repository.maintenance.insert(&mut tx, data, date).await?;
        tx.commit().await?;

        tracing::info!(
            "Recorded {} maintenance for equipment {}",
            data.maintenance_type,
            data.equipment_id
        );
        self.repository.maintenance.get_view(id).await
    }

    /// Full update of a maintenance record
    pub async fn update(&self, id: i64, data: &UpdateMaintenance) -> AppResult<MaintenanceView> {
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
        if let Some(employee_id) = data.performed_by_id {
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

        self.repository.maintenance.update_row(&mut tx, id, data).await?;
        tx.commit().await?;

        self.repository.maintenance.get_view(id).await
    }

    /// Set the next maintenance date on the equipment's latest record
    pub async fn schedule_next(
        &self,
        equipment_id: i64,
        next_date: NaiveDate,
    ) -> AppResult<MaintenanceView> {
        let mut tx = self.repository.pool.begin().await?;

        if !self
            .repository
            .equipment
            .exists_in(&mut tx, equipment_id)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "Equipment {} not found",
                equipment_id
            )));
        }

        let latest = self
            .repository
            .maintenance
            .latest_id_for(&mut tx, equipment_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "No maintenance history for equipment {}",
                    equipment_id
                ))
            })?;

        self.repository
            .maintenance
            .set_next_date(&mut tx, latest, next_date)
            .await?;
        tx.commit().await?;

        self.repository.maintenance.get_view(latest).await
    }

    /// Delete a maintenance record
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut tx = self.repository.pool.begin().await?;
        self.repository.maintenance.delete_row(&mut tx, id).await?;
        tx.commit().await?;

        tracing::info!("Deleted maintenance record {}", id);
        Ok(())
    }

    async fn require_equipment(&self, equipment_id: i64) -> AppResult<()> {
        self.repository.equipment.get_view(equipment_id).await?;
        Ok(())
    }
}
