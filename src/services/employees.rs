//! Employee service

use crate::{
    error::{AppError, AppResult},
    models::employee::{CreateEmployee, Employee, UpdateEmployee},
    repository::Repository,
};

#[derive(Clone)]
pub struct EmployeesService {
    repository: Repository,
}

impl EmployeesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Employee>> {
        self.repository.employees.list().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Employee> {
        self.repository.employees.get_by_id(id).await
    }

    pub async fn search_by_name(&self, name: &str) -> AppResult<Vec<Employee>> {
        self.repository.employees.search_by_name(name).await
    }

    pub async fn get_by_email(&self, email: &str) -> AppResult<Employee> {
        self.repository.employees.get_by_email(email).await
    }

    pub async fn list_by_position(&self, position: &str) -> AppResult<Vec<Employee>> {
        self.repository.employees.list_by_position(position).await
    }

    pub async fn list_by_position_sorted(&self, position: &str) -> AppResult<Vec<Employee>> {
        self.repository
            .employees
            .list_by_position_sorted(position)
            .await
    }

    pub async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        self.repository.employees.exists_by_email(email).await
    }

    pub async fn count(&self) -> AppResult<i64> {
        self.repository.employees.count().await
    }

    /// Create a new employee, enforcing email uniqueness when an email is given
    pub async fn create(&self, data: &CreateEmployee) -> AppResult<Employee> {
        let mut tx = self.repository.pool.begin().await?;

        if let Some(email) = &data.email {
            if self
                .repository
                .employees
                .email_owner(&mut tx, email)
                .await?
                .is_some()
            {
                return Err(AppError::Duplicate(format!(
                    "Employee with email '{}' already exists",
                    email
                )));
            }
        }

        let created = self.repository.employees.insert(&mut tx, data).await?;
        tx.commit().await?;

        tracing::info!("Created employee {} '{}'", created.id, created.full_name);
        Ok(created)
    }

    /// Update an employee, re-checking email uniqueness against other rows
    pub async fn update(&self, id: i64, data: &UpdateEmployee) -> AppResult<Employee> {
        let mut tx = self.repository.pool.begin().await?;

        if let Some(email) = &data.email {
            if let Some(owner) = self
                .repository
                .employees
                .email_owner(&mut tx, email)
                .await?
            {
                if owner != id {
                    return Err(AppError::Duplicate(format!(
                        "Employee with email '{}' already exists",
                        email
                    )));
                }
            }
        }

        let updated = self
            .repository
            .employees
            .update_row(&mut tx, id, data)
            .await?;
        tx.commit().await?;
        Ok(updated)
    }

    /// Delete an employee; custodian and performer references are cleared by the store
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut tx = self.repository.pool.begin().await?;
        self.repository.employees.delete_row(&mut tx, id).await?;
        tx.commit().await?;

        tracing::info!("Deleted employee {}", id);
        Ok(())
    }
}
