//! Employees repository

use sqlx::{PgConnection, Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::employee::{CreateEmployee, Employee, UpdateEmployee},
};

#[derive(Clone)]
pub struct EmployeesRepository {
    pool: Pool<Postgres>,
}

impl EmployeesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all employees
    pub async fn list(&self) -> AppResult<Vec<Employee>> {
        let rows = sqlx::query_as::<_, Employee>("SELECT * FROM employee ORDER BY full_name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get employee by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Employee> {
        sqlx::query_as::<_, Employee>("SELECT * FROM employee WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Employee {} not found", id)))
    }

    /// Case-insensitive substring search on full name
    pub async fn search_by_name(&self, name: &str) -> AppResult<Vec<Employee>> {
        let rows = sqlx::query_as::<_, Employee>(
            "SELECT * FROM employee WHERE full_name ILIKE '%' || $1 || '%'",
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get employee by email
    pub async fn get_by_email(&self, email: &str) -> AppResult<Employee> {
        sqlx::query_as::<_, Employee>("SELECT * FROM employee WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Employee with email {} not found", email)))
    }

    /// List employees holding a position
    pub async fn list_by_position(&self, position: &str) -> AppResult<Vec<Employee>> {
        let rows = sqlx::query_as::<_, Employee>("SELECT * FROM employee WHERE position = $1")
            .bind(position)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// List employees holding a position, sorted by name
    pub async fn list_by_position_sorted(&self, position: &str) -> AppResult<Vec<Employee>> {
        let rows = sqlx::query_as::<_, Employee>(
            "SELECT * FROM employee WHERE position = $1 ORDER BY full_name",
        )
        .bind(position)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Check whether an email is taken
    pub async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM employee WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// Count all employees
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employee")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    // -- transaction-scoped primitives --

    /// Check existence of an employee within a transaction
    pub async fn exists_in(&self, conn: &mut PgConnection, id: i64) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM employee WHERE id = $1)")
                .bind(id)
                .fetch_one(conn)
                .await?;
        Ok(exists)
    }

    /// Find which employee owns an email, if any
    pub async fn email_owner(
        &self,
        conn: &mut PgConnection,
        email: &str,
    ) -> AppResult<Option<i64>> {
        let id = sqlx::query_scalar("SELECT id FROM employee WHERE email = $1")
            .bind(email)
            .fetch_optional(conn)
            .await?;
        Ok(id)
    }

    /// Insert a new employee
    pub async fn insert(
        &self,
        conn: &mut PgConnection,
        data: &CreateEmployee,
    ) -> AppResult<Employee> {
        let row = sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employee (full_name, position, email)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&data.full_name)
        .bind(&data.position)
        .bind(&data.email)
        .fetch_one(conn)
        .await?;
        Ok(row)
    }

    /// Update an employee
    pub async fn update_row(
        &self,
        conn: &mut PgConnection,
        id: i64,
        data: &UpdateEmployee,
    ) -> AppResult<Employee> {
        sqlx::query_as::<_, Employee>(
            r#"
            UPDATE employee
            SET full_name = $2, position = $3, email = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.full_name)
        .bind(&data.position)
        .bind(&data.email)
        .fetch_optional(conn)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Employee {} not found", id)))
    }

    /// Delete an employee
    pub async fn delete_row(&self, conn: &mut PgConnection, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM employee WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Employee {} not found", id)));
        }
        Ok(())
    }
}
