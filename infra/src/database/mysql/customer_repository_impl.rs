//! MySQL implementation of the CustomerRepository trait.
//!
//! Concrete customer persistence using SQLx. The unique index on `email`
//! backs the store-level uniqueness invariant; a violating insert is
//! surfaced as the duplicate-value condition.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use crm_core::domain::entities::customer::Customer;
use crm_core::errors::{DomainError, ValidationError};
use crm_core::repositories::customer::{CustomerQuery, CustomerRepository};

/// MySQL implementation of CustomerRepository
pub struct MySqlCustomerRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlCustomerRepository {
    /// Create a new MySQL customer repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a Customer entity
    fn row_to_customer(row: &sqlx::mysql::MySqlRow) -> Result<Customer, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Database {
                message: format!("Failed to get id: {}", e),
            })?;

        Ok(Customer {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid UUID: {}", e),
            })?,
            name: row.try_get("name").map_err(|e| DomainError::Database {
                message: format!("Failed to get name: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| DomainError::Database {
                message: format!("Failed to get email: {}", e),
            })?,
            phone: row.try_get("phone").map_err(|e| DomainError::Database {
                message: format!("Failed to get phone: {}", e),
            })?,
            address: row.try_get("address").map_err(|e| DomainError::Database {
                message: format!("Failed to get address: {}", e),
            })?,
            pincode: row.try_get("pincode").map_err(|e| DomainError::Database {
                message: format!("Failed to get pincode: {}", e),
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get created_at: {}", e),
                })?,
        })
    }

    /// Map an insert failure, turning a unique-index violation on email
    /// into the duplicate-value condition
    fn map_insert_error(error: sqlx::Error) -> DomainError {
        if let sqlx::Error::Database(ref db_err) = error {
            if matches!(db_err.kind(), sqlx::error::ErrorKind::UniqueViolation) {
                return DomainError::ValidationErr(ValidationError::DuplicateValue {
                    field: "email".to_string(),
                });
            }
        }
        DomainError::Database {
            message: format!("Failed to create customer: {}", error),
        }
    }
}

#[async_trait]
impl CustomerRepository for MySqlCustomerRepository {
    async fn find(&self, query: &CustomerQuery) -> Result<Vec<Customer>, DomainError> {
        let mut sql = String::from(
            "SELECT id, name, email, phone, address, pincode, created_at FROM customers",
        );

        let mut clauses: Vec<&str> = Vec::new();
        if query.matching.is_some() {
            clauses.push(
                "(LOWER(name) LIKE ? OR LOWER(email) LIKE ? OR LOWER(phone) LIKE ?)",
            );
        }
        if query.created_after.is_some() {
            clauses.push("created_at >= ?");
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY created_at DESC");

        let mut statement = sqlx::query(&sql);
        if let Some(term) = &query.matching {
            let pattern = format!("%{}%", term.to_lowercase());
            statement = statement
                .bind(pattern.clone())
                .bind(pattern.clone())
                .bind(pattern);
        }
        if let Some(cutoff) = query.created_after {
            statement = statement.bind(cutoff);
        }

        let rows = statement
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        rows.iter().map(Self::row_to_customer).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, DomainError> {
        let query = r#"
            SELECT id, name, email, phone, address, pincode, created_at
            FROM customers
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_customer(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DomainError> {
        let query = r#"
            SELECT id, name, email, phone, address, pincode, created_at
            FROM customers
            WHERE email = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_customer(&row)?)),
            None => Ok(None),
        }
    }

    async fn insert(&self, customer: Customer) -> Result<Customer, DomainError> {
        let query = r#"
            INSERT INTO customers (id, name, email, phone, address, pincode, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(customer.id.to_string())
            .bind(&customer.name)
            .bind(&customer.email)
            .bind(&customer.phone)
            .bind(&customer.address)
            .bind(&customer.pincode)
            .bind(customer.created_at)
            .execute(&self.pool)
            .await
            .map_err(Self::map_insert_error)?;

        Ok(customer)
    }

    async fn update(&self, customer: Customer) -> Result<Customer, DomainError> {
        let query = r#"
            UPDATE customers SET
                name = ?,
                email = ?,
                phone = ?,
                address = ?,
                pincode = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&customer.name)
            .bind(&customer.email)
            .bind(&customer.phone)
            .bind(&customer.address)
            .bind(&customer.pincode)
            .bind(customer.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to update customer: {}", e),
            })?;

        // MySQL reports zero affected rows for a no-op update as well, so
        // distinguish "missing" from "unchanged" with a lookup
        if result.rows_affected() == 0 && self.find_by_id(customer.id).await?.is_none() {
            return Err(DomainError::NotFound {
                resource: "customer".to_string(),
            });
        }

        Ok(customer)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let query = "DELETE FROM customers WHERE id = ?";

        let result = sqlx::query(query)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to delete customer: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }
}
