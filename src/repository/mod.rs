use crate::db::{DbConnection, DbPool};
use crate::domain::attendance::{Attendance, NewAttendance, UpdateAttendance};
use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::domain::employee::{Employee, NewEmployee, UpdateEmployee};
use crate::domain::feedback::{Feedback, NewFeedback, UpdateFeedback};
use crate::domain::menu_item::{MenuItem, NewMenuItem, UpdateMenuItem};
use crate::domain::raw_material::{NewRawMaterial, RawMaterial, UpdateRawMaterial};
use crate::domain::report::{
    AttendanceSummary, DailyTransactionTotal, EmployeeRating, MaterialStock,
};
use crate::domain::supplier::{NewSupplier, Supplier, UpdateSupplier};
use crate::domain::transaction::{NewTransaction, Transaction, UpdateTransaction};

pub mod attendance;
pub mod customer;
pub mod employee;
pub mod errors;
pub mod feedback;
pub mod menu_item;
pub mod raw_material;
pub mod report;
pub mod supplier;
pub mod transaction;

#[cfg(test)]
pub mod mock;

pub use errors::{RepositoryError, RepositoryResult};

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Check a connection out of the pool; it returns to the pool when dropped.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over employee records.
pub trait EmployeeReader {
    fn get_employee_by_id(&self, id: &str) -> RepositoryResult<Option<Employee>>;
    fn list_employees(&self) -> RepositoryResult<Vec<Employee>>;
}

/// Write operations over employee records.
pub trait EmployeeWriter {
    fn create_employee(&self, new_employee: &NewEmployee) -> RepositoryResult<Employee>;
    fn update_employee(&self, id: &str, updates: &UpdateEmployee) -> RepositoryResult<Employee>;
    fn delete_employee(&self, id: &str) -> RepositoryResult<()>;
}

/// Read-only operations over customer records.
pub trait CustomerReader {
    fn get_customer_by_id(&self, id: &str) -> RepositoryResult<Option<Customer>>;
    fn list_customers(&self) -> RepositoryResult<Vec<Customer>>;
}

/// Write operations over customer records.
pub trait CustomerWriter {
    fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
    fn update_customer(&self, id: &str, updates: &UpdateCustomer) -> RepositoryResult<Customer>;
    fn delete_customer(&self, id: &str) -> RepositoryResult<()>;
}

/// Read-only operations over supplier records.
pub trait SupplierReader {
    fn get_supplier_by_id(&self, id: &str) -> RepositoryResult<Option<Supplier>>;
    fn list_suppliers(&self) -> RepositoryResult<Vec<Supplier>>;
}

/// Write operations over supplier records.
pub trait SupplierWriter {
    fn create_supplier(&self, new_supplier: &NewSupplier) -> RepositoryResult<Supplier>;
    fn update_supplier(&self, id: &str, updates: &UpdateSupplier) -> RepositoryResult<Supplier>;
    fn delete_supplier(&self, id: &str) -> RepositoryResult<()>;
}

/// Read-only operations over raw material records.
pub trait RawMaterialReader {
    fn get_raw_material_by_id(&self, id: &str) -> RepositoryResult<Option<RawMaterial>>;
    fn list_raw_materials(&self) -> RepositoryResult<Vec<RawMaterial>>;
}

/// Write operations over raw material records.
pub trait RawMaterialWriter {
    fn create_raw_material(&self, new_material: &NewRawMaterial)
    -> RepositoryResult<RawMaterial>;
    fn update_raw_material(
        &self,
        id: &str,
        updates: &UpdateRawMaterial,
    ) -> RepositoryResult<RawMaterial>;
    fn delete_raw_material(&self, id: &str) -> RepositoryResult<()>;
}

/// Read-only operations over menu items.
pub trait MenuItemReader {
    fn get_menu_item_by_id(&self, id: &str) -> RepositoryResult<Option<MenuItem>>;
    fn list_menu_items(&self) -> RepositoryResult<Vec<MenuItem>>;
}

/// Write operations over menu items.
pub trait MenuItemWriter {
    fn create_menu_item(&self, new_item: &NewMenuItem) -> RepositoryResult<MenuItem>;
    fn update_menu_item(&self, id: &str, updates: &UpdateMenuItem) -> RepositoryResult<MenuItem>;
    fn delete_menu_item(&self, id: &str) -> RepositoryResult<()>;
}

/// Read-only operations over transactions.
pub trait TransactionReader {
    fn get_transaction_by_id(&self, id: &str) -> RepositoryResult<Option<Transaction>>;
    fn list_transactions(&self) -> RepositoryResult<Vec<Transaction>>;
}

/// Write operations over transactions.
pub trait TransactionWriter {
    fn create_transaction(&self, new_transaction: &NewTransaction)
    -> RepositoryResult<Transaction>;
    fn update_transaction(
        &self,
        id: &str,
        updates: &UpdateTransaction,
    ) -> RepositoryResult<Transaction>;
    fn delete_transaction(&self, id: &str) -> RepositoryResult<()>;
}

/// Read-only operations over customer feedback.
pub trait FeedbackReader {
    fn get_feedback_by_id(&self, id: &str) -> RepositoryResult<Option<Feedback>>;
    fn list_feedback(&self) -> RepositoryResult<Vec<Feedback>>;
}

/// Write operations over customer feedback.
pub trait FeedbackWriter {
    fn create_feedback(&self, new_feedback: &NewFeedback) -> RepositoryResult<Feedback>;
    fn update_feedback(&self, id: &str, updates: &UpdateFeedback) -> RepositoryResult<Feedback>;
    fn delete_feedback(&self, id: &str) -> RepositoryResult<()>;
}

/// Read-only operations over attendance entries.
pub trait AttendanceReader {
    fn get_attendance_by_id(&self, id: &str) -> RepositoryResult<Option<Attendance>>;
    fn list_attendance(&self) -> RepositoryResult<Vec<Attendance>>;
}

/// Write operations over attendance entries.
pub trait AttendanceWriter {
    fn create_attendance(&self, new_attendance: &NewAttendance) -> RepositoryResult<Attendance>;
    fn update_attendance(
        &self,
        id: &str,
        updates: &UpdateAttendance,
    ) -> RepositoryResult<Attendance>;
    fn delete_attendance(&self, id: &str) -> RepositoryResult<()>;
}

/// Aggregate read queries backing the reports screen.
pub trait ReportReader {
    fn daily_transaction_totals(&self) -> RepositoryResult<Vec<DailyTransactionTotal>>;
    fn material_stock(&self) -> RepositoryResult<Vec<MaterialStock>>;
    fn employee_ratings(&self) -> RepositoryResult<Vec<EmployeeRating>>;
    fn attendance_summary(&self) -> RepositoryResult<Vec<AttendanceSummary>>;
}
