use mockall::mock;

use super::{
    AttendanceReader, AttendanceWriter, CustomerReader, CustomerWriter, EmployeeReader,
    EmployeeWriter, FeedbackReader, FeedbackWriter, MenuItemReader, MenuItemWriter,
    RawMaterialReader, RawMaterialWriter, ReportReader, RepositoryResult, SupplierReader,
    SupplierWriter, TransactionReader, TransactionWriter,
};
use crate::domain::{
    attendance::{Attendance, NewAttendance, UpdateAttendance},
    customer::{Customer, NewCustomer, UpdateCustomer},
    employee::{Employee, NewEmployee, UpdateEmployee},
    feedback::{Feedback, NewFeedback, UpdateFeedback},
    menu_item::{MenuItem, NewMenuItem, UpdateMenuItem},
    raw_material::{NewRawMaterial, RawMaterial, UpdateRawMaterial},
    report::{AttendanceSummary, DailyTransactionTotal, EmployeeRating, MaterialStock},
    supplier::{NewSupplier, Supplier, UpdateSupplier},
    transaction::{NewTransaction, Transaction, UpdateTransaction},
};

mock! {
    pub EmployeeReader {}

    impl EmployeeReader for EmployeeReader {
        fn get_employee_by_id(&self, id: &str) -> RepositoryResult<Option<Employee>>;
        fn list_employees(&self) -> RepositoryResult<Vec<Employee>>;
    }
}

mock! {
    pub EmployeeWriter {}

    impl EmployeeWriter for EmployeeWriter {
        fn create_employee(&self, new_employee: &NewEmployee) -> RepositoryResult<Employee>;
        fn update_employee(&self, id: &str, updates: &UpdateEmployee) -> RepositoryResult<Employee>;
        fn delete_employee(&self, id: &str) -> RepositoryResult<()>;
    }
}

mock! {
    pub CustomerReader {}

    impl CustomerReader for CustomerReader {
        fn get_customer_by_id(&self, id: &str) -> RepositoryResult<Option<Customer>>;
        fn list_customers(&self) -> RepositoryResult<Vec<Customer>>;
    }
}

mock! {
    pub CustomerWriter {}

    impl CustomerWriter for CustomerWriter {
        fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
        fn update_customer(&self, id: &str, updates: &UpdateCustomer) -> RepositoryResult<Customer>;
        fn delete_customer(&self, id: &str) -> RepositoryResult<()>;
    }
}

mock! {
    pub SupplierReader {}

    impl SupplierReader for SupplierReader {
        fn get_supplier_by_id(&self, id: &str) -> RepositoryResult<Option<Supplier>>;
        fn list_suppliers(&self) -> RepositoryResult<Vec<Supplier>>;
    }
}

mock! {
    pub SupplierWriter {}

    impl SupplierWriter for SupplierWriter {
        fn create_supplier(&self, new_supplier: &NewSupplier) -> RepositoryResult<Supplier>;
        fn update_supplier(&self, id: &str, updates: &UpdateSupplier) -> RepositoryResult<Supplier>;
        fn delete_supplier(&self, id: &str) -> RepositoryResult<()>;
    }
}

mock! {
    pub RawMaterialReader {}

    impl RawMaterialReader for RawMaterialReader {
        fn get_raw_material_by_id(&self, id: &str) -> RepositoryResult<Option<RawMaterial>>;
        fn list_raw_materials(&self) -> RepositoryResult<Vec<RawMaterial>>;
    }
}

mock! {
    pub RawMaterialWriter {}

    impl RawMaterialWriter for RawMaterialWriter {
        fn create_raw_material(&self, new_material: &NewRawMaterial) -> RepositoryResult<RawMaterial>;
        fn update_raw_material(&self, id: &str, updates: &UpdateRawMaterial) -> RepositoryResult<RawMaterial>;
        fn delete_raw_material(&self, id: &str) -> RepositoryResult<()>;
    }
}

mock! {
    pub MenuItemReader {}

    impl MenuItemReader for MenuItemReader {
        fn get_menu_item_by_id(&self, id: &str) -> RepositoryResult<Option<MenuItem>>;
        fn list_menu_items(&self) -> RepositoryResult<Vec<MenuItem>>;
    }
}

mock! {
    pub MenuItemWriter {}

    impl MenuItemWriter for MenuItemWriter {
        fn create_menu_item(&self, new_item: &NewMenuItem) -> RepositoryResult<MenuItem>;
        fn update_menu_item(&self, id: &str, updates: &UpdateMenuItem) -> RepositoryResult<MenuItem>;
        fn delete_menu_item(&self, id: &str) -> RepositoryResult<()>;
    }
}

mock! {
    pub TransactionReader {}

    impl TransactionReader for TransactionReader {
        fn get_transaction_by_id(&self, id: &str) -> RepositoryResult<Option<Transaction>>;
        fn list_transactions(&self) -> RepositoryResult<Vec<Transaction>>;
    }
}

mock! {
    pub TransactionWriter {}

    impl TransactionWriter for TransactionWriter {
        fn create_transaction(&self, new_transaction: &NewTransaction) -> RepositoryResult<Transaction>;
        fn update_transaction(&self, id: &str, updates: &UpdateTransaction) -> RepositoryResult<Transaction>;
        fn delete_transaction(&self, id: &str) -> RepositoryResult<()>;
    }
}

mock! {
    pub FeedbackReader {}

    impl FeedbackReader for FeedbackReader {
        fn get_feedback_by_id(&self, id: &str) -> RepositoryResult<Option<Feedback>>;
        fn list_feedback(&self) -> RepositoryResult<Vec<Feedback>>;
    }
}

mock! {
    pub FeedbackWriter {}

    impl FeedbackWriter for FeedbackWriter {
        fn create_feedback(&self, new_feedback: &NewFeedback) -> RepositoryResult<Feedback>;
        fn update_feedback(&self, id: &str, updates: &UpdateFeedback) -> RepositoryResult<Feedback>;
        fn delete_feedback(&self, id: &str) -> RepositoryResult<()>;
    }
}

mock! {
    pub AttendanceReader {}

    impl AttendanceReader for AttendanceReader {
        fn get_attendance_by_id(&self, id: &str) -> RepositoryResult<Option<Attendance>>;
        fn list_attendance(&self) -> RepositoryResult<Vec<Attendance>>;
    }
}

mock! {
    pub AttendanceWriter {}

    impl AttendanceWriter for AttendanceWriter {
        fn create_attendance(&self, new_attendance: &NewAttendance) -> RepositoryResult<Attendance>;
        fn update_attendance(&self, id: &str, updates: &UpdateAttendance) -> RepositoryResult<Attendance>;
        fn delete_attendance(&self, id: &str) -> RepositoryResult<()>;
    }
}

mock! {
    pub ReportReader {}

    impl ReportReader for ReportReader {
        fn daily_transaction_totals(&self) -> RepositoryResult<Vec<DailyTransactionTotal>>;
        fn material_stock(&self) -> RepositoryResult<Vec<MaterialStock>>;
        fn employee_ratings(&self) -> RepositoryResult<Vec<EmployeeRating>>;
        fn attendance_summary(&self) -> RepositoryResult<Vec<AttendanceSummary>>;
    }
}
