use chrono::NaiveDate;

use restorify::domain::attendance::{AttendanceStatus, NewAttendance, UpdateAttendance};
use restorify::domain::customer::{NewCustomer, UpdateCustomer};
use restorify::domain::employee::{NewEmployee, Position, UpdateEmployee};
use restorify::domain::feedback::{NewFeedback, UpdateFeedback};
use restorify::domain::menu_item::{NewMenuItem, UpdateMenuItem};
use restorify::domain::raw_material::{NewRawMaterial, UpdateRawMaterial};
use restorify::domain::supplier::{NewSupplier, UpdateSupplier};
use restorify::domain::transaction::{NewTransaction, UpdateTransaction};
use restorify::repository::{
    AttendanceReader, AttendanceWriter, CustomerReader, CustomerWriter, DieselRepository,
    EmployeeReader, EmployeeWriter, FeedbackReader, FeedbackWriter, MenuItemReader,
    MenuItemWriter, RawMaterialReader, RawMaterialWriter, RepositoryError, SupplierReader,
    SupplierWriter, TransactionReader, TransactionWriter,
};

mod common;

fn day(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 4, day).unwrap()
}

#[test]
fn test_employee_repository_crud() {
    let test_db = common::TestDb::new("test_employee_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_employee(&NewEmployee::new("K010", "Andi", Position::Chef).with_fingerprint_id("FP010"))
        .unwrap();
    assert_eq!(created.position, Position::Chef);

    let err = repo
        .create_employee(&NewEmployee::new("K010", "Andi Lagi", Position::Waiter))
        .expect_err("expected duplicate id to fail");
    assert!(matches!(err, RepositoryError::Conflict));

    let updated = repo
        .update_employee("K010", &UpdateEmployee::new().position(Position::Manager))
        .unwrap();
    assert_eq!(updated.position, Position::Manager);
    assert_eq!(updated.name, "Andi");
    assert_eq!(updated.fingerprint_id.as_deref(), Some("FP010"));

    let err = repo
        .update_employee("K999", &UpdateEmployee::new().name("Nobody"))
        .expect_err("expected unknown id to fail");
    assert!(matches!(err, RepositoryError::NotFound));

    let err = repo
        .update_employee("K010", &UpdateEmployee::new())
        .expect_err("expected empty update to fail");
    assert!(matches!(err, RepositoryError::NothingToUpdate));

    repo.delete_employee("K010").unwrap();
    assert!(repo.get_employee_by_id("K010").unwrap().is_none());

    let err = repo
        .delete_employee("K010")
        .expect_err("expected second delete to fail");
    assert!(matches!(err, RepositoryError::NotFound));
}

#[test]
fn test_lists_are_ordered_by_id() {
    let test_db = common::TestDb::new("test_lists_are_ordered_by_id.db");
    let repo = DieselRepository::new(test_db.pool());

    for (id, name) in [("P003", "Cici"), ("P001", "Ani"), ("P002", "Budi")] {
        repo.create_customer(&NewCustomer::new(id, name, format!("{name}@contoh.com")))
            .unwrap();
    }

    let ids = repo
        .list_customers()
        .unwrap()
        .into_iter()
        .map(|customer| customer.id)
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["P001", "P002", "P003"]);
}

#[test]
fn test_customer_and_supplier_updates() {
    let test_db = common::TestDb::new("test_customer_and_supplier_updates.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_customer(&NewCustomer::new("P010", "Rudi", "rudi@contoh.com"))
        .unwrap();
    let customer = repo
        .update_customer("P010", &UpdateCustomer::new().contact_info("0812345678"))
        .unwrap();
    assert_eq!(customer.contact_info, "0812345678");
    assert_eq!(customer.name, "Rudi");

    repo.create_supplier(&NewSupplier::new("S010", "Supplier Z", "Jl. Baru No.10"))
        .unwrap();
    let supplier = repo
        .update_supplier("S010", &UpdateSupplier::new().name("Supplier Zeta"))
        .unwrap();
    assert_eq!(supplier.name, "Supplier Zeta");
    assert_eq!(supplier.address, "Jl. Baru No.10");
}

#[test]
fn test_raw_material_requires_existing_supplier() {
    let test_db = common::TestDb::new("test_raw_material_requires_existing_supplier.db");
    let repo = DieselRepository::new(test_db.pool());

    let err = repo
        .create_raw_material(
            &NewRawMaterial::new("B010", "Garam", 10, "kg", 8000.0).with_supplier_id("S404"),
        )
        .expect_err("expected dangling supplier to fail");
    assert!(matches!(err, RepositoryError::ForeignKey(_)));

    repo.create_supplier(&NewSupplier::new("S001", "Supplier A", "Jl. Raya No.1"))
        .unwrap();
    let material = repo
        .create_raw_material(
            &NewRawMaterial::new("B010", "Garam", 10, "kg", 8000.0).with_supplier_id("S001"),
        )
        .unwrap();
    assert_eq!(material.supplier_id.as_deref(), Some("S001"));

    let material = repo
        .update_raw_material("B010", &UpdateRawMaterial::new().stock(25).unit_price(8500.0))
        .unwrap();
    assert_eq!(material.stock, 25);
    assert_eq!(material.unit_price, 8500.0);
    assert_eq!(material.unit, "kg");

    let err = repo
        .delete_supplier("S001")
        .expect_err("expected referenced supplier delete to fail");
    assert!(matches!(err, RepositoryError::ForeignKey(_)));
    assert!(repo.get_supplier_by_id("S001").unwrap().is_some());

    repo.delete_raw_material("B010").unwrap();
    repo.delete_supplier("S001").unwrap();
    assert!(repo.list_suppliers().unwrap().is_empty());
}

#[test]
fn test_menu_item_crud() {
    let test_db = common::TestDb::new("test_menu_item_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_menu_item(&NewMenuItem::new("M010", "Soto Ayam", 22000.0))
        .unwrap();
    let item = repo
        .update_menu_item("M010", &UpdateMenuItem::new().price(24000.0))
        .unwrap();
    assert_eq!(item.price, 24000.0);
    assert_eq!(
        repo.get_menu_item_by_id("M010").unwrap().map(|item| item.name),
        Some("Soto Ayam".to_string())
    );

    repo.delete_menu_item("M010").unwrap();
    assert!(repo.list_menu_items().unwrap().is_empty());
}

#[test]
fn test_transaction_and_feedback_reference_people() {
    let test_db = common::TestDb::new("test_transaction_and_feedback_reference_people.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_customer(&NewCustomer::new("P001", "Mansur", "mansur@contoh.com"))
        .unwrap();
    repo.create_employee(&NewEmployee::new("K001", "Ahmad Fauzi", Position::Manager))
        .unwrap();

    let transaction = repo
        .create_transaction(
            &NewTransaction::new("T010", day(6), 75000.0)
                .with_customer_id("P001")
                .with_employee_id("K001"),
        )
        .unwrap();
    assert_eq!(transaction.date, day(6));

    let transaction = repo
        .update_transaction("T010", &UpdateTransaction::new().total(80000.0))
        .unwrap();
    assert_eq!(transaction.total, 80000.0);
    assert_eq!(transaction.customer_id.as_deref(), Some("P001"));

    let err = repo
        .update_transaction("T010", &UpdateTransaction::new().employee_id("K404"))
        .expect_err("expected dangling employee to fail");
    assert!(matches!(err, RepositoryError::ForeignKey(_)));

    let feedback = repo
        .create_feedback(
            &NewFeedback::new("F010", day(6), 4)
                .with_customer_id("P001")
                .with_employee_id("K001")
                .with_comment("Enak"),
        )
        .unwrap();
    assert_eq!(feedback.rating, 4);

    let feedback = repo
        .update_feedback("F010", &UpdateFeedback::new().rating(5))
        .unwrap();
    assert_eq!(feedback.rating, 5);
    assert_eq!(feedback.comment.as_deref(), Some("Enak"));

    let err = repo
        .delete_customer("P001")
        .expect_err("expected referenced customer delete to fail");
    assert!(matches!(err, RepositoryError::ForeignKey(_)));

    repo.delete_transaction("T010").unwrap();
    repo.delete_feedback("F010").unwrap();
    repo.delete_customer("P001").unwrap();
    assert!(repo.list_transactions().unwrap().is_empty());
    assert!(repo.list_feedback().unwrap().is_empty());
}

#[test]
fn test_attendance_crud() {
    let test_db = common::TestDb::new("test_attendance_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_employee(&NewEmployee::new("K002", "Siti Aminah", Position::Waiter))
        .unwrap();
    let record = repo
        .create_attendance(
            &NewAttendance::new("A010", day(2), AttendanceStatus::Present).with_employee_id("K002"),
        )
        .unwrap();
    assert_eq!(record.status, AttendanceStatus::Present);

    let record = repo
        .update_attendance(
            "A010",
            &UpdateAttendance::new().status(AttendanceStatus::Vacation),
        )
        .unwrap();
    assert_eq!(record.status, AttendanceStatus::Vacation);
    assert_eq!(record.employee_id.as_deref(), Some("K002"));

    let err = repo
        .delete_employee("K002")
        .expect_err("expected referenced employee delete to fail");
    assert!(matches!(err, RepositoryError::ForeignKey(_)));

    repo.delete_attendance("A010").unwrap();
    assert!(repo.get_attendance_by_id("A010").unwrap().is_none());
    repo.delete_employee("K002").unwrap();
}

#[test]
fn test_duplicate_add_keeps_row_count_for_every_table() {
    let test_db = common::TestDb::new("test_duplicate_add_keeps_row_count.db");
    let repo = DieselRepository::new(test_db.pool());

    let employee = NewEmployee::new("K001", "Ahmad Fauzi", Position::Manager);
    repo.create_employee(&employee).unwrap();
    let rows = repo.list_employees().unwrap();
    assert_eq!(rows.iter().filter(|row| row.id == "K001").count(), 1);
    assert!(matches!(
        repo.create_employee(&employee),
        Err(RepositoryError::Conflict)
    ));
    assert_eq!(repo.list_employees().unwrap().len(), 1);

    let customer = NewCustomer::new("P001", "Mansur", "mansur@contoh.com");
    repo.create_customer(&customer).unwrap();
    let rows = repo.list_customers().unwrap();
    assert_eq!(rows.iter().filter(|row| row.id == "P001").count(), 1);
    assert!(matches!(
        repo.create_customer(&customer),
        Err(RepositoryError::Conflict)
    ));
    assert_eq!(repo.list_customers().unwrap().len(), 1);

    let supplier = NewSupplier::new("S001", "Supplier A", "Jl. Raya No.1");
    repo.create_supplier(&supplier).unwrap();
    let rows = repo.list_suppliers().unwrap();
    assert_eq!(rows.iter().filter(|row| row.id == "S001").count(), 1);
    assert!(matches!(
        repo.create_supplier(&supplier),
        Err(RepositoryError::Conflict)
    ));
    assert_eq!(repo.list_suppliers().unwrap().len(), 1);

    let material = NewRawMaterial::new("B001", "Beras", 100, "kg", 50000.0);
    repo.create_raw_material(&material).unwrap();
    let rows = repo.list_raw_materials().unwrap();
    assert_eq!(rows.iter().filter(|row| row.id == "B001").count(), 1);
    assert!(matches!(
        repo.create_raw_material(&material),
        Err(RepositoryError::Conflict)
    ));
    assert_eq!(repo.list_raw_materials().unwrap().len(), 1);

    let item = NewMenuItem::new("M001", "Nasi Goreng", 25000.0);
    repo.create_menu_item(&item).unwrap();
    let rows = repo.list_menu_items().unwrap();
    assert_eq!(rows.iter().filter(|row| row.id == "M001").count(), 1);
    assert!(matches!(
        repo.create_menu_item(&item),
        Err(RepositoryError::Conflict)
    ));
    assert_eq!(repo.list_menu_items().unwrap().len(), 1);

    let transaction = NewTransaction::new("T001", day(1), 50000.0);
    repo.create_transaction(&transaction).unwrap();
    let rows = repo.list_transactions().unwrap();
    assert_eq!(rows.iter().filter(|row| row.id == "T001").count(), 1);
    assert!(matches!(
        repo.create_transaction(&transaction),
        Err(RepositoryError::Conflict)
    ));
    assert_eq!(repo.list_transactions().unwrap().len(), 1);

    let feedback = NewFeedback::new("F001", day(1), 5).with_comment("Pelayanan sangat baik!");
    repo.create_feedback(&feedback).unwrap();
    let rows = repo.list_feedback().unwrap();
    assert_eq!(rows.iter().filter(|row| row.id == "F001").count(), 1);
    assert!(matches!(
        repo.create_feedback(&feedback),
        Err(RepositoryError::Conflict)
    ));
    assert_eq!(repo.list_feedback().unwrap().len(), 1);

    let attendance = NewAttendance::new("A001", day(1), AttendanceStatus::Present);
    repo.create_attendance(&attendance).unwrap();
    let rows = repo.list_attendance().unwrap();
    assert_eq!(rows.iter().filter(|row| row.id == "A001").count(), 1);
    assert!(matches!(
        repo.create_attendance(&attendance),
        Err(RepositoryError::Conflict)
    ));
    assert_eq!(repo.list_attendance().unwrap().len(), 1);
}
