use diesel::prelude::*;

use restorify::db::{establish_connection_pool, init_database};
use restorify::repository::{
    AttendanceReader, CustomerReader, DieselRepository, EmployeeReader, FeedbackReader,
    MenuItemReader, RawMaterialReader, SupplierReader, TransactionReader,
};

mod common;

#[test]
fn test_creates_and_removes_db_files() {
    let path = {
        let test_db = common::TestDb::new("test_creates_and_removes_db_files.db");
        let conn = test_db.pool().get();
        assert!(conn.is_ok());
        test_db.path().to_string()
    };

    assert!(!std::path::Path::new(&path).exists());
}

#[test]
fn test_init_database_seeds_every_table() {
    let test_db = common::TestDb::new("test_init_database_seeds_every_table.db");

    let report = init_database(&test_db.pool()).unwrap();
    assert_eq!(report.tables.len(), 8);
    assert!(report.contains("karyawan"));
    assert!(report.contains("absensi"));

    let repo = DieselRepository::new(test_db.pool());
    assert_eq!(repo.list_employees().unwrap().len(), 5);
    assert_eq!(repo.list_customers().unwrap().len(), 5);
    assert_eq!(repo.list_suppliers().unwrap().len(), 5);
    assert_eq!(repo.list_raw_materials().unwrap().len(), 5);
    assert_eq!(repo.list_menu_items().unwrap().len(), 5);
    assert_eq!(repo.list_transactions().unwrap().len(), 5);
    assert_eq!(repo.list_feedback().unwrap().len(), 5);
    assert_eq!(repo.list_attendance().unwrap().len(), 5);

    let first = repo.get_employee_by_id("K001").unwrap().unwrap();
    assert_eq!(first.name, "Ahmad Fauzi");
    assert_eq!(first.fingerprint_id.as_deref(), Some("FP001"));
}

#[test]
fn test_init_database_is_idempotent() {
    let test_db = common::TestDb::new("test_init_database_is_idempotent.db");

    init_database(&test_db.pool()).unwrap();
    let second = init_database(&test_db.pool()).unwrap();

    assert!(second.is_empty());
    let repo = DieselRepository::new(test_db.pool());
    assert_eq!(repo.list_transactions().unwrap().len(), 5);
}

#[test]
fn test_init_database_only_fills_empty_tables() {
    let test_db = common::TestDb::new("test_init_database_only_fills_empty_tables.db");
    {
        let mut conn = test_db.pool().get().unwrap();
        diesel::sql_query("INSERT INTO menu (menu_id, nama_menu, harga) VALUES ('X1', 'Kopi', 12000)")
            .execute(&mut conn)
            .unwrap();
    }

    let report = init_database(&test_db.pool()).unwrap();

    assert!(!report.contains("menu"));
    assert_eq!(report.tables.len(), 7);
    let repo = DieselRepository::new(test_db.pool());
    let menu = repo.list_menu_items().unwrap();
    assert_eq!(menu.len(), 1);
    assert_eq!(menu[0].name, "Kopi");
}

#[test]
fn test_foreign_keys_are_enforced_on_every_connection() {
    let test_db = common::TestDb::new("test_foreign_keys_are_enforced.db");
    let pool = establish_connection_pool(test_db.path()).unwrap();
    let mut conn = pool.get().unwrap();

    #[derive(QueryableByName)]
    struct Pragma {
        #[diesel(sql_type = diesel::sql_types::Integer)]
        foreign_keys: i32,
    }

    let pragma = diesel::sql_query("PRAGMA foreign_keys")
        .get_result::<Pragma>(&mut conn)
        .unwrap();
    assert_eq!(pragma.foreign_keys, 1);
}
