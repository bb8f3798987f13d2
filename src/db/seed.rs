//! Sample rows written into empty tables on first start.

use chrono::NaiveDate;
use diesel::dsl::{exists, select};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::attendance::{AttendanceStatus, NewAttendance};
use crate::domain::customer::NewCustomer;
use crate::domain::employee::{NewEmployee, Position};
use crate::domain::feedback::NewFeedback;
use crate::domain::menu_item::NewMenuItem;
use crate::domain::raw_material::NewRawMaterial;
use crate::domain::supplier::NewSupplier;
use crate::domain::transaction::NewTransaction;
use crate::models;
use crate::repository::{RepositoryError, RepositoryResult};

/// Tables that received sample data during [`seed_empty_tables`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub tables: Vec<&'static str>,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn contains(&self, table: &str) -> bool {
        self.tables.contains(&table)
    }
}

/// Insert the sample rows into every table that currently has no rows.
///
/// Tables are filled parent first. A sample reference whose target row is
/// missing (because the parent table already held other data) is stored as
/// empty instead of failing the whole seed.
pub fn seed_empty_tables(conn: &mut SqliteConnection) -> RepositoryResult<SeedReport> {
    let steps: [(&'static str, SeedStep); 8] = [
        ("karyawan", seed_employees),
        ("pelanggan", seed_customers),
        ("supplier", seed_suppliers),
        ("bahan_baku", seed_raw_materials),
        ("menu", seed_menu),
        ("transaksi", seed_transactions),
        ("feedback", seed_feedback),
        ("absensi", seed_attendance),
    ];

    let mut report = SeedReport::default();
    for (table, step) in steps {
        // One transaction per table so a failing batch leaves the others intact.
        let seeded = conn.transaction::<_, RepositoryError, _>(|conn| step(conn))?;
        if seeded {
            report.tables.push(table);
        }
    }

    Ok(report)
}

type SeedStep = fn(&mut SqliteConnection) -> RepositoryResult<bool>;

fn sample_date(day: u32) -> RepositoryResult<NaiveDate> {
    NaiveDate::from_ymd_opt(2024, 4, day)
        .ok_or_else(|| RepositoryError::Database(format!("invalid sample date 2024-04-{day}")))
}

fn employee_exists(conn: &mut SqliteConnection, id: &str) -> RepositoryResult<bool> {
    use crate::schema::karyawan;

    Ok(select(exists(karyawan::table.find(id))).get_result::<bool>(conn)?)
}

fn customer_exists(conn: &mut SqliteConnection, id: &str) -> RepositoryResult<bool> {
    use crate::schema::pelanggan;

    Ok(select(exists(pelanggan::table.find(id))).get_result::<bool>(conn)?)
}

fn supplier_exists(conn: &mut SqliteConnection, id: &str) -> RepositoryResult<bool> {
    use crate::schema::supplier;

    Ok(select(exists(supplier::table.find(id))).get_result::<bool>(conn)?)
}

fn seed_employees(conn: &mut SqliteConnection) -> RepositoryResult<bool> {
    use crate::schema::karyawan;

    if karyawan::table.count().get_result::<i64>(conn)? > 0 {
        return Ok(false);
    }

    let rows = [
        ("K001", "Ahmad Fauzi", Position::Manager, "FP001"),
        ("K002", "Siti Aminah", Position::Waiter, "FP002"),
        ("K003", "Budi Santoso", Position::Chef, "FP003"),
        ("K004", "Rina Marlina", Position::Cashier, "FP004"),
        ("K005", "Dewi Lestari", Position::Operational, "FP005"),
    ];

    for (id, name, position, fingerprint) in rows {
        let employee = NewEmployee::new(id, name, position).with_fingerprint_id(fingerprint);
        diesel::insert_into(karyawan::table)
            .values(&models::employee::NewEmployee::from(&employee))
            .execute(conn)?;
    }

    Ok(true)
}

fn seed_customers(conn: &mut SqliteConnection) -> RepositoryResult<bool> {
    use crate::schema::pelanggan;

    if pelanggan::table.count().get_result::<i64>(conn)? > 0 {
        return Ok(false);
    }

    let rows = [
        ("P001", "Mansur", "mansur123@contohemail.com"),
        ("P002", "Sir Joko", "joko456@contohemail.com"),
        ("P003", "Pak Amba", "amba789@contohemail.com"),
        ("P004", "Ibu Tukam", "tukam101112@contohemail.com"),
        ("P005", "Maemunah", "maemunah131415@contohemail.com"),
    ];

    for (id, name, contact) in rows {
        let customer = NewCustomer::new(id, name, contact);
        diesel::insert_into(pelanggan::table)
            .values(&models::customer::NewCustomer::from(&customer))
            .execute(conn)?;
    }

    Ok(true)
}

fn seed_suppliers(conn: &mut SqliteConnection) -> RepositoryResult<bool> {
    use crate::schema::supplier;

    if supplier::table.count().get_result::<i64>(conn)? > 0 {
        return Ok(false);
    }

    let rows = [
        ("S001", "Supplier A", "Jl. Raya No.1"),
        ("S002", "Supplier B", "Jl. Merdeka No.2"),
        ("S003", "Supplier C", "Jl. Sudirman No.3"),
        ("S004", "Supplier D", "Jl. Thamrin No.4"),
        ("S005", "Supplier E", "Jl. Diponegoro No.5"),
    ];

    for (id, name, address) in rows {
        let new_supplier = NewSupplier::new(id, name, address);
        diesel::insert_into(supplier::table)
            .values(&models::supplier::NewSupplier::from(&new_supplier))
            .execute(conn)?;
    }

    Ok(true)
}

fn seed_raw_materials(conn: &mut SqliteConnection) -> RepositoryResult<bool> {
    use crate::schema::bahan_baku;

    if bahan_baku::table.count().get_result::<i64>(conn)? > 0 {
        return Ok(false);
    }

    let rows = [
        ("B001", "Beras", 100, "kg", 50000.0, "S001"),
        ("B002", "Gula", 200, "kg", 30000.0, "S002"),
        ("B003", "Minyak Goreng", 150, "liter", 40000.0, "S003"),
        ("B004", "Telur", 500, "butir", 5000.0, "S004"),
        ("B005", "Daging Sapi", 80, "kg", 100000.0, "S005"),
    ];

    for (id, name, stock, unit, price, supplier_id) in rows {
        let mut material = NewRawMaterial::new(id, name, stock, unit, price);
        if supplier_exists(conn, supplier_id)? {
            material = material.with_supplier_id(supplier_id);
        }
        diesel::insert_into(bahan_baku::table)
            .values(&models::raw_material::NewRawMaterial::from(&material))
            .execute(conn)?;
    }

    Ok(true)
}

fn seed_menu(conn: &mut SqliteConnection) -> RepositoryResult<bool> {
    use crate::schema::menu;

    if menu::table.count().get_result::<i64>(conn)? > 0 {
        return Ok(false);
    }

    let rows = [
        ("M001", "Nasi Goreng", 25000.0),
        ("M002", "Mie Ayam", 20000.0),
        ("M003", "Sate Ayam", 30000.0),
        ("M004", "Ayam Bakar", 35000.0),
        ("M005", "Es Teh Manis", 8000.0),
    ];

    for (id, name, price) in rows {
        let item = NewMenuItem::new(id, name, price);
        diesel::insert_into(menu::table)
            .values(&models::menu_item::NewMenuItem::from(&item))
            .execute(conn)?;
    }

    Ok(true)
}

fn seed_transactions(conn: &mut SqliteConnection) -> RepositoryResult<bool> {
    use crate::schema::transaksi;

    if transaksi::table.count().get_result::<i64>(conn)? > 0 {
        return Ok(false);
    }

    let rows = [
        ("T001", 1, "P001", "K001", 50000.0),
        ("T002", 2, "P002", "K002", 40000.0),
        ("T003", 3, "P003", "K003", 60000.0),
        ("T004", 4, "P004", "K004", 35000.0),
        ("T005", 5, "P005", "K005", 45000.0),
    ];

    for (id, day, customer_id, employee_id, total) in rows {
        let mut transaction = NewTransaction::new(id, sample_date(day)?, total);
        if customer_exists(conn, customer_id)? {
            transaction = transaction.with_customer_id(customer_id);
        }
        if employee_exists(conn, employee_id)? {
            transaction = transaction.with_employee_id(employee_id);
        }
        diesel::insert_into(transaksi::table)
            .values(&models::transaction::NewTransaction::from(&transaction))
            .execute(conn)?;
    }

    Ok(true)
}

fn seed_feedback(conn: &mut SqliteConnection) -> RepositoryResult<bool> {
    use crate::schema::feedback;

    if feedback::table.count().get_result::<i64>(conn)? > 0 {
        return Ok(false);
    }

    let rows = [
        ("F001", "P001", "K001", 1, 5, "Pelayanan sangat baik!"),
        ("F002", "P002", "K002", 2, 4, "Makanan enak, cepat saji."),
        ("F003", "P003", "K003", 3, 5, "Chef hebat!"),
        ("F004", "P004", "K004", 4, 3, "Kasir ramah."),
        ("F005", "P005", "K005", 5, 4, "Operasional lancar."),
    ];

    for (id, customer_id, employee_id, day, rating, comment) in rows {
        let mut entry = NewFeedback::new(id, sample_date(day)?, rating).with_comment(comment);
        if customer_exists(conn, customer_id)? {
            entry = entry.with_customer_id(customer_id);
        }
        if employee_exists(conn, employee_id)? {
            entry = entry.with_employee_id(employee_id);
        }
        diesel::insert_into(feedback::table)
            .values(&models::feedback::NewFeedback::from(&entry))
            .execute(conn)?;
    }

    Ok(true)
}

fn seed_attendance(conn: &mut SqliteConnection) -> RepositoryResult<bool> {
    use crate::schema::absensi;

    if absensi::table.count().get_result::<i64>(conn)? > 0 {
        return Ok(false);
    }

    let date = sample_date(1)?;
    let rows = [
        ("A001", "K001"),
        ("A002", "K002"),
        ("A003", "K003"),
        ("A004", "K004"),
        ("A005", "K005"),
    ];

    for (id, employee_id) in rows {
        let mut entry = NewAttendance::new(id, date, AttendanceStatus::Present);
        if employee_exists(conn, employee_id)? {
            entry = entry.with_employee_id(employee_id);
        }
        diesel::insert_into(absensi::table)
            .values(&models::attendance::NewAttendance::from(&entry))
            .execute(conn)?;
    }

    Ok(true)
}
