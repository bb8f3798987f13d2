use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::transaction::{
    NewTransaction as DomainNewTransaction, Transaction as DomainTransaction,
    UpdateTransaction as DomainUpdateTransaction,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::transaksi, primary_key(transaksi_id))]
pub struct Transaction {
    pub transaksi_id: String,
    pub tanggal_pembelian: NaiveDate,
    pub pelanggan_id: Option<String>,
    pub karyawan_id: Option<String>,
    pub total_transaksi: f64,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::transaksi)]
#[diesel(treat_none_as_default_value = false)]
pub struct NewTransaction<'a> {
    pub transaksi_id: &'a str,
    pub tanggal_pembelian: NaiveDate,
    pub pelanggan_id: Option<&'a str>,
    pub karyawan_id: Option<&'a str>,
    pub total_transaksi: f64,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::transaksi)]
pub struct UpdateTransaction<'a> {
    pub tanggal_pembelian: Option<NaiveDate>,
    pub pelanggan_id: Option<&'a str>,
    pub karyawan_id: Option<&'a str>,
    pub total_transaksi: Option<f64>,
}

impl From<Transaction> for DomainTransaction {
    fn from(value: Transaction) -> Self {
        Self {
            id: value.transaksi_id,
            date: value.tanggal_pembelian,
            customer_id: value.pelanggan_id,
            employee_id: value.karyawan_id,
            total: value.total_transaksi,
        }
    }
}

impl<'a> From<&'a DomainNewTransaction> for NewTransaction<'a> {
    fn from(value: &'a DomainNewTransaction) -> Self {
        Self {
            transaksi_id: value.id.as_str(),
            tanggal_pembelian: value.date,
            pelanggan_id: value.customer_id.as_deref(),
            karyawan_id: value.employee_id.as_deref(),
            total_transaksi: value.total,
        }
    }
}

impl<'a> From<&'a DomainUpdateTransaction> for UpdateTransaction<'a> {
    fn from(value: &'a DomainUpdateTransaction) -> Self {
        Self {
            tanggal_pembelian: value.date,
            pelanggan_id: value.customer_id.as_deref(),
            karyawan_id: value.employee_id.as_deref(),
            total_transaksi: value.total,
        }
    }
}
