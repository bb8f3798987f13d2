use diesel::prelude::*;

use crate::domain::transaction::{
    NewTransaction as DomainNewTransaction, Transaction as DomainTransaction,
    UpdateTransaction as DomainUpdateTransaction,
};
use crate::models::transaction::{
    NewTransaction as DbNewTransaction, Transaction as DbTransaction,
    UpdateTransaction as DbUpdateTransaction,
};
use crate::repository::{
    DieselRepository, RepositoryError, RepositoryResult, TransactionReader, TransactionWriter,
};

impl TransactionReader for DieselRepository {
    fn get_transaction_by_id(&self, id: &str) -> RepositoryResult<Option<DomainTransaction>> {
        use crate::schema::transaksi;

        let mut conn = self.conn()?;
        let transaction = transaksi::table
            .find(id)
            .first::<DbTransaction>(&mut conn)
            .optional()?;

        Ok(transaction.map(Into::into))
    }

    fn list_transactions(&self) -> RepositoryResult<Vec<DomainTransaction>> {
        use crate::schema::transaksi;

        let mut conn = self.conn()?;
        let transactions = transaksi::table
            .order(transaksi::transaksi_id.asc())
            .load::<DbTransaction>(&mut conn)?;

        Ok(transactions.into_iter().map(Into::into).collect())
    }
}

impl TransactionWriter for DieselRepository {
    fn create_transaction(
        &self,
        new_transaction: &DomainNewTransaction,
    ) -> RepositoryResult<DomainTransaction> {
        use crate::schema::transaksi;

        let mut conn = self.conn()?;
        let insertable = DbNewTransaction::from(new_transaction);

        let created = diesel::insert_into(transaksi::table)
            .values(&insertable)
            .get_result::<DbTransaction>(&mut conn)?;

        Ok(created.into())
    }

    fn update_transaction(
        &self,
        id: &str,
        updates: &DomainUpdateTransaction,
    ) -> RepositoryResult<DomainTransaction> {
        use crate::schema::transaksi;

        if updates.is_empty() {
            return Err(RepositoryError::NothingToUpdate);
        }

        let mut conn = self.conn()?;
        let db_updates = DbUpdateTransaction::from(updates);

        let updated = diesel::update(transaksi::table.find(id))
            .set(&db_updates)
            .get_result::<DbTransaction>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_transaction(&self, id: &str) -> RepositoryResult<()> {
        use crate::schema::transaksi;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(transaksi::table.find(id)).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
