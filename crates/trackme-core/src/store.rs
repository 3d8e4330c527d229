//! Collaborator seam toward the transaction store.

use trackme_domain::Transaction;

use crate::CoreError;

/// Where the generation pass hands off synthesized transactions. Implemented
/// by the surrounding application over whatever store it uses.
pub trait TransactionSink {
    fn append(&mut self, transaction: Transaction) -> Result<(), CoreError>;
}

/// In-memory sink used by tests and simple embedders.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub transactions: Vec<Transaction>,
}

impl TransactionSink for MemorySink {
    fn append(&mut self, transaction: Transaction) -> Result<(), CoreError> {
        self.transactions.push(transaction);
        Ok(())
    }
}
