//! Value-transfer ledger seam

use serde::{Deserialize, Serialize};

/// A single recorded unit-of-value movement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransferRecord {
    pub amount: u64,
    pub from: String,
    pub to: String,
}

/// Records the submission fee moving from proposer to the authority
/// contract. Append-only; the registry never reads it back.
pub trait ValueTransferLedger {
    fn record(&mut self, amount: u64, from: &str, to: &str);
}

/// In-memory transfer log
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemoryLedger {
    transfers: Vec<TransferRecord>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self {
            transfers: Vec::new(),
        }
    }

    pub fn transfers(&self) -> &[TransferRecord] {
        &self.transfers
    }
}

impl ValueTransferLedger for InMemoryLedger {
    fn record(&mut self, amount: u64, from: &str, to: &str) {
        self.transfers.push(TransferRecord {
            amount,
            from: from.to_string(),
            to: to.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_append_in_order() {
        let mut ledger = InMemoryLedger::new();
        ledger.record(1000, "ST1TEST", "ST2TEST");
        ledger.record(2000, "ST1TEST", "ST2TEST");

        assert_eq!(
            ledger.transfers(),
            [
                TransferRecord {
                    amount: 1000,
                    from: "ST1TEST".to_string(),
                    to: "ST2TEST".to_string(),
                },
                TransferRecord {
                    amount: 2000,
                    from: "ST1TEST".to_string(),
                    to: "ST2TEST".to_string(),
                },
            ]
        );
    }
}
