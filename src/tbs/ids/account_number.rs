use std::fmt;

/// Sequential, 1-based account number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountNumber(pub usize);

impl AccountNumber {
    /// Position of the account in the bank's registry
    pub(crate) fn index(&self) -> Option<usize> {
        return self.0.checked_sub(1);
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}
