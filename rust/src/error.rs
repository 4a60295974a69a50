//! Error handling and result types for BPlusTree operations.
//!
//! Ordinary tree operations cannot fail: absence is reported through `Option`
//! and `bool`. Errors only arise when constructing a tree with an unusable
//! order or when structural validation finds a broken invariant.

/// Error type for B+ tree operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BPlusTreeError {
    /// Invalid order specified.
    InvalidOrder(String),
    /// Node contents violate ordering or size constraints.
    DataIntegrityError(String),
    /// Links between nodes are inconsistent.
    CorruptedTree(String),
}

impl BPlusTreeError {
    /// Create an InvalidOrder error with context
    pub fn invalid_order(order: usize, min_required: usize) -> Self {
        Self::InvalidOrder(format!(
            "Order {} is invalid (minimum required: {})",
            order, min_required
        ))
    }

    /// Create an InvalidOrder error for an order whose node capacity overflows
    pub fn order_too_large(order: usize) -> Self {
        Self::InvalidOrder(format!(
            "Order {} is too large (node capacity overflows usize)",
            order
        ))
    }

    /// Create a DataIntegrityError with context
    pub fn data_integrity(context: &str, details: &str) -> Self {
        Self::DataIntegrityError(format!("{}: {}", context, details))
    }

    /// Create a CorruptedTree error with context
    pub fn corrupted_tree(component: &str, details: &str) -> Self {
        Self::CorruptedTree(format!("{} corruption: {}", component, details))
    }

    /// Check if this error is an order error
    pub fn is_order_error(&self) -> bool {
        matches!(self, Self::InvalidOrder(_))
    }
}

impl std::fmt::Display for BPlusTreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BPlusTreeError::InvalidOrder(msg) => write!(f, "Invalid order: {}", msg),
            BPlusTreeError::DataIntegrityError(msg) => write!(f, "Data integrity error: {}", msg),
            BPlusTreeError::CorruptedTree(msg) => write!(f, "Corrupted tree: {}", msg),
        }
    }
}

impl std::error::Error for BPlusTreeError {}

/// Internal result type for tree operations
pub(crate) type TreeResult<T> = Result<T, BPlusTreeError>;

/// Public result type for tree operations that may fail
pub type BTreeResult<T> = Result<T, BPlusTreeError>;

/// Result type for tree construction
pub type InitResult<T> = Result<T, BPlusTreeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = BPlusTreeError::invalid_order(0, 1);
        assert!(err.is_order_error());
        assert_eq!(
            err.to_string(),
            "Invalid order: Order 0 is invalid (minimum required: 1)"
        );

        let err = BPlusTreeError::data_integrity("Leaf 3", "keys not ascending");
        assert!(!err.is_order_error());
        assert_eq!(err.to_string(), "Data integrity error: Leaf 3: keys not ascending");

        let err = BPlusTreeError::corrupted_tree("Leaf chain", "prev link broken");
        assert_eq!(
            err.to_string(),
            "Corrupted tree: Leaf chain corruption: prev link broken"
        );
    }
}
