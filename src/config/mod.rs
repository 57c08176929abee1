//! Configuration for the `QueryCombiner`.

/// Configuration for the `QueryCombiner`
#[derive(Debug, Clone)]
pub struct CombinerConfig {
    /// Id assigned to the synthetic combined root node
    pub combined_root_id: String,
    /// Emit a warning for every node or root skipped over a
    /// data-integrity inconsistency
    pub log_integrity_warnings: bool,
    /// Track visited node ids during the walk and refuse to revisit,
    /// guarding against cyclic input the repository contract forbids but
    /// cannot enforce
    pub track_visited: bool,
}

impl Default for CombinerConfig {
    fn default() -> Self {
        Self {
            combined_root_id: "combined".to_string(),
            log_integrity_warnings: true,
            track_visited: true,
        }
    }
}
