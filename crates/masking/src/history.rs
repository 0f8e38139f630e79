//! Bounded undo history of edited image versions
//!
//! Each successful edit pushes the pre-edit image so the user can step
//! back. The history is in-memory and bounded: past the configured depth
//! the oldest version is dropped.

use tracing::debug;

/// One saved image version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageVersion {
    /// Encoded image bytes as handed off (PNG or JPEG)
    pub image_data: Vec<u8>,
    /// Number of edits applied when this version was current
    pub edit_count: u32,
    /// Capture time in milliseconds since the Unix epoch
    pub timestamp_ms: u64,
}

/// Outcome of an undo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoOutcome {
    /// The restored version
    pub version: ImageVersion,
    /// True if further undo steps remain
    pub can_undo: bool,
}

/// Bounded stack of image versions (most recent at the end)
pub struct EditHistory {
    versions: Vec<ImageVersion>,
    max_versions: usize,
}

impl EditHistory {
    /// Create a history keeping at most `max_versions` entries
    pub fn new(max_versions: usize) -> Self {
        Self {
            versions: Vec::new(),
            max_versions: max_versions.max(1),
        }
    }

    /// Save a version before an edit replaces it
    ///
    /// Beyond capacity the oldest version is dropped.
    pub fn push(&mut self, image_data: Vec<u8>, edit_count: u32) {
        let timestamp_ms = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        self.versions.push(ImageVersion {
            image_data,
            edit_count,
            timestamp_ms,
        });
        while self.versions.len() > self.max_versions {
            self.versions.remove(0);
        }
    }

    /// Pop and return the most recent version
    ///
    /// Returns None when no history is available.
    pub fn undo(&mut self) -> Option<UndoOutcome> {
        let Some(version) = self.versions.pop() else {
            debug!("EditHistory: undo requested with no entries");
            return None;
        };
        Some(UndoOutcome {
            version,
            can_undo: !self.versions.is_empty(),
        })
    }

    /// True if at least one version can be restored
    pub fn can_undo(&self) -> bool {
        !self.versions.is_empty()
    }

    /// Number of stored versions
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// True if no versions are stored
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new(config::DEFAULT_HISTORY_DEPTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_undo_lifo() {
        let mut history = EditHistory::new(10);
        history.push(vec![1], 0);
        history.push(vec![2], 1);

        let outcome = history.undo().unwrap();
        assert_eq!(outcome.version.image_data, vec![2]);
        assert_eq!(outcome.version.edit_count, 1);
        assert!(outcome.can_undo);

        let outcome = history.undo().unwrap();
        assert_eq!(outcome.version.image_data, vec![1]);
        assert!(!outcome.can_undo);

        assert!(history.undo().is_none());
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut history = EditHistory::new(3);
        for i in 0..5u8 {
            history.push(vec![i], i as u32);
        }
        assert_eq!(history.len(), 3);

        // Oldest surviving entry is version 2
        let mut last = None;
        while let Some(outcome) = history.undo() {
            last = Some(outcome.version.edit_count);
        }
        assert_eq!(last, Some(2));
    }

    #[test]
    fn test_default_depth() {
        let mut history = EditHistory::default();
        for i in 0..20u8 {
            history.push(vec![i], i as u32);
        }
        assert_eq!(history.len(), config::DEFAULT_HISTORY_DEPTH);
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let mut history = EditHistory::new(0);
        history.push(vec![7], 0);
        assert_eq!(history.len(), 1);
        assert!(history.can_undo());
    }
}
