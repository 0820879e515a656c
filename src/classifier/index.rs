//! Labeled descriptor storage built during training.
use crate::lbp::Descriptor;

/// Parallel arrays of training descriptors and their labels.
///
/// Entries keep dataset order, so nearest-neighbor ties resolve the same way
/// across runs. Every descriptor must have the same length as the first one
/// pushed.
#[derive(Clone, Debug, Default)]
pub struct TrainingIndex {
    descriptors: Vec<Descriptor>,
    labels: Vec<u32>,
}

impl TrainingIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        TrainingIndex {
            descriptors: Vec::with_capacity(capacity),
            labels: Vec::with_capacity(capacity),
        }
    }

    /// Appends a descriptor/label pair.
    pub fn push(&mut self, descriptor: Descriptor, label: u32) {
        if let Some(first) = self.descriptors.first() {
            assert_eq!(
                first.len(),
                descriptor.len(),
                "descriptor length {} does not match the index length {}",
                descriptor.len(),
                first.len()
            );
        }
        self.descriptors.push(descriptor);
        self.labels.push(label);
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn descriptors(&self) -> &[Descriptor] {
        &self.descriptors
    }

    pub fn labels(&self) -> &[u32] {
        &self.labels
    }

    /// Label of the entry at `index`.
    pub fn label(&self, index: usize) -> u32 {
        self.labels[index]
    }
}

#[cfg(test)]
mod tests {
    use super::TrainingIndex;

    #[test]
    fn push_keeps_descriptor_label_pairing() {
        let mut index = TrainingIndex::new();
        index.push(vec![1.0, 0.0], 4);
        index.push(vec![0.0, 1.0], 7);
        assert_eq!(index.len(), 2);
        assert!(!index.is_empty());
        assert_eq!(index.label(0), 4);
        assert_eq!(index.label(1), 7);
        assert_eq!(index.descriptors()[1], vec![0.0, 1.0]);
        assert_eq!(index.labels(), &[4, 7]);
    }

    #[test]
    #[should_panic(expected = "length")]
    fn mismatched_descriptor_length_is_rejected() {
        let mut index = TrainingIndex::new();
        index.push(vec![1.0, 0.0], 0);
        index.push(vec![1.0, 0.0, 0.0], 1);
    }
}
