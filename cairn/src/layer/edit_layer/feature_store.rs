/// Feature storage of an [`EditLayer`](super::EditLayer).
///
/// Every change to the store is recorded as a [`FeatureUpdate`], so that whoever displays the features can apply the
/// changes instead of redrawing the whole set. Mutable access goes through [`FeatureContainerMut`], which records an
/// update the first time the feature is accessed with [`AsMut::as_mut`].
#[derive(Debug)]
pub struct FeatureStore<F> {
    features: Vec<F>,
    pending_updates: Vec<FeatureUpdate>,
}

impl<F> Default for FeatureStore<F> {
    fn default() -> Self {
        Self {
            features: vec![],
            pending_updates: vec![],
        }
    }
}

/// Change made to a [`FeatureStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureUpdate {
    /// A feature was added at the given index.
    Insert {
        /// Index of the new feature.
        feature_index: usize,
    },
    /// A feature at the given index was modified.
    Update {
        /// Index of the modified feature.
        feature_index: usize,
    },
    /// A feature at the given index was removed. Features after it moved one index down.
    Remove {
        /// Index the feature had.
        feature_index: usize,
    },
    /// All features were removed.
    Clear,
}

/// Mutable container for a feature in a [`FeatureStore`].
///
/// Reference to the container can be converted into a reference to the feature using [AsRef] and [AsMut] traits.
pub struct FeatureContainerMut<'a, F> {
    feature: &'a mut F,
    feature_index: usize,
    is_updated: bool,
    pending_updates: &'a mut Vec<FeatureUpdate>,
}

impl<F> FeatureContainerMut<'_, F> {
    /// Index of the feature in the store.
    pub fn index(&self) -> usize {
        self.feature_index
    }
}

impl<F> AsRef<F> for FeatureContainerMut<'_, F> {
    fn as_ref(&self) -> &F {
        &*self.feature
    }
}

impl<F> AsMut<F> for FeatureContainerMut<'_, F> {
    fn as_mut(&mut self) -> &mut F {
        if !self.is_updated {
            self.pending_updates.push(FeatureUpdate::Update {
                feature_index: self.feature_index,
            });
        }

        self.is_updated = true;
        &mut *self.feature
    }
}

impl<F> FeatureStore<F> {
    /// Creates a new store with the given feature set.
    pub fn new(features: impl Iterator<Item = F>) -> Self {
        let mut store = Self::default();
        store.extend(features);
        store
    }

    /// Number of features in the store.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns true if the store has no features.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Adds a new feature to the end of the store.
    pub fn insert(&mut self, feature: F) {
        let feature_index = self.features.len();
        self.features.push(feature);
        self.pending_updates
            .push(FeatureUpdate::Insert { feature_index });
    }

    /// Adds all the features to the end of the store.
    pub fn extend(&mut self, features: impl IntoIterator<Item = F>) {
        for feature in features {
            self.insert(feature);
        }
    }

    /// Returns a reference to the feature. Returns `None` if a feature with the given `index` does not exist.
    pub fn get(&self, index: usize) -> Option<&F> {
        self.features.get(index)
    }

    /// Returns a mutable container of the feature. Returns `None` if a feature with the given `index` does not exist.
    pub fn get_mut(&mut self, index: usize) -> Option<FeatureContainerMut<'_, F>> {
        self.features.get_mut(index).map(|feature| FeatureContainerMut {
            feature,
            feature_index: index,
            is_updated: false,
            pending_updates: &mut self.pending_updates,
        })
    }

    /// Removes the feature with the given index returning it. Returns `None` if there is no such feature.
    pub fn remove(&mut self, index: usize) -> Option<F> {
        if index >= self.features.len() {
            return None;
        }

        let feature = self.features.remove(index);
        self.pending_updates.push(FeatureUpdate::Remove {
            feature_index: index,
        });
        Some(feature)
    }

    /// Removes all features.
    pub fn clear(&mut self) {
        self.features.clear();
        self.pending_updates.push(FeatureUpdate::Clear);
    }

    /// Iterates over the features.
    pub fn iter(&self) -> impl Iterator<Item = &F> {
        self.features.iter()
    }

    /// Returns the changes made since the last call, oldest first.
    pub fn drain_updates(&mut self) -> Vec<FeatureUpdate> {
        std::mem::take(&mut self.pending_updates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn feature_editing() {
        let mut store = FeatureStore::default();

        store.insert(String::from("F1"));
        let pending_updates = store.drain_updates();
        assert_eq!(pending_updates.len(), 1);
        assert_matches!(
            pending_updates[0],
            FeatureUpdate::Insert { feature_index: 0 }
        );

        let mut feature = store.get_mut(0).expect("no feature");
        assert_eq!(feature.as_ref(), "F1");
        feature.as_mut().push('2');
        feature.as_mut().push('3');
        let pending_updates = store.drain_updates();
        assert_eq!(pending_updates, vec![FeatureUpdate::Update { feature_index: 0 }]);

        assert_eq!(store.get(0).expect("no feature"), "F123");
    }

    #[test]
    fn read_access_is_not_an_update() {
        let mut store = FeatureStore::new(["a", "b"].into_iter());
        store.drain_updates();

        let feature = store.get_mut(1).expect("no feature");
        assert_eq!(feature.index(), 1);
        assert_eq!(*feature.as_ref(), "b");
        assert!(store.drain_updates().is_empty());
    }

    #[test]
    fn removing_and_clearing() {
        let mut store = FeatureStore::new(1..=3);
        assert_eq!(store.remove(5), None);
        assert_eq!(store.remove(0), Some(1));
        assert_eq!(store.iter().copied().collect::<Vec<_>>(), vec![2, 3]);

        store.clear();
        assert!(store.is_empty());
        assert_eq!(
            store.drain_updates(),
            vec![
                FeatureUpdate::Insert { feature_index: 0 },
                FeatureUpdate::Insert { feature_index: 1 },
                FeatureUpdate::Insert { feature_index: 2 },
                FeatureUpdate::Remove { feature_index: 0 },
                FeatureUpdate::Clear,
            ]
        );
    }
}
