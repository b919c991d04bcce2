//! Registry module for feature management.
//!
//! This module provides a builder for registering features and a frozen
//! registry for immutable, thread-safe dispatch.

use quip_core::Feature;

// ============================================================================
// RegistryBuilder - for constructing registries
// ============================================================================

/// Builder for constructing a [`Registry`].
///
/// Features are kept in insertion order. Call [`build`](Self::build) once
/// registration is complete to sort them and obtain an immutable
/// `Registry`.
///
/// # Example
/// ```ignore
/// let registry = RegistryBuilder::new()
///     .add(greeting)
///     .add(farewell)
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    features: Vec<Feature>,
}

impl RegistryBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            features: Vec::new(),
        }
    }

    /// Append a feature.
    pub fn add(mut self, feature: Feature) -> Self {
        self.add_mut(feature);
        self
    }

    /// Append a feature (mutable version).
    ///
    /// No deduplication: adding the same feature twice registers it twice.
    pub fn add_mut(&mut self, feature: Feature) {
        self.features.push(feature);
    }

    /// Sort features by description, ascending and stable.
    ///
    /// Plain byte order: uppercase sorts before lowercase and the empty
    /// description sorts first.
    pub fn sort_by_description(&mut self) {
        self.features
            .sort_by(|a, b| a.description().cmp(b.description()));
    }

    /// Features registered so far, in insertion order.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Get the number of registered features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Check if the builder has no features.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Build the immutable Registry.
    ///
    /// This applies the one-time sort by description and returns a frozen
    /// registry that can be shared across threads.
    pub fn build(mut self) -> Registry {
        self.sort_by_description();
        Registry {
            features: self.features,
        }
    }
}

// ============================================================================
// Registry - immutable, thread-safe feature storage
// ============================================================================

/// An immutable, thread-safe, ordered set of features.
///
/// Created by [`RegistryBuilder::build`]. Nothing can be added or removed
/// afterwards, so concurrent dispatches only ever read it.
#[derive(Debug, Default)]
pub struct Registry {
    features: Vec<Feature>,
}

impl Registry {
    /// Iterate over all features in dispatch order.
    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter()
    }

    /// Descriptions of the features listed by help, in dispatch order.
    pub fn descriptions(&self) -> impl Iterator<Item = &str> {
        self.features
            .iter()
            .filter(|f| f.is_visible())
            .map(|f| f.description())
    }

    /// Get the number of registered features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// All features as a slice.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }
}
