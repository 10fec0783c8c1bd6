//! Block type registry and containment rules.
//!
//! Block types are plain strings on the wire. The registry maps each type to
//! its schema once, when a layout or manifest is loaded, so the drag hot
//! path only does a hash lookup. Schemas are validated on registration; a
//! malformed schema is a bug upstream and is reported as an error rather
//! than surfacing mid-drag.

use crate::constants::ANY_CHILD;
use crate::error::{LayoutError, LayoutResult};
use crate::types::{Block, SizeConstraints};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

// ============================================================================
// Containment
// ============================================================================

/// Policy deciding which block types may be nested in which containers
pub trait ContainmentRules {
    fn can_contain(&self, container_tag: &str, child_tag: &str) -> bool;
}

impl<F> ContainmentRules for F
where
    F: Fn(&str, &str) -> bool,
{
    fn can_contain(&self, container_tag: &str, child_tag: &str) -> bool {
        self(container_tag, child_tag)
    }
}

/// Table of allowed children per container tag.
///
/// Containers missing from the table accept nothing. A `"*"` entry accepts
/// any child type.
///
/// ```json
/// { "section": ["text", "image"], "column": ["*"] }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContainmentTable {
    rules: HashMap<String, HashSet<String>>,
}

impl ContainmentTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> LayoutResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Allow `child_tag` inside `container_tag`
    pub fn allow(mut self, container_tag: impl Into<String>, child_tag: impl Into<String>) -> Self {
        self.rules
            .entry(container_tag.into())
            .or_default()
            .insert(child_tag.into());
        self
    }

    /// Allow every child type inside `container_tag`
    pub fn allow_any(self, container_tag: impl Into<String>) -> Self {
        self.allow(container_tag, ANY_CHILD)
    }
}

impl ContainmentRules for ContainmentTable {
    fn can_contain(&self, container_tag: &str, child_tag: &str) -> bool {
        self.rules
            .get(container_tag)
            .is_some_and(|allowed| allowed.contains(ANY_CHILD) || allowed.contains(child_tag))
    }
}

// ============================================================================
// Block Schemas
// ============================================================================

/// What the engine needs to know about a block type
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockSchema {
    pub constraints: SizeConstraints,
    /// Blocks of this type accept nested blocks
    #[serde(default)]
    pub container: bool,
}

impl BlockSchema {
    pub fn new(constraints: SizeConstraints) -> Self {
        Self {
            constraints,
            container: false,
        }
    }

    pub fn container(mut self) -> Self {
        self.container = true;
        self
    }
}

#[derive(Clone, Debug, Default)]
pub struct BlockRegistry {
    schemas: HashMap<String, BlockSchema>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a manifest mapping block type to schema
    pub fn from_json(json: &str) -> LayoutResult<Self> {
        let schemas: HashMap<String, BlockSchema> = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for (block_type, schema) in schemas {
            registry.register(block_type, schema)?;
        }
        debug!(types = registry.len(), "loaded block registry");
        Ok(registry)
    }

    /// Register or replace the schema for `block_type`
    pub fn register(&mut self, block_type: impl Into<String>, schema: BlockSchema) -> LayoutResult<()> {
        let block_type = block_type.into();
        if let Err(err) = schema.constraints.validate(&block_type) {
            warn!(%block_type, %err, "rejected block schema");
            return Err(err);
        }
        self.schemas.insert(block_type, schema);
        Ok(())
    }

    pub fn schema(&self, block_type: &str) -> Option<&BlockSchema> {
        self.schemas.get(block_type)
    }

    pub fn constraints(&self, block_type: &str) -> LayoutResult<&SizeConstraints> {
        self.schema(block_type)
            .map(|schema| &schema.constraints)
            .ok_or_else(|| LayoutError::UnknownBlockType(block_type.to_string()))
    }

    pub fn is_container(&self, block_type: &str) -> bool {
        self.schema(block_type).is_some_and(|schema| schema.container)
    }

    /// Check every block in `layout` has a registered type
    pub fn check_layout(&self, layout: &[Block]) -> LayoutResult<()> {
        match layout.iter().find(|block| self.schema(&block.block_type).is_none()) {
            Some(block) => Err(LayoutError::UnknownBlockType(block.block_type.clone())),
            None => Ok(()),
        }
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
