//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestLayoutBuilder` - Builder pattern for creating layouts of blocks
//! - `PageBuilder` - Builder for element trees fed to the insertion resolver
//! - Constraint and rule fixtures

#![allow(dead_code)]

use brickgrid::element_tree::{ElementSpec, ElementTree};
use brickgrid::insertion::{Bounds, ElementId, FlowAxis, LayoutMode};
use brickgrid::registry::ContainmentTable;
use brickgrid::{Block, BlockPosition, Breakpoint, GridRect, PerBreakpoint, SizeConstraints};

// ============================================================================
// Tracing
// ============================================================================

/// Install a test subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ============================================================================
// TestLayoutBuilder - Builder pattern for creating layouts
// ============================================================================

/// Default mobile rect for blocks that don't care about mobile
pub const MOBILE_RECT: GridRect = GridRect::new(0, 0, 8, 4);

/// Create a `text` block with the given desktop rect.
pub fn block(id: &str, desktop: GridRect) -> Block {
    block_at(id, desktop, MOBILE_RECT)
}

/// Create a `text` block with explicit rects at both breakpoints.
pub fn block_at(id: &str, desktop: GridRect, mobile: GridRect) -> Block {
    Block::with_id(
        id,
        "text",
        PerBreakpoint::new(BlockPosition::new(mobile), BlockPosition::new(desktop)),
    )
}

/// Builder for layouts.
///
/// # Example
/// ```ignore
/// let layout = TestLayoutBuilder::new()
///     .with_block("a", GridRect::new(0, 0, 10, 5))
///     .with_manual_height("a", 7)
///     .build();
/// ```
#[derive(Default)]
pub struct TestLayoutBuilder {
    blocks: Vec<Block>,
}

impl TestLayoutBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_block(mut self, id: &str, desktop: GridRect) -> Self {
        self.blocks.push(block(id, desktop));
        self
    }

    pub fn with_block_at(mut self, id: &str, desktop: GridRect, mobile: GridRect) -> Self {
        self.blocks.push(block_at(id, desktop, mobile));
        self
    }

    /// Set a manual mobile height on an already added block.
    pub fn with_manual_height(mut self, id: &str, height: i32) -> Self {
        if let Some(block) = self.blocks.iter_mut().find(|b| b.id == id) {
            block.position.mobile.manual_height = Some(height);
        }
        self
    }

    pub fn build(self) -> Vec<Block> {
        self.blocks
    }
}

// ============================================================================
// Constraint and Rule Fixtures
// ============================================================================

/// Constraints with the given desktop minimum width and optional preferences.
pub fn desktop_constraints(
    min_width: i32,
    preferred_width: Option<i32>,
    preferred_height: Option<i32>,
) -> SizeConstraints {
    let mut constraints = SizeConstraints::new(PerBreakpoint::new(1, min_width), PerBreakpoint::new(1, 1));
    constraints.preferred_width[Breakpoint::Desktop] = preferred_width;
    constraints.preferred_height[Breakpoint::Desktop] = preferred_height;
    constraints
}

/// Rows and columns accept text and images; sections accept anything.
pub fn page_rules() -> ContainmentTable {
    ContainmentTable::new()
        .allow("row", "text")
        .allow("row", "image")
        .allow("column", "text")
        .allow("column", "image")
        .allow_any("section")
}

// ============================================================================
// PageBuilder - element trees for insertion tests
// ============================================================================

pub const VIEWPORT: Bounds = Bounds::new(0.0, 0.0, 1200.0, 900.0);

/// Thin wrapper over `ElementTree` that panics on bad parents, for tests.
pub struct PageBuilder {
    tree: ElementTree,
}

impl Default for PageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PageBuilder {
    pub fn new() -> Self {
        Self {
            tree: ElementTree::new(VIEWPORT),
        }
    }

    pub fn root(&self) -> ElementId {
        self.tree.root()
    }

    pub fn add(&mut self, parent: ElementId, spec: ElementSpec) -> ElementId {
        self.tree.append(parent, spec).expect("parent exists")
    }

    /// Flex row container tagged `row`.
    pub fn row(&mut self, parent: ElementId, bounds: Bounds) -> ElementId {
        self.add(
            parent,
            ElementSpec::container("row", bounds).layout(LayoutMode::Flex(FlowAxis::Row)),
        )
    }

    /// Container tagged `column` with no flex/grid layout.
    pub fn column(&mut self, parent: ElementId, bounds: Bounds) -> ElementId {
        self.add(parent, ElementSpec::container("column", bounds))
    }

    pub fn text(&mut self, parent: ElementId, bounds: Bounds) -> ElementId {
        self.add(parent, ElementSpec::block("text", bounds))
    }

    pub fn build(self) -> ElementTree {
        self.tree
    }
}
