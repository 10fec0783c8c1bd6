//! Responsive grid placement and drag-and-drop insertion for block layouts.
//!
//! Blocks ("bricks") are positioned independently on a mobile and a desktop
//! column grid. This crate decides where a block may go and where a drag
//! would put it:
//!
//! - [`placement`] - collision detection, drop validation, mobile layout
//!   derivation and the live ghost preview, all in grid cells
//! - [`insertion`] - mapping pointer pixels to a container, reference
//!   sibling and side in the host's element tree
//! - [`session`] - per-frame orchestration of a drag
//!
//! Every entry point is a pure, total function of its inputs: failures that
//! happen during a drag are reported as `None`, never as panics.

pub mod config;
pub mod constants;
pub mod coords;
pub mod element_tree;
pub mod error;
pub mod insertion;
pub mod perf;
pub mod placement;
pub mod registry;
pub mod session;
pub mod spatial_index;
pub mod types;

pub use config::GridConfig;
pub use error::{LayoutError, LayoutResult};
pub use placement::Grid;
pub use types::{Block, BlockPosition, Breakpoint, GridPoint, GridRect, PerBreakpoint, SizeConstraints};
