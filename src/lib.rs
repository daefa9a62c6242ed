// Library exports for the Bullseye engagement visualization
pub mod classifier;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod export;
pub mod generator;
pub mod layout;
pub mod render;
pub mod roster;
pub mod types;

// Re-export key types for convenience
pub use classifier::{EngagementClassifier, Horizons};
pub use config::BullseyeConfig;
pub use coordinator::{CoordinatorEvent, Decoration, DisplayMode, RingStyle, ViewCoordinator};
pub use error::{BullseyeError, Result};
pub use generator::RosterGenerator;
pub use layout::{LayoutEngine, Placement, ViewMode};
pub use render::{RenderFrame, RenderedEntity, SvgRenderer};
pub use roster::Roster;
pub use types::{
    CoarseBand, EmployeeProfile, EmployeeRecord, EngagementLevel, Location, Position, UsageFacts,
};
