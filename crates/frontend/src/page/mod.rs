//! Browser-independent page state.
//!
//! Nothing in here touches `web_sys`; DOM effects go through [`PageHost`].

pub mod banner;
pub mod field_toggle;
pub mod host;
pub mod modal;
pub mod nav_sync;
pub mod state;

pub use banner::{Banner, BannerEvent, BannerId, BannerPhase, BannerSchedule};
pub use field_toggle::{AdminField, FieldToggle};
pub use host::PageHost;
pub use modal::{ModalController, ModalState, ModalTrigger};
pub use nav_sync::{NavSync, PageBounds, PageId, ViewportMetrics};
pub use state::PageState;
