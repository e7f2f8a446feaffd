//! Shared UI primitive library for the routed site shell.
//!
//! The crate owns the polymorphic button primitive, the centralized icon
//! API, the class-token composition utility, and the stable `data-ui-*`
//! DOM contract consumed by the site's CSS layers. Route views compose
//! these primitives instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod button;
mod class;
mod icon;

pub use button::{button_class, Button, ButtonSize, ButtonVariant, SlotError};
pub use class::class_list;
pub use icon::{Icon, IconName, IconSize};

/// Convenience imports for crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        button_class, class_list, Button, ButtonSize, ButtonVariant, Icon, IconName, IconSize,
        SlotError,
    };
}
