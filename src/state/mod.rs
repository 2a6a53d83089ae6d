//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`navigation`, `products`, `detail`, `chat`) so
//! pages and components depend on small focused models. Each model is plain
//! data with pure transitions; `app` wraps them in `RwSignal`s.

pub mod chat;
pub mod detail;
pub mod navigation;
pub mod products;
