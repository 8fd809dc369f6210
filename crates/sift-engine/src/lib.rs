//! List Query Engine
//!
//! The engine turns a record collection and a caller-owned [`Query`] into
//! the visible page of a list view:
//!
//! ```text
//! Collection + Query
//!        │
//!        ▼
//! ┌──────────────┐
//! │   validate    │  page/page_size positive, sort key known
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐
//! │ stable sort   │  direction reverses the comparison, not the order
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐
//! │    filter     │  search text + exact-match field filters
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐
//! │   paginate    │  slice [first_index, last_index)
//! └──────┬───────┘
//!        ▼
//!    PageResult
//! ```
//!
//! Every step is a synchronous array transform; the engine holds no state
//! of its own. [`ListView`] threads the mutable parts (query + selection)
//! explicitly for callers that want a per-view session.
//!
//! [`Query`]: sift_core::Query

mod page;
mod pipeline;
mod selection;
mod view;

pub use page::PageResult;
pub use pipeline::apply;
pub use selection::{is_all_visible_selected, toggle_one, toggle_select_all};
pub use view::ListView;
