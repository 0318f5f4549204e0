//! Page module - the seam between estimators and the hosting page.
//!
//! Widgets only talk to the page through [`PageHandle`]. Hosts implement it
//! over their real document; [`MemoryPage`] keeps everything in memory for
//! tests and headless use.

mod memory_page;
mod page_traits;

pub use memory_page::MemoryPage;
pub use page_traits::PageHandle;
