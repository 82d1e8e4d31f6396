//! The transaction viewer: the page, its fragment endpoints and the views
//! they render.

mod filter_endpoint;
mod load_more_endpoint;
mod models;
mod page;
mod view;

pub use filter_endpoint::select_employee_endpoint;
pub use load_more_endpoint::load_more_endpoint;
pub use page::get_viewer_page;
