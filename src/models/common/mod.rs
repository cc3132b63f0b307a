pub mod action;
pub mod listing;
pub mod pagination;
pub mod response;

pub use action::ActionResult;
pub use listing::{ListQuery, Viewer};
pub use pagination::{ITEM_PER_PAGE, PaginatedResponse, PaginationInfo};
pub use response::ApiResponse;
