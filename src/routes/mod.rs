mod health_check;
mod index;
mod newsletter_by_id;
mod newsletters;
mod not_found;

pub use health_check::health_check;
pub use index::index;
pub use newsletter_by_id::{delete_newsletter, get_newsletter, patch_newsletter};
pub use newsletters::{create_newsletter, list_newsletters};
pub use not_found::not_found;
