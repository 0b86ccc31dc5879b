mod error;
mod gallery_page;
mod menu_page;
mod normalize;
mod selectors;
mod text;
mod tree;

pub use error::Error;
pub use gallery_page::locate_image;
pub use menu_page::{MenuSection, SectionMenu};
pub use normalize::normalize;
