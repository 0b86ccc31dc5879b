mod menu_image;

pub use menu_image::locate_image;
