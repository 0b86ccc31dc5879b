mod daily_menu;
mod menu_section;

pub use daily_menu::SectionMenu;
pub use menu_section::MenuSection;
