pub mod display_entry;
pub mod entry_page;
pub mod excel_uploader;
pub mod forms;
pub mod header;
pub mod home;
pub mod store_select;
pub mod view_page;
