pub mod use_entry_form;
pub mod use_store_directory;
pub mod use_takings_query;
pub mod use_takings_upload;
