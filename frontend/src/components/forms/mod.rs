pub mod takings_form;
