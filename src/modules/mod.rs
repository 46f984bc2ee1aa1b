pub mod contact;
pub mod contact_form;
pub mod content;
