pub mod anchor_link;
pub mod fade_in;
pub mod navbar;
pub mod waitlist_form;
