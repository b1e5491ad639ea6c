pub mod common;
pub mod u101_ask_question;
pub mod u102_upload_slides;
