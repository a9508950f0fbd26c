pub mod split_text;
