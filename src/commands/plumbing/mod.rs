pub mod cat_file;
