pub mod record_files;
