//! Integration tests for axe-crawler options resolution

mod config_file_recovery;
mod test_utils;
