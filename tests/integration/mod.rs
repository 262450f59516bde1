//! Integration test suite entry point

mod crawl_tests;
