mod common;
mod concurrency_tests;
