mod utils;

mod debounce_tests;
mod session_tests;
