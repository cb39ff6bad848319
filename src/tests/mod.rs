mod cli_context_tests;
mod navigation_tests;
