mod drag;
mod property_tests;
