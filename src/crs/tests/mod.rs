mod identifier_tests;
mod registry_tests;
mod reference_tests;
