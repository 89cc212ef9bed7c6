/// Entity CRUD and foreign-key tests against a live database
pub mod entity_tests;
