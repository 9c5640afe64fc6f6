pub mod quiz_examples;
