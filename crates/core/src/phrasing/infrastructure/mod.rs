pub mod recognizer_response;
